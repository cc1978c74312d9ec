//! MessageHeader resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/MessageHeader

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Coding, ContactPoint, Extension, Meta, Narrative, Reference,
};
use crate::primitives::Instant;
use crate::resources::Resource;

/// The header for a message exchange that is either requesting or responding to an action. The
/// reference(s) that are the subject of the action as well as other information related to the
/// action are typically transmitted in a bundle in which the MessageHeader resource instance is the
/// first resource in the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeader {
    /// Resource type - always "MessageHeader"
    #[serde(default)]
    pub resource_type: ResourceTag<MessageHeader>,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Metadata about the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// A set of rules under which this content was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    /// Language of the resource content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Text summary of the resource, for human interpretation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// Contained, inline Resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contained: Option<Vec<Resource>>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code for the event this message represents.
    pub event: Coding,

    /// Message destination application(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<MessageHeaderDestination>>,

    /// Intended "real-world" recipient for the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Reference>,

    /// Real world sender of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Reference>,

    /// Time that the message was sent.
    pub timestamp: Instant,

    /// The source of the data entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterer: Option<Reference>,

    /// The source of the decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,

    /// Message source application.
    pub source: MessageHeaderSource,

    /// Final responsibility for event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<Reference>,

    /// Cause of event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,

    /// If this is a reply to prior message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<MessageHeaderResponse>,

    /// The actual content of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Vec<Reference>>,
}

/// The destination application which the message is intended for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeaderDestination {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name of system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Particular delivery destination within the destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Reference>,

    /// Actual destination address or id.
    pub endpoint: String,
}

/// Information about the message that this message is a response to. Only present if this message
/// is a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeaderResponse {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Id of original message.
    pub identifier: String,

    /// Code that identifies the type of response to the message - whether it was successful or not,
    /// and whether it should be resent or not.
    pub code: ResponseType,

    /// Specific list of hints/warnings/errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Reference>,
}

/// The source application from which this message originated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeaderSource {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name of system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name of software running the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,

    /// Version of software running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Human contact for problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactPoint>,

    /// Actual message source address or id.
    pub endpoint: String,
}

/// The kind of response to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseType {
    Ok,
    TransientError,
    FatalError,
}

impl_domain_resource!(MessageHeader);
impl_backbone_element!(MessageHeaderDestination, MessageHeaderResponse, MessageHeaderSource);
