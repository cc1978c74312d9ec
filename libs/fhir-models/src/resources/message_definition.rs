//! MessageDefinition resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/MessageDefinition

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{MessageSignificanceCategory, PublicationStatus, ResourceType};
use crate::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative, Reference,
    UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Defines the characteristics of a message that can be shared between systems, including the type
/// of event that initiates the message, the content to be transmitted and what response(s), if any,
/// are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDefinition {
    /// Resource type - always "MessageDefinition"
    #[serde(default)]
    pub resource_type: ResourceTag<MessageDefinition>,

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

    /// Logical URI to reference this message definition (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the message definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Business version of the message definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this message definition (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this message definition (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this message definition. Enables tracking the life-cycle of the content.
    pub status: PublicationStatus,

    /// For testing purposes, not real usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    /// Date this was last changed.
    pub date: DateTime,

    /// Name of the publisher (organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Natural language description of the message definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for message definition (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this message definition is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Definition this one is based on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Reference>,

    /// Protocol/workflow this is part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<Reference>>,

    /// Takes the place of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<Vec<Reference>>,

    /// Event type.
    pub event: Coding,

    /// The impact of the content of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MessageSignificanceCategory>,

    /// Resource(s) that are the subject of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Vec<MessageDefinitionFocus>>,

    /// Is a response required?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_required: Option<bool>,

    /// Responses to this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_response: Option<Vec<MessageDefinitionAllowedResponse>>,
}

/// Indicates what types of messages may be sent as an application-level response to this message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDefinitionAllowedResponse {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reference to allowed message definition response.
    pub message: Reference,

    /// When should this response be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
}

/// Identifies the resource (or resources) that are being addressed by the event. For example, the
/// Encounter for an admit message or two Account records for a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDefinitionFocus {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The kind of resource that must be the focus for this message.
    pub code: ResourceType,

    /// Profile that must be adhered to by focus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Reference>,

    /// Minimum number of focuses of this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,

    /// Maximum number of focuses of this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl_domain_resource!(MessageDefinition);
impl_backbone_element!(MessageDefinitionAllowedResponse, MessageDefinitionFocus);
