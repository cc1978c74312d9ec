//! Communication resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Communication

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::EventStatus;
use crate::datatypes::{
    Annotation, Attachment, CodeableConcept, Extension, Identifier, Meta, Narrative, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// An occurrence of information being transmitted; e.g. an alert that was sent to a responsible
/// provider, a public health agency was notified about a reportable condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    /// Resource type - always "Communication"
    #[serde(default)]
    pub resource_type: ResourceTag<Communication>,

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

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Instantiates protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// Request fulfilled by this communication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Part of this action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// The status of the transmission.
    pub status: EventStatus,

    /// Communication did not occur.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_done: Option<bool>,

    /// Why communication did not occur.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_done_reason: Option<CodeableConcept>,

    /// Message category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// A channel of communication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Vec<CodeableConcept>>,

    /// Focus of message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Message recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Vec<Reference>>,

    /// Focal resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Vec<Reference>>,

    /// Encounter or episode leading to message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// When sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent: Option<DateTime>,

    /// When received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<DateTime>,

    /// Message sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Reference>,

    /// Indication for message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Why was communication done?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Message payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<CommunicationPayload>>,

    /// Comments made about the communication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

/// Text, attachment(s), or resource(s) that was communicated to the recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationPayload {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Message part content.
    #[serde(flatten, with = "crate::choice::required")]
    pub content: CommunicationPayloadContent,
}

choice_type! {
    /// Message part content.
    pub enum CommunicationPayloadContent("content[x]") {
        String(String) = "contentString",
        Attachment(Attachment) = "contentAttachment",
        Reference(Reference) = "contentReference",
    }
}

impl_domain_resource!(Communication);
impl_backbone_element!(CommunicationPayload);
