//! CommunicationRequest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/CommunicationRequest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{RequestPriority, RequestStatus};
use crate::datatypes::{
    Annotation, Attachment, CodeableConcept, Extension, Identifier, Meta, Narrative, Period,
    Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A request to convey information; e.g. the CDS system proposes that an alert be sent to a
/// responsible provider, the CDS system proposes that the public health agency be notified about a
/// reportable condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationRequest {
    /// Resource type - always "CommunicationRequest"
    #[serde(default)]
    pub resource_type: ResourceTag<CommunicationRequest>,

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

    /// Fulfills plan or proposal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Request(s) replaced by this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<Vec<Reference>>,

    /// Composite request this is part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,

    /// The status of the proposal or order.
    pub status: RequestStatus,

    /// Message category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Characterizes how quickly the proposed act must be initiated. Includes concepts such as
    /// stat, urgent, routine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,

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

    /// Message payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<CommunicationRequestPayload>>,

    /// When scheduled.
    #[serde(flatten, with = "crate::choice::optional")]
    pub occurrence: Option<CommunicationRequestOccurrence>,

    /// When request transitioned to being actionable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Message sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Reference>,

    /// Who/what is requesting service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<CommunicationRequestRequester>,

    /// Why is communication needed?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Why is communication needed?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Comments made about communication request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

choice_type! {
    /// When scheduled.
    pub enum CommunicationRequestOccurrence("occurrence[x]") {
        DateTime(DateTime) = "occurrenceDateTime",
        Period(Period) = "occurrencePeriod",
    }
}

/// Text, attachment(s), or resource(s) to be communicated to the recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationRequestPayload {
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
    pub content: CommunicationRequestPayloadContent,
}

choice_type! {
    /// Message part content.
    pub enum CommunicationRequestPayloadContent("content[x]") {
        String(String) = "contentString",
        Attachment(Attachment) = "contentAttachment",
        Reference(Reference) = "contentReference",
    }
}

/// The individual who initiated the request and has responsibility for its activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationRequestRequester {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Individual making the request.
    pub agent: Reference,

    /// Organization agent is acting for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
}

impl_domain_resource!(CommunicationRequest);
impl_backbone_element!(CommunicationRequestPayload, CommunicationRequestRequester);
