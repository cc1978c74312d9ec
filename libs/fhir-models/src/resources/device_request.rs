//! DeviceRequest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/DeviceRequest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{RequestPriority, RequestStatus};
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference, Timing,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Represents a request for a patient to employ a medical device. The device may be an implantable
/// device, or an external assistive device, such as a walker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRequest {
    /// Resource type - always "DeviceRequest"
    #[serde(default)]
    pub resource_type: ResourceTag<DeviceRequest>,

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

    /// External Request identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// What request fulfills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// What request replaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_request: Option<Vec<Reference>>,

    /// Identifier of composite request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,

    /// The status of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,

    /// proposal | plan | original-order | encoded | reflex-order.
    pub intent: CodeableConcept,

    /// None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,

    /// Device requested.
    #[serde(flatten, with = "crate::choice::required")]
    pub code: DeviceRequestCode,

    /// Focus of request.
    pub subject: Reference,

    /// Encounter or Episode motivating request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Desired time or schedule for use.
    #[serde(flatten, with = "crate::choice::optional")]
    pub occurrence: Option<DeviceRequestOccurrence>,

    /// When recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Who/what is requesting diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<DeviceRequestRequester>,

    /// Fille role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer_type: Option<CodeableConcept>,

    /// Requested Filler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Reference>,

    /// Coded Reason for request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Linked Reason for request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Additional clinical information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_info: Option<Vec<Reference>>,

    /// Notes or comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Request provenance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_history: Option<Vec<Reference>>,
}

choice_type! {
    /// Device requested.
    pub enum DeviceRequestCode("code[x]") {
        Reference(Reference) = "codeReference",
        CodeableConcept(CodeableConcept) = "codeCodeableConcept",
    }
}

choice_type! {
    /// Desired time or schedule for use.
    pub enum DeviceRequestOccurrence("occurrence[x]") {
        DateTime(DateTime) = "occurrenceDateTime",
        Period(Period) = "occurrencePeriod",
        Timing(Timing) = "occurrenceTiming",
    }
}

/// The individual who initiated the request and has responsibility for its activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRequestRequester {
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

impl_domain_resource!(DeviceRequest);
impl_backbone_element!(DeviceRequestRequester);
