//! ReferralRequest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ReferralRequest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{RequestIntent, RequestPriority, RequestStatus};
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Used to record and send details about a request for referral service or transfer of a patient to
/// the care of another provider or provider organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequest {
    /// Resource type - always "ReferralRequest"
    #[serde(default)]
    pub resource_type: ResourceTag<ReferralRequest>,

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

    /// Business identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Instantiates protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// Request fulfilled by this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Request(s) replaced by this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<Vec<Reference>>,

    /// Composite request this is part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,

    /// The status of the authorization/intention reflected by the referral request record.
    pub status: RequestStatus,

    /// Distinguishes the "level" of authorization/demand implicit in this request.
    pub intent: RequestIntent,

    /// Referral/Transition of care request type.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// An indication of the urgency of referral (or where applicable the type of transfer of care)
    /// request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,

    /// Actions requested as part of the referral.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_requested: Option<Vec<CodeableConcept>>,

    /// Patient referred to care or transfer.
    pub subject: Reference,

    /// Originating encounter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// When the service(s) requested in the referral should occur.
    #[serde(flatten, with = "crate::choice::optional")]
    pub occurrence: Option<ReferralRequestOccurrence>,

    /// Date of creation/activation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Who/what is requesting service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<ReferralRequestRequester>,

    /// The clinical specialty (discipline) that the referral is requested for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<CodeableConcept>,

    /// Receiver of referral / transfer of care request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Vec<Reference>>,

    /// Reason for referral / transfer of care request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Why is service needed?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// A textual description of the referral.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additonal information to support referral or transfer of care request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_info: Option<Vec<Reference>>,

    /// Comments made about referral request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Key events in history of request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_history: Option<Vec<Reference>>,
}

choice_type! {
    /// When the service(s) requested in the referral should occur.
    pub enum ReferralRequestOccurrence("occurrence[x]") {
        DateTime(DateTime) = "occurrenceDateTime",
        Period(Period) = "occurrencePeriod",
    }
}

/// The individual who initiated the request and has responsibility for its activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequestRequester {
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

impl_domain_resource!(ReferralRequest);
impl_backbone_element!(ReferralRequestRequester);
