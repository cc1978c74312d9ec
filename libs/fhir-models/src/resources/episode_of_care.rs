//! EpisodeOfCare resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/EpisodeOfCare

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference};
use crate::resources::Resource;

/// An association between a patient and an organization / healthcare provider(s) during which time
/// encounters may occur. The managing organization assumes a level of responsibility for the
/// patient during this time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeOfCare {
    /// Resource type - always "EpisodeOfCare"
    #[serde(default)]
    pub resource_type: ResourceTag<EpisodeOfCare>,

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

    /// Business Identifier(s) relevant for this EpisodeOfCare.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// planned | waitlist | active | onhold | finished | cancelled.
    pub status: EpisodeOfCareStatus,

    /// Past list of status codes (the current status may be included to cover the start date of the
    /// status).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_history: Option<Vec<EpisodeOfCareStatusHistory>>,

    /// Type/class - e.g. specialist referral, disease management.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// The list of diagnosis relevant to this episode of care.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<EpisodeOfCareDiagnosis>>,

    /// The patient who is the focus of this episode of care.
    pub patient: Reference,

    /// Organization that assumes care.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Interval during responsibility is assumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Originating Referral Request(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_request: Option<Vec<Reference>>,

    /// Care manager/care co-ordinator for the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_manager: Option<Reference>,

    /// Other practitioners facilitating this episode of care.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<Reference>>,

    /// The set of accounts that may be used for billing for this EpisodeOfCare.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Reference>>,
}

/// The list of diagnosis relevant to this episode of care
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeOfCareDiagnosis {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Conditions/problems/diagnoses this episode of care is for.
    pub condition: Reference,

    /// Role that this diagnosis has within the episode of care (e.g. admission, billing, discharge
    /// …).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Ranking of the diagnosis (for each role type).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// The history of statuses that the EpisodeOfCare has been through (without requiring processing
/// the history of the resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeOfCareStatusHistory {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// planned | waitlist | active | onhold | finished | cancelled.
    pub status: EpisodeOfCareStatus,

    /// Duration the EpisodeOfCare was in the specified status.
    pub period: Period,
}

/// The status of the episode of care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EpisodeOfCareStatus {
    Planned,
    Waitlist,
    Active,
    Onhold,
    Finished,
    Cancelled,
    EnteredInError,
}

impl_domain_resource!(EpisodeOfCare);
impl_backbone_element!(EpisodeOfCareDiagnosis, EpisodeOfCareStatusHistory);
