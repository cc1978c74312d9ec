//! Encounter resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Encounter

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Coding, Duration, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::resources::Resource;

/// An interaction between a patient and healthcare provider(s) for the purpose of providing
/// healthcare service(s) or assessing the health status of a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    /// Resource type - always "Encounter"
    #[serde(default)]
    pub resource_type: ResourceTag<Encounter>,

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

    /// Identifier(s) by which this encounter is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// planned | arrived | triaged | in-progress | onleave | finished | cancelled +
    pub status: EncounterStatus,

    /// List of past encounter statuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_history: Option<Vec<EncounterStatusHistory>>,

    /// inpatient | outpatient | ambulatory | emergency +
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Coding>,

    /// List of past encounter classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_history: Option<Vec<EncounterClassHistory>>,

    /// Specific type of encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// Indicates the urgency of the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// The patient ro group present at the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Episode(s) of care that this encounter should be recorded against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_of_care: Option<Vec<Reference>>,

    /// The ReferralRequest that initiated this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_referral: Option<Vec<Reference>>,

    /// List of participants involved in the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<EncounterParticipant>>,

    /// The appointment that scheduled this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Reference>,

    /// The start and end time of the encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Quantity of time the encounter lasted (less time absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Duration>,

    /// Reason the encounter takes place (code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableConcept>>,

    /// The list of diagnosis relevant to this encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<EncounterDiagnosis>>,

    /// The set of accounts that may be used for billing for this Encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Reference>>,

    /// Details about the admission to a healthcare service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<EncounterHospitalization>,

    /// List of locations where the patient has been
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<EncounterLocation>>,

    /// The custodian organization of this Encounter record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<Reference>,

    /// Another Encounter this encounter is part of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,
}

/// The status history permits the encounter resource to contain the status history without needing
/// to read through the historical versions of the resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterStatusHistory {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// planned | arrived | triaged | in-progress | onleave | finished | cancelled +
    pub status: EncounterStatus,

    /// The time that the episode was in the specified status
    pub period: Period,
}

/// The class history permits the tracking of the encounters transitions without needing to go
/// through the resource history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterClassHistory {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// inpatient | outpatient | ambulatory | emergency +
    pub class: Coding,

    /// The time that the episode was in the specified class
    pub period: Period,
}

/// The list of people responsible for providing the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Role of participant in encounter
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// Period of time during the encounter that the participant participated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Persons involved in the encounter other than the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<Reference>,
}

/// The list of diagnosis relevant to this encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterDiagnosis {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reason the encounter takes place (resource)
    pub condition: Reference,

    /// Role that this diagnosis has within the encounter (e.g. admission, billing, discharge …)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Ranking of the diagnosis (for each role type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// Details about the admission to a healthcare service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterHospitalization {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Pre-admission identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_admission_identifier: Option<Identifier>,

    /// The location from which the patient came before admission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Reference>,

    /// From where patient was admitted (physician referral, transfer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admit_source: Option<CodeableConcept>,

    /// The type of hospital re-admission that has occurred (if any). If the value is absent, then
    /// this is not identified as a readmission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_admission: Option<CodeableConcept>,

    /// Diet preferences reported by the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<Vec<CodeableConcept>>,

    /// Special courtesies (VIP, board member)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_courtesy: Option<Vec<CodeableConcept>>,

    /// Wheelchair, translator, stretcher, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_arrangement: Option<Vec<CodeableConcept>>,

    /// Location to which the patient is discharged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Reference>,

    /// Category or kind of location after discharge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_disposition: Option<CodeableConcept>,
}

/// List of locations where the patient has been during this encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterLocation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Location the encounter takes place
    pub location: Reference,

    /// planned | active | reserved | completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EncounterLocationStatus>,

    /// Time period during which the patient was present at the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// The status of the location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncounterLocationStatus {
    Planned,
    Active,
    Reserved,
    Completed,
}

/// Current state of the encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncounterStatus {
    Planned,
    Arrived,
    Triaged,
    InProgress,
    Onleave,
    Finished,
    Cancelled,
    EnteredInError,
    Unknown,
}

impl_domain_resource!(Encounter);
impl_backbone_element!(
    EncounterStatusHistory,
    EncounterClassHistory,
    EncounterParticipant,
    EncounterDiagnosis,
    EncounterHospitalization,
    EncounterLocation,
);
