//! AllergyIntolerance resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/AllergyIntolerance

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Age, Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Range,
    Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Risk of harmful or undesirable, physiological response which is unique to an individual and
/// associated with exposure to a substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntolerance {
    /// Resource type - always "AllergyIntolerance"
    #[serde(default)]
    pub resource_type: ResourceTag<AllergyIntolerance>,

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

    /// External ids for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// The clinical status of the allergy or intolerance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_status: Option<AllergyIntoleranceClinicalStatus>,

    /// Assertion about certainty associated with the propensity, or potential risk, of a reaction
    /// to the identified substance (including pharmaceutical product).
    pub verification_status: AllergyIntoleranceVerificationStatus,

    /// Identification of the underlying physiological mechanism for the reaction risk.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<AllergyIntoleranceType>,

    /// Category of the identified substance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<AllergyIntoleranceCategory>>,

    /// Estimate of the potential clinical harm, or seriousness, of the reaction to the identified
    /// substance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticality: Option<AllergyIntoleranceCriticality>,

    /// Code that identifies the allergy or intolerance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Who the sensitivity is for.
    pub patient: Reference,

    /// When allergy or intolerance was identified.
    #[serde(flatten, with = "crate::choice::optional")]
    pub onset: Option<AllergyIntoleranceOnset>,

    /// Date record was believed accurate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserted_date: Option<DateTime>,

    /// Who recorded the sensitivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorder: Option<Reference>,

    /// Source of the information about the allergy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserter: Option<Reference>,

    /// Date(/time) of last known occurrence of a reaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_occurrence: Option<DateTime>,

    /// Additional text not captured in other fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Adverse Reaction Events linked to exposure to substance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Vec<AllergyIntoleranceReaction>>,
}

choice_type! {
    /// When allergy or intolerance was identified.
    pub enum AllergyIntoleranceOnset("onset[x]") {
        DateTime(DateTime) = "onsetDateTime",
        Age(Age) = "onsetAge",
        Period(Period) = "onsetPeriod",
        Range(Range) = "onsetRange",
        String(String) = "onsetString",
    }
}

/// Details about each adverse reaction event linked to exposure to the identified substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntoleranceReaction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Specific substance or pharmaceutical product considered to be responsible for event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substance: Option<CodeableConcept>,

    /// Clinical symptoms/signs associated with the Event.
    #[serde(deserialize_with = "non_empty::manifestation")]
    pub manifestation: Vec<CodeableConcept>,

    /// Description of the event as a whole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Date(/time) when manifestations showed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<DateTime>,

    /// Clinical assessment of the severity of the reaction event as a whole, potentially
    /// considering multiple different manifestations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AllergyIntoleranceSeverity>,

    /// How the subject was exposed to the substance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_route: Option<CodeableConcept>,

    /// Text about event not captured in other fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

/// Category of an identified substance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergyIntoleranceCategory {
    Food,
    Medication,
    Environment,
    Biologic,
}

/// The clinical status of the allergy or intolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergyIntoleranceClinicalStatus {
    Active,
    Inactive,
    Resolved,
}

/// Estimate of the potential clinical harm of a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergyIntoleranceCriticality {
    Low,
    High,
    UnableToAssess,
}

/// Clinical assessment of the severity of a reaction event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergyIntoleranceSeverity {
    Mild,
    Moderate,
    Severe,
}

/// Identification of the underlying physiological mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergyIntoleranceType {
    Allergy,
    Intolerance,
}

/// Assertion about certainty associated with a propensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergyIntoleranceVerificationStatus {
    Unconfirmed,
    Confirmed,
    Refuted,
    EnteredInError,
}

non_empty_lists! {
    manifestation = "manifestation",
}

impl_domain_resource!(AllergyIntolerance);
impl_backbone_element!(AllergyIntoleranceReaction);
