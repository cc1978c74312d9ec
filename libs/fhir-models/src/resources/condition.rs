//! Condition resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Condition

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Age, Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Range,
    Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A clinical condition, problem, diagnosis, or other event, situation, issue, or clinical concept
/// that has risen to a level of concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Resource type - always "Condition"
    #[serde(default)]
    pub resource_type: ResourceTag<Condition>,

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

    /// External Ids for this condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | recurrence | inactive | remission | resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_status: Option<String>,

    /// The verification status to support the clinical status of the condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<ConditionVerificationStatus>,

    /// problem-list-item | encounter-diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Subjective severity of condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<CodeableConcept>,

    /// Identification of the condition, problem or diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Anatomical location, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Vec<CodeableConcept>>,

    /// Who has the condition?.
    pub subject: Reference,

    /// Encounter or episode when condition first asserted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Estimated or actual date, date-time, or age.
    #[serde(flatten, with = "crate::choice::optional")]
    pub onset: Option<ConditionOnset>,

    /// If/when in resolution/remission.
    #[serde(flatten, with = "crate::choice::optional")]
    pub abatement: Option<ConditionAbatement>,

    /// Date record was believed accurate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserted_date: Option<DateTime>,

    /// Person who asserts this condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserter: Option<Reference>,

    /// Stage/grade, usually assessed formally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<ConditionStage>,

    /// Supporting evidence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<ConditionEvidence>>,

    /// Additional information about the Condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

choice_type! {
    /// Estimated or actual date, date-time, or age.
    pub enum ConditionOnset("onset[x]") {
        DateTime(DateTime) = "onsetDateTime",
        Age(Age) = "onsetAge",
        Period(Period) = "onsetPeriod",
        Range(Range) = "onsetRange",
        String(String) = "onsetString",
    }
}

choice_type! {
    /// If/when in resolution/remission.
    pub enum ConditionAbatement("abatement[x]") {
        DateTime(DateTime) = "abatementDateTime",
        Age(Age) = "abatementAge",
        Boolean(bool) = "abatementBoolean",
        Period(Period) = "abatementPeriod",
        Range(Range) = "abatementRange",
        String(String) = "abatementString",
    }
}

/// Supporting Evidence / manifestations that are the basis on which this condition is suspected or
/// confirmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionEvidence {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Manifestation/symptom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<CodeableConcept>>,

    /// Supporting information found elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<Reference>>,
}

/// Clinical stage or grade of a condition. May include formal severity assessments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionStage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Simple summary (disease specific).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CodeableConcept>,

    /// Formal record of assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Vec<Reference>>,
}

/// The verification status to support or decline the clinical status of the condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionVerificationStatus {
    Provisional,
    Differential,
    Confirmed,
    Refuted,
    EnteredInError,
    Unknown,
}

impl_domain_resource!(Condition);
impl_backbone_element!(ConditionEvidence, ConditionStage);
