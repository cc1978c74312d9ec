//! ClinicalImpression resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ClinicalImpression

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A record of a clinical assessment performed to determine what problem(s) may affect the patient
/// and before planning the treatments or management strategies that are best to manage a patient's
/// condition. Assessments are often 1:1 with a clinical consultation / encounter, but this varies
/// greatly depending on the clinical workflow. This resource is called "ClinicalImpression" rather
/// than "ClinicalAssessment" to avoid confusion with the recording of assessment tools such as
/// Apgar score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalImpression {
    /// Resource type - always "ClinicalImpression"
    #[serde(default)]
    pub resource_type: ResourceTag<ClinicalImpression>,

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

    /// Identifies the workflow status of the assessment.
    pub status: ClinicalImpressionStatus,

    /// Kind of assessment performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Why/how the assessment was performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Patient or group assessed.
    pub subject: Reference,

    /// Encounter or Episode created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Time of assessment.
    #[serde(flatten, with = "crate::choice::optional")]
    pub effective: Option<ClinicalImpressionEffective>,

    /// When the assessment was documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// The clinician performing the assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessor: Option<Reference>,

    /// Reference to last assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Reference>,

    /// Relevant impressions of patient state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<Vec<Reference>>,

    /// One or more sets of investigations (signs, symptions, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investigation: Option<Vec<ClinicalImpressionInvestigation>>,

    /// Clinical Protocol followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Vec<String>>,

    /// Summary of the assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Possible or likely findings and diagnoses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding: Option<Vec<ClinicalImpressionFinding>>,

    /// Estimate of likely outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prognosis_codeable_concept: Option<Vec<CodeableConcept>>,

    /// RiskAssessment expressing likely outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prognosis_reference: Option<Vec<Reference>>,

    /// Action taken as part of assessment procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<Reference>>,

    /// Comments made about the ClinicalImpression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

choice_type! {
    /// Time of assessment.
    pub enum ClinicalImpressionEffective("effective[x]") {
        DateTime(DateTime) = "effectiveDateTime",
        Period(Period) = "effectivePeriod",
    }
}

/// Specific findings or diagnoses that was considered likely or relevant to ongoing treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalImpressionFinding {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What was found.
    #[serde(flatten, with = "crate::choice::required")]
    pub item: ClinicalImpressionFindingItem,

    /// Which investigations support finding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basis: Option<String>,
}

choice_type! {
    /// What was found.
    pub enum ClinicalImpressionFindingItem("item[x]") {
        CodeableConcept(CodeableConcept) = "itemCodeableConcept",
        Reference(Reference) = "itemReference",
    }
}

/// One or more sets of investigations (signs, symptions, etc.). The actual grouping of
/// investigations vary greatly depending on the type and context of the assessment. These
/// investigations may include data generated during the assessment process, or data previously
/// generated and recorded that is pertinent to the outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalImpressionInvestigation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// A name/code for the set.
    pub code: CodeableConcept,

    /// Record of a specific investigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<Reference>>,
}

/// The workflow state of a clinical impression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClinicalImpressionStatus {
    Draft,
    Completed,
    EnteredInError,
}

impl_domain_resource!(ClinicalImpression);
impl_backbone_element!(ClinicalImpressionFinding, ClinicalImpressionInvestigation);
