//! MeasureReport resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/MeasureReport

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference};
use crate::primitives::{DateTime, Decimal};
use crate::resources::Resource;

/// The MeasureReport resource contains the results of evaluating a measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureReport {
    /// Resource type - always "MeasureReport"
    #[serde(default)]
    pub resource_type: ResourceTag<MeasureReport>,

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

    /// Additional identifier for the Report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// The report status. No data will be available until the report status is complete.
    pub status: MeasureReportStatus,

    /// The type of measure report. This may be an individual report, which provides a single
    /// patient's score for the measure; a patient listing, which returns the list of patients that
    /// meet the various criteria in the measure; or a summary report, which returns a population
    /// count for each of the criteria in the measure.
    #[serde(rename = "type")]
    pub r#type: MeasureReportType,

    /// What measure was evaluated.
    pub measure: Reference,

    /// What patient the report is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    /// When the report was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Who is reporting the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_organization: Option<Reference>,

    /// What period the report covers.
    pub period: Period,

    /// Measure results for each group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<MeasureReportGroup>>,

    /// What data was evaluated to produce the measure score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_resources: Option<Reference>,
}

/// The results of the calculation, one for each population group in the measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureReportGroup {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What group of the measure.
    pub identifier: Identifier,

    /// The populations in the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<Vec<MeasureReportGroupPopulation>>,

    /// What score this group achieved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_score: Option<Decimal>,

    /// Stratification results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stratifier: Option<Vec<MeasureReportGroupStratifier>>,
}

/// The populations that make up the population group, one for each type of population appropriate
/// for the measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureReportGroupPopulation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Population identifier as defined in the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// initial-population | numerator | numerator-exclusion | denominator | denominator-exclusion |
    /// denominator-exception | measure-population | measure- population-exclusion | measure-score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Size of the population.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    /// For patient-list reports, the patients in this population.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patients: Option<Reference>,
}

/// When a measure includes multiple stratifiers, there will be a stratifier group for each
/// stratifier defined by the measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureReportGroupStratifier {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What stratifier of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Stratum results, one for each unique value in the stratifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stratum: Option<Vec<MeasureReportGroupStratifierStratum>>,
}

/// This element contains the results for a single stratum within the stratifier. For example, when
/// stratifying on administrative gender, there will be four strata, one for each possible gender
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureReportGroupStratifierStratum {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The stratum value, e.g. male.
    pub value: String,

    /// Population results in this stratum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<Vec<MeasureReportGroupStratifierStratumPopulation>>,

    /// What score this stratum achieved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_score: Option<Decimal>,
}

/// The populations that make up the stratum, one for each type of population appropriate to the
/// measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureReportGroupStratifierStratumPopulation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Population identifier as defined in the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// initial-population | numerator | numerator-exclusion | denominator | denominator-exclusion |
    /// denominator-exception | measure-population | measure- population-exclusion | measure-score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Size of the population.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    /// For patient-list reports, the patients in this population.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patients: Option<Reference>,
}

/// The status of the measure report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureReportStatus {
    Complete,
    Pending,
    Error,
}

/// The type of the measure report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureReportType {
    Individual,
    PatientList,
    Summary,
}

impl_domain_resource!(MeasureReport);
impl_backbone_element!(
    MeasureReportGroup,
    MeasureReportGroupPopulation,
    MeasureReportGroupStratifier,
    MeasureReportGroupStratifierStratum,
    MeasureReportGroupStratifierStratumPopulation,
);
