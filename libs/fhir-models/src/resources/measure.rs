//! Measure resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Measure

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::PublicationStatus;
use crate::datatypes::{
    CodeableConcept, ContactDetail, Contributor, Extension, Identifier, Meta, Narrative, Period,
    Reference, RelatedArtifact, UsageContext,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// The Measure resource provides the definition of a quality measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Resource type - always "Measure"
    #[serde(default)]
    pub resource_type: ResourceTag<Measure>,

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

    /// Logical URI to reference this measure (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Business version of the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this measure (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this measure (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this measure. Enables tracking the life-cycle of the content.
    pub status: PublicationStatus,

    /// For testing purposes, not real usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    /// Date this was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Name of the publisher (organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Natural language description of the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Why this measure is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Describes the clinical usage of the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// When the measure was approved by publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<Date>,

    /// When the measure was last reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<Date>,

    /// When the measure is expected to be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for measure (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// E.g. Education, Treatment, Assessment, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Vec<CodeableConcept>>,

    /// A content contributor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Vec<Contributor>>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Additional documentation, citations, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,

    /// Logic used by the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<Reference>>,

    /// Disclaimer for use of the measure or its referenced content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,

    /// proportion | ratio | continuous-variable | cohort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<CodeableConcept>,

    /// opportunity | all-or-nothing | linear | weighted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_scoring: Option<CodeableConcept>,

    /// process | outcome | structure | patient-reported-outcome | composite.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// How is risk adjustment applied for this measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_adjustment: Option<String>,

    /// How is rate aggregation performed for this measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_aggregation: Option<String>,

    /// Why does this measure exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,

    /// Summary of clinical guidelines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_recommendation_statement: Option<String>,

    /// Improvement notation for the measure, e.g. higher score indicates better quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_notation: Option<String>,

    /// Defined terms used in the measure documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<String>>,

    /// Additional guidance for implementers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,

    /// The measure set, e.g. Preventive Care and Screening.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,

    /// Population criteria group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<MeasureGroup>>,

    /// What other data should be reported with the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplemental_data: Option<Vec<MeasureSupplementalData>>,
}

/// A group of population criteria for the measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureGroup {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Unique identifier.
    pub identifier: Identifier,

    /// Short name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Summary description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Population criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<Vec<MeasureGroupPopulation>>,

    /// Stratifier criteria for the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stratifier: Option<Vec<MeasureGroupStratifier>>,
}

/// A population criteria for the measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureGroupPopulation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// initial-population | numerator | numerator-exclusion | denominator | denominator-exclusion |
    /// denominator-exception | measure-population | measure- population-exclusion |
    /// measure-observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Short name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The human readable description of this population criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The name of a valid referenced CQL expression (may be namespaced) that defines this
    /// population criteria.
    pub criteria: String,
}

/// The stratifier criteria for the measure report, specified as either the name of a valid CQL
/// expression defined within a referenced library, or a valid FHIR Resource Path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureGroupStratifier {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The identifier for the stratifier used to coordinate the reported data back to this
    /// stratifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// How the measure should be stratified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<String>,

    /// Path to the stratifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The supplemental data criteria for the measure report, specified as either the name of a valid
/// CQL expression within a referenced library, or a valid FHIR Resource Path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureSupplementalData {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifier, unique within the measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// supplemental-data | risk-adjustment-factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Vec<CodeableConcept>>,

    /// Expression describing additional data to be reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<String>,

    /// Path to the supplemental data element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl_domain_resource!(Measure);
impl_backbone_element!(
    MeasureGroup,
    MeasureGroupPopulation,
    MeasureGroupStratifier,
    MeasureSupplementalData,
);
