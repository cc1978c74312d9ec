//! ImmunizationRecommendation resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ImmunizationRecommendation

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Reference};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A patient's point-in-time immunization and recommendation (i.e. forecasting a patient's
/// immunization eligibility according to a published schedule) with optional supporting
/// justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationRecommendation {
    /// Resource type - always "ImmunizationRecommendation"
    #[serde(default)]
    pub resource_type: ResourceTag<ImmunizationRecommendation>,

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

    /// Who this profile is for.
    pub patient: Reference,

    /// Vaccine administration recommendations.
    #[serde(deserialize_with = "non_empty::recommendation")]
    pub recommendation: Vec<ImmunizationRecommendationRecommendation>,
}

/// Vaccine administration recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationRecommendationRecommendation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Date recommendation created.
    pub date: DateTime,

    /// Vaccine recommendation applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccine_code: Option<CodeableConcept>,

    /// Disease to be immunized against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_disease: Option<CodeableConcept>,

    /// Recommended dose number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_number: Option<u32>,

    /// Vaccine administration status.
    pub forecast_status: CodeableConcept,

    /// Dates governing proposed immunization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_criterion: Option<Vec<ImmunizationRecommendationRecommendationDateCriterion>>,

    /// Protocol used by recommendation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ImmunizationRecommendationRecommendationProtocol>,

    /// Past immunizations supporting recommendation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_immunization: Option<Vec<Reference>>,

    /// Patient observations supporting recommendation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_patient_information: Option<Vec<Reference>>,
}

/// Vaccine date recommendations. For example, earliest date to administer, latest date to
/// administer, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationRecommendationRecommendationDateCriterion {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of date.
    pub code: CodeableConcept,

    /// Recommended date.
    pub value: DateTime,
}

/// Contains information about the protocol under which the vaccine was administered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationRecommendationRecommendationProtocol {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Dose number within sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_sequence: Option<u32>,

    /// Protocol details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Who is responsible for protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Reference>,

    /// Name of vaccination series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

non_empty_lists! {
    recommendation = "recommendation",
}

impl_domain_resource!(ImmunizationRecommendation);
impl_backbone_element!(
    ImmunizationRecommendationRecommendation,
    ImmunizationRecommendationRecommendationDateCriterion,
    ImmunizationRecommendationRecommendationProtocol,
);
