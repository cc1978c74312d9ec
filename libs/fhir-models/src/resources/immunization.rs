//! Immunization resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Immunization

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::MedicationAdministrationStatus;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Quantity, Reference,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// Describes the event of a patient being administered a vaccination or a record of a vaccination
/// as reported by a patient, a clinician or another party and may include vaccine reaction
/// information and what vaccination protocol was followed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Immunization {
    /// Resource type - always "Immunization"
    #[serde(default)]
    pub resource_type: ResourceTag<Immunization>,

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

    /// Indicates the current status of the vaccination event. Only use: ['completed',
    /// 'entered-in-error']
    pub status: MedicationAdministrationStatus,

    /// Flag for whether immunization was given.
    pub not_given: bool,

    /// Vaccine product administered.
    pub vaccine_code: CodeableConcept,

    /// Who was immunized.
    pub patient: Reference,

    /// Encounter administered as part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// Vaccination administration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Indicates context the data was recorded in.
    pub primary_source: bool,

    /// Indicates the source of a secondarily reported record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_origin: Option<CodeableConcept>,

    /// Where vaccination occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Vaccine manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Reference>,

    /// Vaccine lot number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,

    /// Vaccine expiration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Date>,

    /// Body site vaccine was administered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<CodeableConcept>,

    /// How vaccine entered body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<CodeableConcept>,

    /// Amount of vaccine administered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_quantity: Option<Quantity>,

    /// Who performed event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practitioner: Option<Vec<ImmunizationPractitioner>>,

    /// Vaccination notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Administration/non-administration reasons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<ImmunizationExplanation>,

    /// Details of a reaction that follows immunization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Vec<ImmunizationReaction>>,

    /// What protocol was followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination_protocol: Option<Vec<ImmunizationVaccinationProtocol>>,
}

/// Reasons why a vaccine was or was not administered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationExplanation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Why immunization occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableConcept>>,

    /// Why immunization did not occur.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_not_given: Option<Vec<CodeableConcept>>,
}

/// Indicates who or what performed the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationPractitioner {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What type of performance was done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Individual who was performing.
    pub actor: Reference,
}

/// Categorical data indicating that an adverse event is associated in time to an immunization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationReaction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// When reaction started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Additional information on reaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Reference>,

    /// Indicates self-reported reaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported: Option<bool>,
}

/// Contains information about the protocol(s) under which the vaccine was administered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationVaccinationProtocol {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Dose number within series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_sequence: Option<u32>,

    /// Details of vaccine protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Who is responsible for protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Reference>,

    /// Name of vaccine series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,

    /// Recommended number of doses for immunity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_doses: Option<u32>,

    /// Disease immunized against.
    #[serde(deserialize_with = "non_empty::target_disease")]
    pub target_disease: Vec<CodeableConcept>,

    /// Indicates if dose counts towards immunity.
    pub dose_status: CodeableConcept,

    /// Why dose does (not) count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_status_reason: Option<CodeableConcept>,
}

non_empty_lists! {
    target_disease = "targetDisease",
}

impl_domain_resource!(Immunization);
impl_backbone_element!(
    ImmunizationExplanation,
    ImmunizationPractitioner,
    ImmunizationReaction,
    ImmunizationVaccinationProtocol,
);
