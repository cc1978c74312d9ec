//! MedicationAdministration resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/MedicationAdministration

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::MedicationAdministrationStatus;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Quantity, Ratio,
    Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Describes the event of a patient consuming or otherwise being administered a medication. This
/// may be as simple as swallowing a tablet or it may be a long running infusion. Related resources
/// tie this event to the authorizing prescription, and the specific encounter between patient and
/// health care practitioner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationAdministration {
    /// Resource type - always "MedicationAdministration"
    #[serde(default)]
    pub resource_type: ResourceTag<MedicationAdministration>,

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

    /// External identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Instantiates protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// Part of referenced event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// Will generally be set to show that the administration has been completed. For some long
    /// running administrations such as infusions it is possible for an administration to be started
    /// but not completed or it may be paused while some other process is under way.
    pub status: MedicationAdministrationStatus,

    /// Type of medication usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// What was administered.
    #[serde(flatten, with = "crate::choice::required")]
    pub medication: MedicationAdministrationMedication,

    /// Who received medication.
    pub subject: Reference,

    /// Encounter or Episode of Care administered as part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Additional information to support administration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_information: Option<Vec<Reference>>,

    /// Start and end time of administration.
    #[serde(flatten, with = "crate::choice::required")]
    pub effective: MedicationAdministrationEffective,

    /// Who administered substance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<MedicationAdministrationPerformer>>,

    /// True if medication not administered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_given: Option<bool>,

    /// Reason administration not performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_not_given: Option<Vec<CodeableConcept>>,

    /// Reason administration performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Condition or Observation that supports why the medication was administered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Request administration performed against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Reference>,

    /// Device used to administer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Vec<Reference>>,

    /// Information about the administration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Details of how medication was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<MedicationAdministrationDosage>,

    /// A list of events of interest in the lifecycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_history: Option<Vec<Reference>>,
}

choice_type! {
    /// What was administered.
    pub enum MedicationAdministrationMedication("medication[x]") {
        CodeableConcept(CodeableConcept) = "medicationCodeableConcept",
        Reference(Reference) = "medicationReference",
    }
}

choice_type! {
    /// Start and end time of administration.
    pub enum MedicationAdministrationEffective("effective[x]") {
        DateTime(DateTime) = "effectiveDateTime",
        Period(Period) = "effectivePeriod",
    }
}

/// Describes the medication dosage information details e.g. dose, rate, site, route, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationAdministrationDosage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Free text dosage instructions e.g. SIG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Body site administered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<CodeableConcept>,

    /// Path of substance into body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<CodeableConcept>,

    /// How drug was administered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Amount of medication per dose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose: Option<Quantity>,

    /// Dose quantity per unit of time.
    #[serde(flatten, with = "crate::choice::optional")]
    pub rate: Option<MedicationAdministrationDosageRate>,
}

choice_type! {
    /// Dose quantity per unit of time.
    pub enum MedicationAdministrationDosageRate("rate[x]") {
        Ratio(Ratio) = "rateRatio",
        Quantity(Quantity) = "rateQuantity",
    }
}

/// The individual who was responsible for giving the medication to the patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationAdministrationPerformer {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Individual who was performing.
    pub actor: Reference,

    /// Organization organization was acting for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
}

impl_domain_resource!(MedicationAdministration);
impl_backbone_element!(MedicationAdministrationDosage, MedicationAdministrationPerformer);
