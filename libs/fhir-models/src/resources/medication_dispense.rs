//! MedicationDispense resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/MedicationDispense

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Dosage, Extension, Identifier, Meta, Narrative, Quantity,
    Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Indicates that a medication product is to be or has been dispensed for a named person/patient.
/// This includes a description of the medication product (supply) provided and the instructions for
/// administering the medication. The medication dispense is the result of a pharmacy system
/// responding to a medication order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDispense {
    /// Resource type - always "MedicationDispense"
    #[serde(default)]
    pub resource_type: ResourceTag<MedicationDispense>,

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

    /// Event that dispense is part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// A code specifying the state of the set of dispense events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicationDispenseStatus>,

    /// Type of medication dispense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// What medication was supplied.
    #[serde(flatten, with = "crate::choice::required")]
    pub medication: MedicationDispenseMedication,

    /// Who the dispense is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Encounter / Episode associated with event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Information that supports the dispensing of the medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_information: Option<Vec<Reference>>,

    /// Who performed event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<MedicationDispensePerformer>>,

    /// Medication order that authorizes the dispense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizing_prescription: Option<Vec<Reference>>,

    /// Trial fill, partial fill, emergency fill, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Amount dispensed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Amount of medication expressed as a timing amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_supply: Option<Quantity>,

    /// When product was packaged and reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_prepared: Option<DateTime>,

    /// When product was given out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_handed_over: Option<DateTime>,

    /// Where the medication was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Reference>,

    /// Who collected the medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Vec<Reference>>,

    /// Information about the dispense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// How the medication is to be used by the patient or administered by the caregiver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage_instruction: Option<Vec<Dosage>>,

    /// Whether a substitution was performed on the dispense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<MedicationDispenseSubstitution>,

    /// Clinical issue with action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_issue: Option<Vec<Reference>>,

    /// Whether the dispense was or was not performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_done: Option<bool>,

    /// Why a dispense was not performed.
    #[serde(flatten, with = "crate::choice::optional")]
    pub not_done_reason: Option<MedicationDispenseNotDoneReason>,

    /// A list of releveant lifecycle events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_history: Option<Vec<Reference>>,
}

choice_type! {
    /// What medication was supplied.
    pub enum MedicationDispenseMedication("medication[x]") {
        CodeableConcept(CodeableConcept) = "medicationCodeableConcept",
        Reference(Reference) = "medicationReference",
    }
}

choice_type! {
    /// Why a dispense was not performed.
    pub enum MedicationDispenseNotDoneReason("notDoneReason[x]") {
        CodeableConcept(CodeableConcept) = "notDoneReasonCodeableConcept",
        Reference(Reference) = "notDoneReasonReference",
    }
}

/// Indicates who or what performed the event. It should be assumed that the performer is the
/// dispenser of the medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDispensePerformer {
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

/// Indicates whether or not substitution was made as part of the dispense. In some cases
/// substitution will be expected but does not happen, in other cases substitution is not expected
/// but does happen. This block explains what substitution did or did not happen and why. If nothing
/// is specified, substitution was not done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDispenseSubstitution {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Whether a substitution was or was not performed on the dispense.
    pub was_substituted: bool,

    /// Code signifying whether a different drug was dispensed from what was prescribed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Why was substitution made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableConcept>>,

    /// Who is responsible for the substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_party: Option<Vec<Reference>>,
}

/// A coded concept specifying the state of the dispense event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationDispenseStatus {
    Preparation,
    InProgress,
    OnHold,
    Completed,
    EnteredInError,
    Stopped,
}

impl_domain_resource!(MedicationDispense);
impl_backbone_element!(MedicationDispensePerformer, MedicationDispenseSubstitution);
