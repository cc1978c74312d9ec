//! Procedure resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Procedure

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::EventStatus;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// An action that is or was performed on a patient. This can be a physical intervention like an
/// operation, or less invasive like counseling or hypnotherapy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procedure {
    /// Resource type - always "Procedure"
    #[serde(default)]
    pub resource_type: ResourceTag<Procedure>,

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

    /// External Identifiers for this procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Instantiates protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// A request for this procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Part of referenced event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// A code specifying the state of the procedure. Generally this will be in-progress or
    /// completed state.
    pub status: EventStatus,

    /// True if procedure was not performed as scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_done: Option<bool>,

    /// Reason procedure was not performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_done_reason: Option<CodeableConcept>,

    /// Classification of the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Identification of the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Who the procedure was performed on.
    pub subject: Reference,

    /// Encounter or episode associated with the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Date/Period the procedure was performed.
    #[serde(flatten, with = "crate::choice::optional")]
    pub performed: Option<ProcedurePerformed>,

    /// The people who performed the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<ProcedurePerformer>>,

    /// Where the procedure happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Coded reason procedure performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Condition that is the reason the procedure performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Target body sites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Vec<CodeableConcept>>,

    /// The result of procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CodeableConcept>,

    /// Any report resulting from the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Vec<Reference>>,

    /// Complication following the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complication: Option<Vec<CodeableConcept>>,

    /// A condition that is a result of the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complication_detail: Option<Vec<Reference>>,

    /// Instructions for follow up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<Vec<CodeableConcept>>,

    /// Additional information about the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Device changed in procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_device: Option<Vec<ProcedureFocalDevice>>,

    /// Items used during procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_reference: Option<Vec<Reference>>,

    /// Coded items used during the procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_code: Option<Vec<CodeableConcept>>,
}

choice_type! {
    /// Date/Period the procedure was performed.
    pub enum ProcedurePerformed("performed[x]") {
        DateTime(DateTime) = "performedDateTime",
        Period(Period) = "performedPeriod",
    }
}

/// A device that is implanted, removed or otherwise manipulated (calibration, battery replacement,
/// fitting a prosthesis, attaching a wound-vac, etc.) as a focal portion of the Procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureFocalDevice {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Kind of change to device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CodeableConcept>,

    /// Device that was changed.
    pub manipulated: Reference,
}

/// Limited to 'real' people rather than equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedurePerformer {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The role the actor was in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// The reference to the practitioner.
    pub actor: Reference,

    /// Organization the device or practitioner was acting for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
}

impl_domain_resource!(Procedure);
impl_backbone_element!(ProcedureFocalDevice, ProcedurePerformer);
