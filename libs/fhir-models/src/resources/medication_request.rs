//! MedicationRequest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/MedicationRequest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Dosage, Duration, Extension, Identifier, Meta, Narrative, Period,
    Quantity, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// An order or request for both supply of the medication and the instructions for administration of
/// the medication to a patient. The resource is called "MedicationRequest" rather than
/// "MedicationPrescription" or "MedicationOrder" to generalize the use across inpatient and
/// outpatient settings, including care plans, etc., and to harmonize with workflow patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequest {
    /// Resource type - always "MedicationRequest"
    #[serde(default)]
    pub resource_type: ResourceTag<MedicationRequest>,

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

    /// External ids for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// What request fulfills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Composite request this is part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,

    /// A code specifying the current state of the order. Generally this will be active or completed
    /// state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicationRequestStatus>,

    /// Whether the request is a proposal, plan, or an original order.
    pub intent: MedicationRequestIntent,

    /// Type of medication usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Indicates how quickly the Medication Request should be addressed with respect to other
    /// requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<MedicationRequestPriority>,

    /// Medication to be taken.
    #[serde(flatten, with = "crate::choice::required")]
    pub medication: MedicationRequestMedication,

    /// Who or group medication request is for.
    pub subject: Reference,

    /// Created during encounter/admission/stay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Information to support ordering of the medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_information: Option<Vec<Reference>>,

    /// When request was initially authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Who/What requested the Request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<MedicationRequestRequester>,

    /// Person who entered the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorder: Option<Reference>,

    /// Reason or indication for writing the prescription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Condition or Observation that supports why the prescription is being written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Information about the prescription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// How the medication should be taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage_instruction: Option<Vec<Dosage>>,

    /// Medication supply authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispense_request: Option<MedicationRequestDispenseRequest>,

    /// Any restrictions on medication substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<MedicationRequestSubstitution>,

    /// An order/prescription that is being replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_prescription: Option<Reference>,

    /// Clinical Issue with action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_issue: Option<Vec<Reference>>,

    /// A list of events of interest in the lifecycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_history: Option<Vec<Reference>>,
}

choice_type! {
    /// Medication to be taken.
    pub enum MedicationRequestMedication("medication[x]") {
        CodeableConcept(CodeableConcept) = "medicationCodeableConcept",
        Reference(Reference) = "medicationReference",
    }
}

/// Indicates the specific details for the dispense or medication supply part of a medication
/// request (also known as a Medication Prescription or Medication Order). Note that this
/// information is not always sent with the order. There may be in some settings (e.g. hospitals)
/// institutional or system support for completing the dispense details in the pharmacy department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequestDispenseRequest {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Time period supply is authorized for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<Period>,

    /// Number of refills authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_repeats_allowed: Option<u32>,

    /// Amount of medication to supply per dispense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Number of days supply per dispense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_supply_duration: Option<Duration>,

    /// Intended dispenser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Reference>,
}

/// The individual, organization or device that initiated the request and has responsibility for its
/// activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequestRequester {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Who ordered the initial medication(s).
    pub agent: Reference,

    /// Organization agent is acting for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
}

/// Indicates whether or not substitution can or should be part of the dispense. In some cases
/// substitution must happen, in other cases substitution must not happen. This block explains the
/// prescriber's intent. If nothing is specified substitution may be done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequestSubstitution {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Whether substitution is allowed or not.
    pub allowed: bool,

    /// Why should (not) substitution be made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,
}

/// The kind of medication order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationRequestIntent {
    Proposal,
    Plan,
    Order,
    InstanceOrder,
}

/// Identifies the level of importance to be assigned to actioning the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationRequestPriority {
    Routine,
    Urgent,
    Stat,
    Asap,
}

/// A coded concept specifying the state of the prescribing event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationRequestStatus {
    Active,
    OnHold,
    Cancelled,
    Completed,
    EnteredInError,
    Stopped,
    Draft,
    Unknown,
}

impl_domain_resource!(MedicationRequest);
impl_backbone_element!(
    MedicationRequestDispenseRequest,
    MedicationRequestRequester,
    MedicationRequestSubstitution,
);
