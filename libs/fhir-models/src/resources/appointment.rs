//! Appointment resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Appointment

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference};
use crate::primitives::{DateTime, Instant};
use crate::resources::Resource;

/// A booking of a healthcare event among patient(s), practitioner(s), related person(s) and/or
/// device(s) for a specific date/time. This may result in one or more Encounter(s)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Resource type - always "Appointment"
    #[serde(default)]
    pub resource_type: ResourceTag<Appointment>,

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

    /// External Ids for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// The overall status of the Appointment. Each of the participants has their own participation
    /// status which indicates their involvement in the process, however this status indicates the
    /// shared status.
    pub status: AppointmentStatus,

    /// A broad categorisation of the service that is to be performed during this appointment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_category: Option<CodeableConcept>,

    /// The specific service that is to be performed during this appointment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<Vec<CodeableConcept>>,

    /// The specialty of a practitioner that would be required to perform the service requested in
    /// this appointment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Vec<CodeableConcept>>,

    /// The style of appointment or patient that has been booked in the slot (not service type).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<CodeableConcept>,

    /// Reason this appointment is scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableConcept>>,

    /// Reason the appointment is to takes place (resource).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indication: Option<Vec<Reference>>,

    /// Used to make informed decisions if needing to re-prioritize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// Shown on a subject line in a meeting request, or appointment list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional information to support the appointment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_information: Option<Vec<Reference>>,

    /// When appointment is to take place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Instant>,

    /// When appointment is to conclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Instant>,

    /// Can be less than start/end (e.g. estimate).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_duration: Option<u32>,

    /// The slots that this appointment is filling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<Vec<Reference>>,

    /// The date that this appointment was initially created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,

    /// Additional comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// The ReferralRequest provided as information to allocate to the Encounter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_referral: Option<Vec<Reference>>,

    /// Participants involved in appointment.
    #[serde(deserialize_with = "non_empty::participant")]
    pub participant: Vec<AppointmentParticipant>,

    /// Potential date/time interval(s) requested to allocate the appointment within.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_period: Option<Vec<Period>>,
}

/// List of participants involved in the appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Role of participant in the appointment.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// Person, Location/HealthcareService or Device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference>,

    /// Is this participant required to be present at the meeting. This covers a use- case where 2
    /// doctors need to meet to discuss the results for a specific patient, and the patient is not
    /// required to be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<ParticipantRequired>,

    /// Participation status of the actor.
    pub status: ParticipationStatus,
}

/// The free/busy status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Proposed,
    Pending,
    Booked,
    Arrived,
    Fulfilled,
    Cancelled,
    Noshow,
    EnteredInError,
}

/// Is the participant required to attend the appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipantRequired {
    Required,
    Optional,
    InformationOnly,
}

/// The participation status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipationStatus {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
}

non_empty_lists! {
    participant = "participant",
}

impl_domain_resource!(Appointment);
impl_backbone_element!(AppointmentParticipant);
