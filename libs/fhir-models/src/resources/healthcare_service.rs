//! HealthcareService resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/HealthcareService

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::DaysOfWeek;
use crate::datatypes::{
    Attachment, CodeableConcept, ContactPoint, Extension, Identifier, Meta, Narrative, Period,
    Reference,
};
use crate::primitives::Time;
use crate::resources::Resource;

/// The details of a healthcare service available at a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareService {
    /// Resource type - always "HealthcareService"
    #[serde(default)]
    pub resource_type: ResourceTag<HealthcareService>,

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

    /// External identifiers for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this healthcareservice is in active use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Organization that provides this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provided_by: Option<Reference>,

    /// Broad category of service being performed or delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Type of service that may be delivered or performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// Specialties handled by the HealthcareService.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Vec<CodeableConcept>>,

    /// Location(s) where service may be provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<Reference>>,

    /// Description of service as presented to a consumer while searching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Additional description and/or any specific issues not covered elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Extra details about the service that can't be placed in the other fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_details: Option<String>,

    /// Facilitates quick identification of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Attachment>,

    /// Contacts related to the healthcare service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Location(s) service is inteded for/available to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_area: Option<Vec<Reference>>,

    /// Conditions under which service is available/offered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provision_code: Option<Vec<CodeableConcept>>,

    /// Specific eligibility requirements required to use the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<CodeableConcept>,

    /// Describes the eligibility conditions for the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_note: Option<String>,

    /// Program Names that categorize the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<Vec<String>>,

    /// Collection of characteristics (attributes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristic: Option<Vec<CodeableConcept>>,

    /// Ways that the service accepts referrals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_method: Option<Vec<CodeableConcept>>,

    /// If an appointment is required for access to this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_required: Option<bool>,

    /// Times the Service Site is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_time: Option<Vec<HealthcareServiceAvailableTime>>,

    /// Not available during this time due to provided reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_available: Option<Vec<HealthcareServiceNotAvailable>>,

    /// Description of availability exceptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_exceptions: Option<String>,

    /// Technical endpoints providing access to services operated for the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,
}

/// A collection of times that the Service Site is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareServiceAvailableTime {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Indicates which days of the week are available between the start and end Times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<DaysOfWeek>>,

    /// Always available? e.g. 24 hour service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,

    /// Opening time of day (ignored if allDay = true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_start_time: Option<Time>,

    /// Closing time of day (ignored if allDay = true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_end_time: Option<Time>,
}

/// The HealthcareService is not available during this period of time due to the provided reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareServiceNotAvailable {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reason presented to the user explaining why time not available.
    pub description: String,

    /// Service not availablefrom this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub during: Option<Period>,
}

impl_domain_resource!(HealthcareService);
impl_backbone_element!(HealthcareServiceAvailableTime, HealthcareServiceNotAvailable);
