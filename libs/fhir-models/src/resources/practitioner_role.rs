//! PractitionerRole resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/PractitionerRole

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::DaysOfWeek;
use crate::datatypes::{
    CodeableConcept, ContactPoint, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::Time;
use crate::resources::Resource;

/// A specific set of Roles/Locations/specialties/services that a practitioner may perform at an
/// organization for a period of time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerRole {
    /// Resource type - always "PractitionerRole"
    #[serde(default)]
    pub resource_type: ResourceTag<PractitionerRole>,

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

    /// Business Identifiers that are specific to a role/location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Whether this practitioner's record is in active use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// The period during which the practitioner is authorized to perform in these role(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Practitioner that is able to provide the defined services for the organation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practitioner: Option<Reference>,

    /// Organization where the roles are available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// Roles which this practitioner may perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<CodeableConcept>>,

    /// Specific specialty of the practitioner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Vec<CodeableConcept>>,

    /// The location(s) at which this practitioner provides care.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<Reference>>,

    /// The list of healthcare services that this worker provides for this role's
    /// Organization/Location(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcare_service: Option<Vec<Reference>>,

    /// Contact details that are specific to the role/location/service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Times the Service Site is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_time: Option<Vec<PractitionerRoleAvailableTime>>,

    /// Not available during this time due to provided reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_available: Option<Vec<PractitionerRoleNotAvailable>>,

    /// Description of availability exceptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_exceptions: Option<String>,

    /// Technical endpoints providing access to services operated for the practitioner with this
    /// role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,
}

/// A collection of times that the Service Site is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerRoleAvailableTime {
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
pub struct PractitionerRoleNotAvailable {
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

impl_domain_resource!(PractitionerRole);
impl_backbone_element!(PractitionerRoleAvailableTime, PractitionerRoleNotAvailable);
