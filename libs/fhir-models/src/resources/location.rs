//! Location resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Location

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Address, CodeableConcept, Coding, ContactPoint, Extension, Identifier, Meta, Narrative,
    Reference,
};
use crate::primitives::Decimal;
use crate::resources::Resource;

/// Details and position information for a physical place where services are provided and resources
/// and participants may be stored, found, contained or accommodated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Resource type - always "Location"
    #[serde(default)]
    pub resource_type: ResourceTag<Location>,

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

    /// Unique code or number identifying the location to its users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// The status property covers the general availability of the resource, not the current value
    /// which may be covered by the operationStatus, or by a schedule/slots if they are configured
    /// for the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LocationStatus>,

    /// The Operational status of the location (typically only for a bed/room).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_status: Option<Coding>,

    /// Name of the location as used by humans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A list of alternate names that the location is known as, or was known as in the past.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,

    /// Additional details about the location that could be displayed as further information to
    /// identify the location beyond its name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Indicates whether a resource instance represents a specific location or a class of
    /// locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<LocationMode>,

    /// Type of function performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Contact details of the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<Vec<ContactPoint>>,

    /// Physical location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Physical form of the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_type: Option<CodeableConcept>,

    /// The absolute geographic location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LocationPosition>,

    /// Organization responsible for provisioning and upkeep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    /// Another Location this one is physically part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,

    /// Technical endpoints providing access to services operated for the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<Reference>>,
}

/// The absolute geographic location of the Location, expressed using the WGS84 datum (This is the
/// same co-ordinate system used in KML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPosition {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Longitude with WGS84 datum.
    pub longitude: Decimal,

    /// Latitude with WGS84 datum.
    pub latitude: Decimal,

    /// Altitude with WGS84 datum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Decimal>,
}

/// Indicates whether a resource instance represents a specific location or a class of locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationMode {
    Instance,
    Kind,
}

/// Indicates whether the location is still in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationStatus {
    Active,
    Suspended,
    Inactive,
}

impl_domain_resource!(Location);
impl_backbone_element!(LocationPosition);
