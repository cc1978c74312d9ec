//! Device resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Device

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, ContactPoint, Extension, Identifier, Meta, Narrative, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// This resource identifies an instance or a type of a manufactured item that is used in the
/// provision of healthcare without being substantially changed through that activity. The device
/// may be a medical or non-medical device. Medical devices include durable (reusable) medical
/// equipment, implantable devices, as well as disposable equipment used for diagnostic, treatment,
/// and research for healthcare and public health. Non-medical devices may include items such as a
/// machine, cellphone, computer, application, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Resource type - always "Device"
    #[serde(default)]
    pub resource_type: ResourceTag<Device>,

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

    /// Instance identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Unique Device Identifier (UDI) Barcode string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<DeviceUdi>,

    /// Status of the Device availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FHIRDeviceStatus>,

    /// What kind of device this is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Lot number of manufacture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,

    /// Name of device manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// Date when the device was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<DateTime>,

    /// Date and time of expiry of this device (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime>,

    /// Model id assigned by the manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Version number (i.e. software).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Patient to whom Device is affixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    /// Organization responsible for device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,

    /// Details for human/organization for support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactPoint>>,

    /// Where the resource is found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Network address to contact device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Device notes and comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Safety Characteristics of Device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<Vec<CodeableConcept>>,
}

/// [Unique device identifier (UDI)](device.html#5.11.3.2.2) assigned to device label or package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUdi {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Mandatory fixed portion of UDI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_identifier: Option<String>,

    /// Device Name as appears on UDI label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Regional UDI authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    /// UDI Human Readable Barcode String.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "carrierHRF")]
    pub carrier_hrf: Option<String>,

    /// UDI Machine Readable Barcode String.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "carrierAIDC")]
    pub carrier_aidc: Option<String>,

    /// UDI Issuing Organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// A coded entry to indicate how the data was entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<UDIEntryType>,
}

/// The availability status of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FHIRDeviceStatus {
    Active,
    Inactive,
    EnteredInError,
    Unknown,
}

/// Codes to identify how UDI data was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UDIEntryType {
    Barcode,
    Rfid,
    Manual,
    Card,
    SelfReported,
    Unknown,
}

impl_domain_resource!(Device);
impl_backbone_element!(DeviceUdi);
