//! NamingSystem resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/NamingSystem

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::PublicationStatus;
use crate::datatypes::{
    CodeableConcept, ContactDetail, Extension, Meta, Narrative, Period, Reference, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A curated namespace that issues unique symbols within that namespace for the identification of
/// concepts, people, devices, etc. Represents a "System" used within the Identifier and Coding data
/// types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingSystem {
    /// Resource type - always "NamingSystem"
    #[serde(default)]
    pub resource_type: ResourceTag<NamingSystem>,

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

    /// Name for this naming system (computer friendly).
    pub name: String,

    /// The status of this naming system. Enables tracking the life-cycle of the content.
    pub status: PublicationStatus,

    /// Indicates the purpose for the naming system - what kinds of things does it make unique?
    pub kind: NamingSystemType,

    /// Date this was last changed.
    pub date: DateTime,

    /// Name of the publisher (organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Who maintains system namespace?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,

    /// e.g. driver, provider, patient, bank etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Natural language description of the naming system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for naming system (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// How/where is it used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Unique identifiers used for system.
    #[serde(deserialize_with = "non_empty::unique_id")]
    pub unique_id: Vec<NamingSystemUniqueId>,

    /// Use this instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_by: Option<Reference>,
}

/// Indicates how the system may be identified when referenced in electronic exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingSystemUniqueId {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifies the unique identifier scheme used for this particular identifier.
    #[serde(rename = "type")]
    pub r#type: NamingSystemIdentifierType,

    /// The unique identifier.
    pub value: String,

    /// Is this the id that should be used for this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,

    /// Notes about identifier usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// When is identifier valid?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Identifies the style of unique identifier used to identify a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingSystemIdentifierType {
    Oid,
    Uuid,
    Uri,
    Other,
}

/// Identifies the purpose of the naming system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingSystemType {
    Codesystem,
    Identifier,
    Root,
}

non_empty_lists! {
    unique_id = "uniqueId",
}

impl_domain_resource!(NamingSystem);
impl_backbone_element!(NamingSystemUniqueId);
