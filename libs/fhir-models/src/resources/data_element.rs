//! DataElement resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/DataElement

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::PublicationStatus;
use crate::datatypes::{
    CodeableConcept, ContactDetail, ElementDefinition, Extension, Identifier, Meta, Narrative,
    UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// The formal description of a single piece of information that can be gathered and reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataElement {
    /// Resource type - always "DataElement"
    #[serde(default)]
    pub resource_type: ResourceTag<DataElement>,

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

    /// Logical URI to reference this data element (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the data element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Business version of the data element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The status of this data element. Enables tracking the life-cycle of the content.
    pub status: PublicationStatus,

    /// For testing purposes, not real usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    /// Date this was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Name of the publisher (organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Name for this data element (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this data element (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for data element (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Identifies how precise the data element is in its definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stringency: Option<DataElementStringency>,

    /// External specification mapped to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Vec<DataElementMapping>>,

    /// Definition of element.
    #[serde(deserialize_with = "non_empty::element")]
    pub element: Vec<ElementDefinition>,
}

/// Identifies a specification (other than a terminology) that the elements which make up the
/// DataElement have some correspondence with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataElementMapping {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Internal id when this mapping is used.
    pub identity: String,

    /// Identifies what this mapping refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Names what this mapping refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Versions, issues, scope limitations, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Indicates the degree of precision of the data element definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataElementStringency {
    Comparable,
    FullySpecified,
    Equivalent,
    Convertable,
    Scaleable,
    Flexible,
}

non_empty_lists! {
    element = "element",
}

impl_domain_resource!(DataElement);
impl_backbone_element!(DataElementMapping);
