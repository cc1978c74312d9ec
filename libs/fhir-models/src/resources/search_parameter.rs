//! SearchParameter resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/SearchParameter

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{PublicationStatus, ResourceType, SearchParamType};
use crate::datatypes::{
    CodeableConcept, ContactDetail, Extension, Meta, Narrative, Reference, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A search parameter that defines a named search item that can be used to search/filter on a
/// resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameter {
    /// Resource type - always "SearchParameter"
    #[serde(default)]
    pub resource_type: ResourceTag<SearchParameter>,

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

    /// Logical URI to reference this search parameter (globally unique).
    pub url: String,

    /// Business version of the search parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this search parameter (computer friendly).
    pub name: String,

    /// The status of this search parameter. Enables tracking the life-cycle of the content.
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

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for search parameter (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this search parameter is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Code used in URL.
    pub code: String,

    /// The base resource type(s) that this search parameter can be used against.
    #[serde(deserialize_with = "non_empty::base")]
    pub base: Vec<ResourceType>,

    /// The type of value a search parameter refers to, and how the content is interpreted.
    #[serde(rename = "type")]
    pub r#type: SearchParamType,

    /// Original Definition for the search parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<String>,

    /// Natural language description of the search parameter.
    pub description: String,

    /// FHIRPath expression that extracts the values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// XPath that extracts the values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// How the search parameter relates to the set of elements returned by evaluating the xpath
    /// query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath_usage: Option<XPathUsageType>,

    /// Types of resource (if a resource is referenced).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<ResourceType>>,

    /// Comparators supported for the search parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Vec<SearchComparator>>,

    /// A modifier supported for the search parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<SearchModifierCode>>,

    /// Chained names supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Vec<String>>,

    /// For Composite resources to define the parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Vec<SearchParameterComponent>>,
}

/// Used to define the parts of a composite search parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameterComponent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Defines how the part works.
    pub definition: Reference,

    /// Subexpression relative to main expression.
    pub expression: String,
}

/// What search comparator to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchComparator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Sa,
    Eb,
    Ap,
}

/// A supported modifier for a search parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchModifierCode {
    Missing,
    Exact,
    Contains,
    Not,
    Text,
    In,
    NotIn,
    Below,
    Above,
    Type,
}

/// How a search parameter relates to the set of elements returned by evaluating its xpath query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XPathUsageType {
    Normal,
    Phonetic,
    Nearby,
    Distance,
    Other,
}

non_empty_lists! {
    base = "base",
}

impl_domain_resource!(SearchParameter);
impl_backbone_element!(SearchParameterComponent);
