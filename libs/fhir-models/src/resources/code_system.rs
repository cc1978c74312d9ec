//! CodeSystem resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/CodeSystem

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{FilterOperator, PublicationStatus};
use crate::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A code system resource specifies a set of codes drawn from one or more code systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    /// Resource type - always "CodeSystem"
    #[serde(default)]
    pub resource_type: ResourceTag<CodeSystem>,

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

    /// Logical URI to reference this code system (globally unique) (Coding.system).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the code system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Business version of the code system (Coding.version).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this code system (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this code system (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this code system. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the code system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for code system (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this code system is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// If code comparison is case sensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    /// Canonical URL for value set with entire code system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,

    /// The meaning of the hierarchy of concepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_meaning: Option<CodeSystemHierarchyMeaning>,

    /// If code system defines a post-composition grammar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compositional: Option<bool>,

    /// If definitions are not stable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_needed: Option<bool>,

    /// How much of the content of the code system - the concepts and codes it defines - are
    /// represented in this resource.
    pub content: CodeSystemContentMode,

    /// Total concepts in the code system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Filter that can be used in a value set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<CodeSystemFilter>>,

    /// Additional information supplied about each concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<CodeSystemProperty>>,

    /// Concepts in the code system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<CodeSystemConcept>>,
}

/// Concepts that are in the code system. The concept definitions are inherently hierarchical, but
/// the definitions must be consulted to determine what the meaning of the hierarchical
/// relationships are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemConcept {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code that identifies concept.
    pub code: String,

    /// Text to display to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Formal definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// Additional representations for the concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Vec<CodeSystemConceptDesignation>>,

    /// Property value for the concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<CodeSystemConceptProperty>>,

    /// Child Concepts (is-a/contains/categorizes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<CodeSystemConcept>>,
}

/// Additional representations for the concept - other languages, aliases, specialized purposes,
/// used for particular purposes, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemConceptDesignation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Human language of the designation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Details how this designation would be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "use")]
    pub r#use: Option<Coding>,

    /// The text value for this designation.
    pub value: String,
}

/// A property value for this concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemConceptProperty {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reference to CodeSystem.property.code.
    pub code: String,

    /// Value of the property for this concept.
    #[serde(flatten, with = "crate::choice::required")]
    pub value: CodeSystemConceptPropertyValue,
}

choice_type! {
    /// Value of the property for this concept.
    pub enum CodeSystemConceptPropertyValue("value[x]") {
        Code(String) = "valueCode",
        Coding(Coding) = "valueCoding",
        String(String) = "valueString",
        Integer(i32) = "valueInteger",
        Boolean(bool) = "valueBoolean",
        DateTime(DateTime) = "valueDateTime",
    }
}

/// A filter that can be used in a value set compose statement when selecting concepts using a
/// filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemFilter {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code that identifies the filter.
    pub code: String,

    /// How or why the filter is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A list of operators that can be used with the filter.
    #[serde(deserialize_with = "non_empty::operator")]
    pub operator: Vec<FilterOperator>,

    /// What to use for the value.
    pub value: String,
}

/// A property defines an additional slot through which additional information can be provided about
/// a concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemProperty {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifies the property on the concepts, and when referred to in operations.
    pub code: String,

    /// Formal identifier for the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Why the property is defined, and/or what it conveys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The type of the property value. Properties of type "code" contain a code defined by the code
    /// system (e.g. a reference to anotherr defined concept).
    #[serde(rename = "type")]
    pub r#type: PropertyType,
}

/// How much of the content of the code system is represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeSystemContentMode {
    NotPresent,
    Example,
    Fragment,
    Complete,
}

/// The meaning of the hierarchy of concepts in a code system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeSystemHierarchyMeaning {
    GroupedBy,
    IsA,
    PartOf,
    ClassifiedWith,
}

/// The type of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Code,
    #[serde(rename = "Coding")]
    Coding,
    String,
    Integer,
    Boolean,
    DateTime,
}

non_empty_lists! {
    operator = "operator",
}

impl_domain_resource!(CodeSystem);
impl_backbone_element!(
    CodeSystemConcept,
    CodeSystemConceptDesignation,
    CodeSystemConceptProperty,
    CodeSystemFilter,
    CodeSystemProperty,
);
