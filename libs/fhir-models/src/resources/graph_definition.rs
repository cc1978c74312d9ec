//! GraphDefinition resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/GraphDefinition

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{PublicationStatus, ResourceType};
use crate::datatypes::{CodeableConcept, ContactDetail, Extension, Meta, Narrative, UsageContext};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A formal computable definition of a graph of resources - that is, a coherent set of resources
/// that form a graph by following references. The Graph Definition resource defines a set and makes
/// rules about the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDefinition {
    /// Resource type - always "GraphDefinition"
    #[serde(default)]
    pub resource_type: ResourceTag<GraphDefinition>,

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

    /// Logical URI to reference this graph definition (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Business version of the graph definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this graph definition (computer friendly).
    pub name: String,

    /// The status of this graph definition. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the graph definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for graph definition (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this graph definition is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// The type of FHIR resource at which instances of this graph start.
    pub start: ResourceType,

    /// Profile on base resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Links this graph makes rules about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<GraphDefinitionLink>>,
}

/// Links this graph makes rules about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDefinitionLink {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Path in the resource that contains the link.
    pub path: String,

    /// Which slice (if profiled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_name: Option<String>,

    /// Minimum occurrences for this link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,

    /// Maximum occurrences for this link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    /// Why this link is specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Potential target for the link.
    #[serde(deserialize_with = "non_empty::target")]
    pub target: Vec<GraphDefinitionLinkTarget>,
}

/// Potential target for the link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDefinitionLinkTarget {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// None
    #[serde(rename = "type")]
    pub r#type: ResourceType,

    /// Profile for the target resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Compartment Consistency Rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment: Option<Vec<GraphDefinitionLinkTargetCompartment>>,

    /// Additional links from target resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<GraphDefinitionLink>>,
}

/// Compartment Consistency Rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDefinitionLinkTargetCompartment {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// None
    pub code: CompartmentType,

    /// identical | matching | different | no-rule | custom.
    pub rule: GraphCompartmentRule,

    /// Custom rule, as a FHIRPath expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Documentation for FHIRPath expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Which compartment a compartment definition describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompartmentType {
    Patient,
    Encounter,
    RelatedPerson,
    Practitioner,
    Device,
}

/// How a compartment must be linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphCompartmentRule {
    Identical,
    Matching,
    Different,
    Custom,
}

non_empty_lists! {
    target = "target",
}

impl_domain_resource!(GraphDefinition);
impl_backbone_element!(
    GraphDefinitionLink,
    GraphDefinitionLinkTarget,
    GraphDefinitionLinkTargetCompartment,
);
