//! ConceptMap resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ConceptMap

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::PublicationStatus;
use crate::datatypes::{
    CodeableConcept, ContactDetail, Extension, Identifier, Meta, Narrative, Reference, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A statement of relationships from one set of concepts to one or more other concepts - either
/// code systems or data elements, or classes in class models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMap {
    /// Resource type - always "ConceptMap"
    #[serde(default)]
    pub resource_type: ResourceTag<ConceptMap>,

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

    /// Logical URI to reference this concept map (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the concept map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Business version of the concept map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this concept map (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this concept map (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this concept map. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the concept map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for concept map (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this concept map is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Identifies the source of the concepts which are being mapped.
    #[serde(flatten, with = "crate::choice::optional")]
    pub source: Option<ConceptMapSource>,

    /// Provides context to the mappings.
    #[serde(flatten, with = "crate::choice::optional")]
    pub target: Option<ConceptMapTarget>,

    /// Same source and target systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<ConceptMapGroup>>,
}

choice_type! {
    /// Identifies the source of the concepts which are being mapped.
    pub enum ConceptMapSource("source[x]") {
        Uri(String) = "sourceUri",
        Reference(Reference) = "sourceReference",
    }
}

choice_type! {
    /// Provides context to the mappings.
    pub enum ConceptMapTarget("target[x]") {
        Uri(String) = "targetUri",
        Reference(Reference) = "targetReference",
    }
}

/// A group of mappings that all have the same source and target system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMapGroup {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code System (if value set crosses code systems).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Specific version of the code system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,

    /// System of the target (if necessary).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Specific version of the code system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,

    /// Mappings for a concept from the source set.
    #[serde(deserialize_with = "non_empty::element")]
    pub element: Vec<ConceptMapGroupElement>,

    /// When no match in the mappings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmapped: Option<ConceptMapGroupUnmapped>,
}

/// Mappings for an individual concept in the source to one or more concepts in the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMapGroupElement {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifies element being mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Display for the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Concept in target system for element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<ConceptMapGroupElementTarget>>,
}

/// A concept from the target value set that this concept maps to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMapGroupElementTarget {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code that identifies the target element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Display for the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// The equivalence between the source and target concepts (counting for the dependencies and
    /// products). The equivalence is read from target to source (e.g. the target is 'wider' than
    /// the source).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalence: Option<ConceptMapEquivalence>,

    /// Description of status/issues in mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Other elements required for this mapping (from context).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<ConceptMapGroupElementTargetDependsOn>>,

    /// Other concepts that this mapping also produces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Vec<ConceptMapGroupElementTargetDependsOn>>,
}

/// A set of additional dependencies for this mapping to hold. This mapping is only applicable if
/// the specified element can be resolved, and it has the specified value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMapGroupElementTargetDependsOn {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reference to property mapping depends on.
    pub property: String,

    /// Code System (if necessary).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Value of the referenced element.
    pub code: String,

    /// Display for the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// What to do when there is no match in the mappings in the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMapGroupUnmapped {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Defines which action to take if there is no match in the group. One of 3 actions is
    /// possible: use the unmapped code (this is useful when doing a mapping between versions, and
    /// only a few codes have changed), use a fixed code (a default code), or alternatively, a
    /// reference to a different concept map can be provided (by canonical URL).
    pub mode: ConceptMapGroupUnmappedMode,

    /// Fixed code when mode = fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Display for the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Canonical URL for other concept map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The degree of equivalence between concepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConceptMapEquivalence {
    Relatedto,
    Equivalent,
    Equal,
    Wider,
    Subsumes,
    Narrower,
    Specializes,
    Inexact,
    Unmatched,
    Disjoint,
}

/// Defines which action to take if there is no match in the group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConceptMapGroupUnmappedMode {
    Provided,
    Fixed,
    OtherMap,
}

non_empty_lists! {
    element = "element",
}

impl_domain_resource!(ConceptMap);
impl_backbone_element!(
    ConceptMapGroup,
    ConceptMapGroupElement,
    ConceptMapGroupElementTarget,
    ConceptMapGroupElementTargetDependsOn,
    ConceptMapGroupUnmapped,
);
