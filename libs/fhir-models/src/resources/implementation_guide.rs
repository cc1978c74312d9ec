//! ImplementationGuide resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ImplementationGuide

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{PublicationStatus, ResourceType};
use crate::datatypes::{
    CodeableConcept, ContactDetail, Extension, Meta, Narrative, Reference, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A set of rules of how FHIR is used to solve a particular problem. This resource is used to
/// gather all the parts of an implementation guide into a logical whole and to publish a computable
/// definition of all the parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuide {
    /// Resource type - always "ImplementationGuide"
    #[serde(default)]
    pub resource_type: ResourceTag<ImplementationGuide>,

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

    /// Logical URI to reference this implementation guide (globally unique).
    pub url: String,

    /// Business version of the implementation guide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this implementation guide (computer friendly).
    pub name: String,

    /// The status of this implementation guide. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the implementation guide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for implementation guide (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// FHIR Version this Implementation Guide targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_version: Option<String>,

    /// Another Implementation guide this depends on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency: Option<Vec<ImplementationGuideDependency>>,

    /// Group of resources as used in .page.package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<Vec<ImplementationGuidePackage>>,

    /// Profiles that apply globally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<Vec<ImplementationGuideGlobal>>,

    /// Image, css, script, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<Vec<String>>,

    /// Page/Section in the Guide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<ImplementationGuidePage>,
}

/// Another implementation guide that this implementation depends on. Typically, an implementation
/// guide uses value sets, profiles etc.defined in other implementation guides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDependency {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How the dependency is represented when the guide is published.
    #[serde(rename = "type")]
    pub r#type: GuideDependencyType,

    /// Where to find dependency.
    pub uri: String,
}

/// A set of profiles that all resources covered by this implementation guide must conform to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideGlobal {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The type of resource that all instances must conform to.
    #[serde(rename = "type")]
    pub r#type: ResourceType,

    /// Profile that all resources must conform to.
    pub profile: Reference,
}

/// A logical group of resources. Logical groups can be used when building pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuidePackage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name used .page.package.
    pub name: String,

    /// Human readable text describing the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resource in the implementation guide.
    #[serde(deserialize_with = "non_empty::resource")]
    pub resource: Vec<ImplementationGuidePackageResource>,
}

/// A resource that is part of the implementation guide. Conformance resources (value set, structure
/// definition, capability statements etc.) are obvious candidates for inclusion, but any kind of
/// resource can be included as an example resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuidePackageResource {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// If not an example, has its normal meaning.
    pub example: bool,

    /// Human Name for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Reason why included in guide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Short code to identify the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,

    /// Location of the resource.
    #[serde(flatten, with = "crate::choice::required")]
    pub source: ImplementationGuidePackageResourceSource,

    /// Resource this is an example of (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_for: Option<Reference>,
}

choice_type! {
    /// Location of the resource.
    pub enum ImplementationGuidePackageResourceSource("source[x]") {
        Uri(String) = "sourceUri",
        Reference(Reference) = "sourceReference",
    }
}

/// A page / section in the implementation guide. The root page is the implementation guide home
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuidePage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Where to find that page.
    pub source: String,

    /// Short title shown for navigational assistance.
    pub title: String,

    /// The kind of page that this is. Some pages are autogenerated (list, example), and other kinds
    /// are of interest so that tools can navigate the user to the page of interest.
    pub kind: GuidePageKind,

    /// For constructed pages, what kind of resources to include in the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<ResourceType>>,

    /// Name of package to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<Vec<String>>,

    /// Format of the page (e.g. html, markdown, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Nested Pages / Sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Vec<ImplementationGuidePage>>,
}

/// How a dependency is represented when the guide is published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideDependencyType {
    Reference,
    Inclusion,
}

/// The kind of an included page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuidePageKind {
    Page,
    Example,
    List,
    Include,
    Directory,
    Dictionary,
    Toc,
    Resource,
}

non_empty_lists! {
    resource = "resource",
}

impl_domain_resource!(ImplementationGuide);
impl_backbone_element!(
    ImplementationGuideDependency,
    ImplementationGuideGlobal,
    ImplementationGuidePackage,
    ImplementationGuidePackageResource,
    ImplementationGuidePage,
);
