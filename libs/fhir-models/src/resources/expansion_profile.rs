//! ExpansionProfile resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ExpansionProfile

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::PublicationStatus;
use crate::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Resource to define constraints on the Expansion of a FHIR ValueSet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfile {
    /// Resource type - always "ExpansionProfile"
    #[serde(default)]
    pub resource_type: ResourceTag<ExpansionProfile>,

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

    /// Logical URI to reference this expansion profile (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the expansion profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Business version of the expansion profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this expansion profile (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The status of this expansion profile. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the expansion profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for expansion profile (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Fix use of a code system to a particular version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_version: Option<Vec<ExpansionProfileFixedVersion>>,

    /// Systems/Versions to be exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_system: Option<ExpansionProfileExcludedSystem>,

    /// Whether the expansion should include concept designations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_designations: Option<bool>,

    /// When the expansion profile imposes designation contraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<ExpansionProfileDesignation>,

    /// Include or exclude the value set definition in the expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_definition: Option<bool>,

    /// Include or exclude inactive concepts in the expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,

    /// Nested codes in the expansion or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_nested: Option<bool>,

    /// Include or exclude codes which cannot be rendered in user interfaces in the value set
    /// expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "excludeNotForUI")]
    pub exclude_not_for_ui: Option<bool>,

    /// Include or exclude codes which are post coordinated expressions in the value set expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_post_coordinated: Option<bool>,

    /// Specify the language for the display element of codes in the value set expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_language: Option<String>,

    /// Controls behaviour of the value set expand operation when value sets are too large to be
    /// completely expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limited_expansion: Option<bool>,
}

/// A set of criteria that provide the constraints imposed on the value set expansion by including
/// or excluding designations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfileDesignation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Designations to be included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<ExpansionProfileDesignationInclude>,

    /// Designations to be excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<ExpansionProfileDesignationExclude>,
}

/// Designations to be excluded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfileDesignationExclude {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The designation to be excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Vec<ExpansionProfileDesignationExcludeDesignation>>,
}

/// A data group for each designation to be excluded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfileDesignationExcludeDesignation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Human language of the designation to be excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// What kind of Designation to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "use")]
    pub r#use: Option<Coding>,
}

/// Designations to be included
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfileDesignationInclude {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The designation to be included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Vec<ExpansionProfileDesignationIncludeDesignation>>,
}

/// A data group for each designation to be included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfileDesignationIncludeDesignation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Human language of the designation to be included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// What kind of Designation to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "use")]
    pub r#use: Option<Coding>,
}

/// Code system, or a particular version of a code system to be excluded from value set expansions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfileExcludedSystem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The specific code system to be excluded.
    pub system: String,

    /// Specific version of the code system referred to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Fix use of a particular code system to a particular version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionProfileFixedVersion {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// System to have its version fixed.
    pub system: String,

    /// Specific version of the code system referred to.
    pub version: String,

    /// How to manage the intersection between a fixed version in a value set, and this fixed
    /// version of the system in the expansion profile.
    pub mode: SystemVersionProcessingMode,
}

/// How to manage the intersection between a fixed version and the system version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemVersionProcessingMode {
    Default,
    Check,
    Override,
}

impl_domain_resource!(ExpansionProfile);
impl_backbone_element!(
    ExpansionProfileDesignation,
    ExpansionProfileDesignationExclude,
    ExpansionProfileDesignationExcludeDesignation,
    ExpansionProfileDesignationInclude,
    ExpansionProfileDesignationIncludeDesignation,
    ExpansionProfileExcludedSystem,
    ExpansionProfileFixedVersion,
);
