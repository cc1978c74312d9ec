//! Library resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Library

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::PublicationStatus;
use crate::datatypes::{
    Attachment, CodeableConcept, ContactDetail, Contributor, DataRequirement, Extension, Identifier,
    Meta, Narrative, ParameterDefinition, Period, RelatedArtifact, UsageContext,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// The Library resource is a general-purpose container for knowledge asset definitions. It can be
/// used to describe and expose existing knowledge assets such as logic libraries and information
/// model descriptions, as well as to describe a collection of knowledge assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    /// Resource type - always "Library"
    #[serde(default)]
    pub resource_type: ResourceTag<Library>,

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

    /// Logical URI to reference this library (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Business version of the library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this library (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this library (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this library. Enables tracking the life-cycle of the content.
    pub status: PublicationStatus,

    /// For testing purposes, not real usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    /// logic-library | model-definition | asset-collection | module-definition.
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Date this was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Name of the publisher (organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Natural language description of the library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Why this library is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Describes the clinical usage of the library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// When the library was approved by publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<Date>,

    /// When the library was last reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<Date>,

    /// When the library is expected to be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for library (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// E.g. Education, Treatment, Assessment, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Vec<CodeableConcept>>,

    /// A content contributor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Vec<Contributor>>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Additional documentation, citations, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,

    /// Parameters defined by the library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Vec<ParameterDefinition>>,

    /// What data is referenced by this library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_requirement: Option<Vec<DataRequirement>>,

    /// Contents of the library, either embedded or referenced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Attachment>>,
}

impl_domain_resource!(Library);
