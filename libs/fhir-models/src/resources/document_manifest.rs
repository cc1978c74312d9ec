//! DocumentManifest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/DocumentManifest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::DocumentReferenceStatus;
use crate::datatypes::{
    Attachment, CodeableConcept, Extension, Identifier, Meta, Narrative, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A collection of documents compiled for a purpose together with metadata that applies to the
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentManifest {
    /// Resource type - always "DocumentManifest"
    #[serde(default)]
    pub resource_type: ResourceTag<DocumentManifest>,

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

    /// Unique Identifier for the set of documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_identifier: Option<Identifier>,

    /// Other identifiers for the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// The status of this document manifest.
    pub status: DocumentReferenceStatus,

    /// Kind of document set.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// The subject of the set of documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// When this document manifest created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,

    /// Who and/or what authored the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Reference>>,

    /// Intended to get notified about this set of documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Vec<Reference>>,

    /// The source system/application/software.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Human-readable description (title).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The items included.
    #[serde(deserialize_with = "non_empty::content")]
    pub content: Vec<DocumentManifestContent>,

    /// Related things.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<DocumentManifestRelated>>,
}

/// The list of Documents included in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentManifestContent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contents of this set of documents.
    #[serde(flatten, with = "crate::choice::required")]
    pub p: DocumentManifestContentP,
}

choice_type! {
    /// Contents of this set of documents.
    pub enum DocumentManifestContentP("p[x]") {
        Attachment(Attachment) = "pAttachment",
        Reference(Reference) = "pReference",
    }
}

/// Related identifiers or resources associated with the DocumentManifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentManifestRelated {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifiers of things that are related.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Related Resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "ref")]
    pub r#ref: Option<Reference>,
}

non_empty_lists! {
    content = "content",
}

impl_domain_resource!(DocumentManifest);
impl_backbone_element!(DocumentManifestContent, DocumentManifestRelated);
