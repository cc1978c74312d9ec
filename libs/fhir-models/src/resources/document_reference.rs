//! DocumentReference resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/DocumentReference

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{CompositionStatus, DocumentReferenceStatus, DocumentRelationshipType};
use crate::datatypes::{
    Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::{DateTime, Instant};
use crate::resources::Resource;

/// A reference to a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    /// Resource type - always "DocumentReference"
    #[serde(default)]
    pub resource_type: ResourceTag<DocumentReference>,

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

    /// Master Version Specific Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_identifier: Option<Identifier>,

    /// Other identifiers for the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// The status of this document reference.
    pub status: DocumentReferenceStatus,

    /// The status of the underlying document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_status: Option<CompositionStatus>,

    /// Kind of document (LOINC if possible).
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Categorization of document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<CodeableConcept>,

    /// Who/what is the subject of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Document creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,

    /// When this document reference was created.
    pub indexed: Instant,

    /// Who and/or what authored the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Reference>>,

    /// Who/what authenticated the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator: Option<Reference>,

    /// Organization which maintains the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custodian: Option<Reference>,

    /// Relationships to other documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relates_to: Option<Vec<DocumentReferenceRelatesTo>>,

    /// Human-readable description (title).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Document security-tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_label: Option<Vec<CodeableConcept>>,

    /// Document referenced.
    #[serde(deserialize_with = "non_empty::content")]
    pub content: Vec<DocumentReferenceContent>,

    /// Clinical context of document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<DocumentReferenceContext>,
}

/// The document and format referenced. There may be multiple content element repetitions, each with
/// a different format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReferenceContent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Where to access the document.
    pub attachment: Attachment,

    /// Format/content rules for the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Coding>,
}

/// The clinical context in which the document was prepared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReferenceContext {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Context of the document content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// Main clinical acts documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<CodeableConcept>>,

    /// Time of service that is being documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Kind of facility where patient was seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<CodeableConcept>,

    /// Additional details about where the content was created (e.g. clinical specialty).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_setting: Option<CodeableConcept>,

    /// Patient demographics from source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_patient_info: Option<Reference>,

    /// Related identifiers or resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<DocumentReferenceContextRelated>>,
}

/// Related identifiers or resources associated with the DocumentReference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReferenceContextRelated {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifier of related objects or events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Related Resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "ref")]
    pub r#ref: Option<Reference>,
}

/// Relationships that this document has with other document references that already exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReferenceRelatesTo {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The type of relationship that this document has with anther document.
    pub code: DocumentRelationshipType,

    /// Target of the relationship.
    pub target: Reference,
}

non_empty_lists! {
    content = "content",
}

impl_domain_resource!(DocumentReference);
impl_backbone_element!(
    DocumentReferenceContent,
    DocumentReferenceContext,
    DocumentReferenceContextRelated,
    DocumentReferenceRelatesTo,
);
