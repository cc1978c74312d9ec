//! Composition resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Composition

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{CompositionStatus, DocumentRelationshipType};
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A set of healthcare-related information that is assembled together into a single logical
/// document that provides a single coherent statement of meaning, establishes its own context and
/// that has clinical attestation with regard to who is making the statement. While a Composition
/// defines the structure, it does not actually contain the content: rather the full content of a
/// document is contained in a Bundle, of which the Composition is the first resource contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// Resource type - always "Composition"
    #[serde(default)]
    pub resource_type: ResourceTag<Composition>,

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

    /// Logical identifier of composition (version-independent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// The workflow/clinical status of this composition. The status is a marker for the clinical
    /// standing of the document.
    pub status: CompositionStatus,

    /// Kind of composition (LOINC if possible).
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Categorization of Composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<CodeableConcept>,

    /// Who and/or what the composition is about.
    pub subject: Reference,

    /// Context of the Composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,

    /// Composition editing time.
    pub date: DateTime,

    /// Who and/or what authored the composition.
    #[serde(deserialize_with = "non_empty::author")]
    pub author: Vec<Reference>,

    /// Human Readable name/title.
    pub title: String,

    /// As defined by affinity domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidentiality: Option<String>,

    /// Attests to accuracy of composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attester: Option<Vec<CompositionAttester>>,

    /// Organization which maintains the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custodian: Option<Reference>,

    /// Relationships to other compositions/documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relates_to: Option<Vec<CompositionRelatesTo>>,

    /// The clinical service(s) being documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<CompositionEvent>>,

    /// Composition is broken into sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Vec<CompositionSection>>,
}

/// A participant who has attested to the accuracy of the composition/document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionAttester {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The type of attestation the authenticator offers.
    #[serde(deserialize_with = "non_empty::mode")]
    pub mode: Vec<CompositionAttestationMode>,

    /// When the composition was attested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime>,

    /// Who attested the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Reference>,
}

/// The clinical service, such as a colonoscopy or an appendectomy, being documented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionEvent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Code(s) that apply to the event being documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<CodeableConcept>>,

    /// The period covered by the documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// The event(s) being documented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<Reference>>,
}

/// Relationships that this composition has with other compositions or documents that already exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRelatesTo {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The type of relationship that this composition has with anther composition or document.
    pub code: DocumentRelationshipType,

    /// Target of the relationship.
    #[serde(flatten, with = "crate::choice::required")]
    pub target: CompositionRelatesToTarget,
}

choice_type! {
    /// Target of the relationship.
    pub enum CompositionRelatesToTarget("target[x]") {
        Identifier(Identifier) = "targetIdentifier",
        Reference(Reference) = "targetReference",
    }
}

/// The root of the sections that make up the composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSection {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Label for section (e.g. for ToC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Classification of section (recommended).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Text summary of the section, for human interpretation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    /// How the entry list was prepared - whether it is a working list that is suitable for being
    /// maintained on an ongoing basis, or if it represents a snapshot of a list of items from
    /// another source, or whether it is a prepared list where items may be marked as added,
    /// modified or deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ListMode>,

    /// Order of section entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_by: Option<CodeableConcept>,

    /// A reference to data that supports this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<Reference>>,

    /// Why the section is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<CodeableConcept>,

    /// Nested Section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Vec<CompositionSection>>,
}

/// The way in which a person authenticated a composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositionAttestationMode {
    Personal,
    Professional,
    Legal,
    Official,
}

/// The processing mode that applies to this list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListMode {
    Working,
    Snapshot,
    Changes,
}

non_empty_lists! {
    author = "author",
    mode = "mode",
}

impl_domain_resource!(Composition);
impl_backbone_element!(
    CompositionAttester,
    CompositionEvent,
    CompositionRelatesTo,
    CompositionSection,
);
