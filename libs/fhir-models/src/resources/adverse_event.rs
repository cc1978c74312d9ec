//! AdverseEvent resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/AdverseEvent

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Narrative, Reference};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// Actual or potential/avoided event causing unintended physical injury resulting from or
/// contributed to by medical care, a research study or other healthcare setting factors that
/// requires additional monitoring, treatment, or hospitalization, or that results in death.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdverseEvent {
    /// Resource type - always "AdverseEvent"
    #[serde(default)]
    pub resource_type: ResourceTag<AdverseEvent>,

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

    /// Business identifier for the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// The type of event which is important to characterize what occurred and caused harm to the
    /// subject, or had the potential to cause harm to the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AdverseEventCategory>,

    /// actual | potential.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Subject or group impacted by event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// When the event occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Adverse Reaction Events linked to exposure to substance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Vec<Reference>>,

    /// Location where adverse event occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Mild | Moderate | Severe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seriousness: Option<CodeableConcept>,

    /// resolved | recovering | ongoing | resolvedWithSequelae | fatal | unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CodeableConcept>,

    /// Who recorded the adverse event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorder: Option<Reference>,

    /// Who was involved in the adverse event or the potential adverse event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_participant: Option<Reference>,

    /// Description of the adverse event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The suspected agent causing the adverse event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspect_entity: Option<Vec<AdverseEventSuspectEntity>>,

    /// AdverseEvent.subjectMedicalHistory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_medical_history: Option<Vec<Reference>>,

    /// AdverseEvent.referenceDocument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_document: Option<Vec<Reference>>,

    /// AdverseEvent.study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study: Option<Vec<Reference>>,
}

/// Describes the entity that is suspected to have caused the adverse event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdverseEventSuspectEntity {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Refers to the specific entity that caused the adverse event.
    pub instance: Reference,

    /// None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causality: Option<AdverseEventCausality>,

    /// assess1 | assess2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causality_assessment: Option<CodeableConcept>,

    /// AdverseEvent.suspectEntity.causalityProductRelatedness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causality_product_relatedness: Option<String>,

    /// method1 | method2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causality_method: Option<CodeableConcept>,

    /// AdverseEvent.suspectEntity.causalityAuthor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causality_author: Option<Reference>,

    /// result1 | result2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causality_result: Option<CodeableConcept>,
}

/// Overall categorization of the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdverseEventCategory {
    #[serde(rename = "AE")]
    AdverseEvent,
    #[serde(rename = "PAE")]
    PotentialAdverseEvent,
}

/// Causality method used to assess the suspect entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdverseEventCausality {
    Causality1,
    Causality2,
}

impl_domain_resource!(AdverseEvent);
impl_backbone_element!(AdverseEventSuspectEntity);
