//! ActivityDefinition resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ActivityDefinition

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{ActionParticipantType, PublicationStatus, ResourceType};
use crate::datatypes::{
    CodeableConcept, ContactDetail, Contributor, Dosage, Extension, Identifier, Meta, Narrative,
    Period, Quantity, Range, Reference, RelatedArtifact, Timing, UsageContext,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// This resource allows for the definition of some activity to be performed, independent of a
/// particular patient, practitioner, or other performance context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinition {
    /// Resource type - always "ActivityDefinition"
    #[serde(default)]
    pub resource_type: ResourceTag<ActivityDefinition>,

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

    /// Logical URI to reference this activity definition (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the activity definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Business version of the activity definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this activity definition (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this activity definition (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this activity definition. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the activity definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Why this activity definition is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Describes the clinical usage of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// When the activity definition was approved by publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<Date>,

    /// When the activity definition was last reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<Date>,

    /// When the activity definition is expected to be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for activity definition (if applicable).
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

    /// Additional documentation, citations, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,

    /// Logic used by the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<Reference>>,

    /// A description of the kind of resource the activity definition is representing. For example,
    /// a MedicationRequest, a ProcedureRequest, or a CommunicationRequest. Typically, but not
    /// always, this is a Request resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResourceType>,

    /// Detail type of activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// When activity is to occur.
    #[serde(flatten, with = "crate::choice::optional")]
    pub timing: Option<ActivityDefinitionTiming>,

    /// Where it should happen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Who should participate in the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<ActivityDefinitionParticipant>>,

    /// What's administered/supplied.
    #[serde(flatten, with = "crate::choice::optional")]
    pub product: Option<ActivityDefinitionProduct>,

    /// How much is administered/consumed/supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Detailed dosage instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<Vec<Dosage>>,

    /// What part of body to perform on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Vec<CodeableConcept>>,

    /// Transform to apply the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Reference>,

    /// Dynamic aspects of the definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_value: Option<Vec<ActivityDefinitionDynamicValue>>,
}

choice_type! {
    /// When activity is to occur.
    pub enum ActivityDefinitionTiming("timing[x]") {
        Timing(Timing) = "timingTiming",
        DateTime(DateTime) = "timingDateTime",
        Period(Period) = "timingPeriod",
        Range(Range) = "timingRange",
    }
}

choice_type! {
    /// What's administered/supplied.
    pub enum ActivityDefinitionProduct("product[x]") {
        Reference(Reference) = "productReference",
        CodeableConcept(CodeableConcept) = "productCodeableConcept",
    }
}

/// Dynamic values that will be evaluated to produce values for elements of the resulting resource.
/// For example, if the dosage of a medication must be computed based on the patient's weight, a
/// dynamic value would be used to specify an expression that calculated the weight, and the path on
/// the intent resource that would contain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinitionDynamicValue {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Natural language description of the dynamic value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The path to the element to be set dynamically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Language of the expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// An expression that provides the dynamic value for the customization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// Indicates who should participate in performing the action described.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinitionParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The type of participant in the action.
    #[serde(rename = "type")]
    pub r#type: ActionParticipantType,

    /// E.g. Nurse, Surgeon, Parent, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,
}

impl_domain_resource!(ActivityDefinition);
impl_backbone_element!(ActivityDefinitionDynamicValue, ActivityDefinitionParticipant);
