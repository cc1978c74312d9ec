//! PlanDefinition resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/PlanDefinition

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{
    ActionCardinalityBehavior, ActionConditionKind, ActionGroupingBehavior, ActionParticipantType,
    ActionPrecheckBehavior, ActionRelationshipType, ActionRequiredBehavior, ActionSelectionBehavior,
    PublicationStatus,
};
use crate::datatypes::{
    CodeableConcept, Coding, ContactDetail, Contributor, DataRequirement, Duration, Extension,
    Identifier, Meta, Narrative, Period, Quantity, Range, Reference, RelatedArtifact, Timing,
    TriggerDefinition, UsageContext,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// This resource allows for the definition of various types of plans as a sharable, consumable, and
/// executable artifact. The resource is general enough to support the description of a broad range
/// of clinical artifacts such as clinical decision support rules, order sets and protocols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    /// Resource type - always "PlanDefinition"
    #[serde(default)]
    pub resource_type: ResourceTag<PlanDefinition>,

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

    /// Logical URI to reference this plan definition (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the plan definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Business version of the plan definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this plan definition (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this plan definition (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// order-set | protocol | eca-rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// The status of this plan definition. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the plan definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Why this plan definition is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Describes the clinical usage of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// When the plan definition was approved by publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<Date>,

    /// When the plan definition was last reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<Date>,

    /// When the plan definition is expected to be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for plan definition (if applicable).
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

    /// Related artifacts for the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,

    /// Logic used by the plan definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<Reference>>,

    /// What the plan is trying to accomplish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Vec<PlanDefinitionGoal>>,

    /// Action defined by the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<PlanDefinitionAction>>,
}

/// An action to be taken as part of the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// User-visible label for the action (e.g. 1. or A.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// User-visible title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short description of the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Static text equivalent of the action, used if the dynamic aspects cannot be interpreted by
    /// the receiving system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_equivalent: Option<String>,

    /// Code representing the meaning of the action or sub-actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<CodeableConcept>>,

    /// Why the action should be performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableConcept>>,

    /// Supporting documentation for the intended performer of the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<RelatedArtifact>>,

    /// What goals this action supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Vec<String>>,

    /// When the action should be triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_definition: Option<Vec<TriggerDefinition>>,

    /// Whether or not the action is applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<PlanDefinitionActionCondition>>,

    /// Input data requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<DataRequirement>>,

    /// Output data definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<DataRequirement>>,

    /// Relationship to another action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_action: Option<Vec<PlanDefinitionActionRelatedAction>>,

    /// When the action should take place.
    #[serde(flatten, with = "crate::choice::optional")]
    pub timing: Option<PlanDefinitionActionTiming>,

    /// Who should participate in the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<PlanDefinitionActionParticipant>>,

    /// create | update | remove | fire-event.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Coding>,

    /// Defines the grouping behavior for the action and its children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping_behavior: Option<ActionGroupingBehavior>,

    /// Defines the selection behavior for the action and its children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_behavior: Option<ActionSelectionBehavior>,

    /// Defines the requiredness behavior for the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_behavior: Option<ActionRequiredBehavior>,

    /// Defines whether the action should usually be preselected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precheck_behavior: Option<ActionPrecheckBehavior>,

    /// Defines whether the action can be selected multiple times.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality_behavior: Option<ActionCardinalityBehavior>,

    /// Description of the activity to be performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Reference>,

    /// Transform to apply the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Reference>,

    /// Dynamic aspects of the definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_value: Option<Vec<PlanDefinitionActionDynamicValue>>,

    /// A sub-action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<PlanDefinitionAction>>,
}

choice_type! {
    /// When the action should take place.
    pub enum PlanDefinitionActionTiming("timing[x]") {
        DateTime(DateTime) = "timingDateTime",
        Period(Period) = "timingPeriod",
        Duration(Duration) = "timingDuration",
        Range(Range) = "timingRange",
        Timing(Timing) = "timingTiming",
    }
}

/// An expression that describes applicability criteria, or start/stop conditions for the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionCondition {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The kind of condition.
    pub kind: ActionConditionKind,

    /// Natural language description of the condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Language of the expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Boolean-valued expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// Customizations that should be applied to the statically defined resource. For example, if the
/// dosage of a medication must be computed based on the patient's weight, a customization would be
/// used to specify an expression that calculated the weight, and the path on the resource that
/// would contain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionDynamicValue {
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
pub struct PlanDefinitionActionParticipant {
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

/// A relationship to another action such as "before" or "30-60 minutes after start of".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionRelatedAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What action is this related to.
    pub action_id: String,

    /// The relationship of this action to the related action.
    pub relationship: ActionRelationshipType,

    /// Time offset for the relationship.
    #[serde(flatten, with = "crate::choice::optional")]
    pub offset: Option<PlanDefinitionActionRelatedActionOffset>,
}

choice_type! {
    /// Time offset for the relationship.
    pub enum PlanDefinitionActionRelatedActionOffset("offset[x]") {
        Duration(Duration) = "offsetDuration",
        Range(Range) = "offsetRange",
    }
}

/// Goals that describe what the activities within the plan are intended to achieve. For example,
/// weight loss, restoring an activity of daily living, obtaining herd immunity via immunization,
/// meeting a process improvement objective, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionGoal {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// E.g. Treatment, dietary, behavioral, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Code or text describing the goal.
    pub description: CodeableConcept,

    /// high-priority | medium-priority | low-priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// When goal pursuit begins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<CodeableConcept>,

    /// What does the goal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CodeableConcept>>,

    /// Supporting documentation for the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<RelatedArtifact>>,

    /// Target outcome for the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<PlanDefinitionGoalTarget>>,
}

/// Indicates what should be done and within what timeframe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionGoalTarget {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The parameter whose value is to be tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<CodeableConcept>,

    /// The target value to be achieved.
    #[serde(flatten, with = "crate::choice::optional")]
    pub detail: Option<PlanDefinitionGoalTargetDetail>,

    /// Reach goal within.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<Duration>,
}

choice_type! {
    /// The target value to be achieved.
    pub enum PlanDefinitionGoalTargetDetail("detail[x]") {
        Quantity(Quantity) = "detailQuantity",
        Range(Range) = "detailRange",
        CodeableConcept(CodeableConcept) = "detailCodeableConcept",
    }
}

impl_domain_resource!(PlanDefinition);
impl_backbone_element!(
    PlanDefinitionAction,
    PlanDefinitionActionCondition,
    PlanDefinitionActionDynamicValue,
    PlanDefinitionActionParticipant,
    PlanDefinitionActionRelatedAction,
    PlanDefinitionGoal,
    PlanDefinitionGoalTarget,
);
