//! RequestGroup resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/RequestGroup

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{
    ActionCardinalityBehavior, ActionConditionKind, ActionGroupingBehavior, ActionPrecheckBehavior,
    ActionRelationshipType, ActionRequiredBehavior, ActionSelectionBehavior, RequestIntent,
    RequestPriority, RequestStatus,
};
use crate::datatypes::{
    Annotation, CodeableConcept, Coding, Duration, Extension, Identifier, Meta, Narrative, Period,
    Range, Reference, RelatedArtifact, Timing,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A group of related requests that can be used to capture intended activities that have inter-
/// dependencies such as "give this medication after that one".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestGroup {
    /// Resource type - always "RequestGroup"
    #[serde(default)]
    pub resource_type: ResourceTag<RequestGroup>,

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

    /// Business identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Instantiates protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// Fulfills plan, proposal, or order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Request(s) replaced by this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<Vec<Reference>>,

    /// Composite request this is part of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,

    /// The current state of the request. For request groups, the status reflects the status of all
    /// the requests in the group.
    pub status: RequestStatus,

    /// Indicates the level of authority/intentionality associated with the request and where the
    /// request fits into the workflow chain.
    pub intent: RequestIntent,

    /// Indicates how quickly the request should be addressed with respect to other requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,

    /// Who the request group is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Encounter or Episode for the request group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// When the request group was authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Device or practitioner that authored the request group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,

    /// Reason for the request group.
    #[serde(flatten, with = "crate::choice::optional")]
    pub reason: Option<RequestGroupReason>,

    /// Additional notes about the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Proposed actions, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<RequestGroupAction>>,
}

choice_type! {
    /// Reason for the request group.
    pub enum RequestGroupReason("reason[x]") {
        CodeableConcept(CodeableConcept) = "reasonCodeableConcept",
        Reference(Reference) = "reasonReference",
    }
}

/// The actions, if any, produced by the evaluation of the artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestGroupAction {
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

    /// Supporting documentation for the intended performer of the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<RelatedArtifact>>,

    /// Whether or not the action is applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<RequestGroupActionCondition>>,

    /// Relationship to another action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_action: Option<Vec<RequestGroupActionRelatedAction>>,

    /// When the action should take place.
    #[serde(flatten, with = "crate::choice::optional")]
    pub timing: Option<RequestGroupActionTiming>,

    /// Who should perform the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<Reference>>,

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

    /// The target of the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Reference>,

    /// Sub action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<RequestGroupAction>>,
}

choice_type! {
    /// When the action should take place.
    pub enum RequestGroupActionTiming("timing[x]") {
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
pub struct RequestGroupActionCondition {
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

/// A relationship to another action such as "before" or "30-60 minutes after start of".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestGroupActionRelatedAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What action this is related to.
    pub action_id: String,

    /// The relationship of this action to the related action.
    pub relationship: ActionRelationshipType,

    /// Time offset for the relationship.
    #[serde(flatten, with = "crate::choice::optional")]
    pub offset: Option<RequestGroupActionRelatedActionOffset>,
}

choice_type! {
    /// Time offset for the relationship.
    pub enum RequestGroupActionRelatedActionOffset("offset[x]") {
        Duration(Duration) = "offsetDuration",
        Range(Range) = "offsetRange",
    }
}

impl_domain_resource!(RequestGroup);
impl_backbone_element!(
    RequestGroupAction,
    RequestGroupActionCondition,
    RequestGroupActionRelatedAction,
);
