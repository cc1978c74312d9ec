//! Goal resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Goal

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Duration, Extension, Identifier, Meta, Narrative, Quantity, Range,
    Reference,
};
use crate::primitives::Date;
use crate::resources::Resource;

/// Describes the intended objective(s) for a patient, group or organization care, for example,
/// weight loss, restoring an activity of daily living, obtaining herd immunity via immunization,
/// meeting a process improvement objective, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Resource type - always "Goal"
    #[serde(default)]
    pub resource_type: ResourceTag<Goal>,

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

    /// External Ids for this goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Indicates whether the goal has been reached and is still considered relevant.
    pub status: GoalStatus,

    /// E.g. Treatment, dietary, behavioral, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// high-priority | medium-priority | low-priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// Code or text describing goal.
    pub description: CodeableConcept,

    /// Who this goal is intended for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// When goal pursuit begins.
    #[serde(flatten, with = "crate::choice::optional")]
    pub start: Option<GoalStart>,

    /// Target outcome for the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<GoalTarget>,

    /// When goal status took effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_date: Option<Date>,

    /// Reason for current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,

    /// Who's responsible for creating Goal?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expressed_by: Option<Reference>,

    /// Issues addressed by this goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Reference>>,

    /// Comments about the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// What result was achieved regarding the goal?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_code: Option<Vec<CodeableConcept>>,

    /// Observation that resulted from goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_reference: Option<Vec<Reference>>,
}

choice_type! {
    /// When goal pursuit begins.
    pub enum GoalStart("start[x]") {
        Date(Date) = "startDate",
        CodeableConcept(CodeableConcept) = "startCodeableConcept",
    }
}

/// Indicates what should be done by when.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTarget {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The parameter whose value is being tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<CodeableConcept>,

    /// The target value to be achieved.
    #[serde(flatten, with = "crate::choice::optional")]
    pub detail: Option<GoalTargetDetail>,

    /// Reach goal on or before.
    #[serde(flatten, with = "crate::choice::optional")]
    pub due: Option<GoalTargetDue>,
}

choice_type! {
    /// The target value to be achieved.
    pub enum GoalTargetDetail("detail[x]") {
        Quantity(Quantity) = "detailQuantity",
        Range(Range) = "detailRange",
        CodeableConcept(CodeableConcept) = "detailCodeableConcept",
    }
}

choice_type! {
    /// Reach goal on or before.
    pub enum GoalTargetDue("due[x]") {
        Date(Date) = "dueDate",
        Duration(Duration) = "dueDuration",
    }
}

/// Indicates whether the goal has been met and is still being targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    Proposed,
    Accepted,
    Planned,
    InProgress,
    OnTarget,
    AheadOfTarget,
    BehindTarget,
    Sustaining,
    Achieved,
    OnHold,
    Cancelled,
    EnteredInError,
    Rejected,
}

impl_domain_resource!(Goal);
impl_backbone_element!(GoalTarget);
