//! CarePlan resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/CarePlan

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Quantity,
    Reference, Timing,
};
use crate::resources::Resource;

/// Describes the intention of how one or more practitioners intend to deliver care for a particular
/// patient, group or community for a period of time, possibly limited to care for a specific
/// condition or set of conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    /// Resource type - always "CarePlan"
    #[serde(default)]
    pub resource_type: ResourceTag<CarePlan>,

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

    /// External Ids for this plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// Fulfills care plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// CarePlan replaced by this CarePlan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<Vec<Reference>>,

    /// Part of referenced CarePlan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// Indicates whether the plan is currently being acted upon, represents future intentions or is
    /// now a historical record.
    pub status: CarePlanStatus,

    /// Indicates the level of authority/intentionality associated with the care plan and where the
    /// care plan fits into the workflow chain.
    pub intent: CarePlanIntent,

    /// Type of plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Human-friendly name for the CarePlan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Summary of nature of plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Who care plan is for.
    pub subject: Reference,

    /// Created in context of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Time period plan covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Who is responsible for contents of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Reference>>,

    /// Who's involved in plan?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team: Option<Vec<Reference>>,

    /// Health issues this plan addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Reference>>,

    /// Information considered as part of plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_info: Option<Vec<Reference>>,

    /// Desired outcome of plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Vec<Reference>>,

    /// Action to occur as part of plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Vec<CarePlanActivity>>,

    /// Comments about the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,
}

/// Identifies a planned action to occur as part of the plan. For example, a medication to be used,
/// lab tests to perform, self-monitoring, education, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanActivity {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Results of the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_codeable_concept: Option<Vec<CodeableConcept>>,

    /// Appointment, Encounter, Procedure, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_reference: Option<Vec<Reference>>,

    /// Comments about the activity status/progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Vec<Annotation>>,

    /// Activity details defined in specific resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    /// In-line definition of activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<CarePlanActivityDetail>,
}

/// A simple summary of a planned activity suitable for a general care plan system (e.g. form
/// driven) that doesn't know about specific resources such as procedure etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanActivityDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// diet | drug | encounter | observation | procedure | supply | other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Reference>,

    /// Detail type of activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Why activity should be done or why activity was prohibited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Condition triggering need for activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Goals this activity relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Vec<Reference>>,

    /// Identifies what progress is being made for the specific activity.
    pub status: CarePlanActivityStatus,

    /// Reason for current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,

    /// Do NOT do.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prohibited: Option<bool>,

    /// When activity is to occur.
    #[serde(flatten, with = "crate::choice::optional")]
    pub scheduled: Option<CarePlanActivityDetailScheduled>,

    /// Where it should happen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Who will be responsible?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<Reference>>,

    /// What is to be administered/supplied.
    #[serde(flatten, with = "crate::choice::optional")]
    pub product: Option<CarePlanActivityDetailProduct>,

    /// How to consume/day?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_amount: Option<Quantity>,

    /// How much to administer/supply/consume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Extra info describing activity to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

choice_type! {
    /// When activity is to occur.
    pub enum CarePlanActivityDetailScheduled("scheduled[x]") {
        Timing(Timing) = "scheduledTiming",
        Period(Period) = "scheduledPeriod",
        String(String) = "scheduledString",
    }
}

choice_type! {
    /// What is to be administered/supplied.
    pub enum CarePlanActivityDetailProduct("product[x]") {
        CodeableConcept(CodeableConcept) = "productCodeableConcept",
        Reference(Reference) = "productReference",
    }
}

/// Indicates where the activity is at in its overall life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarePlanActivityStatus {
    NotStarted,
    Scheduled,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
    Unknown,
}

/// Codes indicating the degree of authority/intentionality associated with a care plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarePlanIntent {
    Proposal,
    Plan,
    Order,
    Option,
}

/// Indicates whether the plan is currently being acted upon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarePlanStatus {
    Draft,
    Active,
    Suspended,
    Completed,
    EnteredInError,
    Cancelled,
    Unknown,
}

impl_domain_resource!(CarePlan);
impl_backbone_element!(CarePlanActivity, CarePlanActivityDetail);
