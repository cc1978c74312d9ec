//! Task resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Task

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{RequestIntent, RequestPriority};
use crate::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Count, Distance,
    Duration, Extension, HumanName, Identifier, Meta, Money, Narrative, Period, Quantity, Range,
    Ratio, Reference, SampledData, Signature, Timing,
};
use crate::primitives::{Date, DateTime, Decimal, Instant, Time};
use crate::resources::Resource;

/// A task to be performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Resource type - always "Task"
    #[serde(default)]
    pub resource_type: ResourceTag<Task>,

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

    /// Task Instance Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Formal definition of task.
    #[serde(flatten, with = "crate::choice::optional")]
    pub definition: Option<TaskDefinition>,

    /// Request fulfilled by this task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Requisition or grouper id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,

    /// Composite task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// The current status of the task.
    pub status: TaskStatus,

    /// Reason for current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<CodeableConcept>,

    /// E.g. "Specimen collected", "IV prepped".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_status: Option<CodeableConcept>,

    /// Indicates the "level" of actionability associated with the Task. I.e. Is this a proposed
    /// task, a planned task, an actionable task, etc.
    pub intent: RequestIntent,

    /// Indicates how quickly the Task should be addressed with respect to other requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,

    /// Task Type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// Human-readable explanation of task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// What task is acting on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Reference>,

    /// Beneficiary of the Task.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "for")]
    pub r#for: Option<Reference>,

    /// Healthcare event during which this task originated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Start and end time of execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_period: Option<Period>,

    /// Task Creation Date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Task Last Modified Date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime>,

    /// Who is asking for task to be done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<TaskRequester>,

    /// requester | dispatcher | scheduler | performer | monitor | manager | acquirer | reviewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer_type: Option<Vec<CodeableConcept>>,

    /// Responsible individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,

    /// Why task is needed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,

    /// Comments made about the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Key events in history of the Task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_history: Option<Vec<Reference>>,

    /// Constraints on fulfillment tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<TaskRestriction>,

    /// Information used to perform task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<TaskInput>>,

    /// Information produced as part of task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<TaskOutput>>,
}

choice_type! {
    /// Formal definition of task.
    pub enum TaskDefinition("definition[x]") {
        Uri(String) = "definitionUri",
        Reference(Reference) = "definitionReference",
    }
}

/// Additional information that may be needed in the execution of the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Label for the input.
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Content to use in performing the task.
    #[serde(flatten, with = "crate::choice::required")]
    pub value: TaskInputValue,
}

choice_type! {
    /// Content to use in performing the task.
    pub enum TaskInputValue("value[x]") {
        Base64Binary(String) = "valueBase64Binary",
        Boolean(bool) = "valueBoolean",
        Code(String) = "valueCode",
        Date(Date) = "valueDate",
        DateTime(DateTime) = "valueDateTime",
        Decimal(Decimal) = "valueDecimal",
        Id(String) = "valueId",
        Instant(Instant) = "valueInstant",
        Integer(i32) = "valueInteger",
        Markdown(String) = "valueMarkdown",
        Oid(String) = "valueOid",
        PositiveInt(u32) = "valuePositiveInt",
        String(String) = "valueString",
        Time(Time) = "valueTime",
        UnsignedInt(u32) = "valueUnsignedInt",
        Uri(String) = "valueUri",
        Address(Address) = "valueAddress",
        Age(Age) = "valueAge",
        Annotation(Annotation) = "valueAnnotation",
        Attachment(Attachment) = "valueAttachment",
        CodeableConcept(CodeableConcept) = "valueCodeableConcept",
        Coding(Coding) = "valueCoding",
        ContactPoint(ContactPoint) = "valueContactPoint",
        Count(Count) = "valueCount",
        Distance(Distance) = "valueDistance",
        Duration(Duration) = "valueDuration",
        HumanName(HumanName) = "valueHumanName",
        Identifier(Identifier) = "valueIdentifier",
        Money(Money) = "valueMoney",
        Period(Period) = "valuePeriod",
        Quantity(Quantity) = "valueQuantity",
        Range(Range) = "valueRange",
        Ratio(Ratio) = "valueRatio",
        Reference(Reference) = "valueReference",
        SampledData(SampledData) = "valueSampledData",
        Signature(Signature) = "valueSignature",
        Timing(Timing) = "valueTiming",
        Meta(Meta) = "valueMeta",
    }
}

/// Outputs produced by the Task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutput {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Label for output.
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Result of output.
    #[serde(flatten, with = "crate::choice::required")]
    pub value: TaskOutputValue,
}

choice_type! {
    /// Result of output.
    pub enum TaskOutputValue("value[x]") {
        Base64Binary(String) = "valueBase64Binary",
        Boolean(bool) = "valueBoolean",
        Code(String) = "valueCode",
        Date(Date) = "valueDate",
        DateTime(DateTime) = "valueDateTime",
        Decimal(Decimal) = "valueDecimal",
        Id(String) = "valueId",
        Instant(Instant) = "valueInstant",
        Integer(i32) = "valueInteger",
        Markdown(String) = "valueMarkdown",
        Oid(String) = "valueOid",
        PositiveInt(u32) = "valuePositiveInt",
        String(String) = "valueString",
        Time(Time) = "valueTime",
        UnsignedInt(u32) = "valueUnsignedInt",
        Uri(String) = "valueUri",
        Address(Address) = "valueAddress",
        Age(Age) = "valueAge",
        Annotation(Annotation) = "valueAnnotation",
        Attachment(Attachment) = "valueAttachment",
        CodeableConcept(CodeableConcept) = "valueCodeableConcept",
        Coding(Coding) = "valueCoding",
        ContactPoint(ContactPoint) = "valueContactPoint",
        Count(Count) = "valueCount",
        Distance(Distance) = "valueDistance",
        Duration(Duration) = "valueDuration",
        HumanName(HumanName) = "valueHumanName",
        Identifier(Identifier) = "valueIdentifier",
        Money(Money) = "valueMoney",
        Period(Period) = "valuePeriod",
        Quantity(Quantity) = "valueQuantity",
        Range(Range) = "valueRange",
        Ratio(Ratio) = "valueRatio",
        Reference(Reference) = "valueReference",
        SampledData(SampledData) = "valueSampledData",
        Signature(Signature) = "valueSignature",
        Timing(Timing) = "valueTiming",
        Meta(Meta) = "valueMeta",
    }
}

/// The creator of the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequester {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Individual asking for task.
    pub agent: Reference,

    /// Organization individual is acting for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
}

/// If the Task.focus is a request resource and the task is seeking fulfillment (i.e is asking for
/// the request to be actioned), this element identifies any limitations on what parts of the
/// referenced request should be actioned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRestriction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How many times to repeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,

    /// When fulfillment sought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// For whom is fulfillment sought?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Vec<Reference>>,
}

/// The current status of the task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Draft,
    Requested,
    Received,
    Accepted,
    Rejected,
    Ready,
    Cancelled,
    InProgress,
    OnHold,
    Failed,
    Completed,
    EnteredInError,
}

impl_domain_resource!(Task);
impl_backbone_element!(TaskInput, TaskOutput, TaskRequester, TaskRestriction);
