//! Questionnaire resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Questionnaire

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{PublicationStatus, ResourceType};
use crate::datatypes::{
    Attachment, CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative,
    Period, Quantity, Reference, UsageContext,
};
use crate::primitives::{Date, DateTime, Decimal, Time};
use crate::resources::Resource;

/// A structured set of questions intended to guide the collection of answers from end-users.
/// Questionnaires provide detailed control over order, presentation, phraseology and grouping to
/// allow coherent, consistent data collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    /// Resource type - always "Questionnaire"
    #[serde(default)]
    pub resource_type: ResourceTag<Questionnaire>,

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

    /// Logical URI to reference this questionnaire (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional identifier for the questionnaire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Business version of the questionnaire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this questionnaire (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this questionnaire (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this questionnaire. Enables tracking the life-cycle of the content.
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

    /// Natural language description of the questionnaire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Why this questionnaire is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// When the questionnaire was approved by publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<Date>,

    /// When the questionnaire was last reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<Date>,

    /// When the questionnaire is expected to be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for questionnaire (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Concept that represents the overall questionnaire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Coding>>,

    /// The types of subjects that can be the subject of responses created for the questionnaire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<Vec<ResourceType>>,

    /// Questions and sections within the Questionnaire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<QuestionnaireItem>>,
}

/// A particular question, question grouping or display text that is part of the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Unique id for item in questionnaire.
    pub link_id: String,

    /// ElementDefinition - details for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// Corresponding concept for this item in a terminology.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Coding>>,

    /// E.g. "1(a)", "2.5.3".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Primary text for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// The type of questionnaire item this is - whether text for display, a grouping of other items
    /// or a particular type of data to be captured (string, integer, coded choice, etc.).
    #[serde(rename = "type")]
    pub r#type: QuestionnaireItemType,

    /// Only allow data when.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_when: Option<Vec<QuestionnaireItemEnableWhen>>,

    /// Whether the item must be included in data results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Whether the item may repeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeats: Option<bool>,

    /// Don't allow human editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    /// No more than this many characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,

    /// Valueset containing permitted answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Reference>,

    /// Permitted answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<Vec<QuestionnaireItemOption>>,

    /// Default value when item is first rendered.
    #[serde(flatten, with = "crate::choice::optional")]
    pub initial: Option<QuestionnaireItemInitial>,

    /// Nested questionnaire items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<QuestionnaireItem>>,
}

choice_type! {
    /// Default value when item is first rendered.
    pub enum QuestionnaireItemInitial("initial[x]") {
        Boolean(bool) = "initialBoolean",
        Decimal(Decimal) = "initialDecimal",
        Integer(i32) = "initialInteger",
        Date(Date) = "initialDate",
        DateTime(DateTime) = "initialDateTime",
        Time(Time) = "initialTime",
        String(String) = "initialString",
        Uri(String) = "initialUri",
        Attachment(Attachment) = "initialAttachment",
        Coding(Coding) = "initialCoding",
        Quantity(Quantity) = "initialQuantity",
        Reference(Reference) = "initialReference",
    }
}

/// A constraint indicating that this item should only be enabled (displayed/allow answers to be
/// captured) when the specified condition is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItemEnableWhen {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Question that determines whether item is enabled.
    pub question: String,

    /// Enable when answered or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_answer: Option<bool>,

    /// Value question must have.
    #[serde(flatten, with = "crate::choice::optional")]
    pub answer: Option<QuestionnaireItemEnableWhenAnswer>,
}

choice_type! {
    /// Value question must have.
    pub enum QuestionnaireItemEnableWhenAnswer("answer[x]") {
        Boolean(bool) = "answerBoolean",
        Decimal(Decimal) = "answerDecimal",
        Integer(i32) = "answerInteger",
        Date(Date) = "answerDate",
        DateTime(DateTime) = "answerDateTime",
        Time(Time) = "answerTime",
        String(String) = "answerString",
        Uri(String) = "answerUri",
        Attachment(Attachment) = "answerAttachment",
        Coding(Coding) = "answerCoding",
        Quantity(Quantity) = "answerQuantity",
        Reference(Reference) = "answerReference",
    }
}

/// One of the permitted answers for a "choice" or "open-choice" question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItemOption {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Answer value.
    #[serde(flatten, with = "crate::choice::required")]
    pub value: QuestionnaireItemOptionValue,
}

choice_type! {
    /// Answer value.
    pub enum QuestionnaireItemOptionValue("value[x]") {
        Integer(i32) = "valueInteger",
        Date(Date) = "valueDate",
        Time(Time) = "valueTime",
        String(String) = "valueString",
        Coding(Coding) = "valueCoding",
    }
}

/// Distinguishes groups from questions and display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionnaireItemType {
    Group,
    Display,
    Question,
    Boolean,
    Decimal,
    Integer,
    Date,
    #[serde(rename = "dateTime")]
    DateTime,
    Time,
    String,
    Text,
    Url,
    Choice,
    OpenChoice,
    Attachment,
    Reference,
    Quantity,
}

impl_domain_resource!(Questionnaire);
impl_backbone_element!(QuestionnaireItem, QuestionnaireItemEnableWhen, QuestionnaireItemOption);
