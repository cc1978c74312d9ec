//! QuestionnaireResponse resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/QuestionnaireResponse

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Attachment, Coding, Extension, Identifier, Meta, Narrative, Quantity, Reference,
};
use crate::primitives::{Date, DateTime, Decimal, Time};
use crate::resources::Resource;

/// A structured set of questions and their answers. The questions are ordered and grouped into
/// coherent subsets, corresponding to the structure of the grouping of the questionnaire being
/// responded to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    /// Resource type - always "QuestionnaireResponse"
    #[serde(default)]
    pub resource_type: ResourceTag<QuestionnaireResponse>,

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

    /// Unique id for this set of answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Request fulfilled by this QuestionnaireResponse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// Part of this action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<Reference>>,

    /// Form being answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<Reference>,

    /// The position of the questionnaire response within its overall lifecycle.
    pub status: QuestionnaireResponseStatus,

    /// The subject of the questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Encounter or Episode during which questionnaire was completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Date the answers were gathered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored: Option<DateTime>,

    /// Person who received and recorded the answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,

    /// The person who answered the questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Reference>,

    /// Groups and questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

/// A group or question item from the original questionnaire for which answers are provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponseItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Pointer to specific item from Questionnaire.
    pub link_id: String,

    /// ElementDefinition - details for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// Name for group or question text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// The subject this group's answers are about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// The response(s) to the question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Vec<QuestionnaireResponseItemAnswer>>,

    /// Nested questionnaire response items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

/// The respondent's answer(s) to the question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponseItemAnswer {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Single-valued answer to the question.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<QuestionnaireResponseItemAnswerValue>,

    /// Nested groups and questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

choice_type! {
    /// Single-valued answer to the question.
    pub enum QuestionnaireResponseItemAnswerValue("value[x]") {
        Boolean(bool) = "valueBoolean",
        Decimal(Decimal) = "valueDecimal",
        Integer(i32) = "valueInteger",
        Date(Date) = "valueDate",
        DateTime(DateTime) = "valueDateTime",
        Time(Time) = "valueTime",
        String(String) = "valueString",
        Uri(String) = "valueUri",
        Attachment(Attachment) = "valueAttachment",
        Coding(Coding) = "valueCoding",
        Quantity(Quantity) = "valueQuantity",
        Reference(Reference) = "valueReference",
    }
}

/// Lifecycle status of the questionnaire response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionnaireResponseStatus {
    InProgress,
    Completed,
    Amended,
    EnteredInError,
    Stopped,
}

impl_domain_resource!(QuestionnaireResponse);
impl_backbone_element!(QuestionnaireResponseItem, QuestionnaireResponseItemAnswer);
