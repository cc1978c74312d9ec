//! OperationOutcome resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/OperationOutcome

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Meta, Narrative};
use crate::resources::Resource;

/// A collection of error, warning or information messages that result from a system action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    /// Resource type - always "OperationOutcome"
    #[serde(default)]
    pub resource_type: ResourceTag<OperationOutcome>,

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

    /// A single issue associated with the action
    #[serde(deserialize_with = "non_empty::issue")]
    pub issue: Vec<OperationOutcomeIssue>,
}

/// An error, warning or information message that results from a system action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcomeIssue {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// fatal | error | warning | information
    pub severity: IssueSeverity,

    /// Error or warning code
    pub code: IssueType,

    /// Additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CodeableConcept>,

    /// Additional diagnostic information about the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,

    /// Path of element(s) related to issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<String>>,

    /// FHIRPath of element(s) related to issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Vec<String>>,
}

/// How the issue affects the success of the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

/// A code that describes the type of issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    Invalid,
    Structure,
    Required,
    Value,
    Invariant,
    Security,
    Login,
    Unknown,
    Expired,
    Forbidden,
    Suppressed,
    Processing,
    NotSupported,
    Duplicate,
    NotFound,
    TooLong,
    CodeInvalid,
    Extension,
    TooCostly,
    BusinessRule,
    Conflict,
    Incomplete,
    Transient,
    LockError,
    NoStore,
    Exception,
    Timeout,
    Throttled,
    Informational,
}

non_empty_lists! {
    issue = "issue",
}

impl_domain_resource!(OperationOutcome);
impl_backbone_element!(OperationOutcomeIssue);
