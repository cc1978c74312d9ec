//! TestReport resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/TestReport

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{Extension, Identifier, Meta, Narrative, Reference};
use crate::primitives::{DateTime, Decimal};
use crate::resources::Resource;

/// A summary of information based on the results of executing a TestScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    /// Resource type - always "TestReport"
    #[serde(default)]
    pub resource_type: ResourceTag<TestReport>,

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

    /// External identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Informal name of the executed TestScript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The current state of this test report.
    pub status: TestReportStatus,

    /// Reference to the version-specific TestScript that was executed to produce this TestReport.
    pub test_script: Reference,

    /// The overall result from the execution of the TestScript.
    pub result: TestReportResult,

    /// The final score (percentage of tests passed) resulting from the execution of the TestScript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Decimal>,

    /// Name of the tester producing this report (Organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tester: Option<String>,

    /// When the TestScript was executed and this TestReport was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateTime>,

    /// A participant in the test execution, either the execution engine, a client, or a server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<TestReportParticipant>>,

    /// The results of the series of required setup operations before the tests were executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<TestReportSetup>,

    /// A test executed from the test script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Vec<TestReportTest>>,

    /// The results of running the series of required clean up steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teardown: Option<TestReportTeardown>,
}

/// A participant in the test execution, either the execution engine, a client, or a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The type of participant.
    #[serde(rename = "type")]
    pub r#type: TestReportParticipantType,

    /// The uri of the participant. An absolute URL is preferred.
    pub uri: String,

    /// The display name of the participant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// The results of the series of required setup operations before the tests were executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportSetup {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// A setup operation or assert that was executed.
    #[serde(deserialize_with = "non_empty::action")]
    pub action: Vec<TestReportSetupAction>,
}

/// Action would contain either an operation or an assertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportSetupAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The operation to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<TestReportSetupActionOperation>,

    /// The assertion to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert: Option<TestReportSetupActionAssert>,
}

/// The results of the assertion performed on the previous operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportSetupActionAssert {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The result of this assertion.
    pub result: TestReportActionResult,

    /// A message associated with the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// A link to further details on the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The operation performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportSetupActionOperation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The result of this operation.
    pub result: TestReportActionResult,

    /// A message associated with the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// A link to further details on the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The results of the series of operations required to clean up after the all the tests were
/// executed (successfully or otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportTeardown {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// One or more teardown operations performed.
    #[serde(deserialize_with = "non_empty::action")]
    pub action: Vec<TestReportTeardownAction>,
}

/// The teardown action will only contain an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportTeardownAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The teardown operation performed.
    pub operation: TestReportSetupActionOperation,
}

/// A test executed from the test script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportTest {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Tracking/logging name of this test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tracking/reporting short description of the test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A test operation or assert that was performed.
    #[serde(deserialize_with = "non_empty::action")]
    pub action: Vec<TestReportTestAction>,
}

/// Action would contain either an operation or an assertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReportTestAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The operation performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<TestReportSetupActionOperation>,

    /// The assertion performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert: Option<TestReportSetupActionAssert>,
}

/// The results of executing an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestReportActionResult {
    Pass,
    Skip,
    Fail,
    Warning,
    Error,
}

/// The type of participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestReportParticipantType {
    TestEngine,
    Client,
    Server,
}

/// The reported execution result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestReportResult {
    Pass,
    Fail,
    Pending,
}

/// The current status of the test report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestReportStatus {
    Completed,
    InProgress,
    Waiting,
    Stopped,
    EnteredInError,
}

non_empty_lists! {
    action = "action",
}

impl_domain_resource!(TestReport);
impl_backbone_element!(
    TestReportParticipant,
    TestReportSetup,
    TestReportSetupAction,
    TestReportSetupActionAssert,
    TestReportSetupActionOperation,
    TestReportTeardown,
    TestReportTeardownAction,
    TestReportTest,
    TestReportTestAction,
);
