//! TestScript resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/TestScript

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::PublicationStatus;
use crate::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Identifier, Meta, Narrative, Reference,
    UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A structured set of tests against a FHIR server implementation to determine compliance against
/// the FHIR specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScript {
    /// Resource type - always "TestScript"
    #[serde(default)]
    pub resource_type: ResourceTag<TestScript>,

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

    /// Logical URI to reference this test script (globally unique).
    pub url: String,

    /// Additional identifier for the test script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Business version of the test script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this test script (computer friendly).
    pub name: String,

    /// Name for this test script (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this test script. Enables tracking the life-cycle of the content.
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

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Natural language description of the test script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for test script (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this test script is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// An abstract server representing a client or sender in a message exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<TestScriptOrigin>>,

    /// An abstract server representing a destination or receiver in a message exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<TestScriptDestination>>,

    /// Required capability that is assumed to function correctly on the FHIR server being tested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TestScriptMetadata>,

    /// Fixture in the test script - by reference (uri).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<Vec<TestScriptFixture>>,

    /// Reference of the validation profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<Reference>>,

    /// Placeholder for evaluated elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<Vec<TestScriptVariable>>,

    /// Assert rule used within the test script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Vec<TestScriptRule>>,

    /// Assert ruleset used within the test script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruleset: Option<Vec<TestScriptRuleset>>,

    /// A series of required setup operations before tests are executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<TestScriptSetup>,

    /// A test in this script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Vec<TestScriptTest>>,

    /// A series of required clean up steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teardown: Option<TestScriptTeardown>,
}

/// An abstract server used in operations within this test script in the destination element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptDestination {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The index of the abstract destination server starting at 1.
    pub index: i32,

    /// FHIR-Server | FHIR-SDC-FormManager | FHIR-SDC-FormReceiver | FHIR-SDC- FormProcessor.
    pub profile: Coding,
}

/// Fixture in the test script - by reference (uri). All fixtures are required for the test script
/// to execute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptFixture {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Whether or not to implicitly create the fixture during setup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocreate: Option<bool>,

    /// Whether or not to implicitly delete the fixture during teardown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autodelete: Option<bool>,

    /// Reference of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Reference>,
}

/// The required capability must exist and are assumed to function correctly on the FHIR server
/// being tested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptMetadata {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Links to the FHIR specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<TestScriptMetadataLink>>,

    /// Capabilities that are assumed to function correctly on the FHIR server being tested.
    #[serde(deserialize_with = "non_empty::capability")]
    pub capability: Vec<TestScriptMetadataCapability>,
}

/// Capabilities that must exist and are assumed to function correctly on the FHIR server being
/// tested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptMetadataCapability {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Are the capabilities required?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Are the capabilities validated?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated: Option<bool>,

    /// The expected capabilities of the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Which origin server these requirements apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<i32>>,

    /// Which server these requirements apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<i32>,

    /// Links to the FHIR specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<String>>,

    /// Required Capability Statement.
    pub capabilities: Reference,
}

/// A link to the FHIR specification that this test is covering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptMetadataLink {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// URL to the specification.
    pub url: String,

    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An abstract server used in operations within this test script in the origin element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptOrigin {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The index of the abstract origin server starting at 1.
    pub index: i32,

    /// FHIR-Client | FHIR-SDC-FormFiller.
    pub profile: Coding,
}

/// Assert rule to be used in one or more asserts within the test script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptRule {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Assert rule resource reference.
    pub resource: Reference,

    /// Rule parameter template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Vec<TestScriptRuleParam>>,
}

/// Each rule template can take one or more parameters for rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptRuleParam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Parameter name matching external assert rule parameter.
    pub name: String,

    /// Parameter value defined either explicitly or dynamically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Contains one or more rules. Offers a way to group rules so assertions could reference the group
/// of rules and have them all applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptRuleset {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Assert ruleset resource reference.
    pub resource: Reference,

    /// The referenced rule within the ruleset.
    #[serde(deserialize_with = "non_empty::rule")]
    pub rule: Vec<TestScriptRulesetRule>,
}

/// The referenced rule within the external ruleset template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptRulesetRule {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Id of referenced rule within the ruleset.
    pub rule_id: String,

    /// Ruleset rule parameter template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Vec<TestScriptRulesetRuleParam>>,
}

/// Each rule template can take one or more parameters for rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptRulesetRuleParam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Parameter name matching external assert ruleset rule parameter.
    pub name: String,

    /// Parameter value defined either explicitly or dynamically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A series of required setup operations before tests are executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetup {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// A setup operation or assert to perform.
    #[serde(deserialize_with = "non_empty::action")]
    pub action: Vec<TestScriptSetupAction>,
}

/// Action would contain either an operation or an assertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The setup operation to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<TestScriptSetupActionOperation>,

    /// The assertion to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert: Option<TestScriptSetupActionAssert>,
}

/// Evaluates the results of previous operations to determine if the server under test behaves
/// appropriately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionAssert {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Tracking/logging assertion label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Tracking/reporting assertion description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The direction to use for the assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<AssertionDirectionType>,

    /// Id of the source fixture to be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_source_id: Option<String>,

    /// The fluentpath expression to evaluate against the source fixture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_source_expression: Option<String>,

    /// XPath or JSONPath expression to evaluate against the source fixture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_source_path: Option<String>,

    /// The content-type or mime-type to use for RESTful operation in the 'Content-Type' header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,

    /// The fluentpath expression to be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// HTTP header field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_field: Option<String>,

    /// Fixture Id of minimum content resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_id: Option<String>,

    /// Perform validation on navigation links?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_links: Option<bool>,

    /// The operator type defines the conditional behavior of the assert. If not defined, the
    /// default is equals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<AssertionOperatorType>,

    /// XPath or JSONPath expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// The request method or HTTP operation code to compare against that used by the client system
    /// under test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<TestScriptRequestMethodCode>,

    /// Request URL comparison value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "requestURL")]
    pub request_url: Option<String>,

    /// Resource type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<AssertionResponseTypes>,

    /// HTTP response code to test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,

    /// The reference to a TestScript.rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<TestScriptSetupActionAssertRule>,

    /// The reference to a TestScript.ruleset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruleset: Option<TestScriptSetupActionAssertRuleset>,

    /// Fixture Id of source expression or headerField.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    /// Profile Id of validation profile reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_profile_id: Option<String>,

    /// The value to compare to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Will this assert produce a warning only on error?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_only: Option<bool>,
}

/// The TestScript.rule this assert will evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionAssertRule {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Id of the TestScript.rule.
    pub rule_id: String,

    /// Rule parameter template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Vec<TestScriptSetupActionAssertRuleParam>>,
}

/// Each rule template can take one or more parameters for rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionAssertRuleParam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Parameter name matching external assert rule parameter.
    pub name: String,

    /// Parameter value defined either explicitly or dynamically.
    pub value: String,
}

/// The TestScript.ruleset this assert will evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionAssertRuleset {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Id of the TestScript.ruleset.
    pub ruleset_id: String,

    /// The referenced rule within the ruleset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Vec<TestScriptSetupActionAssertRulesetRule>>,
}

/// The referenced rule within the external ruleset template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionAssertRulesetRule {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Id of referenced rule within the ruleset.
    pub rule_id: String,

    /// Rule parameter template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Vec<TestScriptSetupActionAssertRulesetRuleParam>>,
}

/// Each rule template can take one or more parameters for rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionAssertRulesetRuleParam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Parameter name matching external assert ruleset rule parameter.
    pub name: String,

    /// Parameter value defined either explicitly or dynamically.
    pub value: String,
}

/// The operation to perform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionOperation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The operation code type that will be executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Coding>,

    /// Resource type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// Tracking/logging operation label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Tracking/reporting operation description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The content-type or mime-type to use for RESTful operation in the 'Accept' header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<ContentType>,

    /// The content-type or mime-type to use for RESTful operation in the 'Content-Type' header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,

    /// Server responding to the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<i32>,

    /// Whether or not to send the request url in encoded format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode_request_url: Option<bool>,

    /// Server initiating the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<i32>,

    /// Explicitly defined path parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,

    /// Each operation can have one or more header elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_header: Option<Vec<TestScriptSetupActionOperationRequestHeader>>,

    /// Fixture Id of mapped request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Fixture Id of mapped response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,

    /// Fixture Id of body for PUT and POST requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    /// Id of fixture used for extracting the [id], [type], and [vid] for GET requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    /// Request URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Header elements would be used to set HTTP headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptSetupActionOperationRequestHeader {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// HTTP header field name.
    pub field: String,

    /// HTTP headerfield value.
    pub value: String,
}

/// A series of operations required to clean up after the all the tests are executed (successfully
/// or otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTeardown {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// One or more teardown operations to perform.
    #[serde(deserialize_with = "non_empty::action")]
    pub action: Vec<TestScriptTeardownAction>,
}

/// The teardown action will only contain an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTeardownAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The teardown operation to perform.
    pub operation: TestScriptSetupActionOperation,
}

/// A test in this script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTest {
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

    /// A test operation or assert to perform.
    #[serde(deserialize_with = "non_empty::action")]
    pub action: Vec<TestScriptTestAction>,
}

/// Action would contain either an operation or an assertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptTestAction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The setup operation to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<TestScriptSetupActionOperation>,

    /// The setup assertion to perform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert: Option<TestScriptSetupActionAssert>,
}

/// Variable is set based either on element value in response body or on header field value in the
/// response headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScriptVariable {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Descriptive name for this variable.
    pub name: String,

    /// Default, hard-coded, or user-defined value for this variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Natural language description of the variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The fluentpath expression against the fixture body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// HTTP header field name for source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_field: Option<String>,

    /// Hint help text for default value to enter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// XPath or JSONPath against the fixture body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Fixture Id of source expression or headerField within this variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

/// The type of direction to use for assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssertionDirectionType {
    Response,
    Request,
}

/// The type of operator to use for assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssertionOperatorType {
    Equals,
    NotEquals,
    In,
    NotIn,
    GreaterThan,
    LessThan,
    Empty,
    NotEmpty,
    Contains,
    NotContains,
    Eval,
}

/// The type of response code to use for assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssertionResponseTypes {
    Okay,
    Created,
    NoContent,
    NotModified,
    Bad,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    Gone,
    PreconditionFailed,
    Unprocessable,
}

/// The content or mime type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Xml,
    Json,
    Ttl,
    None,
}

/// The allowable request method or HTTP operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestScriptRequestMethodCode {
    Delete,
    Get,
    Options,
    Patch,
    Post,
    Put,
}

non_empty_lists! {
    capability = "capability",
    rule = "rule",
    action = "action",
}

impl_domain_resource!(TestScript);
impl_backbone_element!(
    TestScriptDestination,
    TestScriptFixture,
    TestScriptMetadata,
    TestScriptMetadataCapability,
    TestScriptMetadataLink,
    TestScriptOrigin,
    TestScriptRule,
    TestScriptRuleParam,
    TestScriptRuleset,
    TestScriptRulesetRule,
    TestScriptRulesetRuleParam,
    TestScriptSetup,
    TestScriptSetupAction,
    TestScriptSetupActionAssert,
    TestScriptSetupActionAssertRule,
    TestScriptSetupActionAssertRuleParam,
    TestScriptSetupActionAssertRuleset,
    TestScriptSetupActionAssertRulesetRule,
    TestScriptSetupActionAssertRulesetRuleParam,
    TestScriptSetupActionOperation,
    TestScriptSetupActionOperationRequestHeader,
    TestScriptTeardown,
    TestScriptTeardownAction,
    TestScriptTest,
    TestScriptTestAction,
    TestScriptVariable,
);
