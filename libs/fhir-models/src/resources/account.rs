//! Account resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Account

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Money, Narrative, Period, Reference,
};
use crate::resources::Resource;

/// A financial tool for tracking value accrued for a particular purpose. In the healthcare field,
/// used to track charges for a patient, cost centers, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Resource type - always "Account"
    #[serde(default)]
    pub resource_type: ResourceTag<Account>,

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

    /// Account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Indicates whether the account is presently used/usable or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,

    /// E.g. patient, expense, depreciation.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What is account tied to?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Transaction window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Time window that transactions may be posted to this account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<Period>,

    /// How much is in account?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,

    /// The party(s) that are responsible for covering the payment of this account, and what order
    /// should they be applied to the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Vec<AccountCoverage>>,

    /// Who is responsible?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,

    /// Explanation of purpose/use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Responsible for the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantor: Option<Vec<AccountGuarantor>>,
}

/// The party(s) that are responsible for covering the payment of this account, and what order
/// should they be applied to the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCoverage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The party(s) that are responsible for covering the payment of this account.
    pub coverage: Reference,

    /// The priority of the coverage in the context of this account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Parties financially responsible for the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountGuarantor {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Responsible entity.
    pub party: Reference,

    /// Credit or other hold applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hold: Option<bool>,

    /// Guarrantee account during.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Indicates whether the account is available to be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountStatus {
    Active,
    Inactive,
    EnteredInError,
}

impl_domain_resource!(Account);
impl_backbone_element!(AccountCoverage, AccountGuarantor);
