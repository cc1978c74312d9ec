//! EligibilityResponse resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/EligibilityResponse

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{CodeableConcept, Extension, Identifier, Meta, Money, Narrative, Reference};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// This resource provides eligibility and plan details from the processing of an Eligibility
/// resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    /// Resource type - always "EligibilityResponse"
    #[serde(default)]
    pub resource_type: ResourceTag<EligibilityResponse>,

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

    /// Business Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | cancelled | draft | entered-in-error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,

    /// Responsible practitioner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_provider: Option<Reference>,

    /// Responsible organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_organization: Option<Reference>,

    /// Eligibility reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Reference>,

    /// complete | error | partial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CodeableConcept>,

    /// Disposition Message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,

    /// Insurer issuing the coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer: Option<Reference>,

    /// Coverage inforce indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inforce: Option<bool>,

    /// Details by insurance coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Vec<EligibilityResponseInsurance>>,

    /// Printed Form Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,

    /// Processing errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<EligibilityResponseError>>,
}

/// Mutually exclusive with Services Provided (Item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponseError {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Error code detailing processing issues.
    pub code: CodeableConcept,
}

/// The insurer may provide both the details for the requested coverage as well as details for
/// additional coverages known to the insurer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponseInsurance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Updated Coverage details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Reference>,

    /// Contract details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<Reference>,

    /// Benefits by Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_balance: Option<Vec<EligibilityResponseInsuranceBenefitBalance>>,
}

/// Benefits and optionally current balances by Category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponseInsuranceBenefitBalance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of services covered.
    pub category: CodeableConcept,

    /// Detailed services covered within the type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<CodeableConcept>,

    /// Excluded from the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<bool>,

    /// Short name for the benefit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the benefit or services covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// In or out of network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<CodeableConcept>,

    /// Individual or family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CodeableConcept>,

    /// Annual or lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<CodeableConcept>,

    /// Benefit Summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<Vec<EligibilityResponseInsuranceBenefitBalanceFinancial>>,
}

/// Benefits Used to date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponseInsuranceBenefitBalanceFinancial {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Deductable, visits, benefit amount.
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Benefits allowed.
    #[serde(flatten, with = "crate::choice::optional")]
    pub allowed: Option<EligibilityResponseInsuranceBenefitBalanceFinancialAllowed>,

    /// Benefits used.
    #[serde(flatten, with = "crate::choice::optional")]
    pub used: Option<EligibilityResponseInsuranceBenefitBalanceFinancialUsed>,
}

choice_type! {
    /// Benefits allowed.
    pub enum EligibilityResponseInsuranceBenefitBalanceFinancialAllowed("allowed[x]") {
        UnsignedInt(u32) = "allowedUnsignedInt",
        String(String) = "allowedString",
        Money(Money) = "allowedMoney",
    }
}

choice_type! {
    /// Benefits used.
    pub enum EligibilityResponseInsuranceBenefitBalanceFinancialUsed("used[x]") {
        UnsignedInt(u32) = "usedUnsignedInt",
        Money(Money) = "usedMoney",
    }
}

impl_domain_resource!(EligibilityResponse);
impl_backbone_element!(
    EligibilityResponseError,
    EligibilityResponseInsurance,
    EligibilityResponseInsuranceBenefitBalance,
    EligibilityResponseInsuranceBenefitBalanceFinancial,
);
