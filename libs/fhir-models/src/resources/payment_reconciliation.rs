//! PaymentReconciliation resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/PaymentReconciliation

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Money, Narrative, Period, Reference,
};
use crate::primitives::{Date, DateTime};
use crate::resources::Resource;

/// This resource provides payment details and claim references supporting a bulk payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReconciliation {
    /// Resource type - always "PaymentReconciliation"
    #[serde(default)]
    pub resource_type: ResourceTag<PaymentReconciliation>,

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

    /// Period covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,

    /// Insurer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// Claim reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Reference>,

    /// complete | error | partial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CodeableConcept>,

    /// Disposition Message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,

    /// Responsible practitioner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_provider: Option<Reference>,

    /// Responsible organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_organization: Option<Reference>,

    /// List of settlements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<PaymentReconciliationDetail>>,

    /// Printed Form Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,

    /// Total amount of Payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,

    /// Processing comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_note: Option<Vec<PaymentReconciliationProcessNote>>,
}

/// List of individual settlement amounts and the corresponding transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReconciliationDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type code.
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Reference>,

    /// Claim Response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Reference>,

    /// Organization which submitted the claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter: Option<Reference>,

    /// Organization which is receiving the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<Reference>,

    /// Invoice date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    /// Amount being paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// Suite of notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReconciliationProcessNote {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// display | print | printoper.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Comment on the processing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl_domain_resource!(PaymentReconciliation);
impl_backbone_element!(PaymentReconciliationDetail, PaymentReconciliationProcessNote);
