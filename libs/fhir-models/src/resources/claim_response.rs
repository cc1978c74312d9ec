//! ClaimResponse resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ClaimResponse

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Coding, Extension, Identifier, Meta, Money, Narrative, Reference,
};
use crate::primitives::{Date, DateTime, Decimal};
use crate::resources::Resource;

/// This resource provides the adjudication details from the processing of a Claim resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    /// Resource type - always "ClaimResponse"
    #[serde(default)]
    pub resource_type: ResourceTag<ClaimResponse>,

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

    /// Response number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | cancelled | draft | entered-in-error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The subject of the Products and Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    /// Creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,

    /// Insurance issuing organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer: Option<Reference>,

    /// Responsible practitioner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_provider: Option<Reference>,

    /// Responsible organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_organization: Option<Reference>,

    /// Id of resource triggering adjudication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Reference>,

    /// complete | error | partial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CodeableConcept>,

    /// Disposition Message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,

    /// Party to be paid any benefits payable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_type: Option<CodeableConcept>,

    /// Line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<ClaimResponseItem>>,

    /// Insurer added line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_item: Option<Vec<ClaimResponseAddItem>>,

    /// Processing errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<ClaimResponseError>>,

    /// Total Cost of service from the Claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Money>,

    /// Unallocated deductible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unalloc_deductable: Option<Money>,

    /// Total benefit payable for the Claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_benefit: Option<Money>,

    /// Payment details, if paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<ClaimResponsePayment>,

    /// Funds reserved status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved: Option<Coding>,

    /// Printed Form Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,

    /// Processing notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_note: Option<Vec<ClaimResponseProcessNote>>,

    /// Request for additional information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_request: Option<Vec<Reference>>,

    /// Insurance or medical plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Vec<ClaimResponseInsurance>>,
}

/// The first tier service adjudications for payor added services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseAddItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Service instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_link_id: Option<Vec<u32>>,

    /// Revenue or cost center code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Type of service or product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Group, Service or Product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<CodeableConcept>,

    /// Service/Product billing modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,

    /// Professional fee or Product charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Money>,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Added items adjudication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,

    /// Added items details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ClaimResponseAddItemDetail>>,
}

/// The second tier service adjudications for payor added services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseAddItemDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Revenue or cost center code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Type of service or product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Service or Product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<CodeableConcept>,

    /// Service/Product billing modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,

    /// Professional fee or Product charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Money>,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Added items detail adjudication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,
}

/// Mutually exclusive with Services Provided (Item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseError {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Item sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_link_id: Option<u32>,

    /// Detail sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_sequence_link_id: Option<u32>,

    /// Subdetail sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdetail_sequence_link_id: Option<u32>,

    /// Error code detailing processing issues.
    pub code: CodeableConcept,
}

/// Financial instrument by which payment information for health care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseInsurance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Service instance identifier.
    pub sequence: u32,

    /// Is the focal Coverage.
    pub focal: bool,

    /// Insurance information.
    pub coverage: Reference,

    /// Business agreement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_arrangement: Option<String>,

    /// Pre-Authorization/Determination Reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<Vec<String>>,

    /// Adjudication results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_response: Option<Reference>,
}

/// The first tier service adjudications for submitted services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Service instance.
    pub sequence_link_id: u32,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Adjudication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,

    /// Detail line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ClaimResponseItemDetail>>,
}

/// The adjudication results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItemAdjudication {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Adjudication category such as co-pay, eligible, benefit, etc..
    pub category: CodeableConcept,

    /// Explanation of Adjudication outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,

    /// Monetary amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Non-monetary value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

/// The second tier service adjudications for submitted services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItemDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Service instance.
    pub sequence_link_id: u32,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Detail level adjudication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,

    /// Subdetail line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ClaimResponseItemDetailSubDetail>>,
}

/// The third tier service adjudications for submitted services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseItemDetailSubDetail {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Service instance.
    pub sequence_link_id: u32,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Subdetail level adjudication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ClaimResponseItemAdjudication>>,
}

/// Payment details for the claim if the claim has been paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponsePayment {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Partial or Complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Payment adjustment for non-Claim issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Money>,

    /// Explanation for the non-claim adjustment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_reason: Option<CodeableConcept>,

    /// Expected data of Payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    /// Payable amount after adjustment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Identifier of the payment instrument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

/// Note text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponseProcessNote {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Sequence Number for this note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// display | print | printoper.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Note explanatory text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Language if different from the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeableConcept>,
}

impl_domain_resource!(ClaimResponse);
impl_backbone_element!(
    ClaimResponseAddItem,
    ClaimResponseAddItemDetail,
    ClaimResponseError,
    ClaimResponseInsurance,
    ClaimResponseItem,
    ClaimResponseItemAdjudication,
    ClaimResponseItemDetail,
    ClaimResponseItemDetailSubDetail,
    ClaimResponsePayment,
    ClaimResponseProcessNote,
);
