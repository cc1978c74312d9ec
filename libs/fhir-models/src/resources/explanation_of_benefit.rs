//! ExplanationOfBenefit resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ExplanationOfBenefit

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Address, Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Money, Narrative,
    Period, Quantity, Reference,
};
use crate::primitives::{Date, DateTime, Decimal};
use crate::resources::Resource;

/// This resource provides: the claim details; adjudication details from the processing of a Claim;
/// and optionally account balance information, for informing the subscriber of the benefits
/// provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefit {
    /// Resource type - always "ExplanationOfBenefit"
    #[serde(default)]
    pub resource_type: ResourceTag<ExplanationOfBenefit>,

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

    /// The status of the resource instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExplanationOfBenefitStatus>,

    /// Type or discipline.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Finer grained claim type information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<Vec<CodeableConcept>>,

    /// The subject of the Products and Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    /// Period for charge submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_period: Option<Period>,

    /// Creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime>,

    /// Author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterer: Option<Reference>,

    /// Insurer responsible for the EOB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer: Option<Reference>,

    /// Responsible provider for the claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,

    /// Responsible organization for the claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// Treatment Referral.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<Reference>,

    /// Servicing Facility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,

    /// Claim reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim: Option<Reference>,

    /// Claim response reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_response: Option<Reference>,

    /// complete | error | partial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CodeableConcept>,

    /// Disposition Message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,

    /// Related Claims which may be revelant to processing this claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<ExplanationOfBenefitRelated>>,

    /// Prescription authorizing services or products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Reference>,

    /// Original prescription if superceded by fulfiller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prescription: Option<Reference>,

    /// Party to be paid any benefits payable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<ExplanationOfBenefitPayee>,

    /// Exceptions, special considerations, the condition, situation, prior or concurrent issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<Vec<ExplanationOfBenefitInformation>>,

    /// Care Team members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team: Option<Vec<ExplanationOfBenefitCareTeam>>,

    /// List of Diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<ExplanationOfBenefitDiagnosis>>,

    /// Procedures performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Vec<ExplanationOfBenefitProcedure>>,

    /// Precedence (primary, secondary, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: Option<u32>,

    /// Insurance or medical plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<ExplanationOfBenefitInsurance>,

    /// Details of an accident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accident: Option<ExplanationOfBenefitAccident>,

    /// Period unable to work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_impacted: Option<Period>,

    /// Period in hospital.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<Period>,

    /// Goods and Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<ExplanationOfBenefitItem>>,

    /// Insurer added line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_item: Option<Vec<ExplanationOfBenefitAddItem>>,

    /// Total Cost of service from the Claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Money>,

    /// Unallocated deductable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unalloc_deductable: Option<Money>,

    /// Total benefit payable for the Claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_benefit: Option<Money>,

    /// Payment (if paid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<ExplanationOfBenefitPayment>,

    /// Printed Form Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,

    /// Processing notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_note: Option<Vec<ExplanationOfBenefitProcessNote>>,

    /// Balance by Benefit Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_balance: Option<Vec<ExplanationOfBenefitBenefitBalance>>,
}

/// An accident which resulted in the need for healthcare services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitAccident {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// When the accident occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    /// The nature of the accident.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Accident Place.
    #[serde(flatten, with = "crate::choice::optional")]
    pub location: Option<ExplanationOfBenefitAccidentLocation>,
}

choice_type! {
    /// Accident Place.
    pub enum ExplanationOfBenefitAccidentLocation("location[x]") {
        Address(Address) = "locationAddress",
        Reference(Reference) = "locationReference",
    }
}

/// The first tier service adjudications for payor added services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitAddItem {
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

    /// Billing Code.
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
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,

    /// Added items details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ExplanationOfBenefitAddItemDetail>>,
}

/// The second tier service adjudications for payor added services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitAddItemDetail {
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

    /// Billing Code.
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
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
}

/// Balance by Benefit Category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitBenefitBalance {
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
    pub financial: Option<Vec<ExplanationOfBenefitBenefitBalanceFinancial>>,
}

/// Benefits Used to date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitBenefitBalanceFinancial {
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
    pub allowed: Option<ExplanationOfBenefitBenefitBalanceFinancialAllowed>,

    /// Benefits used.
    #[serde(flatten, with = "crate::choice::optional")]
    pub used: Option<ExplanationOfBenefitBenefitBalanceFinancialUsed>,
}

choice_type! {
    /// Benefits allowed.
    pub enum ExplanationOfBenefitBenefitBalanceFinancialAllowed("allowed[x]") {
        UnsignedInt(u32) = "allowedUnsignedInt",
        String(String) = "allowedString",
        Money(Money) = "allowedMoney",
    }
}

choice_type! {
    /// Benefits used.
    pub enum ExplanationOfBenefitBenefitBalanceFinancialUsed("used[x]") {
        UnsignedInt(u32) = "usedUnsignedInt",
        Money(Money) = "usedMoney",
    }
}

/// The members of the team who provided the overall service as well as their role and whether
/// responsible and qualifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitCareTeam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Number to covey order of careteam.
    pub sequence: u32,

    /// Member of the Care Team.
    pub provider: Reference,

    /// Billing practitioner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<bool>,

    /// Role on the team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Type, classification or Specialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<CodeableConcept>,
}

/// Ordered list of patient diagnosis for which care is sought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitDiagnosis {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Number to covey order of diagnosis.
    pub sequence: u32,

    /// Patient's diagnosis.
    #[serde(flatten, with = "crate::choice::required")]
    pub diagnosis: ExplanationOfBenefitDiagnosisDiagnosis,

    /// Timing or nature of the diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<CodeableConcept>>,

    /// Package billing code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<CodeableConcept>,
}

choice_type! {
    /// Patient's diagnosis.
    pub enum ExplanationOfBenefitDiagnosisDiagnosis("diagnosis[x]") {
        CodeableConcept(CodeableConcept) = "diagnosisCodeableConcept",
        Reference(Reference) = "diagnosisReference",
    }
}

/// Additional information codes regarding exceptions, special considerations, the condition,
/// situation, prior or concurrent issues. Often there are mutiple jurisdiction specific valuesets
/// which are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitInformation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Information instance identifier.
    pub sequence: u32,

    /// General class of information.
    pub category: CodeableConcept,

    /// Type of information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    /// When it occurred.
    #[serde(flatten, with = "crate::choice::optional")]
    pub timing: Option<ExplanationOfBenefitInformationTiming>,

    /// Additional Data or supporting information.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<ExplanationOfBenefitInformationValue>,

    /// Reason associated with the information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Coding>,
}

choice_type! {
    /// When it occurred.
    pub enum ExplanationOfBenefitInformationTiming("timing[x]") {
        Date(Date) = "timingDate",
        Period(Period) = "timingPeriod",
    }
}

choice_type! {
    /// Additional Data or supporting information.
    pub enum ExplanationOfBenefitInformationValue("value[x]") {
        String(String) = "valueString",
        Quantity(Quantity) = "valueQuantity",
        Attachment(Attachment) = "valueAttachment",
        Reference(Reference) = "valueReference",
    }
}

/// Financial instrument by which payment information for health care.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitInsurance {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Insurance information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Reference>,

    /// Pre-Authorization/Determination Reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<Vec<String>>,
}

/// First tier of goods and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItem {
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
    pub sequence: u32,

    /// Applicable careteam members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team_link_id: Option<Vec<u32>>,

    /// Applicable diagnoses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_link_id: Option<Vec<u32>>,

    /// Applicable procedures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_link_id: Option<Vec<u32>>,

    /// Applicable exception and supporting information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_link_id: Option<Vec<u32>>,

    /// Revenue or cost center code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Type of service or product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Billing Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<CodeableConcept>,

    /// Service/Product billing modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,

    /// Program specific reason for item inclusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,

    /// Date or dates of Service.
    #[serde(flatten, with = "crate::choice::optional")]
    pub serviced: Option<ExplanationOfBenefitItemServiced>,

    /// Place of service.
    #[serde(flatten, with = "crate::choice::optional")]
    pub location: Option<ExplanationOfBenefitItemLocation>,

    /// Count of Products or Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Fee, charge or cost per point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Price scaling factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,

    /// Total item cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,

    /// Unique Device Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,

    /// Service Location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,

    /// Service Sub-location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_site: Option<Vec<CodeableConcept>>,

    /// Encounters related to this billed item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Vec<Reference>>,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Adjudication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,

    /// Additional items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ExplanationOfBenefitItemDetail>>,
}

choice_type! {
    /// Date or dates of Service.
    pub enum ExplanationOfBenefitItemServiced("serviced[x]") {
        Date(Date) = "servicedDate",
        Period(Period) = "servicedPeriod",
    }
}

choice_type! {
    /// Place of service.
    pub enum ExplanationOfBenefitItemLocation("location[x]") {
        CodeableConcept(CodeableConcept) = "locationCodeableConcept",
        Address(Address) = "locationAddress",
        Reference(Reference) = "locationReference",
    }
}

/// The adjudications results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItemAdjudication {
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

    /// Non-monitory value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

/// Second tier of goods and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItemDetail {
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
    pub sequence: u32,

    /// Group or type of product or service.
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Revenue or cost center code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Type of service or product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Billing Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<CodeableConcept>,

    /// Service/Product billing modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,

    /// Program specific reason for item inclusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,

    /// Count of Products or Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Fee, charge or cost per point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Price scaling factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,

    /// Total additional item cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,

    /// Unique Device Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Detail level adjudication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,

    /// Additional items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ExplanationOfBenefitItemDetailSubDetail>>,
}

/// Third tier of goods and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitItemDetailSubDetail {
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
    pub sequence: u32,

    /// Type of product or service.
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// Revenue or cost center code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<CodeableConcept>,

    /// Type of service or product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Billing Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<CodeableConcept>,

    /// Service/Product billing modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<CodeableConcept>>,

    /// Program specific reason for item inclusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_code: Option<Vec<CodeableConcept>>,

    /// Count of Products or Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Fee, charge or cost per point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Price scaling factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,

    /// Net additional item cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,

    /// Unique Device Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udi: Option<Vec<Reference>>,

    /// List of note numbers which apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<Vec<u32>>,

    /// Language if different from the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
}

/// The party to be reimbursed for the services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitPayee {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of party: Subscriber, Provider, other.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// organization | patient | practitioner | relatedperson.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<CodeableConcept>,

    /// Party to receive the payable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Reference>,
}

/// Payment details for the claim if the claim has been paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitPayment {
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

    /// Expected date of Payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    /// Payable amount after adjustment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Identifier of the payment instrument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
}

/// Ordered list of patient procedures performed to support the adjudication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitProcedure {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Procedure sequence for reference.
    pub sequence: u32,

    /// When the procedure was performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Patient's list of procedures performed.
    #[serde(flatten, with = "crate::choice::required")]
    pub procedure: ExplanationOfBenefitProcedureProcedure,
}

choice_type! {
    /// Patient's list of procedures performed.
    pub enum ExplanationOfBenefitProcedureProcedure("procedure[x]") {
        CodeableConcept(CodeableConcept) = "procedureCodeableConcept",
        Reference(Reference) = "procedureReference",
    }
}

/// Note text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitProcessNote {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Sequence number for this note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// display | print | printoper.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Note explanitory text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Language if different from the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeableConcept>,
}

/// Other claims which are related to this claim such as prior claim versions or for related
/// services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationOfBenefitRelated {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Reference to the related claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim: Option<Reference>,

    /// How the reference claim is related.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CodeableConcept>,

    /// Related file or case reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Identifier>,
}

/// A code specifying the state of the resource instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplanationOfBenefitStatus {
    Active,
    Cancelled,
    Draft,
    EnteredInError,
}

impl_domain_resource!(ExplanationOfBenefit);
impl_backbone_element!(
    ExplanationOfBenefitAccident,
    ExplanationOfBenefitAddItem,
    ExplanationOfBenefitAddItemDetail,
    ExplanationOfBenefitBenefitBalance,
    ExplanationOfBenefitBenefitBalanceFinancial,
    ExplanationOfBenefitCareTeam,
    ExplanationOfBenefitDiagnosis,
    ExplanationOfBenefitInformation,
    ExplanationOfBenefitInsurance,
    ExplanationOfBenefitItem,
    ExplanationOfBenefitItemAdjudication,
    ExplanationOfBenefitItemDetail,
    ExplanationOfBenefitItemDetailSubDetail,
    ExplanationOfBenefitPayee,
    ExplanationOfBenefitPayment,
    ExplanationOfBenefitProcedure,
    ExplanationOfBenefitProcessNote,
    ExplanationOfBenefitRelated,
);
