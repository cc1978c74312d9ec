//! Claim resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Claim

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Address, Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Money, Narrative,
    Period, Quantity, Reference,
};
use crate::primitives::{Date, DateTime, Decimal};
use crate::resources::Resource;

/// A provider issued list of services and products provided, or to be provided, to a patient which
/// is provided to an insurer for payment recovery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Resource type - always "Claim"
    #[serde(default)]
    pub resource_type: ResourceTag<Claim>,

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

    /// Claim number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// active | cancelled | draft | entered-in-error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Type or discipline.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Finer grained claim type information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<Vec<CodeableConcept>>,

    /// Complete (Bill or Claim), Proposed (Pre-Authorization), Exploratory (Pre- determination).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "use")]
    pub r#use: Option<Use>,

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

    /// Target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurer: Option<Reference>,

    /// Responsible provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,

    /// Responsible organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,

    /// Desired processing priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// Funds requested to be reserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds_reserve: Option<CodeableConcept>,

    /// Related Claims which may be revelant to processing this claimn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<ClaimRelated>>,

    /// Prescription authorizing services or products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<Reference>,

    /// Original prescription if superceded by fulfiller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prescription: Option<Reference>,

    /// Party to be paid any benefits payable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<ClaimPayee>,

    /// Treatment Referral.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<Reference>,

    /// Servicing Facility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,

    /// Members of the care team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_team: Option<Vec<ClaimCareTeam>>,

    /// Exceptions, special considerations, the condition, situation, prior or concurrent issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<Vec<ClaimInformation>>,

    /// List of Diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<ClaimDiagnosis>>,

    /// Procedures performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Vec<ClaimProcedure>>,

    /// Insurance or medical plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Vec<ClaimInsurance>>,

    /// Details about an accident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accident: Option<ClaimAccident>,

    /// Period unable to work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_impacted: Option<Period>,

    /// Period in hospital.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<Period>,

    /// Goods and Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<ClaimItem>>,

    /// Total claim cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,
}

/// An accident which resulted in the need for healthcare services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAccident {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// When the accident occurred see information codes see information codes.
    pub date: Date,

    /// The nature of the accident.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Accident Place.
    #[serde(flatten, with = "crate::choice::optional")]
    pub location: Option<ClaimAccidentLocation>,
}

choice_type! {
    /// Accident Place.
    pub enum ClaimAccidentLocation("location[x]") {
        Address(Address) = "locationAddress",
        Reference(Reference) = "locationReference",
    }
}

/// The members of the team who provided the overall service as well as their role and whether
/// responsible and qualifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimCareTeam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Number to covey order of careTeam.
    pub sequence: u32,

    /// Provider individual or organization.
    pub provider: Reference,

    /// Billing provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<bool>,

    /// Role on the team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Type, classification or Specialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<CodeableConcept>,
}

/// List of patient diagnosis for which care is sought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDiagnosis {
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
    pub diagnosis: ClaimDiagnosisDiagnosis,

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
    pub enum ClaimDiagnosisDiagnosis("diagnosis[x]") {
        CodeableConcept(CodeableConcept) = "diagnosisCodeableConcept",
        Reference(Reference) = "diagnosisReference",
    }
}

/// Additional information codes regarding exceptions, special considerations, the condition,
/// situation, prior or concurrent issues. Often there are mutiple jurisdiction specific valuesets
/// which are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInformation {
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
    pub timing: Option<ClaimInformationTiming>,

    /// Additional Data or supporting information.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<ClaimInformationValue>,

    /// Reason associated with the information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CodeableConcept>,
}

choice_type! {
    /// When it occurred.
    pub enum ClaimInformationTiming("timing[x]") {
        Date(Date) = "timingDate",
        Period(Period) = "timingPeriod",
    }
}

choice_type! {
    /// Additional Data or supporting information.
    pub enum ClaimInformationValue("value[x]") {
        String(String) = "valueString",
        Quantity(Quantity) = "valueQuantity",
        Attachment(Attachment) = "valueAttachment",
        Reference(Reference) = "valueReference",
    }
}

/// Financial instrument by which payment information for health care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInsurance {
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

/// First tier of goods and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItem {
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

    /// Applicable careTeam members.
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
    pub serviced: Option<ClaimItemServiced>,

    /// Place of service.
    #[serde(flatten, with = "crate::choice::optional")]
    pub location: Option<ClaimItemLocation>,

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

    /// Additional items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ClaimItemDetail>>,
}

choice_type! {
    /// Date or dates of Service.
    pub enum ClaimItemServiced("serviced[x]") {
        Date(Date) = "servicedDate",
        Period(Period) = "servicedPeriod",
    }
}

choice_type! {
    /// Place of service.
    pub enum ClaimItemLocation("location[x]") {
        CodeableConcept(CodeableConcept) = "locationCodeableConcept",
        Address(Address) = "locationAddress",
        Reference(Reference) = "locationReference",
    }
}

/// Second tier of goods and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemDetail {
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

    /// Additional items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_detail: Option<Vec<ClaimItemDetailSubDetail>>,
}

/// Third tier of goods and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemDetailSubDetail {
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
}

/// The party to be reimbursed for the services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPayee {
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
    #[serde(rename = "type")]
    pub r#type: CodeableConcept,

    /// organization | patient | practitioner | relatedperson.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<Coding>,

    /// Party to receive the payable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Reference>,
}

/// Ordered list of patient procedures performed to support the adjudication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimProcedure {
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
    pub procedure: ClaimProcedureProcedure,
}

choice_type! {
    /// Patient's list of procedures performed.
    pub enum ClaimProcedureProcedure("procedure[x]") {
        CodeableConcept(CodeableConcept) = "procedureCodeableConcept",
        Reference(Reference) = "procedureReference",
    }
}

/// Other claims which are related to this claim such as prior claim versions or for related
/// services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRelated {
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

/// Complete, proposed, exploratory, other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Use {
    Complete,
    Proposed,
    Exploratory,
    Other,
}

impl_domain_resource!(Claim);
impl_backbone_element!(
    ClaimAccident,
    ClaimCareTeam,
    ClaimDiagnosis,
    ClaimInformation,
    ClaimInsurance,
    ClaimItem,
    ClaimItemDetail,
    ClaimItemDetailSubDetail,
    ClaimPayee,
    ClaimProcedure,
    ClaimRelated,
);
