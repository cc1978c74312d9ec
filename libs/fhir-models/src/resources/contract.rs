//! Contract resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Contract

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Money, Narrative, Period,
    Quantity, Reference, Signature,
};
use crate::primitives::{DateTime, Decimal};
use crate::resources::Resource;

/// A formal agreement between parties regarding the conduct of business, exchange of information or
/// other matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Resource type - always "Contract"
    #[serde(default)]
    pub resource_type: ResourceTag<Contract>,

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

    /// Contract number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// amended | appended | cancelled | disputed | entered-in-error | executable | executed |
    /// negotiable | offered | policy | rejected | renewed | revoked | resolved | terminated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When this Contract was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateTime>,

    /// Effective time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies: Option<Period>,

    /// Contract Target Entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Vec<Reference>>,

    /// Context of the Contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Vec<Reference>>,

    /// Authority under which this Contract has standing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Vec<Reference>>,

    /// Domain in which this Contract applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<Reference>>,

    /// Type or form.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Subtype within the context of type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<Vec<CodeableConcept>>,

    /// Action stipulated by this Contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<CodeableConcept>>,

    /// Rationale for the stiplulated action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_reason: Option<Vec<CodeableConcept>>,

    /// Decision by Grantor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_type: Option<CodeableConcept>,

    /// Content derived from the basal information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_derivative: Option<CodeableConcept>,

    /// Security Labels that define affected resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_label: Option<Vec<Coding>>,

    /// Entity being ascribed responsibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Vec<ContractAgent>>,

    /// Contract Signatory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer: Option<Vec<ContractSigner>>,

    /// Contract Valued Item List.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valued_item: Option<Vec<ContractValuedItem>>,

    /// Contract Term List.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<Vec<ContractTerm>>,

    /// Binding Contract.
    #[serde(flatten, with = "crate::choice::optional")]
    pub binding: Option<ContractBinding>,

    /// Contract Friendly Language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly: Option<Vec<ContractFriendly>>,

    /// Contract Legal Language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<Vec<ContractLegal>>,

    /// Computable Contract Language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Vec<ContractRule>>,
}

choice_type! {
    /// Binding Contract.
    pub enum ContractBinding("binding[x]") {
        Attachment(Attachment) = "bindingAttachment",
        Reference(Reference) = "bindingReference",
    }
}

/// An actor taking a role in an activity for which it can be assigned some degree of responsibility
/// for the activity taking place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAgent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contract Agent Type.
    pub actor: Reference,

    /// Role type of the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Vec<CodeableConcept>>,
}

/// The "patient friendly language" versionof the Contract in whole or in parts. "Patient friendly
/// language" means the representation of the Contract and Contract Provisions in a manner that is
/// readily accessible and understandable by a layperson in accordance with best practices for
/// communication styles that ensure that those agreeing to or signing the Contract understand the
/// roles, actions, obligations, responsibilities, and implication of the agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFriendly {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Easily comprehended representation of this Contract.
    #[serde(flatten, with = "crate::choice::required")]
    pub content: ContractFriendlyContent,
}

choice_type! {
    /// Easily comprehended representation of this Contract.
    pub enum ContractFriendlyContent("content[x]") {
        Attachment(Attachment) = "contentAttachment",
        Reference(Reference) = "contentReference",
    }
}

/// List of Legal expressions or representations of this Contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractLegal {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contract Legal Text.
    #[serde(flatten, with = "crate::choice::required")]
    pub content: ContractLegalContent,
}

choice_type! {
    /// Contract Legal Text.
    pub enum ContractLegalContent("content[x]") {
        Attachment(Attachment) = "contentAttachment",
        Reference(Reference) = "contentReference",
    }
}

/// List of Computable Policy Rule Language Representations of this Contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRule {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Computable Contract Rules.
    #[serde(flatten, with = "crate::choice::required")]
    pub content: ContractRuleContent,
}

choice_type! {
    /// Computable Contract Rules.
    pub enum ContractRuleContent("content[x]") {
        Attachment(Attachment) = "contentAttachment",
        Reference(Reference) = "contentReference",
    }
}

/// Parties with legal standing in the Contract, including the principal parties, the grantor(s) and
/// grantee(s), which are any person or organization bound by the contract, and any ancillary
/// parties, which facilitate the execution of the contract such as a notary or witness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSigner {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contract Signatory Role.
    #[serde(rename = "type")]
    pub r#type: Coding,

    /// Contract Signatory Party.
    pub party: Reference,

    /// Contract Documentation Signature.
    #[serde(deserialize_with = "non_empty::signature")]
    pub signature: Vec<Signature>,
}

/// One or more Contract Provisions, which may be related and conveyed as a group, and may contain
/// nested groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerm {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contract Term Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Contract Term Issue Date Time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateTime>,

    /// Contract Term Effective Time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies: Option<Period>,

    /// Contract Term Type or Form.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Contract Term Type specific classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<CodeableConcept>,

    /// Context of the Contract term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Vec<Reference>>,

    /// Contract Term Activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<CodeableConcept>>,

    /// Purpose for the Contract Term Action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_reason: Option<Vec<CodeableConcept>>,

    /// Security Labels that define affected terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_label: Option<Vec<Coding>>,

    /// Contract Term Agent List.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Vec<ContractTermAgent>>,

    /// Human readable Contract term text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Contract Term Valued Item List.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valued_item: Option<Vec<ContractTermValuedItem>>,

    /// Nested Contract Term Group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<ContractTerm>>,
}

/// An actor taking a role in an activity for which it can be assigned some degree of responsibility
/// for the activity taking place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTermAgent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contract Term Agent Subject.
    pub actor: Reference,

    /// Type of the Contract Term Agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Vec<CodeableConcept>>,
}

/// Contract Provision Valued Item List.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTermValuedItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contract Term Valued Item Type.
    #[serde(flatten, with = "crate::choice::optional")]
    pub entity: Option<ContractTermValuedItemEntity>,

    /// Contract Term Valued Item Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Contract Term Valued Item Effective Tiem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<DateTime>,

    /// Contract Term Valued Item Count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Contract Term Valued Item fee, charge, or cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Contract Term Valued Item Price Scaling Factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,

    /// Contract Term Valued Item Difficulty Scaling Factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Decimal>,

    /// Total Contract Term Valued Item Value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
}

choice_type! {
    /// Contract Term Valued Item Type.
    pub enum ContractTermValuedItemEntity("entity[x]") {
        CodeableConcept(CodeableConcept) = "entityCodeableConcept",
        Reference(Reference) = "entityReference",
    }
}

/// Contract Valued Item List
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractValuedItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Contract Valued Item Type.
    #[serde(flatten, with = "crate::choice::optional")]
    pub entity: Option<ContractValuedItemEntity>,

    /// Contract Valued Item Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Contract Valued Item Effective Tiem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<DateTime>,

    /// Count of Contract Valued Items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Contract Valued Item fee, charge, or cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    /// Contract Valued Item Price Scaling Factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,

    /// Contract Valued Item Difficulty Scaling Factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Decimal>,

    /// Total Contract Valued Item Value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Money>,
}

choice_type! {
    /// Contract Valued Item Type.
    pub enum ContractValuedItemEntity("entity[x]") {
        CodeableConcept(CodeableConcept) = "entityCodeableConcept",
        Reference(Reference) = "entityReference",
    }
}

non_empty_lists! {
    signature = "signature",
}

impl_domain_resource!(Contract);
impl_backbone_element!(
    ContractAgent,
    ContractFriendly,
    ContractLegal,
    ContractRule,
    ContractSigner,
    ContractTerm,
    ContractTermAgent,
    ContractTermValuedItem,
    ContractValuedItem,
);
