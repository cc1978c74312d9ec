//! ChargeItem resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ChargeItem

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Money, Narrative, Period, Quantity,
    Reference, Timing,
};
use crate::primitives::{DateTime, Decimal};
use crate::resources::Resource;

/// The resource ChargeItem describes the provision of healthcare provider products for a certain
/// patient, therefore referring not only to the product, but containing in addition details of the
/// provision, like date, time, amounts and participating organizations and persons. Main Usage of
/// the ChargeItem is to enable the billing process and internal cost allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeItem {
    /// Resource type - always "ChargeItem"
    #[serde(default)]
    pub resource_type: ResourceTag<ChargeItem>,

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

    /// Business Identifier for item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Defining information about the code of this charge item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<String>>,

    /// The current state of the ChargeItem.
    pub status: ChargeItemStatus,

    /// Part of referenced ChargeItem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Vec<Reference>>,

    /// A code that identifies the charge, like a billing code.
    pub code: CodeableConcept,

    /// Individual service was done for/to.
    pub subject: Reference,

    /// Encounter / Episode associated with event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// When the charged service was applied.
    #[serde(flatten, with = "crate::choice::optional")]
    pub occurrence: Option<ChargeItemOccurrence>,

    /// Who performed charged service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Vec<ChargeItemParticipant>>,

    /// Organization providing the charged sevice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performing_organization: Option<Reference>,

    /// Organization requesting the charged service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requesting_organization: Option<Reference>,

    /// Quantity of which the charge item has been serviced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,

    /// Anatomical location, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bodysite: Option<Vec<CodeableConcept>>,

    /// Factor overriding the associated rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor_override: Option<Decimal>,

    /// Price overriding the associated rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_override: Option<Money>,

    /// Reason for overriding the list price/factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_reason: Option<String>,

    /// Individual who was entering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterer: Option<Reference>,

    /// Date the charge item was entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entered_date: Option<DateTime>,

    /// Why was the charged service rendered?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<CodeableConcept>>,

    /// Which rendered service is being charged?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<Reference>>,

    /// Account to place this charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Vec<Reference>>,

    /// Comments made about the ChargeItem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Further information supporting the this charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_information: Option<Vec<Reference>>,
}

choice_type! {
    /// When the charged service was applied.
    pub enum ChargeItemOccurrence("occurrence[x]") {
        DateTime(DateTime) = "occurrenceDateTime",
        Period(Period) = "occurrencePeriod",
        Timing(Timing) = "occurrenceTiming",
    }
}

/// Indicates who or what performed or participated in the charged service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeItemParticipant {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What type of performance was done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Individual who was performing.
    pub actor: Reference,
}

/// Codes identifying the stage lifecycle stage of a ChargeItem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeItemStatus {
    Planned,
    Billable,
    NotBillable,
    Aborted,
    Billed,
    EnteredInError,
    Unknown,
}

impl_domain_resource!(ChargeItem);
impl_backbone_element!(ChargeItemParticipant);
