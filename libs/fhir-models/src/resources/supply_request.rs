//! SupplyRequest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/SupplyRequest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::RequestPriority;
use crate::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Quantity, Reference, Timing,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A record of a request for a medication, substance or device used in the healthcare setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRequest {
    /// Resource type - always "SupplyRequest"
    #[serde(default)]
    pub resource_type: ResourceTag<SupplyRequest>,

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

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Status of the supply request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SupplyRequestStatus>,

    /// The kind of supply (central, non-stock, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Indicates how quickly this SupplyRequest should be addressed with respect to other requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,

    /// The item being requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_item: Option<SupplyRequestOrderedItem>,

    /// When the request should be fulfilled.
    #[serde(flatten, with = "crate::choice::optional")]
    pub occurrence: Option<SupplyRequestOccurrence>,

    /// When the request was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Who/what is requesting service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<SupplyRequestRequester>,

    /// Who is intended to fulfill the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Vec<Reference>>,

    /// Why the supply item was requested.
    #[serde(flatten, with = "crate::choice::optional")]
    pub reason: Option<SupplyRequestReason>,

    /// The origin of the supply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_from: Option<Reference>,

    /// The destination of the supply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_to: Option<Reference>,
}

choice_type! {
    /// When the request should be fulfilled.
    pub enum SupplyRequestOccurrence("occurrence[x]") {
        DateTime(DateTime) = "occurrenceDateTime",
        Period(Period) = "occurrencePeriod",
        Timing(Timing) = "occurrenceTiming",
    }
}

choice_type! {
    /// Why the supply item was requested.
    pub enum SupplyRequestReason("reason[x]") {
        CodeableConcept(CodeableConcept) = "reasonCodeableConcept",
        Reference(Reference) = "reasonReference",
    }
}

/// The item being requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRequestOrderedItem {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The requested amount of the item indicated.
    pub quantity: Quantity,

    /// Medication, Substance, or Device requested to be supplied.
    #[serde(flatten, with = "crate::choice::optional")]
    pub item: Option<SupplyRequestOrderedItemItem>,
}

choice_type! {
    /// Medication, Substance, or Device requested to be supplied.
    pub enum SupplyRequestOrderedItemItem("item[x]") {
        CodeableConcept(CodeableConcept) = "itemCodeableConcept",
        Reference(Reference) = "itemReference",
    }
}

/// The individual who initiated the request and has responsibility for its activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRequestRequester {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Individual making the request.
    pub agent: Reference,

    /// Organization agent is acting for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
}

/// Status of the supply request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplyRequestStatus {
    Draft,
    Active,
    Suspended,
    Cancelled,
    Completed,
    EnteredInError,
    Unknown,
}

impl_domain_resource!(SupplyRequest);
impl_backbone_element!(SupplyRequestOrderedItem, SupplyRequestRequester);
