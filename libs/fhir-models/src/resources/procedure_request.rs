//! ProcedureRequest resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ProcedureRequest

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{RequestIntent, RequestPriority, RequestStatus};
use crate::datatypes::{
    Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Reference, Timing,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A record of a request for diagnostic investigations, treatments, or operations to be performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureRequest {
    /// Resource type - always "ProcedureRequest"
    #[serde(default)]
    pub resource_type: ResourceTag<ProcedureRequest>,

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

    /// Identifiers assigned to this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Protocol or definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<Reference>>,

    /// What request fulfills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// What request replaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<Vec<Reference>>,

    /// Composite Request ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requisition: Option<Identifier>,

    /// The status of the order.
    pub status: RequestStatus,

    /// Whether the request is a proposal, plan, an original order or a reflex order.
    pub intent: RequestIntent,

    /// Indicates how quickly the ProcedureRequest should be addressed with respect to other
    /// requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,

    /// True if procedure should not be performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_perform: Option<bool>,

    /// Classification of procedure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// What is being requested/ordered.
    pub code: CodeableConcept,

    /// Individual the service is ordered for.
    pub subject: Reference,

    /// Encounter or Episode during which request was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// When procedure should occur.
    #[serde(flatten, with = "crate::choice::optional")]
    pub occurrence: Option<ProcedureRequestOccurrence>,

    /// Preconditions for procedure or diagnostic.
    #[serde(flatten, with = "crate::choice::optional")]
    pub as_needed: Option<ProcedureRequestAsNeeded>,

    /// Date request signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<DateTime>,

    /// Who/what is requesting procedure or diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<ProcedureRequestRequester>,

    /// Performer role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer_type: Option<CodeableConcept>,

    /// Requested perfomer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Reference>,

    /// Explanation/Justification for test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Vec<CodeableConcept>>,

    /// Explanation/Justification for test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_reference: Option<Vec<Reference>>,

    /// Additional clinical information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_info: Option<Vec<Reference>>,

    /// Procedure Samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Vec<Reference>>,

    /// Location on Body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<Vec<CodeableConcept>>,

    /// Comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Vec<Annotation>>,

    /// Request provenance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_history: Option<Vec<Reference>>,
}

choice_type! {
    /// When procedure should occur.
    pub enum ProcedureRequestOccurrence("occurrence[x]") {
        DateTime(DateTime) = "occurrenceDateTime",
        Period(Period) = "occurrencePeriod",
        Timing(Timing) = "occurrenceTiming",
    }
}

choice_type! {
    /// Preconditions for procedure or diagnostic.
    pub enum ProcedureRequestAsNeeded("asNeeded[x]") {
        Boolean(bool) = "asNeededBoolean",
        CodeableConcept(CodeableConcept) = "asNeededCodeableConcept",
    }
}

/// The individual who initiated the request and has responsibility for its activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureRequestRequester {
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

impl_domain_resource!(ProcedureRequest);
impl_backbone_element!(ProcedureRequestRequester);
