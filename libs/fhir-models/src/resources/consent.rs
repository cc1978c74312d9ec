//! Consent resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Consent

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A record of a healthcare consumer’s policy choices, which permits or denies identified
/// recipient(s) or recipient role(s) to perform one or more actions within a given policy context,
/// for specific purposes and periods of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    /// Resource type - always "Consent"
    #[serde(default)]
    pub resource_type: ResourceTag<Consent>,

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

    /// Identifier for this record (external references).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Indicates the current state of this consent.
    pub status: ConsentState,

    /// Classification of the consent statement - for indexing/retrieval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Who the consent applies to.
    pub patient: Reference,

    /// Period that this consent applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// When this Consent was created or indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime>,

    /// Who is agreeing to the policy and exceptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consenting_party: Option<Vec<Reference>>,

    /// Who|what controlled by this consent (or group, by role).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Vec<ConsentActor>>,

    /// Actions controlled by this consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<CodeableConcept>>,

    /// Custodian of the consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Vec<Reference>>,

    /// Source from which this consent is taken.
    #[serde(flatten, with = "crate::choice::optional")]
    pub source: Option<ConsentSource>,

    /// Policies covered by this consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Vec<ConsentPolicy>>,

    /// Policy that this consents to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_rule: Option<String>,

    /// Security Labels that define affected resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_label: Option<Vec<Coding>>,

    /// Context of activities for which the agreement is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Vec<Coding>>,

    /// Timeframe for data controlled by this consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_period: Option<Period>,

    /// Data controlled by this consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ConsentData>>,

    /// Additional rule - addition or removal of permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub except: Option<Vec<ConsentExcept>>,
}

choice_type! {
    /// Source from which this consent is taken.
    pub enum ConsentSource("source[x]") {
        Attachment(Attachment) = "sourceAttachment",
        Identifier(Identifier) = "sourceIdentifier",
        Reference(Reference) = "sourceReference",
    }
}

/// Who or what is controlled by this consent. Use group to identify a set of actors by some
/// property they share (e.g. 'admitting officers').
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentActor {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How the actor is involved.
    pub role: CodeableConcept,

    /// Resource for the actor (or group, by role).
    pub reference: Reference,
}

/// The resources controlled by this consent, if specific resources are referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentData {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How the resource reference is interpreted when testing consent restrictions.
    pub meaning: ConsentDataMeaning,

    /// The actual data reference.
    pub reference: Reference,
}

/// An exception to the base policy of this consent. An exception can be an addition or removal of
/// access permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentExcept {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Action to take - permit or deny - when the exception conditions are met.
    #[serde(rename = "type")]
    pub r#type: ConsentExceptType,

    /// Timeframe for this exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Who|what controlled by this exception (or group, by role).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Vec<ConsentExceptActor>>,

    /// Actions controlled by this exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<CodeableConcept>>,

    /// Security Labels that define affected resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_label: Option<Vec<Coding>>,

    /// Context of activities covered by this exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Vec<Coding>>,

    /// e.g. Resource Type, Profile, or CDA etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Vec<Coding>>,

    /// e.g. LOINC or SNOMED CT code, etc in the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Coding>>,

    /// Timeframe for data controlled by this exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_period: Option<Period>,

    /// Data controlled by this exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ConsentExceptData>>,
}

/// Who or what is controlled by this Exception. Use group to identify a set of actors by some
/// property they share (e.g. 'admitting officers').
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentExceptActor {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How the actor is involved.
    pub role: CodeableConcept,

    /// Resource for the actor (or group, by role).
    pub reference: Reference,
}

/// The resources controlled by this exception, if specific resources are referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentExceptData {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How the resource reference is interpreted when testing consent restrictions.
    pub meaning: ConsentDataMeaning,

    /// The actual data reference.
    pub reference: Reference,
}

/// The references to the policies that are included in this consent scope. Policies may be
/// organizational, but are often defined jurisdictionally, or in law.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentPolicy {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Enforcement source for policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    /// Specific policy covered by this consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// How a resource reference is interpreted when testing consent restrictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsentDataMeaning {
    Instance,
    Related,
    Dependents,
    Authoredby,
}

/// How an exception statement is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsentExceptType {
    Deny,
    Permit,
}

/// Indicates the state of the consent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsentState {
    Draft,
    Proposed,
    Active,
    Rejected,
    Inactive,
    EnteredInError,
}

impl_domain_resource!(Consent);
impl_backbone_element!(
    ConsentActor,
    ConsentData,
    ConsentExcept,
    ConsentExceptActor,
    ConsentExceptData,
    ConsentPolicy,
);
