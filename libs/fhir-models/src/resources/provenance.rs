//! Provenance resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Provenance

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    CodeableConcept, Coding, Extension, Identifier, Meta, Narrative, Period, Reference, Signature,
};
use crate::primitives::Instant;
use crate::resources::Resource;

/// Provenance of a resource is a record that describes entities and processes involved in producing
/// and delivering or otherwise influencing that resource. Provenance provides a critical foundation
/// for assessing authenticity, enabling trust, and allowing reproducibility. Provenance assertions
/// are a form of contextual metadata and can themselves become important records with their own
/// provenance. Provenance statement indicates clinical significance in terms of confidence in
/// authenticity, reliability, and trustworthiness, integrity, and stage in lifecycle (e.g. Document
/// Completion - has the artifact been legally authenticated), all of which may impact security,
/// privacy, and trust policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Resource type - always "Provenance"
    #[serde(default)]
    pub resource_type: ResourceTag<Provenance>,

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

    /// Target Reference(s) (usually version specific).
    #[serde(deserialize_with = "non_empty::target")]
    pub target: Vec<Reference>,

    /// When the activity occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// When the activity was recorded / updated.
    pub recorded: Instant,

    /// Policy or plan the activity was defined by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Vec<String>>,

    /// Where the activity occurred, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,

    /// Reason the activity is occurring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<Coding>>,

    /// Activity that occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Coding>,

    /// Actor involved.
    #[serde(deserialize_with = "non_empty::agent")]
    pub agent: Vec<ProvenanceAgent>,

    /// An entity used in this activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<Vec<ProvenanceEntity>>,

    /// Signature on target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Vec<Signature>>,
}

/// An actor taking a role in an activity for which it can be assigned some degree of responsibility
/// for the activity taking place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceAgent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// What the agents role was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Vec<CodeableConcept>>,

    /// Who participated.
    #[serde(flatten, with = "crate::choice::required")]
    pub who: ProvenanceAgentWho,

    /// Who the agent is representing.
    #[serde(flatten, with = "crate::choice::optional")]
    pub on_behalf_of: Option<ProvenanceAgentOnBehalfOf>,

    /// Type of relationship between agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_agent_type: Option<CodeableConcept>,
}

choice_type! {
    /// Who participated.
    pub enum ProvenanceAgentWho("who[x]") {
        Uri(String) = "whoUri",
        Reference(Reference) = "whoReference",
    }
}

choice_type! {
    /// Who the agent is representing.
    pub enum ProvenanceAgentOnBehalfOf("onBehalfOf[x]") {
        Uri(String) = "onBehalfOfUri",
        Reference(Reference) = "onBehalfOfReference",
    }
}

/// An entity used in this activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceEntity {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// How the entity was used during the activity.
    pub role: ProvenanceEntityRole,

    /// Identity of entity.
    #[serde(flatten, with = "crate::choice::required")]
    pub what: ProvenanceEntityWhat,

    /// Entity is attributed to this agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Vec<ProvenanceAgent>>,
}

choice_type! {
    /// Identity of entity.
    pub enum ProvenanceEntityWhat("what[x]") {
        Uri(String) = "whatUri",
        Reference(Reference) = "whatReference",
        Identifier(Identifier) = "whatIdentifier",
    }
}

/// How an entity was used in an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProvenanceEntityRole {
    Derivation,
    Revision,
    Quotation,
    Source,
    Removal,
}

non_empty_lists! {
    target = "target",
    agent = "agent",
}

impl_domain_resource!(Provenance);
impl_backbone_element!(ProvenanceAgent, ProvenanceEntity);
