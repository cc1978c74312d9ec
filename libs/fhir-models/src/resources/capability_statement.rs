//! CapabilityStatement resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/CapabilityStatement

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{MessageSignificanceCategory, PublicationStatus, ResourceType, SearchParamType};
use crate::datatypes::{
    CodeableConcept, Coding, ContactDetail, Extension, Meta, Narrative, Reference, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A Capability Statement documents a set of capabilities (behaviors) of a FHIR Server that may be
/// used as a statement of actual server functionality or a statement of required or desired server
/// implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatement {
    /// Resource type - always "CapabilityStatement"
    #[serde(default)]
    pub resource_type: ResourceTag<CapabilityStatement>,

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

    /// Logical URI to reference this capability statement (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Business version of the capability statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this capability statement (computer friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name for this capability statement (human friendly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The status of this capability statement. Enables tracking the life-cycle of the content.
    pub status: PublicationStatus,

    /// For testing purposes, not real usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    /// Date this was last changed.
    pub date: DateTime,

    /// Name of the publisher (organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Natural language description of the capability statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for capability statement (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this capability statement is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Use and/or publishing restrictions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// The way that this statement is intended to be used, to describe an actual running instance
    /// of software, a particular product (kind not instance of software) or a class of
    /// implementation (e.g. a desired purchase).
    pub kind: CapabilityStatementKind,

    /// Canonical URL of another capability statement this implements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instantiates: Option<Vec<String>>,

    /// Software that is covered by this capability statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<CapabilityStatementSoftware>,

    /// If this describes a specific instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<CapabilityStatementImplementation>,

    /// FHIR Version the system uses.
    pub fhir_version: String,

    /// A code that indicates whether the application accepts unknown elements or extensions when
    /// reading resources.
    pub accept_unknown: UnknownContentCode,

    /// formats supported (xml | json | ttl | mime type).
    #[serde(deserialize_with = "non_empty::format")]
    pub format: Vec<String>,

    /// Patch formats supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_format: Option<Vec<String>>,

    /// Implementation guides supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_guide: Option<Vec<String>>,

    /// Profiles for use cases supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<Reference>>,

    /// If the endpoint is a RESTful one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<Vec<CapabilityStatementRest>>,

    /// If messaging is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging: Option<Vec<CapabilityStatementMessaging>>,

    /// Document definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Vec<CapabilityStatementDocument>>,
}

/// A document definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementDocument {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Mode of this document declaration - whether an application is a producer or consumer.
    pub mode: DocumentMode,

    /// Description of document support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Constraint on a resource used in the document.
    pub profile: Reference,
}

/// Identifies a specific implementation instance that is described by the capability statement -
/// i.e. a particular installation, rather than the capabilities of a software program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementImplementation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Describes this specific instance.
    pub description: String,

    /// Base URL for the installation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A description of the messaging capabilities of the solution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementMessaging {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Where messages should be sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Vec<CapabilityStatementMessagingEndpoint>>,

    /// Reliable Message Cache Length (min).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliable_cache: Option<u32>,

    /// Messaging interface behavior details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Messages supported by this system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_message: Option<Vec<CapabilityStatementMessagingSupportedMessage>>,

    /// Declare support for this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<CapabilityStatementMessagingEvent>>,
}

/// An endpoint (network accessible address) to which messages and/or replies are to be sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementMessagingEndpoint {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// http | ftp | mllp +.
    pub protocol: Coding,

    /// Network address or identifier of the end-point.
    pub address: String,
}

/// A description of the solution's support for an event at this end-point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementMessagingEvent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Event type.
    pub code: Coding,

    /// The impact of the content of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MessageSignificanceCategory>,

    /// The mode of this event declaration - whether an application is a sender or receiver.
    pub mode: EventCapabilityMode,

    /// A resource associated with the event. This is the resource that defines the event.
    pub focus: ResourceType,

    /// Profile that describes the request.
    pub request: Reference,

    /// Profile that describes the response.
    pub response: Reference,

    /// Endpoint-specific event documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// References to message definitions for messages this system can send or receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementMessagingSupportedMessage {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// The mode of this event declaration - whether application is sender or receiver.
    pub mode: EventCapabilityMode,

    /// Message supported by this system.
    pub definition: Reference,
}

/// A definition of the restful capabilities of the solution, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRest {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Identifies whether this portion of the statement is describing the ability to initiate or
    /// receive restful operations.
    pub mode: RestfulCapabilityMode,

    /// General description of implementation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Information about security of implementation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<CapabilityStatementRestSecurity>,

    /// Resource served on the REST interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Vec<CapabilityStatementRestResource>>,

    /// What operations are supported?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Vec<CapabilityStatementRestInteraction>>,

    /// Search parameters for searching all resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_param: Option<Vec<CapabilityStatementRestResourceSearchParam>>,

    /// Definition of an operation or a custom query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Vec<CapabilityStatementRestOperation>>,

    /// Compartments served/used by system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment: Option<Vec<String>>,
}

/// A specification of restful operations supported by the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRestInteraction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// A coded identifier of the operation, supported by the system. Only use: ['transaction',
    /// 'batch', 'search-system', 'history-system']
    pub code: FHIRRestfulInteractions,

    /// Anything special about operation behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Definition of an operation or a named query together with its parameters and their meaning and
/// type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRestOperation {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name by which the operation/query is invoked.
    pub name: String,

    /// The defined operation/query.
    pub definition: Reference,
}

/// A specification of the restful capabilities of the solution for a specific resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRestResource {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// A type of resource exposed via the restful interface.
    #[serde(rename = "type")]
    pub r#type: ResourceType,

    /// Base System profile for all uses of resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Reference>,

    /// Additional information about the use of the resource type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// What operations are supported?.
    #[serde(deserialize_with = "non_empty::interaction")]
    pub interaction: Vec<CapabilityStatementRestResourceInteraction>,

    /// This field is set to no-version to specify that the system does not support (server) or use
    /// (client) versioning for this resource type. If this has some other value, the server must at
    /// least correctly track and populate the versionId meta-property on resources. If the value is
    /// 'versioned-update', then the server supports all the versioning features, including using
    /// e-tags for version integrity in the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<ResourceVersionPolicy>,

    /// Whether vRead can return past versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_history: Option<bool>,

    /// If update can commit to a new identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_create: Option<bool>,

    /// If allows/uses conditional create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_create: Option<bool>,

    /// A code that indicates how the server supports conditional read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_read: Option<ConditionalReadStatus>,

    /// If allows/uses conditional update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_update: Option<bool>,

    /// A code that indicates how the server supports conditional delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_delete: Option<ConditionalDeleteStatus>,

    /// A set of flags that defines how references are supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_policy: Option<Vec<ReferenceHandlingPolicy>>,

    /// _include values supported by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_include: Option<Vec<String>>,

    /// _revinclude values supported by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_rev_include: Option<Vec<String>>,

    /// Search parameters supported by implementation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_param: Option<Vec<CapabilityStatementRestResourceSearchParam>>,
}

/// Identifies a restful operation supported by the solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRestResourceInteraction {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Coded identifier of the operation, supported by the system resource. Only use: ['read',
    /// 'vread', 'update', 'patch', 'delete', 'history-instance', 'history-type', 'create',
    /// 'search-type']
    pub code: FHIRRestfulInteractions,

    /// Anything special about operation behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Search parameters for implementations to support and/or make use of - either references to ones
/// defined in the specification, or additional ones defined for/by the implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRestResourceSearchParam {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name of search parameter.
    pub name: String,

    /// Source of definition for parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// The type of value a search parameter refers to, and how the content is interpreted.
    #[serde(rename = "type")]
    pub r#type: SearchParamType,

    /// Server-specific usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Information about security implementation from an interface perspective - what a client needs to
/// know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRestSecurity {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Adds CORS Headers (http://enable-cors.org/).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<bool>,

    /// OAuth | SMART-on-FHIR | NTLM | Basic | Kerberos | Certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<CodeableConcept>>,

    /// General description of how security works.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Certificates associated with security profiles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Vec<CapabilityStatementRestSecurityCertificate>>,
}

/// Certificates associated with security profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementRestSecurityCertificate {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Mime type for certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// Actual certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
}

/// Software that is covered by this capability statement. It is used when the capability statement
/// describes the capabilities of a particular software version, independent of an installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityStatementSoftware {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// A name the software is known by.
    pub name: String,

    /// Version covered by this statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Date this version released.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime>,
}

/// How a capability statement is intended to be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityStatementKind {
    Instance,
    Capability,
    Requirements,
}

/// A code that indicates how the server supports conditional delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionalDeleteStatus {
    NotSupported,
    Single,
    Multiple,
}

/// A code that indicates how the server supports conditional read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionalReadStatus {
    NotSupported,
    ModifiedSince,
    NotMatch,
    FullSupport,
}

/// Whether the application produces or consumes documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentMode {
    Producer,
    Consumer,
}

/// The mode of a message capability statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCapabilityMode {
    Sender,
    Receiver,
}

/// The set of interactions defined by the RESTful part of the FHIR specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FHIRRestfulInteractions {
    Read,
    Vread,
    Update,
    Patch,
    Delete,
    History,
    HistoryInstance,
    HistoryType,
    HistorySystem,
    Create,
    Search,
    SearchType,
    SearchSystem,
    Capabilities,
    Transaction,
    Batch,
    Operation,
}

/// A set of flags that defines how references are supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceHandlingPolicy {
    Literal,
    Logical,
    Resolves,
    Enforced,
    Local,
}

/// How the system supports versioning for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceVersionPolicy {
    NoVersion,
    Versioned,
    VersionedUpdate,
}

/// The mode of a RESTful capability statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestfulCapabilityMode {
    Client,
    Server,
}

/// A code that indicates whether an application accepts unknown elements or extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownContentCode {
    No,
    Extensions,
    Elements,
    Both,
}

non_empty_lists! {
    format = "format",
    interaction = "interaction",
}

impl_domain_resource!(CapabilityStatement);
impl_backbone_element!(
    CapabilityStatementDocument,
    CapabilityStatementImplementation,
    CapabilityStatementMessaging,
    CapabilityStatementMessagingEndpoint,
    CapabilityStatementMessagingEvent,
    CapabilityStatementMessagingSupportedMessage,
    CapabilityStatementRest,
    CapabilityStatementRestInteraction,
    CapabilityStatementRestOperation,
    CapabilityStatementRestResource,
    CapabilityStatementRestResourceInteraction,
    CapabilityStatementRestResourceSearchParam,
    CapabilityStatementRestSecurity,
    CapabilityStatementRestSecurityCertificate,
    CapabilityStatementSoftware,
);
