//! OperationDefinition resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/OperationDefinition

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::codes::{
    BindingStrength, OperationParameterUse, PublicationStatus, ResourceType, SearchParamType,
};
use crate::datatypes::{
    CodeableConcept, ContactDetail, Extension, Meta, Narrative, Reference, UsageContext,
};
use crate::primitives::DateTime;
use crate::resources::Resource;

/// A formal computable definition of an operation (on the RESTful interface) or a named query
/// (using the search interaction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinition {
    /// Resource type - always "OperationDefinition"
    #[serde(default)]
    pub resource_type: ResourceTag<OperationDefinition>,

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

    /// Logical URI to reference this operation definition (globally unique).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Business version of the operation definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Name for this operation definition (computer friendly).
    pub name: String,

    /// The status of this operation definition. Enables tracking the life-cycle of the content.
    pub status: PublicationStatus,

    /// Whether this is an operation or a named query.
    pub kind: OperationKind,

    /// For testing purposes, not real usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    /// Date this was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,

    /// Name of the publisher (organization or individual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Contact details for the publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<ContactDetail>>,

    /// Natural language description of the operation definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Context the content is intended to support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_context: Option<Vec<UsageContext>>,

    /// Intended jurisdiction for operation definition (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<Vec<CodeableConcept>>,

    /// Why this operation definition is defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Whether content is unchanged by the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotent: Option<bool>,

    /// Name used to invoke the operation.
    pub code: String,

    /// Additional information about use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Marks this as a profile of the base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Reference>,

    /// The types on which this operation can be executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Vec<ResourceType>>,

    /// Invoke at the system level?.
    pub system: bool,

    /// Invole at the type level?.
    #[serde(rename = "type")]
    pub r#type: bool,

    /// Invoke on an instance?.
    pub instance: bool,

    /// Parameters for the operation/query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Vec<OperationDefinitionParameter>>,

    /// Define overloaded variants for when generating code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overload: Option<Vec<OperationDefinitionOverload>>,
}

/// Defines an appropriate combination of parameters to use when invoking this operation, to help
/// code generators when generating overloaded parameter sets for this operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinitionOverload {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name of parameter to include in overload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<Vec<String>>,

    /// Comments to go on overload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// The parameters for the operation/query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinitionParameter {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name in Parameters.parameter.name or in URL.
    pub name: String,

    /// Whether this is an input or an output parameter.
    #[serde(rename = "use")]
    pub r#use: OperationParameterUse,

    /// Minimum Cardinality.
    pub min: i32,

    /// Maximum Cardinality (a number or *).
    pub max: String,

    /// Description of meaning/use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// What type this parameter has.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// How the parameter is understood as a search parameter. This is only used if the parameter
    /// type is 'string'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchParamType>,

    /// Profile on the type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Reference>,

    /// ValueSet details if this is coded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<OperationDefinitionParameterBinding>,

    /// Parts of a nested Parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<Vec<OperationDefinitionParameter>>,
}

/// Binds to a value set if this parameter is coded (code, Coding, CodeableConcept).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinitionParameterBinding {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Indicates the degree of conformance expectations associated with this binding - that is, the
    /// degree to which the provided value set must be adhered to in the instances.
    pub strength: BindingStrength,

    /// Source of value set.
    #[serde(flatten, with = "crate::choice::required")]
    pub value_set: OperationDefinitionParameterBindingValueSet,
}

choice_type! {
    /// Source of value set.
    pub enum OperationDefinitionParameterBindingValueSet("valueSet[x]") {
        Uri(String) = "valueSetUri",
        Reference(Reference) = "valueSetReference",
    }
}

/// Whether an operation is a normal operation or a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    Operation,
    Query,
}

impl_domain_resource!(OperationDefinition);
impl_backbone_element!(
    OperationDefinitionOverload,
    OperationDefinitionParameter,
    OperationDefinitionParameterBinding,
);
