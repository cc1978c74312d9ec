//! Metadata types used by knowledge artifacts

use serde::{Deserialize, Serialize};

use crate::codes::OperationParameterUse;
use crate::datatypes::{
    Attachment, CodeableConcept, Coding, Duration, Extension, Period, Quantity, Range, Reference,
    Timing,
};
use crate::primitives::{Date, DateTime};

/// Specifies clinical/business/etc metadata that can be used to retrieve, index and/or categorize
/// an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageContext {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Type of context being specified
    pub code: Coding,

    /// Value that defines the context
    #[serde(flatten, with = "crate::choice::required")]
    pub value: UsageContextValue,
}

choice_type! {
    /// Value that defines the context
    pub enum UsageContextValue("value[x]") {
        CodeableConcept(CodeableConcept) = "valueCodeableConcept",
        Quantity(Quantity) = "valueQuantity",
        Range(Range) = "valueRange",
    }
}

/// Related artifacts such as additional documentation, justification, or bibliographic references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArtifact {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// documentation | justification | citation | predecessor | successor | derived-from |
    /// depends-on | composed-of
    #[serde(rename = "type")]
    pub r#type: RelatedArtifactType,

    /// Brief description of the related artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Bibliographic citation for the artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    /// Where the artifact can be accessed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// What document is being referenced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Attachment>,

    /// What resource is being referenced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Reference>,
}

/// Describes a required data item for evaluation in terms of the type of data, and optional code or
/// date-based filters of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirement {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// The type of the required data
    #[serde(rename = "type")]
    pub r#type: String,

    /// The profile of the required data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Vec<String>>,

    /// Indicates that specific structure elements are referenced by the knowledge module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_support: Option<Vec<String>>,

    /// What codes are expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_filter: Option<Vec<DataRequirementCodeFilter>>,

    /// What dates/date ranges are expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<Vec<DataRequirementDateFilter>>,
}

/// Code filters specify additional constraints on the data, specifying the value set of interest
/// for a particular element of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementCodeFilter {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// The code-valued attribute of the filter
    pub path: String,

    /// Valueset for the filter
    #[serde(flatten, with = "crate::choice::optional")]
    pub value_set: Option<DataRequirementCodeFilterValueSet>,

    /// What code is expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_code: Option<Vec<String>>,

    /// What Coding is expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_coding: Option<Vec<Coding>>,

    /// What CodeableConcept is expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_codeable_concept: Option<Vec<CodeableConcept>>,
}

choice_type! {
    /// Valueset for the filter
    pub enum DataRequirementCodeFilterValueSet("valueSet[x]") {
        String(String) = "valueSetString",
        Reference(Reference) = "valueSetReference",
    }
}

/// Date filters specify additional constraints on the data in terms of the applicable date range
/// for specific elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementDateFilter {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// The date-valued attribute of the filter
    pub path: String,

    /// The value of the filter, as a Period, DateTime, or Duration value
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<DataRequirementDateFilterValue>,
}

choice_type! {
    /// The value of the filter, as a Period, DateTime, or Duration value
    pub enum DataRequirementDateFilterValue("value[x]") {
        DateTime(DateTime) = "valueDateTime",
        Period(Period) = "valuePeriod",
        Duration(Duration) = "valueDuration",
    }
}

/// The parameters to the module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Name used to access the parameter value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// in | out
    #[serde(rename = "use")]
    pub r#use: OperationParameterUse,

    /// Minimum cardinality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,

    /// Maximum cardinality (a number of *)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    /// A brief description of the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// What type of value
    #[serde(rename = "type")]
    pub r#type: String,

    /// What profile the value is expected to be
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Reference>,
}

/// A description of a triggering event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDefinition {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// named-event | periodic | data-added | data-modified | data-removed | data-accessed |
    /// data-access-ended
    #[serde(rename = "type")]
    pub r#type: TriggerType,

    /// Triggering event name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    /// Timing of the event
    #[serde(flatten, with = "crate::choice::optional")]
    pub event_timing: Option<TriggerDefinitionEventTiming>,

    /// Triggering data of the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data: Option<DataRequirement>,
}

choice_type! {
    /// Timing of the event
    pub enum TriggerDefinitionEventTiming("eventTiming[x]") {
        Timing(Timing) = "eventTimingTiming",
        Reference(Reference) = "eventTimingReference",
        Date(Date) = "eventTimingDate",
        DateTime(DateTime) = "eventTimingDateTime",
    }
}

/// The type of relationship to the related artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelatedArtifactType {
    Documentation,
    Justification,
    Citation,
    Predecessor,
    Successor,
    DerivedFrom,
    DependsOn,
    ComposedOf,
}

/// The type of trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerType {
    NamedEvent,
    Periodic,
    DataAdded,
    DataModified,
    DataRemoved,
    DataAccessed,
    DataAccessEnded,
}

impl_element!(
    UsageContext,
    RelatedArtifact,
    DataRequirement,
    DataRequirementCodeFilter,
    DataRequirementDateFilter,
    ParameterDefinition,
    TriggerDefinition,
);
