//! Observation resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Observation

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Attachment, CodeableConcept, Extension, Identifier, Meta, Narrative, Period, Quantity, Range,
    Ratio, Reference, SampledData,
};
use crate::primitives::{DateTime, Instant, Time};
use crate::resources::Resource;

/// Measurements and simple assertions made about a patient, device or other subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Resource type - always "Observation"
    #[serde(default)]
    pub resource_type: ResourceTag<Observation>,

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

    /// Business Identifier for observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Vec<Identifier>>,

    /// Fulfills plan, proposal or order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on: Option<Vec<Reference>>,

    /// The status of the result value.
    pub status: ObservationStatus,

    /// Classification of type of observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<CodeableConcept>>,

    /// Type of observation (code / type).
    pub code: CodeableConcept,

    /// Who and/or what this is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    /// Healthcare event during which this observation is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Reference>,

    /// Clinically relevant time/time-period for observation.
    #[serde(flatten, with = "crate::choice::optional")]
    pub effective: Option<ObservationEffective>,

    /// Date/Time this was made available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<Instant>,

    /// Who is responsible for the observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Vec<Reference>>,

    /// Actual result.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<ObservationValue>,

    /// Why the result is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    /// High, low, normal, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<CodeableConcept>,

    /// Comments about result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Observed body part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,

    /// How it was done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Specimen used for this observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,

    /// (Measurement) Device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,

    /// Provides guide for interpretation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,

    /// Resource related to this observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<ObservationRelated>>,

    /// Component results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Vec<ObservationComponent>>,
}

choice_type! {
    /// Clinically relevant time/time-period for observation.
    pub enum ObservationEffective("effective[x]") {
        DateTime(DateTime) = "effectiveDateTime",
        Period(Period) = "effectivePeriod",
    }
}

choice_type! {
    /// Actual result.
    pub enum ObservationValue("value[x]") {
        Quantity(Quantity) = "valueQuantity",
        CodeableConcept(CodeableConcept) = "valueCodeableConcept",
        String(String) = "valueString",
        Boolean(bool) = "valueBoolean",
        Range(Range) = "valueRange",
        Ratio(Ratio) = "valueRatio",
        SampledData(SampledData) = "valueSampledData",
        Attachment(Attachment) = "valueAttachment",
        Time(Time) = "valueTime",
        DateTime(DateTime) = "valueDateTime",
        Period(Period) = "valuePeriod",
    }
}

/// Some observations have multiple component observations. These component observations are
/// expressed as separate code value pairs that share the same attributes. Examples include systolic
/// and diastolic component observations for blood pressure measurement and multiple component
/// observations for genetics observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Type of component observation (code / type).
    pub code: CodeableConcept,

    /// Actual component result.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<ObservationComponentValue>,

    /// Why the component result is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,

    /// High, low, normal, etc..
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<CodeableConcept>,

    /// Provides guide for interpretation of component result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
}

choice_type! {
    /// Actual component result.
    pub enum ObservationComponentValue("value[x]") {
        Quantity(Quantity) = "valueQuantity",
        CodeableConcept(CodeableConcept) = "valueCodeableConcept",
        String(String) = "valueString",
        Range(Range) = "valueRange",
        Ratio(Ratio) = "valueRatio",
        SampledData(SampledData) = "valueSampledData",
        Attachment(Attachment) = "valueAttachment",
        Time(Time) = "valueTime",
        DateTime(DateTime) = "valueDateTime",
        Period(Period) = "valuePeriod",
    }
}

/// Guidance on how to interpret the value by comparison to a normal or recommended range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationReferenceRange {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Low Range, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,

    /// High Range, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,

    /// Reference range qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<CodeableConcept>,

    /// Reference range population.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Vec<CodeableConcept>>,

    /// Applicable age range, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Range>,

    /// Text based reference range in an observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A reference to another resource (usually another Observation) whose relationship is defined by
/// the relationship type code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationRelated {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// A code specifying the kind of relationship that exists with the target resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<ObservationRelationshipType>,

    /// Resource that is related to this one.
    pub target: Reference,
}

/// Codes specifying how two observations are related
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationRelationshipType {
    HasMember,
    DerivedFrom,
    SequelTo,
    Replaces,
    QualifiedBy,
    InterferedBy,
}

/// Codes providing the status of an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Cancelled,
    EnteredInError,
    Unknown,
}

impl_domain_resource!(Observation);
impl_backbone_element!(ObservationComponent, ObservationReferenceRange, ObservationRelated);
