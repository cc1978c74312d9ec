//! Parameters resource definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Parameters

use serde::{Deserialize, Serialize};

use crate::base::ResourceTag;
use crate::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Count, Distance,
    Duration, Extension, HumanName, Identifier, Meta, Money, Period, Quantity, Range, Ratio,
    Reference, SampledData, Signature, Timing,
};
use crate::primitives::{Date, DateTime, Decimal, Instant, Time};
use crate::resources::Resource;

/// This special resource type is used to represent an operation request and response
/// (operations.html). It has no other use, and there is no RESTful endpoint associated with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Resource type - always "Parameters"
    #[serde(default)]
    pub resource_type: ResourceTag<Parameters>,

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

    /// Operation Parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Vec<ParametersParameter>>,
}

/// A parameter passed to or received from the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametersParameter {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Extensions that cannot be ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_extension: Option<Vec<Extension>>,

    /// Name from the definition.
    pub name: String,

    /// If parameter is a data type.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<ParametersParameterValue>,

    /// If parameter is a whole resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,

    /// Named part of a multi-part parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<Vec<ParametersParameter>>,
}

choice_type! {
    /// If parameter is a data type.
    pub enum ParametersParameterValue("value[x]") {
        Base64Binary(String) = "valueBase64Binary",
        Boolean(bool) = "valueBoolean",
        Code(String) = "valueCode",
        Date(Date) = "valueDate",
        DateTime(DateTime) = "valueDateTime",
        Decimal(Decimal) = "valueDecimal",
        Id(String) = "valueId",
        Instant(Instant) = "valueInstant",
        Integer(i32) = "valueInteger",
        Markdown(String) = "valueMarkdown",
        Oid(String) = "valueOid",
        PositiveInt(u32) = "valuePositiveInt",
        String(String) = "valueString",
        Time(Time) = "valueTime",
        UnsignedInt(u32) = "valueUnsignedInt",
        Uri(String) = "valueUri",
        Address(Address) = "valueAddress",
        Age(Age) = "valueAge",
        Annotation(Annotation) = "valueAnnotation",
        Attachment(Attachment) = "valueAttachment",
        CodeableConcept(CodeableConcept) = "valueCodeableConcept",
        Coding(Coding) = "valueCoding",
        ContactPoint(ContactPoint) = "valueContactPoint",
        Count(Count) = "valueCount",
        Distance(Distance) = "valueDistance",
        Duration(Duration) = "valueDuration",
        HumanName(HumanName) = "valueHumanName",
        Identifier(Identifier) = "valueIdentifier",
        Money(Money) = "valueMoney",
        Period(Period) = "valuePeriod",
        Quantity(Quantity) = "valueQuantity",
        Range(Range) = "valueRange",
        Ratio(Ratio) = "valueRatio",
        Reference(Reference) = "valueReference",
        SampledData(SampledData) = "valueSampledData",
        Signature(Signature) = "valueSignature",
        Timing(Timing) = "valueTiming",
        Meta(Meta) = "valueMeta",
    }
}

impl_resource!(Parameters);
impl_backbone_element!(ParametersParameter);
