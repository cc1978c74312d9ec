//! Extension type definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/Extension

use serde::{Deserialize, Serialize};

use crate::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Count, Distance,
    Duration, HumanName, Identifier, Meta, Money, Period, Quantity, Range, Ratio, Reference,
    SampledData, Signature, Timing,
};
use crate::primitives::{Date, DateTime, Decimal, Instant, Time};

/// Optional Extension Element - found in all resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// identifies the meaning of the extension.
    pub url: String,

    /// Value of extension.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value: Option<ExtensionValue>,
}

choice_type! {
    /// Value of extension.
    pub enum ExtensionValue("value[x]") {
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

impl_element!(Extension);
