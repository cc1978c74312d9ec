//! ElementDefinition type definition
//! Canonical URL: http://hl7.org/fhir/StructureDefinition/ElementDefinition

use serde::{Deserialize, Serialize};

use crate::codes::BindingStrength;
use crate::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Count, Distance,
    Duration, Extension, HumanName, Identifier, Meta, Money, Period, Quantity, Range, Ratio,
    Reference, SampledData, Signature, Timing,
};
use crate::primitives::{Date, DateTime, Decimal, Instant, Time};

/// Captures constraints on each element within the resource, profile, or extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinition {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Path of the element in the hierarchy of elements.
    pub path: String,

    /// Codes that define how this element is represented in instances, when the deviation varies
    /// from the normal case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation: Option<Vec<PropertyRepresentation>>,

    /// Name for this particular element (in a set of slices).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_name: Option<String>,

    /// Name for element to display with or prompt for element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Corresponding codes in terminologies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Coding>>,

    /// This element is sliced - slices follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slicing: Option<ElementDefinitionSlicing>,

    /// Concise definition for space-constrained presentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    /// Full formal definition as narrative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// Comments about the use of this element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Why this resource has been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    /// Other names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,

    /// Minimum Cardinality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,

    /// Maximum Cardinality (a number or *).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    /// Base definition information for tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<ElementDefinitionBase>,

    /// Reference to definition of content for the element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_reference: Option<String>,

    /// Data type and Profile for this element.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub r#type: Option<Vec<ElementDefinitionType>>,

    /// Specified value if missing from instance.
    #[serde(flatten, with = "crate::choice::optional")]
    pub default_value: Option<ElementDefinitionDefaultValue>,

    /// Implicit meaning when this element is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_when_missing: Option<String>,

    /// What the order of the elements means.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_meaning: Option<String>,

    /// Value must be exactly this.
    #[serde(flatten, with = "crate::choice::optional")]
    pub fixed: Option<ElementDefinitionFixed>,

    /// Value must have at least these property values.
    #[serde(flatten, with = "crate::choice::optional")]
    pub pattern: Option<ElementDefinitionPattern>,

    /// Example value (as defined for type).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Vec<ElementDefinitionExample>>,

    /// Minimum Allowed Value (for some types).
    #[serde(flatten, with = "crate::choice::optional")]
    pub min_value: Option<ElementDefinitionMinValue>,

    /// Maximum Allowed Value (for some types).
    #[serde(flatten, with = "crate::choice::optional")]
    pub max_value: Option<ElementDefinitionMaxValue>,

    /// Max length for strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,

    /// Reference to invariant about presence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<String>>,

    /// Condition that must evaluate to true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Vec<ElementDefinitionConstraint>>,

    /// If the element must supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_support: Option<bool>,

    /// If this modifies the meaning of other elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_modifier: Option<bool>,

    /// Include when _summary = true?.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_summary: Option<bool>,

    /// ValueSet details if this is coded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<ElementDefinitionBinding>,

    /// Map element to another set of definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Vec<ElementDefinitionMapping>>,
}

choice_type! {
    /// Specified value if missing from instance.
    pub enum ElementDefinitionDefaultValue("defaultValue[x]") {
        Base64Binary(String) = "defaultValueBase64Binary",
        Boolean(bool) = "defaultValueBoolean",
        Code(String) = "defaultValueCode",
        Date(Date) = "defaultValueDate",
        DateTime(DateTime) = "defaultValueDateTime",
        Decimal(Decimal) = "defaultValueDecimal",
        Id(String) = "defaultValueId",
        Instant(Instant) = "defaultValueInstant",
        Integer(i32) = "defaultValueInteger",
        Markdown(String) = "defaultValueMarkdown",
        Oid(String) = "defaultValueOid",
        PositiveInt(u32) = "defaultValuePositiveInt",
        String(String) = "defaultValueString",
        Time(Time) = "defaultValueTime",
        UnsignedInt(u32) = "defaultValueUnsignedInt",
        Uri(String) = "defaultValueUri",
        Address(Address) = "defaultValueAddress",
        Age(Age) = "defaultValueAge",
        Annotation(Annotation) = "defaultValueAnnotation",
        Attachment(Attachment) = "defaultValueAttachment",
        CodeableConcept(CodeableConcept) = "defaultValueCodeableConcept",
        Coding(Coding) = "defaultValueCoding",
        ContactPoint(ContactPoint) = "defaultValueContactPoint",
        Count(Count) = "defaultValueCount",
        Distance(Distance) = "defaultValueDistance",
        Duration(Duration) = "defaultValueDuration",
        HumanName(HumanName) = "defaultValueHumanName",
        Identifier(Identifier) = "defaultValueIdentifier",
        Money(Money) = "defaultValueMoney",
        Period(Period) = "defaultValuePeriod",
        Quantity(Quantity) = "defaultValueQuantity",
        Range(Range) = "defaultValueRange",
        Ratio(Ratio) = "defaultValueRatio",
        Reference(Reference) = "defaultValueReference",
        SampledData(SampledData) = "defaultValueSampledData",
        Signature(Signature) = "defaultValueSignature",
        Timing(Timing) = "defaultValueTiming",
        Meta(Meta) = "defaultValueMeta",
    }
}

choice_type! {
    /// Value must be exactly this.
    pub enum ElementDefinitionFixed("fixed[x]") {
        Base64Binary(String) = "fixedBase64Binary",
        Boolean(bool) = "fixedBoolean",
        Code(String) = "fixedCode",
        Date(Date) = "fixedDate",
        DateTime(DateTime) = "fixedDateTime",
        Decimal(Decimal) = "fixedDecimal",
        Id(String) = "fixedId",
        Instant(Instant) = "fixedInstant",
        Integer(i32) = "fixedInteger",
        Markdown(String) = "fixedMarkdown",
        Oid(String) = "fixedOid",
        PositiveInt(u32) = "fixedPositiveInt",
        String(String) = "fixedString",
        Time(Time) = "fixedTime",
        UnsignedInt(u32) = "fixedUnsignedInt",
        Uri(String) = "fixedUri",
        Address(Address) = "fixedAddress",
        Age(Age) = "fixedAge",
        Annotation(Annotation) = "fixedAnnotation",
        Attachment(Attachment) = "fixedAttachment",
        CodeableConcept(CodeableConcept) = "fixedCodeableConcept",
        Coding(Coding) = "fixedCoding",
        ContactPoint(ContactPoint) = "fixedContactPoint",
        Count(Count) = "fixedCount",
        Distance(Distance) = "fixedDistance",
        Duration(Duration) = "fixedDuration",
        HumanName(HumanName) = "fixedHumanName",
        Identifier(Identifier) = "fixedIdentifier",
        Money(Money) = "fixedMoney",
        Period(Period) = "fixedPeriod",
        Quantity(Quantity) = "fixedQuantity",
        Range(Range) = "fixedRange",
        Ratio(Ratio) = "fixedRatio",
        Reference(Reference) = "fixedReference",
        SampledData(SampledData) = "fixedSampledData",
        Signature(Signature) = "fixedSignature",
        Timing(Timing) = "fixedTiming",
        Meta(Meta) = "fixedMeta",
    }
}

choice_type! {
    /// Value must have at least these property values.
    pub enum ElementDefinitionPattern("pattern[x]") {
        Base64Binary(String) = "patternBase64Binary",
        Boolean(bool) = "patternBoolean",
        Code(String) = "patternCode",
        Date(Date) = "patternDate",
        DateTime(DateTime) = "patternDateTime",
        Decimal(Decimal) = "patternDecimal",
        Id(String) = "patternId",
        Instant(Instant) = "patternInstant",
        Integer(i32) = "patternInteger",
        Markdown(String) = "patternMarkdown",
        Oid(String) = "patternOid",
        PositiveInt(u32) = "patternPositiveInt",
        String(String) = "patternString",
        Time(Time) = "patternTime",
        UnsignedInt(u32) = "patternUnsignedInt",
        Uri(String) = "patternUri",
        Address(Address) = "patternAddress",
        Age(Age) = "patternAge",
        Annotation(Annotation) = "patternAnnotation",
        Attachment(Attachment) = "patternAttachment",
        CodeableConcept(CodeableConcept) = "patternCodeableConcept",
        Coding(Coding) = "patternCoding",
        ContactPoint(ContactPoint) = "patternContactPoint",
        Count(Count) = "patternCount",
        Distance(Distance) = "patternDistance",
        Duration(Duration) = "patternDuration",
        HumanName(HumanName) = "patternHumanName",
        Identifier(Identifier) = "patternIdentifier",
        Money(Money) = "patternMoney",
        Period(Period) = "patternPeriod",
        Quantity(Quantity) = "patternQuantity",
        Range(Range) = "patternRange",
        Ratio(Ratio) = "patternRatio",
        Reference(Reference) = "patternReference",
        SampledData(SampledData) = "patternSampledData",
        Signature(Signature) = "patternSignature",
        Timing(Timing) = "patternTiming",
        Meta(Meta) = "patternMeta",
    }
}

choice_type! {
    /// Minimum Allowed Value (for some types).
    pub enum ElementDefinitionMinValue("minValue[x]") {
        Date(Date) = "minValueDate",
        DateTime(DateTime) = "minValueDateTime",
        Instant(Instant) = "minValueInstant",
        Time(Time) = "minValueTime",
        Decimal(Decimal) = "minValueDecimal",
        Integer(i32) = "minValueInteger",
        PositiveInt(u32) = "minValuePositiveInt",
        UnsignedInt(u32) = "minValueUnsignedInt",
        Quantity(Quantity) = "minValueQuantity",
    }
}

choice_type! {
    /// Maximum Allowed Value (for some types).
    pub enum ElementDefinitionMaxValue("maxValue[x]") {
        Date(Date) = "maxValueDate",
        DateTime(DateTime) = "maxValueDateTime",
        Instant(Instant) = "maxValueInstant",
        Time(Time) = "maxValueTime",
        Decimal(Decimal) = "maxValueDecimal",
        Integer(i32) = "maxValueInteger",
        PositiveInt(u32) = "maxValuePositiveInt",
        UnsignedInt(u32) = "maxValueUnsignedInt",
        Quantity(Quantity) = "maxValueQuantity",
    }
}

/// Information about the base definition of the element, provided to make it unnecessary for tools
/// to trace the deviation of the element through the derived and related profiles. This information
/// is provided when the element definition is not the original definition of an element - i.g.
/// either in a constraint on another type, or for elements from a super type in a snap shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionBase {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Path that identifies the base element.
    pub path: String,

    /// Min cardinality of the base element.
    pub min: u32,

    /// Max cardinality of the base element.
    pub max: String,
}

/// Binds to a value set if this element is coded (code, Coding, CodeableConcept, Quantity), or the
/// data types (string, uri).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionBinding {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Indicates the degree of conformance expectations associated with this binding - that is, the
    /// degree to which the provided value set must be adhered to in the instances.
    pub strength: BindingStrength,

    /// Human explanation of the value set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source of value set.
    #[serde(flatten, with = "crate::choice::optional")]
    pub value_set: Option<ElementDefinitionBindingValueSet>,
}

choice_type! {
    /// Source of value set.
    pub enum ElementDefinitionBindingValueSet("valueSet[x]") {
        Uri(String) = "valueSetUri",
        Reference(Reference) = "valueSetReference",
    }
}

/// Formal constraints such as co-occurrence and other constraints that can be computationally
/// evaluated within the context of the instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionConstraint {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Target of 'condition' reference above.
    pub key: String,

    /// Why this constraint is necessary or appropriate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    /// Identifies the impact constraint violation has on the conformance of the instance.
    pub severity: ConstraintSeverity,

    /// Human description of constraint.
    pub human: String,

    /// FHIRPath expression of constraint.
    pub expression: String,

    /// XPath expression of constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// Reference to original source of constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A sample value for this element demonstrating the type of information that would typically be
/// found in the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionExample {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Describes the purpose of this example.
    pub label: String,

    /// Value of Example (one of allowed types).
    #[serde(flatten, with = "crate::choice::required")]
    pub value: ElementDefinitionExampleValue,
}

choice_type! {
    /// Value of Example (one of allowed types).
    pub enum ElementDefinitionExampleValue("value[x]") {
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

/// Identifies a concept from an external specification that roughly corresponds to this element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionMapping {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Reference to mapping declaration.
    pub identity: String,

    /// Computable language of mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Details of the mapping.
    pub map: String,

    /// Comments about the mapping or its use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Indicates that the element is sliced into a set of alternative definitions (i.e. in a structure
/// definition, there are multiple different constraints on a single element in the base resource).
/// Slicing can be used in any resource that has cardinality ..* on the base resource, or any
/// resource with a choice of types. The set of slices is any elements that come after this in the
/// element sequence that have the same path, until a shorter path occurs (the shorter path
/// terminates the set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionSlicing {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Element values that are used to distinguish the slices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Vec<ElementDefinitionSlicingDiscriminator>>,

    /// Text description of how slicing works (or not).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// If elements must be in same order as slices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,

    /// Whether additional slices are allowed or not. When the slices are ordered, profile authors
    /// can also say that additional slices are only allowed at the end.
    pub rules: SlicingRules,
}

/// Designates which child elements are used to discriminate between the slices when processing an
/// instance. If one or more discriminators are provided, the value of the child elements in the
/// instance data SHALL completely distinguish which slice the element in the resource matches based
/// on the allowed values for those elements in each of the slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionSlicingDiscriminator {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// How the element value is interpreted when discrimination is evaluated.
    #[serde(rename = "type")]
    pub r#type: DiscriminatorType,

    /// Path to element value.
    pub path: String,
}

/// The data type or resource that the value of this element is permitted to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinitionType {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Data type or Resource (reference to definition).
    pub code: String,

    /// Profile (StructureDefinition) to apply (or IG).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Profile (StructureDefinition) to apply to reference target (or IG).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_profile: Option<String>,

    /// If the type is a reference to another resource, how the resource is or can be aggregated -
    /// is it a contained resource, or a reference, and if the context is a bundle, is it included
    /// in the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Vec<AggregationMode>>,

    /// Whether this reference needs to be version specific or version independent, or whether
    /// either can be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<ReferenceVersionRules>,
}

/// How resource references can be aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationMode {
    Contained,
    Referenced,
    Bundled,
}

/// SHALL applications comply with this constraint?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintSeverity {
    Error,
    Warning,
}

/// How an element value is interpreted when discrimination is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscriminatorType {
    Value,
    Exists,
    Pattern,
    Type,
    Profile,
}

/// How a property is represented when serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyRepresentation {
    XmlAttr,
    XmlText,
    TypeAttr,
    CdaText,
    Xhtml,
}

/// Whether a reference needs to be version specific or version independent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceVersionRules {
    Either,
    Independent,
    Specific,
}

/// How slices are interpreted when evaluating an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlicingRules {
    Closed,
    Open,
    OpenAtEnd,
}

impl_element!(
    ElementDefinition,
    ElementDefinitionBase,
    ElementDefinitionBinding,
    ElementDefinitionConstraint,
    ElementDefinitionExample,
    ElementDefinitionMapping,
    ElementDefinitionSlicing,
    ElementDefinitionSlicingDiscriminator,
    ElementDefinitionType,
);
