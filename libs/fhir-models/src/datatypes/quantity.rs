//! Measured amounts

use serde::{Deserialize, Serialize};

use crate::datatypes::Extension;
use crate::primitives::Decimal;

/// A measured amount (or an amount that can potentially be measured).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Numerical value (with implicit precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    /// < | <= | >= | > - how to understand the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<QuantityComparator>,

    /// Unit representation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// System that defines coded unit form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Coded form of the unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A set of ordered Quantities defined by a low and high limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Low limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Quantity>,

    /// High limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Quantity>,
}

/// A relationship of two Quantity values - expressed as a numerator and a denominator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Numerator value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,

    /// Denominator value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,
}

/// A series of measurements taken by a device, with upper and lower limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledData {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Zero value and units
    pub origin: Quantity,

    /// Number of milliseconds between samples
    pub period: Decimal,

    /// Multiply data by this before adding to origin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,

    /// Lower limit of detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<Decimal>,

    /// Upper limit of detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<Decimal>,

    /// Number of sample points at each time point
    pub dimensions: u32,

    /// Decimal values with spaces, or "E" | "U" | "L"
    pub data: String,
}

/// A duration of time during which an organism (or a process) has existed
pub type Age = Quantity;

/// A measured amount (or an amount that can potentially be measured) expressed as a count
pub type Count = Quantity;

/// A length - a value with a unit that is a physical distance
pub type Distance = Quantity;

/// A length of time
pub type Duration = Quantity;

/// An amount of economic utility in some recognized currency
pub type Money = Quantity;

/// A quantity without a comparator
pub type SimpleQuantity = Quantity;

/// How the Quantity should be understood and represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityComparator {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
}

impl_element!(Quantity, Range, Ratio, SampledData);
