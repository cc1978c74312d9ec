//! Time periods and schedules

use serde::{Deserialize, Serialize};

use crate::codes::DaysOfWeek;
use crate::datatypes::{CodeableConcept, Duration, Extension, Range};
use crate::primitives::{DateTime, Decimal, Time};

/// A time period defined by a start and end date and optionally time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Starting time with inclusive boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime>,

    /// End time with inclusive boundary, if not ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime>,
}

/// Specifies an event that may occur multiple times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// When the event occurs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Vec<DateTime>>,

    /// When the event is to occur
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TimingRepeat>,

    /// BID | TID | QID | AM | PM | QD | QOD | Q4H | Q6H +
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
}

/// A set of rules that describe when the event is scheduled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingRepeat {
    /// Unique id for inter-element referencing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Additional content defined by implementations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<Extension>>,

    /// Length/Range of lengths, or (Start and/or end) limits
    #[serde(flatten, with = "crate::choice::optional")]
    pub bounds: Option<TimingRepeatBounds>,

    /// Number of times to repeat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    /// Maximum number of times to repeat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_max: Option<i32>,

    /// How long when it happens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Decimal>,

    /// How long when it happens (Max)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Decimal>,

    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<UnitsOfTime>,

    /// Event occurs frequency times per period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i32>,

    /// Event occurs up to frequencyMax times per period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<i32>,

    /// Event occurs frequency times per period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Decimal>,

    /// Upper limit of period (3-4 hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<Decimal>,

    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<UnitsOfTime>,

    /// mon | tue | wed | thu | fri | sat | sun
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Vec<DaysOfWeek>>,

    /// Time of day for action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<Vec<Time>>,

    /// Regular life events the event is tied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Vec<EventTiming>>,

    /// Minutes from event (before or after)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

choice_type! {
    /// Length/Range of lengths, or (Start and/or end) limits
    pub enum TimingRepeatBounds("bounds[x]") {
        Duration(Duration) = "boundsDuration",
        Range(Range) = "boundsRange",
        Period(Period) = "boundsPeriod",
    }
}

/// Real world event relating to the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventTiming {
    Morn,
    Aft,
    Eve,
    Night,
    Phs,
    Hs,
    Wake,
    #[serde(rename = "C")]
    Meal,
    Cm,
    Cd,
    Cv,
    #[serde(rename = "AC")]
    BeforeMeal,
    Acm,
    Acd,
    Acv,
    #[serde(rename = "PC")]
    AfterMeal,
    Pcm,
    Pcd,
    Pcv,
}

/// A unit of time (units from UCUM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitsOfTime {
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "min")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "wk")]
    Week,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "a")]
    Year,
}

impl_element!(Period, Timing, TimingRepeat);
