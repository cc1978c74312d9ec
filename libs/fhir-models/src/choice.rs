//! Choice-type (`[x]`) elements
//!
//! A FHIR element such as `onset[x]` is carried on the wire under one of
//! several sibling members (`onsetDateTime`, `onsetAge`, ...), where the
//! suffix names the value's type. In Rust each group is a closed enum
//! declared with `choice_type!` and stored on its owner as a flattened
//! field:
//!
//! ```ignore
//! #[serde(flatten, with = "crate::choice::optional")]
//! pub onset: Option<ConditionOnset>,
//! ```
//!
//! Decoding is strict. Two sibling members of one group are rejected, as is
//! a value that does not decode as the type its suffix names. A mandatory
//! group (`crate::choice::required`) with no member present reports the
//! group as a missing field.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, Error as _, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};

/// A closed set of alternatives for one `[x]` element
pub trait ChoiceType: Sized {
    /// Group name including the `[x]` marker, e.g. `value[x]`
    const NAME: &'static str;

    /// Every JSON member name the group may appear under
    const KEYS: &'static [&'static str];

    /// Member name for the current variant
    fn key(&self) -> &'static str;

    /// Writes the current variant as a single map entry
    fn serialize_entry<M>(&self, map: &mut M) -> Result<(), M::Error>
    where
        M: SerializeMap;

    /// Reads the value stored under `key`, which must be one of [`Self::KEYS`]
    fn deserialize_entry<'de, A>(key: &str, map: &mut A) -> Result<Self, A::Error>
    where
        A: MapAccess<'de>;
}

struct ChoiceVisitor<T>(PhantomData<T>);

impl<'de, T: ChoiceType> Visitor<'de> for ChoiceVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with at most one `{}` member", T::NAME)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut found: Option<T> = None;

        while let Some(key) = map.next_key::<String>()? {
            if !T::KEYS.contains(&key.as_str()) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }

            if let Some(previous) = &found {
                return Err(A::Error::custom(format_args!(
                    "`{}` conflicts with `{}`: {} takes a single value",
                    key,
                    previous.key(),
                    T::NAME
                )));
            }

            let value = T::deserialize_entry(&key, &mut map)
                .map_err(|err| A::Error::custom(format_args!("invalid `{}`: {}", key, err)))?;
            found = Some(value);
        }

        Ok(found)
    }
}

fn serialize_choice<T, S>(value: Option<&T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ChoiceType,
    S: Serializer,
{
    let mut map = serializer.serialize_map(None)?;
    if let Some(value) = value {
        value.serialize_entry(&mut map)?;
    }
    map.end()
}

/// `with` module for an optional (0..1) choice group
pub mod optional {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ChoiceType,
        S: Serializer,
    {
        serialize_choice(value.as_ref(), serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: ChoiceType,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ChoiceVisitor(PhantomData))
    }
}

/// `with` module for a mandatory (1..1) choice group
pub mod required {
    use super::*;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ChoiceType,
        S: Serializer,
    {
        serialize_choice(Some(value), serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: ChoiceType,
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_map(ChoiceVisitor(PhantomData))?
            .ok_or_else(|| D::Error::missing_field(T::NAME))
    }
}

#[cfg(test)]
mod tests {
    use crate::datatypes::{Extension, ExtensionValue, Quantity};
    use crate::primitives::DateTime;
    use crate::resources::{Condition, ConditionAbatement, ConditionOnset};
    use serde_json::json;

    use super::ChoiceType;

    #[test]
    fn group_metadata() {
        assert_eq!(ConditionOnset::NAME, "onset[x]");
        assert!(ConditionOnset::KEYS.contains(&"onsetDateTime"));
        let onset = ConditionOnset::String("childhood".into());
        assert_eq!(onset.key(), "onsetString");
    }

    #[test]
    fn decodes_the_present_member() {
        let condition: Condition = serde_json::from_value(json!({
            "resourceType": "Condition",
            "subject": {"reference": "Patient/1"},
            "onsetDateTime": "2017-03-02"
        }))
        .unwrap();

        let expected: DateTime = "2017-03-02".parse().unwrap();
        assert_eq!(condition.onset, Some(ConditionOnset::DateTime(expected)));
        assert_eq!(condition.abatement, None);
    }

    #[test]
    fn rejects_two_members_of_one_group() {
        let err = serde_json::from_value::<Condition>(json!({
            "resourceType": "Condition",
            "subject": {"reference": "Patient/1"},
            "abatementBoolean": true,
            "abatementString": "resolved"
        }))
        .unwrap_err()
        .to_string();

        assert!(err.contains("abatementString"), "{err}");
        assert!(err.contains("abatementBoolean"), "{err}");
        assert!(err.contains("abatement[x]"), "{err}");
    }

    #[test]
    fn rejects_member_of_the_wrong_type() {
        let err = serde_json::from_value::<Condition>(json!({
            "resourceType": "Condition",
            "subject": {"reference": "Patient/1"},
            "abatementBoolean": "yes"
        }))
        .unwrap_err()
        .to_string();

        assert!(err.contains("invalid `abatementBoolean`"), "{err}");
    }

    #[test]
    fn writes_only_the_present_member() {
        let extension = Extension {
            id: None,
            extension: None,
            url: "http://example.org/weight".into(),
            value: Some(ExtensionValue::Quantity(Quantity {
                value: Some("72.50".parse().unwrap()),
                unit: Some("kg".into()),
                ..Default::default()
            })),
        };

        assert_eq!(
            serde_json::to_string(&extension).unwrap(),
            r#"{"url":"http://example.org/weight","valueQuantity":{"value":72.50,"unit":"kg"}}"#
        );

        let abated = ConditionAbatement::Boolean(true);
        assert_eq!(abated.key(), "abatementBoolean");
    }
}
