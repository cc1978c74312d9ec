//! JSON entry points
//!
//! Thin wrappers over `serde_json` that tag decode failures with the name of
//! the type being decoded.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::base::FhirType;
use crate::error::{Error, Result};

/// Decodes `T` from JSON text
pub fn from_str<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned + FhirType,
{
    serde_json::from_str(input).map_err(|source| Error::Decode {
        type_name: T::TYPE_NAME,
        source,
    })
}

/// Decodes `T` from a parsed JSON value
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned + FhirType,
{
    serde_json::from_value(value).map_err(|source| Error::Decode {
        type_name: T::TYPE_NAME,
        source,
    })
}

pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_string_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::Coding;
    use crate::resources::{Composition, Resource};
    use serde_json::json;

    #[test]
    fn decode_errors_name_the_type() {
        let err = from_value::<Composition>(json!({"resourceType": "Composition"})).unwrap_err();
        match err {
            Error::Decode { type_name, .. } => assert_eq!(type_name, "Composition"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn syntax_errors_are_decode_errors() {
        let err = from_str::<Coding>("{\"code\": ").unwrap_err();
        assert!(matches!(err, Error::Decode { type_name: "Coding", .. }));
    }

    #[test]
    fn text_round_trip() {
        let coding: Coding =
            from_str(r#"{"system":"http://loinc.org","code":"29463-7","display":"Body Weight"}"#)
                .unwrap();
        assert_eq!(coding.code.as_deref(), Some("29463-7"));

        let text = to_string(&coding).unwrap();
        assert_eq!(
            text,
            r#"{"system":"http://loinc.org","code":"29463-7","display":"Body Weight"}"#
        );
    }

    #[test]
    fn resource_union_goes_through_the_same_entry_points() {
        let err = from_str::<Resource>(r#"{"resourceType":"Basic"}"#).unwrap_err();
        assert!(err.to_string().contains("Basic"), "{err}");

        let resource: Resource = from_str(r#"{"resourceType":"Patient"}"#).unwrap();
        assert_eq!(resource.resource_type(), "Patient");
        assert!(to_string_pretty(&resource).unwrap().contains("\"resourceType\": \"Patient\""));
    }
}
