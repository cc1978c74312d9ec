//! Lower-bound checks for repeating elements
//!
//! A `1..*` element is a plain `Vec<T>` in Rust, so serde alone would accept
//! `[]`. Generated modules route those fields through [`non_empty`] with the
//! `non_empty_lists!` macro:
//!
//! ```ignore
//! #[serde(deserialize_with = "non_empty::content")]
//! pub content: Vec<DocumentReferenceContent>,
//!
//! non_empty_lists! {
//!     content = "content",
//! }
//! ```

use serde::de::{Deserialize, Deserializer, Error as _};

/// Decodes a list that must hold at least one element; `key` names the
/// member in the error
pub fn non_empty<'de, D, T>(deserializer: D, key: &'static str) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<T>::deserialize(deserializer)?;
    if items.is_empty() {
        return Err(D::Error::custom(format_args!(
            "`{}` must contain at least one element",
            key
        )));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Listing {
        #[serde(deserialize_with = "names")]
        names: Vec<String>,
    }

    fn names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        non_empty(deserializer, "names")
    }

    #[test]
    fn accepts_populated_lists() {
        let listing: Listing = serde_json::from_value(json!({"names": ["a", "b"]})).unwrap();
        assert_eq!(listing.names, vec!["a", "b"]);
    }

    #[test]
    fn empty_lists_name_the_member() {
        let err = serde_json::from_value::<Listing>(json!({"names": []}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("`names` must contain at least one element"), "{err}");
    }

    #[test]
    fn absent_lists_are_missing() {
        let err = serde_json::from_value::<Listing>(json!({}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing field `names`"), "{err}");
    }
}
