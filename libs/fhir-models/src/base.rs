//! Capability traits for the FHIR type hierarchy
//!
//! FHIR describes `Element → BackboneElement` and
//! `Resource → DomainResource` as an inheritance chain. Concrete structs
//! here carry the inherited fields inline and expose them through the
//! traits below, so generic code can read `id`, `meta` or the extension
//! lists of any record without knowing its concrete type.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Unexpected};
use serde::ser::{Serialize, Serializer};

use crate::datatypes::{Extension, Meta, Narrative};
use crate::resources::Resource;

/// Static name of a FHIR type
///
/// Kept apart from the capability traits so those stay object safe.
pub trait FhirType {
    /// Type name as it appears in `resourceType` or in `[x]` suffixes
    const TYPE_NAME: &'static str;
}

/// Base of every complex datatype and nested structure
pub trait Element {
    /// Unique id for inter-element referencing
    fn id(&self) -> Option<&str>;

    /// Additional content defined by implementations
    fn extension(&self) -> &[Extension];
}

/// Nested structure that may carry modifier extensions
pub trait BackboneElement: Element {
    /// Extensions that cannot be ignored
    fn modifier_extension(&self) -> &[Extension];
}

/// Base of every resource
pub trait FhirResource {
    /// Discriminator written to `resourceType`
    fn resource_type(&self) -> &'static str;

    /// Logical id of this artifact
    fn id(&self) -> Option<&str>;

    /// Metadata about the resource
    fn meta(&self) -> Option<&Meta>;

    /// A set of rules under which this content was created
    fn implicit_rules(&self) -> Option<&str>;

    /// Language of the resource content
    fn language(&self) -> Option<&str>;
}

/// Resource with narrative, contained resources and extensions
pub trait DomainResource: FhirResource {
    /// Text summary of the resource, for human interpretation
    fn text(&self) -> Option<&Narrative>;

    /// Contained, inline Resources
    fn contained(&self) -> &[Resource];

    /// Additional content defined by implementations
    fn extension(&self) -> &[Extension];

    /// Extensions that cannot be ignored
    fn modifier_extension(&self) -> &[Extension];
}

/// The `resourceType` member of a resource
///
/// Zero-sized: the value is fixed by `R`. Serializes as the type name and
/// rejects any other name on input. When the member is absent the default
/// applies, which lets a record nested in a typed position omit it.
pub struct ResourceTag<R>(PhantomData<fn() -> R>);

impl<R> ResourceTag<R> {
    pub const fn new() -> Self {
        ResourceTag(PhantomData)
    }
}

impl<R: FhirType> ResourceTag<R> {
    pub fn as_str(&self) -> &'static str {
        R::TYPE_NAME
    }
}

impl<R> Default for ResourceTag<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ResourceTag<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceTag<R> {}

impl<R> PartialEq for ResourceTag<R> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<R> Eq for ResourceTag<R> {}

impl<R: FhirType> fmt::Debug for ResourceTag<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", R::TYPE_NAME)
    }
}

impl<R: FhirType> fmt::Display for ResourceTag<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(R::TYPE_NAME)
    }
}

impl<R: FhirType> Serialize for ResourceTag<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(R::TYPE_NAME)
    }
}

impl<'de, R: FhirType> Deserialize<'de> for ResourceTag<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == R::TYPE_NAME {
            Ok(ResourceTag::new())
        } else {
            Err(de::Error::invalid_value(
                Unexpected::Str(&name),
                &R::TYPE_NAME,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Bundle, Patient};
    use serde_json::json;

    #[test]
    fn tag_serializes_type_name() {
        let tag: ResourceTag<Patient> = ResourceTag::new();
        assert_eq!(serde_json::to_value(tag).unwrap(), json!("Patient"));
        assert_eq!(tag.to_string(), "Patient");
    }

    #[test]
    fn tag_rejects_other_names() {
        let err = serde_json::from_value::<ResourceTag<Patient>>(json!("Observation")).unwrap_err();
        assert!(err.to_string().contains("Observation"));
        assert!(serde_json::from_value::<ResourceTag<Bundle>>(json!("Bundle")).is_ok());
    }

    #[test]
    fn resource_traits_expose_base_fields() {
        let patient: Patient = serde_json::from_value(json!({
            "resourceType": "Patient",
            "id": "example",
            "language": "en",
            "extension": [{"url": "http://example.org/ext", "valueBoolean": true}]
        }))
        .unwrap();

        let resource: &dyn DomainResource = &patient;
        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.id(), Some("example"));
        assert_eq!(resource.language(), Some("en"));
        assert_eq!(resource.extension().len(), 1);
        assert!(resource.modifier_extension().is_empty());
        assert!(resource.contained().is_empty());
    }
}
