//! Decoding and inspection helpers for the [`Resource`] union

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, trace};

use super::Resource;
use crate::base::{FhirResource, FhirType};
use crate::error::{Error, Result};

/// A concrete resource type that can be borrowed out of a [`Resource`]
pub trait ResourceVariant: FhirResource + Sized {
    fn from_resource(resource: &Resource) -> Option<&Self>;
}

impl Resource {
    /// Decodes a resource from JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).map_err(|source| Error::Decode {
            type_name: Self::TYPE_NAME,
            source,
        })?;
        Self::from_value(value)
    }

    /// Decodes a resource from a parsed JSON value
    ///
    /// The value must be an object carrying a string `resourceType` that
    /// names a known resource type.
    pub fn from_value(value: Value) -> Result<Self> {
        let resource_type = match &value {
            Value::Object(object) => match object.get("resourceType") {
                Some(Value::String(name)) => name.clone(),
                _ => return Err(Error::MissingResourceType),
            },
            _ => return Err(Error::ExpectedObject),
        };

        trace!(resource_type = %resource_type, "decoding resource");
        match Self::decode_as(&resource_type, value) {
            Some((type_name, decoded)) => {
                decoded.map_err(|source| Error::Decode { type_name, source })
            }
            None => {
                debug!(resource_type = %resource_type, "unknown resourceType");
                Err(Error::UnknownResourceType(resource_type))
            }
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn id(&self) -> Option<&str> {
        self.as_resource().id()
    }

    /// Borrows the wrapped resource if it is a `T`
    pub fn downcast_ref<T: ResourceVariant>(&self) -> Option<&T> {
        T::from_resource(self)
    }
}

impl FhirType for Resource {
    const TYPE_NAME: &'static str = "Resource";
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Resource::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Observation, Organization, Patient};
    use serde_json::json;

    #[test]
    fn dispatches_on_resource_type() {
        let resource = Resource::from_value(json!({
            "resourceType": "Patient",
            "id": "pat-1",
            "active": true
        }))
        .unwrap();

        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.id(), Some("pat-1"));
        let patient = resource.downcast_ref::<Patient>().unwrap();
        assert_eq!(patient.active, Some(true));
        assert!(resource.downcast_ref::<Observation>().is_none());
        assert!(resource.as_domain_resource().is_some());
    }

    #[test]
    fn bundle_is_not_a_domain_resource() {
        let resource = Resource::from_value(json!({
            "resourceType": "Bundle",
            "type": "collection"
        }))
        .unwrap();

        assert_eq!(resource.resource_type(), "Bundle");
        assert!(resource.as_domain_resource().is_none());
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(
            Resource::from_value(json!(["Patient"])),
            Err(Error::ExpectedObject)
        ));
        assert!(matches!(
            Resource::from_value(json!("Patient")),
            Err(Error::ExpectedObject)
        ));
    }

    #[test]
    fn rejects_missing_or_unknown_resource_type() {
        assert!(matches!(
            Resource::from_value(json!({"id": "x"})),
            Err(Error::MissingResourceType)
        ));
        assert!(matches!(
            Resource::from_value(json!({"resourceType": 42})),
            Err(Error::MissingResourceType)
        ));
        match Resource::from_value(json!({"resourceType": "Spaceship"})) {
            Err(Error::UnknownResourceType(name)) => assert_eq!(name, "Spaceship"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn reports_the_type_that_failed() {
        let err = Resource::from_value(json!({
            "resourceType": "Observation",
            "code": {"text": "weight"}
        }))
        .unwrap_err();

        match err {
            Error::Decode { type_name, source } => {
                assert_eq!(type_name, "Observation");
                assert!(source.to_string().contains("status"), "{source}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn contained_resources_round_trip() {
        let input = json!({
            "resourceType": "Patient",
            "id": "pat-1",
            "contained": [
                {"resourceType": "Organization", "id": "org-1", "name": "Acme Clinic"}
            ],
            "managingOrganization": {"reference": "#org-1"}
        });

        let resource = Resource::from_value(input.clone()).unwrap();
        let patient = resource.downcast_ref::<Patient>().unwrap();
        let contained = patient.contained.as_deref().unwrap();
        assert_eq!(contained[0].resource_type(), "Organization");
        assert_eq!(
            contained[0].downcast_ref::<Organization>().unwrap().name.as_deref(),
            Some("Acme Clinic")
        );

        assert_eq!(resource.to_value().unwrap(), input);
    }

    #[test]
    fn from_wraps_concrete_resources() {
        let organization = Organization {
            id: Some("org-1".into()),
            ..Default::default()
        };
        let resource = Resource::from(organization);

        assert_eq!(
            resource.to_value().unwrap(),
            json!({"resourceType": "Organization", "id": "org-1"})
        );
    }
}
