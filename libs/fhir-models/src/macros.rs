//! Internal macros shared by the generated model modules
//!
//! Every concrete type carries its inherited FHIR fields inline. These
//! macros wire those fields up to the capability traits in [`crate::base`],
//! build the closed enums used for `[x]` choice elements and check the lower
//! bound of `1..*` lists.

/// Implements [`FhirType`](crate::base::FhirType) and
/// [`Element`](crate::base::Element) for plain datatypes.
macro_rules! impl_element {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::base::FhirType for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
            }

            impl $crate::base::Element for $ty {
                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn extension(&self) -> &[$crate::datatypes::Extension] {
                    self.extension.as_deref().unwrap_or(&[])
                }
            }
        )+
    };
}

/// Implements the element traits plus
/// [`BackboneElement`](crate::base::BackboneElement) for nested structures.
macro_rules! impl_backbone_element {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl_element!($ty);

            impl $crate::base::BackboneElement for $ty {
                fn modifier_extension(&self) -> &[$crate::datatypes::Extension] {
                    self.modifier_extension.as_deref().unwrap_or(&[])
                }
            }
        )+
    };
}

/// Implements [`FhirResource`](crate::base::FhirResource) for resources
/// deriving directly from `Resource` (Bundle, Parameters).
macro_rules! impl_resource {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::base::FhirType for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
            }

            impl $crate::base::FhirResource for $ty {
                fn resource_type(&self) -> &'static str {
                    self.resource_type.as_str()
                }

                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn meta(&self) -> Option<&$crate::datatypes::Meta> {
                    self.meta.as_ref()
                }

                fn implicit_rules(&self) -> Option<&str> {
                    self.implicit_rules.as_deref()
                }

                fn language(&self) -> Option<&str> {
                    self.language.as_deref()
                }
            }
        )+
    };
}

/// Implements the resource traits plus
/// [`DomainResource`](crate::base::DomainResource).
macro_rules! impl_domain_resource {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl_resource!($ty);

            impl $crate::base::DomainResource for $ty {
                fn text(&self) -> Option<&$crate::datatypes::Narrative> {
                    self.text.as_ref()
                }

                fn contained(&self) -> &[$crate::resources::Resource] {
                    self.contained.as_deref().unwrap_or(&[])
                }

                fn extension(&self) -> &[$crate::datatypes::Extension] {
                    self.extension.as_deref().unwrap_or(&[])
                }

                fn modifier_extension(&self) -> &[$crate::datatypes::Extension] {
                    self.modifier_extension.as_deref().unwrap_or(&[])
                }
            }
        )+
    };
}

/// Declares a choice enum for a `[x]` element.
///
/// ```ignore
/// choice_type! {
///     /// Estimated or actual date, date-time, or age
///     pub enum ConditionOnset("onset[x]") {
///         DateTime(DateTime) = "onsetDateTime",
///         Age(Age) = "onsetAge",
///     }
/// }
/// ```
///
/// Each variant is bound to the JSON member name it is carried under.
macro_rules! choice_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $( $variant:ident($ty:ty) = $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($ty), )+
        }

        impl $crate::choice::ChoiceType for $name {
            const NAME: &'static str = $label;
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn key(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $key, )+
                }
            }

            fn serialize_entry<M>(&self, map: &mut M) -> ::std::result::Result<(), M::Error>
            where
                M: ::serde::ser::SerializeMap,
            {
                match self {
                    $( $name::$variant(value) => map.serialize_entry($key, value), )+
                }
            }

            fn deserialize_entry<'de, A>(key: &str, map: &mut A) -> ::std::result::Result<Self, A::Error>
            where
                A: ::serde::de::MapAccess<'de>,
            {
                match key {
                    $( $key => map.next_value().map($name::$variant), )+
                    other => Err(<A::Error as ::serde::de::Error>::unknown_field(
                        other,
                        <Self as $crate::choice::ChoiceType>::KEYS,
                    )),
                }
            }
        }
    };
}

/// Declares a private `non_empty` module with one deserializer per `1..*`
/// field, each rejecting `[]` with an error that names the member.
///
/// ```ignore
/// non_empty_lists! {
///     content = "content",
/// }
/// ```
macro_rules! non_empty_lists {
    ($( $field:ident = $key:literal ),+ $(,)?) => {
        mod non_empty {
            $(
                pub(super) fn $field<'de, D, T>(
                    deserializer: D,
                ) -> ::std::result::Result<::std::vec::Vec<T>, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                    T: ::serde::Deserialize<'de>,
                {
                    $crate::cardinality::non_empty(deserializer, $key)
                }
            )+
        }
    };
}

/// Declares the [`Resource`](crate::resources::Resource) union over every
/// resource type.
///
/// `domain` lists resources deriving from `DomainResource`, `plain` the ones
/// deriving from `Resource` directly.
macro_rules! resource_union {
    (
        domain: [$($domain:ident),* $(,)?],
        plain: [$($plain:ident),* $(,)?] $(,)?
    ) => {
        /// Any STU3 resource
        ///
        /// Serializes as the wrapped resource, `resourceType` included.
        /// Decoding reads `resourceType` first and then decodes the whole
        /// object as that type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $( $domain(Box<$domain>), )*
            $( $plain(Box<$plain>), )*
        }

        impl Resource {
            /// Value of the `resourceType` discriminator
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $( Resource::$domain(_) => <$domain as $crate::base::FhirType>::TYPE_NAME, )*
                    $( Resource::$plain(_) => <$plain as $crate::base::FhirType>::TYPE_NAME, )*
                }
            }

            pub fn as_resource(&self) -> &dyn $crate::base::FhirResource {
                match self {
                    $( Resource::$domain(resource) => &**resource, )*
                    $( Resource::$plain(resource) => &**resource, )*
                }
            }

            /// `None` for resources that derive from `Resource` directly
            /// (Bundle, Parameters)
            pub fn as_domain_resource(&self) -> Option<&dyn $crate::base::DomainResource> {
                match self {
                    $( Resource::$domain(resource) => Some(&**resource), )*
                    $( Resource::$plain(_) => None, )*
                }
            }

            fn decode_as(
                resource_type: &str,
                value: ::serde_json::Value,
            ) -> Option<(&'static str, ::serde_json::Result<Self>)> {
                $(
                    if resource_type == <$domain as $crate::base::FhirType>::TYPE_NAME {
                        let decoded = ::serde_json::from_value::<$domain>(value).map(Resource::from);
                        return Some((<$domain as $crate::base::FhirType>::TYPE_NAME, decoded));
                    }
                )*
                $(
                    if resource_type == <$plain as $crate::base::FhirType>::TYPE_NAME {
                        let decoded = ::serde_json::from_value::<$plain>(value).map(Resource::from);
                        return Some((<$plain as $crate::base::FhirType>::TYPE_NAME, decoded));
                    }
                )*
                None
            }
        }

        impl ::serde::Serialize for Resource {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $( Resource::$domain(resource) => resource.serialize(serializer), )*
                    $( Resource::$plain(resource) => resource.serialize(serializer), )*
                }
            }
        }

        $(
            impl From<$domain> for Resource {
                fn from(resource: $domain) -> Self {
                    Resource::$domain(Box::new(resource))
                }
            }

            impl ResourceVariant for $domain {
                fn from_resource(resource: &Resource) -> Option<&Self> {
                    match resource {
                        Resource::$domain(inner) => Some(&**inner),
                        _ => None,
                    }
                }
            }
        )*

        $(
            impl From<$plain> for Resource {
                fn from(resource: $plain) -> Self {
                    Resource::$plain(Box::new(resource))
                }
            }

            impl ResourceVariant for $plain {
                fn from_resource(resource: &Resource) -> Option<&Self> {
                    match resource {
                        Resource::$plain(inner) => Some(&**inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}
