//! FHIR STU3 data models
//!
//! Strongly-typed Rust structures for the FHIR STU3 (3.0.1) resources and
//! datatypes, with JSON (de)serialization through serde.
//!
//! # Module Organization
//!
//! - `resources`: one module per resource family plus the [`Resource`] union
//! - `datatypes`: complex datatypes shared by resources
//! - `primitives`: temporal primitives with partial precision and `Decimal`
//! - `codes`: code systems shared across families
//! - `base`: capability traits for the `Element`/`Resource` hierarchy
//! - `choice`: support for `[x]` choice elements
//! - `cardinality`: lower-bound checks for `1..*` members
//! - `json`: typed entry points that report which type failed to decode
//!
//! # Conventions
//!
//! - Fields are `snake_case` in Rust and `camelCase` on the wire
//! - Optional members are `Option<T>` and are left out when `None`
//! - `0..*` members are `Option<Vec<T>>`; `1..*` members are non-empty `Vec<T>`
//! - `decimal` keeps its spelling (`1.50` stays `1.50`)
//! - `Default` is derived only where every member is optional
//! - Members named after Rust keywords use raw identifiers (`r#type`)
//! - A `[x]` element is one enum field; exactly one member may be present
//! - Code-bound members are closed enums; unknown codes fail to decode
//! - Unknown JSON members are ignored
//!
//! # Example
//!
//! ```rust
//! use ferrum_stu3::{AdministrativeGender, Patient, Resource};
//! use serde_json::json;
//!
//! let resource = Resource::from_value(json!({
//!     "resourceType": "Patient",
//!     "id": "example",
//!     "gender": "female",
//!     "birthDate": "1974-12"
//! }))
//! .unwrap();
//!
//! let patient = resource.downcast_ref::<Patient>().unwrap();
//! assert_eq!(patient.gender, Some(AdministrativeGender::Female));
//! assert_eq!(patient.birth_date.as_ref().unwrap().month(), Some(12));
//! ```

#[macro_use]
mod macros;

pub mod base;
pub mod cardinality;
pub mod choice;
pub mod codes;
pub mod datatypes;
pub mod error;
pub mod json;
pub mod primitives;
pub mod resources;

// Re-export commonly used types
pub use base::{BackboneElement, DomainResource, Element, FhirResource, FhirType, ResourceTag};
pub use choice::ChoiceType;
pub use codes::*;
pub use datatypes::*;
pub use error::{Error, Result};
pub use primitives::*;
pub use resources::*;
