//! FHIR primitive types
//!
//! Most primitives map straight onto Rust types:
//!
//! | FHIR | Rust |
//! |------|------|
//! | `boolean` | `bool` |
//! | `integer` | `i32` |
//! | `unsignedInt`, `positiveInt` | `u32` |
//! | `string`, `code`, `id`, `uri`, `oid`, `markdown`, `base64Binary`, `xhtml` | `String` |
//!
//! `decimal` and the temporal primitives keep their lexical precision and
//! are modelled by the types in this module.

mod decimal;
mod temporal;

pub use decimal::Decimal;
pub use temporal::{Date, DatePrecision, DateTime, Instant, Time, ZoneOffset};
