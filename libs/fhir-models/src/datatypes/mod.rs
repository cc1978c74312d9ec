//! FHIR STU3 complex datatypes
//!
//! General-purpose structures reused across resources: codings, identifiers,
//! quantities, timing, contact details and the `Extension` and
//! `ElementDefinition` elements.

mod attachment;
mod coding;
mod contact;
mod dosage;
mod element_definition;
mod extension;
mod identifier;
mod metadata;
mod narrative;
mod quantity;
mod timing;

pub use attachment::*;
pub use coding::*;
pub use contact::*;
pub use dosage::*;
pub use element_definition::*;
pub use extension::*;
pub use identifier::*;
pub use metadata::*;
pub use narrative::*;
pub use quantity::*;
pub use timing::*;
