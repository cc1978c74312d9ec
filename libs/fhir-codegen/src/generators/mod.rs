//! Code generators over the type registry
//!
//! Rust is the only target today. The registry knows nothing about it, so
//! another target is one more [`Generator`] implementation.

pub mod rust;

use crate::ir::TypeRegistry;
use anyhow::Result;

/// Turns a registry into source text
pub trait Generator {
    type Output;

    /// Short target name, used in logs
    fn name(&self) -> &'static str;

    fn generate(&self, registry: &TypeRegistry) -> Result<Self::Output>;
}

/// Options shared by every target
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Emit `///` comments taken from the element definitions
    pub generate_docs: bool,
    /// Derive `Serialize`/`Deserialize` and emit the serde attributes
    pub generate_serde: bool,
    /// Path the generated `use` statements start from (`crate` when unset)
    pub module_prefix: Option<String>,
}

impl GeneratorConfig {
    pub fn crate_root(&self) -> &str {
        self.module_prefix.as_deref().unwrap_or("crate")
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
            generate_serde: true,
            module_prefix: None,
        }
    }
}
