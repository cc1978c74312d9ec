//! FHIR STU3 Code Generator
//!
//! Generates the strongly-typed `ferrum-stu3` models from the FHIR STU3
//! definition bundles (`profiles-types.json`, `profiles-resources.json`,
//! `valuesets.json`).
//!
//! ## Architecture
//!
//! The generator uses a three-stage pipeline:
//! 1. **Parser**: Extracts type information from StructureDefinitions and
//!    the code lists behind required bindings
//! 2. **IR (Intermediate Representation)**: Language-agnostic type model
//! 3. **Generators**: Language-specific code generation from IR
//!
//! This architecture allows adding new target languages without re-parsing the definitions.

pub mod generators;
pub mod ir;
pub mod parser;
pub mod utils;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use generators::rust::RustGenerator;
use generators::GeneratorConfig;
use ir::TypeRegistry;
use serde_json::Value;
use tracing::info;

/// Main entry point for code generation
pub struct CodeGenerator {
    registry: TypeRegistry,
}

impl CodeGenerator {
    /// Create a new code generator from already-loaded definitions
    pub fn from_resources(resources: &[Value]) -> Result<Self> {
        let registry = parser::parse_resources(resources)?;
        Ok(Self { registry })
    }

    /// Create a new code generator from definition files or directories.
    ///
    /// All inputs are read before parsing, so bindings may resolve against
    /// code systems from any of them.
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut resources = Vec::new();
        for path in paths {
            resources.extend(
                parser::load_resources(path)
                    .with_context(|| format!("loading definitions from {}", path.display()))?,
            );
        }
        Self::from_resources(&resources)
    }

    /// Get the type registry
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Generate code for a specific language
    pub fn generate<G: generators::Generator>(&self, generator: G) -> Result<G::Output> {
        info!(target_language = generator.name(), types = self.registry.len(), "generating");
        generator.generate(&self.registry)
    }
}

/// Convenience helper to run the Rust code generator over definition files.
///
/// Returns the number of generated modules.
pub fn generate_rust(
    inputs: &[PathBuf],
    output_dir: &Path,
    config: GeneratorConfig,
) -> Result<usize> {
    let codegen = CodeGenerator::from_paths(inputs).context("building type registry")?;

    let generator = RustGenerator::new(config);
    let output = codegen
        .generate(generator)
        .context("running Rust generator")?;

    utils::write_modules(output_dir, &output.modules)?;

    Ok(output.modules.len())
}
