//! Command-line front end for the STU3 model generator

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use ferrum_stu3::Resource;
use ferrum_stu3_codegen::generators::GeneratorConfig;
use ferrum_stu3_codegen::{generate_rust, CodeGenerator};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fhir-stu3-codegen")]
#[command(about = "Generate and check FHIR STU3 Rust models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model modules from StructureDefinitions
    Generate {
        /// Definition bundles, single resources or directories
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Directory receiving the generated `src/` tree
        #[arg(short, long)]
        output: PathBuf,

        /// Leave out documentation comments
        #[arg(long)]
        no_docs: bool,

        /// Path generated `use` statements start from
        #[arg(long)]
        module_prefix: Option<String>,
    },

    /// Print the intermediate representation as JSON
    Inspect {
        /// Definition bundles, single resources or directories
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Only print this type and its dependencies
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,
    },

    /// Decode a resource with the generated models
    Check {
        /// Resource JSON file
        #[arg(short, long)]
        resource: PathBuf,
    },
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    match cli.command {
        Commands::Generate {
            input,
            output,
            no_docs,
            module_prefix,
        } => {
            let config = GeneratorConfig {
                generate_docs: !no_docs,
                module_prefix,
                ..GeneratorConfig::default()
            };
            let count = generate_rust(&input, &output, config)?;
            info!(modules = count, output = %output.display(), "generation finished");
        }

        Commands::Inspect { input, type_name } => {
            let codegen = CodeGenerator::from_paths(&input)?;
            let registry = codegen.registry();

            let value = match type_name {
                Some(name) => {
                    let type_def = registry
                        .get_type_by_name(&name)
                        .ok_or_else(|| anyhow!("type {} not found", name))?;
                    json!({
                        "type": type_def,
                        "dependencies": registry.get_dependencies(type_def),
                    })
                }
                None => {
                    let mut types: Vec<_> = registry.types().map(|(_, t)| t).collect();
                    types.sort_by(|a, b| a.name.cmp(&b.name));
                    json!({
                        "types": types,
                        "aliases": registry.aliases().collect::<Vec<_>>(),
                    })
                }
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }

        Commands::Check { resource } => {
            let text = fs::read_to_string(&resource)
                .with_context(|| format!("reading {}", resource.display()))?;
            let decoded = Resource::from_json(&text)
                .with_context(|| format!("decoding {}", resource.display()))?;
            println!(
                "ok: {}/{}",
                decoded.resource_type(),
                decoded.id().unwrap_or("<no id>")
            );
        }
    }

    Ok(())
}
