//! AddonForge - Entry Point
//!
//! Command-line front end over the generation pipeline: generate a full
//! add-on from a prompt, or inspect the intermediate analysis and plan.

use addonforge::core::config::{set_config, PipelineConfig};
use addonforge::core::error::Result;
use addonforge::intent::interpret;
use addonforge::materialize::write_all;
use addonforge::pipeline::{run, GenerationRequest, PipelineOutcome};
use addonforge::planner::{aggregate, plan_entity};
use addonforge::texture::rasterize;
use addonforge::understanding::{analyze, GenerationMode};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AddonForge command-line interface
#[derive(Parser, Debug)]
#[command(name = "addonforge")]
#[command(about = "Turn a free-text content request into a complete add-on")]
struct Args {
    /// Path to a TOML config file overriding pipeline defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline and write the add-on to a directory
    Generate {
        /// The content request, in plain words
        prompt: String,

        /// Seed for all deterministic choices
        #[arg(long, default_value = "default")]
        seed: String,

        /// Output directory for the materialized add-on
        #[arg(long, default_value = "out")]
        out: PathBuf,

        /// Also rasterize each texture plan to a PNG
        #[arg(long)]
        png: bool,

        /// Generate blocks only; cosmetic ambiguity will not pause generation
        #[arg(long)]
        block_only: bool,
    },

    /// Print the prompt analysis as JSON
    Analyze { prompt: String },

    /// Print the aggregated execution plan for a prompt as JSON
    Plan { prompt: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "addonforge=info".to_string()),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let config = PipelineConfig::load_file(path)?;
        if set_config(config).is_err() {
            tracing::warn!("config was already initialized, override file ignored");
        }
    }

    match args.command {
        Command::Generate {
            prompt,
            seed,
            out,
            png,
            block_only,
        } => generate(&prompt, &seed, &out, png, block_only),
        Command::Analyze { prompt } => {
            let analysis = analyze(&prompt);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(())
        }
        Command::Plan { prompt } => {
            let spec = interpret(&prompt, GenerationMode::Full);
            let expanded = addonforge::expansion::expand(&spec);
            let plans: Vec<_> = expanded
                .items
                .iter()
                .map(|i| {
                    plan_entity(
                        &i.id,
                        &i.display_name,
                        &i.description,
                        addonforge::core::types::EntityCategory::Item,
                    )
                })
                .chain(expanded.blocks.iter().map(|b| {
                    plan_entity(
                        &b.id,
                        &b.display_name,
                        &b.description,
                        addonforge::core::types::EntityCategory::Block,
                    )
                }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&aggregate(plans))?);
            Ok(())
        }
    }
}

fn generate(prompt: &str, seed: &str, out: &PathBuf, png: bool, block_only: bool) -> Result<()> {
    let mode = if block_only {
        GenerationMode::BlockOnly
    } else {
        GenerationMode::Full
    };
    let request = GenerationRequest {
        prompt: prompt.to_string(),
        seed: seed.to_string(),
        mode,
    };

    match run(&request)? {
        PipelineOutcome::Clarify(clarification) => {
            println!("{}", clarification.message);
            if !clarification.examples.is_empty() {
                println!("\nSome ideas to try:");
                for example in &clarification.examples {
                    println!("  - {example}");
                }
            }
        }
        PipelineOutcome::Rejected(verdict) => {
            let gate = verdict.gate.map(|g| g.as_str()).unwrap_or("unknown");
            let reason = verdict.reason.unwrap_or_default();
            println!("Request refused by the {gate} gate: {reason}");
        }
        PipelineOutcome::Complete(result) => {
            write_all(&result.files, out)?;
            if png {
                write_pngs(&result.textures, seed, out)?;
            }
            println!(
                "Generated {} files into {} ({} credits, tier {})",
                result.files.len(),
                out.display(),
                result.summary.total_credits,
                result.summary.budget_tier
            );
            for line in &result.summary.scope_summary {
                println!("  {line}");
            }
        }
    }
    Ok(())
}

/// Rasterize each texture plan and save it next to its plan file.
fn write_pngs(
    textures: &[addonforge::texture::FinalTexturePlan],
    seed: &str,
    out: &PathBuf,
) -> Result<()> {
    for plan in textures {
        let buffer = rasterize(plan, seed);
        let image = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.pixels)
            .expect("pixel buffer dimensions match its contents");
        let path = out
            .join("textures")
            .join(plan.category.to_string())
            .join(format!("{}.png", plan.entity_id));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        image
            .save(&path)
            .map_err(|e| addonforge::core::error::ForgeError::ImageError(e.to_string()))?;
    }
    Ok(())
}
