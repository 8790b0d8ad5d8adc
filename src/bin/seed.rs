//! One-shot panel seeding
//!
//! Runs the synthetic generator once and loads the record store.
//! Normal runs are a no-op when records already exist; `--reset` drops
//! everything and regenerates.

use clap::Parser;
use std::path::PathBuf;

use worldboard::core::config::GeneratorConfig;
use worldboard::core::error::Result;
use worldboard::generator::{self, SeedOutcome};
use worldboard::store::{MemoryStore, RecordStore};

/// Generate the synthetic world-indicator panel
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = "Generate the synthetic world panel and load the record store")]
struct Args {
    /// Drop all existing records and re-seed from scratch
    #[arg(long)]
    reset: bool,

    /// Random seed override for deterministic generation
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file overriding seed and year range
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the generated panel as JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("worldboard=info")
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    // Fail fast before touching the store.
    config.validate()?;

    let mut store = MemoryStore::new();
    match generator::seed(&mut store, &config, args.reset)? {
        SeedOutcome::Seeded {
            records,
            countries,
            years,
        } => {
            println!("Seed completado: {records} registros ({countries} países × {years} años).");
        }
        SeedOutcome::AlreadySeeded { records } => {
            println!("La base ya tiene datos ({records} registros). Usá --reset para recrear.");
        }
    }

    if let Some(out) = &args.out {
        let panel = store.all()?;
        std::fs::write(out, serde_json::to_string_pretty(&panel)?)?;
        println!("Panel escrito en {}", out.display());
    }

    Ok(())
}
