//! storage-folders CLI — `folders` command.
//!
//! Resolves storage folder names against a JSON settings file, writing any
//! missing defaults into it, and prints the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use storage_folders::{FolderCategory, FolderRegistry, SettingsFile};

// ── Directory helpers ─────────────────────────────────────────────────────────

fn default_settings_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set; pass --config")?;
    Ok(PathBuf::from(home)
        .join(".storage-folders")
        .join("settings.json"))
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Resolve and inspect persisted storage folder names.
#[derive(Parser, Debug)]
#[command(name = "folders", about = "storage-folders CLI", version)]
struct Cli {
    /// Settings file (default: ~/.storage-folders/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve every folder name, persisting missing defaults
    Resolve {
        /// Print a JSON object of key → folder name
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved folder name for one category
    Get {
        /// Category key or name (e.g. `nym`, `PaymentInbox`)
        category: FolderCategory,
    },

    /// Print the compiled-in keys and default names without touching settings
    Defaults,
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn resolved_registry(config: Option<PathBuf>) -> Result<FolderRegistry> {
    let path = match config {
        Some(path) => path,
        None => default_settings_path()?,
    };
    let mut settings = SettingsFile::open(&path)
        .with_context(|| format!("failed to open settings file {}", path.display()))?;

    let mut registry = FolderRegistry::new();
    registry
        .resolve_all(&mut settings)
        .with_context(|| format!("failed to resolve folder names from {}", path.display()))?;
    Ok(registry)
}

fn cmd_resolve(config: Option<PathBuf>, json: bool) -> Result<()> {
    let registry = resolved_registry(config)?;

    if json {
        let map: serde_json::Map<String, serde_json::Value> = registry
            .iter()
            .map(|(category, name)| (category.key().to_string(), name.as_str().into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (category, name) in registry.iter() {
        println!("{:<16} {:<16} {}", category.name(), category.key(), name);
    }
    Ok(())
}

fn cmd_get(config: Option<PathBuf>, category: FolderCategory) -> Result<()> {
    let registry = resolved_registry(config)?;
    println!("{}", registry.get(category)?);
    Ok(())
}

fn cmd_defaults() -> Result<()> {
    for category in FolderCategory::ALL {
        println!(
            "{:<16} {:<16} {}",
            category.name(),
            category.key(),
            category.default_name()
        );
    }
    Ok(())
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Resolve { json } => cmd_resolve(cli.config, json),
        Commands::Get { category } => cmd_get(cli.config, category),
        Commands::Defaults => cmd_defaults(),
    };

    if let Err(e) = result {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
