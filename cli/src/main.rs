//! CLI entrypoint for quillform
//!
//! Wires every layer together with dependency injection: a JSON-seeded
//! in-memory backend behind the gateway ports, a tracing notifier, and
//! an interactive (or `--yes`) confirmation adapter.

mod commands;
mod term;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use quillform_infrastructure::{CatalogSeed, ConfigLoader, FileConfig, InMemoryBackend};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quillform", about = "Questionnaire catalog and assessment demo", version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip config files, use built-in defaults
    #[arg(long, global = true)]
    no_config: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Override the record id from config
    #[arg(long, global = true)]
    record: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the catalog questions of the record's template
    Questions,
    /// Add a question to the catalog
    Add {
        /// Question text
        #[arg(long)]
        text: String,
        /// Question type label, e.g. "Checkboxes"
        #[arg(long = "type")]
        question_type: String,
        /// Mark the question as required
        #[arg(long)]
        required: bool,
        /// Option value; repeat for several options
        #[arg(long = "option")]
        options: Vec<String>,
        /// Option value to pre-select as the default
        #[arg(long)]
        default: Option<String>,
    },
    /// Delete a question (asks for confirmation)
    Delete {
        /// Question id
        #[arg(long)]
        id: String,
    },
    /// Move a question to a new position (0-based indices)
    Reorder {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    /// List answering instances for the record
    Instances,
    /// Create a new answering instance
    NewInstance,
    /// Show the rendered form of an instance
    Show {
        /// Instance id
        #[arg(long)]
        instance: String,
    },
    /// Answer questions of an instance and submit
    Fill {
        /// Instance id
        #[arg(long)]
        instance: String,
        /// Scalar answer, QUESTION=VALUE; repeatable
        #[arg(long = "set")]
        set: Vec<String>,
        /// Checkbox toggle, QUESTION=OPTION (append :off to uncheck); repeatable
        #[arg(long = "toggle")]
        toggle: Vec<String>,
        /// Multi-select replacement, QUESTION=V1,V2; repeatable
        #[arg(long = "select")]
        select: Vec<String>,
        /// Submit after applying the answers
        #[arg(long)]
        submit: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let record_id = cli
        .record
        .clone()
        .unwrap_or_else(|| config.record_id.clone());
    if record_id.is_empty() {
        bail!("No record configured. Set record_id in quillform.toml or pass --record.");
    }

    // === Dependency Injection ===
    let backend = Arc::new(load_backend(&config).await?);
    let context = commands::AppContext::new(backend.clone(), record_id, &config, cli.yes);

    let mutated = commands::run(&cli.command, context).await?;

    if mutated && config.persist_changes {
        let seed = backend.snapshot().await;
        seed.save(&config.catalog)
            .with_context(|| format!("writing {}", config.catalog.display()))?;
        info!(path = %config.catalog.display(), "catalog saved");
    }

    Ok(())
}

async fn load_backend(config: &FileConfig) -> Result<InMemoryBackend> {
    if config.catalog.exists() {
        let seed = CatalogSeed::load(&config.catalog)
            .with_context(|| format!("loading {}", config.catalog.display()))?;
        Ok(InMemoryBackend::from_seed(seed))
    } else {
        info!(path = %config.catalog.display(), "no catalog file, starting empty");
        Ok(InMemoryBackend::new())
    }
}
