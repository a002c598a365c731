use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

mod commands;
mod utils;

use commands::collection::Selection;
use commands::slug::SlugKind;
use commands::{collection, escape, examples, locales, slug};
use utils::config_paths;

/// Docsite CLI - Command line interface for documentation content routing
#[derive(Parser)]
#[command(name = "docsite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Locale configuration file (defaults to config/config.i18n.yaml when present)
    #[arg(short, long, global = true, env = "DOCSITE_I18N_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of a collection in a manifest
    Collection {
        /// Manifest file (.yaml, .yml or .json)
        manifest: PathBuf,

        /// Collection name
        name: String,

        /// Only entries in this locale (default locale when omitted)
        #[arg(short, long)]
        locale: Option<String>,

        /// Fill in default-locale entries for documents missing in --locale
        #[arg(long)]
        fallbacks: bool,

        /// Entries in every non-default locale
        #[arg(long)]
        non_default: bool,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Rewrite a slug or content id into its route
    Slug {
        #[arg(value_enum)]
        kind: SlugKind,

        /// Slug or id to rewrite
        value: String,
    },

    /// Escape the content of <code> elements in an HTML fragment
    Escape {
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Escape the whole input as literal text instead
        #[arg(long)]
        literal: bool,
    },

    /// Show the title and separated examples of a reference entry
    Examples {
        /// Manifest file (.yaml, .yml or .json)
        manifest: PathBuf,

        /// Collection name
        name: String,

        /// Entry id
        id: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the active locale configuration
    Locales {
        /// Output format (json, yaml, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    config_paths::load_dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = config_paths::resolve_locale_config(cli.config)? {
        i18n::install_from_file(&path)
            .with_context(|| format!("Failed to load locale configuration {}", path.display()))?;
    }

    // Execute the command
    match cli.command {
        Commands::Collection {
            manifest,
            name,
            locale,
            fallbacks,
            non_default,
            format,
        } => {
            let selection = Selection::from_flags(locale, fallbacks, non_default)?;
            collection::execute(manifest, name, selection, format).await?;
        }
        Commands::Slug { kind, value } => {
            slug::execute(kind, value)?;
        }
        Commands::Escape { input, literal } => {
            escape::execute(input, literal)?;
        }
        Commands::Examples {
            manifest,
            name,
            id,
            format,
        } => {
            examples::execute(manifest, name, id, format)?;
        }
        Commands::Locales { format } => {
            locales::execute(format)?;
        }
    }

    Ok(())
}
