use anyhow::{anyhow, Result};
use colored::*;
use content::{
    get_collection_in_default_locale, get_collection_in_locale,
    get_collection_in_locale_with_fallbacks, get_collection_in_non_default_locales,
    ContentEntry, MemorySource,
};
use std::path::PathBuf;
use tracing::debug;

/// Which part of a collection to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    DefaultLocale,
    Locale(String),
    LocaleWithFallbacks(String),
    NonDefaultLocales,
}

impl Selection {
    /// Build a selection from the command line flags
    pub fn from_flags(locale: Option<String>, fallbacks: bool, non_default: bool) -> Result<Self> {
        match (locale, fallbacks, non_default) {
            (None, false, true) => Ok(Self::NonDefaultLocales),
            (Some(_), _, true) => Err(anyhow!("--non-default cannot be combined with --locale")),
            (Some(locale), true, false) => Ok(Self::LocaleWithFallbacks(locale)),
            (Some(locale), false, false) => Ok(Self::Locale(locale)),
            (None, true, _) => Err(anyhow!("--fallbacks requires --locale")),
            (None, false, false) => Ok(Self::DefaultLocale),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::DefaultLocale => format!("default locale ({})", i18n::default_locale()),
            Self::Locale(locale) => format!("locale {}", locale),
            Self::LocaleWithFallbacks(locale) => format!("locale {} with fallbacks", locale),
            Self::NonDefaultLocales => "non-default locales".to_string(),
        }
    }
}

/// List the entries of a collection from a manifest
pub async fn execute(
    manifest: PathBuf,
    name: String,
    selection: Selection,
    format: String,
) -> Result<()> {
    let source = MemorySource::from_manifest_file(&manifest)?;
    debug!("Selecting {:?} from collection '{}'", selection, name);

    let entries = match &selection {
        Selection::DefaultLocale => get_collection_in_default_locale(&source, &name).await?,
        Selection::Locale(locale) => get_collection_in_locale(&source, &name, locale).await?,
        Selection::LocaleWithFallbacks(locale) => {
            get_collection_in_locale_with_fallbacks(&source, &name, locale).await?
        }
        Selection::NonDefaultLocales => {
            get_collection_in_non_default_locales(&source, &name).await?
        }
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => {
            print_entries_text(&name, &selection, &entries);
        }
    }

    Ok(())
}

/// Print entries in a formatted text output
fn print_entries_text(name: &str, selection: &Selection, entries: &[ContentEntry]) {
    println!("{}", format!("=== Collection: {} ===", name).bold());
    println!("{}: {}", "Selection".bold(), selection.describe().cyan());
    println!();

    if entries.is_empty() {
        println!("{}", "No entries".yellow());
        return;
    }

    for entry in entries {
        println!("  {} {} {}", entry.id().cyan(), "->".dimmed(), entry.slug().green());
    }

    println!();
    println!("{}", format!("Total entries: {}", entries.len()).green());
}
