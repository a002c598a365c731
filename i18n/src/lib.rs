//! # i18n
//!
//! Locale configuration for the documentation site and the locale prefix
//! primitives shared by the content crate.
//!
//! Content identifiers always begin with a locale segment
//! (`es/tutorials/intro.mdx`). This crate knows which locales are published,
//! which one is the default, and how to detect or strip the locale segment.
//!
//! The active configuration is process-wide. It starts out as
//! [`LocaleConfig::default`] and can be replaced once at startup with
//! [`install`].
//!
//! ```rust
//! assert_eq!(i18n::remove_locale_prefix("ko/reference/p5/circle.mdx"), "reference/p5/circle.mdx");
//! assert!(i18n::starts_with_supported_locale("ko/reference/p5/circle.mdx"));
//! ```

pub mod config;
pub mod error;

pub use config::{LocaleConfig, LocaleConfigurationDefinition, DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use error::{I18nError, Result};

use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

static LOCALE_CONFIG: Lazy<RwLock<Arc<LocaleConfig>>> =
    Lazy::new(|| RwLock::new(Arc::new(LocaleConfig::default())));

/// Replace the process-wide locale configuration
pub fn install(config: LocaleConfig) -> Result<()> {
    config.validate()?;
    info!(
        "Installing locale configuration: default={}, supported={:?}",
        config.default_locale, config.supported_locales
    );
    let mut current = LOCALE_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *current = Arc::new(config);
    Ok(())
}

/// Load a locale configuration file and install it
pub fn install_from_file(path: &Path) -> Result<Arc<LocaleConfig>> {
    let definition = LocaleConfigurationDefinition::from_file(path)?;
    install(definition.values)?;
    Ok(current())
}

/// The active locale configuration
pub fn current() -> Arc<LocaleConfig> {
    LOCALE_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The configured default locale code
pub fn default_locale() -> String {
    current().default_locale.clone()
}

/// Strip a leading supported `<locale>/` segment using the active configuration
pub fn remove_locale_prefix(path: &str) -> &str {
    current().remove_locale_prefix(path)
}

/// Check for a leading non-default `<locale>/` segment using the active configuration
pub fn starts_with_supported_locale(path: &str) -> bool {
    current().starts_with_supported_locale(path)
}
