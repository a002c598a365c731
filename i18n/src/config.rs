//! Locale configuration and the locale prefix primitives

use crate::error::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Locale used when no configuration has been installed
pub const DEFAULT_LOCALE: &str = "en";

/// Locales supported out of the box, default locale included
pub const SUPPORTED_LOCALES: &[&str] = &["en", "es", "hi", "ko", "zh-Hans"];

/// The set of locales the site is published in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale whose content is shown when no localized version exists
    pub default_locale: String,
    /// Every published locale, including the default one
    pub supported_locales: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            supported_locales: SUPPORTED_LOCALES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl LocaleConfig {
    /// Create a configuration. The default locale is added to the
    /// supported set when missing.
    pub fn new<I, S>(default_locale: impl Into<String>, supported_locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_locale = default_locale.into();
        let mut supported_locales: Vec<String> =
            supported_locales.into_iter().map(Into::into).collect();
        if !supported_locales.contains(&default_locale) {
            supported_locales.insert(0, default_locale.clone());
        }
        Self {
            default_locale,
            supported_locales,
        }
    }

    /// Validate the locale codes
    pub fn validate(&self) -> Result<()> {
        if self.default_locale.is_empty() {
            return Err(I18nError::Validation(
                "Default locale cannot be empty".to_string(),
            ));
        }

        for locale in &self.supported_locales {
            if locale.is_empty() {
                return Err(I18nError::Validation(
                    "Supported locale codes cannot be empty".to_string(),
                ));
            }
            if locale.contains('/') {
                return Err(I18nError::Validation(format!(
                    "Locale code '{}' cannot contain '/'",
                    locale
                )));
            }
        }

        if !self.is_supported(&self.default_locale) {
            return Err(I18nError::Validation(format!(
                "Default locale '{}' is not listed in supported_locales",
                self.default_locale
            )));
        }

        Ok(())
    }

    /// Check if a locale code is supported
    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }

    /// Supported locales other than the default one, in configured order
    pub fn non_default_locales(&self) -> impl Iterator<Item = &str> {
        self.supported_locales
            .iter()
            .map(String::as_str)
            .filter(move |l| *l != self.default_locale)
    }

    /// Strip a leading `<locale>/` segment for any supported locale.
    ///
    /// Locales are tried in configured order. Paths without a supported
    /// locale prefix are returned unchanged.
    ///
    /// ```rust
    /// use i18n::LocaleConfig;
    ///
    /// let locales = LocaleConfig::default();
    /// assert_eq!(locales.remove_locale_prefix("es/reference/p5/circle.mdx"), "reference/p5/circle.mdx");
    /// assert_eq!(locales.remove_locale_prefix("fr/reference"), "fr/reference");
    /// ```
    pub fn remove_locale_prefix<'a>(&self, path: &'a str) -> &'a str {
        self.supported_locales
            .iter()
            .find_map(|locale| strip_locale_segment(path, locale))
            .unwrap_or(path)
    }

    /// Check whether a path starts with a supported, non-default locale
    /// segment (`es/...` when the default locale is `en`).
    pub fn starts_with_supported_locale(&self, path: &str) -> bool {
        self.non_default_locales()
            .any(|locale| strip_locale_segment(path, locale).is_some())
    }
}

fn strip_locale_segment<'a>(path: &'a str, locale: &str) -> Option<&'a str> {
    path.strip_prefix(locale)?.strip_prefix('/')
}

/// On-disk shape of the locale configuration, following the shared
/// configuration definition layout (`id`, `name`, `provider`, ... `values`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfigurationDefinition {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub provider: String,
    pub version: String,
    pub values: LocaleConfig,
}

impl LocaleConfigurationDefinition {
    /// Parse a definition from YAML and validate its locale values
    pub fn from_yaml(content: &str) -> Result<Self> {
        let definition: Self = serde_yaml::from_str(content)?;
        definition.values.validate()?;
        debug!(
            "Parsed locale configuration '{}' version {}",
            definition.id, definition.version
        );
        Ok(definition)
    }

    /// Load a definition from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading locale configuration from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize the definition back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
