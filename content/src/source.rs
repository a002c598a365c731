//! Collection sources.
//!
//! Collections are retrieved asynchronously in the site build, so the
//! lookup is behind an async trait. [`MemorySource`] keeps collections in
//! memory and can be filled from a YAML or JSON manifest.

use crate::entry::ContentEntry;
use crate::error::ContentError;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info, warn};

/// Predicate used to select entries from a collection
pub type EntryFilter<'a> = &'a (dyn Fn(&ContentEntry) -> bool + Send + Sync);

/// Anything that can hand out the entries of a named collection
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Entries of the named collection accepted by `filter`, in collection order
    async fn get_collection(&self, name: &str, filter: EntryFilter<'_>)
        -> Result<Vec<ContentEntry>>;

    /// Names of the collections this source knows about
    fn collection_names(&self) -> Vec<String>;
}

/// Manifest file listing collections and their entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub collections: BTreeMap<String, Vec<ContentEntry>>,
}

/// Format of a manifest document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ContentError::ValidationError(format!(
                "Unsupported manifest file {:?}: expected .yaml, .yml or .json",
                path
            ))),
        }
    }
}

impl Manifest {
    /// Parse a manifest; every entry id is validated while parsing
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self> {
        let manifest: Manifest = match format {
            ManifestFormat::Yaml => serde_yaml::from_str(content)?,
            ManifestFormat::Json => serde_json::from_str(content)?,
        };

        for (name, entries) in &manifest.collections {
            let mut seen = HashSet::new();
            for entry in entries {
                if !seen.insert(entry.id()) {
                    warn!("Duplicate id '{}' in collection '{}'", entry.id(), name);
                }
            }
        }

        Ok(manifest)
    }

    /// Load a manifest file, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading content manifest from: {:?}", path);
        let format = ManifestFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&content, format)?;
        info!(
            "Loaded {} collections from {:?}",
            manifest.collections.len(),
            path
        );
        Ok(manifest)
    }
}

/// In-memory collection source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: BTreeMap<String, Vec<ContentEntry>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a collection
    pub fn with_collection(mut self, name: &str, entries: Vec<ContentEntry>) -> Self {
        self.insert(name, entries);
        self
    }

    /// Add or replace a collection
    pub fn insert(&mut self, name: &str, entries: Vec<ContentEntry>) {
        debug!("Registering collection '{}' with {} entries", name, entries.len());
        self.collections.insert(name.to_string(), entries);
    }

    /// Load every collection of a manifest file
    pub fn from_manifest_file(path: &Path) -> Result<Self> {
        Ok(Manifest::load(path)?.into())
    }

    /// All entries of a collection, unfiltered
    pub fn entries(&self, name: &str) -> Option<&[ContentEntry]> {
        self.collections.get(name).map(Vec::as_slice)
    }
}

impl From<Manifest> for MemorySource {
    fn from(manifest: Manifest) -> Self {
        Self {
            collections: manifest.collections,
        }
    }
}

#[async_trait]
impl CollectionSource for MemorySource {
    async fn get_collection(
        &self,
        name: &str,
        filter: EntryFilter<'_>,
    ) -> Result<Vec<ContentEntry>> {
        let entries = self
            .collections
            .get(name)
            .ok_or_else(|| ContentError::CollectionNotFound(name.to_string()))?;

        Ok(entries.iter().filter(|&entry| filter(entry)).cloned().collect())
    }

    fn collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }
}
