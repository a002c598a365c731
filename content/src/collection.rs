//! Locale-aware collection filtering and locale fallback merging

use crate::entry::ContentEntry;
use crate::source::CollectionSource;
use crate::Result;
use i18n::LocaleConfig;
use std::collections::HashSet;
use tracing::debug;

/// Entries whose id starts with `<locale>/`, in their original order
pub fn filter_locale(entries: &[ContentEntry], locale: &str) -> Vec<ContentEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_in_locale(locale))
        .cloned()
        .collect()
}

/// Entries in any supported locale other than the default one
pub fn filter_non_default_locales(
    entries: &[ContentEntry],
    locales: &LocaleConfig,
) -> Vec<ContentEntry> {
    entries
        .iter()
        .filter(|entry| locales.starts_with_supported_locale(entry.id()))
        .cloned()
        .collect()
}

/// Combine localized entries with default-locale entries.
///
/// The result holds every localized entry, followed by the default entries
/// whose logical document has no localized version. Both parts keep their
/// relative order, and no logical document appears twice.
pub fn merge_with_fallbacks(
    localized: Vec<ContentEntry>,
    defaults: Vec<ContentEntry>,
) -> Vec<ContentEntry> {
    let localized_ids: HashSet<&str> = localized
        .iter()
        .map(|entry| entry.logical_id())
        .collect();

    let fallbacks: Vec<ContentEntry> = defaults
        .into_iter()
        .filter(|entry| !localized_ids.contains(entry.logical_id()))
        .collect();

    debug!(
        "Merged {} localized entries with {} fallback entries",
        localized.len(),
        fallbacks.len()
    );

    let mut merged = localized;
    merged.extend(fallbacks);
    merged
}

/// All entries of a collection in the given locale
pub async fn get_collection_in_locale<S>(
    source: &S,
    collection: &str,
    locale: &str,
) -> Result<Vec<ContentEntry>>
where
    S: CollectionSource + ?Sized,
{
    let entries = source
        .get_collection(collection, &|entry: &ContentEntry| entry.is_in_locale(locale))
        .await?;
    debug!(
        "Collection '{}' has {} entries in locale '{}'",
        collection,
        entries.len(),
        locale
    );
    Ok(entries)
}

/// All entries of a collection in the configured default locale
pub async fn get_collection_in_default_locale<S>(
    source: &S,
    collection: &str,
) -> Result<Vec<ContentEntry>>
where
    S: CollectionSource + ?Sized,
{
    let default_locale = i18n::default_locale();
    get_collection_in_locale(source, collection, &default_locale).await
}

/// All entries of a collection in non-default locales
pub async fn get_collection_in_non_default_locales<S>(
    source: &S,
    collection: &str,
) -> Result<Vec<ContentEntry>>
where
    S: CollectionSource + ?Sized,
{
    let locales = i18n::current();
    let entries = source
        .get_collection(collection, &|entry: &ContentEntry| {
            locales.starts_with_supported_locale(entry.id())
        })
        .await?;
    debug!(
        "Collection '{}' has {} entries in non-default locales",
        collection,
        entries.len()
    );
    Ok(entries)
}

/// All entries of a collection in the given locale, completed with
/// default-locale entries for documents that are not localized
pub async fn get_collection_in_locale_with_fallbacks<S>(
    source: &S,
    collection: &str,
    locale: &str,
) -> Result<Vec<ContentEntry>>
where
    S: CollectionSource + ?Sized,
{
    let localized = get_collection_in_locale(source, collection, locale).await?;
    let defaults = get_collection_in_default_locale(source, collection).await?;
    Ok(merge_with_fallbacks(localized, defaults))
}
