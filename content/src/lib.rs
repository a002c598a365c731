//! # Content Crate
//!
//! Content routing and normalization helpers for the documentation site.
//! It serves as a centralized location for:
//!
//! - Locale-aware collection filtering
//! - Locale fallback merging (localized entries first, default-locale
//!   entries for documents that are not translated yet)
//! - Slug and route normalization, including legacy example routes
//! - Reference entry helpers (example splitting, titles, library links)
//! - Escaping of `<code>` element content in HTML fragments
//!
//! Collections come from a [`CollectionSource`]; the locale configuration
//! comes from the `i18n` crate.
//!
//! ## Usage
//!
//! ```rust
//! use content::{get_collection_in_locale_with_fallbacks, ContentEntry, MemorySource};
//! use serde_json::Map;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = MemorySource::new().with_collection(
//!     "tutorials",
//!     vec![
//!         ContentEntry::new("en/intro.mdx", "en/intro", Map::new()).unwrap(),
//!         ContentEntry::new("en/color.mdx", "en/color", Map::new()).unwrap(),
//!         ContentEntry::new("es/intro.mdx", "es/intro", Map::new()).unwrap(),
//!     ],
//! );
//!
//! let entries = get_collection_in_locale_with_fallbacks(&source, "tutorials", "es")
//!     .await
//!     .unwrap();
//! let ids: Vec<&str> = entries.iter().map(|e| e.id()).collect();
//! assert_eq!(ids, vec!["es/intro.mdx", "en/color.mdx"]);
//! # }
//! ```

pub mod collection;
pub mod entry;
pub mod error;
pub mod escape;
pub mod reference;
pub mod slug;
pub mod source;

// Re-export commonly used functions at the crate root
pub use collection::{
    filter_locale, filter_non_default_locales, get_collection_in_default_locale,
    get_collection_in_locale, get_collection_in_locale_with_fallbacks,
    get_collection_in_non_default_locales, merge_with_fallbacks,
};
pub use entry::ContentEntry;
pub use error::ContentError;
pub use escape::{escape_code_tags_content, escape_html_entities};
pub use reference::{
    get_library_link, get_ref_entry_title_concat_with_paren, separate_reference_examples,
};
pub use slug::{
    convert_contributor_doc_index_slug_if_needed, example_content_slug_to_legacy_website_slug,
    normalize_reference_route, remove_content_file_ext, remove_leading_slash,
    remove_locale_and_extension, transform_example_slugs,
};
pub use source::{CollectionSource, Manifest, ManifestFormat, MemorySource};

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_examples_pipeline() {
        let manifest = Manifest::parse(
            r#"collections:
  examples:
    - id: en/01_shapes/02_circles/description.mdx
    - id: es/01_shapes/02_circles/description.mdx
    - id: en/03_noise/04_noise_wave/description.mdx
"#,
            ManifestFormat::Yaml,
        )
        .unwrap();
        let source = MemorySource::from(manifest);

        let entries = get_collection_in_locale_with_fallbacks(&source, "examples", "es")
            .await
            .unwrap();
        let routed = transform_example_slugs(&entries);
        let slugs: Vec<&str> = routed.iter().map(ContentEntry::slug).collect();
        assert_eq!(slugs, vec!["shapes-circles", "noise-noise-wave"]);
        assert_eq!(routed[0].id(), "es/01_shapes/02_circles/description.mdx");
    }

    #[test]
    fn test_reference_entry_helpers() {
        let entry: ContentEntry = serde_json::from_value(json!({
            "id": "en/reference/p5/constants/TWO_PI.mdx",
            "data": {
                "title": "TWO_PI",
                "itemtype": "property",
                "example": ["<div><code>arc(50, 50, 80, 80, 0, TWO_PI);</code></div>"],
            },
        }))
        .unwrap();

        assert_eq!(normalize_reference_route(entry.id()), "reference/p5/TWO_PI");
        assert_eq!(get_ref_entry_title_concat_with_paren(&entry), "TWO_PI");
        assert_eq!(
            separate_reference_examples(&entry.examples()),
            vec!["arc(50, 50, 80, 80, 0, TWO_PI);"]
        );
    }
}
