//! Validated content entry record

use crate::error::ContentError;
use crate::slug::remove_content_file_ext;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry of a content collection.
///
/// The identifier always has the form `<locale>/<path>`; this is checked
/// when the entry is constructed or deserialized, so code working with a
/// `ContentEntry` can rely on the locale segment being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContentEntry")]
pub struct ContentEntry {
    id: String,
    slug: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

/// Entry shape as it appears in a manifest, before validation
#[derive(Debug, Deserialize)]
struct RawContentEntry {
    id: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    data: Map<String, Value>,
    #[serde(default)]
    body: Option<String>,
}

impl TryFrom<RawContentEntry> for ContentEntry {
    type Error = ContentError;

    fn try_from(raw: RawContentEntry) -> Result<Self, Self::Error> {
        validate_identifier(&raw.id)?;
        let slug = raw
            .slug
            .unwrap_or_else(|| remove_content_file_ext(&raw.id).to_string());
        Ok(Self {
            id: raw.id,
            slug,
            data: raw.data,
            body: raw.body,
        })
    }
}

impl ContentEntry {
    /// Create a new entry, validating the identifier
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        data: Map<String, Value>,
    ) -> Result<Self, ContentError> {
        let id = id.into();
        validate_identifier(&id)?;
        Ok(Self {
            id,
            slug: slug.into(),
            data,
            body: None,
        })
    }

    /// Attach a body to the entry
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Copy of this entry routed under a different slug
    pub fn with_slug(&self, slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The locale segment of the identifier
    pub fn locale(&self) -> &str {
        self.id.split('/').next().unwrap_or_default()
    }

    /// Check whether the identifier starts with `<locale>/`
    pub fn is_in_locale(&self, locale: &str) -> bool {
        self.id
            .strip_prefix(locale)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// The identifier with its own locale segment stripped, whether or not
    /// that locale is configured. Two entries with the same logical id are
    /// translations of the same document.
    pub fn logical_id(&self) -> &str {
        self.id
            .split_once('/')
            .map_or(self.id.as_str(), |(_, path)| path)
    }

    /// Raw access to a data field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// A data field, if it is a string
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn itemtype(&self) -> Option<&str> {
        self.str_field("itemtype")
    }

    pub fn is_constructor(&self) -> bool {
        self.field("isConstructor")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn website_url(&self) -> Option<&str> {
        self.str_field("websiteUrl")
    }

    pub fn source_url(&self) -> Option<&str> {
        self.str_field("sourceUrl")
    }

    /// Raw reference examples stored under `example`.
    ///
    /// Accepts either a list of strings or a single string; anything else
    /// yields no examples.
    pub fn examples(&self) -> Vec<String> {
        match self.field("example") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(example)) => vec![example.clone()],
            _ => Vec::new(),
        }
    }
}

/// Validate that an identifier has the form `<locale>/<path>`
pub fn validate_identifier(id: &str) -> Result<(), ContentError> {
    let Some((locale, path)) = id.split_once('/') else {
        return Err(ContentError::ValidationError(format!(
            "Entry id '{}' has no locale segment",
            id
        )));
    };

    if locale.is_empty() {
        return Err(ContentError::ValidationError(format!(
            "Entry id '{}' has an empty locale segment",
            id
        )));
    }

    if path.is_empty() {
        return Err(ContentError::ValidationError(format!(
            "Entry id '{}' has an empty path",
            id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test data must be an object"),
        }
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("en/reference/p5/circle.mdx").is_ok());
        assert!(validate_identifier("zh-Hans/tutorials/intro").is_ok());
        assert!(validate_identifier("circle.mdx").is_err());
        assert!(validate_identifier("/circle.mdx").is_err());
        assert!(validate_identifier("en/").is_err());
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn test_new_rejects_missing_locale() {
        let err = ContentEntry::new("circle.mdx", "circle", Map::new()).unwrap_err();
        assert!(matches!(err, ContentError::ValidationError(_)));
    }

    #[test]
    fn test_locale_accessors() {
        let entry = ContentEntry::new("es/tutorials/intro.mdx", "es/tutorials/intro", Map::new())
            .unwrap();
        assert_eq!(entry.locale(), "es");
        assert!(entry.is_in_locale("es"));
        assert!(!entry.is_in_locale("e"));
        assert!(!entry.is_in_locale("en"));
        assert_eq!(entry.logical_id(), "tutorials/intro.mdx");

        let unconfigured =
            ContentEntry::new("fr/tutorials/intro.mdx", "fr/tutorials/intro", Map::new()).unwrap();
        assert_eq!(unconfigured.logical_id(), "tutorials/intro.mdx");
    }

    #[test]
    fn test_data_accessors() {
        let entry = ContentEntry::new(
            "en/reference/p5/Color.mdx",
            "en/reference/p5/color",
            data(json!({
                "title": "Color",
                "isConstructor": true,
                "itemtype": "class",
                "example": ["<div><code>a</code></div>"],
            })),
        )
        .unwrap();

        assert_eq!(entry.title(), Some("Color"));
        assert!(entry.is_constructor());
        assert_eq!(entry.itemtype(), Some("class"));
        assert_eq!(entry.examples(), vec!["<div><code>a</code></div>"]);
        assert_eq!(entry.website_url(), None);
    }

    #[test]
    fn test_is_constructor_requires_bool() {
        let entry = ContentEntry::new(
            "en/reference/p5/circle.mdx",
            "en/reference/p5/circle",
            data(json!({ "isConstructor": "yes" })),
        )
        .unwrap();
        assert!(!entry.is_constructor());
    }

    #[test]
    fn test_examples_single_string() {
        let entry = ContentEntry::new(
            "en/reference/p5/circle.mdx",
            "en/reference/p5/circle",
            data(json!({ "example": "<div>x</div>" })),
        )
        .unwrap();
        assert_eq!(entry.examples(), vec!["<div>x</div>"]);
    }

    #[test]
    fn test_deserialize_validates_and_defaults_slug() {
        let entry: ContentEntry = serde_json::from_value(json!({
            "id": "en/libraries/p5.sound.yaml",
            "data": { "sourceUrl": "https://example.com/p5.sound" }
        }))
        .unwrap();
        assert_eq!(entry.slug(), "en/libraries/p5.sound");
        assert_eq!(entry.source_url(), Some("https://example.com/p5.sound"));

        let err = serde_json::from_value::<ContentEntry>(json!({ "id": "p5.sound.yaml" }));
        assert!(err.is_err());
    }

    #[test]
    fn test_with_slug_keeps_identity() {
        let entry = ContentEntry::new("en/examples/a", "en/examples/a", Map::new())
            .unwrap()
            .with_body("<p>hi</p>");
        let moved = entry.with_slug("a");
        assert_eq!(moved.id(), "en/examples/a");
        assert_eq!(moved.slug(), "a");
        assert_eq!(moved.body(), Some("<p>hi</p>"));
    }
}
