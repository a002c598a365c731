//! Slug and route normalization.
//!
//! Content identifiers (`en/reference/p5/circle.mdx`) and the slugs derived
//! from them do not always match the routes the site has historically
//! published. The functions here translate between the two. Each rewrite is
//! a small named step; the legacy pipelines are ordered lists of those steps
//! so the routing rules can be read in one place.

use crate::entry::ContentEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Page name of the contributor doc that is served as the section index
pub const CONTRIBUTOR_DOC_INDEX_PAGE: &str = "readme";

static CONTENT_FILE_EXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.(?:(?i:mdx?)|ya?ml)$").expect("content extension regex should compile")
});

static LOCALE_LIKE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+?/").expect("locale segment regex should compile")
});

static NUMBERED_TOPIC_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+_(.*?)/[0-9]+_(.*?)/description$")
        .expect("numbered topic regex should compile")
});

/// A named, total rewrite of a slug
#[derive(Clone, Copy)]
pub struct SlugStep {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for SlugStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SlugStep").field(&self.name).finish()
    }
}

/// Steps turning an example entry slug into its legacy website route
pub const LEGACY_EXAMPLE_SLUG_STEPS: &[SlugStep] = &[
    SlugStep {
        name: "strip-locale-segment",
        apply: strip_locale_like_segment,
    },
    SlugStep {
        name: "collapse-numbered-topics",
        apply: collapse_numbered_topic_path,
    },
    SlugStep {
        name: "hyphenate-underscores",
        apply: hyphenate_underscores,
    },
];

/// Steps turning a reference entry id into its route
pub const REFERENCE_ROUTE_STEPS: &[SlugStep] = &[
    SlugStep {
        name: "remove-locale-and-extension",
        apply: route_without_locale_and_extension,
    },
    SlugStep {
        name: "remove-constants-segment",
        apply: remove_constants_segment,
    },
];

/// Run a slug through an ordered list of steps
pub fn apply_steps(steps: &[SlugStep], slug: &str) -> String {
    steps.iter().fold(slug.to_string(), |current, step| {
        let next = (step.apply)(&current);
        trace!(step = step.name, from = %current, to = %next, "slug step");
        next
    })
}

/// Strip one leading `/`
pub fn remove_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Strip the content file extension (`.md`, `.mdx`, `.yml`, `.yaml`).
///
/// The id is used for routing instead of the framework slug because the
/// slug drops characters such as `.` (`p5.sound`). Stacked content
/// extensions are all removed, so applying this twice is the same as
/// applying it once.
///
/// ```rust
/// use content::slug::remove_content_file_ext;
///
/// assert_eq!(remove_content_file_ext("en/libraries/p5.sound.yaml"), "en/libraries/p5.sound");
/// assert_eq!(remove_content_file_ext("en/reference/p5/circle.MDX"), "en/reference/p5/circle");
/// ```
pub fn remove_content_file_ext(id: &str) -> &str {
    let mut stripped = id;
    while let Some(ext) = CONTENT_FILE_EXT.find(stripped) {
        stripped = &stripped[..ext.start()];
    }
    stripped
}

/// Remove the locale segment, a leading slash and the content extension
pub fn remove_locale_and_extension(id: &str) -> &str {
    remove_content_file_ext(remove_leading_slash(i18n::remove_locale_prefix(id)))
}

/// Route of a reference entry: no locale, no extension, and no
/// `constants/` directory
pub fn normalize_reference_route(route: &str) -> String {
    apply_steps(REFERENCE_ROUTE_STEPS, route)
}

fn route_without_locale_and_extension(id: &str) -> String {
    remove_locale_and_extension(id).to_string()
}

fn remove_constants_segment(route: &str) -> String {
    route.replacen("constants/", "", 1)
}

/// Translate an example entry slug to the route the website has always
/// used for it, so inbound links keep working.
///
/// ```rust
/// use content::slug::example_content_slug_to_legacy_website_slug;
///
/// assert_eq!(
///     example_content_slug_to_legacy_website_slug("en/123_topicA/456_topicB/description"),
///     "topicA-topicB"
/// );
/// assert_eq!(example_content_slug_to_legacy_website_slug("en/foo_bar"), "foo-bar");
/// ```
pub fn example_content_slug_to_legacy_website_slug(slug: &str) -> String {
    apply_steps(LEGACY_EXAMPLE_SLUG_STEPS, slug)
}

/// Strip one leading locale-like segment (`en/`, `zh-Hans/`)
pub fn strip_locale_like_segment(slug: &str) -> String {
    match LOCALE_LIKE_SEGMENT.find(slug) {
        Some(segment) => slug[segment.end()..].to_string(),
        None => slug.to_string(),
    }
}

/// `01_shapes/02_circles/description` becomes `shapes-circles`
pub fn collapse_numbered_topic_path(slug: &str) -> String {
    NUMBERED_TOPIC_PATH
        .replace(slug, "${1}-${2}")
        .into_owned()
}

/// Replace every `_` with `-`
pub fn hyphenate_underscores(slug: &str) -> String {
    slug.replace('_', "-")
}

/// Route the contributor doc index page at the directory itself.
///
/// `contributor-docs/es/readme` becomes `/contributor-docs/es/`; any other
/// slug is returned unchanged.
pub fn convert_contributor_doc_index_slug_if_needed(slug: &str) -> String {
    match slug.strip_suffix(CONTRIBUTOR_DOC_INDEX_PAGE) {
        Some(directory) => format!("/{}", directory),
        None => slug.to_string(),
    }
}

/// Copies of the example entries routed under their legacy website slugs
pub fn transform_example_slugs(entries: &[ContentEntry]) -> Vec<ContentEntry> {
    entries
        .iter()
        .map(|entry| entry.with_slug(example_content_slug_to_legacy_website_slug(entry.slug())))
        .collect()
}
