//! Helpers for reference and library entries

use crate::entry::ContentEntry;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker separating examples stored in a single string
pub const EXAMPLE_SEPARATOR: &str = "</div>";

static EXAMPLE_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(?:div|code)>").expect("example markup regex should compile"));

/// Split raw reference examples into individual examples.
///
/// Some reference entries store several examples in one string, each wrapped
/// in `<div><code>...</code></div>`. Every string is split on `</div>`, the
/// wrapping `<div>`/`<code>` tags are removed, and empty pieces are dropped.
///
/// ```rust
/// use content::reference::separate_reference_examples;
///
/// let examples = ["<div><code>a</code></div><div><code>b</code></div>"];
/// assert_eq!(separate_reference_examples(&examples), vec!["a", "b"]);
/// ```
pub fn separate_reference_examples<S: AsRef<str>>(examples: &[S]) -> Vec<String> {
    examples
        .iter()
        .flat_map(|example| example.as_ref().split(EXAMPLE_SEPARATOR))
        .map(|fragment| EXAMPLE_MARKUP.replace_all(fragment, "").into_owned())
        .filter(|example| !example.is_empty())
        .collect()
}

/// The entry title, followed by `()` for constructors and methods
pub fn get_ref_entry_title_concat_with_paren(entry: &ContentEntry) -> String {
    let title = entry.title().unwrap_or_default();
    if entry.is_constructor() || entry.itemtype() == Some("method") {
        format!("{}()", title)
    } else {
        title.to_string()
    }
}

/// Where a library entry should link: its website, else its source
pub fn get_library_link(entry: &ContentEntry) -> Option<&str> {
    entry.website_url().or_else(|| entry.source_url())
}
