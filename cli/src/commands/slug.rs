use anyhow::Result;
use clap::ValueEnum;
use content::{
    convert_contributor_doc_index_slug_if_needed, example_content_slug_to_legacy_website_slug,
    normalize_reference_route, remove_locale_and_extension,
};

/// Slug rewrite to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlugKind {
    /// Example entry slug to legacy website route
    Example,
    /// Reference entry id to reference route
    Reference,
    /// Contributor doc slug, routing the readme at the directory
    ContributorDoc,
    /// Remove locale segment, leading slash and content extension
    Strip,
}

/// Rewrite a slug and return the result
pub fn rewrite(kind: SlugKind, value: &str) -> String {
    match kind {
        SlugKind::Example => example_content_slug_to_legacy_website_slug(value),
        SlugKind::Reference => normalize_reference_route(value),
        SlugKind::ContributorDoc => convert_contributor_doc_index_slug_if_needed(value),
        SlugKind::Strip => remove_locale_and_extension(value).to_string(),
    }
}

/// Print a rewritten slug
pub fn execute(kind: SlugKind, value: String) -> Result<()> {
    println!("{}", rewrite(kind, &value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_kinds() {
        assert_eq!(
            rewrite(SlugKind::Example, "en/01_shapes/02_circles/description"),
            "shapes-circles"
        );
        assert_eq!(
            rewrite(SlugKind::Reference, "en/reference/p5/constants/PI.mdx"),
            "reference/p5/PI"
        );
        assert_eq!(
            rewrite(SlugKind::ContributorDoc, "contributor-docs/ko/readme"),
            "/contributor-docs/ko/"
        );
        assert_eq!(rewrite(SlugKind::Strip, "es/tutorials/intro.mdx"), "tutorials/intro");
    }
}
