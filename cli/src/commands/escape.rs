use anyhow::{Context, Result};
use content::{escape_code_tags_content, escape_html_entities};
use std::io::Read;
use std::path::PathBuf;

/// Escape an HTML fragment read from a file or stdin
pub fn execute(input: Option<PathBuf>, literal: bool) -> Result<()> {
    let html = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let output = if literal {
        escape_html_entities(&html)
    } else {
        escape_code_tags_content(&html)?
    };

    print!("{}", output);
    Ok(())
}
