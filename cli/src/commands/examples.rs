use anyhow::{anyhow, Result};
use colored::*;
use content::{
    get_library_link, get_ref_entry_title_concat_with_paren, separate_reference_examples,
    ContentEntry, MemorySource,
};
use serde_json::json;
use std::path::PathBuf;

/// Show the title, link and separated examples of a reference entry
pub fn execute(manifest: PathBuf, name: String, id: String, format: String) -> Result<()> {
    let source = MemorySource::from_manifest_file(&manifest)?;
    let entries = source
        .entries(&name)
        .ok_or_else(|| anyhow!("Collection '{}' not found in manifest", name))?;
    let entry = entries
        .iter()
        .find(|entry| entry.id() == id)
        .ok_or_else(|| anyhow!("Entry '{}' not found in collection '{}'", id, name))?;

    let title = get_ref_entry_title_concat_with_paren(entry);
    let examples = separate_reference_examples(&entry.examples());

    match format.as_str() {
        "json" => {
            let output = json!({
                "id": entry.id(),
                "title": title,
                "link": get_library_link(entry),
                "examples": examples,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            print_entry_text(entry, &title, &examples);
        }
    }

    Ok(())
}

fn print_entry_text(entry: &ContentEntry, title: &str, examples: &[String]) {
    println!("{}", format!("=== {} ===", title).bold());
    println!("{}: {}", "Id".bold(), entry.id().cyan());
    if let Some(link) = get_library_link(entry) {
        println!("{}: {}", "Link".bold(), link.green());
    }
    println!();

    if examples.is_empty() {
        println!("{}", "No examples".yellow());
        return;
    }

    for (index, example) in examples.iter().enumerate() {
        println!("{}", format!("--- Example {} ---", index + 1).cyan());
        println!("{}", example.trim());
    }
}
