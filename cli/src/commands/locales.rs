use anyhow::Result;
use colored::*;

/// Show the active locale configuration
pub fn execute(format: String) -> Result<()> {
    let locales = i18n::current();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(locales.as_ref())?);
        }
        "yaml" => {
            print!("{}", serde_yaml::to_string(locales.as_ref())?);
        }
        _ => {
            println!("{}", "=== Locale Configuration ===".bold());
            println!();
            println!("{}: {}", "Default locale".bold(), locales.default_locale.cyan());
            println!("{}:", "Supported locales".bold());
            for locale in &locales.supported_locales {
                if *locale == locales.default_locale {
                    println!("  - {} {}", locale.green(), "(default)".dimmed());
                } else {
                    println!("  - {}", locale.yellow());
                }
            }
        }
    }

    Ok(())
}
