use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// File name of the locale configuration inside the configuration directory
pub const LOCALE_CONFIG_FILE: &str = "config.i18n.yaml";

/// Load a `.env` file from the current directory if one exists
pub fn load_dotenv() {
    if let Ok(current_dir) = env::current_dir() {
        let env_file = current_dir.join(".env");
        if env_file.exists() {
            dotenv::from_path(&env_file).ok();
        }
    }
}

/// Work out which locale configuration file to use.
///
/// An explicit path must exist. Without one, `config.i18n.yaml` is looked up
/// in `CONFIGURATION_PATH` (default `./config`); `None` means the built-in
/// locale defaults apply.
pub fn resolve_locale_config(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let base = env::current_dir().context("Failed to get current directory")?;
    resolve_locale_config_with_base(explicit, &base)
}

/// Same as [`resolve_locale_config`] with relative paths resolved against `base_dir`
pub fn resolve_locale_config_with_base(
    explicit: Option<PathBuf>,
    base_dir: &Path,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = absolutize(path, base_dir);
        if !path.is_file() {
            return Err(anyhow!(
                "Locale configuration file not found: {}",
                path.display()
            ));
        }
        return Ok(Some(path));
    }

    let config_dir = env::var("CONFIGURATION_PATH").unwrap_or_else(|_| "./config".to_string());
    let candidate = absolutize(PathBuf::from(config_dir), base_dir).join(LOCALE_CONFIG_FILE);

    Ok(candidate.is_file().then_some(candidate))
}

fn absolutize(path: PathBuf, base_dir: &Path) -> PathBuf {
    if path.is_relative() {
        base_dir.join(path)
    } else {
        path
    }
}
