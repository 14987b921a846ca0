use std::path::{Path, PathBuf};
use std::env;

const CONFIG_FILE: &str = ".gh-pr-recent.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for the config file in:
/// 1. Current working directory as .gh-pr-recent.toml
/// 2. Home directory as .gh-pr-recent.toml
/// 3. The platform config directory as config.toml
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    // Try current directory first
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    // Try home directory
    if let Some(home_config) = get_home_config_path() {
        if let Some(content) = load_config_file_from(&home_config) {
            return Some(content);
        }
    }

    crate::paths::app_config_path()
        .ok()
        .and_then(|path| load_config_file_from(&path))
}

/// Load config file content from an explicit path
///
/// Returns None if the file does not exist or cannot be read.
pub fn load_config_file_from(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::debug!("No config at {}: {}", path.display(), e);
            None
        }
    }
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.gh-pr-recent.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
