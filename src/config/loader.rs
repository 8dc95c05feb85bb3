use std::fs;
use std::path::{Path, PathBuf};

use super::core::SavannahConfig;

pub const CONFIG_FILE_NAME: &str = ".savannah.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and sanitize a config from TOML text. Invalid weight groups warn
/// on stderr and revert to defaults instead of failing the load.
pub fn parse_and_validate_config(contents: &str) -> Result<SavannahConfig, String> {
    let mut config = toml::from_str::<SavannahConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    for warning in config.sanitize() {
        log::warn!("Invalid {warning}. Using defaults for that group.");
    }
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<SavannahConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {e}", config_path.display());
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

/// The start directory and its ancestors, up to a depth limit.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load `.savannah.toml` from the working directory or any ancestor.
/// Missing files and unusable directories all degrade to defaults.
pub fn load_config() -> SavannahConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            return SavannahConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {CONFIG_FILE_NAME} found. Using default config.");
            SavannahConfig::default()
        })
}
