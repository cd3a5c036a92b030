//! Config file loading.
//!
//! Layers are merged in order, later files overriding earlier ones. The
//! default layers are the user file (`$SESSIONKIT_CONFIG_DIR/config.toml` or
//! the platform config dir) followed by `sessionkit.toml` in the project dir.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ConfigError, Result, SessionkitConfig};

const PROJECT_CONFIG_FILE: &str = "sessionkit.toml";
const USER_CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "SESSIONKIT_CONFIG_DIR";

/// Candidate config files, lowest precedence first.
pub fn config_layers(project_dir: &Path) -> Vec<PathBuf> {
    let user_dir = std::env::var_os(CONFIG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("sessionkit")));

    user_dir
        .map(|d| d.join(USER_CONFIG_FILE))
        .into_iter()
        .chain(std::iter::once(project_dir.join(PROJECT_CONFIG_FILE)))
        .collect()
}

/// Merge every existing file in `layers`; missing files are skipped.
///
/// A file that exists but fails to read or parse is an error, so a typo in
/// `[session]` never silently falls back to defaults.
pub fn load_config(layers: &[PathBuf]) -> Result<SessionkitConfig> {
    let mut config = SessionkitConfig::new();
    for path in layers.iter().filter(|p| p.is_file()) {
        config.merge(load_config_file(path)?);
        debug!(path = %path.display(), "Loaded config layer");
    }
    Ok(config)
}

/// Load config from a specific file path.
pub fn load_config_file(path: &Path) -> Result<SessionkitConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    SessionkitConfig::from_toml(&contents)
}
