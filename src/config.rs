use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::release::DEFAULT_COMMIT_MESSAGE;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "gitrelease.toml";

/// Represents the configuration for git-release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Template for the bump commit; `%s` or `{version}` becomes the new version
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Manifest holding the project version
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

fn default_commit_message() -> String {
    DEFAULT_COMMIT_MESSAGE.to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_message: default_commit_message(),
            manifest: default_manifest(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in current directory
/// 3. `.gitrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE);

    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join(format!(".{}", CONFIG_FILE));
        if global.exists() {
            global
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    log::debug!("Loading configuration from {}", path.display());
    parse_config(&fs::read_to_string(&path)?)
}

/// Parse configuration text; missing keys take their defaults
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
