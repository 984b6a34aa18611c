//! Editor configuration (config.toml)
//!
//! Settings are stored in TOML format in the platform-specific config
//! directory. A missing or broken file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// Frame listing settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Output file settings
    #[serde(default)]
    pub save: SaveConfig,
}

/// Frame listing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Frames the forward/back commands move the window (default: 10)
    #[serde(default = "default_page_step")]
    pub page_step: usize,
    /// Frames shown on either side of an edited range (default: 10)
    #[serde(default = "default_edit_context")]
    pub edit_context: usize,
}

/// Output file configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Appended to the input file stem when no output path is given
    /// (default: "_edited")
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_page_step() -> usize {
    10
}
fn default_edit_context() -> usize {
    10
}
fn default_suffix() -> String {
    "_edited".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_step: default_page_step(),
            edit_context: default_edit_context(),
        }
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

impl SaveConfig {
    /// Output path next to `input`: `replay.pb` becomes `replay_edited.pb`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match input.extension() {
            Some(ext) => format!("{stem}{}.{}", self.suffix, ext.to_string_lossy()),
            None => format!("{stem}{}", self.suffix),
        };
        input.with_file_name(name)
    }
}

/// Errors from reading or writing an explicit config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the platform-specific configuration directory.
///
/// On Linux: `~/.config/dxreplay`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.github", "", "dxreplay")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> EditorConfig {
    config_dir()
        .and_then(|dir| load_from(&dir.join(CONFIG_FILE)).ok())
        .unwrap_or_default()
}

/// Loads the configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<EditorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the platform config directory.
///
/// Creates the directory if it doesn't exist. Does nothing when no config
/// directory can be determined.
pub fn save(config: &EditorConfig) -> Result<(), ConfigError> {
    if let Some(dir) = config_dir() {
        save_to(&dir.join(CONFIG_FILE), config)?;
    }
    Ok(())
}

/// Saves the configuration to an explicit path.
pub fn save_to(path: &Path, config: &EditorConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
