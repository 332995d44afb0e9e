//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`EDUFRAME_*`, `API_KEY`)
//! 2. Config file (`~/.eduframe/config.toml`)
//! 3. Defaults

use crate::completion::SYSTEM_INSTRUCTION;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Model configuration.
    pub model: ModelConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the history snapshot.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_eduframe_home(),
        }
    }
}

/// Model configuration.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key. Usually supplied through `API_KEY`.
    pub api_key: Option<String>,

    /// Model name.
    pub model: String,

    /// API base URL.
    pub base_url: String,

    /// Replacement for the built-in system instruction.
    pub system_instruction: Option<String>,
}

impl ModelConfig {
    /// The system instruction to send, custom or built-in.
    #[must_use]
    pub fn system_instruction(&self) -> &str {
        self.system_instruction
            .as_deref()
            .unwrap_or(SYSTEM_INSTRUCTION)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            system_instruction: None,
        }
    }
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("system_instruction", &self.system_instruction.is_some())
            .finish()
    }
}

/// Get the default eduframe home directory.
fn default_eduframe_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".eduframe"), |h| h.join(".eduframe"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = load_config_file(&get_config_path())?;
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load a config file, or defaults if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path).map_err(Error::Storage)?;
    toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("EDUFRAME_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("EDUFRAME_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_eduframe_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    // Storage path
    if let Ok(path) = env::var("EDUFRAME_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    } else if let Ok(home) = env::var("EDUFRAME_HOME") {
        config.storage.path = PathBuf::from(home);
    }

    // API key: the dedicated variable wins over the generic one
    if let Ok(key) = env::var("EDUFRAME_API_KEY").or_else(|_| env::var("API_KEY")) {
        config.model.api_key = Some(key);
    }

    if let Ok(model) = env::var("EDUFRAME_MODEL") {
        config.model.model = model;
    }

    if let Ok(url) = env::var("EDUFRAME_BASE_URL") {
        config.model.base_url = url;
    }
}
