use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;

use super::env_var::EnvVars;

/// Top-level configuration for yt-comments.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// YouTube Data API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// CSV export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// YouTube Data API configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API key. `YOUTUBE_API_KEY` takes precedence when set.
    #[serde(default)]
    pub key: Option<String>,

    /// Base URL of the Data API (default: "https://www.googleapis.com/youtube/v3").
    #[serde(default = "default_base_url")]
    #[schemars(default = "default_base_url")]
    pub base_url: String,

    /// Number of comment threads requested per page (default: 100).
    #[serde(default = "default_page_size")]
    #[schemars(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

/// CSV export configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Output file name (default: "youtube_comments.csv").
    #[serde(default = "default_file_name")]
    #[schemars(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_file_name() -> String {
    "youtube_comments.csv".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Neither the environment nor the config file carries an API key.
    #[error(
        "API key not found in environment variables. Please set '{}' in your .env file.",
        EnvVars::api_key_name()
    )]
    MissingApiKey,
}

/// Connection settings resolved from the environment and the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub key: String,
    pub base_url: String,
    pub page_size: u32,
}

impl Config {
    /// Resolve API settings. Environment values win over the config file.
    pub fn api_settings(&self, env: &EnvVars) -> Result<ApiSettings, ConfigError> {
        let key = env
            .api_key
            .clone()
            .or_else(|| self.api.key.clone().filter(|k| !k.trim().is_empty()))
            .ok_or(ConfigError::MissingApiKey)?;
        let base_url = env
            .base_url
            .clone()
            .unwrap_or_else(|| self.api.base_url.clone());

        Ok(ApiSettings {
            key,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: self.api.page_size,
        })
    }
}

/// Directory holding the config file (~/.config/yt-comments on Linux).
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yt-comments"))
}

/// Load configuration from the config directory's config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> Result<Config, ConfigError> {
    let Some(dir) = config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir)
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> Result<Config, ConfigError> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> Result<Config, ConfigError> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
