//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.userview.toml` in the working directory
//! 4. `~/.config/userview/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_USER_TEMPLATE};
use crate::env::Env;
use crate::logging::LogFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub log: LogConfig,
}

/// Where the user resource lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server the template is resolved against.
    pub base_url: String,
    /// Resource path template, at most one `:placeholder`.
    pub template: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            template: DEFAULT_USER_TEMPLATE.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `warn` or `userview=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// One config file as written. Keys the file leaves out stay `None` and
/// never touch an earlier layer.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    api: ApiLayer,
    log: LogLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiLayer {
    base_url: Option<String>,
    template: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogLayer {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then `.userview.toml` in `work_dir`, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::read_layer(&global_path)?);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::read_layer(&local_path)?);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file on top of the built-in defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.merge(Self::read_layer(path)?);
        Ok(config)
    }

    fn read_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Overlay every key `layer` sets, including ones equal to the default.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(base_url) = layer.api.base_url {
            self.api.base_url = base_url;
        }
        if let Some(template) = layer.api.template {
            self.api.template = template;
        }
        if let Some(level) = layer.log.level {
            self.log.level = level;
        }
        if let Some(format) = layer.log.format {
            self.log.format = format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Ok(val) = env.var(crate::constants::ENV_TEMPLATE) {
            self.api.template = val;
        }
        if let Ok(val) = env.var(crate::constants::ENV_LOG) {
            self.log.level = val;
        }
        if let Ok(val) = env.var(crate::constants::ENV_LOG_FORMAT) {
            match val.parse::<LogFormat>() {
                Ok(format) => self.log.format = format,
                Err(_) => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    crate::constants::ENV_LOG_FORMAT
                ),
            }
        }
    }
}
