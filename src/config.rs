//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/profpredict/profpredict.toml`
//! 3. Local config: `<dir>/.profpredict.toml`
//! 4. Environment variables: `PROFPREDICT_*` prefix

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::PayloadSchema;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PREDICT_PATH: &str = "/api/predict";

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_url: Option<String>,
    pub predict_path: Option<String>,
    pub schema: Option<PayloadSchema>,
    pub timeout_secs: Option<u64>,
}

/// Unified configuration for profpredict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prediction service root, e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Path of the prediction endpoint
    pub predict_path: String,
    /// Request/response shape spoken by the service
    pub schema: PayloadSchema,
    /// Request timeout; unset waits indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            predict_path: DEFAULT_PREDICT_PATH.into(),
            schema: PayloadSchema::default(),
            timeout_secs: None,
        }
    }
}

/// Get the XDG config directory for profpredict.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "profpredict").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("profpredict.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".profpredict.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Full URL of the prediction endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.predict_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            base_url: overlay
                .base_url
                .clone()
                .unwrap_or_else(|| self.base_url.clone()),
            predict_path: overlay
                .predict_path
                .clone()
                .unwrap_or_else(|| self.predict_path.clone()),
            schema: overlay.schema.unwrap_or(self.schema),
            timeout_secs: overlay.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.profpredict.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply PROFPREDICT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PROFPREDICT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("base_url") {
            settings.base_url = val;
        }
        if let Ok(val) = config.get_string("predict_path") {
            settings.predict_path = val;
        }
        if let Ok(val) = config.get_string("schema") {
            settings.schema = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("PROFPREDICT_SCHEMA: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("timeout_secs") {
            let secs = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("PROFPREDICT_TIMEOUT_SECS: {e}"),
            })?;
            settings.timeout_secs = Some(secs);
        }

        Ok(settings)
    }

    /// Render effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
