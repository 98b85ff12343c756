//! Store initialization configuration.
//!
//! The host page hands the sidebar a small configuration object. Only three
//! fields matter to the store:
//!
//! - `annotations`: id of a direct-linked annotation
//! - `group`: id of a direct-linked group
//! - `focus.user`: the user focus mode starts out restricted to
//!
//! Hosts usually pass JSON; TOML is accepted for local tooling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sidebar_model::{AnnotationId, FocusUser};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// Focus-mode section of the host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub user: Option<FocusUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub annotations: Option<AnnotationId>,
    pub group: Option<String>,
    pub focus: Option<FocusConfig>,
}

impl StoreConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ));
            }
        };
        tracing::info!("Loaded store config from {:?}", path);
        Ok(config)
    }

    /// The configured focus user, if focus mode was requested with one.
    pub fn focus_user(&self) -> Option<&FocusUser> {
        self.focus.as_ref().and_then(|focus| focus.user.as_ref())
    }
}
