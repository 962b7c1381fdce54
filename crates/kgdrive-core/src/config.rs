//! kgdrive configuration
//!
//! Loaded from TOML at startup. A missing file means defaults; a file that
//! exists but does not parse is an error. CLI flags are applied on top by the
//! binary.

use crate::error::{Error, Result};
use crate::types::{InputText, DEFAULT_INPUT_TEXT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var consulted for the bearer token when the file has none.
pub const API_KEY_ENV: &str = "KGDRIVE_API_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KgdriveConfig {
    /// Knowledge graph service connection.
    pub graph: GraphConfig,
    /// What the driver ingests and how it reports.
    pub driver: DriverConfig,
    /// Log filter and outputs.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Base URL of the knowledge graph REST service.
    pub base_url: String,
    /// Dataset that `add` writes into and `cognify` processes.
    pub dataset: String,
    /// Bearer token. Falls back to `KGDRIVE_API_KEY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Text submitted to `add`.
    pub text: String,
    /// Sink writes per result record. 2 matches the historical double-log.
    pub record_log_repeat: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive used when RUST_LOG is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Also write logs to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

// ============================================================
// Defaults
// ============================================================

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            dataset: "main_dataset".into(),
            api_key: None,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_INPUT_TEXT.into(),
            record_log_repeat: 2,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "kgdrive=info".into(),
            json: false,
            file: None,
        }
    }
}

// ============================================================
// Loading
// ============================================================

impl KgdriveConfig {
    /// Load config from a TOML file. Missing file → defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Default path: <config dir>/kgdrive/config.toml
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("kgdrive")
            .join("config.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Write the current config as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Validated input text.
    pub fn input_text(&self) -> Result<InputText> {
        InputText::new(self.driver.text.clone())
    }

    /// Bearer token from the file, else from `KGDRIVE_API_KEY`.
    pub fn api_key(&self) -> Option<String> {
        self.graph
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
