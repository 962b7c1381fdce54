//! Data passed between the driver, the knowledge graph and the logging sink.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentence ingested when nothing else is configured.
pub const DEFAULT_INPUT_TEXT: &str =
    "Natural language processing (NLP) is a subfield of computer science.";

/// Text submitted to the knowledge graph's `add` call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InputText(String);

impl InputText {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::InvalidInput("input text is empty".into()));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for InputText {
    fn default() -> Self {
        Self(DEFAULT_INPUT_TEXT.to_string())
    }
}

impl fmt::Display for InputText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InputText {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        InputText::new(s).map_err(serde::de::Error::custom)
    }
}

/// One unit of output from `cognify`. Opaque to the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRecord(serde_json::Value);

impl ResultRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for ResultRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<&str> for ResultRecord {
    fn from(s: &str) -> Self {
        Self(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for ResultRecord {
    fn from(s: String) -> Self {
        Self(serde_json::Value::String(s))
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// The two external calls the driver makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Cognify,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Cognify => write!(f, "cognify"),
        }
    }
}
