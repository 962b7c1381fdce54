//! Error types for kgdrive

use crate::types::Operation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{op} failed: {message}")]
    External { op: Operation, message: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("driver already ran")]
    AlreadyRun,

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn external(op: Operation, message: impl Into<String>) -> Self {
        Self::External {
            op,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// The external call that failed, if this is an external-call failure.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::External { op, .. } => Some(*op),
            _ => None,
        }
    }
}
