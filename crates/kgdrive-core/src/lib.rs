//! kgdrive core - input/record types, errors, configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::{DriverConfig, GraphConfig, KgdriveConfig, LoggingConfig};
pub use error::{Error, Result};
pub use types::*;
