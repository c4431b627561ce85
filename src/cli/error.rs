//! CLI-specific error types

use crate::config::ConfigError;
use crate::convert::ConversionError;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Conversion error: {0}")]
    ConversionError(#[from] ConversionError),

    #[error("Failed to write output: {0}")]
    OutputError(String),
}
