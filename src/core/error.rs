//! Error handling for the servergen code generation library.
//!
//! This module defines the application-level error type `Error` used by the
//! loaders, the configuration layer and the CLI, along with a convenient
//! `Result` type alias. Rendering failures raised by generators live in
//! [`crate::generation::GenerationError`] and convert into `Error::Generation`.
//!
//! # Examples
//!
//! ```
//! use servergen::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("no framework selected"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for servergen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for servergen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// OpenAPI error
    #[error("OpenAPI error: {0}")]
    OpenApi(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rendering error raised by a generator
    #[error(transparent)]
    Generation(#[from] crate::generation::GenerationError),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new OpenAPI error
    pub fn openapi<S: Into<String>>(msg: S) -> Self {
        Self::OpenApi(msg.into())
    }
}
