//! Core configuration, error types and naming helpers shared by every layer

pub mod config;
pub mod error;
pub mod utils;

pub use config::Configuration;
pub use error::{Error, Result};
