//! Infrastructure layer - concrete implementations of domain ports

pub mod openapi;
pub mod output;
pub mod templates;

pub use templates::*;
