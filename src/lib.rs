//! servergen - generate Go web-server scaffolding from OpenAPI documents
//!
//! The [`generation`] layer maps a framework to its ordered template set and
//! renders it through a [`generation::TemplateEngine`]; [`infrastructure`]
//! provides the tera engine, the OpenAPI loaders and output writing.
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;

pub use crate::core::{Configuration, Error, Result};
