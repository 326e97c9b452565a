//! Template engine implementations

pub mod embedded;
pub mod tera_engine;

pub use embedded::{EmbeddedTemplates, embedded_templates};
pub use tera_engine::TeraEngine;
