//! Generation domain module - dispatches a framework's template set to the engine
//!
//! A [`ServerGenerator`] renders an ordered list of templates against one data
//! value and joins the fragments into a single source file. Each supported
//! framework has a fixed three-stage template set (interface, adapter glue,
//! route registration); [`select_generator`] maps the configured framework to
//! its generator, falling back to [`NoOpGenerator`] when none is selected.

pub mod context;
pub mod errors;
pub mod factory;
pub mod generator;
pub mod traits;
pub mod types;

pub use context::*;
pub use errors::*;
pub use factory::*;
pub use generator::*;
pub use traits::*;
pub use types::*;

// Re-export the operation model consumed by the generators
pub use crate::infrastructure::openapi::{OperationDefinition, ResponseDefinition};
