//! Port interfaces for the generation domain

use serde_json::Value as JsonValue;
use std::io::Write;

use crate::generation::{EngineError, GenerationError};

/// Named-template repository able to render a template against a data value.
///
/// Template names are opaque keys to callers; the built-in ones follow the
/// `<framework>/<framework>-<stage>.tmpl` convention.
pub trait TemplateEngine: Send + Sync {
    /// Render `template_name` against `data`, writing the text into `out`
    fn render_to(
        &self,
        template_name: &str,
        data: &JsonValue,
        out: &mut dyn Write,
    ) -> Result<(), EngineError>;
}

/// Produces the server scaffolding for one target framework
pub trait ServerGenerator: Send + Sync {
    /// Render every template of this generator against `data` and join the results
    fn generate(
        &self,
        engine: &dyn TemplateEngine,
        data: &JsonValue,
    ) -> Result<String, GenerationError>;

    /// Template identifiers rendered by this generator, in output order
    fn templates(&self) -> &[String];
}
