//! Tera-based template engine implementation

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;
use tera::{Context, Tera};
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::core::utils::{to_colon_params, to_proper_case, to_snake_case};
use crate::generation::{EngineError, TemplateEngine};

use super::embedded::embedded_templates;

/// Template engine backed by a fully loaded [`Tera`] instance.
///
/// Templates and filters are registered at construction; rendering only reads
/// the instance, so one engine can be shared by concurrent generators.
#[derive(Debug)]
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Engine loaded with the templates embedded in the binary
    pub fn embedded() -> Result<Self> {
        Self::from_raw(embedded_templates()?)
    }

    /// Engine loaded with every `*.tmpl` file below `dir`, named relative to `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Template directory not found: {}", dir.display()),
            )));
        }

        let dir_str = dir.to_str().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "Template path contains invalid UTF-8",
            )
        })?;
        let pattern = format!("{}/**/*.tmpl", dir_str.trim_end_matches('/'));
        debug!("TeraEngine - Creating Tera with pattern: {}", pattern);

        Ok(Self::with_filters(Tera::new(&pattern)?))
    }

    /// Engine loaded with the given `(name, content)` templates
    pub fn from_raw<I, N, C>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(Self::with_filters(tera))
    }

    fn with_filters(mut tera: Tera) -> Self {
        tera.register_filter("snake_case", string_filter("snake_case", to_snake_case));
        tera.register_filter("proper_case", string_filter("proper_case", to_proper_case));
        tera.register_filter("colon_params", string_filter("colon_params", to_colon_params));
        tera.register_filter("one_line", string_filter("one_line", one_line));
        Self { tera }
    }

    /// Names of all loaded templates, sorted
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

impl TemplateEngine for TeraEngine {
    fn render_to(
        &self,
        template_name: &str,
        data: &JsonValue,
        out: &mut dyn Write,
    ) -> std::result::Result<(), EngineError> {
        let context = to_tera_context(data).map_err(|e| EngineError::from_chain(&e))?;
        self.tera
            .render_to(template_name, &context, out)
            .map_err(|e| EngineError::from_chain(&e))
    }
}

/// Objects become the context itself; any other value is exposed as `data`
fn to_tera_context(data: &JsonValue) -> tera::Result<Context> {
    if data.is_object() {
        Context::from_value(data.clone())
    } else {
        let mut context = Context::new();
        context.insert("data", data);
        Ok(context)
    }
}

fn string_filter(
    name: &'static str,
    transform: fn(&str) -> String,
) -> impl tera::Filter + 'static {
    move |value: &JsonValue, _args: &HashMap<String, JsonValue>| -> tera::Result<JsonValue> {
        let text = value.as_str().ok_or_else(|| {
            tera::Error::msg(format!("Filter `{name}` expects a string, got {value}"))
        })?;
        Ok(JsonValue::String(transform(text)))
    }
}

/// Collapse multi-line text so it fits a single `//` comment line
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
