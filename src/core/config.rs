//! Generation configuration
//!
//! The configuration selects at most one server framework and tunes the output
//! shape. It is loaded from YAML or TOML and is passed to the templates as part
//! of the render context (`opts`), never through shared mutable state.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{Error, Result};
use crate::generation::Framework;

/// Top-level configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Go package name written at the top of the generated file
    pub package_name: String,
    /// Which server framework to generate for
    pub generate: GenerateOptions,
    /// Output shape options
    pub output_options: OutputOptions,
    /// Output file; stdout when absent
    pub output: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            package_name: "api".to_string(),
            generate: GenerateOptions::default(),
            output_options: OutputOptions::default(),
            output: None,
        }
    }
}

/// One flag per supported server framework; at most one may be set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub std_http_server: bool,
    pub gin_server: bool,
    pub iris_server: bool,
    pub echo_server: bool,
    pub chi_server: bool,
    pub fiber_server: bool,
    pub gorilla_server: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Split the server interface into one interface per operation tag
    pub group_by_tag: bool,
}

impl Configuration {
    /// Load configuration from a `.yml`, `.yaml` or `.toml` file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(Error::config(format!(
                "Unsupported configuration format: {} (expected .yaml, .yml or .toml)",
                path.display()
            ))),
        }
    }
}

impl GenerateOptions {
    /// Options with only `framework` selected
    pub fn from_framework(framework: Framework) -> Self {
        let mut options = Self::default();
        *options.flag_mut(framework) = true;
        options
    }

    /// The selected framework, `None` when no flag is set
    pub fn selected_framework(&self) -> Result<Option<Framework>> {
        let selected: Vec<Framework> = Framework::all().filter(|f| self.flag(*f)).collect();

        match selected.as_slice() {
            [] => Ok(None),
            [framework] => Ok(Some(*framework)),
            many => {
                let names: Vec<&str> = many.iter().map(Framework::as_str).collect();
                Err(Error::config(format!(
                    "Only one server framework can be generated at a time, got: {}",
                    names.join(", ")
                )))
            }
        }
    }

    fn flag(&self, framework: Framework) -> bool {
        match framework {
            Framework::StdHttp => self.std_http_server,
            Framework::Gin => self.gin_server,
            Framework::Iris => self.iris_server,
            Framework::Echo => self.echo_server,
            Framework::Chi => self.chi_server,
            Framework::Fiber => self.fiber_server,
            Framework::Gorilla => self.gorilla_server,
        }
    }

    fn flag_mut(&mut self, framework: Framework) -> &mut bool {
        match framework {
            Framework::StdHttp => &mut self.std_http_server,
            Framework::Gin => &mut self.gin_server,
            Framework::Iris => &mut self.iris_server,
            Framework::Echo => &mut self.echo_server,
            Framework::Chi => &mut self.chi_server,
            Framework::Fiber => &mut self.fiber_server,
            Framework::Gorilla => &mut self.gorilla_server,
        }
    }
}
