//! Core types for the generation domain

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::core::error::Error;
use crate::generation::TemplateGenerator;

const STD_HTTP_TEMPLATES: [&str; 3] = [
    "stdhttp/std-http-interface.tmpl",
    "stdhttp/std-http-middleware.tmpl",
    "stdhttp/std-http-handler.tmpl",
];

const GIN_TEMPLATES: [&str; 3] = [
    "gin/gin-interface.tmpl",
    "gin/gin-wrappers.tmpl",
    "gin/gin-register.tmpl",
];

const IRIS_TEMPLATES: [&str; 3] = [
    "iris/iris-interface.tmpl",
    "iris/iris-middleware.tmpl",
    "iris/iris-handler.tmpl",
];

const ECHO_TEMPLATES: [&str; 3] = [
    "echo/echo-interface.tmpl",
    "echo/echo-wrappers.tmpl",
    "echo/echo-register.tmpl",
];

const CHI_TEMPLATES: [&str; 3] = [
    "chi/chi-interface.tmpl",
    "chi/chi-middleware.tmpl",
    "chi/chi-handler.tmpl",
];

const FIBER_TEMPLATES: [&str; 3] = [
    "fiber/fiber-interface.tmpl",
    "fiber/fiber-middleware.tmpl",
    "fiber/fiber-handler.tmpl",
];

const GORILLA_TEMPLATES: [&str; 3] = [
    "gorilla/gorilla-interface.tmpl",
    "gorilla/gorilla-middleware.tmpl",
    "gorilla/gorilla-register.tmpl",
];

/// Supported target web-server frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    /// Go standard library `net/http`
    StdHttp,
    Gin,
    Iris,
    Echo,
    Chi,
    Fiber,
    Gorilla,
}

impl Framework {
    /// Returns the framework identifier as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::StdHttp => "std-http",
            Framework::Gin => "gin",
            Framework::Iris => "iris",
            Framework::Echo => "echo",
            Framework::Chi => "chi",
            Framework::Fiber => "fiber",
            Framework::Gorilla => "gorilla",
        }
    }

    /// Get the display name for this framework
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::StdHttp => "net/http",
            Framework::Gin => "Gin",
            Framework::Iris => "Iris",
            Framework::Echo => "Echo",
            Framework::Chi => "Chi",
            Framework::Fiber => "Fiber",
            Framework::Gorilla => "Gorilla",
        }
    }

    /// Template namespace (directory) holding this framework's templates
    pub fn namespace(&self) -> &'static str {
        match self {
            Framework::StdHttp => "stdhttp",
            other => other.as_str(),
        }
    }

    /// The fixed interface, adapter and registration templates, in output order
    pub fn template_set(&self) -> TemplateSet {
        let templates: &[&str] = match self {
            Framework::StdHttp => &STD_HTTP_TEMPLATES,
            Framework::Gin => &GIN_TEMPLATES,
            Framework::Iris => &IRIS_TEMPLATES,
            Framework::Echo => &ECHO_TEMPLATES,
            Framework::Chi => &CHI_TEMPLATES,
            Framework::Fiber => &FIBER_TEMPLATES,
            Framework::Gorilla => &GORILLA_TEMPLATES,
        };
        TemplateSet::from_static(self.as_str(), templates)
    }

    /// Go import paths the generated code refers to
    pub fn imports(&self) -> &'static [&'static str] {
        match self {
            Framework::StdHttp => &["net/http"],
            Framework::Gin => &["github.com/gin-gonic/gin"],
            Framework::Iris => &["github.com/kataras/iris/v12"],
            Framework::Echo => &["github.com/labstack/echo/v4"],
            Framework::Chi => &["net/http", "github.com/go-chi/chi/v5"],
            Framework::Fiber => &["github.com/gofiber/fiber/v2"],
            Framework::Gorilla => &["net/http", "github.com/gorilla/mux"],
        }
    }

    /// Build the generator preloaded with this framework's template set
    pub fn generator(&self) -> TemplateGenerator {
        match self {
            Framework::StdHttp => TemplateGenerator::std_http(),
            Framework::Gin => TemplateGenerator::gin(),
            Framework::Iris => TemplateGenerator::iris(),
            Framework::Echo => TemplateGenerator::echo(),
            Framework::Chi => TemplateGenerator::chi(),
            Framework::Fiber => TemplateGenerator::fiber(),
            Framework::Gorilla => TemplateGenerator::gorilla(),
        }
    }

    /// Get all supported frameworks
    pub fn all() -> impl Iterator<Item = Self> {
        use Framework::*;
        [StdHttp, Gin, Iris, Echo, Chi, Fiber, Gorilla].into_iter()
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "std-http" | "stdhttp" | "std_http" | "nethttp" | "net/http" => Ok(Framework::StdHttp),
            "gin" => Ok(Framework::Gin),
            "iris" => Ok(Framework::Iris),
            "echo" => Ok(Framework::Echo),
            "chi" => Ok(Framework::Chi),
            "fiber" => Ok(Framework::Fiber),
            "gorilla" | "mux" => Ok(Framework::Gorilla),
            _ => Err(Error::config(format!("Unknown framework: {s}"))),
        }
    }
}

/// Ordered list of template identifiers making up one generated output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    name: String,
    templates: Vec<String>,
}

impl TemplateSet {
    /// Create a template set; identifiers must be unique within the set
    pub fn new<I, S>(name: impl Into<String>, templates: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let templates: Vec<String> = templates.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        if let Some(duplicate) = templates.iter().find(|t| !seen.insert(t.as_str())) {
            return Err(Error::config(format!(
                "Template set '{name}' lists '{duplicate}' more than once"
            )));
        }

        Ok(Self { name, templates })
    }

    fn from_static(name: &str, templates: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(String::as_str)
    }
}
