//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while a generator renders its template set.
///
/// Both variants name the template that failed; rendering stops at the first
/// failure and no partial output is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("error generating {template}: {message}")]
    TemplateRender { template: String, message: String },

    #[error("error flushing output buffer for {template}: {message}")]
    OutputFlush { template: String, message: String },
}

impl GenerationError {
    /// Name of the template that failed
    pub fn template(&self) -> &str {
        match self {
            Self::TemplateRender { template, .. } | Self::OutputFlush { template, .. } => template,
        }
    }
}

/// Failure reported by a [`TemplateEngine`](crate::generation::TemplateEngine)
/// while looking up or executing a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build an engine error from any error, flattening its source chain so the
    /// root cause survives into the final message.
    pub fn from_chain(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
