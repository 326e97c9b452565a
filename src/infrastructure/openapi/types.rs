//! Operation model handed to the generators

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One API operation as seen by the templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDefinition {
    /// Unique string used to identify the operation; becomes the handler name
    #[serde(rename = "id")]
    pub operation_id: String,
    /// Upper-case HTTP method (e.g., "GET")
    pub method: String,
    /// The path where this operation is defined (e.g., "/pets/{id}")
    pub path: String,
    /// A short summary of what the operation does
    pub summary: Option<String>,
    /// A verbose explanation of the operation behavior
    pub description: Option<String>,
    /// Declared responses, ordered by status code
    pub responses: Vec<ResponseDefinition>,
    /// First tag of the operation, used for grouping handlers
    pub tag: Option<String>,
    /// Raw operation object from the OpenAPI document
    pub spec: Option<JsonValue>,
}

/// One declared response of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDefinition {
    pub status_code: String,
    pub description: String,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

impl OperationDefinition {
    pub fn new(
        operation_id: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            operation_id: operation_id.into(),
            method: method.into().to_uppercase(),
            path: path.into(),
            summary: None,
            description: None,
            responses: Vec::new(),
            tag: None,
            spec: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_response(mut self, response: ResponseDefinition) -> Self {
        self.responses.push(response);
        self
    }
}

impl ResponseDefinition {
    pub fn new(status_code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status_code: status_code.into(),
            description: description.into(),
            reference: None,
        }
    }
}
