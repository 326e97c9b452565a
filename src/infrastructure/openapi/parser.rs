//! OpenAPI document parser
//!
//! Walks the `paths` object of an OpenAPI 3 (or Swagger 2) document and builds
//! one [`OperationDefinition`] per operation. Paths keep their document order
//! and methods are visited in a fixed order, so the same document always yields
//! the same operation sequence.

use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::core::error::{Error, Result};
use crate::core::utils::{to_go_identifier, to_proper_case};
use crate::infrastructure::openapi::{OperationDefinition, ResponseDefinition};

/// HTTP methods an OpenAPI path item can declare, in visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Get all HTTP methods as an array
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Post,
            HttpMethod::Delete,
            HttpMethod::Options,
            HttpMethod::Head,
            HttpMethod::Patch,
            HttpMethod::Trace,
        ]
    }

    /// Key used for this method inside an OpenAPI path item
    pub fn key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key().to_uppercase())
    }
}

/// Extracts operation definitions from a parsed OpenAPI document
pub struct OpenApiParser {
    /// The raw JSON value of the OpenAPI spec
    pub json: JsonValue,
}

impl OpenApiParser {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse every operation of the document
    pub fn parse_operations(&self) -> Result<Vec<OperationDefinition>> {
        if self.json.get("openapi").is_none() && self.json.get("swagger").is_none() {
            return Err(Error::openapi("Missing OpenAPI version"));
        }

        let paths = self
            .json
            .get("paths")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| Error::openapi("Missing 'paths' object"))?;

        let operations = paths
            .iter()
            .flat_map(|(path, path_item)| {
                HttpMethod::all().iter().filter_map(move |method| {
                    path_item
                        .get(method.key())
                        .filter(|item| item.is_object())
                        .map(|method_item| Self::build_operation(path, *method, method_item))
                })
            })
            .collect::<Vec<_>>();

        ensure_unique_ids(&operations)?;

        tracing::debug!("OpenAPI parser found {} operations", operations.len());
        Ok(operations)
    }

    fn build_operation(
        path: &str,
        method: HttpMethod,
        method_item: &JsonValue,
    ) -> OperationDefinition {
        let operation_id = method_item
            .get("operationId")
            .and_then(JsonValue::as_str)
            .and_then(to_go_identifier)
            .unwrap_or_else(|| derive_operation_id(method, path));

        let text = |key: &str| {
            method_item
                .get(key)
                .and_then(JsonValue::as_str)
                .map(String::from)
        };

        let tag = method_item
            .get("tags")
            .and_then(JsonValue::as_array)
            .and_then(|tags| tags.iter().find_map(JsonValue::as_str))
            .map(String::from);

        OperationDefinition {
            operation_id,
            method: method.to_string(),
            path: path.to_string(),
            summary: text("summary"),
            description: text("description"),
            responses: Self::extract_responses(method_item),
            tag,
            spec: Some(method_item.clone()),
        }
    }

    fn extract_responses(method_item: &JsonValue) -> Vec<ResponseDefinition> {
        let mut responses: Vec<ResponseDefinition> = method_item
            .get("responses")
            .and_then(JsonValue::as_object)
            .map(|responses| {
                responses
                    .iter()
                    .map(|(status, response)| ResponseDefinition {
                        status_code: status.clone(),
                        description: response
                            .get("description")
                            .and_then(JsonValue::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        reference: response
                            .get("$ref")
                            .and_then(JsonValue::as_str)
                            .map(String::from),
                    })
                    .collect()
            })
            .unwrap_or_default();

        // "default" sorts after numeric codes
        responses.sort_by(|a, b| a.status_code.cmp(&b.status_code));
        responses
    }
}

/// Build a handler name for an operation without `operationId`, e.g. `GetPetsId`
fn derive_operation_id(method: HttpMethod, path: &str) -> String {
    to_proper_case(&format!("{} {}", method.key(), path))
}

/// Handler names become Go methods, so two operations may not share one
fn ensure_unique_ids(operations: &[OperationDefinition]) -> Result<()> {
    let mut seen: HashMap<&str, &OperationDefinition> = HashMap::new();

    for operation in operations {
        if let Some(first) = seen.insert(operation.operation_id.as_str(), operation) {
            return Err(Error::openapi(format!(
                "duplicate operation id {}: {} {} and {} {}",
                operation.operation_id, first.method, first.path, operation.method, operation.path
            )));
        }
    }
    Ok(())
}
