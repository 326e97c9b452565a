//! OpenAPI loading implementations

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;
pub mod parser;
pub mod types;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::core::error::{Error, Result};

pub use composite_loader::CompositeOperationLoader;
pub use file_loader::FileOperationLoader;
pub use http_loader::HttpOperationLoader;
pub use parser::{HttpMethod, OpenApiParser};
pub use types::{OperationDefinition, ResponseDefinition};

/// Loads the operation definitions of an OpenAPI document
#[async_trait]
pub trait OperationLoader: Send + Sync {
    /// Load and parse the document found at `source`
    async fn load(&self, source: &str) -> Result<Vec<OperationDefinition>>;
}

/// Parse document text as JSON or YAML, guided by content type and file extension
pub(crate) fn parse_document(source: &str, content_type: &str, content: &str) -> Result<JsonValue> {
    if content_type.contains("json") || source.ends_with(".json") {
        Ok(serde_json::from_str(content)?)
    } else if content_type.contains("yaml") || source.ends_with(".yaml") || source.ends_with(".yml")
    {
        Ok(serde_yaml::from_str(content)?)
    } else {
        // Try JSON first, then YAML
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::openapi(format!("Failed to parse OpenAPI spec: {e}")))
    }
}
