//! File-based OpenAPI spec loader
//!
//! This loader handles only file I/O. The actual parsing is done by the OpenApiParser.

use async_trait::async_trait;
use tokio::fs;

use super::{OperationDefinition, OperationLoader, parse_document, parser::OpenApiParser};
use crate::core::error::Result;

/// Loads OpenAPI specifications from local files
pub struct FileOperationLoader;

impl FileOperationLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileOperationLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OperationLoader for FileOperationLoader {
    async fn load(&self, source: &str) -> Result<Vec<OperationDefinition>> {
        let content = fs::read_to_string(source).await?;
        let spec_value = parse_document(source, "", &content)?;
        OpenApiParser::new(spec_value).parse_operations()
    }
}
