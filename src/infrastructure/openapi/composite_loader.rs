//! Composite loader that picks the HTTP or file loader from the source string

use async_trait::async_trait;

use super::{FileOperationLoader, HttpOperationLoader, OperationDefinition, OperationLoader};
use crate::core::error::Result;

/// Dispatches to the HTTP loader for URLs and to the file loader otherwise
pub struct CompositeOperationLoader {
    http: HttpOperationLoader,
    file: FileOperationLoader,
}

impl CompositeOperationLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: HttpOperationLoader::new()?,
            file: FileOperationLoader::new(),
        })
    }
}

#[async_trait]
impl OperationLoader for CompositeOperationLoader {
    async fn load(&self, source: &str) -> Result<Vec<OperationDefinition>> {
        tracing::debug!("CompositeOperationLoader: Loading from source: {source}");

        if source.starts_with("http://") || source.starts_with("https://") {
            tracing::debug!("CompositeOperationLoader: Using HTTP loader");
            self.http.load(source).await
        } else {
            tracing::debug!("CompositeOperationLoader: Using file loader");
            self.file.load(source).await
        }
    }
}
