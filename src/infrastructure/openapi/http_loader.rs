//! HTTP-based OpenAPI spec loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{OperationDefinition, OperationLoader, parse_document, parser::OpenApiParser};
use crate::core::error::{Error, Result};

/// Loads OpenAPI specifications from HTTP/HTTPS URLs
pub struct HttpOperationLoader {
    client: Client,
}

impl HttpOperationLoader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::openapi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl OperationLoader for HttpOperationLoader {
    async fn load(&self, source: &str) -> Result<Vec<OperationDefinition>> {
        if !source.starts_with("http://") && !source.starts_with("https://") {
            return Err(Error::openapi(format!(
                "HttpOperationLoader only handles HTTP(S) URLs, got: {source}"
            )));
        }

        let response = self.client.get(source).send().await.map_err(|e| {
            Error::openapi(format!("Failed to fetch OpenAPI spec from {source}: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::openapi(format!("HTTP {status} when fetching {source}")));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let content = response
            .text()
            .await
            .map_err(|e| Error::openapi(format!("Failed to read response body: {e}")))?;

        let spec_value = parse_document(source, &content_type, &content)?;
        OpenApiParser::new(spec_value).parse_operations()
    }
}
