//! HTTP-based service description loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::parser::{DocumentFormat, parse_service_description};
use crate::generation::{GenerationError, ServiceDescription, ServiceLoader};

/// Loads service descriptions from HTTP/HTTPS URLs
pub struct HttpServiceLoader {
    client: Client,
}

impl HttpServiceLoader {
    pub fn new() -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| GenerationError::LoadError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ServiceLoader for HttpServiceLoader {
    async fn load(&self, source: &str) -> Result<ServiceDescription, GenerationError> {
        if !is_http_url(source) {
            return Err(GenerationError::LoadError(format!(
                "HttpServiceLoader only handles HTTP(S) URLs, got: {source}"
            )));
        }

        let response = self.client.get(source).send().await.map_err(|e| {
            GenerationError::LoadError(format!(
                "Failed to fetch service description from {source}: {e}"
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::LoadError(format!(
                "HTTP {status} when fetching {source}"
            )));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let content = response.text().await.map_err(|e| {
            GenerationError::LoadError(format!("Failed to read response body: {e}"))
        })?;

        let format = if content_type.contains("json") {
            DocumentFormat::Json
        } else if content_type.contains("yaml") {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::from_source(source)
        };

        tracing::debug!(source = %source, content_type = %content_type, "Fetched service description");
        parse_service_description(&content, format)
    }
}

/// True when `source` parses as an http or https URL.
pub fn is_http_url(source: &str) -> bool {
    url::Url::parse(source)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
