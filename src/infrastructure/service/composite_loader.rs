//! Composite loader that picks the HTTP or file loader by source

use async_trait::async_trait;

use super::http_loader::is_http_url;
use super::{FileServiceLoader, HttpServiceLoader};
use crate::generation::{GenerationError, ServiceDescription, ServiceLoader};

/// Dispatches to the HTTP loader for URLs and the file loader otherwise
pub struct CompositeServiceLoader {
    http: Box<dyn ServiceLoader>,
    file: Box<dyn ServiceLoader>,
}

impl CompositeServiceLoader {
    pub fn new() -> Result<Self, GenerationError> {
        Ok(Self {
            http: Box::new(HttpServiceLoader::new()?),
            file: Box::new(FileServiceLoader::new()),
        })
    }
}

#[async_trait]
impl ServiceLoader for CompositeServiceLoader {
    async fn load(&self, source: &str) -> Result<ServiceDescription, GenerationError> {
        if is_http_url(source) {
            tracing::debug!("CompositeServiceLoader: Using HTTP loader for {source}");
            self.http.load(source).await
        } else {
            tracing::debug!("CompositeServiceLoader: Using file loader for {source}");
            self.file.load(source).await
        }
    }
}
