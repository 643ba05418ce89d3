//! File-based service description loader
//!
//! This loader handles only file I/O. Decoding is done by [`parse_service_description`].

use async_trait::async_trait;
use tokio::fs;

use super::parser::{DocumentFormat, parse_service_description};
use crate::generation::{GenerationError, ServiceDescription, ServiceLoader};

/// Loads service descriptions from local files
pub struct FileServiceLoader;

impl FileServiceLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileServiceLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceLoader for FileServiceLoader {
    async fn load(&self, source: &str) -> Result<ServiceDescription, GenerationError> {
        let content = fs::read_to_string(source)
            .await
            .map_err(GenerationError::IoError)?;

        tracing::debug!(source = %source, bytes = content.len(), "Read service description");
        parse_service_description(&content, DocumentFormat::from_source(source))
    }
}
