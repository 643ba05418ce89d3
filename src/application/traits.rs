//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;

/// Service for writing generated documents to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write a document, creating parent directories as needed
    async fn write_document(&self, path: &Path, content: &str) -> Result<(), ApplicationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError>;
}
