//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::{ApplicationError, OutputService};

/// Output service that writes rendered documents to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_document(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.ensure_directory(parent).await?;
        }

        let mut file = fs::File::create(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create file {}: {}",
                path.display(),
                e
            ))
        })?;

        file.write_all(content.as_bytes()).await.map_err(|e| {
            ApplicationError::OutputError(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.flush().await.map_err(|e| {
            ApplicationError::OutputError(format!("Failed to flush file {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote document");
        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::create_dir_all(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })
    }
}
