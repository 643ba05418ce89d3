//! Template sources: the embedded default or a file on disk

use std::path::PathBuf;
use tokio::fs;

use crate::generation::GenerationError;

/// Default Elixir client template, embedded at compile time
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../templates/elixir/client.ex.tera");

/// Where the client template comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    File(PathBuf),
}

impl TemplateSource {
    /// A file source when a path is given, the embedded default otherwise.
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => TemplateSource::File(path),
            None => TemplateSource::Embedded,
        }
    }

    /// Read the template text.
    pub async fn load(&self) -> Result<String, GenerationError> {
        match self {
            TemplateSource::Embedded => Ok(DEFAULT_TEMPLATE.to_string()),
            TemplateSource::File(path) => fs::read_to_string(path).await.map_err(|e| {
                GenerationError::InvalidConfiguration(format!(
                    "Failed to read template {}: {e}",
                    path.display()
                ))
            }),
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Embedded => write!(f, "embedded"),
            TemplateSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
