//! Service description document parsing
//!
//! Loaders only fetch bytes; decoding into a [`ServiceDescription`] happens here.

use crate::generation::{GenerationError, ServiceDescription};

/// Format hint derived from a file extension or content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Unknown,
}

impl DocumentFormat {
    /// Guess the format from a path or URL.
    pub fn from_source(source: &str) -> Self {
        if source.ends_with(".json") {
            DocumentFormat::Json
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Unknown
        }
    }
}

/// Parse a service description, trying JSON first then YAML when the format is unknown.
pub fn parse_service_description(
    content: &str,
    format: DocumentFormat,
) -> Result<ServiceDescription, GenerationError> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(GenerationError::SerializationError)
        }
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| GenerationError::LoadError(format!("Failed to parse YAML: {e}"))),
        DocumentFormat::Unknown => serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| {
                GenerationError::LoadError(format!("Failed to parse service description: {e}"))
            }),
    }
}
