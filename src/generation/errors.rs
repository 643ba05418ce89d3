//! Error types for the generation domain

use thiserror::Error;

/// Errors that stop a generation run
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Operation '{operation}' uses unsupported HTTP method '{method}'")]
    UnknownHttpMethod { operation: String, method: String },

    #[error("Operation '{operation}' references input shape '{shape}' which is not in the type model")]
    MissingInputType { operation: String, shape: String },

    #[error("Operation '{operation}' input shape '{shape}' is not a structure")]
    InputNotStructure { operation: String, shape: String },

    #[error("Operation '{operation}' is missing required field '{field}'")]
    MissingOperationField { operation: String, field: String },

    #[error("Service description metadata is missing '{0}'")]
    MissingMetadata(String),

    #[error("Service description loading error: {0}")]
    LoadError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Post-processing error: {0}")]
    PostProcessingError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
