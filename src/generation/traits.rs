//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::path::Path;

use crate::generation::{GenerationError, RenderContext, ServiceDescription};

/// Loads service descriptions
#[async_trait]
pub trait ServiceLoader: Send + Sync {
    /// Load a service description from a source (path or URL)
    async fn load(&self, source: &str) -> Result<ServiceDescription, GenerationError>;
}

/// Renders a template against a render context
///
/// Rendering is pure: the same template and context always produce the same
/// document.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String, GenerationError>;
}

/// Post-processes a written output file
#[async_trait]
pub trait PostProcessor: Send + Sync {
    async fn process(&self, path: &Path) -> Result<(), GenerationError>;
}
