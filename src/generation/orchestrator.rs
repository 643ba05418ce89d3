//! Generation orchestration - runs the resolve, compile and render stages

use std::sync::Arc;
use tracing::info;

use crate::generation::{
    Diagnostics, GenerationError, Interpolation, RenderContext, ServiceDescription,
    TemplateRenderer, resolve_operations_with, resolve_shapes,
};

/// Options controlling how the service description is resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Keep only required structure members.
    pub only_required: bool,
    pub interpolation: Interpolation,
}

/// Result of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub document: String,
    pub diagnostics: Diagnostics,
    pub type_count: usize,
    pub operation_count: usize,
}

/// Runs one generation: shapes, then operations, then the template
///
/// Every run builds its own type model and operation catalog; nothing is
/// kept between calls to [`GenerationPipeline::generate`].
pub struct GenerationPipeline {
    renderer: Arc<dyn TemplateRenderer>,
    options: PipelineOptions,
}

impl GenerationPipeline {
    pub fn new(renderer: Arc<dyn TemplateRenderer>, options: PipelineOptions) -> Self {
        Self { renderer, options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Generate a client module for `description`.
    pub fn generate(
        &self,
        description: &ServiceDescription,
        module_name: &str,
        template: &str,
    ) -> Result<GenerationOutput, GenerationError> {
        // 1. Resolve shapes into the type model
        let (types, mut diagnostics) = resolve_shapes(&description.shapes, self.options.only_required);
        info!(
            shapes = description.shapes.len(),
            types = types.len(),
            "Resolved shape catalog"
        );

        // 2. Compile operations against the complete type model
        let (functions, operation_diagnostics) = resolve_operations_with(
            &description.operations,
            &types,
            &self.options.interpolation,
        )?;
        diagnostics.extend(operation_diagnostics);
        info!(operations = functions.len(), "Compiled operation catalog");

        let type_count = types.len();
        let operation_count = functions.len();

        // 3. Render
        let context = RenderContext::new(module_name, description, types, functions)?;
        let document = self.renderer.render(template, &context)?;

        Ok(GenerationOutput {
            document,
            diagnostics,
            type_count,
            operation_count,
        })
    }
}
