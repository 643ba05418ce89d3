//! Request and response types for the application use cases

use std::path::PathBuf;

use crate::application::ValidationError;
use crate::config::GeneratorConfig;
use crate::generation::{Diagnostics, Interpolation, PipelineOptions, normalize};
use crate::infrastructure::TemplateSource;

/// Request to generate a client module
#[derive(Debug, Clone)]
pub struct GenerateClientRequest {
    pub module_name: String,
    /// Path or URL of the service description.
    pub source: String,
    pub template: TemplateSource,
    pub output_dir: PathBuf,
    pub file_extension: String,
    pub only_required: bool,
    pub interpolation: Interpolation,
}

impl GenerateClientRequest {
    /// Build a request from resolved configuration.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ValidationError> {
        let module_name = config
            .module_name
            .clone()
            .ok_or_else(|| ValidationError::MissingField("module_name".to_string()))?;
        let source = config
            .source
            .clone()
            .ok_or_else(|| ValidationError::MissingField("source".to_string()))?;

        let request = Self {
            module_name,
            source,
            template: TemplateSource::from_option(config.template.clone()),
            output_dir: config.output_dir.clone(),
            file_extension: config.file_extension.clone(),
            only_required: config.only_required,
            interpolation: config.interpolation.clone(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if normalize(self.module_name.trim()).is_empty() {
            return Err(ValidationError::EmptyModuleName);
        }
        if self.source.trim().is_empty() {
            return Err(ValidationError::MissingField("source".to_string()));
        }
        if self.file_extension.contains(['/', '\\']) {
            return Err(ValidationError::InvalidFileExtension(
                self.file_extension.clone(),
            ));
        }
        Ok(())
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            only_required: self.only_required,
            interpolation: self.interpolation.clone(),
        }
    }
}

/// Result of a client generation
#[derive(Debug, Clone)]
pub struct GenerateClientResponse {
    pub output_path: PathBuf,
    pub diagnostics: Diagnostics,
    pub type_count: usize,
    pub operation_count: usize,
    /// Whether the formatter ran successfully.
    pub formatted: bool,
}
