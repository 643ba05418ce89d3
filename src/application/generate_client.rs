//! Use case for generating a client module

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::{
    ApplicationError, GenerateClientRequest, GenerateClientResponse, OutputService,
};
use crate::generation::{
    GenerationPipeline, PostProcessor, ServiceLoader, TemplateRenderer, utils::output_file_name,
};

/// Use case for generating a client module from a service description
pub struct GenerateClientUseCase {
    loader: Arc<dyn ServiceLoader>,
    renderer: Arc<dyn TemplateRenderer>,
    output_service: Arc<dyn OutputService>,
    post_processor: Option<Arc<dyn PostProcessor>>,
}

impl GenerateClientUseCase {
    pub fn new(
        loader: Arc<dyn ServiceLoader>,
        renderer: Arc<dyn TemplateRenderer>,
        output_service: Arc<dyn OutputService>,
        post_processor: Option<Arc<dyn PostProcessor>>,
    ) -> Self {
        Self {
            loader,
            renderer,
            output_service,
            post_processor,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateClientRequest,
    ) -> Result<GenerateClientResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Load template and service description
        let template = request.template.load().await?;
        info!(template = %request.template, source = %request.source, "Loading service description");
        let description = self.loader.load(&request.source).await?;

        // 3. Run the generation pipeline
        let pipeline = GenerationPipeline::new(self.renderer.clone(), request.pipeline_options());
        let output = pipeline.generate(&description, &request.module_name, &template)?;

        // 4. Write the document
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;
        let output_path = request
            .output_dir
            .join(output_file_name(&request.module_name, &request.file_extension));
        self.output_service
            .write_document(&output_path, &output.document)
            .await?;
        info!(path = %output_path.display(), "Wrote client module");

        // 5. Format; a formatter failure leaves the unformatted file in place
        let formatted = match &self.post_processor {
            Some(processor) => match processor.process(&output_path).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(path = %output_path.display(), error = %e, "Formatter failed, output left unformatted");
                    false
                }
            },
            None => false,
        };

        Ok(GenerateClientResponse {
            output_path,
            diagnostics: output.diagnostics,
            type_count: output.type_count,
            operation_count: output.operation_count,
            formatted,
        })
    }
}
