//! Generation infrastructure implementations

pub mod post_processor;
pub mod template_renderer;

pub use post_processor::FormatterPostProcessor;
pub use template_renderer::TeraTemplateRenderer;
