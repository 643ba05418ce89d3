//! Tera-based template renderer implementation

use std::collections::HashSet;
use std::error::Error as StdError;
use tera::{Context, Tera, Value};

use crate::generation::{BUILTIN_TYPES, GenerationError, RenderContext, TemplateRenderer};

/// Name the raw template is registered under
const TEMPLATE_NAME: &str = "client";

/// Tera test (`ref is known_type`) that holds when a type reference names a
/// resolved type or a built-in
pub const KNOWN_TYPE_TEST: &str = "known_type";

/// Tera-based template renderer
///
/// A fresh engine is built for every render, so nothing carries over between
/// documents.
pub struct TeraTemplateRenderer;

impl TeraTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String, GenerationError> {
        let mut tera = Tera::default();
        tera.register_tester(KNOWN_TYPE_TEST, known_type_tester(context));
        tera.add_raw_template(TEMPLATE_NAME, template)
            .map_err(|e| {
                GenerationError::RenderError(format!("Failed to add template: {}", error_chain(&e)))
            })?;

        let tera_context = Context::from_serialize(context).map_err(|e| {
            GenerationError::RenderError(format!("Failed to build template context: {e}"))
        })?;

        tera.render(TEMPLATE_NAME, &tera_context).map_err(|e| {
            GenerationError::RenderError(format!("Failed to render template: {}", error_chain(&e)))
        })
    }
}

/// References to skipped shapes are not in the type model.
fn known_type_tester(context: &RenderContext) -> impl tera::Test + 'static {
    let known: HashSet<String> = context
        .types
        .keys()
        .cloned()
        .chain(BUILTIN_TYPES.iter().map(|name| name.to_string()))
        .collect();

    move |value: Option<&Value>, _args: &[Value]| -> tera::Result<bool> {
        Ok(value
            .and_then(Value::as_str)
            .is_some_and(|name| known.contains(name)))
    }
}

/// Tera keeps the useful part of its errors in the source chain.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{OperationCatalog, ResolvedType, ServiceDescription, TypeModel};
    use serde_json::json;

    fn context() -> RenderContext {
        let description: ServiceDescription = serde_json::from_value(json!({
            "version": "2.0",
            "metadata": {"endpointPrefix": "iot", "protocol": "rest-json"}
        }))
        .unwrap();

        let mut types = TypeModel::new();
        types.insert("thing_name".into(), ResolvedType::Basic("binary".into()));
        types.insert("thing_names".into(), ResolvedType::List("thing_name".into()));

        RenderContext::new("Bodh.Iot", &description, types, OperationCatalog::new()).unwrap()
    }

    #[test]
    fn test_render_context_keys() {
        let template = "{{ modulename }} {{ version }} :{{ servicename }} {{ metadata.protocol }}";

        let rendered = TeraTemplateRenderer::new()
            .render(template, &context())
            .unwrap();

        assert_eq!(rendered, "Bodh.Iot 2.0 :iot rest-json");
    }

    #[test]
    fn test_render_types_in_model_order() {
        let template =
            "{% for name, type in types %}{{ name }}={{ type.kind }}:{{ type.value }};{% endfor %}";

        let rendered = TeraTemplateRenderer::new()
            .render(template, &context())
            .unwrap();

        assert_eq!(
            rendered,
            "thing_name=basic:binary;thing_names=list:thing_name;"
        );
    }

    #[test]
    fn test_render_is_not_html_escaped() {
        let rendered = TeraTemplateRenderer::new()
            .render("{{ metadata_string }}<&>", &context())
            .unwrap();

        assert_eq!(rendered, "endpointPrefix: iot\n\tprotocol: rest-json\n\t<&>");
    }

    #[test]
    fn test_known_type_test() {
        let template = "{% for name in ['thing_name', 'binary', 'event_stream'] %}\
                        {% if name is known_type %}{{ name }}(){% else %}term(){% endif %};\
                        {% endfor %}";

        let rendered = TeraTemplateRenderer::new()
            .render(template, &context())
            .unwrap();

        assert_eq!(rendered, "thing_name();binary();term();");
    }

    #[test]
    fn test_render_invalid_template() {
        let result = TeraTemplateRenderer::new().render("{% for %}", &context());
        assert!(matches!(result, Err(GenerationError::RenderError(_))));

        let result = TeraTemplateRenderer::new().render("{{ missing.value }}", &context());
        match result {
            Err(GenerationError::RenderError(msg)) => assert!(msg.contains("Failed to render")),
            other => panic!("Expected RenderError, got {other:?}"),
        }
    }
}
