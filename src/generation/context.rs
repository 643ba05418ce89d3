//! Render context - everything a template can see

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::generation::{GenerationError, OperationCatalog, ServiceDescription, TypeModel, utils::normalize};

/// Metadata key naming the service endpoint, normalized into `servicename`.
pub const ENDPOINT_PREFIX_KEY: &str = "endpointPrefix";

/// Context passed to the template renderer
///
/// Field names are the template insertion points.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub modulename: String,
    pub version: String,
    pub metadata: IndexMap<String, JsonValue>,
    /// Metadata as `key: value` lines, each followed by a newline and a tab.
    pub metadata_string: String,
    pub servicename: String,
    pub types: TypeModel,
    pub functions: OperationCatalog,
}

impl RenderContext {
    /// Assemble a context from the service description and the resolved model.
    pub fn new(
        module_name: &str,
        description: &ServiceDescription,
        types: TypeModel,
        functions: OperationCatalog,
    ) -> Result<Self, GenerationError> {
        let endpoint_prefix = description.metadata_str(ENDPOINT_PREFIX_KEY).ok_or_else(|| {
            GenerationError::MissingMetadata(ENDPOINT_PREFIX_KEY.to_string())
        })?;

        Ok(Self {
            modulename: module_name.to_string(),
            version: description.version.clone(),
            metadata: description.metadata.clone(),
            metadata_string: metadata_string(&description.metadata),
            servicename: normalize(endpoint_prefix),
            types,
            functions,
        })
    }
}

fn metadata_string(metadata: &IndexMap<String, JsonValue>) -> String {
    metadata
        .iter()
        .map(|(key, value)| match value {
            JsonValue::String(s) => format!("{key}: {s}\n\t"),
            other => format!("{key}: {other}\n\t"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn description(metadata: JsonValue) -> ServiceDescription {
        serde_json::from_value(json!({
            "version": "2.0",
            "metadata": metadata,
            "operations": {},
            "shapes": {}
        }))
        .unwrap()
    }

    #[test]
    fn test_context_from_description() {
        let desc = description(json!({
            "apiVersion": "2015-05-28",
            "endpointPrefix": "iotData",
            "jsonVersion": 1.1
        }));

        let context =
            RenderContext::new("Bodh.Iot", &desc, TypeModel::new(), OperationCatalog::new())
                .unwrap();

        assert_eq!(context.modulename, "Bodh.Iot");
        assert_eq!(context.version, "2.0");
        assert_eq!(context.servicename, "iot_data");
        assert_eq!(
            context.metadata_string,
            "apiVersion: 2015-05-28\n\tendpointPrefix: iotData\n\tjsonVersion: 1.1\n\t"
        );
    }

    #[test]
    fn test_missing_endpoint_prefix() {
        let desc = description(json!({"apiVersion": "2015-05-28"}));

        let err = RenderContext::new("Bodh.Iot", &desc, TypeModel::new(), OperationCatalog::new())
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingMetadata(ref key) if key == "endpointPrefix"));
    }
}
