//! Operation compilation: resolves raw operations against the type model
//!
//! Each operation's input shape must resolve to a structure in the type model;
//! its fields become the operation params and supply the names substituted
//! into the request URI.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::diagnostics::{DiagnosticKind, Diagnostics};
use crate::generation::errors::GenerationError;
use crate::generation::types::{
    FieldMap, HttpMethod, OperationCatalog, OperationMap, RawOperation, ResolvedOperation,
    ResolvedType, TypeModel,
};
use crate::generation::utils::normalize;

/// Placeholder whose field is declared under a different name in the input shape.
const CA_CERTIFICATE_PLACEHOLDER: &str = "caCertificateId";
const CA_CERTIFICATE_FIELD: &str = "certificate_id";

/// Target-language syntax wrapped around a field name substituted into a URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpolation {
    pub prefix: String,
    pub suffix: String,
}

impl Interpolation {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn wrap(&self, name: &str) -> String {
        format!("{}{name}{}", self.prefix, self.suffix)
    }
}

impl Default for Interpolation {
    fn default() -> Self {
        Self::new("#{", "}")
    }
}

/// Compiles raw operations using the default interpolation syntax.
///
/// See [`resolve_operations_with`].
pub fn resolve_operations(
    raw_ops: &OperationMap,
    type_model: &TypeModel,
) -> Result<(OperationCatalog, Diagnostics), GenerationError> {
    resolve_operations_with(raw_ops, type_model, &Interpolation::default())
}

/// Compiles every raw operation into an [`OperationCatalog`].
///
/// Unmapped URI placeholders and duplicate operation names are recorded as
/// diagnostics. An unsupported HTTP method, a missing input, or an input
/// shape absent from `type_model` fails the whole run.
pub fn resolve_operations_with(
    raw_ops: &OperationMap,
    type_model: &TypeModel,
    interpolation: &Interpolation,
) -> Result<(OperationCatalog, Diagnostics), GenerationError> {
    let mut catalog = OperationCatalog::new();
    let mut diagnostics = Diagnostics::new();

    for raw in raw_ops.values() {
        let name = normalize(&raw.name);
        if catalog.contains_key(&name) {
            diagnostics.record(
                DiagnosticKind::DuplicateOperation,
                raw.name.as_str(),
                format!("operation name '{name}' already defined, keeping first"),
            );
            continue;
        }

        let operation = compile_operation(raw, &name, type_model, interpolation, &mut diagnostics)?;
        debug!(
            operation = %name,
            method = %operation.http_method,
            uri = %operation.uri_template,
            "Compiled operation"
        );
        catalog.insert(name, operation);
    }

    Ok((catalog, diagnostics))
}

fn compile_operation(
    raw: &RawOperation,
    name: &str,
    type_model: &TypeModel,
    interpolation: &Interpolation,
    diagnostics: &mut Diagnostics,
) -> Result<ResolvedOperation, GenerationError> {
    let http_method: HttpMethod =
        raw.http
            .method
            .parse()
            .map_err(|_| GenerationError::UnknownHttpMethod {
                operation: raw.name.clone(),
                method: raw.http.method.clone(),
            })?;

    let input = raw
        .input
        .as_ref()
        .ok_or_else(|| GenerationError::MissingOperationField {
            operation: raw.name.clone(),
            field: "input.shape".to_string(),
        })?;
    let input_type = normalize(&input.shape);

    let params = match type_model.get(&input_type) {
        Some(ResolvedType::Structure(fields)) => fields.clone(),
        Some(_) => {
            return Err(GenerationError::InputNotStructure {
                operation: raw.name.clone(),
                shape: input.shape.clone(),
            });
        }
        None => {
            return Err(GenerationError::MissingInputType {
                operation: raw.name.clone(),
                shape: input.shape.clone(),
            });
        }
    };

    let output_type = raw.output.as_ref().map(|output| normalize(&output.shape));

    let (uri_template, path_params) = compile_uri(
        name,
        &raw.http.request_uri,
        &params,
        interpolation,
        diagnostics,
    );

    Ok(ResolvedOperation {
        name: name.to_string(),
        input_type,
        output_type,
        http_method,
        uri_template,
        request_uri: raw.http.request_uri.clone(),
        path_params,
        params,
    })
}

/// Field name a URI placeholder refers to, if any.
///
/// The placeholder is matched against `fields` by canonical name. The
/// `caCertificateId` placeholder falls back to `certificate_id`.
pub fn get_param_name(placeholder: &str, fields: &FieldMap) -> Option<String> {
    let canonical = normalize(placeholder);
    if fields.contains_key(&canonical) {
        return Some(canonical);
    }
    if placeholder == CA_CERTIFICATE_PLACEHOLDER {
        return Some(CA_CERTIFICATE_FIELD.to_string());
    }
    None
}

/// Rewrites a request URI, replacing each `{placeholder}` with an
/// interpolation of the matching field name.
///
/// `+` markers (greedy path segments) are dropped, so `{key+}` is handled as a
/// single `{key}` placeholder. A placeholder with no matching field is
/// recorded and rendered as an empty string. Returns the rewritten URI and
/// the substituted field names in order.
pub fn compile_uri(
    operation: &str,
    request_uri: &str,
    fields: &FieldMap,
    interpolation: &Interpolation,
    diagnostics: &mut Diagnostics,
) -> (String, Vec<String>) {
    let stripped = request_uri.replace('+', "");
    let mut uri = String::with_capacity(stripped.len());
    let mut path_params = Vec::new();

    for fragment in split_uri(&stripped) {
        match fragment {
            UriFragment::Literal(text) => uri.push_str(text),
            UriFragment::Placeholder(placeholder) => match get_param_name(placeholder, fields) {
                Some(field) => {
                    uri.push_str(&interpolation.wrap(&field));
                    path_params.push(field);
                }
                None => diagnostics.record(
                    DiagnosticKind::MissingParamMapping,
                    operation,
                    format!("URI placeholder '{placeholder}' has no matching input field"),
                ),
            },
        }
    }

    (uri, path_params)
}

#[derive(Debug, PartialEq, Eq)]
enum UriFragment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Splits a URI on `{`/`}` delimiters, dropping empty fragments.
fn split_uri(uri: &str) -> Vec<UriFragment<'_>> {
    let mut fragments = Vec::new();
    let mut parts = uri.split('{');

    if let Some(head) = parts.next() {
        if !head.is_empty() {
            fragments.push(UriFragment::Literal(head));
        }
    }
    for part in parts {
        let (placeholder, rest) = part.split_once('}').unwrap_or((part, ""));
        if !placeholder.is_empty() {
            fragments.push(UriFragment::Placeholder(placeholder));
        }
        if !rest.is_empty() {
            fragments.push(UriFragment::Literal(rest));
        }
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::types::ResolvedType;

    fn field_map(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn model(entries: Vec<(&str, ResolvedType)>) -> TypeModel {
        entries
            .into_iter()
            .map(|(name, ty)| (name.to_string(), ty))
            .collect()
    }

    fn ops(entries: Vec<RawOperation>) -> OperationMap {
        entries
            .into_iter()
            .map(|op| (op.name.clone(), op))
            .collect()
    }

    #[test]
    fn test_split_uri() {
        assert_eq!(
            split_uri("/things/{thingName}/shadow"),
            vec![
                UriFragment::Literal("/things/"),
                UriFragment::Placeholder("thingName"),
                UriFragment::Literal("/shadow"),
            ]
        );
        assert_eq!(
            split_uri("/{a}{b}"),
            vec![
                UriFragment::Literal("/"),
                UriFragment::Placeholder("a"),
                UriFragment::Placeholder("b"),
            ]
        );
        assert!(split_uri("").is_empty());
    }

    #[test]
    fn test_compile_uri_substitutes_field_name() {
        let fields = field_map(&[("thing_name", "string")]);
        let mut diagnostics = Diagnostics::new();

        let (uri, params) = compile_uri(
            "get_thing_shadow",
            "/things/{thingName}/shadow",
            &fields,
            &Interpolation::default(),
            &mut diagnostics,
        );

        assert_eq!(uri, "/things/#{thing_name}/shadow");
        assert_eq!(params, vec!["thing_name"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_compile_uri_strips_greedy_marker() {
        let fields = field_map(&[("key", "object_key")]);
        let mut diagnostics = Diagnostics::new();

        let (uri, _) = compile_uri(
            "get_object",
            "/bucket/{key+}",
            &fields,
            &Interpolation::new("{", "}"),
            &mut diagnostics,
        );

        assert_eq!(uri, "/bucket/{key}");
    }

    #[test]
    fn test_ca_certificate_override() {
        let fields = field_map(&[("new_status", "ca_certificate_status")]);
        assert_eq!(
            get_param_name("caCertificateId", &fields),
            Some("certificate_id".to_string())
        );

        let mut diagnostics = Diagnostics::new();
        let (uri, _) = compile_uri(
            "update_ca_certificate",
            "/cacertificate/{caCertificateId}",
            &fields,
            &Interpolation::default(),
            &mut diagnostics,
        );
        assert_eq!(uri, "/cacertificate/#{certificate_id}");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ca_certificate_prefers_real_field() {
        let fields = field_map(&[("ca_certificate_id", "certificate_id")]);
        assert_eq!(
            get_param_name("caCertificateId", &fields),
            Some("ca_certificate_id".to_string())
        );
    }

    #[test]
    fn test_missing_placeholder_is_reported_and_left_empty() {
        let fields = field_map(&[("thing_name", "string")]);
        let mut diagnostics = Diagnostics::new();

        let (uri, params) = compile_uri(
            "attach_policy",
            "/target-policies/{policyName}/{thingName}",
            &fields,
            &Interpolation::default(),
            &mut diagnostics,
        );

        assert_eq!(uri, "/target-policies//#{thing_name}");
        assert_eq!(params, vec!["thing_name"]);
        let missing: Vec<_> = diagnostics
            .of_kind(DiagnosticKind::MissingParamMapping)
            .collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].subject, "attach_policy");
    }

    #[test]
    fn test_resolve_operations() {
        let types = model(vec![
            (
                "describe_thing_request",
                ResolvedType::Structure(field_map(&[("thing_name", "thing_name")])),
            ),
            (
                "describe_thing_response",
                ResolvedType::Structure(field_map(&[("thing_arn", "thing_arn")])),
            ),
        ]);
        let raw = ops(vec![
            RawOperation::new("DescribeThing", "GET", "/things/{thingName}")
                .with_input("DescribeThingRequest")
                .with_output("DescribeThingResponse"),
        ]);

        let (catalog, diagnostics) = resolve_operations(&raw, &types).unwrap();

        assert!(diagnostics.is_empty());
        let op = &catalog["describe_thing"];
        assert_eq!(op.name, "describe_thing");
        assert_eq!(op.input_type, "describe_thing_request");
        assert_eq!(op.output_type.as_deref(), Some("describe_thing_response"));
        assert_eq!(op.http_method, HttpMethod::Get);
        assert_eq!(op.uri_template, "/things/#{thing_name}");
        assert_eq!(op.request_uri, "/things/{thingName}");
        assert_eq!(op.params, field_map(&[("thing_name", "thing_name")]));
    }

    #[test]
    fn test_missing_output_is_none_not_named_type() {
        let types = model(vec![
            ("delete_thing_request", ResolvedType::Structure(FieldMap::new())),
            ("none", ResolvedType::Structure(FieldMap::new())),
        ]);
        let raw = ops(vec![
            RawOperation::new("DeleteThing", "DELETE", "/things").with_input("DeleteThingRequest"),
            RawOperation::new("Ping", "POST", "/ping")
                .with_input("DeleteThingRequest")
                .with_output("None"),
        ]);

        let (catalog, _) = resolve_operations(&raw, &types).unwrap();

        assert_eq!(catalog["delete_thing"].output_type, None);
        assert_eq!(catalog["ping"].output_type.as_deref(), Some("none"));
    }

    #[test]
    fn test_unknown_http_method_fails() {
        let types = model(vec![("req", ResolvedType::Structure(FieldMap::new()))]);
        let raw = ops(vec![RawOperation::new("HeadThing", "HEAD", "/things").with_input("Req")]);

        let err = resolve_operations(&raw, &types).unwrap_err();
        match err {
            GenerationError::UnknownHttpMethod { operation, method } => {
                assert_eq!(operation, "HeadThing");
                assert_eq!(method, "HEAD");
            }
            other => panic!("Expected UnknownHttpMethod, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_input_type_fails() {
        let raw = ops(vec![
            RawOperation::new("DescribeThing", "GET", "/things").with_input("DescribeThingRequest"),
        ]);

        let err = resolve_operations(&raw, &TypeModel::new()).unwrap_err();
        match err {
            GenerationError::MissingInputType { operation, shape } => {
                assert_eq!(operation, "DescribeThing");
                assert_eq!(shape, "DescribeThingRequest");
            }
            other => panic!("Expected MissingInputType, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_input_field_fails() {
        let raw = ops(vec![RawOperation::new("ListThings", "GET", "/things")]);

        let err = resolve_operations(&raw, &TypeModel::new()).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::MissingOperationField { ref field, .. } if field == "input.shape"
        ));
    }

    #[test]
    fn test_non_structure_input_fails() {
        let types = model(vec![("thing_name", ResolvedType::Basic("binary".into()))]);
        let raw = ops(vec![RawOperation::new("Odd", "GET", "/odd").with_input("ThingName")]);

        let err = resolve_operations(&raw, &types).unwrap_err();
        assert!(matches!(err, GenerationError::InputNotStructure { .. }));
    }

    #[test]
    fn test_duplicate_operation_keeps_first() {
        let types = model(vec![("req", ResolvedType::Structure(FieldMap::new()))]);
        let mut raw = OperationMap::new();
        raw.insert(
            "GetThing".to_string(),
            RawOperation::new("GetThing", "GET", "/first").with_input("Req"),
        );
        raw.insert(
            "get.thing".to_string(),
            RawOperation::new("get.thing", "POST", "/second").with_input("Req"),
        );

        let (catalog, diagnostics) = resolve_operations(&raw, &types).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["get_thing"].request_uri, "/first");
        assert_eq!(
            diagnostics
                .of_kind(DiagnosticKind::DuplicateOperation)
                .count(),
            1
        );
    }
}
