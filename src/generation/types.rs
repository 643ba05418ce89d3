//! Core types for the generation domain
//!
//! Two families live here: the raw service description as it arrives from a
//! loader (shapes and operations keyed by their external names), and the
//! resolved model the pipeline builds from it (keyed by canonical names).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

/// Field name to resolved type reference, in declaration order.
pub type FieldMap = IndexMap<String, String>;

/// Shape name (external convention) to its definition.
pub type ShapeCatalog = IndexMap<String, ShapeDefinition>;

/// Operation key to its raw definition.
pub type OperationMap = IndexMap<String, RawOperation>;

/// Canonical type name to its resolved description.
pub type TypeModel = IndexMap<String, ResolvedType>;

/// Canonical operation name to its compiled description.
pub type OperationCatalog = IndexMap<String, ResolvedOperation>;

/// A complete service description document
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDescription {
    pub version: String,
    #[serde(default)]
    pub metadata: IndexMap<String, JsonValue>,
    #[serde(default)]
    pub operations: OperationMap,
    #[serde(default)]
    pub shapes: ShapeCatalog,
}

impl ServiceDescription {
    /// Metadata value as a string, if present and a string.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(JsonValue::as_str)
    }
}

/// Reference from one shape (or operation) to another shape by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRef {
    pub shape: String,
}

impl ShapeRef {
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

/// A named data-type definition in the service description
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapeDefinition {
    /// Shape kind tag: a primitive kind, `list` or `structure`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Element of a list shape.
    #[serde(default)]
    pub member: Option<ShapeRef>,
    /// Members of a structure shape, in declaration order.
    #[serde(default)]
    pub members: Option<IndexMap<String, ShapeRef>>,
    #[serde(default)]
    pub required: Option<Vec<String>>,
}

/// Classification of a [`ShapeDefinition`] kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind<'a> {
    Basic(&'a str),
    List,
    Structure,
    Unrecognized(&'a str),
}

impl ShapeDefinition {
    pub fn basic(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn list(element: impl Into<String>) -> Self {
        Self {
            kind: "list".to_string(),
            member: Some(ShapeRef::new(element)),
            ..Default::default()
        }
    }

    pub fn structure<I, K, V>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind: "structure".to_string(),
            members: Some(
                members
                    .into_iter()
                    .map(|(name, shape)| (name.into(), ShapeRef::new(shape)))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn with_required<I, S>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(required.into_iter().map(Into::into).collect());
        self
    }

    pub fn classify(&self) -> ShapeKind<'_> {
        match self.kind.as_str() {
            "list" => ShapeKind::List,
            "structure" => ShapeKind::Structure,
            kind if crate::generation::type_mapper::is_primitive_kind(kind) => {
                ShapeKind::Basic(kind)
            }
            kind => ShapeKind::Unrecognized(kind),
        }
    }
}

/// HTTP binding of a raw operation
#[derive(Debug, Clone, Deserialize)]
pub struct HttpBinding {
    pub method: String,
    #[serde(rename = "requestUri")]
    pub request_uri: String,
}

/// A named remote action as declared in the service description
#[derive(Debug, Clone, Deserialize)]
pub struct RawOperation {
    pub name: String,
    pub http: HttpBinding,
    #[serde(default)]
    pub input: Option<ShapeRef>,
    #[serde(default)]
    pub output: Option<ShapeRef>,
}

impl RawOperation {
    pub fn new(
        name: impl Into<String>,
        method: impl Into<String>,
        request_uri: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            http: HttpBinding {
                method: method.into(),
                request_uri: request_uri.into(),
            },
            input: None,
            output: None,
        }
    }

    pub fn with_input(mut self, shape: impl Into<String>) -> Self {
        self.input = Some(ShapeRef::new(shape));
        self
    }

    pub fn with_output(mut self, shape: impl Into<String>) -> Self {
        self.output = Some(ShapeRef::new(shape));
        self
    }
}

/// A shape after resolution
///
/// Structure fields hold canonical type references, never inlined types, so
/// mutually referential shapes resolve without cycle handling. An empty
/// structure is kept as an explicit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResolvedType {
    Basic(String),
    List(String),
    Structure(FieldMap),
}

impl ResolvedType {
    /// Fields of a structure type, `None` for basic and list types.
    pub fn fields(&self) -> Option<&FieldMap> {
        match self {
            ResolvedType::Structure(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn is_empty_structure(&self) -> bool {
        matches!(self, ResolvedType::Structure(fields) if fields.is_empty())
    }
}

/// Supported HTTP methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Token form used by templates.
    pub fn as_token(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Error returned when a method is outside the supported set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(UnsupportedMethod(s.to_string())),
        }
    }
}

/// An operation after compilation against the type model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOperation {
    /// Canonical operation name.
    pub name: String,
    pub input_type: String,
    /// `None` when the operation declares no output.
    pub output_type: Option<String>,
    pub http_method: HttpMethod,
    /// Request URI with placeholders replaced by field interpolations.
    pub uri_template: String,
    /// Request URI as declared.
    pub request_uri: String,
    /// Field names substituted into the URI, in order of appearance.
    pub path_params: Vec<String>,
    /// Resolved fields of the input structure.
    pub params: FieldMap,
}
