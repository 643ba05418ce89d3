//! Primitive shape kinds to target-language type names

use crate::generation::utils::normalize;

/// Type names provided by the target template itself.
///
/// A shape whose canonical name is one of these never becomes a type model
/// entry; references to it use the built-in directly.
pub const BUILTIN_TYPES: &[&str] = &[
    "binary", "boolean", "float", "integer", "map", "string", "number", "port",
];

/// Primitive shape kinds and the target type each maps to.
const PRIMITIVE_KINDS: &[(&str, &str)] = &[
    ("blob", "binary"),
    ("boolean", "boolean"),
    ("double", "float"),
    ("float", "float"),
    ("integer", "integer"),
    ("long", "integer"),
    ("map", "map"),
    ("string", "binary"),
    ("timestamp", "integer"),
];

/// Returns true when `name` is a built-in target type.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Returns true when `kind` is one of the known primitive shape kinds.
pub fn is_primitive_kind(kind: &str) -> bool {
    PRIMITIVE_KINDS.iter().any(|(k, _)| *k == kind)
}

/// Maps a primitive shape kind to its target type name.
///
/// Anything outside the primitive table is treated as a type reference and
/// passed through [`normalize`], so unusual or self-referential names degrade
/// to a canonical reference instead of failing.
///
/// # Examples
/// ```
/// use svcgen::generation::type_mapper::map_primitive;
///
/// assert_eq!(map_primitive("double"), "float");
/// assert_eq!(map_primitive("ThingAttribute"), "thing_attribute");
/// ```
pub fn map_primitive(kind: &str) -> String {
    PRIMITIVE_KINDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, target)| (*target).to_string())
        .unwrap_or_else(|| normalize(kind))
}
