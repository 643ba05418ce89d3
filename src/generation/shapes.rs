//! Shape resolution: builds the type model from the shape catalog
//!
//! Each shape is resolved on its own. Member and element types are stored as
//! canonical references rather than inlined definitions, so catalog order and
//! mutual references between shapes do not affect the result.

use tracing::debug;

use crate::generation::diagnostics::{DiagnosticKind, Diagnostics};
use crate::generation::type_mapper::{is_builtin, map_primitive};
use crate::generation::types::{FieldMap, ResolvedType, ShapeCatalog, ShapeDefinition, ShapeKind, TypeModel};
use crate::generation::utils::normalize;

/// Resolves every shape in `catalog` into a [`TypeModel`].
///
/// With `only_required` set, a structure keeps only its declared required
/// members, and a structure declaring none resolves to an empty structure.
/// Otherwise every member is kept.
///
/// Shapes whose canonical name is a built-in type, or was already resolved
/// under an earlier shape, are skipped. Shapes of an unrecognized kind are
/// skipped and reported in the returned diagnostics.
pub fn resolve_shapes(catalog: &ShapeCatalog, only_required: bool) -> (TypeModel, Diagnostics) {
    let mut types = TypeModel::new();
    let mut diagnostics = Diagnostics::new();

    for (name, shape) in catalog {
        let canonical = normalize(name);
        if is_builtin(&canonical) {
            debug!(shape = %name, "Shape shadows a built-in type, using the built-in");
            continue;
        }
        if types.contains_key(&canonical) {
            debug!(shape = %name, canonical = %canonical, "Type already resolved, keeping first");
            continue;
        }

        let resolved = match shape.classify() {
            ShapeKind::Basic(kind) => ResolvedType::Basic(map_primitive(kind)),
            ShapeKind::List => match &shape.member {
                Some(element) => ResolvedType::List(map_primitive(&element.shape)),
                None => {
                    diagnostics.record(
                        DiagnosticKind::MalformedShape,
                        name.as_str(),
                        "list shape has no member shape",
                    );
                    continue;
                }
            },
            ShapeKind::Structure => ResolvedType::Structure(resolve_structure(
                name,
                shape,
                only_required,
                &mut diagnostics,
            )),
            ShapeKind::Unrecognized(kind) => {
                diagnostics.record(
                    DiagnosticKind::UnrecognizedShapeKind,
                    name.as_str(),
                    format!("shape kind '{kind}' is not supported, skipping"),
                );
                continue;
            }
        };

        debug!(shape = %name, canonical = %canonical, resolved = ?resolved, "Resolved shape");
        types.insert(canonical, resolved);
    }

    (types, diagnostics)
}

fn resolve_structure(
    name: &str,
    shape: &ShapeDefinition,
    only_required: bool,
    diagnostics: &mut Diagnostics,
) -> FieldMap {
    let mut fields = FieldMap::new();
    let members = shape.members.as_ref();

    if only_required {
        for field in shape.required.iter().flatten() {
            match members.and_then(|members| members.get(field)) {
                Some(member) => {
                    fields
                        .entry(normalize(field))
                        .or_insert_with(|| normalize(&member.shape));
                }
                None => diagnostics.record(
                    DiagnosticKind::MalformedShape,
                    name,
                    format!("required member '{field}' is not declared, skipping"),
                ),
            }
        }
    } else {
        for (field, member) in members.into_iter().flatten() {
            fields
                .entry(normalize(field))
                .or_insert_with(|| normalize(&member.shape));
        }
    }

    fields
}
