//! Identifier transformation utilities for code generation
//!
//! Every external identifier (shape names, operation names, member names,
//! URI placeholders) passes through [`normalize`] before it becomes a key in
//! the type model or the operation catalog.

use once_cell::sync::Lazy;
use regex::Regex;

/// Boundary between a lowercase run and the uppercase letter that follows it.
static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z]+)([A-Z])").expect("case boundary pattern is valid"));

/// Converts an external identifier to its canonical snake_case form.
///
/// A `_` is inserted between a lowercase run and the following uppercase
/// letter, the result is lowercased, and `.` characters become `_`.
/// Uppercase runs are not split, so `IoTThing` becomes `io_tthing`.
///
/// The function is idempotent: applying it to its own output is a no-op.
///
/// # Examples
/// ```
/// use svcgen::generation::utils::normalize;
///
/// assert_eq!(normalize("describeThing"), "describe_thing");
/// assert_eq!(normalize("Bodh.Iot"), "bodh_iot");
/// assert_eq!(normalize("thing_name"), "thing_name");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(name: &str) -> String {
    CASE_BOUNDARY
        .replace_all(name, "${1}_${2}")
        .to_lowercase()
        .replace('.', "_")
}

/// File name for a generated module: the normalized module name plus extension.
///
/// # Examples
/// ```
/// use svcgen::generation::utils::output_file_name;
///
/// assert_eq!(output_file_name("Bodh.Iot", "ex"), "bodh_iot.ex");
/// assert_eq!(output_file_name("Bodh.Iot", ".ex"), "bodh_iot.ex");
/// ```
pub fn output_file_name(module_name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        normalize(module_name)
    } else {
        format!("{}.{extension}", normalize(module_name))
    }
}
