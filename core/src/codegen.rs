#![deny(missing_docs)]

//! # Source Rendering
//!
//! Pure functions turning a validated draft into Java source text.
//!
//! The builders resolve names and versions; these functions only assemble
//! text. Identifiers are assumed to have passed validation already, so no
//! escaping is performed here.

use crate::deserializer::DeserializingMethod;

/// Renders the `package` declaration line followed by a blank line, or
/// nothing when the effective package is absent or blank.
pub fn render_package_declaration(package_name: Option<&str>) -> String {
    match package_name.filter(|name| !name.trim().is_empty()) {
        Some(name) => format!("package {name};\n\n"),
        None => String::new(),
    }
}

/// Renders the complete file contents for a plain class.
pub fn render_class(package_name: Option<&str>, class_name: &str) -> String {
    let mut code = render_package_declaration(package_name);
    code.push_str(&format!("public class {class_name} {{\n\n}}\n"));
    code
}

/// Renders the complete file contents for an enum class.
///
/// Constants are emitted in the given order, comma-separated and terminated
/// by a semicolon. When a deserializing method is configured, its source is
/// appended after a blank line, with the first constant as the designated
/// fallback value.
pub fn render_enum(
    package_name: Option<&str>,
    class_name: &str,
    enum_constants: &[String],
    deserializing_method: Option<&DeserializingMethod>,
) -> String {
    let mut code = render_package_declaration(package_name);
    let constants = format!("{};", enum_constants.join(",\n\t"));
    code.push_str(&format!("public enum {class_name} {{\n  {constants}\n"));
    if let Some(method) = deserializing_method {
        let default_value = enum_constants.first().map(String::as_str).unwrap_or_default();
        code.push('\n');
        code.push_str(&method.generate_method_code(class_name, default_value));
    }
    code.push_str("}\n");
    code
}
