#![deny(missing_docs)]

//! # Identifier Validation
//!
//! Grammar constants and validator functions for Java class names, package
//! names and enum constant names. Patterns are part of the output format's
//! correctness contract.

use crate::error::{ForgeError, ForgeResult};
use regex::Regex;
use std::sync::OnceLock;

/// The pattern a class name must match.
pub const VALID_CLASS_NAME_REGEX: &str = "^[A-Z][A-Za-z_0-9]*$";

/// The pattern a non-blank package name must match.
pub const VALID_PACKAGE_NAME_REGEX: &str = r"^[A-Za-z_0-9]+(\.[A-Za-z_0-9]+)*$";

/// The pattern an enum constant name must match.
pub const VALID_ENUM_CONSTANT_NAME_REGEX: &str = "^([A-Za-z]|(_+[A-Za-z0-9]))[A-Z_a-z0-9]*$";

/// Keywords reserved by the Java language. These words are rejected as class
/// names and enum constant names.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "record",
    "return",
    "sealed",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "var",
    "void",
    "volatile",
    "while",
];

fn class_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VALID_CLASS_NAME_REGEX).expect("Invalid regex constant"))
}

fn package_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VALID_PACKAGE_NAME_REGEX).expect("Invalid regex constant"))
}

fn enum_constant_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VALID_ENUM_CONSTANT_NAME_REGEX).expect("Invalid regex constant"))
}

/// Validates a class name against [`VALID_CLASS_NAME_REGEX`] and the given
/// reserved-keyword table.
pub fn validate_class_name(class_name: &str, keywords: &[&str]) -> ForgeResult<()> {
    if !class_name_re().is_match(class_name) {
        return Err(ForgeError::not_matching_regex(
            "class_name",
            VALID_CLASS_NAME_REGEX,
        ));
    }
    if keywords.contains(&class_name) {
        return Err(ForgeError::reserved_keyword("class_name"));
    }
    Ok(())
}

/// Validates a package name.
///
/// `None` and blank values are permitted and mean "no package"; any other
/// value must match [`VALID_PACKAGE_NAME_REGEX`].
pub fn validate_package_name(package_name: Option<&str>) -> ForgeResult<()> {
    match package_name {
        None => Ok(()),
        Some(name) if name.trim().is_empty() => Ok(()),
        Some(name) if package_name_re().is_match(name) => Ok(()),
        Some(_) => Err(ForgeError::not_matching_regex(
            "package_name",
            VALID_PACKAGE_NAME_REGEX,
        )),
    }
}

/// Validates an enum constant name against
/// [`VALID_ENUM_CONSTANT_NAME_REGEX`] and the given reserved-keyword table.
pub fn validate_enum_constant_name(constant_name: &str, keywords: &[&str]) -> ForgeResult<()> {
    if !enum_constant_name_re().is_match(constant_name) {
        return Err(ForgeError::not_matching_regex(
            "enum_constant_name",
            VALID_ENUM_CONSTANT_NAME_REGEX,
        ));
    }
    if keywords.contains(&constant_name) {
        return Err(ForgeError::reserved_keyword("enum_constant_name"));
    }
    Ok(())
}
