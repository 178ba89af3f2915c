#![deny(missing_docs)]

//! # Enum Deserializing Methods
//!
//! Strategy-parameterized generation of the `fromValue(String)` lookup
//! method emitted into enum classes.
//!
//! Three independent axes - null handling, matching, no-match handling -
//! compose into the full method body; every combination of the strategies
//! below produces a well-formed method.

use serde::{Deserialize, Serialize};

const TAB: &str = "  ";

/// The strategy for matching a value to an enum constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStrategy {
    /// Matches the value case-insensitively against constant names,
    /// returning the first match in declaration order.
    CaseInsensitiveName,
    /// Matches the value exactly against constant names. The default,
    /// with the same semantics as Java's `Enum.valueOf`. Behavior on
    /// duplicate-by-case names is inherited from `valueOf` and left
    /// undefined here.
    #[default]
    ExactName,
}

/// The strategy for handling a value that matches no constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchStrategy {
    /// Return the designated default constant.
    Fallback,
    /// Return `null`.
    Null,
    /// Throw an `IllegalArgumentException` carrying the offending value.
    /// The default.
    #[default]
    Throw,
}

/// The strategy for handling a `null` input value, applied before any
/// matching attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullStrategy {
    /// Return the designated default constant.
    Fallback,
    /// Return `null`.
    Null,
    /// Throw a `NullPointerException`. The default.
    #[default]
    Throw,
}

/// The deserializing method configuration for an enum class.
///
/// A pure description; [`generate_method_code`](Self::generate_method_code)
/// turns it into Java source text. Defaults to
/// `ExactName` / `Throw` / `Throw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeserializingMethod {
    /// How values are matched to enum constants.
    pub matching_strategy: MatchingStrategy,
    /// How non-matching values are handled.
    pub no_match_strategy: NoMatchStrategy,
    /// How `null` values are handled.
    pub null_strategy: NullStrategy,
}

impl DeserializingMethod {
    /// Constructs a configuration from its three strategies.
    pub const fn new(
        matching_strategy: MatchingStrategy,
        no_match_strategy: NoMatchStrategy,
        null_strategy: NullStrategy,
    ) -> Self {
        Self {
            matching_strategy,
            no_match_strategy,
            null_strategy,
        }
    }

    /// Whether any configured strategy returns the designated default
    /// constant, i.e. whether a fallback value must exist.
    pub fn requires_fallback_value(&self) -> bool {
        self.no_match_strategy == NoMatchStrategy::Fallback
            || self.null_strategy == NullStrategy::Fallback
    }

    /// Generates the Java source for `public static {class_name} fromValue(final String value)`.
    ///
    /// Pure text production: the same strategies, `class_name` and
    /// `default_value` always yield byte-identical output.
    ///
    /// # Arguments
    ///
    /// * `class_name` - The enum type, used as the return type.
    /// * `default_value` - The expression returned by fallback strategies.
    pub fn generate_method_code(&self, class_name: &str, default_value: &str) -> String {
        let mut code = String::new();
        code.push_str(&format!(
            "{TAB}public static {class_name} fromValue(final String value) {{\n"
        ));

        code.push_str(&format!("{TAB}{TAB}if (value == null) {{\n"));
        match self.null_strategy {
            NullStrategy::Fallback => {
                code.push_str(&format!("{TAB}{TAB}{TAB}return {default_value};\n"));
            }
            NullStrategy::Null => {
                code.push_str(&format!("{TAB}{TAB}{TAB}return null;\n"));
            }
            NullStrategy::Throw => {
                code.push_str(&format!(
                    "{TAB}{TAB}{TAB}throw new NullPointerException(\"`value` cannot be `null`\");\n"
                ));
            }
        }
        code.push_str(&format!("{TAB}{TAB}}}\n"));

        match self.matching_strategy {
            MatchingStrategy::CaseInsensitiveName => {
                code.push_str(&format!(
                    "{TAB}{TAB}for (final var enumConstant : values()) {{\n"
                ));
                code.push_str(&format!(
                    "{TAB}{TAB}{TAB}if (enumConstant.name().equalsIgnoreCase(value)) {{\n"
                ));
                code.push_str(&format!("{TAB}{TAB}{TAB}{TAB}return enumConstant;\n"));
                code.push_str(&format!("{TAB}{TAB}{TAB}}}\n"));
                code.push_str(&format!("{TAB}{TAB}}}\n"));
            }
            MatchingStrategy::ExactName => {
                code.push_str(&format!(
                    "{TAB}{TAB}final var enumConstant = valueOf(value);\n"
                ));
                code.push_str(&format!("{TAB}{TAB}if (enumConstant != null) {{\n"));
                code.push_str(&format!("{TAB}{TAB}{TAB}return enumConstant;\n"));
                code.push_str(&format!("{TAB}{TAB}}}\n"));
            }
        }

        match self.no_match_strategy {
            NoMatchStrategy::Fallback => {
                code.push_str(&format!("{TAB}{TAB}return {default_value};\n"));
            }
            NoMatchStrategy::Null => {
                code.push_str(&format!("{TAB}{TAB}return null;\n"));
            }
            NoMatchStrategy::Throw => {
                code.push_str(&format!(
                    "{TAB}{TAB}throw new IllegalArgumentException(\"Unexpected value '\" + value + \"'\");\n"
                ));
            }
        }

        code.push_str(&format!("{TAB}}}\n"));
        code
    }
}
