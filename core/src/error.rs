#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `ForgeError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Invalid input and runtime conflicts are kept as separate variants so
/// callers can distinguish "fix your arguments" from "this was already done".
#[derive(Debug, Display, From)]
pub enum ForgeError {
    /// Wrapper for standard IO errors raised by the file writer.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Caller-supplied data failed a structural, grammar or keyword check.
    #[from(ignore)]
    #[display("Invalid argument: {_0}")]
    InvalidArgument(String),

    /// The operation is structurally valid but violates a runtime invariant.
    #[from(ignore)]
    #[display("Conflict: {_0}")]
    Conflict(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the
/// `String`-carrying variants do not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for ForgeError {}

/// Helper type alias for Result using ForgeError.
pub type ForgeResult<T> = Result<T, ForgeError>;

impl ForgeError {
    /// A required field has not been set on the builder.
    pub fn not_set(key: &str) -> Self {
        Self::InvalidArgument(format!("`{key}` MUST be set"))
    }

    /// A collection argument was empty.
    pub fn empty(key: &str) -> Self {
        Self::InvalidArgument(format!("`{key}` MUST NOT be empty"))
    }

    /// A collection argument contained the same name more than once.
    pub fn duplicates_provided(key: &str) -> Self {
        Self::InvalidArgument(format!("`{key}` MUST NOT contain duplicates"))
    }

    /// A value did not match the required identifier grammar.
    pub fn not_matching_regex(key: &str, regex: &str) -> Self {
        Self::InvalidArgument(format!("`{key}` MUST match the RegEx `{regex}`"))
    }

    /// A value collided with a reserved keyword of the target language.
    pub fn reserved_keyword(key: &str) -> Self {
        Self::InvalidArgument(format!("`{key}` MUST NOT be a reserved Java keyword"))
    }

    /// A named entity is already present in the builder.
    pub fn already_exists(entity: &str, name: &str) -> Self {
        Self::InvalidArgument(format!("`{entity}` named `{name}` already exists"))
    }

    /// A named entity is absent from the builder.
    pub fn does_not_exist(entity: &str, name: &str) -> Self {
        Self::InvalidArgument(format!("`{entity}` named `{name}` does not exist"))
    }

    /// A fully-qualified class name was already emitted by this builder.
    pub fn already_generated(fully_qualified_class_name: &str) -> Self {
        Self::Conflict(format!(
            "class `{fully_qualified_class_name}` has already been generated"
        ))
    }

    /// A fallback deserializing strategy was configured on an enum with no
    /// constants to fall back to.
    pub fn fallback_without_constants() -> Self {
        Self::InvalidArgument(
            "`deserializing_method` with a fallback strategy requires at least one enum constant"
                .to_string(),
        )
    }
}
