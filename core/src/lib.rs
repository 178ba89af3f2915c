#![deny(missing_docs)]

//! # Typesmith Core
//!
//! Core library for generating versioned Java classes.
//!
//! A builder accumulates a draft (directory, package name, class name,
//! version placement and, for enums, constants), then [`commit`] validates
//! it, writes the source file and advances the semantic version. A builder
//! never emits the same fully-qualified class name twice.
//!
//! ```no_run
//! use typesmith_core::{new_class_builder, Builder, VersionPlacement};
//!
//! # fn main() -> typesmith_core::ForgeResult<()> {
//! new_class_builder()
//!     .update_directory("generated")
//!     .update_package_name(Some("com.example"))?
//!     .update_class_name("Example")?
//!     .set_version_placement(VersionPlacement::PackageNameWithCompleteVersion)
//!     .commit()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`commit`]: Builder::commit

/// Shared error types.
pub mod error;

/// Semantic version values and increment rules.
pub mod semver;

/// Identifier grammars and the reserved-keyword table.
pub mod validation;

/// The builder state machine and shared draft state.
pub mod builder;

/// Builder of plain Java classes.
pub mod class_builder;

/// Builder of Java enum classes.
pub mod enum_builder;

/// Source-text rendering.
pub mod codegen;

/// Strategy-driven deserializing-method generation.
pub mod deserializer;

/// The file-writing seam.
pub mod writer;

pub use builder::{Builder, BuilderCore, VersionPlacement};
pub use class_builder::ClassBuilder;
pub use deserializer::{DeserializingMethod, MatchingStrategy, NoMatchStrategy, NullStrategy};
pub use enum_builder::EnumBuilder;
pub use error::{ForgeError, ForgeResult};
pub use semver::{Change, SemVer};
pub use validation::{
    RESERVED_KEYWORDS, VALID_CLASS_NAME_REGEX, VALID_ENUM_CONSTANT_NAME_REGEX,
    VALID_PACKAGE_NAME_REGEX,
};
pub use writer::{ClassWriter, FileSystemWriter};

/// Creates a new builder for plain Java classes, writing to the filesystem.
pub fn new_class_builder() -> ClassBuilder {
    ClassBuilder::new()
}

/// Creates a new builder for Java enum classes, writing to the filesystem.
pub fn new_enum_builder() -> EnumBuilder {
    EnumBuilder::new()
}
