#![deny(missing_docs)]

//! # Enum Builder
//!
//! Builder of Java `enum` files with an ordered constant collection and an
//! optional deserializing method.

use crate::builder::{Builder, BuilderCore};
use crate::codegen;
use crate::deserializer::DeserializingMethod;
use crate::error::{ForgeError, ForgeResult};
use crate::semver::SemVer;
use crate::validation::{self, RESERVED_KEYWORDS};
use crate::writer::{ClassWriter, FileSystemWriter};

/// Builder of Java enum classes.
///
/// Constants are kept in insertion order, which is also the emission order
/// in the generated source. An enum with no constants may be committed; its
/// body is a bare `;`.
#[derive(Debug)]
pub struct EnumBuilder {
    core: BuilderCore,
    enum_constants: Vec<String>,
    deserializing_method: Option<DeserializingMethod>,
}

impl EnumBuilder {
    /// Creates a builder writing to the filesystem with the standard Java
    /// keyword table.
    pub fn new() -> Self {
        Self::with_writer(Box::new(FileSystemWriter))
    }

    /// Creates a builder with an injected writer.
    pub fn with_writer(writer: Box<dyn ClassWriter>) -> Self {
        Self::with_writer_and_keywords(writer, RESERVED_KEYWORDS)
    }

    /// Creates a builder with an injected writer and an alternate
    /// reserved-keyword table.
    pub fn with_writer_and_keywords(
        writer: Box<dyn ClassWriter>,
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            core: BuilderCore::new(writer, keywords),
            enum_constants: Vec::new(),
            deserializing_method: None,
        }
    }

    /// The constants of the currently uncommitted enum, in emission order.
    pub fn enum_constants(&self) -> &[String] {
        &self.enum_constants
    }

    /// Sets or clears the deserializing method emitted into the enum body.
    ///
    /// When set, the generated enum contains a `fromValue(String)` method;
    /// fallback strategies return the first declared constant.
    pub fn set_deserializing_method(
        &mut self,
        deserializing_method: Option<DeserializingMethod>,
    ) -> &mut Self {
        self.deserializing_method = deserializing_method;
        self
    }

    /// Adds the given constants to the currently uncommitted enum.
    ///
    /// The batch is atomic: every name is validated against the constant
    /// grammar, the keyword table, the batch itself and the existing
    /// collection before any name is appended. Call order is preserved.
    pub fn add_enum_constants(&mut self, enum_constant_names: &[&str]) -> ForgeResult<&mut Self> {
        if enum_constant_names.is_empty() {
            return Err(ForgeError::empty("enum_constant_names"));
        }
        for (index, name) in enum_constant_names.iter().enumerate() {
            if enum_constant_names[..index].contains(name) {
                return Err(ForgeError::duplicates_provided("enum_constant_names"));
            }
            validation::validate_enum_constant_name(name, self.core.keywords())?;
            if self.enum_constants.iter().any(|existing| existing == name) {
                return Err(ForgeError::already_exists("enum constant", name));
            }
        }
        self.enum_constants
            .extend(enum_constant_names.iter().map(|name| name.to_string()));
        Ok(self)
    }

    /// Removes the given constants from the currently uncommitted enum.
    ///
    /// The batch is atomic: every name must be present before any is
    /// removed.
    pub fn remove_enum_constants(
        &mut self,
        enum_constant_names: &[&str],
    ) -> ForgeResult<&mut Self> {
        if enum_constant_names.is_empty() {
            return Err(ForgeError::empty("enum_constant_names"));
        }
        for name in enum_constant_names {
            if !self.enum_constants.iter().any(|existing| existing == name) {
                return Err(ForgeError::does_not_exist("enum constant", name));
            }
        }
        self.enum_constants
            .retain(|existing| !enum_constant_names.contains(&existing.as_str()));
        Ok(self)
    }

    /// Replaces `old_enum_constant` with `new_enum_constant`, preserving its
    /// ordinal position.
    pub fn update_enum_constant(
        &mut self,
        old_enum_constant: &str,
        new_enum_constant: &str,
    ) -> ForgeResult<&mut Self> {
        if !self
            .enum_constants
            .iter()
            .any(|existing| existing == old_enum_constant)
        {
            return Err(ForgeError::does_not_exist(
                "enum constant",
                old_enum_constant,
            ));
        }
        validation::validate_enum_constant_name(new_enum_constant, self.core.keywords())?;
        if self
            .enum_constants
            .iter()
            .any(|existing| existing == new_enum_constant)
        {
            return Err(ForgeError::already_exists("enum constant", new_enum_constant));
        }
        for existing in &mut self.enum_constants {
            if existing == old_enum_constant {
                *existing = new_enum_constant.to_string();
            }
        }
        Ok(self)
    }
}

impl Default for EnumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for EnumBuilder {
    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn generate_file_content(&self, sem_ver: &SemVer) -> String {
        let package_name = self.core.resolve_effective_package_name(sem_ver);
        codegen::render_enum(
            package_name.as_deref(),
            self.core.class_name().unwrap_or_default(),
            &self.enum_constants,
            self.deserializing_method.as_ref(),
        )
    }

    fn validate_additional(&self) -> ForgeResult<()> {
        if let Some(method) = &self.deserializing_method {
            if method.requires_fallback_value() && self.enum_constants.is_empty() {
                return Err(ForgeError::fallback_without_constants());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::tests::RecordingWriter;
    use crate::builder::VersionPlacement;
    use crate::deserializer::{MatchingStrategy, NoMatchStrategy, NullStrategy};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn recording_enum_builder() -> (EnumBuilder, Rc<RefCell<Vec<(PathBuf, String, String)>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let writer = RecordingWriter {
            writes: Rc::clone(&writes),
        };
        (EnumBuilder::with_writer(Box::new(writer)), writes)
    }

    #[test]
    fn test_add_constants_preserves_order() {
        let (mut builder, _) = recording_enum_builder();
        builder.add_enum_constants(&["RED", "GREEN"]).unwrap();
        builder.add_enum_constants(&["BLUE"]).unwrap();
        assert_eq!(builder.enum_constants(), ["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn test_add_constants_rejects_empty_batch() {
        let (mut builder, _) = recording_enum_builder();
        assert!(builder.add_enum_constants(&[]).is_err());
    }

    #[test]
    fn test_add_constants_rejects_duplicates_within_batch() {
        let (mut builder, _) = recording_enum_builder();
        let err = builder.add_enum_constants(&["RED", "RED"]).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Invalid argument: `enum_constant_names` MUST NOT contain duplicates"
        );
        assert!(builder.enum_constants().is_empty());
    }

    #[test]
    fn test_add_constants_rejects_existing_name() {
        let (mut builder, _) = recording_enum_builder();
        builder.add_enum_constants(&["RED"]).unwrap();
        let err = builder.add_enum_constants(&["GREEN", "RED"]).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Invalid argument: `enum constant` named `RED` already exists"
        );
        // Atomic: GREEN was not appended either.
        assert_eq!(builder.enum_constants(), ["RED"]);
    }

    #[test]
    fn test_add_constants_rejects_invalid_name() {
        let (mut builder, _) = recording_enum_builder();
        assert!(builder.add_enum_constants(&["1BAD"]).is_err());
        assert!(builder.add_enum_constants(&["class"]).is_err());
        assert!(builder.enum_constants().is_empty());
    }

    #[test]
    fn test_remove_constants() {
        let (mut builder, _) = recording_enum_builder();
        builder
            .add_enum_constants(&["RED", "GREEN", "BLUE"])
            .unwrap();
        builder.remove_enum_constants(&["GREEN"]).unwrap();
        assert_eq!(builder.enum_constants(), ["RED", "BLUE"]);
    }

    #[test]
    fn test_remove_absent_constant_is_atomic() {
        let (mut builder, _) = recording_enum_builder();
        builder.add_enum_constants(&["RED", "GREEN"]).unwrap();
        let err = builder
            .remove_enum_constants(&["RED", "YELLOW"])
            .unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Invalid argument: `enum constant` named `YELLOW` does not exist"
        );
        assert_eq!(builder.enum_constants(), ["RED", "GREEN"]);
    }

    #[test]
    fn test_update_constant_preserves_position() {
        let (mut builder, _) = recording_enum_builder();
        builder.add_enum_constants(&["A", "B"]).unwrap();
        builder.add_enum_constants(&["C"]).unwrap();
        builder.update_enum_constant("B", "Z").unwrap();
        assert_eq!(builder.enum_constants(), ["A", "Z", "C"]);
    }

    #[test]
    fn test_update_constant_rejects_absent_old() {
        let (mut builder, _) = recording_enum_builder();
        builder.add_enum_constants(&["A"]).unwrap();
        assert!(builder.update_enum_constant("B", "Z").is_err());
    }

    #[test]
    fn test_update_constant_rejects_existing_new() {
        let (mut builder, _) = recording_enum_builder();
        builder.add_enum_constants(&["A", "B"]).unwrap();
        assert!(builder.update_enum_constant("A", "B").is_err());
        assert_eq!(builder.enum_constants(), ["A", "B"]);
    }

    #[test]
    fn test_update_constant_rejects_invalid_new() {
        let (mut builder, _) = recording_enum_builder();
        builder.add_enum_constants(&["A"]).unwrap();
        assert!(builder.update_enum_constant("A", "1bad").is_err());
        assert!(builder.update_enum_constant("A", "enum").is_err());
    }

    #[test]
    fn test_commit_writes_enum_file() {
        let (mut builder, writes) = recording_enum_builder();
        builder.update_directory("out");
        builder.update_package_name(Some("com.example")).unwrap();
        builder.update_class_name("Color").unwrap();
        builder.add_enum_constants(&["RED", "GREEN", "BLUE"]).unwrap();
        builder.commit().unwrap();

        let writes = writes.borrow();
        assert_eq!(writes[0].1, "com.example.Color");
        assert_eq!(
            writes[0].2,
            "package com.example;\n\npublic enum Color {\n  RED,\n\tGREEN,\n\tBLUE;\n}\n"
        );
    }

    #[test]
    fn test_commit_empty_enum_is_permitted() {
        let (mut builder, writes) = recording_enum_builder();
        builder.update_directory("out");
        builder.update_class_name("Empty").unwrap();
        builder.commit().unwrap();

        assert_eq!(writes.borrow()[0].2, "public enum Empty {\n  ;\n}\n");
    }

    #[test]
    fn test_commit_with_deserializing_method() {
        let (mut builder, writes) = recording_enum_builder();
        builder.update_directory("out");
        builder.update_class_name("Color").unwrap();
        builder.add_enum_constants(&["RED", "GREEN"]).unwrap();
        builder.set_deserializing_method(Some(DeserializingMethod::default()));
        builder.commit().unwrap();

        let content = writes.borrow()[0].2.clone();
        assert!(content.contains("public static Color fromValue(final String value) {"));
        assert!(content.contains("throw new NullPointerException"));
        assert!(content.ends_with("  }\n}\n"));
    }

    #[test]
    fn test_fallback_method_requires_constants() {
        let (mut builder, writes) = recording_enum_builder();
        builder.update_directory("out");
        builder.update_class_name("Empty").unwrap();
        builder.set_deserializing_method(Some(DeserializingMethod::new(
            MatchingStrategy::ExactName,
            NoMatchStrategy::Fallback,
            NullStrategy::Throw,
        )));

        let err = builder.commit().unwrap_err();
        assert!(matches!(err, ForgeError::InvalidArgument(_)));
        assert!(writes.borrow().is_empty());

        // With a constant the same draft commits fine.
        builder.add_enum_constants(&["DEFAULT_VALUE"]).unwrap();
        builder.commit().unwrap();
        assert!(writes.borrow()[0].2.contains("return DEFAULT_VALUE;"));
    }

    #[test]
    fn test_alternate_keyword_table() {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let writer = RecordingWriter {
            writes: Rc::clone(&writes),
        };
        // An alternate target keyword set may free up names Java reserves.
        let mut builder = EnumBuilder::with_writer_and_keywords(Box::new(writer), &["RESERVED"]);
        builder.add_enum_constants(&["class", "enum"]).unwrap();
        assert!(builder.add_enum_constants(&["RESERVED"]).is_err());
        assert_eq!(builder.enum_constants(), ["class", "enum"]);
    }

    #[test]
    fn test_versioned_enum_commits() {
        let (mut builder, writes) = recording_enum_builder();
        builder.update_directory("out");
        builder.update_package_name(Some("pkg")).unwrap();
        builder.update_class_name("Color").unwrap();
        builder.set_version_placement(VersionPlacement::PackageNameWithShortenedVersion);
        builder.add_enum_constants(&["RED"]).unwrap();

        builder.commit().unwrap();
        builder.commit_version(SemVer::new(1, 2, 0)).unwrap();

        let names: Vec<String> = writes.borrow().iter().map(|w| w.1.clone()).collect();
        assert_eq!(names, vec!["pkg.v1.Color", "pkg.v1_2.Color"]);
        assert!(writes.borrow()[1].2.starts_with("package pkg.v1_2;\n\n"));
    }
}
