#![deny(missing_docs)]

//! # Class Builder
//!
//! Builder of plain Java `class` files.

use crate::builder::{Builder, BuilderCore};
use crate::codegen;
use crate::semver::SemVer;
use crate::validation::RESERVED_KEYWORDS;
use crate::writer::{ClassWriter, FileSystemWriter};

/// Builder of plain Java classes.
///
/// Generated files contain an optional `package` declaration and an empty
/// `public class` body.
#[derive(Debug)]
pub struct ClassBuilder {
    core: BuilderCore,
}

impl ClassBuilder {
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
        }
    }
}

impl Default for ClassBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for ClassBuilder {
    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn generate_file_content(&self, sem_ver: &SemVer) -> String {
        let package_name = self.core.resolve_effective_package_name(sem_ver);
        codegen::render_class(
            package_name.as_deref(),
            self.core.class_name().unwrap_or_default(),
        )
    }
}
