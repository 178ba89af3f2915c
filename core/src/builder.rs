#![deny(missing_docs)]

//! # Builder State Machine
//!
//! The shared draft state and commit logic behind [`ClassBuilder`] and
//! [`EnumBuilder`].
//!
//! A builder is always in draft: setters mutate the draft freely, `commit`
//! validates it, resolves the fully-qualified class name for an explicit
//! version, rejects names already emitted, renders and writes the file,
//! records the name and stores the version. Validation failures and name
//! conflicts leave the draft untouched - either all commit effects happen
//! or none do.
//!
//! Builders own private, non-shared mutable state; sharing one instance
//! across threads requires external serialization by the caller.
//!
//! [`ClassBuilder`]: crate::class_builder::ClassBuilder
//! [`EnumBuilder`]: crate::enum_builder::EnumBuilder

use crate::error::{ForgeError, ForgeResult};
use crate::semver::{Change, SemVer};
use crate::validation;
use crate::writer::ClassWriter;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The placement of version information in generated classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionPlacement {
    /// Version information is excluded. The default.
    #[default]
    None,
    /// The complete version becomes the innermost package segment, always
    /// with all three components: `com.example.v1_2_3`, `com.example.v2_0_0`.
    PackageNameWithCompleteVersion,
    /// The shortened version becomes the innermost package segment, with
    /// trailing zero components omitted: `com.example.v1_2_3`,
    /// `com.example.v1_2`, `com.example.v2`.
    PackageNameWithShortenedVersion,
}

/// The mutable draft shared by every builder kind.
///
/// Holds the currently uncommitted attributes, the evolving version, the
/// registry of names already emitted and the injected writer and keyword
/// table.
pub struct BuilderCore {
    directory: Option<PathBuf>,
    package_name: Option<String>,
    class_name: Option<String>,
    version_placement: VersionPlacement,
    sem_ver: SemVer,
    generated_classes: IndexSet<String>,
    keywords: &'static [&'static str],
    writer: Box<dyn ClassWriter>,
}

impl std::fmt::Debug for BuilderCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderCore")
            .field("directory", &self.directory)
            .field("package_name", &self.package_name)
            .field("class_name", &self.class_name)
            .field("version_placement", &self.version_placement)
            .field("sem_ver", &self.sem_ver)
            .field("generated_classes", &self.generated_classes)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

impl BuilderCore {
    pub(crate) fn new(writer: Box<dyn ClassWriter>, keywords: &'static [&'static str]) -> Self {
        Self {
            directory: None,
            package_name: None,
            class_name: None,
            version_placement: VersionPlacement::None,
            sem_ver: SemVer::default(),
            generated_classes: IndexSet::new(),
            keywords,
            writer,
        }
    }

    /// The version of the previously committed class. Starts at `0.0.0`.
    pub fn sem_ver(&self) -> SemVer {
        self.sem_ver
    }

    /// The output directory of the currently uncommitted class.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// The raw package name of the currently uncommitted class.
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// The class name of the currently uncommitted class.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// The version placement of the currently uncommitted class.
    pub fn version_placement(&self) -> VersionPlacement {
        self.version_placement
    }

    /// The fully-qualified names of every class emitted by this builder, in
    /// emission order.
    pub fn generated_class_names(&self) -> &IndexSet<String> {
        &self.generated_classes
    }

    pub(crate) fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    /// Resolves the effective package name for the given version.
    ///
    /// Computed fresh on every call - never cached - so it always reflects
    /// the version in effect at the moment of resolution.
    pub fn resolve_effective_package_name(&self, sem_ver: &SemVer) -> Option<String> {
        match self.version_placement {
            VersionPlacement::None => self.package_name.clone(),
            VersionPlacement::PackageNameWithCompleteVersion => {
                Some(self.join_version_sub_package(&sem_ver.to_complete_version_string()))
            }
            VersionPlacement::PackageNameWithShortenedVersion => {
                Some(self.join_version_sub_package(&sem_ver.to_short_version_string()))
            }
        }
    }

    fn join_version_sub_package(&self, version: &str) -> String {
        let sub_package = version.replace('.', "_");
        match self
            .package_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
        {
            Some(name) => format!("{name}.{sub_package}"),
            None => sub_package,
        }
    }

    /// Resolves the fully-qualified class name for the given version:
    /// `effective.package.ClassName`, or `ClassName` alone when the
    /// effective package is absent or blank.
    pub fn resolve_fully_qualified_class_name(&self, sem_ver: &SemVer) -> ForgeResult<String> {
        let class_name = self
            .class_name
            .as_deref()
            .ok_or_else(|| ForgeError::not_set("class_name"))?;
        Ok(match self
            .resolve_effective_package_name(sem_ver)
            .filter(|name| !name.trim().is_empty())
        {
            Some(package_name) => format!("{package_name}.{class_name}"),
            None => class_name.to_string(),
        })
    }

    /// Validates the draft, returning the output directory on success.
    fn validate(&self) -> ForgeResult<PathBuf> {
        let directory = self
            .directory
            .clone()
            .ok_or_else(|| ForgeError::not_set("directory"))?;
        validation::validate_package_name(self.package_name.as_deref())?;
        match self.class_name.as_deref() {
            Some(class_name) => validation::validate_class_name(class_name, self.keywords)?,
            None => return Err(ForgeError::not_set("class_name")),
        }
        Ok(directory)
    }
}

/// Common operations of every class builder.
///
/// Fallible setters return `ForgeResult<&mut Self>` so call chains compose
/// with `?`; infallible setters return `&mut Self` directly.
pub trait Builder {
    /// The shared draft state.
    fn core(&self) -> &BuilderCore;

    /// Mutable access to the shared draft state.
    fn core_mut(&mut self) -> &mut BuilderCore;

    /// Renders the complete file contents for the currently uncommitted
    /// class at the given version. Expects a validated draft.
    fn generate_file_content(&self, sem_ver: &SemVer) -> String;

    /// Kind-specific validation run on commit, after the shared checks.
    fn validate_additional(&self) -> ForgeResult<()> {
        Ok(())
    }

    /// The version of the previously committed class.
    fn sem_ver(&self) -> SemVer {
        self.core().sem_ver
    }

    /// Replaces the stored version. An explicit escape hatch bypassing the
    /// automatic increment; the new value is unconstrained and may move the
    /// version backwards.
    fn set_sem_ver(&mut self, sem_ver: SemVer) -> &mut Self {
        self.core_mut().sem_ver = sem_ver;
        self
    }

    /// Sets the version placement of the currently uncommitted class.
    fn set_version_placement(&mut self, version_placement: VersionPlacement) -> &mut Self {
        self.core_mut().version_placement = version_placement;
        self
    }

    /// Updates the output directory of the currently uncommitted class.
    fn update_directory(&mut self, directory: impl Into<PathBuf>) -> &mut Self
    where
        Self: Sized,
    {
        self.core_mut().directory = Some(directory.into());
        self
    }

    /// Updates the package name of the currently uncommitted class.
    ///
    /// `None` and blank values are permitted and mean "no package"; any
    /// other value must match
    /// [`VALID_PACKAGE_NAME_REGEX`](crate::validation::VALID_PACKAGE_NAME_REGEX).
    fn update_package_name(&mut self, package_name: Option<&str>) -> ForgeResult<&mut Self> {
        validation::validate_package_name(package_name)?;
        self.core_mut().package_name = package_name.map(str::to_string);
        Ok(self)
    }

    /// Updates the class name of the currently uncommitted class.
    ///
    /// The name must match
    /// [`VALID_CLASS_NAME_REGEX`](crate::validation::VALID_CLASS_NAME_REGEX)
    /// and must not be a reserved keyword.
    fn update_class_name(&mut self, class_name: &str) -> ForgeResult<&mut Self> {
        validation::validate_class_name(class_name, self.core().keywords)?;
        self.core_mut().class_name = Some(class_name.to_string());
        Ok(self)
    }

    /// Commits the currently uncommitted changes as a new class, advancing
    /// the version by the default [`Change::Major`].
    fn commit(&mut self) -> ForgeResult<&mut Self> {
        self.commit_change(Change::Major)
    }

    /// Commits the currently uncommitted changes as a new class, advancing
    /// the version by the given change.
    fn commit_change(&mut self, change: Change) -> ForgeResult<&mut Self> {
        self.commit_version(self.sem_ver().increment(change))
    }

    /// Commits the currently uncommitted changes as a new class at exactly
    /// the given version.
    ///
    /// Validates the draft, resolves the fully-qualified class name with
    /// `sem_ver`, rejects names this builder has already emitted, writes the
    /// rendered file, records the name and stores `sem_ver`. On any failure
    /// the draft, registry and stored version are unchanged.
    fn commit_version(&mut self, sem_ver: SemVer) -> ForgeResult<&mut Self> {
        let directory = self.core().validate()?;
        self.validate_additional()?;
        let fully_qualified_name = self.core().resolve_fully_qualified_class_name(&sem_ver)?;
        if self.core().generated_classes.contains(&fully_qualified_name) {
            return Err(ForgeError::already_generated(&fully_qualified_name));
        }
        let content = self.generate_file_content(&sem_ver);
        self.core()
            .writer
            .write(&directory, &fully_qualified_name, &content)?;
        let core = self.core_mut();
        core.generated_classes.insert(fully_qualified_name);
        core.sem_ver = sem_ver;
        Ok(self)
    }
}
