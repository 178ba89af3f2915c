#![deny(missing_docs)]

//! # Artifact Manifest
//!
//! Deserializable description of the classes to generate, loaded from a
//! YAML or JSON file.

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use typesmith_core::{Change, DeserializingMethod, SemVer, VersionPlacement};

fn default_commits() -> u32 {
    1
}

/// The top-level manifest: an output directory and the artifacts to emit.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Output root for all generated files.
    pub directory: PathBuf,
    /// The artifacts to generate, in order.
    pub artifacts: Vec<ArtifactSpec>,
}

/// One artifact entry, discriminated by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactSpec {
    /// A plain `class` artifact.
    Class {
        /// The class name.
        class_name: String,
        /// The package name, absent for the default package.
        #[serde(default)]
        package_name: Option<String>,
        /// Where version information appears in the generated class.
        #[serde(default)]
        version_placement: VersionPlacement,
        /// Version to start from instead of `0.0.0`.
        #[serde(default)]
        start_version: Option<SemVer>,
        /// The change applied by each commit; defaults to a major change.
        #[serde(default)]
        change: Option<Change>,
        /// How many successive commits to run.
        #[serde(default = "default_commits")]
        commits: u32,
    },
    /// An `enum` artifact.
    Enum {
        /// The class name.
        class_name: String,
        /// The package name, absent for the default package.
        #[serde(default)]
        package_name: Option<String>,
        /// Where version information appears in the generated class.
        #[serde(default)]
        version_placement: VersionPlacement,
        /// Constants in emission order.
        #[serde(default)]
        constants: Vec<String>,
        /// Optional `fromValue(String)` method configuration.
        #[serde(default)]
        deserializer: Option<DeserializingMethod>,
        /// Version to start from instead of `0.0.0`.
        #[serde(default)]
        start_version: Option<SemVer>,
        /// The change applied by each commit; defaults to a major change.
        #[serde(default)]
        change: Option<Change>,
        /// How many successive commits to run.
        #[serde(default = "default_commits")]
        commits: u32,
    },
}

impl ArtifactSpec {
    /// The class name of this entry, regardless of kind.
    pub fn class_name(&self) -> &str {
        match self {
            ArtifactSpec::Class { class_name, .. } => class_name,
            ArtifactSpec::Enum { class_name, .. } => class_name,
        }
    }
}

/// Loads a manifest from `path`, parsing JSON for `.json` files and YAML
/// otherwise.
pub fn load_manifest(path: &Path) -> CliResult<Manifest> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| CliError::General(format!("Failed to parse manifest {path:?}: {e}"))),
        _ => serde_yaml::from_str(&content)
            .map_err(|e| CliError::General(format!("Failed to parse manifest {path:?}: {e}"))),
    }
}
