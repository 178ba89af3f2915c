#![deny(missing_docs)]

//! # Generate Command
//!
//! Drives the core builders from a manifest and writes the resulting class
//! files to disk.
//!
//! This command:
//! 1. Loads the manifest (YAML or JSON).
//! 2. Builds each artifact entry in order, committing once per requested
//!    version.
//! 3. Reports every emitted fully-qualified class name.

use crate::error::CliResult;
use crate::manifest::{load_manifest, ArtifactSpec, Manifest};
use std::path::{Path, PathBuf};
use typesmith_core::{Builder, Change, ClassBuilder, ClassWriter, EnumBuilder, FileSystemWriter};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the artifact manifest.
    #[clap(long, default_value = "typesmith.yaml")]
    pub manifest: PathBuf,

    /// Output directory override; defaults to the manifest's `directory`.
    #[clap(long)]
    pub directory: Option<PathBuf>,
}

/// Executes the generation process.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    println!("Generating classes from {:?}...", args.manifest);

    let manifest = load_manifest(&args.manifest)?;
    let directory = args
        .directory
        .clone()
        .unwrap_or_else(|| manifest.directory.clone());

    run_manifest(&manifest, &directory, &|| Box::new(FileSystemWriter))
}

/// Runs every artifact in `manifest` against builders equipped with writers
/// from `writer_factory`.
///
/// Shared by `generate` (filesystem writers) and `preview` (stdout writers).
pub fn run_manifest(
    manifest: &Manifest,
    directory: &Path,
    writer_factory: &dyn Fn() -> Box<dyn ClassWriter>,
) -> CliResult<()> {
    for artifact in &manifest.artifacts {
        println!("  -> Processing artifact: {}", artifact.class_name());
        match artifact {
            ArtifactSpec::Class {
                class_name,
                package_name,
                version_placement,
                start_version,
                change,
                commits,
            } => {
                let mut builder = ClassBuilder::with_writer(writer_factory());
                builder.update_directory(directory);
                builder.update_package_name(package_name.as_deref())?;
                builder.update_class_name(class_name)?;
                builder.set_version_placement(*version_placement);
                if let Some(start_version) = start_version {
                    builder.set_sem_ver(*start_version);
                }
                run_commits(&mut builder, *change, *commits)?;
                report_emitted(builder.core().generated_class_names());
            }
            ArtifactSpec::Enum {
                class_name,
                package_name,
                version_placement,
                constants,
                deserializer,
                start_version,
                change,
                commits,
            } => {
                let mut builder = EnumBuilder::with_writer(writer_factory());
                builder.update_directory(directory);
                builder.update_package_name(package_name.as_deref())?;
                builder.update_class_name(class_name)?;
                builder.set_version_placement(*version_placement);
                if let Some(start_version) = start_version {
                    builder.set_sem_ver(*start_version);
                }
                if !constants.is_empty() {
                    let names: Vec<&str> = constants.iter().map(String::as_str).collect();
                    builder.add_enum_constants(&names)?;
                }
                builder.set_deserializing_method(*deserializer);
                run_commits(&mut builder, *change, *commits)?;
                report_emitted(builder.core().generated_class_names());
            }
        }
    }
    Ok(())
}

fn run_commits<B: Builder>(builder: &mut B, change: Option<Change>, commits: u32) -> CliResult<()> {
    for _ in 0..commits {
        match change {
            Some(change) => builder.commit_change(change)?,
            None => builder.commit()?,
        };
    }
    Ok(())
}

fn report_emitted<'a>(names: impl IntoIterator<Item = &'a String>) {
    for name in names {
        println!("     emitted {name}");
    }
}
