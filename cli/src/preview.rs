#![deny(missing_docs)]

//! # Preview Command
//!
//! Renders the manifest's artifacts to stdout instead of the filesystem,
//! by injecting a printing writer into the same generation pipeline.

use crate::error::CliResult;
use crate::generate::run_manifest;
use crate::manifest::load_manifest;
use std::path::{Path, PathBuf};
use typesmith_core::{ClassWriter, ForgeResult};

/// Arguments for the preview command.
#[derive(clap::Args, Debug, Clone)]
pub struct PreviewArgs {
    /// Path to the artifact manifest.
    #[clap(long, default_value = "typesmith.yaml")]
    pub manifest: PathBuf,
}

/// Writer that prints each file to stdout instead of persisting it.
struct StdoutWriter;

impl ClassWriter for StdoutWriter {
    fn write(
        &self,
        _directory: &Path,
        fully_qualified_class_name: &str,
        content: &str,
    ) -> ForgeResult<()> {
        println!("// {fully_qualified_class_name}.java");
        println!("{content}");
        Ok(())
    }
}

/// Executes the preview process.
pub fn execute(args: &PreviewArgs) -> CliResult<()> {
    let manifest = load_manifest(&args.manifest)?;
    run_manifest(&manifest, &manifest.directory, &|| Box::new(StdoutWriter))
}
