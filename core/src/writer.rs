#![deny(missing_docs)]

//! # Class File Writing
//!
//! The persistence seam between builders and the filesystem.
//!
//! Builders hand `(directory, fully-qualified class name, content)` to a
//! [`ClassWriter`]; the default [`FileSystemWriter`] maps name segments to
//! nested directories and writes a `.java` file. Abstracted to a trait so
//! tests and the CLI preview can capture output without touching disk.

use crate::error::ForgeResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Interface for persisting generated class files.
pub trait ClassWriter {
    /// Writes `content` as the source file for `fully_qualified_class_name`
    /// under `directory`.
    ///
    /// # Arguments
    ///
    /// * `directory` - The output root.
    /// * `fully_qualified_class_name` - Dot-separated name, e.g. `com.example.Example`.
    /// * `content` - The complete file contents.
    fn write(
        &self,
        directory: &Path,
        fully_qualified_class_name: &str,
        content: &str,
    ) -> ForgeResult<()>;
}

/// Standard writer backed by `std::fs`.
///
/// Package segments become nested directories, the class name becomes the
/// file stem and the file takes the `.java` extension. Missing intermediate
/// directories are created; an existing file at the target path is
/// overwritten.
pub struct FileSystemWriter;

impl ClassWriter for FileSystemWriter {
    fn write(
        &self,
        directory: &Path,
        fully_qualified_class_name: &str,
        content: &str,
    ) -> ForgeResult<()> {
        let relative: PathBuf = fully_qualified_class_name.split('.').collect();
        let file_path = directory.join(relative).with_extension("java");
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_file_with_package_directories() {
        let dir = tempfile::tempdir().unwrap();
        FileSystemWriter
            .write(dir.path(), "com.example.Example", "public class Example {}")
            .unwrap();

        let file_path = dir.path().join("com/example/Example.java");
        assert_eq!(
            fs::read_to_string(file_path).unwrap(),
            "public class Example {}"
        );
    }

    #[test]
    fn test_writes_file_without_package() {
        let dir = tempfile::tempdir().unwrap();
        FileSystemWriter
            .write(dir.path(), "Example", "public class Example {}")
            .unwrap();

        assert!(dir.path().join("Example.java").exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        FileSystemWriter
            .write(dir.path(), "Example", "first")
            .unwrap();
        FileSystemWriter
            .write(dir.path(), "Example", "second")
            .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("Example.java")).unwrap(),
            "second"
        );
    }
}
