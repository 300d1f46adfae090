//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Size of a file in bytes
    fn file_size(&self, path: &Path) -> Result<u64>;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Canonicalize a path
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}
