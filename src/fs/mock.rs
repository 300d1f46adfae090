use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory FileSystem for unit tests
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
    dirs: RwLock<HashSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering every parent directory along the way
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files
            .write()
            .expect("mock fs lock poisoned")
            .insert(path, content.to_string());
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.write().expect("mock fs lock poisoned");
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs
            .read()
            .expect("mock fs lock poisoned")
            .contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files
            .read()
            .expect("mock fs lock poisoned")
            .contains_key(path)
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        self.read_to_string(path).map(|content| content.len() as u64)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .read()
            .expect("mock fs lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(anyhow!("Path not found: {}", path.display()))
        }
    }
}
