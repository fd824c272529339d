//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use strata_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, WriteOutcome},
    },
    error::{StrataError, StrataResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the service owns another. Directories are tracked explicitly: writing a
/// file requires its parent to exist, and a path marked read-only rejects
/// every mutation beneath it.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|ro| path.starts_with(ro))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem whose only content is the directory `root` (and
    /// its ancestors).
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        fs.add_dir(root);
        fs
    }

    /// Add a directory and its ancestors (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.write();
        for ancestor in path.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                inner.directories.insert(ancestor.to_path_buf());
            }
        }
    }

    /// Add a file regardless of read-only marks (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.write()
            .files
            .insert(path.to_path_buf(), content.into());
    }

    /// Reject every later mutation at or beneath `path`.
    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        self.write().read_only.insert(path.as_ref().to_path_buf());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    /// All directories, sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.read().directories.iter().cloned().collect()
    }

    // A poisoned lock only happens after a test already panicked.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn directory_error(path: &Path, reason: &str) -> StrataError {
    ApplicationError::Directory {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn write_error(path: &Path, reason: &str) -> StrataError {
    ApplicationError::Write {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write();

        let mut missing = Vec::new();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            if inner.files.contains_key(ancestor) {
                return Err(directory_error(ancestor, "File exists"));
            }
            if inner.directories.contains(ancestor) {
                break;
            }
            missing.push(ancestor.to_path_buf());
        }

        if let Some(first) = missing.iter().find(|p| inner.is_read_only(p)) {
            return Err(directory_error(first, "Permission denied"));
        }
        inner.directories.extend(missing);
        Ok(())
    }

    fn create_new_file(&self, path: &Path, content: &str) -> StrataResult<WriteOutcome> {
        let mut inner = self.write();

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Ok(WriteOutcome::AlreadyExists);
        }
        let parent_exists = path
            .parent()
            .is_none_or(|p| p.as_os_str().is_empty() || inner.directories.contains(p));
        if !parent_exists {
            return Err(write_error(path, "No such file or directory"));
        }
        if inner.is_read_only(path) {
            return Err(write_error(path, "Permission denied"));
        }

        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(WriteOutcome::Created)
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_adds_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/lib/data")).unwrap();
        assert!(fs.is_dir(Path::new("/p")));
        assert!(fs.is_dir(Path::new("/p/lib")));
        assert!(fs.is_dir(Path::new("/p/lib/data")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::with_root("/p");
        assert!(fs.create_new_file(Path::new("/p/x/a.dart"), "").is_err());
        assert_eq!(
            fs.create_new_file(Path::new("/p/a.dart"), "a").unwrap(),
            WriteOutcome::Created
        );
    }

    #[test]
    fn never_overwrites() {
        let fs = MemoryFilesystem::with_root("/p");
        fs.add_file("/p/a.dart", "original");
        assert_eq!(
            fs.create_new_file(Path::new("/p/a.dart"), "new").unwrap(),
            WriteOutcome::AlreadyExists
        );
        assert_eq!(fs.read_file("/p/a.dart").unwrap(), "original");
    }

    #[test]
    fn directory_over_file_fails() {
        let fs = MemoryFilesystem::with_root("/p");
        fs.add_file("/p/lib", "");
        let err = fs.create_dir_all(Path::new("/p/lib/data")).unwrap_err();
        assert!(err.to_string().contains("File exists"));
    }

    #[test]
    fn read_only_rejects_mutation() {
        let fs = MemoryFilesystem::with_root("/p/lib/data");
        fs.set_read_only("/p/lib/data");

        assert!(fs.create_dir_all(Path::new("/p/lib/data/models")).is_err());
        assert!(fs.create_new_file(Path::new("/p/lib/data/a.dart"), "").is_err());
        // already present directories are fine
        assert!(fs.create_dir_all(Path::new("/p/lib/data")).is_ok());
    }
}
