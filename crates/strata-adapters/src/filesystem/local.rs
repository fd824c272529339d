//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::{trace, warn};

use strata_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, WriteOutcome},
    },
    error::StrataResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        fs::create_dir_all(path).map_err(|e| {
            ApplicationError::Directory {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn create_new_file(&self, path: &Path, content: &str) -> StrataResult<WriteOutcome> {
        let file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                trace!(path = %path.display(), "create_new lost to an existing file");
                return Ok(WriteOutcome::AlreadyExists);
            }
            Err(e) => return Err(write_error(path, &e)),
        };

        fill_or_discard(path, file, content)?;
        Ok(WriteOutcome::Created)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Write `content` into the freshly created `path`, removing it again if the
/// write fails. A half-written file would otherwise be skipped on every later
/// run.
fn fill_or_discard(path: &Path, mut file: impl Write, content: &str) -> StrataResult<()> {
    let Err(e) = file.write_all(content.as_bytes()).and_then(|()| file.flush()) else {
        return Ok(());
    };
    drop(file);
    match fs::remove_file(path) {
        Ok(()) => trace!(path = %path.display(), "removed partially written file"),
        Err(rm) if rm.kind() == io::ErrorKind::NotFound => {}
        Err(rm) => warn!(path = %path.display(), error = %rm, "could not remove partially written file"),
    }
    Err(write_error(path, &e))
}

fn write_error(path: &Path, e: &io::Error) -> strata_core::error::StrataError {
    ApplicationError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
