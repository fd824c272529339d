use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::template::TemplateRef, error::DomainError, value_objects::Layer,
};

/// Fully resolved set of directories and files for one layer.
///
/// This is the output of expanding a layer manifest for a concrete feature
/// name. It contains no business logic, only data. Paths are relative to
/// `root` (the project's `lib/` directory).
#[derive(Debug, Clone, Serialize)]
pub struct LayerPlan {
    pub(crate) layer: Option<Layer>,
    pub(crate) root: PathBuf,
    pub(crate) directories: Vec<PathBuf>,
    pub(crate) files: Vec<PlannedFile>,
}

/// One file a plan wants to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub template: TemplateRef,
}

impl LayerPlan {
    pub fn new(layer: Option<Layer>, root: impl Into<PathBuf>) -> Self {
        Self {
            layer,
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories.push(path.into());
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, template: TemplateRef) {
        self.files.push(PlannedFile {
            path: path.into(),
            template,
        });
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, template: TemplateRef) -> Self {
        self.add_file(path, template);
        self
    }

    /// Reject absolute paths and paths planned twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        let all = self
            .directories
            .iter()
            .chain(self.files.iter().map(|f| &f.path));

        for path in all {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn layer(&self) -> Option<Layer> {
        self.layer
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter()
    }

    /// Absolute location of a plan-relative path.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }
}
