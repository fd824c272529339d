//! On-disk template directory.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── data/
//! │   ├── model.template              ← id "data/model"
//! │   └── repository.template
//! └── domain/
//!     └── entity.template             ← id "domain/entity"
//! ```
//!
//! Only files ending in `.template` whose path maps to a valid
//! [`TemplateId`] are picked up. Anything else is ignored with a `DEBUG` log.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use strata_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateId,
    error::StrataResult,
};

pub const TEMPLATE_EXTENSION: &str = "template";

/// Template source reading `<dir>/<layer>/<name>.template`.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    /// The directory does not need to exist; lookups then fail and listing
    /// returns nothing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `id` lives (or would live) on disk.
    pub fn path_for(&self, id: &TemplateId) -> PathBuf {
        self.dir
            .join(id.group())
            .join(format!("{}.{TEMPLATE_EXTENSION}", id.name()))
    }

    pub fn contains(&self, id: &TemplateId) -> bool {
        self.path_for(id).is_file()
    }

    fn id_for(&self, path: &Path) -> Option<TemplateId> {
        if path.extension()? != TEMPLATE_EXTENSION {
            return None;
        }
        let relative = path.strip_prefix(&self.dir).ok()?;
        let group = relative.parent()?.to_str()?;
        let name = relative.file_stem()?.to_str()?;
        TemplateId::parse(&format!("{group}/{name}")).ok()
    }
}

impl TemplateSource for DirectoryTemplates {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn get(&self, id: &TemplateId) -> StrataResult<String> {
        let path = self.path_for(id);
        fs::read_to_string(&path).map_err(|e| {
            let reason = match e.kind() {
                io::ErrorKind::NotFound => format!("{} not found", path.display()),
                _ => format!("failed to read '{}': {e}", path.display()),
            };
            ApplicationError::Template {
                id: id.to_string(),
                reason,
            }
            .into()
        })
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn list(&self) -> StrataResult<Vec<TemplateId>> {
        if !self.dir.is_dir() {
            debug!("template directory missing, nothing to list");
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(2).max_depth(2) {
            let entry = entry.map_err(|e| ApplicationError::Template {
                id: self.dir.display().to_string(),
                reason: format!("failed to walk template directory: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            match self.id_for(entry.path()) {
                Some(id) => ids.push(id),
                None => debug!(path = %entry.path().display(), "ignoring non-template file"),
            }
        }

        ids.sort();
        debug!(count = ids.len(), "finished listing templates");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn seed(root: &Path, files: &[(&str, &str)]) {
        for (path, content) in files {
            let path = root.join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }

    #[test]
    fn reads_templates_by_id() {
        let temp = TempDir::new().unwrap();
        seed(temp.path(), &[("data/model.template", "class FEATURE_NAMEModel {}")]);

        let source = DirectoryTemplates::new(temp.path());
        let id = TemplateId::parse("data/model").unwrap();
        assert_eq!(source.get(&id).unwrap(), "class FEATURE_NAMEModel {}");
    }

    #[test]
    fn missing_template_names_the_path() {
        let temp = TempDir::new().unwrap();
        let source = DirectoryTemplates::new(temp.path());
        let id = TemplateId::parse("domain/entity").unwrap();

        let err = source.get(&id).unwrap_err();
        assert!(err.to_string().contains("domain/entity"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn list_ignores_stray_files() {
        let temp = TempDir::new().unwrap();
        seed(
            temp.path(),
            &[
                ("domain/entity.template", "x"),
                ("data/model.template", "x"),
                ("data/README.md", "x"),
                ("top.template", "x"),
                ("Data/bad.template", "x"),
                ("data/nested/deep.template", "x"),
            ],
        );

        let ids = DirectoryTemplates::new(temp.path()).list().unwrap();
        let ids: Vec<&str> = ids.iter().map(TemplateId::as_str).collect();
        assert_eq!(ids, vec!["data/model", "domain/entity"]);
    }

    #[test]
    fn list_of_missing_dir_is_empty() {
        let source = DirectoryTemplates::new("/absolutely/does/not/exist");
        assert!(source.list().unwrap().is_empty());
    }
}
