//! Scaffold Service - main application orchestrator.
//!
//! This service turns a layer manifest into files on disk:
//! 1. Check the project root
//! 2. Expand the manifest into a [`LayerPlan`]
//! 3. Ensure every planned directory
//! 4. Render and exclusively create every planned file
//!
//! Generation is best-effort and idempotent. A failing entry is recorded in
//! the [`GenerationReport`] and the walk continues; an existing file is never
//! touched.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateSource, WriteOutcome},
        report::{DirectoryStatus, FileStatus, GenerationReport},
    },
    domain::{
        FeatureName, LIB_DIR, Layer, LayerPlan, LayerSelection, PlannedFile, Profile,
        RenderContext, TemplateRef, manifest,
    },
    error::{StrataError, StrataResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    templates: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
    profile: Profile,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     templates,  // impl TemplateSource
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(templates: Box<dyn TemplateSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
            profile: Profile::default(),
        }
    }

    /// Use a different directory convention.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Resolve what `generate_layer` would create, without touching disk.
    ///
    /// Plan paths are relative to [`LayerPlan::root`] (`<root>/lib`).
    pub fn plan_layer(
        &self,
        root: &Path,
        layer: Layer,
        name: &FeatureName,
    ) -> StrataResult<LayerPlan> {
        Ok(manifest::plan_layer(
            layer,
            self.profile,
            name,
            &root.join(LIB_DIR),
        )?)
    }

    /// Generate one layer's directories and files for `name`.
    ///
    /// # Errors
    ///
    /// Only fails up front, before anything is written: the root is not an
    /// existing directory, or the manifest could not be expanded. Per-entry
    /// failures are reported in the returned [`GenerationReport`].
    #[instrument(
        skip_all,
        fields(
            layer = %layer,
            feature = %name,
            profile = %self.profile,
            root = %root.display()
        )
    )]
    pub fn generate_layer(
        &self,
        root: &Path,
        layer: Layer,
        name: &FeatureName,
    ) -> StrataResult<GenerationReport> {
        self.ensure_root(root)?;
        let plan = self.plan_layer(root, layer, name)?;

        let report = self.apply(&plan, Some(name));
        info!(
            created = report.created_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            "Layer generated"
        );
        Ok(report)
    }

    /// Generate every selected layer, in data → domain → presentation order.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::EmptySelection`] if nothing is selected (checked
    /// before any mutation), otherwise as [`Self::generate_layer`].
    pub fn generate_layers(
        &self,
        root: &Path,
        selection: &LayerSelection,
        name: &FeatureName,
    ) -> StrataResult<Vec<GenerationReport>> {
        if selection.is_empty() {
            return Err(ApplicationError::EmptySelection.into());
        }
        self.ensure_root(root)?;

        selection
            .iter()
            .map(|layer| self.generate_layer(root, layer, name))
            .collect()
    }

    /// Ensure the empty data/domain/presentation directory tree.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn generate_architecture_skeleton(&self, root: &Path) -> StrataResult<GenerationReport> {
        self.ensure_root(root)?;
        let plan = manifest::plan_skeleton(&root.join(LIB_DIR));

        let report = self.apply(&plan, None);
        info!(failed = report.failed_count(), "Skeleton generated");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_root(&self, root: &Path) -> StrataResult<()> {
        if self.filesystem.is_dir(root) {
            Ok(())
        } else {
            Err(ApplicationError::InvalidRoot {
                path: root.to_path_buf(),
            }
            .into())
        }
    }

    /// Walk the whole plan, recording one outcome per entry.
    fn apply(&self, plan: &LayerPlan, name: Option<&FeatureName>) -> GenerationReport {
        let mut report = GenerationReport::new(
            plan.layer(),
            name.map(|n| n.lower().to_owned()),
            plan.root(),
        );
        let mut failed_dirs: Vec<PathBuf> = Vec::new();

        for dir in plan.directories() {
            let path = plan.resolve(dir);
            let status = self.ensure_directory(&path);
            if matches!(status, DirectoryStatus::Failed { .. }) {
                failed_dirs.push(path.clone());
            }
            report.record_directory(path, status);
        }

        for file in plan.files() {
            let path = plan.resolve(&file.path);
            let status = if failed_dirs.iter().any(|d| path.starts_with(d)) {
                FileStatus::Failed {
                    error: ApplicationError::Write {
                        path: path.clone(),
                        reason: "parent directory could not be created".into(),
                    }
                    .into(),
                }
            } else {
                self.write_file(&path, file, name)
            };

            if let FileStatus::Failed { error } = &status {
                warn!(path = %path.display(), error = %error, "File not generated");
            }
            report.record_file(path, status);
        }

        report
    }

    fn ensure_directory(&self, path: &Path) -> DirectoryStatus {
        if self.filesystem.is_dir(path) {
            debug!(path = %path.display(), "Directory exists");
            return DirectoryStatus::Existed;
        }

        match self.filesystem.create_dir_all(path) {
            Ok(()) => {
                debug!(path = %path.display(), "Directory created");
                DirectoryStatus::Created
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "Directory not created");
                DirectoryStatus::Failed { error }
            }
        }
    }

    fn write_file(&self, path: &Path, file: &PlannedFile, name: Option<&FeatureName>) -> FileStatus {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "File exists, skipping");
            return FileStatus::Skipped;
        }

        let content = match self.content_for(&file.template, name) {
            Ok(content) => content,
            Err(error) => return FileStatus::Failed { error },
        };

        match self.filesystem.create_new_file(path, &content) {
            Ok(WriteOutcome::Created) => {
                debug!(path = %path.display(), "File created");
                FileStatus::Created
            }
            Ok(WriteOutcome::AlreadyExists) => {
                debug!(path = %path.display(), "File appeared concurrently, skipping");
                FileStatus::Skipped
            }
            Err(error) => FileStatus::Failed { error },
        }
    }

    fn content_for(
        &self,
        template: &TemplateRef,
        name: Option<&FeatureName>,
    ) -> Result<String, StrataError> {
        let TemplateRef::Named(id) = template else {
            return Ok(String::new());
        };

        let text = self.templates.get(id)?;
        Ok(match name {
            Some(name) => RenderContext::new(name).render(&text),
            None => text,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateSource};
    use crate::domain::contains_tokens;

    fn todo() -> FeatureName {
        FeatureName::parse("todo").unwrap()
    }

    fn templates() -> MockTemplateSource {
        let mut templates = MockTemplateSource::new();
        templates
            .expect_get()
            .returning(|id| Ok(format!("// {id}\nclass FEATURE_NAME {{}} // FEATURE_LOWER_NAME")));
        templates
    }

    #[test]
    fn rejects_missing_root_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_create_dir_all().never();
        fs.expect_create_new_file().never();

        let service = ScaffoldService::new(Box::new(templates()), Box::new(fs));
        let err = service
            .generate_layer(Path::new("/missing"), Layer::Domain, &todo())
            .unwrap_err();

        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::InvalidRoot { .. })
        ));
    }

    #[test]
    fn empty_selection_fails_without_touching_disk() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().never();
        fs.expect_create_dir_all().never();

        let service = ScaffoldService::new(Box::new(templates()), Box::new(fs));
        let err = service
            .generate_layers(Path::new("/p"), &LayerSelection::new(), &todo())
            .unwrap_err();

        assert_eq!(err, ApplicationError::EmptySelection.into());
    }

    #[test]
    fn renders_tokens_into_created_files() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p: &Path| p == Path::new("/p"));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_create_new_file()
            .returning(move |path: &Path, content: &str| {
                sink.lock()
                    .unwrap()
                    .push((path.to_path_buf(), content.to_owned()));
                Ok(WriteOutcome::Created)
            });

        let service = ScaffoldService::new(Box::new(templates()), Box::new(fs));
        let report = service
            .generate_layer(Path::new("/p"), Layer::Domain, &todo())
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.created_count(), 7);
        assert_eq!(report.directories().len(), 4);

        let written = written.lock().unwrap();
        let (path, content) = &written[0];
        assert_eq!(path, Path::new("/p/lib/domain/entities/todo.dart"));
        assert!(content.contains("class Todo {} // todo"));
        assert!(written.iter().all(|(_, c)| !contains_tokens(c)));
    }

    #[test]
    fn existing_files_are_skipped_without_loading_templates() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().never();
        fs.expect_create_new_file().never();

        let mut templates = MockTemplateSource::new();
        templates.expect_get().never();

        let service = ScaffoldService::new(Box::new(templates), Box::new(fs));
        let report = service
            .generate_layer(Path::new("/p"), Layer::Data, &todo())
            .unwrap();

        assert_eq!(report.skipped_count(), 4);
        assert!(
            report
                .directories()
                .iter()
                .all(|d| d.status == DirectoryStatus::Existed)
        );
    }

    #[test]
    fn lost_race_reports_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_create_new_file()
            .returning(|_, _| Ok(WriteOutcome::AlreadyExists));

        let service = ScaffoldService::new(Box::new(templates()), Box::new(fs));
        let report = service
            .generate_layer(Path::new("/p"), Layer::Data, &todo())
            .unwrap();

        assert_eq!(report.skipped_count(), 4);
        assert!(report.is_success());
    }

    #[test]
    fn template_failure_does_not_stop_the_walk() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_create_new_file()
            .times(3)
            .returning(|_, _| Ok(WriteOutcome::Created));

        let mut templates = MockTemplateSource::new();
        templates.expect_get().returning(|id| {
            if id.as_str() == "data/model" {
                Err(ApplicationError::Template {
                    id: id.to_string(),
                    reason: "not found".into(),
                }
                .into())
            } else {
                Ok("x".into())
            }
        });

        let service = ScaffoldService::new(Box::new(templates), Box::new(fs));
        let report = service
            .generate_layer(Path::new("/p"), Layer::Data, &todo())
            .unwrap();

        assert_eq!(report.created_count(), 3);
        assert_eq!(report.failed_count(), 1);
        let (path, error) = report.failures().next().unwrap();
        assert_eq!(path, Path::new("/p/lib/data/models/todo_model.dart"));
        assert!(error.to_string().contains("data/model"));
    }

    #[test]
    fn files_under_a_failed_directory_are_not_attempted() {
        let blocked = PathBuf::from("/p/lib/data/datasources/todo_data_source");

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p: &Path| p == Path::new("/p"));
        let blocked_dir = blocked.clone();
        fs.expect_create_dir_all().returning(move |p: &Path| {
            if p == blocked_dir {
                Err(ApplicationError::Directory {
                    path: p.to_path_buf(),
                    reason: "a file is in the way".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_exists().returning(|_| false);
        let blocked_prefix = blocked.clone();
        fs.expect_create_new_file()
            .withf(move |p: &Path, _: &str| !p.starts_with(&blocked_prefix))
            .times(2)
            .returning(|_, _| Ok(WriteOutcome::Created));

        let service = ScaffoldService::new(Box::new(templates()), Box::new(fs));
        let report = service
            .generate_layer(Path::new("/p"), Layer::Data, &todo())
            .unwrap();

        // one directory + two data source files
        assert_eq!(report.failed_count(), 3);
        assert_eq!(report.created_count(), 2);
        assert_eq!(report.directories().len(), 5);
    }

    #[test]
    fn skeleton_creates_only_directories() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p: &Path| p == Path::new("/p"));
        fs.expect_create_dir_all().times(15).returning(|_| Ok(()));
        fs.expect_create_new_file().never();

        let mut templates = MockTemplateSource::new();
        templates.expect_get().never();

        let service = ScaffoldService::new(Box::new(templates), Box::new(fs));
        let report = service
            .generate_architecture_skeleton(Path::new("/p"))
            .unwrap();

        assert!(report.is_success());
        assert!(report.files().is_empty());
        assert_eq!(report.layer(), None);
    }

    #[test]
    fn profile_changes_plan_paths() {
        let service = ScaffoldService::new(
            Box::new(MockTemplateSource::new()),
            Box::new(MockFilesystem::new()),
        )
        .with_profile(Profile::Flat);

        let plan = service
            .plan_layer(Path::new("/p"), Layer::Data, &todo())
            .unwrap();
        assert_eq!(plan.root(), Path::new("/p/lib"));
        assert_eq!(
            plan.files().next().unwrap().path,
            Path::new("data/datasources/todo_remote_data_source.dart")
        );
    }
}
