//! Override directory in front of the built-in templates.
//!
//! # Override resolution order
//!
//! The first candidate that is an existing directory wins:
//!
//! 1. **`templates.local_path`** from the configuration (or `--templates`)
//! 2. **`$STRATA_TEMPLATES_DIR`**
//! 3. **`./.strata/templates`** relative to the current working directory
//!
//! When none exists, every lookup goes straight to [`BuiltinTemplates`].
//! An override directory only has to contain the templates it changes.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use strata_core::{application::ports::TemplateSource, domain::TemplateId, error::StrataResult};

use crate::{builtin_templates::BuiltinTemplates, template_store::DirectoryTemplates};

pub const TEMPLATES_DIR_ENV: &str = "STRATA_TEMPLATES_DIR";
pub const PROJECT_TEMPLATES_DIR: &str = ".strata/templates";

/// Template source that prefers an override directory.
#[derive(Debug, Clone, Default)]
pub struct LayeredTemplates {
    overrides: Option<DirectoryTemplates>,
    fallback: BuiltinTemplates,
}

impl LayeredTemplates {
    /// Built-ins only.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_overrides(dir: impl Into<PathBuf>) -> Self {
        Self {
            overrides: Some(DirectoryTemplates::new(dir)),
            fallback: BuiltinTemplates,
        }
    }

    /// Probe the candidate directories described in the module docs.
    #[instrument]
    pub fn discover(configured: Option<&Path>) -> Self {
        let env_dir = std::env::var(TEMPLATES_DIR_ENV).ok();
        for candidate in candidate_paths(configured, env_dir.as_deref()) {
            if candidate.is_dir() {
                info!(path = %candidate.display(), "using template overrides");
                return Self::with_overrides(candidate);
            }
            debug!(path = %candidate.display(), "no override directory here");
        }
        Self::builtin()
    }

    pub fn override_dir(&self) -> Option<&Path> {
        self.overrides.as_ref().map(DirectoryTemplates::dir)
    }
}

/// Ordered override candidates; absent inputs are omitted.
fn candidate_paths(configured: Option<&Path>, env_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    if let Some(dir) = configured {
        paths.push(dir.to_path_buf());
    }
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        paths.push(PathBuf::from(dir));
    }
    paths.push(PathBuf::from(PROJECT_TEMPLATES_DIR));
    paths
}

impl TemplateSource for LayeredTemplates {
    fn get(&self, id: &TemplateId) -> StrataResult<String> {
        if let Some(overrides) = self.overrides.as_ref().filter(|o| o.contains(id)) {
            debug!(id = %id, "template overridden");
            return overrides.get(id);
        }
        self.fallback.get(id)
    }

    fn list(&self) -> StrataResult<Vec<TemplateId>> {
        let mut ids = self.fallback.list()?;
        if let Some(overrides) = &self.overrides {
            ids.extend(overrides.list()?);
        }
        ids.sort();
        ids.dedup();
        Ok(ids)
    }
}
