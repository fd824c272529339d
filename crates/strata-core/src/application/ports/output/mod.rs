//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides the filesystem and template
//! implementations; `strata-cli` provides the prompt and notification ones.

use std::path::Path;

use crate::domain::TemplateId;
use crate::error::StrataResult;

/// Result of an exclusive-create write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and now holds the given content.
    Created,
    /// A file was already at the path; it was left untouched.
    AlreadyExists,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Nothing in this port can overwrite a file, or delete one it did not just
/// create.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Create `path` with `content`, failing over to
    /// [`WriteOutcome::AlreadyExists`] if anything is already there.
    ///
    /// Must be atomic with respect to other writers (`O_EXCL` semantics).
    /// If the content cannot be written after the file was created, the
    /// file is removed before the error is returned, so a later run creates
    /// it again instead of skipping an empty file.
    fn create_new_file(&self, path: &Path, content: &str) -> StrataResult<WriteOutcome>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `strata_adapters::BuiltinTemplates` (embedded)
/// - `strata_adapters::template_store::DirectoryTemplates` (user directory)
/// - `strata_adapters::template_store::LayeredTemplates` (override + fallback)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Raw (unrendered) text of a template.
    fn get(&self, id: &TemplateId) -> StrataResult<String>;

    /// All template ids this source can provide, sorted.
    fn list(&self) -> StrataResult<Vec<TemplateId>>;
}

/// One choice in a multi-select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub description: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Port for collecting input from the user.
///
/// `Ok(None)` means the user dismissed the prompt. `Err` is reserved for the
/// host itself failing (no terminal, broken pipe).
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask_text(&self, prompt: &str) -> StrataResult<Option<String>>;

    /// Indices into `options` of the chosen entries.
    fn ask_multi_select(
        &self,
        placeholder: &str,
        options: &[SelectOption],
    ) -> StrataResult<Option<Vec<usize>>>;
}

/// Port for user-visible status messages.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}
