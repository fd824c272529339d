//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No layer was selected.
    #[error("No layers selected")]
    EmptySelection,

    /// A directory could not be created.
    #[error("Could not create directory {path}: {reason}")]
    Directory { path: PathBuf, reason: String },

    /// A template could not be found or read.
    #[error("Template '{id}' unavailable: {reason}")]
    Template { id: String, reason: String },

    /// A file could not be written.
    #[error("Could not write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// The project root is missing or not a directory.
    #[error("Project root {path} is not an existing directory")]
    InvalidRoot { path: PathBuf },

    /// The prompt host failed (no terminal, I/O error).
    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },

    /// One or more entries of a generation run failed.
    #[error("{failed} {} could not be generated", entries(.failed))]
    GenerationIncomplete { failed: usize },
}

fn entries(n: &usize) -> &'static str {
    if *n == 1 { "entry" } else { "entries" }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySelection => vec![
                "Select at least one layer".into(),
                "Example: strata feature todo --layer domain".into(),
                "Or generate everything with --all-layers".into(),
            ],
            Self::Directory { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that no regular file is in the way".into(),
                "Check that you have write permissions".into(),
            ],
            Self::Template { .. } => vec![
                "Try: strata templates to see available templates".into(),
                "Check templates.local_path in your configuration".into(),
            ],
            Self::Write { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::InvalidRoot { path } => vec![
                format!("Directory not found: {}", path.display()),
                "Run strata from your project root or pass --root".into(),
            ],
            Self::Prompt { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Pass the feature name and --layer on the command line instead".into(),
            ],
            Self::GenerationIncomplete { .. } => vec![
                "See the failed entries above".into(),
                "Fix the cause and re-run; existing files are skipped".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySelection | Self::Prompt { .. } => ErrorCategory::Validation,
            Self::Template { .. } | Self::InvalidRoot { .. } => ErrorCategory::NotFound,
            Self::Directory { .. } | Self::Write { .. } | Self::GenerationIncomplete { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_pluralizes() {
        assert_eq!(
            ApplicationError::GenerationIncomplete { failed: 1 }.to_string(),
            "1 entry could not be generated"
        );
        assert_eq!(
            ApplicationError::GenerationIncomplete { failed: 3 }.to_string(),
            "3 entries could not be generated"
        );
    }

    #[test]
    fn categories() {
        assert_eq!(
            ApplicationError::EmptySelection.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ApplicationError::InvalidRoot { path: "x".into() }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            ApplicationError::Write {
                path: "x".into(),
                reason: "denied".into()
            }
            .category(),
            ErrorCategory::Internal
        );
    }
}
