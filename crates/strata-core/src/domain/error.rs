//! Errors raised by pure domain logic: names, layers, profiles, manifests.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy per failed entry)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid feature name '{name}': {reason}")]
    InvalidFeatureName { name: String, reason: String },

    #[error("Unknown layer '{0}'")]
    UnknownLayer(String),

    #[error("Unknown scaffolding profile '{0}'")]
    UnknownProfile(String),

    #[error("Invalid template id '{0}': expected '<layer>/<name>'")]
    InvalidTemplateId(String),

    // ========================================================================
    // Plan Violations
    // ========================================================================
    #[error("Duplicate path in layer plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFeatureName { name, reason } => vec![
                format!("'{name}' was rejected: {reason}"),
                "Feature name should start with a letter and can only contain letters and numbers"
                    .into(),
                "Examples: todo, Order, userProfile".into(),
            ],
            Self::UnknownLayer(_) => vec![
                "Supported layers:".into(),
                "  • data          - data sources, repositories, models".into(),
                "  • domain        - entities, repositories, use cases".into(),
                "  • presentation  - screens and widgets".into(),
            ],
            Self::UnknownProfile(_) => vec![
                "Supported profiles:".into(),
                "  • flat         - data sources directly under datasources/".into(),
                "  • per-feature  - one <name>_data_source/ folder per feature".into(),
                "  • pluralized   - feature folders named after the plural".into(),
            ],
            Self::InvalidTemplateId(_) => vec![
                "Template ids look like 'data/model' or 'domain/get_usecase'".into(),
                "Try: strata templates".into(),
            ],
            _ => vec!["This is likely a bug in a layer manifest, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFeatureName { .. }
            | Self::UnknownLayer(_)
            | Self::UnknownProfile(_) => ErrorCategory::Validation,
            Self::InvalidTemplateId(_) => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
