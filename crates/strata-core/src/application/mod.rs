//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, FeatureWorkflow, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Reports**: Per-run generation outcomes
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. What gets generated lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

pub use services::{FeatureWorkflow, ScaffoldService, TemplateInfo, TemplateService};

pub use ports::{Filesystem, Notifier, Prompter, SelectOption, TemplateSource, WriteOutcome};

pub use error::ApplicationError;
pub use report::{DirectoryOutcome, DirectoryStatus, FileOutcome, FileStatus, GenerationReport};
