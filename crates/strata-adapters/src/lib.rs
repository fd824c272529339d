//! Infrastructure adapters for Strata.
//!
//! This crate implements the driven ports defined in
//! `strata_core::application::ports`. It contains all disk I/O and the
//! embedded templates.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinTemplates;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{DirectoryTemplates, LayeredTemplates};
