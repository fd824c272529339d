//! Template source adapters.

mod directory;
mod layered;

pub use directory::{DirectoryTemplates, TEMPLATE_EXTENSION};
pub use layered::{LayeredTemplates, PROJECT_TEMPLATES_DIR, TEMPLATES_DIR_ENV};
