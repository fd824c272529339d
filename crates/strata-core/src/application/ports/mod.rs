//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and exclusive file creation
//!   - `TemplateSource`: template text lookup
//!   - `Prompter`: feature name and layer selection input
//!   - `Notifier`: status and error messages
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, Notifier, Prompter, SelectOption, TemplateSource, WriteOutcome};

#[cfg(test)]
pub use output::{MockFilesystem, MockNotifier, MockPrompter, MockTemplateSource};
