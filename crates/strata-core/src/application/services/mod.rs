//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a layer" or "list templates".

pub mod feature_workflow;
pub mod scaffold_service;
pub mod template_service;

pub use feature_workflow::FeatureWorkflow;
pub use scaffold_service::ScaffoldService;
pub use template_service::{TemplateInfo, TemplateService};
