pub mod plan;
pub mod template;

pub use plan::{LayerPlan, PlannedFile};
pub use template::{RenderContext, TemplateId, TemplateRef};
