//! Core domain layer for Strata.
//!
//! This module contains pure business logic with no I/O. Filesystem access
//! and template lookup are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, network, or prompt calls
//! - **Value types**: everything is `Clone + PartialEq`
//! - **Declarative**: what a layer generates is data ([`manifest`]), not code

pub mod entities;
pub mod error;
pub mod feature_name;
pub mod manifest;
pub mod value_objects;

pub use entities::{
    plan::{LayerPlan, PlannedFile},
    template::{RenderContext, TemplateId, TemplateRef, contains_tokens},
};
pub use error::{DomainError, ErrorCategory};
pub use feature_name::FeatureName;
pub use manifest::{LAYER_REGISTRY, LIB_DIR, LayerDef, ManifestEntry, plan_layer, plan_skeleton};
pub use value_objects::{Layer, LayerSelection, Profile};
