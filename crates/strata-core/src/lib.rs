//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! feature scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! │  (Prompter + Notifier implementations)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, FeatureWorkflow, ...) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, TemplateSource, ...)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BuiltinTemplates, ...)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FeatureName, Layer, manifests, render) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use strata_core::prelude::*;
//!
//! let name = FeatureName::parse("todo")?;
//! let service = ScaffoldService::new(templates, filesystem);
//! let report = service.generate_layer(Path::new("."), Layer::Domain, &name)?;
//! assert!(report.is_success());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FeatureWorkflow, GenerationReport, ScaffoldService, TemplateService,
        ports::{Filesystem, Notifier, Prompter, SelectOption, TemplateSource, WriteOutcome},
    };
    pub use crate::domain::{
        FeatureName, Layer, LayerPlan, LayerSelection, Profile, RenderContext, TemplateId,
        TemplateRef,
    };
    pub use crate::error::{StrataError, StrataResult};
}
