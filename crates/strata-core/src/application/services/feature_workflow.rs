//! Feature workflow - the "generate feature files" use case.
//!
//! Collects a feature name and a layer selection (from arguments or through
//! the [`Prompter`]), hands them to the [`ScaffoldService`] and reports the
//! outcome of every layer through the [`Notifier`].

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Notifier, Prompter, SelectOption},
        report::GenerationReport,
        services::ScaffoldService,
    },
    domain::{DomainError, FeatureName, Layer, LayerSelection},
    error::StrataResult,
};

pub const FEATURE_NAME_PROMPT: &str = "Enter feature name:";
pub const LAYER_SELECT_PLACEHOLDER: &str = "Select files to generate";
pub const MISSING_NAME_MESSAGE: &str = "Invalid feature name";
pub const INVALID_NAME_MESSAGE: &str = "Invalid feature name. Feature name should start with a letter and can only contain letters and numbers";
pub const INVALID_SELECTION_MESSAGE: &str = "Invalid file selection";
pub const SKELETON_SUCCESS_MESSAGE: &str = "Clean Architecture generated successfully!";

/// Interactive front end of [`ScaffoldService`].
pub struct FeatureWorkflow<'a> {
    service: &'a ScaffoldService,
    prompter: &'a dyn Prompter,
    notifier: &'a dyn Notifier,
}

impl<'a> FeatureWorkflow<'a> {
    pub fn new(
        service: &'a ScaffoldService,
        prompter: &'a dyn Prompter,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            service,
            prompter,
            notifier,
        }
    }

    /// Prompt for everything, then generate.
    pub fn run(&self, root: &Path) -> StrataResult<Vec<GenerationReport>> {
        self.run_partial(root, None, None)
    }

    /// Generate without prompting.
    pub fn run_with(
        &self,
        root: &Path,
        raw_name: &str,
        selection: LayerSelection,
    ) -> StrataResult<Vec<GenerationReport>> {
        self.run_partial(root, Some(raw_name), Some(selection))
    }

    /// Prompt only for what the caller did not supply.
    ///
    /// Returns one report per selected layer. Layers whose report contains
    /// failures are still returned; callers decide what that means for them.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidFeatureName`] for a missing or invalid name
    /// - [`ApplicationError::EmptySelection`] for a missing or empty selection
    /// - Anything [`ScaffoldService::generate_layer`] fails with up front
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn run_partial(
        &self,
        root: &Path,
        raw_name: Option<&str>,
        selection: Option<LayerSelection>,
    ) -> StrataResult<Vec<GenerationReport>> {
        let name = self.resolve_name(raw_name)?;
        let selection = self.resolve_selection(selection)?;
        debug!(feature = %name, layers = %selection, "Inputs resolved");

        let mut reports = Vec::with_capacity(selection.len());
        for layer in selection.iter() {
            match self.service.generate_layer(root, layer, &name) {
                Ok(report) => {
                    self.notify_layer(layer, &name, &report);
                    reports.push(report);
                }
                Err(e) => {
                    self.notifier.error(&layer_error(layer, &name, &e.to_string()));
                    return Err(e);
                }
            }
        }
        Ok(reports)
    }

    /// Generate the empty architecture skeleton.
    pub fn run_skeleton(&self, root: &Path) -> StrataResult<GenerationReport> {
        match self.service.generate_architecture_skeleton(root) {
            Ok(report) if report.is_success() => {
                self.notifier.info(SKELETON_SUCCESS_MESSAGE);
                Ok(report)
            }
            Ok(report) => {
                self.notifier.error(&format!(
                    "Error generating Clean Architecture: {}",
                    report.failure_summary()
                ));
                Ok(report)
            }
            Err(e) => {
                self.notifier
                    .error(&format!("Error generating Clean Architecture: {e}"));
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve_name(&self, raw_name: Option<&str>) -> StrataResult<FeatureName> {
        let raw = match raw_name {
            Some(raw) => Some(raw.to_owned()),
            None => self.prompter.ask_text(FEATURE_NAME_PROMPT)?,
        };

        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                self.notifier.error(MISSING_NAME_MESSAGE);
                return Err(DomainError::InvalidFeatureName {
                    name: String::new(),
                    reason: "no feature name entered".into(),
                }
                .into());
            }
        };

        FeatureName::parse(&raw).map_err(|e| {
            self.notifier.error(INVALID_NAME_MESSAGE);
            e.into()
        })
    }

    fn resolve_selection(&self, selection: Option<LayerSelection>) -> StrataResult<LayerSelection> {
        let selection = match selection {
            Some(selection) => selection,
            None => {
                let options: Vec<SelectOption> = Layer::ALL
                    .iter()
                    .map(|l| SelectOption::new(l.label(), l.description()))
                    .collect();
                self.prompter
                    .ask_multi_select(LAYER_SELECT_PLACEHOLDER, &options)?
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|i| Layer::ALL.get(i).copied())
                    .collect()
            }
        };

        if selection.is_empty() {
            self.notifier.error(INVALID_SELECTION_MESSAGE);
            return Err(ApplicationError::EmptySelection.into());
        }
        Ok(selection)
    }

    fn notify_layer(&self, layer: Layer, name: &FeatureName, report: &GenerationReport) {
        if report.is_success() {
            self.notifier.info(&format!(
                "{} layer files for {} feature generated successfully.",
                layer.title(),
                name.lower()
            ));
        } else {
            self.notifier
                .error(&layer_error(layer, name, &report.failure_summary()));
        }
    }
}

fn layer_error(layer: Layer, name: &FeatureName, details: &str) -> String {
    format!(
        "Error generating {} layer files for {} feature: {details}",
        layer.as_str(),
        name.lower()
    )
}
