//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and hand the results to the
//! [`OutputManager`]. No business logic lives here.

use strata_adapters::LayeredTemplates;
use strata_core::application::{ApplicationError, GenerationReport};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod feature;
pub mod skeleton;
pub mod templates;

/// Built-in templates, overridden by `templates.local_path`,
/// `$STRATA_TEMPLATES_DIR` or `.strata/templates`, first match wins.
pub(crate) fn template_source(config: &AppConfig) -> LayeredTemplates {
    LayeredTemplates::discover(config.templates.local_path.as_deref())
}

/// Print finished reports; any failed entry turns into exit code 1.
pub(crate) fn finish(output: &OutputManager, reports: &[GenerationReport]) -> CliResult<()> {
    if output.is_json() {
        output.json(reports)?;
    } else {
        for report in reports {
            output.report(report)?;
        }
    }

    let failed: usize = reports.iter().map(GenerationReport::failed_count).sum();
    if failed > 0 {
        return Err(CliError::Core(
            ApplicationError::GenerationIncomplete { failed }.into(),
        ));
    }
    Ok(())
}
