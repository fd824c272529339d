//! `strata templates`: list the templates generation can use.

use tracing::info;

use strata_core::application::TemplateService;

use crate::{
    cli::{TemplatesArgs, TemplatesFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let source = super::template_source(&config);
    if let Some(dir) = source.override_dir() {
        info!(dir = %dir.display(), "listing with template overrides");
        output.info(&format!("Overrides from {}", dir.display()))?;
    }

    let service = TemplateService::new(Box::new(source));
    let templates = service.list()?;

    match args.format {
        _ if output.is_json() => output.json(&templates)?,
        TemplatesFormat::Json => output.json(&templates)?,
        TemplatesFormat::Table => output.templates(&templates, true)?,
        TemplatesFormat::List => output.templates(&templates, false)?,
    }

    for id in service.missing()? {
        output.warning(&format!("No template provides '{id}'"))?;
    }
    Ok(())
}
