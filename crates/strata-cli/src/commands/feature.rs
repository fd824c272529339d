//! `strata feature`: generate layer files for one feature.
//!
//! Whatever the command line leaves out (name, layers) is asked for through
//! the terminal prompter. `--dry-run` only plans, so it never prompts.

use std::path::Path;

use tracing::{debug, instrument};

use strata_adapters::LocalFilesystem;
use strata_core::{
    application::{FeatureWorkflow, ScaffoldService},
    domain::{FeatureName, LayerSelection, Profile},
};

use crate::{
    cli::FeatureArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompts,
};

#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>"), dry_run = args.dry_run))]
pub fn execute(args: FeatureArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args
        .root
        .resolve()
        .with_cli_context(|| "could not determine the current directory")?;
    let profile = args
        .profile
        .map(Profile::from)
        .unwrap_or(config.defaults.profile);
    let selection = args
        .selection()
        .or_else(|| config.defaults.layer_selection());
    debug!(%profile, root = %root.display(), "Feature arguments resolved");

    let service = ScaffoldService::new(
        Box::new(super::template_source(&config)),
        Box::new(LocalFilesystem::new()),
    )
    .with_profile(profile);

    if args.dry_run {
        return dry_run(&service, &root, args.name.as_deref(), selection, &output);
    }

    let prompter = prompts::terminal_prompter();
    let workflow = FeatureWorkflow::new(&service, prompter.as_ref(), &output);
    let reports = workflow.run_partial(&root, args.name.as_deref(), selection)?;
    super::finish(&output, &reports)
}

/// Print the plan of every selected layer (all of them by default).
fn dry_run(
    service: &ScaffoldService,
    root: &Path,
    raw_name: Option<&str>,
    selection: Option<LayerSelection>,
    output: &OutputManager,
) -> CliResult<()> {
    let raw_name = raw_name.ok_or_else(|| CliError::InvalidInput {
        message: "--dry-run needs the feature name as an argument".into(),
    })?;
    let name = FeatureName::parse(raw_name).map_err(|e| CliError::Core(e.into()))?;

    for layer in selection.unwrap_or_else(LayerSelection::all).iter() {
        let plan = service.plan_layer(root, layer, &name)?;
        output.plan(&plan)?;
    }
    Ok(())
}
