//! `strata skeleton`: the empty data/domain/presentation tree.

use tracing::instrument;

use strata_adapters::LocalFilesystem;
use strata_core::application::{FeatureWorkflow, ScaffoldService};

use crate::{
    cli::SkeletonArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompts::NonInteractive,
};

#[instrument(skip_all)]
pub fn execute(args: SkeletonArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args
        .root
        .resolve()
        .with_cli_context(|| "could not determine the current directory")?;

    let service = ScaffoldService::new(
        Box::new(super::template_source(&config)),
        Box::new(LocalFilesystem::new()),
    );
    let prompter = NonInteractive::new("the skeleton takes no input");
    let workflow = FeatureWorkflow::new(&service, &prompter, &output);

    let report = workflow.run_skeleton(&root)?;
    super::finish(&output, &[report])
}
