//! `strata config`: inspect and initialise configuration.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` override, if any; `path` and `init` act
/// on it instead of the default location.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&json!({ "key": key, "value": value }))?;
            } else {
                output.data(&value)?;
            }
        }

        ConfigCommands::List => {
            let entries = config.entries();
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                for (key, value) in entries {
                    output.data(&format!("{key} = {value}"))?;
                }
            }
        }

        ConfigCommands::Path => {
            output.data(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            init(&path, force)?;
            output.success(&format!("Wrote default configuration to {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config
        .get(key)
        .ok_or_else(|| CliError::config(format!("Unknown config key: '{key}'")))
}

fn init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput {
            message: format!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            ),
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("could not create {}", parent.display()))?;
    }
    let text = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "encoding defaults")?;
    std::fs::write(path, text).with_cli_context(|| format!("could not write {}", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
