//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use strata_core::domain::{Layer, LayerSelection, Profile};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean Architecture feature scaffolding",
    long_about = "Strata generates the data, domain and presentation layers of a \
                  feature in a Clean Architecture project. Existing files are \
                  never overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 strata skeleton\n\
        \x20 strata feature todo --layer domain\n\
        \x20 strata feature order --layer data,domain --profile flat\n\
        \x20 strata feature                      # prompts for name and layers\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the empty data/domain/presentation directory tree.
    #[command(
        about = "Generate the architecture skeleton",
        after_help = "EXAMPLES:\n\
            \x20 strata skeleton\n\
            \x20 strata skeleton --root ../my_app"
    )]
    Skeleton(SkeletonArgs),

    /// Generate layer files for one feature.
    #[command(
        visible_alias = "f",
        about = "Generate feature files",
        after_help = "EXAMPLES:\n\
            \x20 strata feature todo --layer domain\n\
            \x20 strata feature todo --all-layers --dry-run\n\
            \x20 strata feature category --all-layers --profile pluralized"
    )]
    Feature(FeatureArgs),

    /// List the templates available to generation.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 strata templates\n\
            \x20 strata templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get defaults.profile\n\
            \x20 strata config list\n\
            \x20 strata config init"
    )]
    Config(ConfigCommands),
}

// ── skeleton ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SkeletonArgs {
    #[command(flatten)]
    pub root: RootArg,
}

/// `--root`, shared by every generating command.
#[derive(Debug, Args)]
pub struct RootArg {
    /// Project root; `lib/` is created beneath it.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,
}

impl RootArg {
    pub fn resolve(&self) -> std::io::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir(),
        }
    }
}

// ── feature ───────────────────────────────────────────────────────────────────

/// Arguments for `strata feature`.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    /// Feature name, e.g. `todo` or `userProfile`. Prompted for when absent.
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: Option<String>,

    /// Layers to generate; repeat the flag or separate with commas.
    #[arg(
        short = 'l',
        long = "layer",
        value_name = "LAYER",
        value_enum,
        value_delimiter = ',',
        conflicts_with = "all_layers",
        help = "Layer(s) to generate"
    )]
    pub layers: Vec<LayerArg>,

    /// Shorthand for `--layer data,domain,presentation`.
    #[arg(short = 'a', long = "all-layers", help = "Generate every layer")]
    pub all_layers: bool,

    /// Directory layout; falls back to `defaults.profile`.
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "PROFILE",
        value_enum,
        help = "Directory layout profile"
    )]
    pub profile: Option<ProfileArg>,

    #[command(flatten)]
    pub root: RootArg,

    /// Print the plan instead of writing it.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl FeatureArgs {
    /// Layers given on the command line, `None` when the user gave none.
    pub fn selection(&self) -> Option<LayerSelection> {
        if self.all_layers {
            return Some(LayerSelection::all());
        }
        let selection: LayerSelection = self.layers.iter().map(|&l| Layer::from(l)).collect();
        (!selection.is_empty()).then_some(selection)
    }
}

// ── templates ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: TemplatesFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplatesFormat {
    /// Ids with their output filename pattern.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.profile`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LayerArg {
    Data,
    Domain,
    /// Also accepted as `ui`.
    #[value(alias = "ui")]
    Presentation,
}

impl From<LayerArg> for Layer {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Data => Layer::Data,
            LayerArg::Domain => Layer::Domain,
            LayerArg::Presentation => Layer::Presentation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ProfileArg {
    /// `data/models/`, `domain/entities/`, ... shared by all features.
    Flat,
    /// Data sources in a per-feature folder; screens under `features/<name>/`.
    PerFeature,
    /// Per-feature folders named with the plural.
    Pluralized,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Flat => Profile::Flat,
            ProfileArg::PerFeature => Profile::PerFeature,
            ProfileArg::Pluralized => Profile::Pluralized,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_feature_command() {
        let cli = Cli::parse_from(["strata", "feature", "todo", "--layer", "domain"]);
        let Commands::Feature(args) = cli.command else {
            panic!("expected Feature command");
        };
        assert_eq!(args.name.as_deref(), Some("todo"));
        assert_eq!(
            args.selection(),
            Some(LayerSelection::new().with(Layer::Domain))
        );
        assert!(!args.dry_run);
    }

    #[test]
    fn layers_accept_commas_and_repeats() {
        let cli = Cli::parse_from([
            "strata", "feature", "todo", "-l", "data,ui", "-l", "domain",
        ]);
        let Commands::Feature(args) = cli.command else {
            panic!("expected Feature command");
        };
        assert_eq!(args.selection(), Some(LayerSelection::all()));
    }

    #[test]
    fn no_layers_means_ask() {
        let cli = Cli::parse_from(["strata", "feature"]);
        let Commands::Feature(args) = cli.command else {
            panic!("expected Feature command");
        };
        assert_eq!(args.name, None);
        assert_eq!(args.selection(), None);
    }

    #[test]
    fn all_layers_conflicts_with_layer() {
        let result =
            Cli::try_parse_from(["strata", "feature", "todo", "--all-layers", "--layer", "data"]);
        assert!(result.is_err());
    }

    #[test]
    fn profile_values_are_kebab_case() {
        let cli = Cli::parse_from(["strata", "feature", "x", "-a", "--profile", "per-feature"]);
        let Commands::Feature(args) = cli.command else {
            panic!("expected Feature command");
        };
        assert_eq!(args.profile.map(Profile::from), Some(Profile::PerFeature));
    }

    #[test]
    fn unknown_layer_is_rejected() {
        assert!(Cli::try_parse_from(["strata", "feature", "x", "--layer", "infra"]).is_err());
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::parse_from(["strata", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["strata", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }
}
