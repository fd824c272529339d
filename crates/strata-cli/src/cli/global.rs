//! Flags shared by every `strata` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `strata feature -q`
//! and `strata -q feature` mean the same thing.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level on stderr: warn by default, then info, debug, trace.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (repeat up to -vvv)",
        long_help = "Raise the log level printed to stderr.
    -v      info: layers and files as they are generated
    -vv     debug: resolved inputs, template lookups
    -vvv    trace: everything"
    )]
    pub verbose: u8,

    /// Only errors and explicitly requested values reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing but errors and requested values"
    )]
    pub quiet: bool,

    /// Plain output. Also set by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Do not color the report"
    )]
    pub no_color: bool,

    /// Configuration file; must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format`, then to whether stdout is a terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How reports are printed"
    )]
    pub output_format: OutputFormat,
}

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Config value, else detect from the terminal.
    #[default]
    Auto,
    /// Colored status marks.
    Human,
    /// Same lines, no ANSI codes.
    Plain,
    /// One JSON document on stdout.
    Json,
}
