//! Output management and formatting.
//!
//! [`OutputManager`] is the CLI's [`Notifier`]: workflow messages and the
//! per-entry report lines all go through it, so `--quiet`, `--no-color` and
//! `--output-format json` are honoured in one place.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use strata_core::{
    application::{DirectoryStatus, FileStatus, GenerationReport, TemplateInfo, ports::Notifier},
    domain::{LIB_DIR, LayerPlan, TemplateRef},
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` from config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => parse_format(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`. Never suppressed; goes to stderr in JSON
    /// mode so stdout stays parseable.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        if self.is_json() {
            self.err_term.write_line(&line)
        } else {
            self.term.write_line(&line)
        }
    }

    /// Warning indicator: `⚠ <msg>`, on stderr.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.err_term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Requested data (a config value, a template id). Printed even in
    /// quiet mode.
    pub fn data(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    /// Pretty-printed JSON on stdout. Printed even in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// One line per directory and file of a finished run.
    pub fn report(&self, report: &GenerationReport) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        for line in report_lines(report, self.no_color) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// What a dry run would create.
    pub fn plan(&self, plan: &LayerPlan) -> io::Result<()> {
        if self.is_json() {
            return self.json(plan);
        }
        if self.quiet {
            return Ok(());
        }
        let title = plan
            .layer()
            .map_or_else(|| "Skeleton".to_owned(), |l| format!("{} layer", l.title()));
        self.header(&format!("{title} (dry run)"))?;
        for line in plan_lines(plan) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// Template listing in the requested shape.
    pub fn templates(&self, templates: &[TemplateInfo], as_table: bool) -> io::Result<()> {
        if as_table {
            let width = templates
                .iter()
                .map(|t| t.id.as_str().len())
                .max()
                .unwrap_or(0)
                .max("ID".len());
            self.header(&format!("{:<width$}  TARGET", "ID"))?;
            for t in templates {
                self.data(&format!("{:<width$}  {}", t.id.as_str(), t.target.unwrap_or("-")))?;
            }
        } else {
            for t in templates {
                self.data(t.id.as_str())?;
            }
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn silent(&self) -> bool {
        self.quiet || self.is_json()
    }
}

impl Notifier for OutputManager {
    fn info(&self, message: &str) {
        let _ = self.success(message);
    }

    fn error(&self, message: &str) {
        let _ = OutputManager::error(self, message);
    }
}

fn parse_format(raw: &str) -> OutputFormat {
    match raw.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

/// Paths are shown relative to the project root, e.g. `lib/domain/...`.
fn display_path(report: &GenerationReport, path: &Path) -> String {
    let base = report.root().parent().unwrap_or(report.root());
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

pub(crate) fn report_lines(report: &GenerationReport, no_color: bool) -> Vec<String> {
    let mark = |symbol: &str, paint: fn(&str) -> String| {
        if no_color {
            symbol.to_owned()
        } else {
            paint(symbol)
        }
    };
    let created = mark("\u{2713} created", |s| s.green().to_string());
    let existed = mark("\u{2022} exists", |s| s.dimmed().to_string());
    let skipped = mark("\u{2022} skipped (exists)", |s| s.dimmed().to_string());
    let failed = mark("\u{2717} failed", |s| s.red().to_string());

    let dirs = report.directories().iter().filter_map(|d| {
        let path = display_path(report, &d.path);
        match &d.status {
            DirectoryStatus::Created => Some(format!("  {created}  {path}/")),
            // Existing directories are only noise on repeated runs.
            DirectoryStatus::Existed if report.layer().is_none() => {
                Some(format!("  {existed}  {path}/"))
            }
            DirectoryStatus::Existed => None,
            DirectoryStatus::Failed { error } => Some(format!("  {failed}  {path}/: {error}")),
        }
    });
    let files = report.files().iter().map(|f| {
        let path = display_path(report, &f.path);
        match &f.status {
            FileStatus::Created => format!("  {created}  {path}"),
            FileStatus::Skipped => format!("  {skipped}  {path}"),
            FileStatus::Failed { error } => format!("  {failed}  {path}: {error}"),
        }
    });
    dirs.chain(files).collect()
}

pub(crate) fn plan_lines(plan: &LayerPlan) -> Vec<String> {
    let lib = Path::new(LIB_DIR);
    let dirs = plan
        .directories()
        .map(|d| format!("  + {}/", lib.join(d).display()));
    let files = plan.files().map(|f| {
        let source = match &f.template {
            TemplateRef::Named(id) => id.to_string(),
            TemplateRef::Empty => "empty".to_owned(),
        };
        format!("  + {}  ({source})", lib.join(&f.path).display())
    });
    dirs.chain(files).collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────
