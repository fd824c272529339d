//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STRATA_` prefix with `__` between sections
//!    (`STRATA_DEFAULTS__PROFILE=flat`)
//! 3. Config file (`--config`, or [`AppConfig::config_path`] if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use strata_core::domain::{Layer, LayerSelection, Profile};

pub const ENV_PREFIX: &str = "STRATA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `strata feature`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub profile: Profile,
    /// Layers generated when `--layer` is absent. Empty means "ask".
    pub layers: Vec<Layer>,
}

impl Defaults {
    pub fn layer_selection(&self) -> Option<LayerSelection> {
        let selection: LayerSelection = self.layers.iter().copied().collect();
        (!selection.is_empty()).then_some(selection)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<layer>/<name>.template` overrides.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append log events to this file in addition to stderr.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is only
    /// read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        if required && !path.is_file() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        debug!(path = %path.display(), required, "loading configuration");

        let defaults = toml::to_string(&Self::default()).context("Failed to encode defaults")?;

        Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("defaults.layers")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize::<Self>()
            .context("Failed to deserialize configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".strata.toml"))
    }

    /// Look up a dotted key (`defaults.profile`) as display text.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = serde_json::to_value(self).ok()?;
        let found = key.split('.').try_fold(&value, |v, part| v.get(part))?;
        Some(match found {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    /// Every leaf key with its value, in declaration order.
    pub fn entries(&self) -> Vec<(String, String)> {
        const KEYS: [&str; 6] = [
            "defaults.profile",
            "defaults.layers",
            "output.no_color",
            "output.format",
            "templates.local_path",
            "logging.file",
        ];
        KEYS.iter()
            .map(|k| ((*k).to_owned(), self.get(k).unwrap_or_default()))
            .collect()
    }

    /// Defaults rendered as a commented TOML document for `config init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to encode configuration")?;
        Ok(format!(
            "# Strata configuration\n\
             # Every key can be overridden with STRATA_<SECTION>__<KEY>.\n\n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_are_per_feature_and_prompting() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.profile, Profile::PerFeature);
        assert!(cfg.defaults.layer_selection().is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("none.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let err = AppConfig::load(Some(&PathBuf::from("/does/not/exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("strata.toml");
        std::fs::write(
            &path,
            "[defaults]\nprofile = \"flat\"\nlayers = [\"domain\"]\n\n[templates]\nlocal_path = \"tpl\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.defaults.profile, Profile::Flat);
        assert_eq!(
            cfg.defaults.layer_selection(),
            Some(LayerSelection::new().with(Layer::Domain))
        );
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("tpl")));
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("STRATA_DEFAULTS__PROFILE".to_owned(), "pluralized".to_owned()),
            ("STRATA_OUTPUT__NO_COLOR".to_owned(), "true".to_owned()),
        ])));

        let cfg = AppConfig::load_from(&temp.path().join("none.toml"), false, env).unwrap();
        assert_eq!(cfg.defaults.profile, Profile::Pluralized);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn dotted_get() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.profile").as_deref(), Some("per-feature"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("templates.local_path").as_deref(), Some(""));
        assert_eq!(cfg.get("nope.key"), None);
    }

    #[test]
    fn init_document_round_trips() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.starts_with("# Strata configuration"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn entries_list_every_key() {
        let entries = AppConfig::default().entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], ("defaults.profile".into(), "per-feature".into()));
    }
}
