//! Domain value objects: Layer, LayerSelection, Profile.
//!
//! # Design
//!
//! These are pure value types (`Copy` where possible, equality-by-value, no
//! identity). They define the string representations and `FromStr` parsers.
//! What a layer actually generates lives in `manifest.rs`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Layer ────────────────────────────────────────────────────────────────────

/// One of the three generation targets.
///
/// Ordering follows declaration order, which is also the order layers are
/// generated in when several are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Data,
    Domain,
    Presentation,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Self::Data, Self::Domain, Self::Presentation];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Domain => "domain",
            Self::Presentation => "presentation",
        }
    }

    /// Label shown in the layer multi-select prompt.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Data => "Data Layer",
            Self::Domain => "Domain Layer",
            Self::Presentation => "Presentation Layer",
        }
    }

    /// Secondary text shown next to [`Self::label`].
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Data => "Generate files for the Data layer",
            Self::Domain => "Generate files for the Domain layer",
            Self::Presentation => "Generate files for the Presentation layer",
        }
    }

    /// Capitalised name used in notifications ("Data layer files for ...").
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Data => "Data",
            Self::Domain => "Domain",
            Self::Presentation => "Presentation",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized.strip_suffix(" layer").unwrap_or(&normalized);
        match normalized {
            "data" => Ok(Self::Data),
            "domain" => Ok(Self::Domain),
            "presentation" | "ui" => Ok(Self::Presentation),
            _ => Err(DomainError::UnknownLayer(s.to_owned())),
        }
    }
}

// ── LayerSelection ───────────────────────────────────────────────────────────

/// The set of layers a caller asked for.
///
/// Backed by a `BTreeSet` so duplicates collapse and iteration always runs
/// data → domain → presentation regardless of selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerSelection(BTreeSet<Layer>);

impl LayerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Layer::ALL.into_iter().collect()
    }

    pub fn with(mut self, layer: Layer) -> Self {
        self.0.insert(layer);
        self
    }

    pub fn insert(&mut self, layer: Layer) -> bool {
        self.0.insert(layer)
    }

    pub fn contains(&self, layer: Layer) -> bool {
        self.0.contains(&layer)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Layer> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Layer> for LayerSelection {
    fn from_iter<T: IntoIterator<Item = Layer>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for LayerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Layer::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

// ── Profile ──────────────────────────────────────────────────────────────────

/// Directory-structure convention used when laying out feature files.
///
/// The tool went through several conventions over time. Each one is kept as
/// a profile so that projects generated with an older convention can keep
/// using it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// `data/datasources/<name>_remote_data_source.dart`
    Flat,
    /// `data/datasources/<name>_data_source/<name>_remote_data_source.dart`
    #[default]
    PerFeature,
    /// `data/datasources/<names>/...`, `presentation/features/<names>/...`
    Pluralized,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Self::Flat, Self::PerFeature, Self::Pluralized];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PerFeature => "per-feature",
            Self::Pluralized => "pluralized",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" | "v1" => Ok(Self::Flat),
            "per-feature" | "perfeature" | "feature" | "v2" => Ok(Self::PerFeature),
            "pluralized" | "plural" | "v3" => Ok(Self::Pluralized),
            other => Err(DomainError::UnknownProfile(other.to_owned())),
        }
    }
}
