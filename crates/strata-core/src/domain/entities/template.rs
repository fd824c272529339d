//! Template identity and rendering.
//!
//! Templates are opaque text resources. The core never parses them; it only
//! substitutes two tokens:
//!
//! | Token                | Replaced with          | Example (`todo`) |
//! |----------------------|------------------------|------------------|
//! | `FEATURE_NAME`       | [`FeatureName::upper_camel`] | `Todo`     |
//! | `FEATURE_LOWER_NAME` | [`FeatureName::lower`]       | `todo`     |
//!
//! Manifest paths use a separate, brace-delimited syntax (`{lower}`,
//! `{upper}`, `{plural}`) so that a filename pattern can never be confused
//! with template content.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{error::DomainError, feature_name::FeatureName, value_objects::Layer};

/// Token replaced by the upper-camel feature name.
pub const FEATURE_NAME_TOKEN: &str = "FEATURE_NAME";
/// Token replaced by the lower feature name.
pub const FEATURE_LOWER_NAME_TOKEN: &str = "FEATURE_LOWER_NAME";

// ── TemplateId ───────────────────────────────────────────────────────────────

/// Identifier of a template resource, `"<group>/<name>"`.
///
/// The group is normally a layer name (`data/model`, `domain/entity`), which
/// is also the directory a template lives in on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Build an id from a layer and a template name.
    pub fn new(layer: Layer, name: &str) -> Self {
        Self(format!("{}/{}", layer.as_str(), name))
    }

    /// Parse `"<group>/<name>"`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTemplateId`] unless there are exactly two
    /// non-empty segments made of `[a-z0-9_]`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let valid_segment = |seg: &str| {
            !seg.is_empty()
                && seg
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        };

        match s.split_once('/') {
            Some((group, name)) if valid_segment(group) && valid_segment(name) => {
                Ok(Self(s.to_owned()))
            }
            _ => Err(DomainError::InvalidTemplateId(s.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The group segment (`data` in `data/model`).
    pub fn group(&self) -> &str {
        self.0.split_once('/').map_or("", |(g, _)| g)
    }

    /// The name segment (`model` in `data/model`).
    pub fn name(&self) -> &str {
        self.0.split_once('/').map_or(self.0.as_str(), |(_, n)| n)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Content source of a generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum TemplateRef {
    /// Rendered from a template resource.
    Named(TemplateId),
    /// Created with empty content.
    Empty,
}

impl TemplateRef {
    pub fn id(&self) -> Option<&TemplateId> {
        match self {
            Self::Named(id) => Some(id),
            Self::Empty => None,
        }
    }
}

// ── RenderContext ────────────────────────────────────────────────────────────

/// Substitution context for one feature.
///
/// Borrowed from the [`FeatureName`]; construction is free and rendering never
/// fails.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    name: &'a FeatureName,
}

impl<'a> RenderContext<'a> {
    pub fn new(name: &'a FeatureName) -> Self {
        Self { name }
    }

    /// Replace every template token in `template`.
    ///
    /// `FEATURE_NAME` is not a substring of `FEATURE_LOWER_NAME`, and the
    /// substituted values are alphanumeric, so the two passes are
    /// independent.
    pub fn render(&self, template: &str) -> String {
        template
            .replace(FEATURE_LOWER_NAME_TOKEN, self.name.lower())
            .replace(FEATURE_NAME_TOKEN, self.name.upper_camel())
    }

    /// Expand a manifest path pattern (`{lower}_repository.dart`).
    pub fn expand(&self, pattern: &str) -> String {
        pattern
            .replace("{lower}", self.name.lower())
            .replace("{upper}", self.name.upper_camel())
            .replace("{plural}", self.name.plural())
    }
}

/// `true` if `text` still contains a template token.
pub fn contains_tokens(text: &str) -> bool {
    text.contains(FEATURE_NAME_TOKEN) || text.contains(FEATURE_LOWER_NAME_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> FeatureName {
        FeatureName::parse("todo").unwrap()
    }

    #[test]
    fn render_replaces_every_occurrence() {
        let name = todo();
        let ctx = RenderContext::new(&name);
        let out = ctx.render(
            "class FEATURE_NAME {}\nfinal FEATURE_NAME FEATURE_LOWER_NAME;\nFEATURE_LOWER_NAMEFEATURE_NAME",
        );
        assert_eq!(out, "class Todo {}\nfinal Todo todo;\ntodoTodo");
        assert!(!contains_tokens(&out));
    }

    #[test]
    fn render_leaves_other_text_alone() {
        let name = todo();
        let ctx = RenderContext::new(&name);
        assert_eq!(ctx.render("FEATURE name {{x}}"), "FEATURE name {{x}}");
        assert_eq!(ctx.render(""), "");
    }

    #[test]
    fn expand_uses_all_variants() {
        let name = FeatureName::parse("Order").unwrap();
        let ctx = RenderContext::new(&name);
        assert_eq!(
            ctx.expand("{lower}/{upper}/get_{plural}_usecase.dart"),
            "order/Order/get_orders_usecase.dart"
        );
    }

    #[test]
    fn template_id_parsing() {
        let id = TemplateId::parse("data/remote_data_source").unwrap();
        assert_eq!(id.group(), "data");
        assert_eq!(id.name(), "remote_data_source");
        assert_eq!(id, TemplateId::new(Layer::Data, "remote_data_source"));

        for bad in ["", "data", "data/", "/model", "a/b/c", "Data/model", "data/mo-del"] {
            assert!(TemplateId::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn template_ref_id() {
        let id = TemplateId::new(Layer::Domain, "entity");
        assert_eq!(TemplateRef::Named(id.clone()).id(), Some(&id));
        assert_eq!(TemplateRef::Empty.id(), None);
    }
}
