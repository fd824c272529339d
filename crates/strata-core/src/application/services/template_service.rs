//! Template Service - template listing and coverage queries.
//!
//! Separated from ScaffoldService for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::TemplateSource,
    domain::{LAYER_REGISTRY, Profile, TemplateId, manifest},
    error::StrataResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub layer: String,
    pub name: String,
    /// Output filename pattern under the default profile, if any manifest
    /// uses this template.
    pub target: Option<&'static str>,
}

/// Service for template operations.
pub struct TemplateService {
    source: Box<dyn TemplateSource>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self { source }
    }

    /// List all templates the source provides.
    pub fn list(&self) -> StrataResult<Vec<TemplateInfo>> {
        Ok(self
            .source
            .list()?
            .into_iter()
            .map(|id| TemplateInfo {
                layer: id.group().to_owned(),
                name: id.name().to_owned(),
                target: target_pattern(&id),
                id,
            })
            .collect())
    }

    /// Template ids referenced by a manifest that the source cannot provide.
    pub fn missing(&self) -> StrataResult<Vec<String>> {
        let available = self.source.list()?;
        Ok(manifest::referenced_template_ids()
            .into_iter()
            .filter(|id| !available.iter().any(|a| a.as_str() == *id))
            .map(str::to_owned)
            .collect())
    }
}

fn target_pattern(id: &TemplateId) -> Option<&'static str> {
    LAYER_REGISTRY
        .iter()
        .filter(|def| def.profiles.contains(&Profile::default()))
        .flat_map(|def| def.entries.iter())
        .find(|e| e.template == Some(id.as_str()))
        .map(|e| e.file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTemplateSource;

    #[test]
    fn list_annotates_targets() {
        let mut source = MockTemplateSource::new();
        source.expect_list().returning(|| {
            Ok(vec![
                TemplateId::parse("data/model").unwrap(),
                TemplateId::parse("extra/notes").unwrap(),
            ])
        });

        let infos = TemplateService::new(Box::new(source)).list().unwrap();
        assert_eq!(infos[0].layer, "data");
        assert_eq!(infos[0].target, Some("{lower}_model.dart"));
        assert_eq!(infos[1].target, None);
    }

    #[test]
    fn missing_reports_unprovided_ids() {
        let mut source = MockTemplateSource::new();
        source
            .expect_list()
            .returning(|| Ok(vec![TemplateId::parse("domain/entity").unwrap()]));

        let missing = TemplateService::new(Box::new(source)).missing().unwrap();
        assert_eq!(missing.len(), 10);
        assert!(!missing.contains(&"domain/entity".to_owned()));
    }
}
