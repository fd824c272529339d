//! Built-in templates.
//!
//! Every template a layer manifest references ships inside the binary,
//! embedded at compile time from `templates/<layer>/<name>.template`. A user
//! template directory can override individual ids (see
//! [`crate::template_store::LayeredTemplates`]), but the built-ins alone are
//! always enough to generate every layer.

use tracing::debug;

use strata_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateId,
    error::StrataResult,
};

/// `(id, text)` for every embedded template, sorted by id.
pub static BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "data/model",
        include_str!("../templates/data/model.template"),
    ),
    (
        "data/remote_data_source",
        include_str!("../templates/data/remote_data_source.template"),
    ),
    (
        "data/remote_data_source_impl",
        include_str!("../templates/data/remote_data_source_impl.template"),
    ),
    (
        "data/repository",
        include_str!("../templates/data/repository.template"),
    ),
    (
        "domain/add_usecase",
        include_str!("../templates/domain/add_usecase.template"),
    ),
    (
        "domain/delete_usecase",
        include_str!("../templates/domain/delete_usecase.template"),
    ),
    (
        "domain/entity",
        include_str!("../templates/domain/entity.template"),
    ),
    (
        "domain/get_id_usecase",
        include_str!("../templates/domain/get_id_usecase.template"),
    ),
    (
        "domain/get_usecase",
        include_str!("../templates/domain/get_usecase.template"),
    ),
    (
        "domain/repository",
        include_str!("../templates/domain/repository.template"),
    ),
    (
        "domain/update_usecase",
        include_str!("../templates/domain/update_usecase.template"),
    ),
];

/// Template source backed by [`BUILTIN_TEMPLATES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Text of a built-in template, without going through the port.
    pub fn lookup(id: &str) -> Option<&'static str> {
        BUILTIN_TEMPLATES
            .iter()
            .find(|(builtin, _)| *builtin == id)
            .map(|(_, text)| *text)
    }
}

impl TemplateSource for BuiltinTemplates {
    fn get(&self, id: &TemplateId) -> StrataResult<String> {
        debug!(id = %id, "builtin template lookup");
        Self::lookup(id.as_str()).map(str::to_owned).ok_or_else(|| {
            ApplicationError::Template {
                id: id.to_string(),
                reason: "no built-in template with this id".into(),
            }
            .into()
        })
    }

    fn list(&self) -> StrataResult<Vec<TemplateId>> {
        BUILTIN_TEMPLATES
            .iter()
            .map(|(id, _)| TemplateId::parse(id).map_err(Into::into))
            .collect()
    }
}
