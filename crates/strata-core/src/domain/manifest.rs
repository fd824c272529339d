//! Layer manifest registry.
//!
//! Every layer is described once, declaratively, by a [`LayerDef`]: the
//! directories it needs and the files it writes into them. One generic
//! routine ([`plan_layer`]) expands a definition for a concrete feature name;
//! nothing else in the crate knows which files a layer produces.
//!
//! Paths are relative to the project's `lib/` directory and use the pattern
//! placeholders `{lower}`, `{upper}` and `{plural}` (see
//! [`RenderContext::expand`]).
//!
//! # Adding a File
//!
//! 1. Add a [`ManifestEntry`] to the relevant [`LayerDef`]
//! 2. Ship the template under `templates/<layer>/<name>.template` in
//!    `strata-adapters`
//! 3. That's it

use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        plan::LayerPlan,
        template::{RenderContext, TemplateId, TemplateRef},
    },
    error::DomainError,
    feature_name::FeatureName,
    value_objects::{Layer, Profile},
};

/// Directory under the project root that all layers live in.
pub const LIB_DIR: &str = "lib";

/// Static description of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Target directory pattern, relative to `lib/`.
    pub dir: &'static str,
    /// Output filename pattern.
    pub file: &'static str,
    /// Template id, or `None` for an empty file.
    pub template: Option<&'static str>,
}

/// Everything one layer generates under a set of profiles.
#[derive(Debug, Clone, Copy)]
pub struct LayerDef {
    pub layer: Layer,
    /// Profiles this definition applies to.
    pub profiles: &'static [Profile],
    /// Directories to ensure, in creation order (parents first).
    pub directories: &'static [&'static str],
    pub entries: &'static [ManifestEntry],
}

const fn entry(
    dir: &'static str,
    file: &'static str,
    template: Option<&'static str>,
) -> ManifestEntry {
    ManifestEntry {
        dir,
        file,
        template,
    }
}

const ALL_PROFILES: &[Profile] = &Profile::ALL;

const DOMAIN_ENTRIES: &[ManifestEntry] = &[
    entry("domain/entities", "{lower}.dart", Some("domain/entity")),
    entry(
        "domain/repositories",
        "{lower}_repository.dart",
        Some("domain/repository"),
    ),
    entry(
        "domain/usecases",
        "get_{plural}_usecase.dart",
        Some("domain/get_usecase"),
    ),
    entry(
        "domain/usecases",
        "add_{lower}_usecase.dart",
        Some("domain/add_usecase"),
    ),
    entry(
        "domain/usecases",
        "update_{lower}_usecase.dart",
        Some("domain/update_usecase"),
    ),
    entry(
        "domain/usecases",
        "get_{lower}_usecase.dart",
        Some("domain/get_id_usecase"),
    ),
    entry(
        "domain/usecases",
        "delete_{lower}_usecase.dart",
        Some("domain/delete_usecase"),
    ),
];

/// Single source of truth for what each layer generates.
///
/// Lookup takes the first definition whose `profiles` contains the requested
/// profile.
pub static LAYER_REGISTRY: &[LayerDef] = &[
    // ── data ────────────────────────────────────────────────────────────────
    LayerDef {
        layer: Layer::Data,
        profiles: &[Profile::Flat],
        directories: &["data", "data/datasources", "data/repositories", "data/models"],
        entries: &[
            entry(
                "data/datasources",
                "{lower}_remote_data_source.dart",
                Some("data/remote_data_source"),
            ),
            entry(
                "data/datasources",
                "{lower}_remote_data_source_impl.dart",
                Some("data/remote_data_source_impl"),
            ),
            entry(
                "data/repositories",
                "{lower}_repository.dart",
                Some("data/repository"),
            ),
            entry("data/models", "{lower}_model.dart", Some("data/model")),
        ],
    },
    LayerDef {
        layer: Layer::Data,
        profiles: &[Profile::PerFeature],
        directories: &[
            "data",
            "data/datasources",
            "data/datasources/{lower}_data_source",
            "data/repositories",
            "data/models",
        ],
        entries: &[
            entry(
                "data/datasources/{lower}_data_source",
                "{lower}_remote_data_source.dart",
                Some("data/remote_data_source"),
            ),
            entry(
                "data/datasources/{lower}_data_source",
                "{lower}_remote_data_source_impl.dart",
                Some("data/remote_data_source_impl"),
            ),
            entry(
                "data/repositories",
                "{lower}_repository.dart",
                Some("data/repository"),
            ),
            entry("data/models", "{lower}_model.dart", Some("data/model")),
        ],
    },
    LayerDef {
        layer: Layer::Data,
        profiles: &[Profile::Pluralized],
        directories: &[
            "data",
            "data/datasources",
            "data/datasources/{plural}",
            "data/repositories",
            "data/models",
        ],
        entries: &[
            entry(
                "data/datasources/{plural}",
                "{lower}_remote_data_source.dart",
                Some("data/remote_data_source"),
            ),
            entry(
                "data/datasources/{plural}",
                "{lower}_remote_data_source_impl.dart",
                Some("data/remote_data_source_impl"),
            ),
            entry(
                "data/repositories",
                "{lower}_repository.dart",
                Some("data/repository"),
            ),
            entry("data/models", "{lower}_model.dart", Some("data/model")),
        ],
    },
    // ── domain ──────────────────────────────────────────────────────────────
    LayerDef {
        layer: Layer::Domain,
        profiles: ALL_PROFILES,
        directories: &[
            "domain",
            "domain/entities",
            "domain/repositories",
            "domain/usecases",
        ],
        entries: DOMAIN_ENTRIES,
    },
    // ── presentation ────────────────────────────────────────────────────────
    LayerDef {
        layer: Layer::Presentation,
        profiles: &[Profile::Flat, Profile::PerFeature],
        directories: &[
            "presentation",
            "presentation/features",
            "presentation/features/{lower}",
            "presentation/features/{lower}/screens",
            "presentation/features/{lower}/widgets",
        ],
        entries: &[
            entry(
                "presentation/features/{lower}/screens",
                "{plural}_screen.dart",
                None,
            ),
            entry(
                "presentation/features/{lower}/screens",
                "create_{lower}_screen.dart",
                None,
            ),
            entry(
                "presentation/features/{lower}/screens",
                "update_{lower}_screen.dart",
                None,
            ),
        ],
    },
    LayerDef {
        layer: Layer::Presentation,
        profiles: &[Profile::Pluralized],
        directories: &[
            "presentation",
            "presentation/features",
            "presentation/features/{plural}",
            "presentation/features/{plural}/screens",
            "presentation/features/{plural}/widgets",
        ],
        entries: &[
            entry(
                "presentation/features/{plural}/screens",
                "{plural}_screen.dart",
                None,
            ),
            entry(
                "presentation/features/{plural}/screens",
                "create_{lower}_screen.dart",
                None,
            ),
            entry(
                "presentation/features/{plural}/screens",
                "update_{lower}_screen.dart",
                None,
            ),
        ],
    },
];

/// Directories of the empty architecture skeleton, parents first.
pub static SKELETON_DIRECTORIES: &[&str] = &[
    "data",
    "domain",
    "presentation",
    "data/datasources",
    "data/repositories",
    "data/models",
    "domain/entities",
    "domain/repositories",
    "domain/usecases",
    "presentation/shared",
    "presentation/features",
    "presentation/shared/constants",
    "presentation/shared/theme",
    "presentation/shared/utils",
    "presentation/shared/widgets",
];

/// Find the definition for `layer` under `profile`.
pub fn find_layer_def(layer: Layer, profile: Profile) -> Option<&'static LayerDef> {
    LAYER_REGISTRY
        .iter()
        .find(|def| def.layer == layer && def.profiles.contains(&profile))
}

/// Every template id referenced by any manifest, sorted and deduplicated.
pub fn referenced_template_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = LAYER_REGISTRY
        .iter()
        .flat_map(|def| def.entries.iter().filter_map(|e| e.template))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Expand a layer's manifest for `name`.
///
/// `lib_root` is recorded as the plan root; the plan's own paths stay
/// relative to it.
///
/// # Errors
///
/// Returns a [`DomainError`] if the registry has no definition for the pair,
/// or if the expanded plan is invalid (duplicate or absolute paths, malformed
/// template id). Both indicate a broken registry rather than bad user input.
pub fn plan_layer(
    layer: Layer,
    profile: Profile,
    name: &FeatureName,
    lib_root: &Path,
) -> Result<LayerPlan, DomainError> {
    let def = find_layer_def(layer, profile).ok_or_else(|| {
        DomainError::UnknownProfile(format!("{profile} (no {layer} manifest)"))
    })?;
    let ctx = RenderContext::new(name);

    let mut plan = LayerPlan::new(Some(layer), lib_root);
    for dir in def.directories {
        plan.add_directory(ctx.expand(dir));
    }
    for e in def.entries {
        let path = PathBuf::from(ctx.expand(e.dir)).join(ctx.expand(e.file));
        let template = match e.template {
            Some(id) => TemplateRef::Named(TemplateId::parse(id)?),
            None => TemplateRef::Empty,
        };
        plan.add_file(path, template);
    }

    plan.validate()?;
    Ok(plan)
}

/// Plan for the empty architecture skeleton (directories only).
pub fn plan_skeleton(lib_root: &Path) -> LayerPlan {
    SKELETON_DIRECTORIES
        .iter()
        .fold(LayerPlan::new(None, lib_root), |plan, dir| {
            plan.with_directory(*dir)
        })
}
