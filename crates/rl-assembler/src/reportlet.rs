//! The assembled reportlet entity and its resolution algorithm.

use crate::content::{svg_snippet, ContentKind};
use crate::error::{AssemblyError, Result};
use crate::spec::ReportletSpec;
use crate::stage::stage_file;
use crate::template;

use rl_catalog::{Catalog, CatalogEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component as PathComponent, Path};
use tracing::{debug, info};

/// One renderable component: content plus an optional caption. Components
/// are value copies; they hold no references back into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Inline HTML fragment or SVG embedding snippet.
    pub content: String,
    /// Caption rendered from the spec's template, if any.
    pub caption: Option<String>,
}

/// A titled unit of a report: an ordered list of components wrapped with
/// title, subtitle, and description. Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reportlet {
    /// Identifier: explicit spec name or derived from the sorted query.
    pub name: String,
    /// Reportlet title.
    pub title: Option<String>,
    /// Reportlet subtitle.
    pub subtitle: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Components in catalog result order.
    pub components: Vec<Component>,
}

impl Reportlet {
    /// Resolve `spec` against `catalog`, materializing components into
    /// `out_dir`.
    ///
    /// A spec without query criteria yields a zero-component reportlet and
    /// touches neither the catalog nor the filesystem. Unsupported file
    /// suffixes are skipped silently; lookup, read, staging, and caption
    /// template failures abort the build. Earlier staging side effects are
    /// not rolled back on failure; re-running re-stages identical content.
    pub fn assemble(
        catalog: &impl Catalog,
        out_dir: &Path,
        spec: &ReportletSpec,
    ) -> Result<Self> {
        let mut reportlet = Self {
            name: spec.identifier(),
            title: spec.title.clone(),
            subtitle: spec.subtitle.clone(),
            description: spec.description.clone(),
            components: Vec::new(),
        };

        if spec.query.is_empty() {
            return Ok(reportlet);
        }

        let entries = catalog.get(&spec.query)?;
        debug!(name = %reportlet.name, matches = entries.len(), "Query resolved");

        for entry in &entries {
            if let Some(component) = build_component(catalog, out_dir, spec, entry)? {
                reportlet.components.push(component);
            }
        }

        info!(
            name = %reportlet.name,
            components = reportlet.components.len(),
            "Reportlet assembled"
        );
        Ok(reportlet)
    }

    /// True iff the reportlet has no components; lets the renderer omit
    /// blank sections.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Build the component contributed by one catalog entry, or `None` when the
/// entry's suffix is unsupported or its content comes out empty.
fn build_component(
    catalog: &impl Catalog,
    out_dir: &Path,
    spec: &ReportletSpec,
    entry: &CatalogEntry,
) -> Result<Option<Component>> {
    let content = match ContentKind::from_path(&entry.path) {
        ContentKind::Fragment => fs::read_to_string(&entry.path)?.trim().to_string(),
        ContentKind::VectorImage => {
            let anchor = reconcile_path(catalog, out_dir, &entry.path)?;
            svg_snippet(spec.static_embed, &anchor)
        }
        ContentKind::Unsupported => return Ok(None),
    };

    if content.is_empty() {
        return Ok(None);
    }

    let caption = spec
        .caption
        .as_deref()
        .map(|tpl| template::render(tpl, &entry.entities))
        .transpose()?;

    Ok(Some(Component { content, caption }))
}

/// Compute the embedding anchor for `src` relative to `out_dir`, staging
/// the file into the output tree when it lives elsewhere.
///
/// A source already under `out_dir` is referenced in place. Otherwise the
/// anchor is the path relative to the catalog root's parent, and the file
/// is hardlinked or copied to `out_dir/anchor`.
fn reconcile_path(catalog: &impl Catalog, out_dir: &Path, src: &Path) -> Result<String> {
    let anchor = match src.strip_prefix(out_dir) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => {
            let root = catalog.root();
            let base = root.parent().unwrap_or(root);
            let rel = src
                .strip_prefix(base)
                .map_err(|_| AssemblyError::UnanchoredPath {
                    path: src.to_path_buf(),
                })?
                .to_path_buf();
            stage_file(src, &out_dir.join(&rel))?;
            rel
        }
    };
    Ok(rel_href(&anchor))
}

/// Render a relative path as a forward-slash href.
fn rel_href(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            PathComponent::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
