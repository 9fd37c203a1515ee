//! Catalog entries and entity parsing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A catalog file together with its parsed entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Absolute (or catalog-root-joined) path of the file.
    pub path: PathBuf,
    /// String-keyed metadata parsed from the file's name and location.
    pub entities: BTreeMap<String, String>,
}

impl CatalogEntry {
    /// Build an entry by parsing entities from `path` relative to `root`.
    ///
    /// Entities come from three places, later sources overriding earlier:
    /// 1. directory components under the root: `key-value` components become
    ///    entities, a bare component becomes the `datatype` entity;
    /// 2. `key-value` tokens in the `_`-separated filename stem;
    /// 3. a trailing stem token without a dash becomes the `suffix` entity,
    ///    and the full accumulated extension becomes `extension`.
    pub fn from_path(path: impl Into<PathBuf>, root: &Path) -> Self {
        let path = path.into();
        let mut entities = BTreeMap::new();

        let rel = path.strip_prefix(root).unwrap_or(&path);
        let mut components: Vec<&str> = rel
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        let file_name = components.pop().unwrap_or_default();

        for component in components {
            match component.split_once('-') {
                Some((key, value)) if !key.is_empty() => {
                    entities.insert(key.to_string(), value.to_string());
                }
                _ => {
                    entities.insert("datatype".to_string(), component.to_string());
                }
            }
        }

        let (stem, extension) = split_extension(file_name);
        if !extension.is_empty() {
            entities.insert("extension".to_string(), extension.to_string());
        }

        for token in stem.split('_').filter(|t| !t.is_empty()) {
            match token.split_once('-') {
                Some((key, value)) if !key.is_empty() => {
                    entities.insert(key.to_string(), value.to_string());
                }
                _ => {
                    entities.insert("suffix".to_string(), token.to_string());
                }
            }
        }

        Self { path, entities }
    }

    /// Look up an entity value by name.
    pub fn entity(&self, name: &str) -> Option<&str> {
        self.entities.get(name).map(String::as_str)
    }
}

/// Split a file name into its stem and full accumulated extension, so
/// `figure.dseg.svg` yields `("figure", ".dseg.svg")`. A leading dot does
/// not start an extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name
        .char_indices()
        .find(|&(i, c)| c == '.' && i > 0)
    {
        Some((dot, _)) => (&file_name[..dot], &file_name[dot..]),
        None => (file_name, ""),
    }
}
