//! The catalog lookup seam and its filesystem-backed implementation.

use crate::entry::CatalogEntry;
use crate::error::{CatalogError, Result};
use crate::query::{Query, QueryValue, REGEX_SEARCH};

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A metadata-indexed file store answering structured queries.
///
/// Implementations decide their own result ordering; callers must treat an
/// empty result as a valid answer, not an error.
pub trait Catalog {
    /// Base directory of the catalog.
    fn root(&self) -> &Path;

    /// Return all entries matching every criterion of `query`.
    fn get(&self, query: &Query) -> Result<Vec<CatalogEntry>>;
}

/// A catalog built by walking a directory tree once at open time.
///
/// Entries are indexed in path-sorted order, so query results are
/// reproducible across runs.
pub struct FileCatalog {
    root: PathBuf,
    index: Vec<CatalogEntry>,
}

impl FileCatalog {
    /// Walk `root` and index every regular file found beneath it.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let mut files = Vec::new();
        collect_files(&root, &mut files)?;
        files.sort();

        let index = files
            .into_iter()
            .map(|path| CatalogEntry::from_path(path, &root))
            .collect::<Vec<_>>();

        debug!(root = %root.display(), entries = index.len(), "Catalog indexed");
        Ok(Self { root, index })
    }

    /// Number of indexed files.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the catalog indexed no files.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Catalog for FileCatalog {
    fn root(&self) -> &Path {
        &self.root
    }

    fn get(&self, query: &Query) -> Result<Vec<CatalogEntry>> {
        let matcher = QueryMatcher::compile(query)?;
        Ok(self
            .index
            .iter()
            .filter(|entry| matcher.matches(entry))
            .cloned()
            .collect())
    }
}

/// A query compiled against one match mode.
struct QueryMatcher {
    criteria: Vec<(String, Criterion)>,
}

enum Criterion {
    Exact(String),
    Pattern(Regex),
}

impl QueryMatcher {
    fn compile(query: &Query) -> Result<Self> {
        let regex_mode = query.regex_search();
        let mut criteria = Vec::new();

        for (key, value) in query.iter() {
            if key == REGEX_SEARCH {
                continue;
            }
            let criterion = match value {
                QueryValue::Text(pattern) if regex_mode => {
                    let regex = Regex::new(pattern).map_err(|source| CatalogError::Pattern {
                        key: key.clone(),
                        source,
                    })?;
                    Criterion::Pattern(regex)
                }
                other => Criterion::Exact(other.to_string()),
            };
            criteria.push((key.clone(), criterion));
        }

        Ok(Self { criteria })
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        self.criteria.iter().all(|(key, criterion)| {
            let Some(value) = entry.entity(key) else {
                return false;
            };
            match criterion {
                Criterion::Exact(expected) => value == expected,
                Criterion::Pattern(regex) => regex.is_match(value),
            }
        })
    }
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for dirent in fs::read_dir(dir)? {
        let dirent = dirent?;
        let path = dirent.path();
        let file_type = dirent.file_type()?;
        if file_type.is_dir() {
            collect_files(&path, out)?;
        } else if file_type.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, FileCatalog) {
        let temp = TempDir::new().unwrap();
        let figures = temp.path().join("sub-01").join("figures");
        fs::create_dir_all(&figures).unwrap();

        for name in [
            "sub-01_desc-reconall_T1w.svg",
            "sub-01_desc-summary_T1w.html",
            "sub-01_space-MNI152_bold.svg",
            "sub-01_space-native_bold.svg",
        ] {
            let mut file = File::create(figures.join(name)).unwrap();
            writeln!(file, "content of {name}").unwrap();
        }

        let catalog = FileCatalog::open(temp.path()).unwrap();
        (temp, catalog)
    }

    #[test]
    fn test_open_indexes_all_files() {
        let (_temp, catalog) = fixture();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_exact_match() {
        let (_temp, catalog) = fixture();
        let mut query = Query::new();
        query.insert("desc", QueryValue::text("reconall"));

        let entries = catalog.get(&query).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity("suffix"), Some("T1w"));
    }

    #[test]
    fn test_multiple_criteria() {
        let (_temp, catalog) = fixture();
        let mut query = Query::new();
        query.insert("datatype", QueryValue::text("figures"));
        query.insert("suffix", QueryValue::text("bold"));

        let entries = catalog.get(&query).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_regex_search() {
        let (_temp, catalog) = fixture();
        let mut query = Query::new();
        query.insert("space", QueryValue::text(".*"));
        query.insert(REGEX_SEARCH, QueryValue::Flag(true));

        let entries = catalog.get(&query).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_missing_entity_never_matches() {
        let (_temp, catalog) = fixture();
        let mut query = Query::new();
        query.insert("session", QueryValue::text("01"));

        assert!(catalog.get(&query).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let (_temp, catalog) = fixture();
        let mut query = Query::new();
        query.insert("space", QueryValue::text("[unclosed"));
        query.insert(REGEX_SEARCH, QueryValue::Flag(true));

        let err = catalog.get(&query).unwrap_err();
        assert!(matches!(err, CatalogError::Pattern { ref key, .. } if key == "space"));
    }

    #[test]
    fn test_result_order_is_path_sorted() {
        let (_temp, catalog) = fixture();
        let mut query = Query::new();
        query.insert("suffix", QueryValue::text("bold"));

        let entries = catalog.get(&query).unwrap();
        let spaces: Vec<_> = entries.iter().map(|e| e.entity("space").unwrap()).collect();
        assert_eq!(spaces, ["MNI152", "native"]);
    }
}
