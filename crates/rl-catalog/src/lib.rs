//! Metadata-indexed file catalog for reportlet assembly.
//!
//! A catalog maps structured queries to files annotated with string-keyed
//! metadata ("entities"). Entities are parsed from `key-value` tokens in
//! file and directory names, so a tree like
//! `sub-01/figures/sub-01_desc-reconall_T1w.svg` is queryable by `sub`,
//! `desc`, `datatype`, `suffix`, or `extension`.
//!
//! The [`Catalog`] trait is the seam consumed by the assembler; the
//! [`FileCatalog`] walks a directory once and answers queries against the
//! resulting index. Queries are equality filters by default, with an opt-in
//! regex mode via the `regex_search` flag.
//!
//! # Example
//!
//! ```no_run
//! use rl_catalog::{Catalog, FileCatalog, Query, QueryValue};
//! use std::path::Path;
//!
//! let catalog = FileCatalog::open(Path::new("reportlets")).unwrap();
//! let mut query = Query::new();
//! query.insert("desc", QueryValue::text("reconall"));
//! let entries = catalog.get(&query).unwrap();
//! for entry in entries {
//!     println!("{} -> {:?}", entry.path.display(), entry.entities);
//! }
//! ```

pub mod catalog;
pub mod entry;
pub mod error;
pub mod query;

pub use catalog::{Catalog, FileCatalog};
pub use entry::CatalogEntry;
pub use error::{CatalogError, Result};
pub use query::{Query, QueryValue};
