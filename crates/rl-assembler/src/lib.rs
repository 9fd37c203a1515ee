//! Reportlet assembly: resolves a declarative reportlet spec into an
//! ordered list of renderable components.
//!
//! A *reportlet* is a titled, captioned visual unit of a larger report. Its
//! spec names a catalog query; every matched file contributes one component:
//! HTML fragments are inlined verbatim, SVG figures become embedding
//! snippets referencing a path inside the output tree (staged there by
//! hardlink or copy when the source lives elsewhere), and each component
//! may carry a caption produced by substituting the file's entities into a
//! caption template.
//!
//! Page layout, the final report renderer, and CLI wiring live outside this
//! crate; it exposes only [`ReportletSpec`], [`Reportlet::assemble`], and
//! the assembled [`Reportlet`] with its `is_empty` check.
//!
//! # Example
//!
//! ```no_run
//! use rl_assembler::{Reportlet, ReportletSpec};
//! use rl_catalog::FileCatalog;
//! use std::path::Path;
//!
//! let catalog = FileCatalog::open(Path::new("work/reportlets")).unwrap();
//! let spec = ReportletSpec::from_json(
//!     r#"{"title": "Surface reconstruction",
//!         "query": {"desc": "reconall"},
//!         "caption": "Subject {sub}"}"#,
//! ).unwrap();
//! let reportlet = Reportlet::assemble(&catalog, Path::new("out/figures"), &spec).unwrap();
//! if !reportlet.is_empty() {
//!     println!("{}: {} components", reportlet.name, reportlet.components.len());
//! }
//! ```

pub mod content;
pub mod error;
pub mod reportlet;
pub mod spec;
pub mod stage;
pub mod template;

pub use content::ContentKind;
pub use error::{AssemblyError, Result};
pub use reportlet::{Component, Reportlet};
pub use spec::ReportletSpec;
