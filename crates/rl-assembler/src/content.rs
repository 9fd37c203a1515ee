//! Content-type classification and SVG embedding snippets.

use rl_catalog::entry::split_extension;
use std::path::Path;

/// Closed set of renderable content kinds, keyed by the full accumulated
/// suffix of a source path. Anything outside the set is skipped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Inline HTML fragment (`.html`), passed through verbatim.
    Fragment,
    /// SVG figure (`.svg`), embedded by reference.
    VectorImage,
    /// Everything else; contributes no component.
    Unsupported,
}

impl ContentKind {
    /// Classify a path by its full accumulated suffix, so `figure.svg.gz`
    /// is unsupported rather than a vector image.
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        match split_extension(file_name).1 {
            ".html" => ContentKind::Fragment,
            ".svg" => ContentKind::VectorImage,
            _ => ContentKind::Unsupported,
        }
    }
}

/// Produce the SVG embedding snippet for `href`, selected by the embedding
/// mode: a flattened `<img>` reference when static, an interactive
/// `<object>` reference otherwise. Both forms take the one resolved
/// relative path and nothing else.
pub fn svg_snippet(static_embed: bool, href: &str) -> String {
    if static_embed {
        format!(
            "<img class=\"svg-reportlet\" src=\"./{href}\" style=\"width: 100%\" />\n\
             <div class=\"elem-filename\">\n    \
             Get figure file: <a href=\"./{href}\" target=\"_blank\">{href}</a>\n</div>\n"
        )
    } else {
        format!(
            "<object class=\"svg-reportlet\" type=\"image/svg+xml\" data=\"./{href}\">\n\
             Problem loading figure {href}. If the link below works, please try \
             reloading the report in your browser.</object>\n\
             <div class=\"elem-filename\">\n    \
             Get figure file: <a href=\"./{href}\" target=\"_blank\">{href}</a>\n</div>\n"
        )
    }
}
