//! Reportlet spec types.

use crate::error::{AssemblyError, Result};
use rl_catalog::Query;
use serde::{Deserialize, Serialize};

/// Declarative description of one reportlet.
///
/// The `query` selects catalog files; `caption` is a per-file template over
/// the matched file's entities; `static` picks between the flattened image
/// embedding and the interactive object embedding for SVG figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportletSpec {
    /// Reportlet title.
    pub title: Option<String>,
    /// Reportlet subtitle.
    pub subtitle: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Catalog selection criteria. Empty means no content is resolved.
    #[serde(default)]
    pub query: Query,
    /// Caption template; `{entity}` placeholders resolve per matched file.
    pub caption: Option<String>,
    /// Embed SVGs as flattened images (true) or interactive objects (false).
    #[serde(rename = "static", default = "default_true")]
    pub static_embed: bool,
    /// Explicit identifier override; derived from the query when absent.
    pub name: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ReportletSpec {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            description: None,
            query: Query::default(),
            caption: None,
            static_embed: true,
            name: None,
        }
    }
}

impl ReportletSpec {
    /// Parse a spec from a JSON document.
    ///
    /// Rejects `null` and the empty object: a reportlet without any
    /// configuration is a construction-time error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Parse a spec from an already-decoded JSON value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Err(AssemblyError::EmptySpec),
            serde_json::Value::Object(map) if map.is_empty() => Err(AssemblyError::EmptySpec),
            other => Ok(serde_json::from_value(other.clone())?),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The reportlet identifier: the explicit `name`, or the deterministic
    /// identifier derived from the sorted query pairs.
    pub fn identifier(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.query.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rl_catalog::QueryValue;

    #[test]
    fn test_spec_defaults() {
        let spec: ReportletSpec =
            serde_json::from_str(r#"{"title": "Some Title", "query": {"desc": "reconall"}}"#)
                .unwrap();

        assert_eq!(spec.title.as_deref(), Some("Some Title"));
        assert!(spec.static_embed);
        assert!(spec.caption.is_none());
        assert!(spec.name.is_none());
    }

    #[test]
    fn test_static_rename() {
        let spec: ReportletSpec =
            serde_json::from_str(r#"{"query": {"desc": "x"}, "static": false}"#).unwrap();
        assert!(!spec.static_embed);
    }

    #[test]
    fn test_empty_spec_rejected() {
        assert!(matches!(
            ReportletSpec::from_json("{}"),
            Err(AssemblyError::EmptySpec)
        ));
        assert!(matches!(
            ReportletSpec::from_json("null"),
            Err(AssemblyError::EmptySpec)
        ));
    }

    #[test]
    fn test_identifier_prefers_explicit_name() {
        let mut spec = ReportletSpec::default();
        spec.query.insert("desc", QueryValue::text("reconall"));
        assert_eq!(spec.identifier(), "desc-reconall");

        spec.name = Some("custom".to_string());
        assert_eq!(spec.identifier(), "custom");
    }

    #[test]
    fn test_spec_round_trip() {
        let spec = ReportletSpec::from_json(
            r#"{"title": "T", "query": {"desc": "brain"}, "caption": "Space {space}"}"#,
        )
        .unwrap();
        let json = spec.to_json().unwrap();
        let parsed = ReportletSpec::from_json(&json).unwrap();

        assert_eq!(parsed.title, spec.title);
        assert_eq!(parsed.query, spec.query);
        assert_eq!(parsed.caption, spec.caption);
    }
}
