//! Strict caption templating over entry entities.
//!
//! `{entity}` placeholders resolve by explicit lookup in the entry's
//! metadata; a placeholder naming an absent entity is a hard error, never a
//! silent drop or a literal left in the caption. `{{` and `}}` escape
//! literal braces.

use crate::error::{AssemblyError, Result};
use std::collections::BTreeMap;

/// Render `template` against `entities`.
pub fn render(template: &str, entities: &BTreeMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => placeholder.push(c),
                        None => return Err(AssemblyError::UnbalancedBrace { offset }),
                    }
                }
                match entities.get(&placeholder) {
                    Some(value) => out.push_str(value),
                    None => return Err(AssemblyError::Template { placeholder }),
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(AssemblyError::UnbalancedBrace { offset });
                }
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitution() {
        let result = render("desc {space}", &entities(&[("space", "X")])).unwrap();
        assert_eq!(result, "desc X");
    }

    #[test]
    fn test_multiple_placeholders() {
        let result = render(
            "Subject {sub}, space {space}",
            &entities(&[("sub", "01"), ("space", "MNI")]),
        )
        .unwrap();
        assert_eq!(result, "Subject 01, space MNI");
    }

    #[test]
    fn test_missing_entity_is_hard_error() {
        let err = render("desc {space}", &entities(&[])).unwrap_err();
        assert!(matches!(err, AssemblyError::Template { ref placeholder } if placeholder == "space"));
    }

    #[test]
    fn test_brace_escapes() {
        let result = render("{{literal}} {space}", &entities(&[("space", "X")])).unwrap();
        assert_eq!(result, "{literal} X");
    }

    #[test]
    fn test_unterminated_brace() {
        assert!(matches!(
            render("oops {space", &entities(&[("space", "X")])),
            Err(AssemblyError::UnbalancedBrace { offset: 5 })
        ));
    }

    #[test]
    fn test_stray_closing_brace() {
        assert!(matches!(
            render("oops } here", &entities(&[])),
            Err(AssemblyError::UnbalancedBrace { .. })
        ));
    }

    #[test]
    fn test_no_placeholders() {
        let result = render("plain caption", &entities(&[])).unwrap();
        assert_eq!(result, "plain caption");
    }
}
