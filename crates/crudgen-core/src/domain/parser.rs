//! Spec parser: the terse `--fields` / `--relations` grammar.
//!
//! ```text
//! fields    := field (", " field)*        field    := name ":" type
//! relations := relation ("," relation)*   relation := name ":" kind
//! ```
//!
//! Fields are separated by a comma followed by exactly one space, so the
//! commas inside `enum(open,closed)` never split a token. Relations split on
//! bare commas. Output order always matches input order.

use crate::domain::{
    error::DomainError,
    value_objects::{FieldSpec, RelationKind, RelationSpec},
};

const FIELD_SEPARATOR: &str = ", ";
const RELATION_SEPARATOR: char = ',';

/// Parse the raw `--fields` string.
///
/// An empty (or whitespace-only) string yields no fields. Each token must
/// contain exactly one `:` with an identifier name on the left and a
/// non-empty type on the right.
pub fn parse_fields(raw: &str) -> Result<Vec<FieldSpec>, DomainError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(FIELD_SEPARATOR)
        .map(|token| {
            split_pair(token)
                .map(|(name, type_tag)| FieldSpec::new(name, type_tag))
                .ok_or_else(|| DomainError::MalformedFieldSpec {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Parse the raw `--relations` string.
///
/// An empty string yields no relations. Unknown kinds are accepted here and
/// dropped later by the renderer.
pub fn parse_relations(raw: &str) -> Result<Vec<RelationSpec>, DomainError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(RELATION_SEPARATOR)
        .map(|token| {
            split_pair(token)
                .map(|(name, kind)| RelationSpec::new(name, RelationKind::from_token(kind)))
                .ok_or_else(|| DomainError::MalformedRelationSpec {
                    token: token.trim().to_string(),
                })
        })
        .collect()
}

/// `"name : type"` → `("name", "type")`; `None` unless there is exactly one
/// colon, the name is an identifier and the value is non-empty after
/// trimming.
fn split_pair(token: &str) -> Option<(&str, &str)> {
    let mut parts = token.split(':');
    let (name, value) = (parts.next()?.trim(), parts.next()?.trim());
    if parts.next().is_some() || !is_identifier(name) || value.is_empty() {
        return None;
    }
    Some((name, value))
}

/// Names end up as PHP methods and column names: a letter or `_`, then
/// ASCII letters, digits or `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
