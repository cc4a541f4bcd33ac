//! Domain value objects: FieldSpec, RelationSpec, RelationKind.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. The
//! field type tag is stored verbatim (including any `enum(...)` parameter
//! list); interpretation lives in `type_registry.rs`.

use std::fmt;

use serde::Serialize;

// ── FieldSpec ────────────────────────────────────────────────────────────────

/// One attribute of the entity: `name:type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Values of a parenthesised list in the type tag, when the tag names an
    /// enumeration: `enum(open, closed)` → `["open", "closed"]`.
    ///
    /// Any tag containing `enum` qualifies, which mirrors how schema columns
    /// are recognised.
    pub fn enum_values(&self) -> Option<Vec<String>> {
        if !self.type_tag.contains("enum") {
            return None;
        }
        let open = self.type_tag.find('(')?;
        let close = open + self.type_tag[open..].find(')')?;
        Some(
            self.type_tag[open + 1..close]
                .split(',')
                .map(|v| v.trim().to_string())
                .collect(),
        )
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.type_tag)
    }
}

// ── RelationKind ─────────────────────────────────────────────────────────────

/// Association kind of a relation.
///
/// Unknown tokens are kept as [`RelationKind::Other`] so that parsing never
/// fails on them; renderers simply emit nothing for that relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    HasMany,
    BelongsTo,
    Other(String),
}

impl RelationKind {
    /// Case-sensitive: `hasMany`, `belongsTo`, anything else is `Other`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "hasMany" => Self::HasMany,
            "belongsTo" => Self::BelongsTo,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::HasMany => "hasMany",
            Self::BelongsTo => "belongsTo",
            Self::Other(token) => token,
        }
    }

    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::HasMany | Self::BelongsTo)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RelationSpec ─────────────────────────────────────────────────────────────

/// An association to another entity: `name:kind`.
///
/// `related_entity` is always derived from `name` (singular, studly case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationSpec {
    pub name: String,
    pub kind: RelationKind,
    pub related_entity: String,
}

impl RelationSpec {
    pub fn new(name: impl Into<String>, kind: RelationKind) -> Self {
        let name = name.into();
        let related_entity = crate::domain::naming::related_entity(&name);
        Self {
            name,
            kind,
            related_entity,
        }
    }
}
