//! Field type registry.
//!
//! Every primitive type tag is described once by a [`TypeDef`]: the schema
//! column builder it maps to and the validation rule it produces. Column
//! rendering and rule derivation are table lookups over [`TYPE_REGISTRY`].
//!
//! Enumerations are the exception. Schema columns recognise any tag that
//! contains `enum` and a parenthesised value list, while the validation rule
//! table, in its default [`EnumRuleMatching::Literal`] mode, only recognises
//! the exact tag `enum(open,closed)`. The two matchers disagree on purpose
//! until the broader behaviour is confirmed; `Structural` opts in to it.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FieldSpec;

/// Rule for tags the registry does not know.
pub const FALLBACK_RULE: &str = "nullable";

/// The only enumeration tag recognised by the literal rule matcher.
pub const LITERAL_ENUM_TAG: &str = "enum(open,closed)";
const LITERAL_ENUM_RULE: &str = "required|in:open,closed";

/// Describes one primitive type tag.
#[derive(Debug, Clone, Copy)]
pub struct TypeDef {
    /// The tag as written in `--fields`.
    pub tag: &'static str,

    /// Schema builder method, or `None` when the column renderer emits nothing
    /// for this type.
    pub column: Option<&'static str>,

    /// Pipe-delimited validation rule.
    pub rule: &'static str,
}

pub static TYPE_REGISTRY: &[TypeDef] = &[
    TypeDef {
        tag: "string",
        column: Some("string"),
        rule: "required|string|max:255",
    },
    TypeDef {
        tag: "text",
        column: Some("text"),
        rule: "nullable|string",
    },
    TypeDef {
        tag: "integer",
        column: None,
        rule: "required|integer",
    },
    TypeDef {
        tag: "boolean",
        column: None,
        rule: "nullable|boolean",
    },
];

/// Look up the definition for an exact tag.
pub fn find_type(tag: &str) -> Option<&'static TypeDef> {
    TYPE_REGISTRY.iter().find(|def| def.tag == tag)
}

/// How the validation rule table treats enumeration tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumRuleMatching {
    /// Only the exact tag `enum(open,closed)` gets an `in:` rule.
    #[default]
    Literal,
    /// Any `enum(...)` tag gets `required|in:<values>`.
    Structural,
}

impl EnumRuleMatching {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Structural => "structural",
        }
    }
}

impl std::fmt::Display for EnumRuleMatching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation rule for a type tag, literal enum matching.
///
/// Total: unknown tags yield [`FALLBACK_RULE`].
pub fn validation_rule(type_tag: &str) -> String {
    validation_rule_with(type_tag, EnumRuleMatching::Literal)
}

/// Validation rule for a type tag under the given enum matching mode.
pub fn validation_rule_with(type_tag: &str, matching: EnumRuleMatching) -> String {
    if let Some(def) = find_type(type_tag) {
        return def.rule.to_string();
    }

    match matching {
        EnumRuleMatching::Literal if type_tag == LITERAL_ENUM_TAG => LITERAL_ENUM_RULE.to_string(),
        EnumRuleMatching::Structural => FieldSpec::new("", type_tag)
            .enum_values()
            .map_or_else(
                || FALLBACK_RULE.to_string(),
                |values| format!("required|in:{}", values.join(",")),
            ),
        EnumRuleMatching::Literal => FALLBACK_RULE.to_string(),
    }
}

/// The schema column a field produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// A plain builder call: `$table->string('name');`
    Typed { builder: &'static str, name: String },
    /// `$table->enum('status', ['open', 'closed']);`
    Enum { name: String, values: Vec<String> },
}

/// Column for a field, or `None` when the type has no column mapping.
pub fn column_for(field: &FieldSpec) -> Option<Column> {
    if let Some(builder) = find_type(&field.type_tag).and_then(|def| def.column) {
        return Some(Column::Typed {
            builder,
            name: field.name.clone(),
        });
    }
    field.enum_values().map(|values| Column::Enum {
        name: field.name.clone(),
        values,
    })
}
