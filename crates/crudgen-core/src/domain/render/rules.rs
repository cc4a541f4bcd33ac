//! Validation rules for the form request's `rules()` body.

use crate::domain::{
    type_registry::{EnumRuleMatching, validation_rule_with},
    value_objects::FieldSpec,
};

const RULE_INDENT: &str = "            ";

/// `'field' => 'rule',` entries, one per line, each preceded by a newline so
/// the block slots in right after `return [`.
pub fn render(fields: &[FieldSpec], matching: EnumRuleMatching) -> String {
    fields
        .iter()
        .map(|field| {
            format!(
                "\n{RULE_INDENT}'{}' => '{}',",
                field.name,
                validation_rule_with(&field.type_tag, matching)
            )
        })
        .collect()
}
