use std::collections::HashSet;

use crate::domain::value_objects::FieldSpec;

/// Cross-field checks that do not reject input.
///
/// Parsing accepts these cases; the orchestrator turns the findings into
/// report warnings.
pub struct DomainValidator;

impl DomainValidator {
    /// Field names that occur more than once, each listed once, in first-seen order.
    pub fn duplicate_field_names(fields: &[FieldSpec]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for field in fields {
            if !seen.insert(field.name.as_str()) && reported.insert(field.name.as_str()) {
                duplicates.push(field.name.clone());
            }
        }
        duplicates
    }
}
