//! Core domain layer for crudgen.
//!
//! Pure logic only: naming, spec parsing, the type registry, rendering,
//! marker patching and path layout. All I/O goes through the ports defined
//! in the application layer.
//!
//! - **No I/O**: renderers and patchers work on strings
//! - **Deterministic**: the same inputs always render the same text
//! - **Immutable values**: everything is `Clone + PartialEq`

pub mod artifact;
pub mod error;
pub mod layout;
pub mod naming;
pub mod parser;
pub mod patch;
pub mod render;
pub mod type_registry;
pub mod value_objects;

mod validation;

pub use artifact::{ArtifactKind, ArtifactPlan, Edit};
pub use error::{DomainError, ErrorCategory};
pub use layout::{LayoutPaths, ProjectLayout};
pub use naming::EntityName;
pub use parser::{parse_fields, parse_relations};
pub use patch::{ENTITY_MARKER, MarkerPatch, RULES_MARKER, SCHEMA_MARKER, apply_at_marker, append_line};
pub use render::{Blueprint, EntityAugmentation, RouteRegistration, VIEW_NAMES, ViewStub};
pub use type_registry::{EnumRuleMatching, validation_rule, validation_rule_with};
pub use validation::DomainValidator;
pub use value_objects::{FieldSpec, RelationKind, RelationSpec};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Testable properties across modules
    // ========================================================================

    #[test]
    fn field_count_and_order_follow_input() {
        let fields = parse_fields("a:string, b:text, c:integer").unwrap();
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn field_without_type_is_rejected() {
        assert!(matches!(
            parse_fields("name"),
            Err(DomainError::MalformedFieldSpec { token }) if token == "name"
        ));
    }

    #[test]
    fn rule_table_is_total() {
        assert_eq!(validation_rule("integer"), "required|integer");
        assert_eq!(validation_rule("unknown_type"), "nullable");
    }

    #[test]
    fn missing_marker_is_a_no_op() {
        assert_eq!(apply_at_marker("abc", "xyz", "!!").content(), "abc");
    }

    #[test]
    fn has_many_accessor_targets_singular_studly_entity() {
        let name = EntityName::parse("project").unwrap();
        let relations = parse_relations("tasks:hasMany").unwrap();
        let bp = Blueprint::render(&name, &[], &relations, EnumRuleMatching::default());

        assert!(bp.entity.accessors.contains("public function tasks()"));
        assert!(bp.entity.accessors.contains("hasMany(\\App\\Models\\Task::class)"));
    }

    #[test]
    fn unsupported_relation_parses_but_renders_nothing() {
        let relations = parse_relations("owner:belongsToMany").unwrap();
        assert_eq!(relations.len(), 1);
        assert!(!relations[0].kind.is_supported());

        let name = EntityName::parse("project").unwrap();
        let bp = Blueprint::render(&name, &[], &relations, EnumRuleMatching::default());
        assert!(bp.entity.accessors.is_empty());
    }

    #[test]
    fn duplicate_fields_render_twice() {
        let fields = parse_fields("name:string, name:string").unwrap();
        let name = EntityName::parse("project").unwrap();
        let bp = Blueprint::render(&name, &fields, &[], EnumRuleMatching::default());

        assert_eq!(bp.schema_columns.matches("$table->string('name');").count(), 2);
        assert_eq!(DomainValidator::duplicate_field_names(&fields), vec!["name"]);
    }
}
