//! Entity augmentation: mass-assignable attribute list and relation accessors.

use serde::Serialize;

use crate::domain::value_objects::{FieldSpec, RelationKind, RelationSpec};

/// Namespace generated accessors point related entities at.
const MODELS_NAMESPACE: &str = "\\App\\Models";

/// The two text blocks inserted into a scaffolded entity class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityAugmentation {
    /// `protected $fillable = [...];`
    pub fillable: String,
    /// Concatenated accessor methods, in relation input order.
    pub accessors: String,
}

impl EntityAugmentation {
    /// Text placed right after the entity marker.
    pub fn insertion(&self) -> String {
        format!("\n\n    {}\n{}", self.fillable, self.accessors)
    }
}

pub fn render(fields: &[FieldSpec], relations: &[RelationSpec]) -> EntityAugmentation {
    EntityAugmentation {
        fillable: fillable(fields),
        accessors: relations.iter().filter_map(accessor).collect(),
    }
}

fn fillable(fields: &[FieldSpec]) -> String {
    let names = fields
        .iter()
        .map(|f| format!("'{}'", f.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("protected $fillable = [{names}];")
}

/// `None` for kinds other than `hasMany` / `belongsTo`.
fn accessor(relation: &RelationSpec) -> Option<String> {
    let association = match relation.kind {
        RelationKind::HasMany => "hasMany",
        RelationKind::BelongsTo => "belongsTo",
        RelationKind::Other(_) => return None,
    };
    Some(format!(
        "\n    public function {name}()\n    {{\n        return $this->{association}({MODELS_NAMESPACE}\\{related}::class);\n    }}\n",
        name = relation.name,
        related = relation.related_entity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parser::{parse_fields, parse_relations};

    #[test]
    fn fillable_lists_fields_in_input_order() {
        let fields = parse_fields("status:enum(open,closed), name:string").unwrap();
        let out = render(&fields, &[]);
        assert_eq!(out.fillable, "protected $fillable = ['status', 'name'];");
    }

    #[test]
    fn empty_field_list_renders_empty_fillable() {
        assert_eq!(render(&[], &[]).fillable, "protected $fillable = [];");
    }

    #[test]
    fn has_many_accessor_targets_singular_studly_entity() {
        let relations = parse_relations("tasks:hasMany").unwrap();
        let out = render(&[], &relations);
        assert!(out.accessors.contains("public function tasks()"));
        assert!(
            out.accessors
                .contains("return $this->hasMany(\\App\\Models\\Task::class);")
        );
    }

    #[test]
    fn belongs_to_accessor() {
        let relations = parse_relations("owner:belongsTo").unwrap();
        let out = render(&[], &relations);
        assert!(
            out.accessors
                .contains("return $this->belongsTo(\\App\\Models\\Owner::class);")
        );
    }

    #[test]
    fn unsupported_kind_renders_no_accessor() {
        let relations = parse_relations("owner:belongsToMany").unwrap();
        assert_eq!(relations.len(), 1);
        assert!(render(&[], &relations).accessors.is_empty());
    }

    #[test]
    fn accessors_follow_relation_order_and_skip_unknown_kinds() {
        let relations = parse_relations("tasks:hasMany,tags:morphMany,owner:belongsTo").unwrap();
        let out = render(&[], &relations);
        let tasks = out.accessors.find("tasks()").unwrap();
        let owner = out.accessors.find("owner()").unwrap();
        assert!(tasks < owner);
        assert!(!out.accessors.contains("tags()"));
    }

    #[test]
    fn insertion_starts_on_a_new_line() {
        let out = render(&parse_fields("name:string").unwrap(), &[]);
        assert!(out.insertion().starts_with("\n\n    protected $fillable"));
    }
}
