//! Schema column declarations for the create-table migration.

use crate::domain::{
    type_registry::{Column, column_for},
    value_objects::FieldSpec,
};

const COLUMN_INDENT: &str = "            ";

/// One indented `$table->...;` line per field that maps to a column, in
/// field order, each preceded by a newline. Fields without a column mapping
/// (`integer`, `boolean`, unknown tags) are skipped.
pub fn render(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .filter_map(column_for)
        .map(|column| format!("\n{COLUMN_INDENT}{}", column_line(&column)))
        .collect()
}

fn column_line(column: &Column) -> String {
    match column {
        Column::Typed { builder, name } => format!("$table->{builder}('{name}');"),
        Column::Enum { name, values } => {
            let domain = values
                .iter()
                .map(|v| format!("'{v}'"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("$table->enum('{name}', [{domain}]);")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parser::parse_fields;

    #[test]
    fn string_and_enum_columns_in_order() {
        let fields = parse_fields("name:string, status:enum(open,closed)").unwrap();
        assert_eq!(
            render(&fields),
            "\n            $table->string('name');\n            $table->enum('status', ['open', 'closed']);"
        );
    }

    #[test]
    fn any_enum_list_becomes_an_enum_column() {
        let fields = parse_fields("state:enum(draft, review , live)").unwrap();
        assert!(render(&fields).contains("$table->enum('state', ['draft', 'review', 'live']);"));
    }

    #[test]
    fn unmapped_types_are_silently_dropped() {
        let fields = parse_fields("count:integer, active:boolean, id2:uuid, body:text").unwrap();
        assert_eq!(render(&fields), "\n            $table->text('body');");
    }

    #[test]
    fn duplicate_fields_produce_duplicate_columns() {
        let fields = parse_fields("name:string, name:string").unwrap();
        assert_eq!(render(&fields).matches("$table->string('name');").count(), 2);
    }
}
