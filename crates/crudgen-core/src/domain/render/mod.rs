//! Template renderers.
//!
//! Each renderer is a pure function of the derived names and parsed specs.
//! [`Blueprint`] runs all of them once for a generation run so that the
//! orchestrator and the dry-run preview share the exact same text.

pub mod controller;
pub mod entity;
pub mod routes;
pub mod rules;
pub mod schema;
pub mod views;

use serde::Serialize;

use crate::domain::{
    naming::EntityName,
    type_registry::EnumRuleMatching,
    value_objects::{FieldSpec, RelationSpec},
};

pub use entity::EntityAugmentation;
pub use routes::RouteRegistration;
pub use views::{VIEW_NAMES, ViewStub};

/// Every rendered text for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    pub entity: EntityAugmentation,
    pub schema_columns: String,
    pub controller: String,
    pub validation_rules: String,
    pub route: RouteRegistration,
    pub views: Vec<ViewStub>,
}

impl Blueprint {
    pub fn render(
        name: &EntityName,
        fields: &[FieldSpec],
        relations: &[RelationSpec],
        matching: EnumRuleMatching,
    ) -> Self {
        Self {
            entity: entity::render(fields, relations),
            schema_columns: schema::render(fields),
            controller: controller::render(name),
            validation_rules: rules::render(fields, matching),
            route: routes::render(name),
            views: views::render(name),
        }
    }
}
