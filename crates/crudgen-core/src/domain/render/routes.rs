//! Resource route registration line.

use serde::Serialize;

use crate::domain::{naming::EntityName, render::controller::CONTROLLER_NAMESPACE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRegistration {
    /// The line appended to the routes file.
    pub line: String,
    /// Prefix identifying an existing registration for the same segment.
    pub needle: String,
}

impl RouteRegistration {
    /// Whether `routes` already registers this resource segment.
    pub fn is_registered_in(&self, routes: &str) -> bool {
        routes.contains(&self.needle)
    }
}

pub fn render(name: &EntityName) -> RouteRegistration {
    let needle = format!("Route::apiResource('{}',", name.plural_lower());
    let line = format!(
        "{needle} {CONTROLLER_NAMESPACE}\\{}::class);",
        name.controller()
    );
    RouteRegistration { line, needle }
}
