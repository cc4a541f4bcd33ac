//! Placeholder view stubs.

use serde::Serialize;

use crate::domain::naming::EntityName;

pub const VIEW_NAMES: [&str; 4] = ["index", "create", "edit", "show"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewStub {
    pub view: &'static str,
    pub content: String,
}

pub fn render(name: &EntityName) -> Vec<ViewStub> {
    VIEW_NAMES
        .iter()
        .map(|&view| ViewStub {
            view,
            content: format!(
                "<x-layout>\n<!-- {view} view for {} -->\n</x-layout>\n",
                name.studly()
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_stub_per_fixed_view() {
        let stubs = render(&EntityName::parse("project").unwrap());
        let views: Vec<_> = stubs.iter().map(|s| s.view).collect();
        assert_eq!(views, VIEW_NAMES);
        assert_eq!(
            stubs[2].content,
            "<x-layout>\n<!-- edit view for Project -->\n</x-layout>\n"
        );
    }
}
