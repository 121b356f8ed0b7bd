//! List command report data structures.

use super::output::{Output, Report};

/// One line of the component listing.
#[derive(Debug)]
pub struct ComponentSummary {
    pub name: String,
    pub path: String,
    /// Short markers such as `global`, `island` or the component's mode.
    pub flags: Vec<String>,
}

/// Report data listing the manifest's components.
#[derive(Debug)]
pub struct ListReport {
    pub components: Vec<ComponentSummary>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.components.is_empty() {
            out.preformatted("No components defined");
            return;
        }

        out.section("Components");
        for component in &self.components {
            if component.flags.is_empty() {
                out.list_item(&format!("{} ({})", component.name, component.path));
            } else {
                out.list_item(&format!(
                    "{} ({}) [{}]",
                    component.name,
                    component.path,
                    component.flags.join(", ")
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::render_to_string;

    #[test]
    fn test_empty_list() {
        let report = ListReport { components: vec![] };
        assert_eq!(render_to_string(&report), "No components defined\n");
    }

    #[test]
    fn test_list_with_flags() {
        let report = ListReport {
            components: vec![
                ComponentSummary {
                    name: "Foo".to_string(),
                    path: "components/Foo.vue".to_string(),
                    flags: vec![],
                },
                ComponentSummary {
                    name: "Nav".to_string(),
                    path: "components/Nav.client.vue".to_string(),
                    flags: vec!["global".to_string(), "client".to_string()],
                },
            ],
        };

        assert_eq!(
            render_to_string(&report),
            "Components:\n  - Foo (components/Foo.vue)\n  - Nav (components/Nav.client.vue) [global, client]\n"
        );
    }
}
