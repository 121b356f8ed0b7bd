//! Check operation - manifest summary.

use compwire_core::Mode;
use compwire_manifest::ComponentsToml;

use crate::reports::{CheckReport, ComponentStats};

/// Execute the check operation.
///
/// The manifest has already been validated by parsing; this counts what
/// each generated module will contain.
pub fn check(file: &ComponentsToml) -> CheckReport {
    let components = file.manifest().components();
    let barrel_count = |mode| {
        components
            .iter()
            .filter(|c| !c.island && c.matches_mode(Some(mode)))
            .count()
    };

    CheckReport {
        config_path: file.path().to_path_buf(),
        stats: ComponentStats {
            total: components.len(),
            global: components.iter().filter(|c| c.global).count(),
            islands: components.iter().filter(|c| c.island).count(),
            client: barrel_count(Mode::Client),
            server: barrel_count(Mode::Server),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_counts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("components.toml");
        fs::write(
            &path,
            r#"
[[components]]
path = "components/Foo.vue"
global = true

[[components]]
path = "components/Nav.client.vue"

[[components]]
path = "components/Chart.server.vue"
island = true
"#,
        )
        .unwrap();
        let file = ComponentsToml::open(&path).unwrap();

        let report = check(&file);
        assert_eq!(report.config_path, path);
        assert_eq!(
            report.stats,
            ComponentStats {
                total: 3,
                global: 1,
                islands: 1,
                client: 2,
                server: 1,
            }
        );
    }
}
