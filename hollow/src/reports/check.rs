//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub package: String,
    pub api_class: String,
    pub schemas: Vec<SchemaCheck>,
}

/// One validated schema.
#[derive(Debug)]
pub struct SchemaCheck {
    pub name: String,
    pub field_count: usize,
    /// Referenced schema names, in field order.
    pub references: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Package", &self.package);
        out.key_value("API class", &self.api_class);
        out.newline();

        out.section(&format!("Schemas ({})", self.schemas.len()));
        for schema in &self.schemas {
            let fields = match schema.field_count {
                1 => "1 field".to_string(),
                n => format!("{} fields", n),
            };
            if schema.references.is_empty() {
                out.list_item(&format!("{} ({})", schema.name, fields));
            } else {
                out.list_item(&format!(
                    "{} ({}) -> {}",
                    schema.name,
                    fields,
                    schema.references.join(", ")
                ));
            }
        }
        out.newline();

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_lists_schemas() {
        let report = CheckReport {
            config_path: PathBuf::from("hollow.toml"),
            package: "com.example.movies".into(),
            api_class: "MovieAPI".into(),
            schemas: vec![
                SchemaCheck {
                    name: "Movie".into(),
                    field_count: 3,
                    references: vec!["Person".into()],
                },
                SchemaCheck {
                    name: "Person".into(),
                    field_count: 1,
                    references: vec![],
                },
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Package: com.example.movies",
                "API class: MovieAPI",
                "",
                "Schemas (2):",
                "  - Movie (3 fields) -> Person",
                "  - Person (1 field)",
                "",
                "✓ hollow.toml is valid",
            ]
        );
    }
}
