//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Java package the classes were generated into.
    pub package: String,
    /// One entry per schema, in declaration order.
    pub schemas: Vec<SchemaSummary>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

#[derive(Debug)]
pub struct SchemaSummary {
    pub name: String,
    pub class_name: String,
    pub field_count: usize,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files created or rewritten.
    pub written: Vec<PathBuf>,
    /// Number of files already up to date.
    pub unchanged: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Package", &self.package);
        out.newline();

        out.section(&format!("Classes ({})", self.schemas.len()));
        for schema in &self.schemas {
            out.list_item(&format!(
                "{} <- {} ({} fields)",
                schema.class_name, schema.name, schema.field_count
            ));
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        if !written.written.is_empty() {
            out.section("Written");
            for path in &written.written {
                out.added_item(&path.display().to_string());
            }
        }
        if written.unchanged > 0 {
            out.preformatted(&format!("{} files unchanged", written.unchanged));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            package: "com.example".into(),
            schemas: vec![SchemaSummary {
                name: "Movie".into(),
                class_name: "MovieHollowImpl".into(),
                field_count: 2,
            }],
            result,
        }
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "com/example/MovieHollowImpl.java".into(),
                content: "public class MovieHollowImpl {\n}\n".into(),
            }],
        }));

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── com/example/MovieHollowImpl.java ──",
                "public class MovieHollowImpl {",
                "}",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_render_written_with_unchanged() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("out"),
            written: vec![],
            unchanged: 1,
        }));

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.lines.contains(&"  - MovieHollowImpl <- Movie (2 fields)".to_string()));
        assert!(out.lines.contains(&"1 files unchanged".to_string()));
        assert!(!out.lines.contains(&"Written:".to_string()));
    }
}
