//! Generate operation - accessor classes from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use hollowgen_codegen::{ApiGenerator, GeneratorConfig};
use hollowgen_core::hollow_impl_classname;
use hollowgen_schema::Manifest;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, SchemaSummary, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated sources.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    manifest: &Manifest,
    config: GeneratorConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let schemas = manifest
        .schemas
        .iter()
        .map(|schema| SchemaSummary {
            name: schema.name.clone(),
            class_name: hollow_impl_classname(&schema.name, &config.class_postfix),
            field_count: schema.fields.len(),
        })
        .collect();

    let package = config.package_name.clone();
    let generator = ApiGenerator::new(&manifest.schemas, config);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate accessor classes")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: gen_result.written,
            unchanged: gen_result.unchanged.len(),
        })
    };

    Ok(GenerateReport {
        package,
        schemas,
        result,
    })
}
