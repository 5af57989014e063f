//! Generation of every accessor class described by a schema set.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use hollowgen_core::{GeneratedFile, WriteResult};
use hollowgen_schema::SchemaSet;

use crate::{
    GeneratorConfig,
    generator::{GeneratedArtifact, ObjectJavaFile},
    objects::generate,
};

/// Runs the object generator over a whole schema set.
///
/// Classes come out in schema declaration order.
pub struct ApiGenerator<'a> {
    schemas: &'a SchemaSet,
    config: GeneratorConfig,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were created or rewritten
    pub written: Vec<PathBuf>,
    /// Files whose content was already up to date
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

impl<'a> ApiGenerator<'a> {
    pub fn new(schemas: &'a SchemaSet, config: GeneratorConfig) -> Self {
        Self { schemas, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one artifact per schema.
    pub fn artifacts(&self) -> Vec<GeneratedArtifact> {
        self.schemas
            .iter()
            .map(|schema| {
                let artifact = generate(schema, &self.config);
                tracing::debug!(
                    "generated {} from schema {} ({} fields)",
                    artifact.class_name(),
                    schema.name,
                    schema.fields.len()
                );
                artifact
            })
            .collect()
    }

    fn files(&self) -> Vec<ObjectJavaFile> {
        self.artifacts()
            .into_iter()
            .map(|artifact| ObjectJavaFile::new(self.config.package_name.clone(), artifact))
            .collect()
    }

    /// Preview generated files without writing to disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Generate all files into the specified output directory.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.path(output_dir);
            let outcome = file.write(output_dir).wrap_err_with(|| {
                format!(
                    "failed to write accessor class {}",
                    file.artifact().class_name()
                )
            })?;

            match outcome {
                WriteResult::Written => result.written.push(path),
                WriteResult::Unchanged => result.unchanged.push(path),
            }
        }

        tracing::info!(
            "wrote {} of {} accessor classes to {}",
            result.written.len(),
            result.total(),
            output_dir.display()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use hollowgen_schema::{FieldType, RecordSchema};
    use tempfile::TempDir;

    use super::*;

    fn schemas() -> SchemaSet {
        [
            RecordSchema::new("Movie")
                .field("id", FieldType::Int)
                .reference("director", "Person"),
            RecordSchema::new("Person").field("name", FieldType::String),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_artifacts_follow_schema_order() {
        let schemas = schemas();
        let generator = ApiGenerator::new(&schemas, GeneratorConfig::new("com.example", "API"));

        let names: Vec<_> = generator
            .artifacts()
            .iter()
            .map(|a| a.class_name().to_string())
            .collect();
        assert_eq!(names, ["MovieHollowImpl", "PersonHollowImpl"]);
    }

    #[test]
    fn test_preview_paths() {
        let schemas = schemas();
        let generator = ApiGenerator::new(&schemas, GeneratorConfig::new("com.example", "API"));

        let files = generator.preview();
        let paths: Vec<_> = files.iter().map(|f| PathBuf::from(&f.path)).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("com/example/MovieHollowImpl.java"),
                PathBuf::from("com/example/PersonHollowImpl.java"),
            ]
        );
        assert!(files[0].content.contains("public class MovieHollowImpl"));
    }

    #[test]
    fn test_generate_writes_files() {
        let temp = TempDir::new().unwrap();
        let schemas = schemas();
        let generator = ApiGenerator::new(&schemas, GeneratorConfig::new("com.example", "API"));

        let result = generator.generate(temp.path()).unwrap();

        assert_eq!(result.written.len(), 2);
        assert!(result.unchanged.is_empty());

        let movie = temp.path().join("com/example/MovieHollowImpl.java");
        let content = std::fs::read_to_string(movie).unwrap();
        assert!(content.contains("public PersonHollowImpl getDirector() {"));
    }

    #[test]
    fn test_regenerate_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let schemas = schemas();
        let generator = ApiGenerator::new(&schemas, GeneratorConfig::new("com.example", "API"));

        generator.generate(temp.path()).unwrap();
        let second = generator.generate(temp.path()).unwrap();

        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 2);
        assert_eq!(second.total(), 2);
    }
}
