//! Generated artifacts and the trait shared by Java file generators.

use std::path::{Path, PathBuf};

use hollowgen_core::GeneratedFile;

/// A generator producing the source of one Java class.
pub trait JavaFileGenerator {
    /// Simple name of the generated class.
    fn class_name(&self) -> &str;

    /// Render the full source text of the class.
    fn generate(&self) -> String;

    /// Render and pair the source with its class name.
    fn artifact(&self) -> GeneratedArtifact {
        GeneratedArtifact::new(self.class_name(), self.generate())
    }
}

/// Class name and source text of one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    class_name: String,
    source_text: String,
}

impl GeneratedArtifact {
    pub fn new(class_name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            source_text: source_text.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// A generated class placed in its package directory.
///
/// `com.example.movies` + `MovieHollowImpl` lands at
/// `<base>/com/example/movies/MovieHollowImpl.java`.
pub struct ObjectJavaFile {
    package_name: String,
    artifact: GeneratedArtifact,
}

impl ObjectJavaFile {
    pub fn new(package_name: impl Into<String>, artifact: GeneratedArtifact) -> Self {
        Self {
            package_name: package_name.into(),
            artifact,
        }
    }

    pub fn artifact(&self) -> &GeneratedArtifact {
        &self.artifact
    }
}

impl GeneratedFile for ObjectJavaFile {
    fn path(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        for segment in self.package_name.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.artifact.class_name));
        path
    }

    fn render(&self) -> String {
        self.artifact.source_text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_file_path() {
        let file = ObjectJavaFile::new(
            "com.example.movies",
            GeneratedArtifact::new("MovieHollowImpl", "class"),
        );
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/com/example/movies/MovieHollowImpl.java")
        );
    }

    #[test]
    fn test_object_file_default_package() {
        let file = ObjectJavaFile::new("", GeneratedArtifact::new("MovieHollowImpl", "class"));
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/MovieHollowImpl.java")
        );
    }
}
