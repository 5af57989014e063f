//! Generator options.

use std::collections::BTreeSet;

use hollowgen_schema::CodegenConfig;

/// Naming and typing options shared by every class of one generation run.
///
/// # Example
///
/// ```
/// use hollowgen_codegen::GeneratorConfig;
///
/// let config = GeneratorConfig::new("com.example.movies", "MovieAPI")
///     .with_getter_prefix("_")
///     .with_parameterized_type("Person");
///
/// assert!(config.parameterizes("Person"));
/// assert!(!config.parameterizes("Studio"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Java package of the generated classes
    pub package_name: String,
    /// Name of the API facade exposing per-type lookups
    pub api_class_name: String,
    /// Suffix appended to every generated type name
    pub class_postfix: String,
    /// Prefix prepended to every generated accessor
    pub getter_prefix: String,
    /// Return a caller-chosen generic type from every reference accessor
    pub parameterize_class_names: bool,
    /// Schemas whose references return a generic type regardless
    pub parameterized_types: BTreeSet<String>,
}

impl GeneratorConfig {
    pub fn new(package_name: impl Into<String>, api_class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            api_class_name: api_class_name.into(),
            ..Self::default()
        }
    }

    pub fn with_class_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.class_postfix = postfix.into();
        self
    }

    pub fn with_getter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.getter_prefix = prefix.into();
        self
    }

    pub fn with_parameterize_class_names(mut self, parameterize: bool) -> Self {
        self.parameterize_class_names = parameterize;
        self
    }

    pub fn with_parameterized_type(mut self, type_name: impl Into<String>) -> Self {
        self.parameterized_types.insert(type_name.into());
        self
    }

    /// Whether references to `referenced_type` return a type parameter
    /// instead of the concrete generated class.
    pub fn parameterizes(&self, referenced_type: &str) -> bool {
        self.parameterize_class_names || self.parameterized_types.contains(referenced_type)
    }
}

impl From<&CodegenConfig> for GeneratorConfig {
    fn from(config: &CodegenConfig) -> Self {
        Self {
            package_name: config.package.clone(),
            api_class_name: config.api_class.clone(),
            class_postfix: config.class_postfix.clone(),
            getter_prefix: config.getter_prefix.clone(),
            parameterize_class_names: config.parameterize_class_names,
            parameterized_types: config.parameterized_types.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("com.example", "MovieAPI");
        assert_eq!(config.package_name, "com.example");
        assert_eq!(config.api_class_name, "MovieAPI");
        assert_eq!(config.class_postfix, "");
        assert_eq!(config.getter_prefix, "");
        assert!(!config.parameterize_class_names);
        assert!(config.parameterized_types.is_empty());
    }

    #[test]
    fn test_parameterize_all() {
        let config = GeneratorConfig::new("com.example", "MovieAPI")
            .with_parameterize_class_names(true);
        assert!(config.parameterizes("Person"));
        assert!(config.parameterizes("Anything"));
    }

    #[test]
    fn test_from_codegen_config() {
        let codegen = CodegenConfig {
            package: "com.example".into(),
            api_class: "MovieAPI".into(),
            class_postfix: "V2".into(),
            getter_prefix: "_".into(),
            parameterize_class_names: false,
            parameterized_types: BTreeSet::from(["Person".to_string()]),
        };

        let config = GeneratorConfig::from(&codegen);
        assert_eq!(config.class_postfix, "V2");
        assert_eq!(config.getter_prefix, "_");
        assert!(config.parameterizes("Person"));
        assert!(!config.parameterizes("Movie"));
    }
}
