use std::collections::BTreeSet;

use crate::{
    Error, Result, SchemaSet,
    validate::{validate_affix, validate_identifier, validate_package_name},
};

/// Generator options from the `[codegen]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Java package of the generated classes
    pub package: String,

    /// Name of the API facade exposing per-type lookups
    pub api_class: String,

    /// Suffix appended to every generated type name
    pub class_postfix: String,

    /// Prefix prepended to every generated accessor
    pub getter_prefix: String,

    /// Return a caller-chosen generic type from every reference accessor
    pub parameterize_class_names: bool,

    /// Schemas whose references return a generic type regardless
    pub parameterized_types: BTreeSet<String>,
}

impl CodegenConfig {
    /// Re-check options that were changed after loading, e.g. by CLI flags.
    ///
    /// Applies the same rules as hollow.toml parsing, without source spans.
    pub fn validate(&self, schemas: &SchemaSet) -> Result<()> {
        if let Some(reason) = validate_package_name(&self.package) {
            return Err(invalid_option("package", &self.package, reason));
        }
        if let Some(reason) = validate_identifier(&self.api_class) {
            return Err(invalid_option("API class", &self.api_class, reason));
        }
        if let Some(reason) = validate_affix(&self.class_postfix, true) {
            return Err(invalid_option("class postfix", &self.class_postfix, reason));
        }
        if let Some(reason) = validate_affix(&self.getter_prefix, false) {
            return Err(invalid_option("getter prefix", &self.getter_prefix, reason));
        }
        if let Some(ghost) = self
            .parameterized_types
            .iter()
            .find(|ty| !schemas.contains(ty.as_str()))
        {
            return Err(invalid_option(
                "parameterized type",
                ghost,
                "no schema with this name is defined",
            ));
        }
        Ok(())
    }
}

fn invalid_option(option: &str, value: &str, reason: &str) -> Box<Error> {
    Box::new(Error::InvalidOption {
        option: option.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordSchema;

    fn config() -> CodegenConfig {
        CodegenConfig {
            package: "com.example".into(),
            api_class: "MovieAPI".into(),
            class_postfix: String::new(),
            getter_prefix: String::new(),
            parameterize_class_names: false,
            parameterized_types: BTreeSet::new(),
        }
    }

    fn schemas() -> SchemaSet {
        [RecordSchema::new("Movie")].into_iter().collect()
    }

    fn rejected_option(config: CodegenConfig) -> String {
        match *config.validate(&schemas()).unwrap_err() {
            Error::InvalidOption { option, .. } => option,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = config();
        config.class_postfix = "V2".into();
        config.getter_prefix = "_".into();
        config.parameterized_types.insert("Movie".into());
        assert!(config.validate(&schemas()).is_ok());
    }

    #[test]
    fn test_rejects_invalid_names() {
        let mut bad = config();
        bad.package = "com..example".into();
        assert_eq!(rejected_option(bad), "package");

        let mut bad = config();
        bad.package = String::new();
        assert_eq!(rejected_option(bad), "package");

        let mut bad = config();
        bad.api_class = "Movie API".into();
        assert_eq!(rejected_option(bad), "API class");

        let mut bad = config();
        bad.class_postfix = "-v2".into();
        assert_eq!(rejected_option(bad), "class postfix");

        let mut bad = config();
        bad.getter_prefix = "1 ".into();
        assert_eq!(rejected_option(bad), "getter prefix");
    }

    #[test]
    fn test_rejects_unknown_parameterized_type() {
        let mut bad = config();
        bad.parameterized_types.insert("Ghost".into());
        assert_eq!(rejected_option(bad), "parameterized type");
    }
}
