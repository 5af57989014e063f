use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use hollowgen_codegen::GeneratorConfig;
use hollowgen_schema::{HollowToml, Manifest};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to hollow.toml (defaults to ./hollow.toml)
    #[arg(short, long, default_value = "hollow.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Java package (overrides [codegen] package)
    #[arg(long)]
    pub package: Option<String>,

    /// API facade class name (overrides [codegen] api_class)
    #[arg(long)]
    pub api_class: Option<String>,

    /// Suffix for generated type names (overrides [codegen] class_postfix)
    #[arg(long)]
    pub class_postfix: Option<String>,

    /// Prefix for generated accessors (overrides [codegen] getter_prefix)
    #[arg(long)]
    pub getter_prefix: Option<String>,

    /// Return a generic type from every reference accessor
    #[arg(long)]
    pub parameterize_class_names: bool,

    /// Return a generic type from references to TYPE (repeatable)
    #[arg(long = "parameterize", value_name = "TYPE")]
    pub parameterized_types: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let hollow_toml = HollowToml::open(&self.config).unwrap_or_exit();
        let manifest = hollow_toml.manifest();
        let config = self.resolve_config(manifest).unwrap_or_exit();

        tracing::debug!("generating with {:?}", config);

        let report = ops::generate(
            manifest,
            config,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Apply flag overrides to the [codegen] table and re-validate the result.
    fn resolve_config(&self, manifest: &Manifest) -> hollowgen_schema::Result<GeneratorConfig> {
        let mut codegen = manifest.codegen.clone();

        if let Some(package) = &self.package {
            codegen.package = package.clone();
        }
        if let Some(api_class) = &self.api_class {
            codegen.api_class = api_class.clone();
        }
        if let Some(postfix) = &self.class_postfix {
            codegen.class_postfix = postfix.clone();
        }
        if let Some(prefix) = &self.getter_prefix {
            codegen.getter_prefix = prefix.clone();
        }
        if self.parameterize_class_names {
            codegen.parameterize_class_names = true;
        }
        codegen
            .parameterized_types
            .extend(self.parameterized_types.iter().cloned());

        codegen.validate(&manifest.schemas)?;
        Ok(GeneratorConfig::from(&codegen))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use hollowgen_schema::Error;

    use super::*;

    const MANIFEST: &str = r#"
[codegen]
package = "com.example"
api_class = "MovieAPI"

[[schema]]
name = "Movie"
fields = [{ name = "id", type = "int" }]
"#;

    fn command() -> GenerateCommand {
        GenerateCommand {
            config: PathBuf::from("hollow.toml"),
            output: PathBuf::from("."),
            dry_run: false,
            package: None,
            api_class: None,
            class_postfix: None,
            getter_prefix: None,
            parameterize_class_names: false,
            parameterized_types: Vec::new(),
        }
    }

    #[test]
    fn test_flags_override_manifest() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let cmd = GenerateCommand {
            package: Some("org.films".into()),
            class_postfix: Some("V2".into()),
            parameterized_types: vec!["Movie".into()],
            ..command()
        };

        let config = cmd.resolve_config(&manifest).unwrap();
        assert_eq!(config.package_name, "org.films");
        assert_eq!(config.api_class_name, "MovieAPI");
        assert_eq!(config.class_postfix, "V2");
        assert!(config.parameterizes("Movie"));
    }

    #[test]
    fn test_unknown_parameterized_flag_is_rejected() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let cmd = GenerateCommand {
            parameterized_types: vec!["Ghost".into()],
            ..command()
        };

        let err = cmd.resolve_config(&manifest).unwrap_err();
        assert!(matches!(*err, Error::InvalidOption { ref value, .. } if value == "Ghost"));
    }

    #[test]
    fn test_invalid_flag_values_are_rejected() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let bad_package = GenerateCommand {
            package: Some("com.new".into()),
            ..command()
        };
        assert!(bad_package.resolve_config(&manifest).is_err());

        let bad_api_class = GenerateCommand {
            api_class: Some("Movie-API".into()),
            ..command()
        };
        assert!(bad_api_class.resolve_config(&manifest).is_err());

        let bad_prefix = GenerateCommand {
            getter_prefix: Some("1 ".into()),
            ..command()
        };
        assert!(bad_prefix.resolve_config(&manifest).is_err());
    }
}
