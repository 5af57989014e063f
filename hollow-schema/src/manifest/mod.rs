//! Manifest types and parsing for hollow.toml files.

mod codegen;
mod file;
mod parse;

use std::{path::Path, str::FromStr};

pub use codegen::CodegenConfig;
pub use file::HollowToml;

use crate::{Error, Result, SchemaSet};

/// Root manifest for hollow.toml
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Generator options from the `[codegen]` table
    pub codegen: CodegenConfig,

    /// Record schemas from the `[[schema]]` array, in declaration order
    pub schemas: SchemaSet,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "hollow.toml")
    }
}

impl Manifest {
    /// Parse a hollow.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        HollowToml::open(path).map(HollowToml::into_manifest)
    }

    /// Parse a hollow.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse::parse(content, filename)
    }
}
