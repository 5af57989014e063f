use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for hollowgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the schema file with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hollow.toml")]
    #[diagnostic(code(hollow::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown field type '{ty}' for field '{field}'")]
    #[diagnostic(
        code(hollow::unknown_field_type),
        help("valid types are: boolean, int, long, float, double, bytes, string, reference")
    )]
    UnknownFieldType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: SourceSpan,
        field: String,
        ty: String,
    },

    #[error("reference field '{field}' in schema '{schema}' does not name a referenced type")]
    #[diagnostic(
        code(hollow::missing_reference),
        help("add `references = \"<SchemaName>\"` to the field")
    )]
    MissingReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared as a reference here")]
        span: SourceSpan,
        schema: String,
        field: String,
    },

    #[error("duplicate schema '{name}'")]
    #[diagnostic(
        code(hollow::duplicate_schema),
        help("both schemas generate class '{class_name}', rename one of them")
    )]
    DuplicateSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: SourceSpan,
        #[label("defined again here")]
        second_span: SourceSpan,
        name: String,
        class_name: String,
    },

    #[error("duplicate field '{field}' in schema '{schema}'")]
    #[diagnostic(
        code(hollow::duplicate_field),
        help("both fields generate accessor '{accessor}()', rename one of them")
    )]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: SourceSpan,
        #[label("defined again here")]
        second_span: SourceSpan,
        schema: String,
        field: String,
        accessor: String,
    },

    #[error("unknown type '{target}' referenced by {context}")]
    #[diagnostic(
        code(hollow::unknown_reference),
        help("define a [[schema]] named '{target}' in the same file")
    )]
    UnknownReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("no schema with this name")]
        span: SourceSpan,
        target: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(code(hollow::invalid_identifier), help("{reason}"))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: SourceSpan,
        name: String,
        context: String,
        reason: String,
    },

    /// A generator option given outside hollow.toml, such as a CLI flag.
    #[error("invalid {option} '{value}'")]
    #[diagnostic(code(hollow::invalid_option), help("{reason}"))]
    InvalidOption {
        option: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(hollow::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
