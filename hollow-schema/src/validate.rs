//! Validation helpers for hollow.toml names.

use std::ops::Range;

use miette::{NamedSource, SourceSpan};

use hollowgen_core::{is_identifier_part, is_identifier_start};

use crate::Error;

/// Parsing and validation context that carries source information.
///
/// Every error raised while lowering a manifest needs the raw source and the
/// filename for its snippet; this keeps them out of the call signatures.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "hollow.toml");
/// ctx.validate_name(&schema.name, "schema")?;
/// ```
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    pub fn validation_error(&self, message: impl Into<String>, span: Range<usize>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(to_span(span)),
            message: message.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: &str,
        context: &str,
        reason: &str,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: to_span(span),
            name: name.to_string(),
            context: context.to_string(),
            reason: reason.to_string(),
        })
    }

    pub fn unknown_field_type_error(
        &self,
        field: &str,
        ty: &str,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::UnknownFieldType {
            src: self.named_source(),
            span: to_span(span),
            field: field.to_string(),
            ty: ty.to_string(),
        })
    }

    pub fn missing_reference_error(
        &self,
        schema: &str,
        field: &str,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::MissingReference {
            src: self.named_source(),
            span: to_span(span),
            schema: schema.to_string(),
            field: field.to_string(),
        })
    }

    pub fn duplicate_schema_error(
        &self,
        name: &str,
        class_name: &str,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateSchema {
            src: self.named_source(),
            first_span: to_span(first),
            second_span: to_span(second),
            name: name.to_string(),
            class_name: class_name.to_string(),
        })
    }

    pub fn duplicate_field_error(
        &self,
        schema: &str,
        field: &str,
        accessor: &str,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            first_span: to_span(first),
            second_span: to_span(second),
            schema: schema.to_string(),
            field: field.to_string(),
            accessor: accessor.to_string(),
        })
    }

    pub fn unknown_reference_error(
        &self,
        target: &str,
        context: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::UnknownReference {
            src: self.named_source(),
            span: to_span(span),
            target: target.to_string(),
            context: context.into(),
        })
    }

    /// Reject empty record and field names.
    ///
    /// Anything else is accepted: invalid identifier characters are
    /// substituted at generation time.
    pub fn validate_name(&self, name: &str, kind: &str, span: Range<usize>) -> crate::Result<()> {
        if name.trim().is_empty() {
            return Err(self.invalid_identifier_error(name, kind, "name cannot be empty", span));
        }
        Ok(())
    }

    /// Validate a Java type name such as the API class.
    pub fn validate_class_name(
        &self,
        name: &str,
        kind: &str,
        span: Range<usize>,
    ) -> crate::Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.invalid_identifier_error(name, kind, reason, span));
        }
        Ok(())
    }

    /// Validate a dotted Java package name.
    pub fn validate_package(&self, name: &str, span: Range<usize>) -> crate::Result<()> {
        if let Some(reason) = validate_package_name(name) {
            return Err(self.invalid_identifier_error(name, "package", reason, span));
        }
        Ok(())
    }

    /// Validate a fragment pasted into generated names, such as the class
    /// postfix or getter prefix.
    pub fn validate_affix(
        &self,
        value: &str,
        kind: &str,
        leading_digit: bool,
        span: Range<usize>,
    ) -> crate::Result<()> {
        if let Some(reason) = validate_affix(value, leading_digit) {
            return Err(self.invalid_identifier_error(value, kind, reason, span));
        }
        Ok(())
    }
}

fn to_span(range: Range<usize>) -> SourceSpan {
    SourceSpan::from((range.start, range.end.saturating_sub(range.start)))
}

/// Java reserved words that cannot be used as identifiers
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
    // Literals
    "true", "false", "null",
];

/// Check if a name is a Java reserved word
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Validate that a name is a plain Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if is_identifier_start(c) => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
    }

    if !chars.all(is_identifier_part) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved word");
    }

    None
}

/// Validate a dotted Java package name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_package_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("package cannot be empty");
    }
    name.split('.').find_map(validate_identifier)
}

/// Validate a possibly empty fragment of a generated identifier.
///
/// `leading_digit` allows a first character that is a digit, for fragments
/// that never start an identifier.
pub(crate) fn validate_affix(value: &str, leading_digit: bool) -> Option<&'static str> {
    let first = value.chars().next()?;

    if !leading_digit && !is_identifier_start(first) {
        return Some("must start with a letter, '_' or '$'");
    }
    if !value.chars().all(is_identifier_part) {
        return Some("must contain only letters, digits, '_' and '$'");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("MovieAPI").is_none());
        assert!(validate_identifier("movies").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("$proxy").is_none());
        assert!(validate_identifier("v2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("movie-api").is_some());
        assert!(validate_identifier("movie api").is_some());
    }

    #[test]
    fn test_java_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("movie"));
        assert!(validate_identifier("package").is_some());
    }

    #[test]
    fn test_validate_package() {
        let ctx = ParseContext::new("", "hollow.toml");
        assert!(ctx.validate_package("com.example.movies", 0..0).is_ok());
        assert!(ctx.validate_package("movies", 0..0).is_ok());
        assert!(ctx.validate_package("", 0..0).is_err());
        assert!(ctx.validate_package("com..example", 0..0).is_err());
        assert!(ctx.validate_package("com.example.", 0..0).is_err());
        assert!(ctx.validate_package("com.new.api", 0..0).is_err());
    }

    #[test]
    fn test_validate_affix() {
        assert!(validate_affix("", false).is_none());
        assert!(validate_affix("V2", true).is_none());
        assert!(validate_affix("2", true).is_none());
        assert!(validate_affix("_", false).is_none());
        assert!(validate_affix("-v2", true).is_some());
        assert!(validate_affix("1 ", false).is_some());
        assert!(validate_affix("1", false).is_some());
        assert!(validate_affix("x²", true).is_some());
    }

    #[test]
    fn test_validate_name() {
        let ctx = ParseContext::new("", "hollow.toml");
        assert!(ctx.validate_name("release-year", "field", 0..0).is_ok());
        assert!(ctx.validate_name("", "field", 0..0).is_err());
        assert!(ctx.validate_name("  ", "field", 0..0).is_err());
    }

    #[test]
    fn test_to_span() {
        let span = to_span(10..15);
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 5);
    }
}
