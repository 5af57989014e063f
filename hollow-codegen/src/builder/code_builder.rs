//! Code builder utility for generating properly indented code.

/// One indentation level of generated Java.
const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use hollowgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder.push_block("public int getId() {", |b| {
///     b.push_line("return delegate().getId(ordinal);");
/// });
///
/// assert_eq!(
///     builder.build(),
///     "public int getId() {\n    return delegate().getId(ordinal);\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a brace-delimited block: the header line, an indented body and a
    /// closing `}` at the header's level.
    pub fn push_block<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line("}")
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::java();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::java();
        builder
            .push_line("if(refOrdinal == -1)")
            .push_indent()
            .push_line("return null;")
            .push_dedent()
            .push_line("return value;");

        assert_eq!(
            builder.build(),
            "if(refOrdinal == -1)\n    return null;\nreturn value;\n"
        );
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::java();
        builder.push_block("class Foo {", |b| {
            b.push_block("void bar() {", |b| {
                b.push_line("baz();");
            });
        });

        assert_eq!(
            builder.build(),
            "class Foo {\n    void bar() {\n        baz();\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::java();
        builder.push_block("class Foo {", |b| {
            b.push_blank();
            b.push_line("int x;");
        });

        assert_eq!(builder.build(), "class Foo {\n\n    int x;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::java();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.current_indent(), 0);
    }
}
