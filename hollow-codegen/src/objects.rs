//! Accessor class generation for object schemas.
//!
//! For a record `Movie` this renders `MovieHollowImpl`, a subclass of
//! `HollowObject` with one typed getter per field. The class holds no data:
//! every getter forwards to the record's delegate together with its ordinal.

use hollowgen_core::{
    delegate_interface_name, hollow_impl_classname, substitute_invalid_chars, type_api_classname,
    uppercase,
};
use hollowgen_schema::{FieldType, RecordSchema, SchemaField};

use crate::{
    GeneratorConfig,
    builder::CodeBuilder,
    generator::{GeneratedArtifact, JavaFileGenerator},
};

const HOLLOW_OBJECT: &str = "com.netflix.hollow.api.objects.HollowObject";
const HOLLOW_OBJECT_SCHEMA: &str = "com.netflix.hollow.core.schema.HollowObjectSchema";

/// Generate the accessor class for `schema`.
///
/// Pure and deterministic: equal inputs always give byte-identical output.
///
/// # Example
///
/// ```
/// use hollowgen_codegen::{GeneratorConfig, generate};
/// use hollowgen_schema::{FieldType, RecordSchema};
///
/// let movie = RecordSchema::new("Movie").field("id", FieldType::Int);
/// let artifact = generate(&movie, &GeneratorConfig::new("com.example", "MovieAPI"));
///
/// assert_eq!(artifact.class_name(), "MovieHollowImpl");
/// assert!(artifact.source_text().contains("public Integer getIdBoxed() {"));
/// ```
pub fn generate(schema: &RecordSchema, config: &GeneratorConfig) -> GeneratedArtifact {
    ObjectJavaGenerator::new(schema, config).artifact()
}

/// Generator for the accessor class of one record schema.
pub struct ObjectJavaGenerator<'a> {
    schema: &'a RecordSchema,
    config: &'a GeneratorConfig,
    class_name: String,
    delegate_name: String,
}

impl<'a> ObjectJavaGenerator<'a> {
    pub fn new(schema: &'a RecordSchema, config: &'a GeneratorConfig) -> Self {
        Self {
            schema,
            config,
            class_name: hollow_impl_classname(&schema.name, &config.class_postfix),
            delegate_name: delegate_interface_name(&schema.name, &config.class_postfix),
        }
    }

    fn append_header(&self, b: &mut CodeBuilder) {
        if !self.config.package_name.is_empty() {
            b.push_line(&format!("package {};", self.config.package_name))
                .push_blank();
        }

        b.push_line(&format!("import {};", HOLLOW_OBJECT))
            .push_line(&format!("import {};", HOLLOW_OBJECT_SCHEMA))
            .push_blank()
            .push_line("@SuppressWarnings(\"all\")");
    }

    fn append_constructor(&self, b: &mut CodeBuilder) {
        b.push_block(
            &format!(
                "public {}({} delegate, int ordinal) {{",
                self.class_name, self.delegate_name
            ),
            |b| {
                b.push_line("super(delegate, ordinal);");
            },
        );
    }

    fn append_accessors(&self, b: &mut CodeBuilder, field: &SchemaField) {
        let name = uppercase(&substitute_invalid_chars(&field.name));

        match &field.kind {
            FieldType::Boolean => self.append_boxed_accessors(b, &name, "boolean", "Boolean"),
            FieldType::Int => self.append_boxed_accessors(b, &name, "int", "Integer"),
            FieldType::Long => self.append_boxed_accessors(b, &name, "long", "Long"),
            FieldType::Float => self.append_boxed_accessors(b, &name, "float", "Float"),
            FieldType::Double => self.append_boxed_accessors(b, &name, "double", "Double"),
            FieldType::Bytes => self.append_bytes_accessor(b, &name),
            FieldType::String => self.append_string_accessors(b, &name),
            FieldType::Reference(target) => self.append_reference_accessor(b, &name, target),
        }
    }

    /// Primitive getter plus a `Boxed` getter returning null for unset values.
    fn append_boxed_accessors(
        &self,
        b: &mut CodeBuilder,
        name: &str,
        primitive: &str,
        boxed: &str,
    ) {
        let prefix = &self.config.getter_prefix;

        b.push_block(
            &format!("public {} {}get{}() {{", primitive, prefix, name),
            |b| {
                b.push_line(&format!("return delegate().get{}(ordinal);", name));
            },
        )
        .push_blank()
        .push_block(
            &format!("public {} {}get{}Boxed() {{", boxed, prefix, name),
            |b| {
                b.push_line(&format!("return delegate().get{}Boxed(ordinal);", name));
            },
        );
    }

    fn append_bytes_accessor(&self, b: &mut CodeBuilder, name: &str) {
        b.push_block(
            &format!("public byte[] {}get{}() {{", self.config.getter_prefix, name),
            |b| {
                b.push_line(&format!("return delegate().get{}(ordinal);", name));
            },
        );
    }

    fn append_string_accessors(&self, b: &mut CodeBuilder, name: &str) {
        let prefix = &self.config.getter_prefix;

        b.push_block(
            &format!("public String {}get{}() {{", prefix, name),
            |b| {
                b.push_line(&format!("return delegate().get{}(ordinal);", name));
            },
        )
        .push_blank()
        .push_block(
            &format!("public boolean {}is{}Equal(String testValue) {{", prefix, name),
            |b| {
                b.push_line(&format!(
                    "return delegate().is{}Equal(ordinal, testValue);",
                    name
                ));
            },
        );
    }

    /// Ordinal `-1` marks an absent reference and short-circuits to null.
    fn append_reference_accessor(&self, b: &mut CodeBuilder, name: &str, target: &str) {
        let prefix = &self.config.getter_prefix;
        let target_class = hollow_impl_classname(target, &self.config.class_postfix);
        let parameterize = self.config.parameterizes(target);

        let (return_type, cast) = if parameterize {
            ("<T> T", "(T) ")
        } else {
            (target_class.as_str(), "")
        };

        b.push_block(
            &format!("public {} {}get{}() {{", return_type, prefix, name),
            |b| {
                b.push_line(&format!(
                    "int refOrdinal = delegate().get{}Ordinal(ordinal);",
                    name
                ))
                .push_line("if(refOrdinal == -1)")
                .push_indent()
                .push_line("return null;")
                .push_dedent()
                .push_line(&format!(
                    "return {}api().get{}(refOrdinal);",
                    cast, target_class
                ));
            },
        );
    }

    fn append_api_accessor(&self, b: &mut CodeBuilder) {
        b.push_block(
            &format!("public {} api() {{", self.config.api_class_name),
            |b| {
                b.push_line("return typeApi().getAPI();");
            },
        );
    }

    fn append_type_api_accessor(&self, b: &mut CodeBuilder) {
        let type_api = type_api_classname(&self.schema.name, &self.config.class_postfix);
        b.push_block(&format!("public {} typeApi() {{", type_api), |b| {
            b.push_line("return delegate().getTypeAPI();");
        });
    }

    /// Narrows the untyped `delegate` field of `HollowObject`.
    fn append_delegate_accessor(&self, b: &mut CodeBuilder) {
        b.push_block(
            &format!("protected {} delegate() {{", self.delegate_name),
            |b| {
                b.push_line(&format!("return ({})delegate;", self.delegate_name));
            },
        );
    }
}

impl JavaFileGenerator for ObjectJavaGenerator<'_> {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn generate(&self) -> String {
        let mut b = CodeBuilder::java();

        self.append_header(&mut b);
        b.push_block(
            &format!("public class {} extends HollowObject {{", self.class_name),
            |b| {
                b.push_blank();
                self.append_constructor(b);
                b.push_blank();

                for field in &self.schema.fields {
                    self.append_accessors(b, field);
                    b.push_blank();
                }

                self.append_api_accessor(b);
                b.push_blank();
                self.append_type_api_accessor(b);
                b.push_blank();
                self.append_delegate_accessor(b);
            },
        );

        b.build()
    }
}
