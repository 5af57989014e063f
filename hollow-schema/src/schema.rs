//! Record schema types consumed by the generators.

use std::fmt;

use indexmap::IndexMap;

/// Type of a single record field.
///
/// A reference carries the name of the schema it points at, so a referenced
/// type can only exist on reference fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    /// Reference to another record, by schema name.
    Reference(String),
}

impl FieldType {
    /// Names accepted for `type = "..."` in hollow.toml.
    pub const KINDS: &'static [&'static str] = &[
        "boolean",
        "int",
        "long",
        "float",
        "double",
        "bytes",
        "string",
        "reference",
    ];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Bytes => "bytes",
            FieldType::String => "string",
            FieldType::Reference(_) => "reference",
        }
    }

    /// Whether the kind maps to a Java primitive, which also gets a boxed
    /// accessor.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            FieldType::Boolean
                | FieldType::Int
                | FieldType::Long
                | FieldType::Float
                | FieldType::Double
        )
    }

    /// Name of the referenced schema, for reference fields.
    pub fn referenced_type(&self) -> Option<&str> {
        match self {
            FieldType::Reference(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Reference(target) => write!(f, "reference -> {}", target),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A named, typed field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldType,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, kind: FieldType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Structural description of one record type.
///
/// # Example
///
/// ```
/// use hollowgen_schema::{FieldType, RecordSchema};
///
/// let movie = RecordSchema::new("Movie")
///     .field("id", FieldType::Int)
///     .field("title", FieldType::String)
///     .reference("director", "Person");
///
/// assert_eq!(movie.fields.len(), 3);
/// assert_eq!(movie.fields[2].kind.referenced_type(), Some("Person"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<SchemaField>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, kind: FieldType) -> Self {
        self.fields.push(SchemaField::new(name, kind));
        self
    }

    /// Append a reference field pointing at `target`.
    pub fn reference(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(name, FieldType::Reference(target.into()))
    }

    /// Names of the schemas this record references, in field order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| f.kind.referenced_type())
    }
}

/// Ordered collection of schemas, keyed by name.
///
/// Iteration follows insertion order, which for a parsed file is the order
/// the schemas were declared in.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    schemas: IndexMap<String, RecordSchema>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema, returning the previous one with the same name.
    pub fn insert(&mut self, schema: RecordSchema) -> Option<RecordSchema> {
        self.schemas.insert(schema.name.clone(), schema)
    }

    pub fn get(&self, name: &str) -> Option<&RecordSchema> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordSchema> {
        self.schemas.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl FromIterator<RecordSchema> for SchemaSet {
    fn from_iter<I: IntoIterator<Item = RecordSchema>>(iter: I) -> Self {
        let mut set = SchemaSet::new();
        for schema in iter {
            set.insert(schema);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SchemaSet {
    type Item = &'a RecordSchema;
    type IntoIter = indexmap::map::Values<'a, String, RecordSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.schemas.values()
    }
}
