//! Record schemas and hollow.toml parsing for the hollowgen accessor generator.
//!
//! A `hollow.toml` holds the generator options and an ordered list of record
//! schemas:
//!
//! ```toml
//! [codegen]
//! package = "com.example.movies"
//! api_class = "MovieAPI"
//!
//! [[schema]]
//! name = "Movie"
//! fields = [
//!     { name = "id", type = "int" },
//!     { name = "director", type = "reference", references = "Person" },
//! ]
//! ```
//!
//! Everything the generators assume about their input (distinct class and
//! accessor names, known field types, resolvable references, identifier-safe
//! options) is checked here, once.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod schema;
mod validate;

pub use error::{Error, Result};
pub use manifest::{CodegenConfig, HollowToml, Manifest};
pub use schema::{FieldType, RecordSchema, SchemaField, SchemaSet};
