//! Java accessor class generation for the hollowgen accessor generator.
//!
//! The heart of this crate is [`generate`], a pure function turning one
//! [`RecordSchema`](hollowgen_schema::RecordSchema) and a [`GeneratorConfig`]
//! into the source of one accessor class. [`ApiGenerator`] applies it to a
//! whole schema set and persists the results.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text accumulation
//! - [`objects`] - The accessor class generator
//! - [`api`] - Generation over a schema set, preview and writing

pub mod api;
pub mod builder;
mod config;
mod generator;
pub mod objects;

pub use api::{ApiGenerator, GenerateResult, PreviewFile};
pub use config::GeneratorConfig;
pub use generator::{GeneratedArtifact, JavaFileGenerator, ObjectJavaFile};
pub use objects::{ObjectJavaGenerator, generate};
