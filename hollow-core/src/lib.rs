//! Core utilities and types for the hollowgen accessor generator.
//!
//! This crate holds the naming conventions shared by every generated
//! artifact, plus the file-writing primitives used to persist them.

mod file;
mod naming;

// File operations
pub use file::{GeneratedFile, WriteResult};
// Naming conventions
pub use naming::{
    delegate_interface_name, hollow_impl_classname, is_identifier_part, is_identifier_start,
    substitute_invalid_chars, type_api_classname, uppercase,
};
