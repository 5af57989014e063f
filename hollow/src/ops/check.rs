//! Check operation - manifest validation.

use std::path::Path;

use hollowgen_schema::Manifest;

use crate::reports::{CheckReport, SchemaCheck};

/// Execute the check operation.
///
/// Loading the manifest already validated it; this collects what was found.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let schemas = manifest
        .schemas
        .iter()
        .map(|schema| SchemaCheck {
            name: schema.name.clone(),
            field_count: schema.fields.len(),
            references: schema.references().map(str::to_string).collect(),
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        package: manifest.codegen.package.clone(),
        api_class: manifest.codegen.api_class.clone(),
        schemas,
    }
}
