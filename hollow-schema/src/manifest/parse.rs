//! Lowering of the raw hollow.toml document into validated schemas.

use std::{
    collections::{BTreeSet, HashMap},
    ops::Range,
};

use hollowgen_core::{hollow_impl_classname, substitute_invalid_chars, uppercase};
use serde::Deserialize;
use toml::Spanned;

use super::{CodegenConfig, Manifest};
use crate::{Error, FieldType, RecordSchema, Result, SchemaField, SchemaSet, validate::ParseContext};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    codegen: RawCodegen,
    #[serde(default, rename = "schema")]
    schemas: Vec<RawSchema>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCodegen {
    package: Spanned<String>,
    api_class: Spanned<String>,
    class_postfix: Option<Spanned<String>>,
    getter_prefix: Option<Spanned<String>>,
    #[serde(default)]
    parameterize_class_names: bool,
    #[serde(default)]
    parameterized_types: Vec<Spanned<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchema {
    name: Spanned<String>,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: Spanned<String>,
    #[serde(rename = "type")]
    ty: Spanned<String>,
    references: Option<Spanned<String>>,
}

/// A reference that can only be checked once every schema is known.
struct PendingReference<'r> {
    target: &'r Spanned<String>,
    context: String,
}

pub(super) fn parse(content: &str, filename: &str) -> Result<Manifest> {
    let raw: RawManifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    let ctx = ParseContext::new(content, filename);

    let mut pending = Vec::new();
    let codegen = lower_codegen(&ctx, &raw.codegen, &mut pending)?;

    let mut schemas = SchemaSet::new();
    // Keyed by generated class name: `movie` and `Movie` share a file.
    let mut schema_spans: HashMap<String, Range<usize>> = HashMap::new();

    for raw_schema in &raw.schemas {
        let name = raw_schema.name.get_ref();
        ctx.validate_name(name, "schema", raw_schema.name.span())?;

        let class_name = hollow_impl_classname(name, "");
        if let Some(first) = schema_spans.get(&class_name) {
            return Err(ctx.duplicate_schema_error(
                name,
                &class_name,
                first.clone(),
                raw_schema.name.span(),
            ));
        }
        schema_spans.insert(class_name, raw_schema.name.span());

        schemas.insert(lower_schema(&ctx, raw_schema, &mut pending)?);
    }

    for reference in pending {
        let target = reference.target.get_ref();
        if !schemas.contains(target) {
            return Err(ctx.unknown_reference_error(
                target,
                reference.context,
                reference.target.span(),
            ));
        }
    }

    Ok(Manifest { codegen, schemas })
}

fn lower_codegen<'r>(
    ctx: &ParseContext<'_>,
    raw: &'r RawCodegen,
    pending: &mut Vec<PendingReference<'r>>,
) -> Result<CodegenConfig> {
    ctx.validate_package(raw.package.get_ref(), raw.package.span())?;
    ctx.validate_class_name(raw.api_class.get_ref(), "API class", raw.api_class.span())?;
    let class_postfix = lower_affix(ctx, &raw.class_postfix, "class postfix", true)?;
    let getter_prefix = lower_affix(ctx, &raw.getter_prefix, "getter prefix", false)?;

    let mut parameterized_types = BTreeSet::new();
    for ty in &raw.parameterized_types {
        pending.push(PendingReference {
            target: ty,
            context: "'parameterized_types'".to_string(),
        });
        parameterized_types.insert(ty.get_ref().clone());
    }

    Ok(CodegenConfig {
        package: raw.package.get_ref().clone(),
        api_class: raw.api_class.get_ref().clone(),
        class_postfix,
        getter_prefix,
        parameterize_class_names: raw.parameterize_class_names,
        parameterized_types,
    })
}

fn lower_affix(
    ctx: &ParseContext<'_>,
    raw: &Option<Spanned<String>>,
    kind: &str,
    leading_digit: bool,
) -> Result<String> {
    let Some(value) = raw else {
        return Ok(String::new());
    };
    ctx.validate_affix(value.get_ref(), kind, leading_digit, value.span())?;
    Ok(value.get_ref().clone())
}

fn lower_schema<'r>(
    ctx: &ParseContext<'_>,
    raw: &'r RawSchema,
    pending: &mut Vec<PendingReference<'r>>,
) -> Result<RecordSchema> {
    let schema_name = raw.name.get_ref();
    let mut schema = RecordSchema::new(schema_name.clone());
    // Keyed by accessor name: `id` and `Id` both generate `getId()`.
    let mut accessor_spans: HashMap<String, Range<usize>> = HashMap::new();

    for field in &raw.fields {
        let name = field.name.get_ref();
        ctx.validate_name(name, "field", field.name.span())?;
        let kind = lower_field_type(ctx, schema_name, field)?;

        for accessor in accessor_names(name, &kind) {
            if let Some(first) = accessor_spans.get(&accessor) {
                return Err(ctx.duplicate_field_error(
                    schema_name,
                    name,
                    &accessor,
                    first.clone(),
                    field.name.span(),
                ));
            }
            accessor_spans.insert(accessor, field.name.span());
        }

        if let Some(target) = &field.references {
            pending.push(PendingReference {
                target,
                context: format!("field '{}.{}'", schema_name, name),
            });
        }

        schema.fields.push(SchemaField::new(name.clone(), kind));
    }

    Ok(schema)
}

/// No-argument accessors generated for a field, without the getter prefix.
fn accessor_names(field: &str, kind: &FieldType) -> Vec<String> {
    let getter = format!("get{}", uppercase(&substitute_invalid_chars(field)));
    if kind.is_primitive() {
        let boxed = format!("{}Boxed", getter);
        vec![getter, boxed]
    } else {
        vec![getter]
    }
}

fn lower_field_type(
    ctx: &ParseContext<'_>,
    schema: &str,
    field: &RawField,
) -> Result<FieldType> {
    let name = field.name.get_ref();
    let kind = match field.ty.get_ref().to_ascii_lowercase().as_str() {
        "boolean" => FieldType::Boolean,
        "int" => FieldType::Int,
        "long" => FieldType::Long,
        "float" => FieldType::Float,
        "double" => FieldType::Double,
        "bytes" => FieldType::Bytes,
        "string" => FieldType::String,
        "reference" => match &field.references {
            Some(target) if !target.get_ref().trim().is_empty() => {
                FieldType::Reference(target.get_ref().clone())
            }
            _ => return Err(ctx.missing_reference_error(schema, name, field.ty.span())),
        },
        _ => {
            return Err(ctx.unknown_field_type_error(name, field.ty.get_ref(), field.ty.span()));
        }
    };

    if let (Some(target), None) = (&field.references, kind.referenced_type()) {
        return Err(ctx.validation_error(
            format!("'references' is only allowed on reference fields, '{}' is {}", name, kind),
            target.span(),
        ));
    }

    Ok(kind)
}
