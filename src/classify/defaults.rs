//! Default values for schema fields
//!
//! Computes a type-appropriate zero value per field for form initialization:
//! empty string for text, zero for numbers, empty list for arrays, the first
//! declared member for enumerations. Booleans deliberately get no default;
//! there is no universally meaningful boolean seed value.

use crate::models::{EntitySchema, FieldType};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Default value for the named field, by declared type after unwrapping
/// optional/nullable wrappers.
///
/// Returns `None` when no default applies: booleans, memberless
/// enumerations, nested objects, and names absent from the schema (the
/// latter logs a non-fatal debug line).
pub fn default_value_for_field(schema: &EntitySchema, field_name: &str) -> Option<Value> {
    let Some(field_type) = schema.field(field_name) else {
        debug!("field {} not found in schema, no default value", field_name);
        return None;
    };

    default_for_base_type(field_type.unwrap_wrappers().base)
}

/// Default values for every field in the schema, in declaration order.
/// A `None` entry means the field has no applicable default.
pub fn default_values_for_schema(schema: &EntitySchema) -> HashMap<String, Option<Value>> {
    schema
        .names()
        .map(|name| (name.to_string(), default_value_for_field(schema, name)))
        .collect()
}

fn default_for_base_type(base: &FieldType) -> Option<Value> {
    match base {
        FieldType::Array { .. } => Some(Value::Array(Vec::new())),
        FieldType::Text { .. } => Some(Value::String(String::new())),
        FieldType::Number => Some(Value::from(0)),
        FieldType::Enum { members } => members.first().map(|m| Value::String(m.clone())),
        _ => None,
    }
}
