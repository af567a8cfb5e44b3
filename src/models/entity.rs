//! Entity schema model
//!
//! An entity schema is an ordered collection of uniquely named fields, each
//! carrying a declared [`FieldType`]. Schemas are immutable once handed to the
//! classifier; all classification outputs are allocated fresh per call.

use super::field::FieldType;
use serde::{Deserialize, Serialize};

/// Error constructing an entity schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate field name: {0}")]
    DuplicateField(String),
}

/// A named field within an entity schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Ordered collection of uniquely named fields describing one entity.
///
/// Declaration order is significant: classification buckets and default value
/// maps preserve it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntitySchema {
    fields: Vec<SchemaField>,
}

impl EntitySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from the given fields, rejecting duplicate names.
    pub fn with_fields(fields: Vec<SchemaField>) -> Result<Self, SchemaError> {
        let mut schema = Self::new();
        for field in fields {
            schema.push(field.name, field.field_type)?;
        }
        Ok(schema)
    }

    /// Appends a field, preserving declaration order.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        field_type: FieldType,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        if self.fields.iter().any(|f| f.name == name) {
            return Err(SchemaError::DuplicateField(name));
        }
        self.fields.push(SchemaField { name, field_type });
        Ok(())
    }

    /// Looks up a field's declared type by name.
    pub fn field(&self, name: &str) -> Option<&FieldType> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.field_type)
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The base schema for a persistable entity: a nullable/optional uuid `id`
    /// plus `disabled_at`, `created_at` and `updated_at` timestamps.
    pub fn persistable() -> Self {
        let mut schema = Self::new();
        // Names are unique by construction, pushes cannot fail.
        let _ = schema.push("id", FieldType::uuid().nullable().optional());
        let _ = schema.push("disabled_at", FieldType::datetime().nullable().optional());
        let _ = schema.push("created_at", FieldType::datetime().nullable().optional());
        let _ = schema.push("updated_at", FieldType::datetime().nullable().optional());
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_declaration_order() {
        let mut schema = EntitySchema::new();
        schema.push("b", FieldType::text()).unwrap();
        schema.push("a", FieldType::Number).unwrap();
        schema.push("c", FieldType::Boolean).unwrap();

        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let mut schema = EntitySchema::new();
        schema.push("name", FieldType::text()).unwrap();
        let err = schema.push("name", FieldType::Number).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField(name) if name == "name"));
    }

    #[test]
    fn test_field_lookup() {
        let mut schema = EntitySchema::new();
        schema.push("age", FieldType::Number).unwrap();
        assert_eq!(schema.field("age"), Some(&FieldType::Number));
        assert_eq!(schema.field("missing"), None);
    }

    #[test]
    fn test_persistable_schema_shape() {
        let schema = EntitySchema::persistable();
        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names, vec!["id", "disabled_at", "created_at", "updated_at"]);

        let id = schema.field("id").unwrap().unwrap_wrappers();
        assert!(id.is_optional);
        assert!(id.is_nullable);
        assert_eq!(id.base, &FieldType::uuid());
    }
}
