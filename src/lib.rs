//! Schema Fields SDK - schema field classification and registry catalog
//!
//! Provides the logic layer of a component/utility registry site:
//! - A closed field type model for entity schemas
//! - Classification of schema fields into semantic categories for dynamic
//!   form generation
//! - Type-appropriate default values for form initialization
//! - The registry catalog model (items, lookup, per-type search)
//!
//! Everything here is synchronous, pure computation over immutable inputs;
//! outputs are allocated fresh per call, so concurrent callers are safe.

pub mod classify;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use classify::{
    classify_field, classify_fields, default_value_for_field, default_values_for_schema,
    ClassifyOptions, FieldBuckets, FieldCategory,
};
pub use models::{EntitySchema, FieldType, SchemaError, SchemaField, TextFormat, UnwrappedField};
pub use registry::{
    builtin, Registry, RegistryError, RegistryItem, RegistryItemFile, RegistryItemType,
};
