//! Models module for the SDK
//!
//! Defines the core data structures: the closed field type model and the
//! entity schema built from it.

pub mod entity;
pub mod field;

pub use entity::{EntitySchema, SchemaError, SchemaField};
pub use field::{FieldType, TextFormat, UnwrappedField};
