//! Schema field classification
//!
//! Partitions an entity schema's fields into semantic categories (uuid, text,
//! number, datetime, boolean, enumeration and their array variants) for
//! dynamic form generation. Classification is forgiving: a field whose kind
//! matches no category lands in no bucket, with a debug log line instead of
//! an error. Nothing in this module returns `Err` or panics.

pub mod defaults;

use crate::models::{EntitySchema, FieldType, TextFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use defaults::{default_value_for_field, default_values_for_schema};

/// Category a classified field belongs to.
///
/// Declaration order doubles as the scan order of
/// [`FieldBuckets::field_category`]. Bucket membership is exclusive by
/// construction, so the scan order only matters if that invariant is ever
/// broken by a future category addition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldCategory {
    Uuid,
    Text,
    Number,
    Datetime,
    Boolean,
    Enumeration,
    ArrayText,
    ArrayEnumeration,
    ArrayDatetime,
    ArrayUuid,
    ArrayNumber,
    Excluded,
}

const CATEGORY_SCAN_ORDER: [FieldCategory; 12] = [
    FieldCategory::Uuid,
    FieldCategory::Text,
    FieldCategory::Number,
    FieldCategory::Datetime,
    FieldCategory::Boolean,
    FieldCategory::Enumeration,
    FieldCategory::ArrayText,
    FieldCategory::ArrayEnumeration,
    FieldCategory::ArrayDatetime,
    FieldCategory::ArrayUuid,
    FieldCategory::ArrayNumber,
    FieldCategory::Excluded,
];

/// Options for [`classify_fields`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyOptions<'a> {
    /// Field names skipped from type routing entirely and forced into the
    /// excluded bucket.
    pub excluded_fields: &'a [&'a str],
    /// Whether the result carries the excluded bucket at all.
    pub with_excluded: bool,
}

/// Schema field names grouped by category.
///
/// Within each bucket, names preserve the schema's declaration order. A field
/// appears in at most one bucket; the excluded bucket is present only when
/// requested and is mutually exclusive with all others.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldBuckets {
    pub uuid: Vec<String>,
    pub text: Vec<String>,
    pub number: Vec<String>,
    pub datetime: Vec<String>,
    pub boolean: Vec<String>,
    pub enumeration: Vec<String>,
    pub array_text: Vec<String>,
    pub array_enumeration: Vec<String>,
    pub array_datetime: Vec<String>,
    pub array_uuid: Vec<String>,
    pub array_number: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<Vec<String>>,
}

impl FieldBuckets {
    /// The names in one bucket, or `None` for an absent excluded bucket.
    pub fn bucket(&self, category: FieldCategory) -> Option<&[String]> {
        match category {
            FieldCategory::Uuid => Some(&self.uuid),
            FieldCategory::Text => Some(&self.text),
            FieldCategory::Number => Some(&self.number),
            FieldCategory::Datetime => Some(&self.datetime),
            FieldCategory::Boolean => Some(&self.boolean),
            FieldCategory::Enumeration => Some(&self.enumeration),
            FieldCategory::ArrayText => Some(&self.array_text),
            FieldCategory::ArrayEnumeration => Some(&self.array_enumeration),
            FieldCategory::ArrayDatetime => Some(&self.array_datetime),
            FieldCategory::ArrayUuid => Some(&self.array_uuid),
            FieldCategory::ArrayNumber => Some(&self.array_number),
            FieldCategory::Excluded => self.excluded.as_deref(),
        }
    }

    fn bucket_mut(&mut self, category: FieldCategory) -> &mut Vec<String> {
        match category {
            FieldCategory::Uuid => &mut self.uuid,
            FieldCategory::Text => &mut self.text,
            FieldCategory::Number => &mut self.number,
            FieldCategory::Datetime => &mut self.datetime,
            FieldCategory::Boolean => &mut self.boolean,
            FieldCategory::Enumeration => &mut self.enumeration,
            FieldCategory::ArrayText => &mut self.array_text,
            FieldCategory::ArrayEnumeration => &mut self.array_enumeration,
            FieldCategory::ArrayDatetime => &mut self.array_datetime,
            FieldCategory::ArrayUuid => &mut self.array_uuid,
            FieldCategory::ArrayNumber => &mut self.array_number,
            FieldCategory::Excluded => self.excluded.get_or_insert_with(Vec::new),
        }
    }

    /// Whether the named field sits in the given category.
    pub fn contains(&self, category: FieldCategory, field_name: &str) -> bool {
        self.bucket(category)
            .is_some_and(|names| names.iter().any(|n| n == field_name))
    }

    /// The category of the named field, scanning buckets in declaration
    /// order. Returns `None` (with a debug log line) if the name is in no
    /// bucket.
    pub fn field_category(&self, field_name: &str) -> Option<FieldCategory> {
        for category in CATEGORY_SCAN_ORDER {
            if self.contains(category, field_name) {
                return Some(category);
            }
        }
        debug!("field {} not found in any category bucket", field_name);
        None
    }
}

/// Routes a single declared type to its category, after stripping
/// optional/nullable wrappers. Returns `None` for kinds that match no
/// category (nested objects, arrays of unsupported elements).
pub fn classify_field(field_type: &FieldType) -> Option<FieldCategory> {
    match field_type.unwrap_wrappers().base {
        FieldType::Array { element } => match element.unwrap_wrappers().base {
            // Datetime takes priority over uuid when a text element carries
            // both refinements.
            text @ FieldType::Text { .. } => {
                if text.has_format(TextFormat::Datetime) {
                    Some(FieldCategory::ArrayDatetime)
                } else if text.has_format(TextFormat::Uuid) {
                    Some(FieldCategory::ArrayUuid)
                } else {
                    Some(FieldCategory::ArrayText)
                }
            }
            FieldType::Enum { .. } => Some(FieldCategory::ArrayEnumeration),
            FieldType::Number => Some(FieldCategory::ArrayNumber),
            _ => None,
        },
        FieldType::Number => Some(FieldCategory::Number),
        FieldType::Boolean => Some(FieldCategory::Boolean),
        FieldType::Enum { .. } => Some(FieldCategory::Enumeration),
        text @ FieldType::Text { .. } => {
            if text.has_format(TextFormat::Datetime) {
                Some(FieldCategory::Datetime)
            } else if text.has_format(TextFormat::Uuid) {
                Some(FieldCategory::Uuid)
            } else {
                Some(FieldCategory::Text)
            }
        }
        _ => None,
    }
}

/// Partitions a schema's fields into category buckets.
///
/// Fields listed in `options.excluded_fields` are skipped from type routing;
/// when `options.with_excluded` is set, the excluded bucket carries that list
/// verbatim. All other fields are routed by [`classify_field`] in declaration
/// order, so bucket contents form a stable partition of the schema.
pub fn classify_fields(schema: &EntitySchema, options: ClassifyOptions<'_>) -> FieldBuckets {
    let mut buckets = FieldBuckets::default();

    for field in schema.fields() {
        if options.excluded_fields.contains(&field.name.as_str()) {
            continue;
        }
        match classify_field(&field.field_type) {
            Some(category) => buckets.bucket_mut(category).push(field.name.clone()),
            None => debug!(
                "field {} has no matching category, leaving it unclassified",
                field.name
            ),
        }
    }

    if options.with_excluded {
        buckets.excluded = Some(
            options
                .excluded_fields
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        );
    }

    buckets
}
