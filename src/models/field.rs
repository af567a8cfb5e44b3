//! Field type model
//!
//! A closed, tagged description of a field's declared type. Callers build one
//! `FieldType` per field once; the classifier pattern-matches over it instead
//! of inspecting a validation library's runtime type objects.

use serde::{Deserialize, Serialize};

/// Format refinement narrowing the semantic meaning of a text field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Datetime,
    Uuid,
}

/// Declared type of a single schema field.
///
/// `Optional` and `Nullable` wrap a single underlying base kind. Any stack of
/// wrappers can be stripped with [`FieldType::unwrap_wrappers`]; the chain is
/// finite by construction, so unwrapping always terminates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text, optionally carrying format refinements.
    Text {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        formats: Vec<TextFormat>,
    },
    Number,
    Boolean,
    /// Enumeration with its ordered member list.
    Enum { members: Vec<String> },
    /// Sequence of a single element kind (itself possibly wrapped).
    Array { element: Box<FieldType> },
    /// Nested structure; not classifiable into any category.
    Object,
    Optional { inner: Box<FieldType> },
    Nullable { inner: Box<FieldType> },
}

/// Result of stripping optional/nullable wrappers from a field type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnwrappedField<'a> {
    /// The underlying base kind, guaranteed not to be a wrapper.
    pub base: &'a FieldType,
    pub is_optional: bool,
    pub is_nullable: bool,
}

impl FieldType {
    /// Plain text with no format refinement.
    pub fn text() -> Self {
        FieldType::Text {
            formats: Vec::new(),
        }
    }

    /// Text refined as a datetime (e.g. an ISO-8601 timestamp).
    pub fn datetime() -> Self {
        FieldType::Text {
            formats: vec![TextFormat::Datetime],
        }
    }

    /// Text refined as a unique identifier.
    pub fn uuid() -> Self {
        FieldType::Text {
            formats: vec![TextFormat::Uuid],
        }
    }

    /// Enumeration over the given members, in declaration order.
    pub fn enumeration<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldType::Enum {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Array of the given element kind.
    pub fn array(element: FieldType) -> Self {
        FieldType::Array {
            element: Box::new(element),
        }
    }

    /// Wraps this type in an optionality marker.
    pub fn optional(self) -> Self {
        FieldType::Optional { inner: Box::new(self) }
    }

    /// Wraps this type in a nullability marker.
    pub fn nullable(self) -> Self {
        FieldType::Nullable { inner: Box::new(self) }
    }

    /// Strips any stack of optional/nullable wrappers down to the base kind,
    /// reporting which wrapper kinds were seen along the way.
    pub fn unwrap_wrappers(&self) -> UnwrappedField<'_> {
        let mut base = self;
        let mut is_optional = false;
        let mut is_nullable = false;

        loop {
            match base {
                FieldType::Optional { inner } => {
                    is_optional = true;
                    base = inner.as_ref();
                }
                FieldType::Nullable { inner } => {
                    is_nullable = true;
                    base = inner.as_ref();
                }
                _ => break,
            }
        }

        UnwrappedField {
            base,
            is_optional,
            is_nullable,
        }
    }

    /// Whether this text type carries the given format refinement.
    /// Always false for non-text types.
    pub fn has_format(&self, format: TextFormat) -> bool {
        match self {
            FieldType::Text { formats } => formats.contains(&format),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_plain_type_is_identity() {
        let field = FieldType::Number;
        let unwrapped = field.unwrap_wrappers();
        assert_eq!(unwrapped.base, &FieldType::Number);
        assert!(!unwrapped.is_optional);
        assert!(!unwrapped.is_nullable);
    }

    #[test]
    fn test_unwrap_mixed_wrapper_stack() {
        let field = FieldType::text().nullable().optional().nullable();
        let unwrapped = field.unwrap_wrappers();
        assert_eq!(unwrapped.base, &FieldType::text());
        assert!(unwrapped.is_optional);
        assert!(unwrapped.is_nullable);
    }

    #[test]
    fn test_unwrap_is_idempotent() {
        let field = FieldType::uuid().optional();
        let once = field.unwrap_wrappers();
        let twice = once.base.unwrap_wrappers();
        assert_eq!(once.base, twice.base);
        assert!(!twice.is_optional);
        assert!(!twice.is_nullable);
    }

    #[test]
    fn test_unwrap_does_not_touch_array_element() {
        let field = FieldType::array(FieldType::text().optional());
        let unwrapped = field.unwrap_wrappers();
        match unwrapped.base {
            FieldType::Array { element } => {
                assert!(matches!(**element, FieldType::Optional { .. }));
            }
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn test_has_format() {
        assert!(FieldType::datetime().has_format(TextFormat::Datetime));
        assert!(!FieldType::datetime().has_format(TextFormat::Uuid));
        assert!(!FieldType::Number.has_format(TextFormat::Uuid));
    }
}
