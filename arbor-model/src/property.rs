//! Typed property values.

use serde::{Deserialize, Serialize};

use crate::ArtifactId;

/// A value stored in a node's property bag.
///
/// The bag is a tagged-value map rather than a static field set because
/// artifact properties are genuinely open-ended: domain nodes, AST wrapper
/// nodes, and template-authored nodes all share the same kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Id(ArtifactId),
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<ArtifactId> for PropertyValue {
    fn from(value: ArtifactId) -> Self {
        Self::Id(value)
    }
}

/// Typed extraction from a [`PropertyValue`].
///
/// Implemented for the value types the kernel stores, so call sites read
/// `node.get::<String>("name")` instead of matching on the tag.
pub trait FromProperty: Sized {
    fn from_property(value: &PropertyValue) -> Option<Self>;
}

impl FromProperty for String {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromProperty for i64 {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromProperty for u32 {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(n) => u32::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl FromProperty for bool {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromProperty for ArtifactId {
    fn from_property(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Id(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(PropertyValue::from("x"), PropertyValue::Str("x".into()));
        assert_eq!(PropertyValue::from(3i64), PropertyValue::Int(3));
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
    }

    #[test]
    fn test_typed_extraction() {
        let value = PropertyValue::from("Customer");
        assert_eq!(
            String::from_property(&value).as_deref(),
            Some("Customer")
        );
        assert_eq!(i64::from_property(&value), None);

        let value = PropertyValue::from(50u32);
        assert_eq!(u32::from_property(&value), Some(50));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&PropertyValue::Int(7)).unwrap();
        assert_eq!(json, r#"{"type":"int","value":7}"#);

        let back: PropertyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PropertyValue::Int(7));
    }
}
