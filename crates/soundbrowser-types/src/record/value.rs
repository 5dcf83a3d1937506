use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag recorded next to every field in an encoded key listing.
///
/// The tag is always derived from a [`TypedValue`], never declared on its own,
/// so a value cannot lose its type between construction and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Boolean,
    Integer,
    String,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Integer => "integer",
            TypeTag::String => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field value in a [`TypedRecord`](super::TypedRecord).
///
/// Enum-like fields (e.g. actions) are carried as `String` tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypedValue {
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl TypedValue {
    pub fn tag(&self) -> TypeTag {
        match self {
            TypedValue::Boolean(_) => TypeTag::Boolean,
            TypedValue::Integer(_) => TypeTag::Integer,
            TypedValue::String(_) => TypeTag::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// String form written to the carrier.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Boolean(value)
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::Integer(value)
    }
}

impl From<i32> for TypedValue {
    fn from(value: i32) -> Self {
        TypedValue::Integer(i64::from(value))
    }
}

impl From<u8> for TypedValue {
    fn from(value: u8) -> Self {
        TypedValue::Integer(i64::from(value))
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::String(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_follows_runtime_value() {
        assert_eq!(TypedValue::from(true).tag(), TypeTag::Boolean);
        assert_eq!(TypedValue::from(42i64).tag(), TypeTag::Integer);
        assert_eq!(TypedValue::from("BLOCK_ANVIL").tag(), TypeTag::String);
    }

    #[test]
    fn test_display_is_stored_form() {
        assert_eq!(TypedValue::from(false).to_string(), "false");
        assert_eq!(TypedValue::from(-3i64).to_string(), "-3");
        assert_eq!(TypedValue::from("x y").to_string(), "x y");
    }

    #[test]
    fn test_tag_serializes_lowercase() {
        let json = serde_json::to_string(&TypeTag::Integer).unwrap();
        assert_eq!(json, "\"integer\"");
    }
}
