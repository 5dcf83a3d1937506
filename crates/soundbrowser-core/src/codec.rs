//! State codec: typed records on flat string carriers.
//!
//! Layout on the carrier for namespace `ns`:
//!
//! ```text
//! ns:keys           [["filterString","string"],["menu","boolean"],["offset","integer"]]
//! ns:data.filterString   x
//! ns:data.menu           true
//! ns:data.offset         2
//! ```
//!
//! The key listing is the only source of truth for which fields exist and how
//! to re-type them. A carrier without a listing holds no record.

use serde_json::Value;
use soundbrowser_types::{Carrier, TypeTag, TypedRecord, TypedValue};
use tracing::{debug, warn};

pub const DEFAULT_NAMESPACE: &str = "soundbrowser";

const LISTING_SUFFIX: &str = "keys";
const FIELD_INFIX: &str = "data.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCodec {
    namespace: String,
}

impl Default for StateCodec {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl StateCodec {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Carrier key holding the key listing.
    pub fn listing_key(&self) -> String {
        format!("{}:{}", self.namespace, LISTING_SUFFIX)
    }

    /// Carrier key holding the value of `field`.
    pub fn field_key(&self, field: &str) -> String {
        format!("{}:{}{}", self.namespace, FIELD_INFIX, field)
    }

    /// Write `record` onto `carrier`. Never fails.
    pub fn encode<C: Carrier + ?Sized>(&self, record: &TypedRecord, carrier: &mut C) {
        carrier.set(&self.listing_key(), encode_listing(record));
        for (name, value) in record.iter() {
            carrier.set(&self.field_key(name), value.to_string());
        }
    }

    /// Read a record back. `None` means the carrier is not one of ours.
    pub fn decode<C: Carrier + ?Sized>(&self, carrier: &C) -> Option<TypedRecord> {
        let raw_listing = carrier.get(&self.listing_key())?;

        let listing: Vec<(String, String)> = match serde_json::from_str(&raw_listing) {
            Ok(listing) => listing,
            Err(err) => {
                warn!(error = %err, "ignoring carrier with unreadable key listing");
                return None;
            }
        };

        let mut record = TypedRecord::new();
        for (name, tag) in listing {
            let Some(tag) = parse_tag(&tag) else {
                warn!(field = %name, tag = %tag, "dropping field with unknown type tag");
                continue;
            };
            let Some(raw) = carrier.get(&self.field_key(&name)) else {
                warn!(field = %name, "dropping listed field with no stored value");
                continue;
            };
            if let Some(value) = retype(&name, tag, raw) {
                record.insert(name, value);
            }
        }

        Some(record)
    }

    /// Remove every field a previous [`encode`](Self::encode) wrote.
    pub fn clear<C: Carrier + ?Sized>(&self, carrier: &mut C) {
        if let Some(record) = self.decode(carrier) {
            for (name, _) in record.iter() {
                carrier.remove(&self.field_key(name));
            }
        }
        carrier.remove(&self.listing_key());
    }
}

/// Compact JSON array of `[name, tag]` pairs in ascending field order.
fn encode_listing(record: &TypedRecord) -> String {
    Value::Array(
        record
            .key_listing()
            .into_iter()
            .map(|(name, tag)| {
                Value::Array(vec![
                    Value::String(name),
                    Value::String(tag.as_str().to_string()),
                ])
            })
            .collect(),
    )
    .to_string()
}

fn parse_tag(tag: &str) -> Option<TypeTag> {
    match tag {
        "boolean" => Some(TypeTag::Boolean),
        "integer" => Some(TypeTag::Integer),
        "string" => Some(TypeTag::String),
        _ => None,
    }
}

fn retype(name: &str, tag: TypeTag, raw: String) -> Option<TypedValue> {
    match tag {
        TypeTag::Boolean => Some(TypedValue::Boolean(coerce_bool(name, &raw))),
        TypeTag::Integer => match parse_integer_lenient(&raw) {
            Some(n) => Some(TypedValue::Integer(n)),
            None => {
                warn!(field = %name, raw = %raw, "dropping malformed integer field");
                None
            }
        },
        TypeTag::String => Some(TypedValue::String(raw)),
    }
}

fn coerce_bool(name: &str, raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        true
    } else if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        false
    } else {
        debug!(field = %name, raw = %raw, "coercing non-canonical boolean as truthy");
        true
    }
}

/// Best-effort base-10 parse.
///
/// Uses the longest leading `[+-]?[0-9]+` run of the trimmed input, so
/// `"12abc"` is 12 and `"3.7"` is 3. Saturates at the `i64` bounds. Returns
/// `None` when there are no leading digits.
pub fn parse_integer_lenient(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundbrowser_types::MemoryCarrier;

    #[test]
    fn test_listing_format() {
        let record = TypedRecord::new()
            .with("offset", 2i64)
            .with("menu", true)
            .with("filterString", "x");
        insta::assert_snapshot!(
            encode_listing(&record),
            @r#"[["filterString","string"],["menu","boolean"],["offset","integer"]]"#
        );
    }

    #[test]
    fn test_field_keys_never_collide_with_listing() {
        let codec = StateCodec::default();
        assert_eq!(codec.listing_key(), "soundbrowser:keys");
        assert_eq!(codec.field_key("keys"), "soundbrowser:data.keys");
    }

    #[test]
    fn test_lenient_integer_parse() {
        assert_eq!(parse_integer_lenient("42"), Some(42));
        assert_eq!(parse_integer_lenient(" -7 "), Some(-7));
        assert_eq!(parse_integer_lenient("+3"), Some(3));
        assert_eq!(parse_integer_lenient("12abc"), Some(12));
        assert_eq!(parse_integer_lenient("3.7"), Some(3));
        assert_eq!(parse_integer_lenient("abc"), None);
        assert_eq!(parse_integer_lenient("-"), None);
        assert_eq!(parse_integer_lenient(""), None);
        assert_eq!(
            parse_integer_lenient("99999999999999999999"),
            Some(i64::MAX)
        );
        assert_eq!(
            parse_integer_lenient("-99999999999999999999"),
            Some(i64::MIN)
        );
    }

    #[test]
    fn test_boolean_coercion() {
        assert!(coerce_bool("menu", "true"));
        assert!(coerce_bool("menu", "1"));
        assert!(coerce_bool("menu", "yes"));
        assert!(!coerce_bool("menu", "false"));
        assert!(!coerce_bool("menu", "0"));
        assert!(!coerce_bool("menu", ""));
    }

    #[test]
    fn test_clear_removes_encoded_fields_only() {
        let codec = StateCodec::default();
        let mut carrier = MemoryCarrier::new();
        carrier.set("host:display_name", "Next Page".to_string());

        codec.encode(&TypedRecord::new().with("menu", true), &mut carrier);
        assert_eq!(carrier.len(), 3);

        codec.clear(&mut carrier);
        assert_eq!(carrier.len(), 1);
        assert!(codec.decode(&carrier).is_none());
    }
}
