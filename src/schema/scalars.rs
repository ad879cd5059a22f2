/// Well-known extended scalars
///
/// Schemas commonly declare scalars from the GraphQL extended scalars set.
/// This table suggests a Rust type for them when no mapping is configured and
/// validates string literals used as their default values.

use chrono::{DateTime, NaiveDate, NaiveTime};

/// Documented fallback for custom scalars without a mapping
pub const DEFAULT_SCALAR_TYPE: &str = "serde_json::Value";

/// Known scalar name and the Rust type suggested for it
const KNOWN_SCALARS: &[(&str, &str)] = &[
    ("DateTime", "chrono::DateTime<chrono::FixedOffset>"),
    ("Date", "chrono::NaiveDate"),
    ("Time", "chrono::NaiveTime"),
    ("LocalTime", "chrono::NaiveTime"),
    ("Long", "i64"),
    ("Short", "i16"),
    ("BigDecimal", "String"),
    ("BigInteger", "String"),
    ("UUID", "String"),
    ("Url", "String"),
    ("JSON", "serde_json::Value"),
    ("Object", "serde_json::Map<String, serde_json::Value>"),
];

/// Suggested Rust type for a well-known scalar
pub fn suggested_type(scalar: &str) -> Option<&'static str> {
    KNOWN_SCALARS
        .iter()
        .find(|(name, _)| *name == scalar)
        .map(|(_, rust_type)| *rust_type)
}

/// Check a string literal against the lexical form of a temporal scalar
///
/// Returns `None` when the scalar has no known lexical form.
pub fn validate_literal(scalar: &str, literal: &str) -> Option<bool> {
    match scalar {
        "DateTime" => Some(DateTime::parse_from_rfc3339(literal).is_ok()),
        "Date" => Some(NaiveDate::parse_from_str(literal, "%Y-%m-%d").is_ok()),
        "Time" => Some(DateTime::parse_from_rfc3339(&format!("1970-01-01T{}", literal)).is_ok()),
        "LocalTime" => Some(literal.parse::<NaiveTime>().is_ok()),
        _ => None,
    }
}
