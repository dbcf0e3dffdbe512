//! Start-tag attributes and the truthy-value reader for the opt-in marker

use std::borrow::Cow;

/// Values accepted as "true", compared ASCII case-insensitively
const TRUTHY: [&str; 3] = ["1", "true", "yes"];

/// An attribute as delivered by the tokenizer
///
/// `value` holds the raw bytes between the quotes: entity references are
/// left escaped so the attribute can be written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name
    pub key: Vec<u8>,
    /// Raw (still escaped) attribute value
    pub value: Vec<u8>,
}

impl Attribute {
    /// Create an attribute from its name and raw value
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Check the attribute name, ignoring ASCII case
    pub fn is(&self, name: &str) -> bool {
        self.key.eq_ignore_ascii_case(name.as_bytes())
    }

    /// Attribute value as text, replacing invalid UTF-8
    pub fn value_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

/// Find the first attribute named `name` (ASCII case-insensitive)
pub fn find<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|attr| attr.is(name))
}

/// Interpret an attribute value as a boolean
///
/// Only `1`, `true` and `yes` (any ASCII case) are true. Everything else,
/// the empty string included, is false.
///
/// # Examples
///
/// ```
/// use sblg_article::attr::is_truthy;
///
/// assert!(is_truthy(b"yes"));
/// assert!(is_truthy(b"TRUE"));
/// assert!(!is_truthy(b"0"));
/// assert!(!is_truthy(b""));
/// ```
pub fn is_truthy(value: &[u8]) -> bool {
    TRUTHY
        .iter()
        .any(|token| value.eq_ignore_ascii_case(token.as_bytes()))
}

/// Truthiness of an optional attribute; absence is false
pub fn is_set(attribute: Option<&Attribute>) -> bool {
    attribute.is_some_and(|attr| is_truthy(&attr.value))
}
