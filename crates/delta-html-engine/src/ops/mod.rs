//! # Operation Model
//!
//! A Delta insert normalized into a plain record: the payload (text, or the
//! value of an embed), the kind (`"text"` for string inserts, otherwise the
//! embed's key) and the attribute map.
//!
//! Attributes are kept in a sorted map so iteration never depends on hashing.
//! Unset attributes are absent, never empty.

mod decode;

use std::collections::BTreeMap;

pub use decode::decode_operations;

/// Kind given to string inserts.
pub const TEXT_KIND: &str = "text";

/// Value stored for boolean attributes such as `"bold": true`.
pub const TRUE_SENTINEL: &str = "y";

/// A single insert operation ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The text to insert, or the value of an embed.
    pub payload: String,
    /// `"text"` for string inserts, the embed key otherwise (e.g. `"image"`).
    pub kind: String,
    /// Attribute name to value; boolean attributes hold [`TRUE_SENTINEL`].
    pub attributes: BTreeMap<String, String>,
}

impl Operation {
    pub fn new(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            kind: kind.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// A plain text insert.
    pub fn text(payload: impl Into<String>) -> Self {
        Self::new(TEXT_KIND, payload)
    }

    /// Sets an attribute. Empty values are ignored, keeping unset attributes absent.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.attributes.insert(name.into(), value);
        }
        self
    }

    /// Sets a boolean attribute.
    pub fn with_flag(self, name: impl Into<String>) -> Self {
        self.with_attr(name, TRUE_SENTINEL)
    }

    /// The value of an attribute, if it is set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn is_text(&self) -> bool {
        self.kind == TEXT_KIND
    }
}
