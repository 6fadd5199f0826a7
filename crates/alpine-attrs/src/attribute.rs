//! The attribute pair produced by every directive helper.

use smol_str::SmolStr;

/// An HTML attribute name and value, ready to be placed on a tag.
///
/// The value is stored exactly as given. Escaping belongs to whatever renders
/// the pair into markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributePair {
    /// Attribute name (e.g. `x-on:click`, `@submit.prevent`).
    pub key: SmolStr,
    /// Attribute value, usually an Alpine expression.
    pub value: String,
}

impl AttributePair {
    /// Create a pair for an arbitrary attribute.
    pub fn new(key: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a pair whose name is known at compile time.
    pub(crate) fn fixed(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key: SmolStr::new_static(key),
            value: value.into(),
        }
    }

    /// Create a valueless marker attribute such as `x-cloak`.
    pub(crate) fn marker(key: &'static str) -> Self {
        Self::fixed(key, String::new())
    }

    /// The attribute name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this attribute carries no value.
    pub fn is_marker(&self) -> bool {
        self.value.is_empty()
    }

    /// Split into owned name and value.
    pub fn into_parts(self) -> (SmolStr, String) {
        (self.key, self.value)
    }
}

impl From<AttributePair> for (String, String) {
    fn from(pair: AttributePair) -> Self {
        (pair.key.to_string(), pair.value)
    }
}
