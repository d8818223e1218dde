//! The record stored by the dictionary: a unique key and its value.
//!
//! The key of an [`Entry`] decides where it sits in the list, so it can never
//! be changed once the entry exists. The value can be replaced freely.

use std::fmt;

/// Default maximum key length, in characters.
pub const MAX_KEY_LEN: usize = 50;

/// Default maximum value length, in characters.
pub const MAX_VALUE_LEN: usize = 140;

// ////////////////////////////////////////////////////////////////////////////
// Entry
// ////////////////////////////////////////////////////////////////////////////

/// A key-value record.
///
/// Entries are ordered lexicographically by key (byte order, which for UTF-8
/// coincides with code point order).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// Create a new entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipdict::Entry;
    ///
    /// let entry = Entry::new("apple", "fruit");
    /// assert_eq!(entry.key(), "apple");
    /// assert_eq!(entry.value(), "fruit");
    /// ```
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The key of the entry.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value of the entry.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The first character of the key, or `None` for an empty key.
    #[inline]
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.key.chars().next()
    }

    /// Replace the value, returning the old one.
    #[inline]
    pub fn replace_value(&mut self, value: impl Into<String>) -> String {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Consume the entry and return its key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for Entry {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Entry {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Limits
// ////////////////////////////////////////////////////////////////////////////

/// Upper bounds on the size of keys and values, counted in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Longest key accepted.
    pub max_key_len: usize,
    /// Longest value accepted.
    pub max_value_len: usize,
}

impl Limits {
    /// Create a new set of limits.
    #[inline]
    #[must_use]
    pub const fn new(max_key_len: usize, max_value_len: usize) -> Self {
        Limits {
            max_key_len,
            max_value_len,
        }
    }

    /// Returns `Some(len)` if the key is longer than allowed.
    #[inline]
    #[must_use]
    pub fn key_overflow(&self, key: &str) -> Option<usize> {
        char_overflow(key, self.max_key_len)
    }

    /// Returns `Some(len)` if the value is longer than allowed.
    #[inline]
    #[must_use]
    pub fn value_overflow(&self, value: &str) -> Option<usize> {
        char_overflow(value, self.max_value_len)
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Limits::new(MAX_KEY_LEN, MAX_VALUE_LEN)
    }
}

/// Character count of `s` if it exceeds `max`.
pub(crate) fn char_overflow(s: &str, max: usize) -> Option<usize> {
    // Byte length bounds the character count from above.
    if s.len() <= max {
        return None;
    }
    let len = s.chars().count();
    (len > max).then_some(len)
}

/// Truncate `s` to at most `max` characters, returning whether anything was
/// cut off.
pub(crate) fn truncate_chars(s: &mut String, max: usize) -> bool {
    match s.char_indices().nth(max) {
        Some((idx, _)) => {
            s.truncate(idx);
            true
        }
        None => false,
    }
}
