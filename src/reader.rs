//! Line-oriented reader turning text input into [`Entry`] values.
//!
//! Each non-blank line holds a key, a run of whitespace and then the value,
//! which extends to the end of the line:
//!
//! ```text
//! apple   a round fruit
//! banana  yellow, and curved
//! ```
//!
//! Keys and values longer than the configured [`Limits`] are handled
//! according to an [`Overflow`] policy.

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::debug;

use crate::entry::{Entry, Limits, char_overflow, truncate_chars};

/// What to do with a key or value longer than its limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Keep the leading characters that fit and drop the rest.
    #[default]
    Discard,
    /// Fail the read. The offending line is consumed either way.
    Reject,
}

/// Errors that can occur while reading entries.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("failed to read input.")]
    Io(#[from] io::Error),
    /// The key exceeds the configured limit.
    #[error("key is {len} characters long, the limit is {max}.")]
    KeyTooLong {
        /// Length of the rejected key.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
    /// The value exceeds the configured limit.
    #[error("value is {len} characters long, the limit is {max}.")]
    ValueTooLong {
        /// Length of the rejected value.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Reads [`Entry`] values from a [`BufRead`] source, one per line.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use skipdict::{EntryReader, Limits, SkipList};
///
/// let input = Cursor::new("apple fruit\n\nbanana veg?\n");
/// let mut reader = EntryReader::new(input, Limits::default());
/// let mut list = SkipList::new();
/// while let Some(entry) = reader.read_entry()? {
///     list.insert_entry(entry)?;
/// }
/// assert_eq!(list.search("banana"), Some("veg?"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct EntryReader<R> {
    inner: R,
    limits: Limits,
    overflow: Overflow,
    line: String,
}

impl<R: BufRead> EntryReader<R> {
    /// Wrap `inner`, discarding whatever overflows `limits`.
    #[inline]
    pub fn new(inner: R, limits: Limits) -> Self {
        EntryReader {
            inner,
            limits,
            overflow: Overflow::default(),
            line: String::new(),
        }
    }

    /// Set the overflow policy.
    #[inline]
    #[must_use]
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Read the next entry, skipping blank lines. A line holding only a key
    /// yields an empty value.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails if the underlying reader fails, or if the key or value is too
    /// long under [`Overflow::Reject`].
    pub fn read_entry(&mut self) -> Result<Option<Entry>, ReadError> {
        let Some((mut key, mut value)) = self.next_line()? else {
            return Ok(None);
        };
        self.fit(&mut key, self.limits.max_key_len, |len, max| {
            ReadError::KeyTooLong { len, max }
        })?;
        self.fit(&mut value, self.limits.max_value_len, |len, max| {
            ReadError::ValueTooLong { len, max }
        })?;
        Ok(Some(Entry::new(key, value)))
    }

    /// Read the next key, skipping blank lines and ignoring anything after
    /// the key on its line.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails if the underlying reader fails, or if the key is too long under
    /// [`Overflow::Reject`].
    pub fn read_key(&mut self) -> Result<Option<String>, ReadError> {
        let Some((mut key, _)) = self.next_line()? else {
            return Ok(None);
        };
        self.fit(&mut key, self.limits.max_key_len, |len, max| {
            ReadError::KeyTooLong { len, max }
        })?;
        Ok(Some(key))
    }

    /// Unwrap the reader.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// The next non-blank line, split into key and value.
    fn next_line(&mut self) -> io::Result<Option<(String, String)>> {
        loop {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }
            let (key, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            return Ok(Some((key.to_owned(), value.trim().to_owned())));
        }
    }

    fn fit(
        &self,
        s: &mut String,
        max: usize,
        err: impl FnOnce(usize, usize) -> ReadError,
    ) -> Result<(), ReadError> {
        match self.overflow {
            Overflow::Discard => {
                if truncate_chars(s, max) {
                    debug!(max, "discarded input overflow");
                }
                Ok(())
            }
            Overflow::Reject => match char_overflow(s, max) {
                Some(len) => Err(err(len, max)),
                None => Ok(()),
            },
        }
    }
}
