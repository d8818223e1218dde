//! Errors reported by [`SkipList`](crate::SkipList) operations.

use thiserror::Error;

use crate::entry::Entry;
use crate::level_generator::GeometricError;

/// Errors returned by the operations of a [`SkipList`](crate::SkipList).
///
/// None of these are fatal: the list is left exactly as it was before the
/// failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum SkipListError {
    /// The key was empty.
    #[error("key must be non-empty.")]
    EmptyKey,
    /// The key is already present.
    #[error("key `{0}` is already present.")]
    Conflict(String),
    /// The key is absent.
    #[error("key `{0}` not found.")]
    NotFound(String),
    /// The list already holds its configured maximum number of entries.
    #[error("skiplist is full ({0} entries).")]
    CapacityExceeded(usize),
    /// A tower node could not be allocated.
    #[error("failed to allocate a tower node.")]
    AllocationFailure,
    /// The query needs at least one entry.
    #[error("skiplist is empty.")]
    Empty,
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
    /// The level generator could not be built from the configuration.
    #[error(transparent)]
    Generator(#[from] GeometricError),
}

/// A rejected insertion, holding the entry that was not inserted.
///
/// Returned by [`SkipList::insert_entry`](crate::SkipList::insert_entry) so
/// that the caller keeps ownership of the entry, for instance to retry once
/// room has been made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct InsertError {
    error: SkipListError,
    entry: Entry,
}

impl InsertError {
    pub(crate) fn new(error: SkipListError, entry: Entry) -> Self {
        InsertError { error, entry }
    }

    /// Why the entry was rejected.
    #[inline]
    #[must_use]
    pub fn error(&self) -> &SkipListError {
        &self.error
    }

    /// The rejected entry.
    #[inline]
    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Take back the rejected entry.
    #[inline]
    #[must_use]
    pub fn into_entry(self) -> Entry {
        self.entry
    }
}

impl From<InsertError> for SkipListError {
    #[inline]
    fn from(err: InsertError) -> Self {
        err.error
    }
}

/// Broken structural invariants found by
/// [`SkipList::validate`](crate::SkipList::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A header holds an entry or is not stacked on the header below.
    #[error("header at level {level} is malformed.")]
    MalformedHeader {
        /// The offending level.
        level: usize,
    },
    /// Two consecutive keys on one level are not strictly increasing.
    #[error("level {level} is out of order at key `{key}`.")]
    OutOfOrder {
        /// The offending level.
        level: usize,
        /// The key that is not greater than its predecessor.
        key: String,
    },
    /// A node above level 0 does not sit on a node of the same entry.
    #[error("tower of `{key}` is broken at level {level}.")]
    BrokenTower {
        /// The level of the node whose `down` link is wrong.
        level: usize,
        /// The key of the tower.
        key: String,
    },
    /// A level above level 0 is empty.
    #[error("level {level} is empty.")]
    EmptyLevel {
        /// The offending level.
        level: usize,
    },
    /// The recorded length does not match level 0.
    #[error("length is {recorded} but level 0 holds {actual} entries.")]
    LengthMismatch {
        /// The length counter.
        recorded: usize,
        /// Entries found on level 0.
        actual: usize,
    },
    /// Some nodes or entries are not reachable from the headers.
    #[error("{nodes} nodes and {entries} entries are unreachable.")]
    Leaked {
        /// Unreachable nodes.
        nodes: usize,
        /// Unreachable entries.
        entries: usize,
    },
    /// A configured bound is exceeded.
    #[error("{what} is {actual}, above the configured {max}.")]
    BoundExceeded {
        /// `"height"`, `"length"` or `"nodes"`.
        what: &'static str,
        /// Observed value.
        actual: usize,
        /// Configured maximum.
        max: usize,
    },
}
