//! Construction-time settings of a [`SkipList`](crate::SkipList).

use std::num::NonZeroUsize;

use crate::entry::Limits;

/// Default probability that a tower reaches the next level.
pub const DEFAULT_P: f64 = 0.5;

/// Settings for a [`SkipList`](crate::SkipList).
///
/// Every bound is optional except the key and value limits, which default to
/// [`MAX_KEY_LEN`](crate::entry::MAX_KEY_LEN) and
/// [`MAX_VALUE_LEN`](crate::entry::MAX_VALUE_LEN) characters.
///
/// # Examples
///
/// ```
/// use skipdict::{Config, SkipList};
///
/// let config = Config::default().max_height(8).max_length(1000);
/// let list = SkipList::with_config(config)?;
/// assert!(list.is_empty());
/// # Ok::<(), skipdict::SkipListError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub(crate) max_height: Option<NonZeroUsize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) max_nodes: Option<usize>,
    pub(crate) limits: Limits,
    pub(crate) p: f64,
}

impl Config {
    /// Cap the number of levels. Towers drawn taller than this are silently
    /// clamped. A value of zero leaves the height uncapped, and the
    /// [`Geometric`](crate::Geometric) generator built by
    /// [`SkipList::with_config`](crate::SkipList::with_config) is then told
    /// to assume `usize::MAX` levels rather than zero.
    #[inline]
    #[must_use]
    pub fn max_height(mut self, max_height: usize) -> Self {
        self.max_height = NonZeroUsize::new(max_height);
        self
    }

    /// Cap the number of entries. Inserting into a full list fails with
    /// [`SkipListError::CapacityExceeded`](crate::SkipListError::CapacityExceeded).
    #[inline]
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Cap the number of tower nodes (headers included) the list may hold.
    /// Once reached, inserts fail with
    /// [`SkipListError::AllocationFailure`](crate::SkipListError::AllocationFailure).
    #[inline]
    #[must_use]
    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Set the key and value length limits.
    #[inline]
    #[must_use]
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the probability that a tower reaches the next level.
    ///
    /// Only [`SkipList::with_config`](crate::SkipList::with_config) reads
    /// this; a list built with
    /// [`SkipList::with_generator`](crate::SkipList::with_generator) takes
    /// its distribution from the given generator.
    #[inline]
    #[must_use]
    pub fn p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// The configured maximum height, if any.
    #[inline]
    #[must_use]
    pub fn get_max_height(&self) -> Option<usize> {
        self.max_height.map(NonZeroUsize::get)
    }

    /// The configured maximum length, if any.
    #[inline]
    #[must_use]
    pub fn get_max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// The configured node budget, if any.
    #[inline]
    #[must_use]
    pub fn get_max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// The key and value length limits.
    #[inline]
    #[must_use]
    pub fn get_limits(&self) -> Limits {
        self.limits
    }

    /// Number of levels the level generator should assume exist.
    pub(crate) fn total_levels(&self) -> usize {
        self.get_max_height().unwrap_or(usize::MAX)
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Config {
            max_height: None,
            max_length: None,
            max_nodes: None,
            limits: Limits::default(),
            p: DEFAULT_P,
        }
    }
}
