//! A string dictionary stored as a skiplist of sentinel-headed levels.
//!
//! Every level starts with a header that holds no entry, so inserting or
//! removing the smallest key is no different from any other position. An
//! entry is stored once in an arena and all the cells of its tower refer to
//! it by index.

mod error;
mod iter;

use std::{collections::HashSet, fmt, iter as std_iter};

use slab::Slab;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

pub use self::error::{InsertError, SkipListError, ValidationError};
pub use self::iter::{IntoIter, Iter, Prefix};
use crate::{
    config::Config,
    entry::Entry,
    level_generator::{Geometric, LevelGenerator},
    skipnode::{AllocError, EntryId, NodeId, NodePool, SkipNode},
};

/// Predecessor of the target on every level, level 0 first.
type Trace = SmallVec<[NodeId; 16]>;

// ////////////////////////////////////////////////////////////////////////////
// SkipList
// ////////////////////////////////////////////////////////////////////////////

/// A skiplist of unique string keys and their values, kept sorted by key.
///
/// Lookups, insertions and removals take `O(log(n))` expected time.
///
/// # Examples
///
/// ```
/// use skipdict::SkipList;
///
/// let mut list = SkipList::new();
/// list.insert("apple", "fruit")?;
/// list.insert("banana", "veg?")?;
/// assert_eq!(list.search("banana"), Some("veg?"));
///
/// list.update("apple", "fruit-v2")?;
/// assert_eq!(list.search("apple"), Some("fruit-v2"));
///
/// let removed = list.remove("banana")?;
/// assert_eq!(removed.value(), "veg?");
/// assert_eq!(list.len(), 1);
/// # Ok::<(), skipdict::SkipListError>(())
/// ```
pub struct SkipList<G = Geometric> {
    // One header per level, level 0 first.
    headers: Vec<NodeId>,
    nodes: NodePool,
    entries: Slab<Entry>,
    len: usize,
    config: Config,
    level_generator: G,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl SkipList<Geometric> {
    /// Create a new, empty skiplist with the default [`Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use skipdict::SkipList;
    ///
    /// let list = SkipList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.height(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(Config::default(), Geometric::default())
    }

    /// Create a new, empty skiplist with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails if the level probability is not in `(0, 1)` or the random
    /// number generator cannot be seeded.
    #[inline]
    pub fn with_config(config: Config) -> Result<Self, SkipListError> {
        let level_generator = Geometric::new(config.total_levels(), config.p)?;
        Ok(Self::with_generator(config, level_generator))
    }
}

impl<G: LevelGenerator> SkipList<G> {
    /// Create a new, empty skiplist drawing tower heights from
    /// `level_generator`.
    ///
    /// Heights drawn above the configured maximum height are clamped. The
    /// configured probability [`Config::p`] is not used here: it only
    /// parameterises the [`Geometric`] generator built by
    /// [`SkipList::with_config`].
    #[inline]
    pub fn with_generator(config: Config, level_generator: G) -> Self {
        SkipList {
            headers: Vec::new(),
            nodes: NodePool::new(config.max_nodes),
            entries: Slab::new(),
            len: 0,
            config,
            level_generator,
        }
    }

    /// Insert a new key-value pair.
    ///
    /// # Errors
    ///
    /// - [`SkipListError::EmptyKey`], [`SkipListError::KeyTooLong`] or
    ///   [`SkipListError::ValueTooLong`] if the pair breaks the configured
    ///   limits.
    /// - [`SkipListError::Conflict`] if the key is already present.
    /// - [`SkipListError::CapacityExceeded`] if the list is full.
    /// - [`SkipListError::AllocationFailure`] if the node budget ran out. The
    ///   list is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipdict::{SkipList, SkipListError};
    ///
    /// let mut list = SkipList::new();
    /// list.insert("apple", "fruit")?;
    /// assert_eq!(
    ///     list.insert("apple", "other"),
    ///     Err(SkipListError::Conflict("apple".into()))
    /// );
    /// assert_eq!(list.search("apple"), Some("fruit"));
    /// # Ok::<(), SkipListError>(())
    /// ```
    #[inline]
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), SkipListError> {
        self.insert_entry(Entry::new(key, value))
            .map_err(SkipListError::from)
    }

    /// Insert an existing [`Entry`], taking ownership of it.
    ///
    /// # Errors
    ///
    /// As for [`SkipList::insert`]. The rejected entry is handed back inside
    /// the [`InsertError`], so the caller may retry without cloning it.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipdict::{Config, Entry, SkipList, SkipListError};
    ///
    /// let mut list = SkipList::with_config(Config::default().max_length(1))?;
    /// list.insert("apple", "fruit")?;
    ///
    /// let err = list.insert_entry(Entry::new("banana", "veg?")).unwrap_err();
    /// assert_eq!(err.error(), &SkipListError::CapacityExceeded(1));
    ///
    /// list.remove("apple")?;
    /// list.insert_entry(err.into_entry())?;
    /// assert_eq!(list.search("banana"), Some("veg?"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn insert_entry(&mut self, entry: Entry) -> Result<(), InsertError> {
        if let Err(error) = self
            .check_key(entry.key())
            .and_then(|()| self.check_value(entry.value()))
        {
            return Err(InsertError::new(error, entry));
        }

        let trace = self.trace_with(|other| other.key() < entry.key());
        let duplicate = trace
            .first()
            .and_then(|&pred| self.nodes.get(pred).next)
            .is_some_and(|node| self.entry_at(node).key() == entry.key());
        if duplicate {
            let error = SkipListError::Conflict(entry.key().to_owned());
            return Err(InsertError::new(error, entry));
        }
        if let Some(max) = self.config.max_length.filter(|&max| self.len >= max) {
            return Err(InsertError::new(SkipListError::CapacityExceeded(max), entry));
        }

        let height = self.tower_height();
        let id = self.entries.insert(entry);
        if let Err(err) = self.link_tower(id, &trace, height) {
            let entry = self.entries.remove(id);
            warn!(key = entry.key(), %err, "insert rolled back");
            return Err(InsertError::new(SkipListError::AllocationFailure, entry));
        }
        self.len += 1;
        trace!(
            key = self.entries[id].key(),
            height,
            len = self.len,
            "inserted"
        );
        Ok(())
    }

    /// Remove the entry with the given key and hand it back to the caller.
    ///
    /// # Errors
    ///
    /// [`SkipListError::NotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipdict::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.insert("apple", "fruit")?;
    /// let entry = list.remove("apple")?;
    /// assert_eq!(entry.into_parts(), ("apple".into(), "fruit".into()));
    /// assert!(list.remove("apple").is_err());
    /// # Ok::<(), skipdict::SkipListError>(())
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<Entry, SkipListError> {
        let trace = self.trace_with(|other| other.key() < key);
        let target = trace
            .first()
            .and_then(|&pred| self.nodes.get(pred).next)
            .filter(|&node| self.entry_at(node).key() == key)
            .ok_or_else(|| SkipListError::NotFound(key.to_owned()))?;
        let id = self.entry_id(target);

        for &pred in &trace {
            match self.nodes.get(pred).next {
                Some(node) if self.nodes.get(node).entry == Some(id) => {
                    let removed = self.nodes.free(node);
                    self.nodes.get_mut(pred).next = removed.next;
                }
                // Towers are contiguous, nothing above this level.
                _ => break,
            }
        }

        let entry = self.entries.remove(id);
        self.trim();
        self.len -= 1;
        trace!(key, len = self.len, "removed");
        Ok(entry)
    }
}

impl<G> SkipList<G> {
    /// Look up the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipdict::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.insert("apple", "fruit")?;
    /// assert_eq!(list.search("apple"), Some("fruit"));
    /// assert_eq!(list.search("pear"), None);
    /// # Ok::<(), skipdict::SkipListError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn search(&self, key: &str) -> Option<&str> {
        self.get_entry(key).map(Entry::value)
    }

    /// Look up the entry stored under `key`.
    #[inline]
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<&Entry> {
        self.find_node(key).map(|node| self.entry_at(node))
    }

    /// Returns `true` if `key` is present.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_node(key).is_some()
    }

    /// Replace the value stored under `key`, returning the previous value.
    ///
    /// The key and the position of the entry are untouched.
    ///
    /// # Errors
    ///
    /// [`SkipListError::NotFound`] if the key is absent and
    /// [`SkipListError::ValueTooLong`] if the new value breaks the configured
    /// limit (the old value is kept).
    pub fn update(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<String, SkipListError> {
        let node = self
            .find_node(key)
            .ok_or_else(|| SkipListError::NotFound(key.to_owned()))?;
        let value = value.into();
        self.check_value(&value)?;
        let id = self.entry_id(node);
        let old = self.entries[id].replace_value(value);
        trace!(key, "updated");
        Ok(old)
    }

    /// Iterate, in ascending key order, over the entries whose key starts
    /// with `c`.
    ///
    /// The iterator borrows the list and can be created again at will. It is
    /// empty if no key starts with `c`.
    ///
    /// # Errors
    ///
    /// [`SkipListError::Empty`] if the list holds no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipdict::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.insert("apple", "")?;
    /// list.insert("banana", "")?;
    /// list.insert("avocado", "")?;
    ///
    /// let keys: Vec<_> = list.entries_with_prefix_char('a')?.map(|e| e.key()).collect();
    /// assert_eq!(keys, ["apple", "avocado"]);
    /// # Ok::<(), skipdict::SkipListError>(())
    /// ```
    pub fn entries_with_prefix_char(&self, c: char) -> Result<Prefix<'_>, SkipListError> {
        if self.is_empty() {
            return Err(SkipListError::Empty);
        }
        let cursor = self
            .find_last_with(|entry| entry.first_char() < Some(c))
            .and_then(|pred| self.nodes.get(pred).next);
        Ok(Prefix {
            nodes: &self.nodes,
            entries: &self.entries,
            cursor,
            first: c,
        })
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of levels, zero for a list that never held an
    /// entry.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if the list holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the list holds its configured maximum number of
    /// entries. Always `false` when no maximum is configured.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.config.max_length.is_some_and(|max| self.len >= max)
    }

    /// The configuration the list was built with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The entry with the smallest key.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Entry> {
        self.iter().next()
    }

    /// The entry with the largest key.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Entry> {
        let node = self.find_last_with(|_| true)?;
        self.nodes.get(node).entry.map(|id| &self.entries[id])
    }

    /// Iterate over all entries in ascending key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            entries: &self.entries,
            cursor: self.headers.first().and_then(|&h| self.nodes.get(h).next),
            size: self.len,
        }
    }

    /// Remove every entry, freeing each tower cell and each entry exactly
    /// once. The list returns to height 0.
    pub fn clear(&mut self) {
        for header in std::mem::take(&mut self.headers).into_iter().rev() {
            let mut cursor = Some(header);
            while let Some(id) = cursor {
                let node = self.nodes.free(id);
                // Only the bottom cell owns the entry.
                if node.down.is_none() {
                    if let Some(entry) = node.entry {
                        self.entries.remove(entry);
                    }
                }
                cursor = node.next;
            }
        }
        self.len = 0;
        debug_assert!(self.nodes.is_empty(), "every node is on some level");
        debug_assert!(self.entries.is_empty(), "every entry is on level 0");
        debug!("cleared skiplist");
    }

    /// Check the structural invariants of the list.
    ///
    /// Verifies that every header is stacked on the one below, every level is
    /// strictly ascending, every cell above level 0 sits on a cell of the same
    /// entry on the level below, no level above 0 is empty, the length
    /// matches level 0, nothing is unreachable and the configured bounds hold.
    /// Intended for tests rather than production use.
    ///
    /// # Errors
    ///
    /// The first broken invariant found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut below: HashSet<NodeId> = HashSet::new();
        let mut reachable = 0;

        for (level, &header) in self.headers.iter().enumerate() {
            if !self.nodes.contains(header) {
                return Err(ValidationError::MalformedHeader { level });
            }
            let head = self.nodes.get(header);
            let expected_down = level.checked_sub(1).map(|l| self.headers[l]);
            if !head.is_header() || head.down != expected_down {
                return Err(ValidationError::MalformedHeader { level });
            }

            let mut current = HashSet::new();
            let mut prev: Option<&str> = None;
            for (id, cell) in self.nodes.chain(header).skip(1) {
                let entry_id = cell
                    .entry
                    .ok_or(ValidationError::MalformedHeader { level })?;
                let key = self.entries.get(entry_id).map_or("", Entry::key);
                let broken = || ValidationError::BrokenTower {
                    level,
                    key: key.to_owned(),
                };
                if !self.entries.contains(entry_id) {
                    return Err(broken());
                }
                if prev.is_some_and(|prev| prev >= key) {
                    return Err(ValidationError::OutOfOrder {
                        level,
                        key: key.to_owned(),
                    });
                }
                let tower_ok = match (level, cell.down) {
                    (0, down) => down.is_none(),
                    (_, Some(down)) => {
                        below.contains(&down) && self.nodes.get(down).entry == Some(entry_id)
                    }
                    (_, None) => false,
                };
                if !tower_ok {
                    return Err(broken());
                }
                current.insert(id);
                prev = Some(key);
            }

            if level == 0 && current.len() != self.len {
                return Err(ValidationError::LengthMismatch {
                    recorded: self.len,
                    actual: current.len(),
                });
            }
            if level > 0 && current.is_empty() {
                return Err(ValidationError::EmptyLevel { level });
            }
            reachable += current.len() + 1;
            below = current;
        }

        if self.headers.is_empty() && self.len != 0 {
            return Err(ValidationError::LengthMismatch {
                recorded: self.len,
                actual: 0,
            });
        }
        let nodes = self.nodes.len().abs_diff(reachable);
        let entries = self.entries.len().abs_diff(self.len);
        if nodes != 0 || entries != 0 {
            return Err(ValidationError::Leaked { nodes, entries });
        }
        if let Some(max) = self.nodes.limit().filter(|&max| self.nodes.len() > max) {
            return Err(ValidationError::BoundExceeded {
                what: "nodes",
                actual: self.nodes.len(),
                max,
            });
        }
        if let Some(max) = self.config.get_max_height().filter(|&max| self.height() > max) {
            return Err(ValidationError::BoundExceeded {
                what: "height",
                actual: self.height(),
                max,
            });
        }
        if let Some(max) = self.config.max_length.filter(|&max| self.len > max) {
            return Err(ValidationError::BoundExceeded {
                what: "length",
                actual: self.len,
                max,
            });
        }
        Ok(())
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<G: LevelGenerator> SkipList<G> {
    /// Number of cells in the tower of a new entry.
    ///
    /// The drawn height is clamped to the configured maximum, to the levels
    /// the generator assumes and to one level above the current top. Every
    /// tower has at least its level-0 cell, whatever the generator claims.
    fn tower_height(&mut self) -> usize {
        let drawn = self.level_generator.level().saturating_add(1);
        let cap = self
            .config
            .total_levels()
            .min(self.level_generator.total())
            .min(self.height() + 1);
        drawn.min(cap).max(1)
    }

    /// Splice a tower of `height` cells for `entry` after the predecessors in
    /// `trace`, adding levels on top where the tower outgrows the list.
    ///
    /// On failure every cell linked so far is unlinked and freed again, along
    /// with any level added for it.
    fn link_tower(
        &mut self,
        entry: EntryId,
        trace: &[NodeId],
        height: usize,
    ) -> Result<(), AllocError> {
        let levels = self.headers.len();
        let mut linked: SmallVec<[(NodeId, NodeId); 16]> = SmallVec::new();

        for level in 0..height {
            let down = linked.last().map(|&(_, node)| node);
            let spliced = match trace.get(level) {
                Some(&pred) => self.splice_after(pred, entry, down),
                None => self.grow(entry, down),
            };
            match spliced {
                Ok(pair) => linked.push(pair),
                Err(err) => {
                    self.unlink(&linked, levels);
                    return Err(err);
                }
            }
        }

        if self.headers.len() > levels {
            debug!(height = self.headers.len(), "added level");
        }
        Ok(())
    }

    /// Link a new cell for `entry` right after `pred`.
    fn splice_after(
        &mut self,
        pred: NodeId,
        entry: EntryId,
        down: Option<NodeId>,
    ) -> Result<(NodeId, NodeId), AllocError> {
        let next = self.nodes.get(pred).next;
        let node = self.nodes.alloc(SkipNode::tower(entry, next, down))?;
        self.nodes.get_mut(pred).next = Some(node);
        Ok((pred, node))
    }

    /// Add a level on top of the list holding a single cell for `entry`.
    fn grow(
        &mut self,
        entry: EntryId,
        down: Option<NodeId>,
    ) -> Result<(NodeId, NodeId), AllocError> {
        let node = self.nodes.alloc(SkipNode::tower(entry, None, down))?;
        let header = match self
            .nodes
            .alloc(SkipNode::header(self.headers.last().copied()))
        {
            Ok(header) => header,
            Err(err) => {
                self.nodes.free(node);
                return Err(err);
            }
        };
        self.nodes.get_mut(header).next = Some(node);
        self.headers.push(header);
        Ok((header, node))
    }

    /// Undo [`link_tower`](Self::link_tower): unlink the `(pred, node)` pairs
    /// top-down and drop the levels above `levels`.
    fn unlink(&mut self, linked: &[(NodeId, NodeId)], levels: usize) {
        for &(pred, node) in linked.iter().rev() {
            let removed = self.nodes.free(node);
            self.nodes.get_mut(pred).next = removed.next;
        }
        for header in self.headers.split_off(levels) {
            self.nodes.free(header);
        }
        debug!(cells = linked.len(), "rolled back partial tower");
    }
}

impl<G> SkipList<G> {
    /// Drop empty levels from the top, always keeping level 0.
    fn trim(&mut self) {
        while self.headers.len() > 1 {
            let Some(&top) = self.headers.last() else {
                break;
            };
            if self.nodes.get(top).next.is_some() {
                break;
            }
            self.headers.pop();
            self.nodes.free(top);
            debug!(height = self.headers.len(), "removed empty level");
        }
    }

    fn check_key(&self, key: &str) -> Result<(), SkipListError> {
        if key.is_empty() {
            return Err(SkipListError::EmptyKey);
        }
        match self.config.limits.key_overflow(key) {
            Some(len) => Err(SkipListError::KeyTooLong {
                len,
                max: self.config.limits.max_key_len,
            }),
            None => Ok(()),
        }
    }

    fn check_value(&self, value: &str) -> Result<(), SkipListError> {
        match self.config.limits.value_overflow(value) {
            Some(len) => Err(SkipListError::ValueTooLong {
                len,
                max: self.config.limits.max_value_len,
            }),
            None => Ok(()),
        }
    }

    /// The entry index held by a non-header cell.
    ///
    /// # Panics
    ///
    /// Panics if `node` is a header; headers never follow another cell.
    #[expect(
        clippy::expect_used,
        reason = "A header reached through a `next` link is a corrupted list"
    )]
    fn entry_id(&self, node: NodeId) -> EntryId {
        self.nodes
            .get(node)
            .entry
            .expect("only headers lack an entry and they are never a successor")
    }

    fn entry_at(&self, node: NodeId) -> &Entry {
        &self.entries[self.entry_id(node)]
    }

    /// Move right from `node` while the next entry satisfies `before`.
    fn advance_while(&self, mut node: NodeId, before: &mut impl FnMut(&Entry) -> bool) -> NodeId {
        while let Some(next) = self.nodes.get(node).next {
            if !before(self.entry_at(next)) {
                break;
            }
            node = next;
        }
        node
    }

    /// Descend from the top header and return the last level-0 cell whose
    /// entry satisfies `before` (possibly the level-0 header). `before` must
    /// hold for a prefix of the entries in key order.
    fn find_last_with(&self, mut before: impl FnMut(&Entry) -> bool) -> Option<NodeId> {
        let mut node = *self.headers.last()?;
        loop {
            node = self.advance_while(node, &mut before);
            match self.nodes.get(node).down {
                Some(down) => node = down,
                None => return Some(node),
            }
        }
    }

    /// As [`find_last_with`](Self::find_last_with), recording the last cell
    /// on every level.
    fn trace_with(&self, mut before: impl FnMut(&Entry) -> bool) -> Trace {
        let mut trace = Trace::new();
        let Some(&top) = self.headers.last() else {
            return trace;
        };
        let mut node = top;
        loop {
            node = self.advance_while(node, &mut before);
            trace.push(node);
            match self.nodes.get(node).down {
                Some(down) => node = down,
                None => break,
            }
        }
        trace.reverse();
        assert_eq!(
            trace.len(),
            self.height(),
            "descent must visit every level exactly once"
        );
        trace
    }

    /// The level-0 cell holding `key`.
    fn find_node(&self, key: &str) -> Option<NodeId> {
        let pred = self.find_last_with(|entry| entry.key() < key)?;
        self.nodes
            .get(pred)
            .next
            .filter(|&node| self.entry_at(node).key() == key)
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl Default for SkipList<Geometric> {
    #[inline]
    fn default() -> Self {
        SkipList::new()
    }
}

impl<G> fmt::Debug for SkipList<G> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (entry.key(), entry.value())))
            .finish()
    }
}

/// Renders every level, top first, with each key in the column it occupies
/// on level 0:
///
/// ```text
/// <head> --------------> [banana]
/// <head> --> [apple] --> [banana] --> [cherry]
/// ```
impl<G> fmt::Display for SkipList<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(&bottom) = self.headers.first() else {
            return Ok(());
        };
        let columns: Vec<(EntryId, String)> = self
            .nodes
            .chain(bottom)
            .filter_map(|(_, node)| node.entry)
            .map(|id| (id, format!("--> [{}] ", self.entries[id].key())))
            .collect();

        for &header in self.headers.iter().rev() {
            let present: HashSet<EntryId> = self
                .nodes
                .chain(header)
                .filter_map(|(_, node)| node.entry)
                .collect();
            let mut line = String::from("<head> ");
            for (id, cell) in &columns {
                if present.contains(id) {
                    line.push_str(cell);
                } else {
                    line.extend(std_iter::repeat_n('-', cell.chars().count()));
                }
            }
            writeln!(f, "{}", line.trim_end_matches([' ', '-']))?;
        }
        Ok(())
    }
}

impl<G> IntoIterator for SkipList<G> {
    type Item = Entry;
    type IntoIter = IntoIter;

    /// Hand every entry over to the caller, in ascending key order.
    fn into_iter(mut self) -> IntoIter {
        let order: Vec<EntryId> = self
            .headers
            .first()
            .map(|&bottom| {
                self.nodes
                    .chain(bottom)
                    .filter_map(|(_, node)| node.entry)
                    .collect()
            })
            .unwrap_or_default();
        let inner: Vec<Entry> = order.into_iter().map(|id| self.entries.remove(id)).collect();
        IntoIter {
            inner: inner.into_iter(),
        }
    }
}

impl<'a, G> IntoIterator for &'a SkipList<G> {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
