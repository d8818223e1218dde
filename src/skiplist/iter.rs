//! Iterators over the entries of a [`SkipList`](crate::SkipList).
//!
//! All of them walk the level-0 chain, which holds every entry in ascending
//! key order.

use std::iter::FusedIterator;

use slab::Slab;

use crate::entry::Entry;
use crate::skipnode::{NodeId, NodePool};

/// Iterator by reference over all entries, in ascending key order.
pub struct Iter<'a> {
    pub(crate) nodes: &'a NodePool,
    pub(crate) entries: &'a Slab<Entry>,
    pub(crate) cursor: Option<NodeId>,
    pub(crate) size: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?);
        self.cursor = node.next;
        self.size = self.size.saturating_sub(1);
        node.entry.map(|id| &self.entries[id])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Iterator over the entries whose key starts with a given character, in
/// ascending key order.
///
/// Created by
/// [`SkipList::entries_with_prefix_char`](crate::SkipList::entries_with_prefix_char).
/// Matching entries are contiguous on level 0, so the iterator stops at the
/// first key that does not match.
pub struct Prefix<'a> {
    pub(crate) nodes: &'a NodePool,
    pub(crate) entries: &'a Slab<Entry>,
    pub(crate) cursor: Option<NodeId>,
    pub(crate) first: char,
}

impl Prefix<'_> {
    /// The character every yielded key starts with.
    #[inline]
    #[must_use]
    pub fn first_char(&self) -> char {
        self.first
    }
}

impl<'a> Iterator for Prefix<'a> {
    type Item = &'a Entry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?);
        let entry = node.entry.map(|id| &self.entries[id])?;
        if entry.first_char() == Some(self.first) {
            self.cursor = node.next;
            Some(entry)
        } else {
            self.cursor = None;
            None
        }
    }
}

impl FusedIterator for Prefix<'_> {}

/// Consuming iterator, handing ownership of every entry to the caller in
/// ascending key order.
pub struct IntoIter {
    pub(crate) inner: std::vec::IntoIter<Entry>,
}

impl Iterator for IntoIter {
    type Item = Entry;

    #[inline]
    fn next(&mut self) -> Option<Entry> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Entry> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}
