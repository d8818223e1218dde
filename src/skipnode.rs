//! Tower nodes and the arena that owns them.
//!
//! Nodes refer to one another (and to the entry they represent) by index
//! rather than by pointer. The [`NodePool`] exclusively owns every node; an
//! entry is owned by the entry arena of the skiplist and shared by all the
//! cells of its tower through its [`EntryId`].

use slab::Slab;
use thiserror::Error;

/// Index of a [`SkipNode`] within a [`NodePool`].
pub(crate) type NodeId = usize;

/// Index of an [`Entry`](crate::Entry) within the entry arena.
pub(crate) type EntryId = usize;

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// One cell of the skiplist.
///
/// Cells holding the same entry at different levels form a vertical tower
/// linked through `down`; cells on the same level form an ordered chain
/// through `next`. The first cell of every level is a header which holds no
/// entry and precedes everything else on that level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SkipNode {
    // `None` only for headers.
    pub entry: Option<EntryId>,
    // Same-level successor.
    pub next: Option<NodeId>,
    // The cell directly below, holding the same entry (or the header below
    // for headers). `None` on level 0.
    pub down: Option<NodeId>,
}

impl SkipNode {
    /// A header cell sitting on top of `down`.
    #[inline]
    pub fn header(down: Option<NodeId>) -> Self {
        SkipNode {
            entry: None,
            next: None,
            down,
        }
    }

    /// A tower cell for `entry`, spliced in front of `next`.
    #[inline]
    pub fn tower(entry: EntryId, next: Option<NodeId>, down: Option<NodeId>) -> Self {
        SkipNode {
            entry: Some(entry),
            next,
            down,
        }
    }

    /// Returns `true` if the node is a header.
    #[inline]
    pub fn is_header(&self) -> bool {
        self.entry.is_none()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// NodePool
// ////////////////////////////////////////////////////////////////////////////

/// The node pool ran out of room for another node.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("node pool exhausted at {limit} nodes.")]
pub(crate) struct AllocError {
    pub limit: usize,
}

/// Arena owning every [`SkipNode`] of a skiplist.
///
/// The pool may be given a budget, in which case allocations beyond it fail
/// with [`AllocError`] instead of growing the arena.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodePool {
    nodes: Slab<SkipNode>,
    limit: Option<usize>,
}

impl NodePool {
    pub fn new(limit: Option<usize>) -> Self {
        NodePool {
            nodes: Slab::new(),
            limit,
        }
    }

    /// Store `node`, returning its index.
    #[inline]
    pub fn alloc(&mut self, node: SkipNode) -> Result<NodeId, AllocError> {
        if let Some(limit) = self.limit.filter(|&limit| self.nodes.len() >= limit) {
            return Err(AllocError { limit });
        }
        Ok(self.nodes.insert(node))
    }

    /// Release the node at `id`, returning it.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not occupied, which means a node was freed twice.
    #[inline]
    pub fn free(&mut self, id: NodeId) -> SkipNode {
        self.nodes.remove(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SkipNode {
        &self.nodes[id]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SkipNode {
        &mut self.nodes[id]
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Number of live nodes, headers included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Iterate over the chain starting at (and including) `start`.
    #[inline]
    pub fn chain(&self, start: NodeId) -> Chain<'_> {
        Chain {
            pool: self,
            cursor: Some(start),
        }
    }
}

/// Iterator over the cells of one level, following `next` links.
pub(crate) struct Chain<'a> {
    pool: &'a NodePool,
    cursor: Option<NodeId>,
}

impl Iterator for Chain<'_> {
    type Item = (NodeId, SkipNode);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = *self.pool.get(id);
        self.cursor = node.next;
        Some((id, node))
    }
}
