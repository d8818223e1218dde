//! An ordered string dictionary backed by a skiplist.
//!
//! A skiplist stores its entries in a sorted linked list (level 0) and
//! stacks sparser "express" lists on top of it, so that lookups, insertions
//! and removals take `O(log(n))` time on average:
//!
//! ```text
//! <head> ------------------------------> [date]
//! <head> ----------> [banana] ---------> [date]
//! <head> --> [apple] --> [banana] --> [cherry] --> [date] --> [elder]
//! ```
//!
//! Every entry appears on level 0; the number of levels it reaches above
//! that is drawn from a [`LevelGenerator`], by default a fair coin
//! ([`Geometric`]). Each level starts with a header holding no entry.
//!
//! Keys are unique non-empty strings compared in byte order, and both keys
//! and values are bounded in length (see [`Limits`]).
//!
//! ```
//! use skipdict::{Config, SkipList};
//!
//! let mut list = SkipList::with_config(Config::default().max_height(16))?;
//! list.insert("apple", "fruit")?;
//! list.insert("avocado", "also fruit")?;
//! list.insert("banana", "veg?")?;
//!
//! let a: Vec<_> = list.entries_with_prefix_char('a')?.map(|e| e.key()).collect();
//! assert_eq!(a, ["apple", "avocado"]);
//! list.validate().expect("structure is sound");
//! # Ok::<(), skipdict::SkipListError>(())
//! ```
//!
//! The structure is single-threaded: it is `Send` and `Sync`, but concurrent
//! mutation requires external locking.

pub mod config;
pub mod entry;
pub mod level_generator;
pub mod reader;
pub mod skiplist;
mod skipnode;

#[cfg(test)]
mod proptests;

pub use crate::config::Config;
pub use crate::entry::{Entry, Limits};
pub use crate::level_generator::{Geometric, GeometricError, LevelGenerator};
pub use crate::reader::{EntryReader, Overflow, ReadError};
pub use crate::skiplist::{
    InsertError, IntoIter, Iter, Prefix, SkipList, SkipListError, ValidationError,
};
