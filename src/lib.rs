//! An ordered associative container backed by a left-leaning red-black
//! tree ([LLRB][llrb]), with logical deletion (tombstones) and a deferred
//! rehash/compaction step.
//!
//! [`Llrb`] provides the full table/associative-array surface: keyed
//! lookup, keyed insert/overwrite, keyed erasure, size/height statistics,
//! deep copy, equality, and ordered traversal (forward, reverse,
//! level-order, and a tombstone-exposing "structural" order).
//!
//! Erasing a key never frees its node — `erase` flips a liveness bit and
//! leaves the tree shape untouched. This decouples the *alive* entry count
//! from the *node* count and avoids classical LLRB deletion entirely, at
//! the cost of tombstones accumulating until [`Llrb::rehash`] rebuilds a
//! compact, tombstone-free tree from the live key sequence.
//!
//! Pretty-printers, color-coded tree dumps, and BST/LLRB integrity
//! checkers are deliberately left as external collaborators: [`Llrb`]
//! exposes read-only root/child/flag access (see [`debug`]) and all four
//! traversal flavors so such tools can be built against it, but does not
//! implement them itself.
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

pub mod debug;
mod diag;
pub mod iter;
mod llrb;
mod node;
pub mod stats;

pub use crate::llrb::Llrb;

#[cfg(test)]
mod ref_test;
