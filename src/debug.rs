//! Module `debug` is the printer/checker collaborator interface (spec.md
//! §4.E/§6): enough read-only primitives for an external, out-of-core
//! renderer or integrity checker to walk the tree without reaching into
//! its private fields.
//!
//! Pretty-printers, the terminal color/escape library, and integrity
//! checkers themselves are explicitly out of scope (spec.md §1); this
//! module only defines the contract they would be built against.

use crate::node::{
    Node, GLYPH_BLACK_ALIVE, GLYPH_BLACK_DEAD, GLYPH_RED_ALIVE, GLYPH_RED_DEAD,
};

/// A read-only, borrowed view onto one node, handed to external
/// collaborators. Mirrors what `examples/bnclabs-rdms/src/llrb_util.rs`'s
/// `Stats`/printer collaborators would need: the key/value, the flag
/// glyph, and the two child views.
pub struct NodeView<'a, K, D> {
    node: &'a Node<K, D>,
}

impl<'a, K, D> NodeView<'a, K, D> {
    pub(crate) fn new(node: &'a Node<K, D>) -> NodeView<'a, K, D> {
        NodeView { node }
    }

    /// This node's key.
    pub fn key(&self) -> &K {
        &self.node.key
    }

    /// This node's value.
    pub fn value(&self) -> &D {
        &self.node.value
    }

    /// Whether this node is red (vs. black).
    pub fn is_red(&self) -> bool {
        self.node.is_red()
    }

    /// Whether this node is a tombstone.
    pub fn is_dead(&self) -> bool {
        self.node.is_dead()
    }

    /// Debug glyph: one of `{B, b, R, r}`, see [`Glyph`].
    pub fn glyph(&self) -> char {
        self.node.glyph()
    }

    /// Borrowed view of the left child, if any.
    pub fn left(&self) -> Option<NodeView<'a, K, D>> {
        self.node.left_deref().map(NodeView::new)
    }

    /// Borrowed view of the right child, if any.
    pub fn right(&self) -> Option<NodeView<'a, K, D>> {
        self.node.right_deref().map(NodeView::new)
    }
}

/// The four flag-byte glyphs a black-and-white renderer would print, named
/// per spec.md §3's `{B, b, R, r}` mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// `B`: black, alive.
    BlackAlive,
    /// `b`: black, dead (tombstone).
    BlackDead,
    /// `R`: red, alive.
    RedAlive,
    /// `r`: red, dead (tombstone).
    RedDead,
}

impl Glyph {
    /// Classify a node's flag state into its debug glyph.
    pub fn of<K, D>(view: &NodeView<'_, K, D>) -> Glyph {
        match view.glyph() {
            GLYPH_BLACK_ALIVE => Glyph::BlackAlive,
            GLYPH_BLACK_DEAD => Glyph::BlackDead,
            GLYPH_RED_ALIVE => Glyph::RedAlive,
            GLYPH_RED_DEAD => Glyph::RedDead,
            other => unreachable!("unknown node glyph {:?}", other),
        }
    }

    /// The single-character rendering a black-and-white printer would use.
    pub fn as_char(&self) -> char {
        match self {
            Glyph::BlackAlive => GLYPH_BLACK_ALIVE,
            Glyph::BlackDead => GLYPH_BLACK_DEAD,
            Glyph::RedAlive => GLYPH_RED_ALIVE,
            Glyph::RedDead => GLYPH_RED_DEAD,
        }
    }
}

/// The four terminal render styles a color printer would map to ANSI
/// escapes. The escapes themselves are an external collaborator's concern
/// (spec.md §6) — this enum is the contract a renderer is built against,
/// not a rendering implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Style for a black, alive node.
    BlackAlive,
    /// Style for a black, dead (tombstoned) node.
    BlackDead,
    /// Style for a red, alive node.
    RedAlive,
    /// Style for a red, dead (tombstoned) node.
    RedDead,
}

impl From<Glyph> for Style {
    fn from(glyph: Glyph) -> Style {
        match glyph {
            Glyph::BlackAlive => Style::BlackAlive,
            Glyph::BlackDead => Style::BlackDead,
            Glyph::RedAlive => Style::RedAlive,
            Glyph::RedDead => Style::RedDead,
        }
    }
}
