//! Module `node` defines the per-node payload and flag-bit model for the
//! [`crate::llrb::Llrb`] tree.
//!
//! A node owns exactly one key-value entry plus two child links. Besides the
//! entry it carries a single flags byte packing two independent bits: the
//! LLRB color (red/black) and the tombstone liveness (alive/dead). The two
//! bits never interact: flipping one must never clobber the other.

use std::fmt;

/// Bit 0 of the flags byte: set when the node is a tombstone.
const DEAD: u8 = 0x01;
/// Bit 1 of the flags byte: set when the node is red.
const RED: u8 = 0x02;

/// Debug glyph for a black, alive node.
pub const GLYPH_BLACK_ALIVE: char = 'B';
/// Debug glyph for a black, dead (tombstoned) node.
pub const GLYPH_BLACK_DEAD: char = 'b';
/// Debug glyph for a red, alive node.
pub const GLYPH_RED_ALIVE: char = 'R';
/// Debug glyph for a red, dead (tombstoned) node.
pub const GLYPH_RED_DEAD: char = 'r';

/// One entry in the tree: an owned key, an owned value, its color and
/// liveness bits, and its two child links.
///
/// Newly constructed nodes are red and alive (spec.md §3 Node).
pub struct Node<K, D> {
    pub(crate) key: K,
    pub(crate) value: D,
    pub(crate) flags: u8,
    pub(crate) left: Option<Box<Node<K, D>>>,
    pub(crate) right: Option<Box<Node<K, D>>>,
}

impl<K, D> Node<K, D> {
    /// Create a fresh leaf node: red, alive, no children.
    pub(crate) fn new(key: K, value: D) -> Box<Node<K, D>> {
        Box::new(Node {
            key,
            value,
            flags: RED,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.flags & RED == RED
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        !self.is_red()
    }

    #[inline]
    pub(crate) fn is_alive(&self) -> bool {
        self.flags & DEAD == 0
    }

    #[inline]
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.flags |= RED;
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.flags &= !RED;
    }

    #[inline]
    pub(crate) fn toggle_color(&mut self) {
        self.flags ^= RED;
    }

    #[inline]
    pub(crate) fn set_alive(&mut self) {
        self.flags &= !DEAD;
    }

    #[inline]
    pub(crate) fn set_dead(&mut self) {
        self.flags |= DEAD;
    }

    pub(crate) fn left_deref(&self) -> Option<&Node<K, D>> {
        self.left.as_deref()
    }

    pub(crate) fn right_deref(&self) -> Option<&Node<K, D>> {
        self.right.as_deref()
    }

    /// Treating a null child as black, does this node have a red left child?
    pub(crate) fn has_left_red_child(&self) -> bool {
        is_red(self.left_deref())
    }

    /// Treating a null child as black, does this node have a red right child?
    pub(crate) fn has_right_red_child(&self) -> bool {
        is_red(self.right_deref())
    }

    /// Debug glyph for this node's flag state.
    pub(crate) fn glyph(&self) -> char {
        match self.flags & (RED | DEAD) {
            0x00 => GLYPH_BLACK_ALIVE,
            0x01 => GLYPH_BLACK_DEAD,
            0x02 => GLYPH_RED_ALIVE,
            0x03 => GLYPH_RED_DEAD,
            _ => unreachable!(),
        }
    }
}

impl<K: Clone, D: Clone> Node<K, D> {
    /// Structural clone: a fresh node with identical key, value, and raw
    /// flag byte (color *and* tombstone preserved), recursing into children.
    pub(crate) fn deep_clone(&self) -> Box<Node<K, D>> {
        Box::new(Node {
            key: self.key.clone(),
            value: self.value.clone(),
            flags: self.flags,
            left: self.left.as_ref().map(|n| n.deep_clone()),
            right: self.right.as_ref().map(|n| n.deep_clone()),
        })
    }
}

impl<K: fmt::Debug, D: fmt::Debug> fmt::Debug for Node<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node{{ {:?}: {:?}, {} }}",
            self.key,
            self.value,
            self.glyph()
        )
    }
}

/// Treating a null child as black, is this node red?
pub(crate) fn is_red<K, D>(node: Option<&Node<K, D>>) -> bool {
    match node {
        None => false,
        Some(node) => node.is_red(),
    }
}

/// Treating a null child as black, is this node black?
pub(crate) fn is_black<K, D>(node: Option<&Node<K, D>>) -> bool {
    !is_red(node)
}
