//! Module `llrb` implements the balanced-tree engine (spec.md §4.B) and the
//! map façade built on top of it (spec.md §4.C).
//!
//! [`Llrb`] manages a single ordered map using a left-leaning red-black
//! tree with tombstoned deletes. Mutating operations either recurse down
//! to the target key and rebuild the path bottom-up with rotations and
//! color flips (`get_mut`/`put`), or walk down and flip a liveness bit in
//! place without touching tree shape (`erase`).
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::debug::NodeView;
use crate::diag;
use crate::iter::{Iter, LevelOrderIter, ReverseIter, StructuralIter};
use crate::node::{is_red, Node};
use crate::stats::Stats;

/// Llrb manages a single in-memory ordered map using a
/// [left-leaning-red-black][llrb] tree with logical deletion.
///
/// Erasing a key never frees its node: `erase` flips a liveness bit and
/// leaves tree shape untouched, so lookups, inserts and rotations never
/// have to deal with the classical (and notoriously fiddly) LLRB deletion
/// case. The tradeoff is that tombstones accumulate; call [`Llrb::rehash`]
/// to compact them away and rebuild a tombstone-free, height-bounded tree.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
pub struct Llrb<K, D> {
    name: String,
    root: Option<Box<Node<K, D>>>,
}

impl<K, D> Drop for Llrb<K, D> {
    fn drop(&mut self) {
        if let Some(root) = self.root.take() {
            drop_tree(root);
        }
    }
}

/// Iteratively free a subtree, so `Drop`/`clear` never recurse as deep as
/// the node count — only tombstones let node count outrun tree height.
fn drop_tree<K, D>(root: Box<Node<K, D>>) {
    let mut stack = vec![root];
    while let Some(mut node) = stack.pop() {
        if let Some(left) = node.left.take() {
            stack.push(left);
        }
        if let Some(right) = node.right.take() {
            stack.push(right);
        }
    }
}

/// Construct new instances of Llrb.
impl<K, D> Llrb<K, D> {
    /// Create an empty instance of Llrb, identified by `name`. Applications
    /// can choose unique names; the name plays no role in ordering or
    /// equality.
    pub fn new<S: AsRef<str>>(name: S) -> Llrb<K, D> {
        Llrb {
            name: name.as_ref().to_string(),
            root: None,
        }
    }
}

impl<K, D> Default for Llrb<K, D> {
    fn default() -> Llrb<K, D> {
        Llrb::new("")
    }
}

/// Maintenance API.
impl<K, D> Llrb<K, D> {
    /// Identify this instance.
    pub fn id(&self) -> &str {
        &self.name
    }

    /// `true` iff the tree holds no nodes at all (alive or dead).
    pub fn empty(&self) -> bool {
        self.root.is_none()
    }

    /// Count of alive entries (spec.md §3 `Size`). Walks the tree.
    pub fn size(&self) -> usize {
        Iter::new(self.root_ref()).count()
    }

    /// Count of alive and tombstoned nodes (spec.md §3 `NumNodes`). Walks
    /// the tree.
    pub fn num_nodes(&self) -> usize {
        StructuralIter::new(self.root_ref()).count()
    }

    /// Longest root-to-leaf edge path; -1 for an empty tree. Walks the
    /// tree.
    pub fn height(&self) -> i64 {
        fn go<K, D>(node: Option<&Node<K, D>>) -> i64 {
            match node {
                None => -1,
                Some(node) => 1 + go(node.left_deref()).max(go(node.right_deref())),
            }
        }
        go(self.root_ref())
    }

    /// Snapshot of size, node count and height in one walk.
    pub fn stats(&self) -> Stats {
        Stats::new::<K, D>(self.size(), self.num_nodes(), self.height())
    }

    fn root_ref(&self) -> Option<&Node<K, D>> {
        self.root.as_deref()
    }
}

/// Create/Update/Erase operations.
impl<K: Ord, D> Llrb<K, D> {
    /// Set `key` to `value`, creating the entry (or resurrecting its
    /// tombstone) if it was absent.
    pub fn put(&mut self, key: K, value: D) {
        let root = self.root.take();
        let mut root = Llrb::rinsert(root, key, value);
        root.set_black();
        self.root = Some(root);
    }

    /// Alias of [`Llrb::put`].
    pub fn insert(&mut self, key: K, value: D) {
        self.put(key, value)
    }

    /// Mark the live entry for `key` dead. No-op if absent or already
    /// dead. Never rebalances: `erase` is a plain BST descent that flips
    /// one bit.
    pub fn erase<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            cur = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => {
                    node.set_dead();
                    return;
                }
            };
        }
    }

    /// Remove every node. O(n).
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            drop_tree(root);
        }
    }

    // `rinsert(subtree, key, value) -> new_subtree_root`: recurse to the
    // key's position, overwrite-and-resurrect on a match, then repair the
    // LLRB invariants bottom-up on the way back up. Shares its repair tail
    // with `rget` verbatim (spec.md §4.B).
    fn rinsert(node: Option<Box<Node<K, D>>>, key: K, value: D) -> Box<Node<K, D>> {
        let mut node = match node {
            None => return Node::new(key, value),
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => node.left = Some(Llrb::rinsert(node.left.take(), key, value)),
            Ordering::Greater => node.right = Some(Llrb::rinsert(node.right.take(), key, value)),
            Ordering::Equal => {
                node.value = value;
                node.set_alive();
            }
        }
        Llrb::repair(node)
    }

    // `rget(subtree, key) -> new_subtree_root`: like `rinsert`, but on a
    // match it only resurrects the tombstone (if any) and never overwrites
    // the value; on a miss it allocates a default-valued live node.
    fn rget(node: Option<Box<Node<K, D>>>, key: &K) -> Box<Node<K, D>>
    where
        K: Clone,
        D: Default,
    {
        let mut node = match node {
            None => return Node::new(key.clone(), D::default()),
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => node.left = Some(Llrb::rget(node.left.take(), key)),
            Ordering::Greater => node.right = Some(Llrb::rget(node.right.take(), key)),
            Ordering::Equal => node.set_alive(),
        }
        Llrb::repair(node)
    }

    // After the recursive call returns, apply the three-step LLRB repair
    // in exactly this order (spec.md §4.B): lean a red right edge left,
    // then break up two consecutive left reds, then split a 4-node.
    fn repair(mut node: Box<Node<K, D>>) -> Box<Node<K, D>> {
        if node.has_right_red_child() && !node.has_left_red_child() {
            node = Llrb::rotate_left(node);
        }
        if node.has_left_red_child() && is_red(node.left_deref().and_then(Node::left_deref)) {
            node = Llrb::rotate_right(node);
        }
        if node.has_left_red_child() && node.has_right_red_child() {
            Llrb::flip_colors(&mut node);
        }
        node
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    (r)                 (r)  \
    //            /       \                 /     \
    //          left       x             node      xr
    //                    / \            /  \
    //                  xl   xr       left   xl
    //
    // Requires `node.right` to be red; misuse is logged and returned
    // unchanged rather than panicking (spec.md §4.B, §7).
    fn rotate_left(mut node: Box<Node<K, D>>) -> Box<Node<K, D>> {
        if !node.has_right_red_child() {
            diag::rotate_left_misuse();
            return node;
        }
        let mut x = node.right.take().unwrap();
        node.right = x.left.take();
        if node.is_red() {
            x.set_red();
        } else {
            x.set_black();
        }
        node.set_red();
        x.left = Some(node);
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //            (r)   \                   (r)  \
    //           /       \                 /      \
    //          x       right             xl      node
    //         / \                                / \
    //       xl   xr                             xr  right
    //
    // Requires `node.left` to be red; misuse is logged and returned
    // unchanged.
    fn rotate_right(mut node: Box<Node<K, D>>) -> Box<Node<K, D>> {
        if !node.has_left_red_child() {
            diag::rotate_right_misuse();
            return node;
        }
        let mut x = node.left.take().unwrap();
        node.left = x.right.take();
        if node.is_red() {
            x.set_red();
        } else {
            x.set_black();
        }
        node.set_red();
        x.right = Some(node);
        x
    }

    // Both children red -> children black, node red.
    fn flip_colors(node: &mut Node<K, D>) {
        node.left.as_mut().unwrap().set_black();
        node.right.as_mut().unwrap().set_black();
        node.set_red();
    }
}

/// `get_mut`/`retrieve`/`includes` and the traversal façade.
impl<K: Ord, D> Llrb<K, D> {
    /// Return a mutable reference to the value slot for `key`, creating a
    /// default-valued live entry (or resurrecting a tombstone) if it was
    /// absent. Equivalent to C++'s `operator[]`.
    pub fn get_mut(&mut self, key: K) -> &mut D
    where
        K: Clone,
        D: Default,
    {
        let lookup_key = key.clone();
        let root = self.root.take();
        let mut root = Llrb::rget(root, &key);
        root.set_black();
        self.root = Some(root);
        self.find_mut(&lookup_key)
            .expect("rget always leaves the key present")
    }

    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut D>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Clone and return the value of `key` iff a *live* entry exists.
    pub fn retrieve<Q>(&self, key: &Q) -> Option<D>
    where
        K: Borrow<Q>,
        D: Clone,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root_ref();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cur = node.left_deref(),
                Ordering::Greater => cur = node.right_deref(),
                Ordering::Equal => {
                    return if node.is_alive() {
                        Some(node.value.clone())
                    } else {
                        None
                    };
                }
            }
        }
        None
    }

    /// Forward in-order iterator positioned at the *live* entry for `key`,
    /// or the empty (`end`) iterator if no live entry exists. Advancing the
    /// returned iterator continues in ascending key order past `key`, same
    /// as any other [`Iter`].
    ///
    /// Subject to the same invalidation contract as [`Llrb::iter`]: `clear`,
    /// `rehash`, or any `get_mut`/`put` that triggers a rotation invalidates
    /// it.
    pub fn includes<Q>(&self, key: &Q) -> Iter<'_, K, D>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut stack = vec![];
        let mut cur = self.root_ref();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    stack.push(node);
                    cur = node.left_deref();
                }
                Ordering::Greater => cur = node.right_deref(),
                Ordering::Equal => {
                    if node.is_alive() {
                        stack.push(node);
                    } else {
                        stack.clear();
                    }
                    break;
                }
            }
        }
        Iter::from_stack(stack)
    }

    /// Forward in-order iterator over live entries, ascending by key.
    ///
    /// Invalidated by `clear`, `rehash`, and any `get_mut`/`put` that
    /// triggers a rotation; `erase` of the iterator's current key does not
    /// invalidate it (the iterator keeps referencing the now-dead node and
    /// skips it on the next advance). Advancing an invalidated iterator is
    /// undefined (spec.md §4.D).
    pub fn iter(&self) -> Iter<'_, K, D> {
        Iter::new(self.root_ref())
    }

    /// Reverse in-order iterator over live entries, descending by key. Same
    /// invalidation contract as [`Llrb::iter`].
    pub fn iter_rev(&self) -> ReverseIter<'_, K, D> {
        ReverseIter::new(self.root_ref())
    }

    /// Level-order (breadth-first) iterator over every node, alive or
    /// tombstoned. Intended for external structure-rendering collaborators
    /// (spec.md §4.E). Same invalidation contract as [`Llrb::iter`].
    pub fn iter_levelorder(&self) -> LevelOrderIter<'_, K, D> {
        LevelOrderIter::new(self.root_ref())
    }

    /// In-order iterator over every node, alive or tombstoned. Intended
    /// for external integrity-checking collaborators (spec.md §4.E). Same
    /// invalidation contract as [`Llrb::iter`].
    pub fn iter_structural(&self) -> StructuralIter<'_, K, D> {
        StructuralIter::new(self.root_ref())
    }

    /// Read-only root view for external printer/checker collaborators
    /// (spec.md §4.E/§6).
    pub fn root_view(&self) -> Option<NodeView<'_, K, D>> {
        self.root_ref().map(NodeView::new)
    }
}

/// Rehash: rebuild a compact, tombstone-free tree from the current live
/// sequence. O(n log n); no-op on an empty tree.
impl<K: Ord + Clone, D: Clone> Llrb<K, D> {
    pub fn rehash(&mut self) {
        let mut fresh: Option<Box<Node<K, D>>> = None;
        for (key, value) in self.iter() {
            let mut root = Llrb::rinsert(fresh.take(), (*key).clone(), (*value).clone());
            root.set_black();
            fresh = Some(root);
        }
        self.root = fresh;
    }
}

/// Deep copy: a fresh node per source node, with identical key, value and
/// raw flag byte (color *and* tombstone preserved).
impl<K: Clone, D: Clone> Clone for Llrb<K, D> {
    fn clone(&self) -> Llrb<K, D> {
        Llrb {
            name: self.name.clone(),
            root: self.root.as_ref().map(|n| n.deep_clone()),
        }
    }
}

/// Two maps are equal iff their live in-order sequences are identical and
/// both iterators exhaust simultaneously.
impl<K: Ord, D: PartialEq> PartialEq for Llrb<K, D> {
    fn eq(&self, other: &Llrb<K, D>) -> bool {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x.0 == y.0 && x.1 == y.1 => continue,
                _ => return false,
            }
        }
    }
}

impl<K: Ord, D: Eq> Eq for Llrb<K, D> {}

impl<K: fmt::Debug + Ord, D: fmt::Debug> fmt::Debug for Llrb<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Llrb")
            .field("name", &self.name)
            .field("size", &self.size())
            .field("num_nodes", &self.num_nodes())
            .field("height", &self.height())
            .finish()
    }
}

