//! Hand-written reference model used to cross-check randomized operation
//! sequences against [`crate::Llrb`]. Slimmed down from the teacher's
//! `RefNodes` (`examples/bnclabs-rdms/src/ref_test.rs`), which tracked a
//! full per-key version chain for LSM/MVCC; this spec has no version
//! chain, only one slot per key plus a liveness bit, so the model is just
//! a `Vec` indexed by key.

#[derive(Clone, Default)]
pub(crate) struct RefMap {
    // entries[key] = Some((value, alive)) once a key has ever been put.
    entries: Vec<Option<(i64, bool)>>,
}

impl RefMap {
    pub(crate) fn new(capacity: usize) -> RefMap {
        RefMap {
            entries: vec![None; capacity],
        }
    }

    pub(crate) fn put(&mut self, key: i64, value: i64) {
        let off = key as usize;
        self.entries[off] = Some((value, true));
    }

    pub(crate) fn erase(&mut self, key: i64) {
        let off = key as usize;
        if let Some(entry) = self.entries[off].as_mut() {
            entry.1 = false;
        }
    }

    pub(crate) fn retrieve(&self, key: i64) -> Option<i64> {
        match self.entries.get(key as usize).copied().flatten() {
            Some((value, true)) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn includes(&self, key: i64) -> bool {
        matches!(self.entries.get(key as usize), Some(Some((_, true))))
    }

    /// Live entries in ascending key order (the vector is already indexed
    /// by key, so this is a straight filter).
    pub(crate) fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.entries.iter().enumerate().filter_map(|(key, slot)| {
            slot.and_then(|(value, alive)| alive.then_some((key as i64, value)))
        })
    }

    pub(crate) fn size(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn num_nodes(&self) -> usize {
        self.entries.iter().filter(|slot| slot.is_some()).count()
    }
}
