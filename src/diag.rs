//! Module `diag` is the diagnostic stream collaborator referenced by
//! spec.md §6/§7: an output sink for rotation misuse and allocation
//! failure messages.
//!
//! The teacher has no `log`/`tracing` dependency; its own diagnostics are
//! ad-hoc `println!` trace lines left in `llrb.rs`/`core.rs`. This module
//! keeps that idiom rather than pulling in a logging framework the teacher
//! never reached for, and emits exactly the literal strings spec.md §6
//! specifies so a test can assert on stderr if it needs to.

/// Logged when `rotate_left` is invoked on a node whose right child is not
/// red. The engine never does this itself; reaching here means a caller
/// broke the repair invariant.
pub(crate) fn rotate_left_misuse() {
    eprintln!(" ** RotateLeft called with black right child");
}

/// Logged when `rotate_right` is invoked on a node whose left child is not
/// red.
pub(crate) fn rotate_right_misuse() {
    eprintln!(" ** RotateRight called with black left child");
}

/// Logged on node allocation failure. `name` identifies the component that
/// attempted the allocation (e.g. `"Llrb::get"`, `"Llrb::rehash"`).
#[allow(dead_code)]
pub(crate) fn alloc_failure(name: &str) {
    eprintln!("** {} memory allocation failure", name);
}
