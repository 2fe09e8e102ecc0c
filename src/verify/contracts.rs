// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for structural operations.
//!
//! Debug-mode assertions that a structural change left the sequence in a
//! consistent state. These contracts:
//!
//! 1. Are **zero-cost in release builds** (the checks are behind
//!    `cfg!(debug_assertions)`)
//! 2. Provide **early failure detection** during development: the panic names
//!    the broken invariant right at the operation that broke it
//! 3. Stay **O(1) on the per-element paths**. `append`, `prepend`, splices and
//!    unlinks only check the ends of the chain; the full walk runs where the
//!    operation is O(n) anyway (`clear`) and through `verify()`.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every structural operation in `sequence.rs` ends with a call into this
//! module. Removing one hides bookkeeping bugs until much later, usually as a
//! wrong `get` far away from the faulty `remove`.

use crate::node::NodeId;
use crate::sequence::LinkedSequence;

/// Check the invariants that can be read off the ends of the chain.
///
/// - `head.is_none() == tail.is_none() == (count == 0)`
/// - `tail` has no successor
/// - a one-element sequence has `head == tail`
///
/// # Panics (debug builds only)
/// Panics with the violated invariant.
#[inline]
pub fn check_ends_consistent<T>(seq: &LinkedSequence<T>) {
    if !cfg!(debug_assertions) {
        return;
    }
    let (head, tail, count) = (seq.head_id(), seq.tail_id(), seq.len());

    if head.is_none() != tail.is_none() || head.is_none() != (count == 0) {
        panic!(
            "Contract violation: Sequence.Emptiness - head present={} tail present={} count={}",
            head.is_some(),
            tail.is_some(),
            count
        );
    }
    if let Some(tail) = tail {
        match seq.arena().get(tail) {
            Some(node) if node.next.is_none() => {}
            Some(_) => panic!("Contract violation: Sequence.TailLast - tail has a successor"),
            None => panic!("Contract violation: Sequence.TailLast - tail outside the arena"),
        }
    }
    if count == 1 && head != tail {
        panic!("Contract violation: Sequence.SingleNode - count is 1 but head != tail");
    }
}

/// Check that `seq` satisfies every structural invariant. O(n).
///
/// # Panics (debug builds only)
/// Panics with the violated invariant if [`LinkedSequence::verify`] fails.
#[inline]
pub fn check_sequence_well_formed<T>(seq: &LinkedSequence<T>) {
    if cfg!(debug_assertions) {
        if let Err(err) = seq.verify() {
            panic!("Contract violation: Sequence.WellFormed - {}", err);
        }
    }
}

/// Node reached after walking `steps` links from the head.
///
/// Callers have already checked `steps < count`, so a short chain means
/// `count` overstates the chain and the sequence is corrupt.
///
/// # Panics
/// Panics if the chain ended early. Not a caller error, so never an `Err`.
#[inline]
pub(crate) fn reached(node: Option<NodeId>, steps: usize, count: usize) -> NodeId {
    match node {
        Some(id) => id,
        None => panic!(
            "Contract violation: Sequence.ChainLength - chain ended before {} steps (count={})",
            steps, count
        ),
    }
}
