// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full structural check of a sequence.

use crate::sequence::LinkedSequence;

use super::types::{InvariantError, VerificationReport};

/// Check every structural invariant of `seq`.
///
/// The walk is bounded by `count + 1` steps and uses checked arena lookups,
/// so cycles and dangling ids are reported instead of looping or panicking.
pub fn verify_sequence<T>(seq: &LinkedSequence<T>) -> Result<VerificationReport, InvariantError> {
    let arena = seq.arena();
    let count = seq.len();
    let head = seq.head_id();
    let tail = seq.tail_id();

    // INVARIANT: head absent ⇔ tail absent ⇔ count == 0
    if head.is_none() != tail.is_none() || head.is_none() != (count == 0) {
        return Err(InvariantError::EmptinessMismatch {
            head_present: head.is_some(),
            tail_present: tail.is_some(),
            count,
        });
    }

    let mut free = vec![false; arena.slot_count()];
    for id in arena.free_ids() {
        match free.get_mut(id.index()) {
            Some(flag) => *flag = true,
            None => {
                return Err(InvariantError::LeakedSlots {
                    slots: arena.slot_count(),
                    live: count,
                    free: arena.free_ids().len(),
                })
            }
        }
    }

    let mut reachable = 0;
    let mut last = None;
    let mut current = head;
    while let Some(id) = current {
        let position = reachable;
        if position >= count {
            // INVARIANT: exactly `count` nodes are reachable
            return Err(InvariantError::CountMismatch {
                claimed: count,
                reachable: position + 1,
            });
        }
        let node = arena
            .get(id)
            .ok_or(InvariantError::DanglingLink { position })?;
        if free[id.index()] {
            return Err(InvariantError::FreeSlotReachable { position });
        }
        // INVARIANT: no value violating the null policy is ever stored
        if node.value.is_none() && !seq.allows_null() {
            return Err(InvariantError::NullStored { position });
        }
        reachable += 1;
        last = Some(id);
        current = node.next;
    }

    if reachable != count {
        return Err(InvariantError::CountMismatch {
            claimed: count,
            reachable,
        });
    }
    // INVARIANT: the walk ends at tail, whose successor is none
    if last != tail {
        return Err(InvariantError::TailNotLast {
            position: reachable.saturating_sub(1),
        });
    }

    let reclaimed = arena.free_ids().len();
    if arena.slot_count() != count + reclaimed {
        return Err(InvariantError::LeakedSlots {
            slots: arena.slot_count(),
            live: count,
            free: reclaimed,
        });
    }

    Ok(VerificationReport {
        length: count,
        arena_slots: arena.slot_count(),
        reclaimed_slots: reclaimed,
        modification_count: seq.modification_count(),
    })
}
