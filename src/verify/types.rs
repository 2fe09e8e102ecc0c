// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Verification results.

use serde::Serialize;
use std::fmt;

/// Error type for invariant violations.
///
/// `position` fields count nodes from the head, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `head`, `tail` and `count` disagree about emptiness.
    EmptinessMismatch {
        head_present: bool,
        tail_present: bool,
        count: usize,
    },
    /// A link points outside the arena.
    DanglingLink { position: usize },
    /// A reclaimed slot is still reachable from `head`.
    FreeSlotReachable { position: usize },
    /// Walking from `head` visits more or fewer nodes than `count`.
    CountMismatch { claimed: usize, reachable: usize },
    /// The last reachable node is not `tail`.
    TailNotLast { position: usize },
    /// A `None` is stored although the policy forbids it.
    NullStored { position: usize },
    /// Live plus free slots do not add up to the arena size.
    LeakedSlots {
        slots: usize,
        live: usize,
        free: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptinessMismatch {
                head_present,
                tail_present,
                count,
            } => {
                write!(
                    f,
                    "head present={} tail present={} but count={}",
                    head_present, tail_present, count
                )
            }
            InvariantError::DanglingLink { position } => {
                write!(f, "link at position {} points outside the arena", position)
            }
            InvariantError::FreeSlotReachable { position } => {
                write!(f, "reclaimed slot reachable at position {}", position)
            }
            InvariantError::CountMismatch { claimed, reachable } => {
                write!(f, "count {} but {} nodes reachable", claimed, reachable)
            }
            InvariantError::TailNotLast { position } => {
                write!(f, "chain ends at position {} but that node is not tail", position)
            }
            InvariantError::NullStored { position } => {
                write!(f, "null stored at position {} in a non-nullable sequence", position)
            }
            InvariantError::LeakedSlots { slots, live, free } => {
                write!(f, "arena has {} slots but {} live + {} free", slots, live, free)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Summary of a successful verification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Nodes reachable from `head` (equal to `len()`).
    pub length: usize,
    /// Slots allocated in the arena, live or free.
    pub arena_slots: usize,
    /// Slots waiting on the free list.
    pub reclaimed_slots: usize,
    /// Structural generation at the time of the check.
    pub modification_count: u64,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "well-formed: {} elements, {} slots ({} reclaimed), generation {}",
            self.length, self.arena_slots, self.reclaimed_slots, self.modification_count
        )
    }
}
