// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by sequence and cursor operations.
//!
//! Every variant is raised before any structural change happens, so a caller
//! that gets an `Err` back holds a sequence exactly as it was before the call.

use std::fmt;

/// Error type for rejected sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the operation's valid range (`[0, count)` for access,
    /// `[0, count]` for insertion).
    IndexOutOfBounds { index: usize, count: usize },
    /// `None` offered to a sequence that does not admit it.
    NullNotAllowed,
    /// A required collection argument was absent.
    NullCollection,
    /// Cursor advanced past the last element.
    Exhausted,
    /// Sequence was structurally changed behind the cursor's back.
    ConcurrentModification { expected: u64, actual: u64 },
    /// Cursor remove without a preceding `next`.
    IllegalCursorState,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, count } => {
                write!(f, "Index: {}, Size: {}", index, count)
            }
            ListError::NullNotAllowed => write!(f, "sequence does not allow null values"),
            ListError::NullCollection => write!(f, "collection argument must not be null"),
            ListError::Exhausted => write!(f, "no more elements"),
            ListError::ConcurrentModification { expected, actual } => {
                write!(
                    f,
                    "sequence modified during iteration (expected generation {}, found {})",
                    expected, actual
                )
            }
            ListError::IllegalCursorState => {
                write!(f, "remove requires a preceding call to next")
            }
        }
    }
}

impl std::error::Error for ListError {}
