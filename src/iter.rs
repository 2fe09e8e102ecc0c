// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Traversal: borrowing and owning iterators, plus the fail-fast cursor.
//!
//! [`Iter`] borrows the sequence, so the borrow checker already rules out
//! mutation while it is alive. [`Cursor`] holds no borrow at all; it is a
//! position (node ids) plus the modification count it expects, and every call
//! takes the sequence explicitly. That is what lets it remove the element it
//! just returned, and it is also why it has to detect foreign changes at
//! runtime.
//!
//! # Cursor states
//!
//! ```text
//!            next()               next()                    next()
//!  [before] ───────▶ [on a] ─────────────▶ [on b] ... ───▶ [after last]
//!                      │  ▲                                      │
//!              remove()│  │next()                          next()│
//!                      ▼  │                                      ▼
//!                   [gap after prev]                         Exhausted
//! ```
//!
//! - `next` on an exhausted cursor: [`ListError::Exhausted`]
//! - `remove` in `[before]` or `[gap]`: [`ListError::IllegalCursorState`]
//! - any call after a structural change not made through this cursor:
//!   [`ListError::ConcurrentModification`]

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::ListError;
use crate::node::NodeId;
use crate::sequence::LinkedSequence;

/// Borrowing iterator, head to tail. Yields `None` for stored nulls.
pub struct Iter<'a, T> {
    seq: &'a LinkedSequence<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(seq: &'a LinkedSequence<T>) -> Self {
        Self {
            seq,
            next: seq.head_id(),
            remaining: seq.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.seq.arena().node(id);
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator. Unlinks each node as it is yielded.
pub struct IntoIter<T> {
    seq: LinkedSequence<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(seq: LinkedSequence<T>) -> Self {
        Self { seq }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Detached, fail-fast position in a sequence.
///
/// Obtained from [`LinkedSequence::cursor`]. Holds node ids, never the nodes
/// themselves, and is bound to the sequence that created it.
///
/// ```
/// use linkseq::LinkedSequence;
///
/// let mut seq: LinkedSequence<i32> = (1..=4).collect();
/// let mut cursor = seq.cursor();
/// while cursor.has_next() {
///     if cursor.next(&seq).unwrap() == Some(&2) {
///         cursor.remove(&mut seq).unwrap();
///     }
/// }
/// assert_eq!(seq.to_string(), "LinkedSequence{1, 3, 4}");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    owner: u64,
    expected: u64,
    /// Node the next call to `next` returns.
    next: Option<NodeId>,
    /// Live node directly before `next`.
    trail: Option<NodeId>,
    /// Node most recently returned, until it is removed.
    last: Option<NodeId>,
    /// Predecessor of `last` at the time it was returned.
    before_last: Option<NodeId>,
}

impl Cursor {
    pub(crate) fn new<T>(seq: &LinkedSequence<T>) -> Self {
        Self {
            owner: seq.owner(),
            expected: seq.modification_count(),
            next: seq.head_id(),
            trail: None,
            last: None,
            before_last: None,
        }
    }

    /// `true` while elements remain ahead of the cursor.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Return the element under the cursor and step past it.
    pub fn next<'a, T>(&mut self, seq: &'a LinkedSequence<T>) -> Result<Option<&'a T>, ListError> {
        self.check_generation(seq)?;
        let id = self.next.ok_or(ListError::Exhausted)?;
        let node = seq.arena().node(id);

        self.before_last = self.trail;
        self.last = Some(id);
        self.trail = Some(id);
        // Successor captured before anything could detach `id`.
        self.next = node.next;
        Ok(node.value.as_ref())
    }

    /// Remove the element most recently returned by [`Cursor::next`].
    ///
    /// Goes through the same unlink path as [`LinkedSequence::remove`], so
    /// head, middle and tail removals repair the sequence identically.
    pub fn remove<T>(&mut self, seq: &mut LinkedSequence<T>) -> Result<Option<T>, ListError> {
        self.check_generation(seq)?;
        let target = self.last.take().ok_or(ListError::IllegalCursorState)?;

        let value = seq.unlink_after(self.before_last, target);
        self.trail = self.before_last;
        self.expected = seq.modification_count();
        trace!(count = seq.len(), "removed at cursor");
        Ok(value)
    }

    fn check_generation<T>(&self, seq: &LinkedSequence<T>) -> Result<(), ListError> {
        let actual = seq.modification_count();
        if seq.owner() != self.owner || actual != self.expected {
            debug!(
                expected = self.expected,
                actual,
                foreign = seq.owner() != self.owner,
                "stale cursor"
            );
            return Err(ListError::ConcurrentModification {
                expected: self.expected,
                actual,
            });
        }
        Ok(())
    }
}
