// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The singly-linked sequence and its structural operations.
//!
//! A sequence owns a chain of nodes in a [`NodeArena`], and tracks `head`,
//! `tail`, and `count` on top of it. Every mutating call follows the same
//! three steps:
//!
//! 1. Ask the [`BoundaryPolicy`] whether the call is admissible. Nothing has
//!    changed yet, so an `Err` leaves the sequence untouched.
//! 2. Do the structural work. Nodes only leave the chain through `unlink`,
//!    whatever the removal path.
//! 3. Restore `head`/`tail`/`count` and bump the modification count that
//!    cursors check against.
//!
//! ```text
//!   head                         tail
//!    │                            │
//!    ▼                            ▼
//!  ┌───┬─┐   ┌───┬─┐   ┌───┬─┐   ┌───┬─┐
//!  │ 1 │●┼──▶│ 9 │●┼──▶│ ∅ │●┼──▶│ 7 │∅│      count = 4
//!  └───┴─┘   └───┴─┘   └───┴─┘   └───┴─┘
//! ```
//!
//! # Invariants
//!
//! `verify()` checks all of these. In debug builds every structural change
//! re-checks the ones readable from the ends of the chain in O(1), and `clear`
//! re-runs the full walk.
//!
//! - `head.is_none() == tail.is_none() == (count == 0)`
//! - Following `next` from `head` visits exactly `count` nodes and ends at `tail`
//! - `tail` has no successor
//! - No `None` is stored when the policy forbids it
//!
//! # Complexity
//!
//! | Operation             | Cost                          |
//! |-----------------------|-------------------------------|
//! | `append` / `prepend`  | O(1)                          |
//! | `insert_at`           | O(index)                      |
//! | `get` / `set`         | O(index), O(1) for last index |
//! | `remove`, `contains`  | O(n)                          |
//! | `clear`               | O(n)                          |

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::config::SequenceConfig;
use crate::error::ListError;
use crate::iter::{Cursor, IntoIter, Iter};
use crate::node::{NodeArena, NodeId};
use crate::policy::BoundaryPolicy;
use crate::verify::{self, contracts, InvariantError, VerificationReport};

/// Name used as the prefix of the `Display` rendering.
const TYPE_NAME: &str = "LinkedSequence";

/// Source of per-sequence identities, so a cursor can tell which sequence it
/// was created from.
static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

fn fresh_owner() -> u64 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// Singly-linked, index-addressable sequence.
///
/// Elements are stored as `Option<T>`: `None` is the absent value, admitted
/// only when the sequence was built with a nullable policy. Value-taking
/// methods accept `impl Into<Option<T>>`, so both `seq.append(3)` and
/// `seq.append(None)` work.
///
/// # Example
///
/// ```
/// use linkseq::LinkedSequence;
///
/// let mut seq: LinkedSequence<i32> = LinkedSequence::new();
/// seq.append(1).unwrap();
/// seq.append(3).unwrap();
/// seq.insert_at(2, 1).unwrap();
///
/// assert_eq!(seq.get(1), Ok(Some(&2)));
/// assert_eq!(seq.to_string(), "LinkedSequence{1, 2, 3}");
/// ```
pub struct LinkedSequence<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    count: usize,
    policy: BoundaryPolicy,
    modifications: u64,
    owner: u64,
}

impl<T> LinkedSequence<T> {
    /// Empty sequence that admits `None` elements.
    pub fn new() -> Self {
        Self::with_policy(BoundaryPolicy::default())
    }

    /// Empty sequence that rejects `None` elements.
    pub fn non_nullable() -> Self {
        Self::with_config(SequenceConfig::non_nullable())
    }

    pub fn with_config(config: SequenceConfig) -> Self {
        Self::with_policy(BoundaryPolicy::from_config(&config))
    }

    /// Empty sequence guarded by the given policy.
    pub fn with_policy(policy: BoundaryPolicy) -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            count: 0,
            policy,
            modifications: 0,
            owner: fresh_owner(),
        }
    }

    pub fn policy(&self) -> &BoundaryPolicy {
        &self.policy
    }

    #[inline]
    pub fn allows_null(&self) -> bool {
        self.policy.allows_null()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Structural generation. Bumped by every change to `count` or topology;
    /// `set` leaves it alone.
    #[inline]
    pub fn modification_count(&self) -> u64 {
        self.modifications
    }

    // ========================================================================
    // DETACHMENT
    // ========================================================================

    /// Detach `id` from the chain: clear its value and successor, return the
    /// successor it had (and the value, so removal paths can hand it back).
    ///
    /// Touches neither `head`, `tail` nor `count`. Callers restore those.
    fn unlink(&mut self, id: NodeId) -> (Option<NodeId>, Option<T>) {
        let detached = self.arena.node_mut(id).detach();
        self.arena.release(id);
        detached
    }

    /// Unlink `target`, whose predecessor is `prev` (`None` when `target` is
    /// the head), and repair `head`/`tail`/`count` around the gap.
    ///
    /// This is the single removal path shared by `remove`, cursor removal and
    /// the owning iterator.
    pub(crate) fn unlink_after(&mut self, prev: Option<NodeId>, target: NodeId) -> Option<T> {
        let (next, value) = self.unlink(target);
        match prev {
            None => self.head = next,
            Some(prev) => self.arena.node_mut(prev).next = next,
        }
        // INVARIANT: tail is the last reachable node. If it just left, its
        // predecessor (or nothing, for a one-node chain) takes over.
        if self.tail == Some(target) {
            self.tail = prev;
        }
        self.count -= 1;
        self.modifications += 1;
        contracts::check_ends_consistent(self);
        value
    }

    // ========================================================================
    // INSERTION
    // ========================================================================

    /// Append at the tail. O(1).
    pub fn append(&mut self, value: impl Into<Option<T>>) -> Result<bool, ListError> {
        let value = value.into();
        self.policy.check_null_admission(value.as_ref())?;
        self.link_last(value);
        Ok(true)
    }

    /// Insert before the current head. O(1).
    pub fn prepend(&mut self, value: impl Into<Option<T>>) -> Result<bool, ListError> {
        let value = value.into();
        self.policy.check_null_admission(value.as_ref())?;
        self.link_first(value);
        Ok(true)
    }

    /// Insert so that the new element sits at `index`; everything previously
    /// at `index` or later shifts one position right.
    pub fn insert_at(&mut self, value: impl Into<Option<T>>, index: usize) -> Result<bool, ListError> {
        let value = value.into();
        self.policy.check_null_admission(value.as_ref())?;
        self.policy.check_insertable(index, self.count)?;

        if index == 0 {
            self.link_first(value);
            return Ok(true);
        }
        if index == self.count {
            self.link_last(value);
            return Ok(true);
        }

        let prev = contracts::reached(self.walk(index - 1), index - 1, self.count);
        let next = self.arena.node(prev).next;
        let id = self.arena.alloc(value, next);
        self.arena.node_mut(prev).next = Some(id);
        self.count += 1;
        self.modifications += 1;
        trace!(index, count = self.count, "spliced node");
        contracts::check_ends_consistent(self);
        Ok(true)
    }

    /// Append every element of `values`.
    ///
    /// `None` for the collection itself fails with [`ListError::NullCollection`].
    /// All elements are checked against the null policy before the first one is
    /// linked, so a rejected element leaves the sequence unchanged.
    pub fn add_all<I>(&mut self, values: Option<I>) -> Result<bool, ListError>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let values = values.ok_or(ListError::NullCollection)?;
        let staged: Vec<Option<T>> = values.into_iter().map(Into::into).collect();
        for value in &staged {
            self.policy.check_null_admission(value.as_ref())?;
        }

        let added = staged.len();
        for value in staged {
            self.link_last(value);
        }
        trace!(added, count = self.count, "appended batch");
        Ok(true)
    }

    fn link_last(&mut self, value: Option<T>) {
        let id = self.arena.alloc(value, None);
        match self.tail {
            None => self.head = Some(id),
            Some(tail) => self.arena.node_mut(tail).next = Some(id),
        }
        self.tail = Some(id);
        self.count += 1;
        self.modifications += 1;
        contracts::check_ends_consistent(self);
    }

    fn link_first(&mut self, value: Option<T>) {
        let id = self.arena.alloc(value, self.head);
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.count += 1;
        self.modifications += 1;
        contracts::check_ends_consistent(self);
    }

    // ========================================================================
    // REMOVAL
    // ========================================================================

    /// Remove the first element equal to `value`.
    ///
    /// Returns `Ok(false)` when nothing matches. Offering `None` to a
    /// non-nullable sequence is an error even if nothing could match.
    pub fn remove(&mut self, value: impl Into<Option<T>>) -> Result<bool, ListError>
    where
        T: PartialEq,
    {
        let value = value.into();
        self.policy.check_null_admission(value.as_ref())?;

        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.arena.node(id);
            if node.value == value {
                self.unlink_after(prev, id);
                trace!(count = self.count, "removed first match");
                return Ok(true);
            }
            prev = Some(id);
            current = node.next;
        }
        Ok(false)
    }

    /// Detach and return the head element, if any.
    pub(crate) fn take_first(&mut self) -> Option<Option<T>> {
        let head = self.head?;
        Some(self.unlink_after(None, head))
    }

    /// Remove every element.
    ///
    /// Each node is unlinked individually before the arena is released. An
    /// empty sequence is left as is, and its modification count stays put.
    pub fn clear(&mut self) {
        if self.head.is_none() {
            self.arena.reset();
            return;
        }

        let cleared = self.count;
        let mut current = self.head;
        while let Some(id) = current {
            current = self.unlink(id).0;
        }
        self.head = None;
        self.tail = None;
        self.count = 0;
        self.arena.reset();
        self.modifications += 1;
        debug!(cleared, "cleared sequence");
        contracts::check_sequence_well_formed(self);
    }

    // ========================================================================
    // ACCESS
    // ========================================================================

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Result<Option<&T>, ListError> {
        let id = self.node_at(index)?;
        Ok(self.arena.node(id).value.as_ref())
    }

    /// Replace the value at `index`, returning the previous one. Non-structural.
    pub fn set(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<Option<T>, ListError> {
        let value = value.into();
        self.policy.check_null_admission(value.as_ref())?;
        let id = self.node_at(index)?;
        Ok(std::mem::replace(&mut self.arena.node_mut(id).value, value))
    }

    /// `true` if some element equals `value`. `None` on a non-nullable
    /// sequence is simply absent.
    pub fn contains(&self, value: impl Into<Option<T>>) -> bool
    where
        T: PartialEq,
    {
        let value = value.into();
        if value.is_none() && !self.allows_null() {
            return false;
        }
        self.iter().any(|element| element == value.as_ref())
    }

    /// `true` if every element of `values` is contained. Stops at the first miss.
    pub fn contains_all<I>(&self, values: Option<I>) -> Result<bool, ListError>
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let values = values.ok_or(ListError::NullCollection)?;
        Ok(values.into_iter().all(|value| self.contains(value)))
    }

    /// Resolve `index` to its node, using the cached tail for the last index.
    fn node_at(&self, index: usize) -> Result<NodeId, ListError> {
        self.policy.check_accessible(index, self.count)?;
        if index == self.count - 1 {
            if let Some(tail) = self.tail {
                return Ok(tail);
            }
        }
        Ok(contracts::reached(self.walk(index), index, self.count))
    }

    /// Follow `steps` links from the head. `None` if the chain is shorter.
    fn walk(&self, steps: usize) -> Option<NodeId> {
        let mut id = self.head?;
        for _ in 0..steps {
            id = self.arena.node(id).next?;
        }
        Some(id)
    }

    // ========================================================================
    // TRAVERSAL
    // ========================================================================

    /// Borrowing iterator over the elements, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Fail-fast cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    /// Check every structural invariant, reporting the first violation.
    pub fn verify(&self) -> Result<VerificationReport, InvariantError> {
        verify::verify_sequence(self)
    }

    // Raw accessors for the iterator and verification layers.

    pub(crate) fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    pub(crate) fn arena(&self) -> &NodeArena<T> {
        &self.arena
    }

    pub(crate) fn owner(&self) -> u64 {
        self.owner
    }

    /// Unchecked access to the structural fields, for corrupting a sequence
    /// on purpose in verification tests.
    #[cfg(test)]
    pub(crate) fn raw_parts_mut(&mut self) -> RawParts<'_, T> {
        RawParts {
            arena: &mut self.arena,
            head: &mut self.head,
            tail: &mut self.tail,
            count: &mut self.count,
        }
    }
}

#[cfg(test)]
pub(crate) struct RawParts<'a, T> {
    pub(crate) arena: &'a mut NodeArena<T>,
    pub(crate) head: &'a mut Option<NodeId>,
    pub(crate) tail: &'a mut Option<NodeId>,
    pub(crate) count: &'a mut usize,
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    /// Deep copy with a compacted arena and a fresh identity; cursors of the
    /// original do not carry over.
    fn clone(&self) -> Self {
        let mut copy = Self::with_policy(self.policy);
        for value in self.iter() {
            copy.link_last(value.cloned());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    /// Element-wise comparison. The null policy does not take part.
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    /// `LinkedSequence{}` when empty, `LinkedSequence{a, b, null}` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", TYPE_NAME)?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            match value {
                Some(value) => write!(f, "{}", value)?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("}")
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    /// Present values always pass the null policy, so this cannot fail.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_last(Some(value));
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
