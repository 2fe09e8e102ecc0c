// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Node storage: a slab of cells addressed by stable ids.
//!
//! Nodes live in a `Vec` and link to each other by [`NodeId`] instead of by
//! pointer. Detached slots go on a free list and get reused by the next
//! allocation, so a long-lived sequence with churn does not grow without bound.
//!
//! ```text
//!   slots:  [0: a → 2] [1: (free)] [2: b → 3] [3: c → ∅]
//!   free:   [1]
//!   head = 0, tail = 3
//! ```
//!
//! The arena never looks at `head`/`tail`/`count`. That bookkeeping belongs
//! to [`LinkedSequence`](crate::LinkedSequence).

/// Stable address of a node inside its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A value slot and a successor link.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: Option<T>, next: Option<NodeId>) -> Self {
        Self { value, next }
    }

    /// Clear both fields, handing back what they held.
    pub(crate) fn detach(&mut self) -> (Option<NodeId>, Option<T>) {
        (self.next.take(), self.value.take())
    }
}

/// Slab of nodes plus a free list of reclaimed slots.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Node<T>>,
    free: Vec<NodeId>,
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Place a fresh node, reusing a reclaimed slot when one is available.
    pub(crate) fn alloc(&mut self, value: Option<T>, next: Option<NodeId>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Node::new(value, next);
                id
            }
            None => {
                self.slots.push(Node::new(value, next));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Return a detached slot to the free list.
    ///
    /// The caller must have cleared the node with [`Node::detach`] first.
    pub(crate) fn release(&mut self, id: NodeId) {
        debug_assert!(
            self.slots[id.0].next.is_none() && self.slots[id.0].value.is_none(),
            "released node {} still holds data",
            id.0
        );
        self.free.push(id);
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.slots[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.slots[id.0]
    }

    /// Checked lookup for code that must not trust the id (verification).
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0)
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn free_ids(&self) -> &[NodeId] {
        &self.free
    }

    /// Drop every slot. Only valid once nothing links into the arena.
    pub(crate) fn reset(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
