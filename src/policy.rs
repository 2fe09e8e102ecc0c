// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boundary and null-admission checks.
//!
//! A [`BoundaryPolicy`] is held by value inside every sequence and consulted
//! before any structural work. It carries no state of its own besides the
//! null flag; the element count is passed in by the caller so the predicates
//! stay pure.
//!
//! Two index ranges matter and they differ by one:
//!
//! ```text
//!   count = 3       [a] [b] [c]
//!   accessible       0   1   2
//!   insertable       0   1   2   3
//! ```

use crate::config::SequenceConfig;
use crate::error::ListError;

/// Index-range and null-policy guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPolicy {
    allows_null: bool,
}

impl BoundaryPolicy {
    pub const fn new(allows_null: bool) -> Self {
        Self { allows_null }
    }

    pub fn from_config(config: &SequenceConfig) -> Self {
        Self::new(config.allow_null)
    }

    #[inline]
    pub fn allows_null(&self) -> bool {
        self.allows_null
    }

    /// `true` iff `index` names a slot where an element may be inserted.
    #[inline]
    pub fn is_insertable(&self, index: usize, count: usize) -> bool {
        index <= count
    }

    /// `true` iff `index` names an existing element.
    #[inline]
    pub fn is_accessible(&self, index: usize, count: usize) -> bool {
        index < count
    }

    pub fn check_insertable(&self, index: usize, count: usize) -> Result<(), ListError> {
        if self.is_insertable(index, count) {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds { index, count })
        }
    }

    pub fn check_accessible(&self, index: usize, count: usize) -> Result<(), ListError> {
        if self.is_accessible(index, count) {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds { index, count })
        }
    }

    /// Reject `None` unless the policy admits it.
    pub fn check_null_admission<T>(&self, value: Option<&T>) -> Result<(), ListError> {
        if value.is_none() && !self.allows_null {
            Err(ListError::NullNotAllowed)
        } else {
            Ok(())
        }
    }
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        Self::from_config(&SequenceConfig::default())
    }
}
