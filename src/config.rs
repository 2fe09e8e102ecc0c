// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction-time configuration for a [`LinkedSequence`](crate::LinkedSequence).
//!
//! The only knob is the null policy. It is fixed when the sequence is built and
//! never changes afterwards, so there is no setter anywhere in the crate.
//!
//! Scripts carry this struct inline (`{"allowNull": false, "ops": [...]}`) and
//! the CLI can override it with `--allow-null` / `--deny-null`.

use serde::{Deserialize, Serialize};

/// Policy knobs fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SequenceConfig {
    /// Whether `None` may be stored as an element.
    pub allow_null: bool,
}

impl SequenceConfig {
    /// Configuration for a sequence that rejects `None` elements.
    pub const fn non_nullable() -> Self {
        Self { allow_null: false }
    }

    /// Apply a command-line override on top of a file-provided value.
    pub fn with_override(self, allow_null: Option<bool>) -> Self {
        match allow_null {
            Some(allow_null) => Self { allow_null },
            None => self,
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { allow_null: true }
    }
}
