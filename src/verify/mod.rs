// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural checks and runtime contracts.
//!
//! Two complementary pieces:
//!
//! 1. **`verify_sequence`** walks the arena and returns the first broken
//!    invariant as an [`InvariantError`]. It never panics, even on a corrupt
//!    chain, so it is safe to expose through [`LinkedSequence::verify`].
//!
//! 2. **Runtime contracts** that panic in debug builds when a structural
//!    operation leaves the sequence ill-formed. Per-element operations only
//!    check the ends of the chain, so they stay O(1). Zero-cost in release,
//!    but every test run exercises them.
//!
//! [`LinkedSequence::verify`]: crate::LinkedSequence::verify

mod chain;
pub(crate) mod contracts;
mod types;

pub use chain::verify_sequence;
pub use types::*;
