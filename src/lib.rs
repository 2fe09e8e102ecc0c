//! Singly-linked, index-addressable sequence with verified structural invariants.
//!
//! The crate provides [`LinkedSequence`], an ordered container with O(1)
//! insertion at both ends and linear indexed access. Boundary checks and the
//! null policy live in one place ([`BoundaryPolicy`]), node detachment in
//! another (`unlink`), and every structural operation is followed by a debug
//! contract that re-verifies the whole chain.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  policy.rs  │────▶│ sequence.rs  │◀────│   iter.rs   │
//! │ (bounds,    │     │ (append,     │     │ (Iter,      │
//! │  nulls)     │     │  remove, …)  │     │  Cursor)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!        ┌───────────────────┼────────────────────┐
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   node.rs   │     │  verify/     │     │  script.rs  │
//! │ (arena,     │     │ (invariants, │     │ (JSON ops,  │
//! │  free list) │     │  contracts)  │     │  CLI)       │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use linkseq::{LinkedSequence, ListError};
//!
//! let mut seq: LinkedSequence<i32> = LinkedSequence::non_nullable();
//! seq.append(1)?;
//! seq.append(2)?;
//! seq.append(3)?;
//! seq.remove(2)?;
//! seq.insert_at(9, 1)?;
//!
//! assert_eq!(seq.to_string(), "LinkedSequence{1, 9, 3}");
//! assert_eq!(seq.set(2, 7)?, Some(3));
//! assert_eq!(seq.append(None), Err(ListError::NullNotAllowed));
//! # Ok::<(), ListError>(())
//! ```

// Module declarations
pub mod config;
mod error;
mod iter;
mod node;
pub mod policy;
pub mod script;
mod sequence;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use config::SequenceConfig;
pub use error::ListError;
pub use iter::{Cursor, IntoIter, Iter};
pub use policy::BoundaryPolicy;
pub use sequence::LinkedSequence;
pub use verify::{InvariantError, VerificationReport};
