// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cursor-driven removal.
//!
//! The fuzzer picks which elements a cursor removes and when a foreign
//! mutation happens. Removal through the cursor must match filtering the
//! input, and any outside structural change must make the cursor refuse to
//! continue instead of walking a stale chain.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkseq::{LinkedSequence, ListError};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u8>,
    /// Bit i set: remove the i-th visited element.
    mask: Vec<bool>,
    /// Append behind the cursor's back after this many steps.
    interfere_at: Option<u8>,
}

fuzz_target!(|input: Input| {
    let values: Vec<u8> = input.values.into_iter().take(128).collect();
    let mut seq: LinkedSequence<u8> = values.iter().copied().collect();
    let mut cursor = seq.cursor();
    let mut kept = Vec::new();
    let mut step = 0usize;

    while cursor.has_next() {
        if input.interfere_at.map(usize::from) == Some(step) {
            seq.append(0).unwrap();
            assert!(matches!(
                cursor.next(&seq),
                Err(ListError::ConcurrentModification { .. })
            ));
            return;
        }

        let value = match cursor.next(&seq) {
            Ok(Some(value)) => *value,
            other => panic!("unexpected cursor result: {:?}", other),
        };
        if input.mask.get(step).copied().unwrap_or(false) {
            assert_eq!(cursor.remove(&mut seq), Ok(Some(value)));
            assert_eq!(cursor.remove(&mut seq), Err(ListError::IllegalCursorState));
        } else {
            kept.push(value);
        }
        step += 1;
    }

    assert_eq!(cursor.next(&seq), Err(ListError::Exhausted));
    let remaining: Vec<u8> = seq.iter().flatten().copied().collect();
    assert_eq!(remaining, kept);
    assert!(seq.verify().is_ok());
});
