// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::SequenceConfig;
use crate::sequence::LinkedSequence;

/// Build a sequence from optional values. Every value goes through `append`,
/// so a non-nullable config rejects `None` here too.
///
/// # Panics
/// Panics if the config rejects one of the values.
pub fn seq_from<T: Clone>(config: SequenceConfig, values: &[Option<T>]) -> LinkedSequence<T> {
    let mut seq = LinkedSequence::with_config(config);
    for value in values {
        if let Err(err) = seq.append(value.clone()) {
            panic!("seq_from: {err}");
        }
    }
    seq
}

/// Nullable sequence holding the given present values.
pub fn seq_of<T: Clone>(values: &[T]) -> LinkedSequence<T> {
    values.iter().cloned().collect()
}

/// Snapshot of the elements, head to tail.
pub fn contents<T: Clone>(seq: &LinkedSequence<T>) -> Vec<Option<T>> {
    seq.iter().map(|value| value.cloned()).collect()
}

/// Panic with the violated invariant if `seq` is ill-formed.
pub fn assert_well_formed<T>(seq: &LinkedSequence<T>) {
    if let Err(err) = seq.verify() {
        panic!("sequence ill-formed: {err}");
    }
}
