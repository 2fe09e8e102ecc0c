// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary sequences of public operations.
//!
//! Every call is mirrored on a `Vec<Option<u8>>`. A rejected call must leave
//! the sequence untouched, an accepted one must change it exactly like the
//! `Vec`, and the chain must verify after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkseq::{LinkedSequence, SequenceConfig};

#[derive(Debug, Arbitrary)]
enum Call {
    Append(Option<u8>),
    Prepend(Option<u8>),
    InsertAt(Option<u8>, u8),
    Remove(Option<u8>),
    Set(u8, Option<u8>),
    Get(u8),
    AddAll(Option<Vec<Option<u8>>>),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    allow_null: bool,
    calls: Vec<Call>,
}

fuzz_target!(|input: Input| {
    let mut seq: LinkedSequence<u8> = LinkedSequence::with_config(SequenceConfig {
        allow_null: input.allow_null,
    });
    let mut model: Vec<Option<u8>> = Vec::new();
    let admits = |v: &Option<u8>| input.allow_null || v.is_some();

    for call in input.calls.into_iter().take(256) {
        let generation = seq.modification_count();
        let accepted = match call {
            Call::Append(v) => seq.append(v).is_ok() && {
                model.push(v);
                true
            },
            Call::Prepend(v) => seq.prepend(v).is_ok() && {
                model.insert(0, v);
                true
            },
            Call::InsertAt(v, i) => {
                let i = i as usize;
                let ok = seq.insert_at(v, i).is_ok();
                assert_eq!(ok, admits(&v) && i <= model.len());
                if ok {
                    model.insert(i, v);
                }
                ok
            }
            Call::Remove(v) => match seq.remove(v) {
                Ok(removed) => {
                    let position = model.iter().position(|x| *x == v);
                    assert_eq!(removed, position.is_some());
                    if let Some(position) = position {
                        model.remove(position);
                    }
                    true
                }
                Err(_) => {
                    assert!(!admits(&v));
                    false
                }
            },
            Call::Set(i, v) => {
                let i = i as usize;
                match seq.set(i, v) {
                    Ok(previous) => {
                        assert_eq!(previous, std::mem::replace(&mut model[i], v));
                        true
                    }
                    Err(_) => false,
                }
            }
            Call::Get(i) => {
                let i = i as usize;
                assert_eq!(seq.get(i).ok().map(|v| v.copied()), model.get(i).copied());
                false
            }
            Call::AddAll(values) => {
                let expected = values.clone();
                let ok = seq.add_all(values).is_ok();
                if let Some(values) = expected.filter(|_| ok) {
                    model.extend(values);
                }
                ok
            }
            Call::Clear => {
                seq.clear();
                model.clear();
                true
            }
        };

        if !accepted {
            assert_eq!(seq.modification_count(), generation);
        }
        assert_eq!(seq.len(), model.len());
        if let Err(err) = seq.verify() {
            panic!("ill-formed after step: {}", err);
        }
    }

    let contents: Vec<Option<u8>> = seq.iter().map(|v| v.copied()).collect();
    assert_eq!(contents, model);
});
