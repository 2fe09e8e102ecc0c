//! Differential testing: the linked sequence against the `Vec` oracle.

use super::common::{assert_well_formed, contents};
use super::oracles::{call_strategy, Answer, Call, VecOracle};
use linkseq::{LinkedSequence, SequenceConfig};
use proptest::prelude::*;

fn apply(seq: &mut LinkedSequence<i32>, call: &Call) -> Answer {
    match call.clone() {
        Call::Append(v) => Answer::Flag(seq.append(v)),
        Call::Prepend(v) => Answer::Flag(seq.prepend(v)),
        Call::InsertAt(v, i) => Answer::Flag(seq.insert_at(v, i)),
        Call::Remove(v) => Answer::Flag(seq.remove(v)),
        Call::Set(i, v) => Answer::Value(seq.set(i, v)),
        Call::Get(i) => Answer::Value(seq.get(i).map(|v| v.copied())),
        Call::Contains(v) => Answer::Flag(Ok(seq.contains(v))),
        Call::AddAll(values) => Answer::Flag(seq.add_all(values)),
        Call::Clear => {
            seq.clear();
            Answer::Unit
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every call answers like the oracle and leaves the same contents behind.
    #[test]
    fn diff_calls_match_oracle(
        allow_null in any::<bool>(),
        calls in prop::collection::vec(call_strategy(), 0..80)
    ) {
        let mut seq = LinkedSequence::with_config(SequenceConfig { allow_null });
        let mut oracle = VecOracle::new(allow_null);

        for (step, call) in calls.iter().enumerate() {
            let ours = apply(&mut seq, call);
            let theirs = oracle.apply(call);
            prop_assert_eq!(&ours, &theirs, "step {} ({:?}) disagrees", step, call);
            prop_assert_eq!(contents(&seq), oracle.items.clone(), "contents after step {}", step);
        }
        assert_well_formed(&seq);
    }

    /// Display matches a rendering built from the oracle.
    #[test]
    fn diff_display_matches_oracle(
        calls in prop::collection::vec(call_strategy(), 0..40)
    ) {
        let mut seq: LinkedSequence<i32> = LinkedSequence::new();
        let mut oracle = VecOracle::new(true);
        for call in &calls {
            apply(&mut seq, call);
            oracle.apply(call);
        }

        let parts: Vec<String> = oracle
            .items
            .iter()
            .map(|v| v.map_or_else(|| "null".to_string(), |v| v.to_string()))
            .collect();
        prop_assert_eq!(seq.to_string(), format!("LinkedSequence{{{}}}", parts.join(", ")));
    }
}
