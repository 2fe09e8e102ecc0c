//! append, prepend, insert_at and add_all.

use super::common::{assert_rejected_unchanged, assert_well_formed, contents, present, seq_of};
use linkseq::{LinkedSequence, ListError};

#[test]
fn test_append_preserves_order() {
    let mut seq: LinkedSequence<i32> = LinkedSequence::new();
    for value in 1..=5 {
        assert_eq!(seq.append(value), Ok(true));
    }
    assert_eq!(present(&seq), vec![1, 2, 3, 4, 5]);
    assert_well_formed(&seq);
}

#[test]
fn test_prepend_reverses_order() {
    let mut seq: LinkedSequence<i32> = LinkedSequence::new();
    for value in 1..=3 {
        seq.prepend(value).unwrap();
    }
    assert_eq!(present(&seq), vec![3, 2, 1]);
    assert_eq!(seq.get(2), Ok(Some(&1)));
}

#[test]
fn test_insert_at_zero_becomes_head() {
    let mut seq = seq_of(&[2, 3]);
    seq.insert_at(1, 0).unwrap();
    assert_eq!(present(&seq), vec![1, 2, 3]);
}

#[test]
fn test_insert_at_count_becomes_tail() {
    let mut seq = seq_of(&[1, 2]);
    seq.insert_at(3, 2).unwrap();
    seq.append(4).unwrap();
    assert_eq!(present(&seq), vec![1, 2, 3, 4]);
    assert_eq!(seq.get(3), Ok(Some(&4)));
}

#[test]
fn test_insert_shifts_later_elements() {
    let mut seq = seq_of(&[10, 20, 30, 40]);
    seq.insert_at(25, 2).unwrap();
    assert_eq!(seq.get(2), Ok(Some(&25)));
    assert_eq!(seq.get(3), Ok(Some(&30)));
    assert_eq!(seq.get(4), Ok(Some(&40)));
    assert_well_formed(&seq);
}

#[test]
fn test_insert_into_empty() {
    let mut seq: LinkedSequence<&str> = LinkedSequence::new();
    seq.insert_at("only", 0).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.get(0), Ok(Some(&"only")));
}

#[test]
fn test_null_append_depends_on_policy() {
    let mut nullable: LinkedSequence<i32> = LinkedSequence::new();
    assert_eq!(nullable.append(None), Ok(true));
    assert_eq!(nullable.get(0), Ok(None));

    let mut strict: LinkedSequence<i32> = LinkedSequence::non_nullable();
    let before = strict.clone();
    let attempt = strict.append(None);
    assert_rejected_unchanged(&strict, &before, 0, attempt, ListError::NullNotAllowed);
    assert_eq!(strict.prepend(None), Err(ListError::NullNotAllowed));
}

#[test]
fn test_add_all_appends_in_order() {
    let mut seq = seq_of(&[1]);
    assert_eq!(seq.add_all(Some(vec![2, 3])), Ok(true));
    assert_eq!(present(&seq), vec![1, 2, 3]);
}

#[test]
fn test_add_all_empty_collection() {
    let mut seq = seq_of(&[1]);
    let generation = seq.modification_count();
    assert_eq!(seq.add_all(Some(Vec::<i32>::new())), Ok(true));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.modification_count(), generation);
}

#[test]
fn test_add_all_missing_collection() {
    let mut seq = seq_of(&[1]);
    let before = seq.clone();
    let generation = seq.modification_count();
    let attempt = seq.add_all(None::<Vec<i32>>);
    assert_rejected_unchanged(&seq, &before, generation, attempt, ListError::NullCollection);
}

#[test]
fn test_add_all_rejects_whole_batch_with_null() {
    let mut seq: LinkedSequence<i32> = LinkedSequence::non_nullable();
    seq.append(1).unwrap();
    let before = seq.clone();
    let generation = seq.modification_count();
    let attempt = seq.add_all(Some(vec![Some(2), None, Some(3)]));
    assert_rejected_unchanged(&seq, &before, generation, attempt, ListError::NullNotAllowed);
}

#[test]
fn test_add_all_with_nulls_when_nullable() {
    let mut seq: LinkedSequence<i32> = LinkedSequence::new();
    seq.add_all(Some(vec![Some(1), None])).unwrap();
    assert_eq!(contents(&seq), vec![Some(1), None]);
}

#[test]
fn test_collect_and_extend() {
    let mut seq: LinkedSequence<i32> = (1..=3).collect();
    seq.extend([4, 5]);
    assert_eq!(present(&seq), vec![1, 2, 3, 4, 5]);
    assert_well_formed(&seq);
}

/// 50k elements in and out must stay linear even with debug contracts on.
/// A full chain walk per call makes this quadratic and takes tens of seconds.
#[test]
fn test_large_build_and_drain_stay_linear() {
    use std::time::{Duration, Instant};

    const N: u32 = 50_000;
    let start = Instant::now();

    let mut seq: LinkedSequence<u32> = LinkedSequence::non_nullable();
    for value in 0..N {
        seq.append(value).unwrap();
    }
    seq.prepend(N).unwrap();
    seq.extend(N + 1..N + 100);
    assert_eq!(seq.len(), N as usize + 100);

    let mut cursor = seq.cursor();
    while cursor.has_next() {
        cursor.next(&seq).unwrap();
        cursor.remove(&mut seq).unwrap();
    }
    assert!(seq.is_empty());
    assert_well_formed(&seq);

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_secs(5),
        "building and draining {} elements took {:?}",
        N,
        elapsed
    );
}
