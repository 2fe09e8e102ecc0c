//! Index ranges and null admission, through the sequence and the policy alone.

use super::common::{assert_rejected_unchanged, seq_of, NON_NULLABLE, NULLABLE};
use linkseq::{BoundaryPolicy, LinkedSequence, ListError};

#[test]
fn test_insertable_range_includes_count() {
    let policy = BoundaryPolicy::default();
    assert!(policy.is_insertable(0, 0));
    assert!(policy.is_insertable(3, 3));
    assert!(!policy.is_insertable(4, 3));
}

#[test]
fn test_accessible_range_excludes_count() {
    let policy = BoundaryPolicy::default();
    assert!(!policy.is_accessible(0, 0));
    assert!(policy.is_accessible(2, 3));
    assert!(!policy.is_accessible(3, 3));
}

#[test]
fn test_policy_follows_config() {
    assert!(BoundaryPolicy::from_config(&NULLABLE).allows_null());
    assert!(!BoundaryPolicy::from_config(&NON_NULLABLE).allows_null());
    assert!(LinkedSequence::<i32>::new().allows_null());
    assert!(!LinkedSequence::<i32>::non_nullable().allows_null());
}

#[test]
fn test_get_at_count_fails() {
    let seq = seq_of(&[1, 2, 3]);
    assert_eq!(
        seq.get(3),
        Err(ListError::IndexOutOfBounds { index: 3, count: 3 })
    );
}

#[test]
fn test_get_on_empty_fails() {
    let seq: LinkedSequence<i32> = LinkedSequence::new();
    assert_eq!(
        seq.get(0),
        Err(ListError::IndexOutOfBounds { index: 0, count: 0 })
    );
}

#[test]
fn test_insert_past_count_leaves_sequence_unchanged() {
    let mut seq = seq_of(&[1, 2, 3]);
    let before = seq.clone();
    let generation = seq.modification_count();
    let attempt = seq.insert_at(9, 4);
    assert_rejected_unchanged(
        &seq,
        &before,
        generation,
        attempt,
        ListError::IndexOutOfBounds { index: 4, count: 3 },
    );
}

#[test]
fn test_set_out_of_range_leaves_sequence_unchanged() {
    let mut seq = seq_of(&[1]);
    let before = seq.clone();
    let generation = seq.modification_count();
    let attempt = seq.set(1, 5);
    assert_rejected_unchanged(
        &seq,
        &before,
        generation,
        attempt,
        ListError::IndexOutOfBounds { index: 1, count: 1 },
    );
}

#[test]
fn test_null_checked_before_index() {
    let mut seq: LinkedSequence<i32> = LinkedSequence::non_nullable();
    assert_eq!(seq.insert_at(None, 7), Err(ListError::NullNotAllowed));
    assert_eq!(seq.set(7, None), Err(ListError::NullNotAllowed));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ListError::IndexOutOfBounds { index: 5, count: 2 }.to_string(),
        "Index: 5, Size: 2"
    );
    assert!(!ListError::NullNotAllowed.to_string().is_empty());
}
