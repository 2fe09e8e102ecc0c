//! get, set, contains and contains_all.

use super::common::{present, seq_from, seq_of, NON_NULLABLE, NULLABLE};
use linkseq::{LinkedSequence, ListError};

#[test]
fn test_get_every_index() {
    let seq = seq_of(&["a", "b", "c"]);
    let values: Vec<_> = (0..seq.len()).map(|i| seq.get(i).unwrap()).collect();
    assert_eq!(values, vec![Some(&"a"), Some(&"b"), Some(&"c")]);
}

#[test]
fn test_set_returns_previous() {
    let mut seq = seq_of(&[1, 2, 3]);
    assert_eq!(seq.set(0, 10), Ok(Some(1)));
    assert_eq!(seq.set(1, 20), Ok(Some(2)));
    assert_eq!(seq.set(2, 30), Ok(Some(3)));
    assert_eq!(present(&seq), vec![10, 20, 30]);
}

#[test]
fn test_set_null_roundtrip() {
    let mut seq = seq_from(NULLABLE, &[Some(1), Some(2)]);
    assert_eq!(seq.set(1, None), Ok(Some(2)));
    assert_eq!(seq.get(1), Ok(None));
    assert_eq!(seq.set(1, 5), Ok(None));
}

#[test]
fn test_set_is_not_structural() {
    let mut seq = seq_of(&[1, 2]);
    let generation = seq.modification_count();
    seq.set(1, 9).unwrap();
    assert_eq!(seq.modification_count(), generation);
}

#[test]
fn test_set_null_rejected_when_non_nullable() {
    let mut seq = seq_from(NON_NULLABLE, &[Some(1)]);
    assert_eq!(seq.set(0, None), Err(ListError::NullNotAllowed));
    assert_eq!(seq.get(0), Ok(Some(&1)));
}

#[test]
fn test_contains() {
    let seq = seq_from(NULLABLE, &[Some(1), None, Some(3)]);
    assert!(seq.contains(3));
    assert!(!seq.contains(2));
    assert!(seq.contains(None));
    assert!(!seq_of(&[1]).contains(None));
}

#[test]
fn test_contains_null_on_non_nullable_is_false() {
    let seq = seq_from(NON_NULLABLE, &[Some(1)]);
    assert!(!seq.contains(None));
}

#[test]
fn test_contains_all() {
    let seq = seq_of(&[1, 2, 3]);
    assert_eq!(seq.contains_all(Some(vec![3, 1])), Ok(true));
    assert_eq!(seq.contains_all(Some(vec![1, 4])), Ok(false));
    assert_eq!(seq.contains_all(Some(Vec::<i32>::new())), Ok(true));
    assert_eq!(
        seq.contains_all(None::<Vec<i32>>),
        Err(ListError::NullCollection)
    );
}

#[test]
fn test_empty_state() {
    let seq: LinkedSequence<i32> = LinkedSequence::default();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert!(!seq.contains(1));
}
