// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{PalisadeVec, VecError};

fn sample() -> PalisadeVec<i32> {
    let mut vec = PalisadeVec::new();
    for i in [10, 20, 30] {
        vec.push(i);
    }
    vec
}

// =============================================================================
// cursor(), cursor_end(), cursor_at()
// =============================================================================

#[test]
fn test_cursor_endpoints() {
    let vec = sample();

    assert_eq!(vec.cursor().offset(), 0);
    assert_eq!(vec.cursor_end().offset(), 3);
}

#[test]
fn test_cursor_at_bounds() {
    let vec = sample();

    assert_eq!(vec.cursor_at(3).unwrap().offset(), 3);
    assert_eq!(vec.cursor_at(4).map(|c| c.offset()), Err(VecError::OutOfRange));
}

// =============================================================================
// advance(), retreat()
// =============================================================================

#[test]
fn test_advance_walks_to_sentinel() {
    let vec = sample();
    let mut cursor = vec.cursor();

    let mut seen = Vec::new();
    while cursor != vec.cursor_end() {
        seen.push(*cursor.get().unwrap());
        cursor.advance().unwrap();
    }

    assert_eq!(seen, [10, 20, 30]);
}

#[test]
fn test_advance_past_sentinel_fails() {
    let vec = sample();
    let mut cursor = vec.cursor_end();

    assert_eq!(cursor.advance(), Err(VecError::OutOfRange));
    assert_eq!(cursor.offset(), 3);
}

#[test]
fn test_retreat_walks_backwards() {
    let vec = sample();
    let mut cursor = vec.cursor_end();

    let mut seen = Vec::new();
    while cursor != vec.cursor() {
        cursor.retreat().unwrap();
        seen.push(*cursor.get().unwrap());
    }

    assert_eq!(seen, [30, 20, 10]);
}

#[test]
fn test_retreat_at_zero_fails() {
    let vec = sample();
    let mut cursor = vec.cursor();

    assert_eq!(cursor.retreat(), Err(VecError::OutOfRange));
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn test_advance_on_empty_vector_fails() {
    let vec: PalisadeVec<i32> = PalisadeVec::new();
    let mut cursor = vec.cursor();

    assert_eq!(cursor.advance(), Err(VecError::OutOfRange));
}

// =============================================================================
// forward(), back()
// =============================================================================

#[test]
fn test_forward_jump() {
    let vec = sample();

    let cursor = vec.cursor().forward(2).unwrap();
    assert_eq!(*cursor.get().unwrap(), 30);

    // Landing exactly on the sentinel is allowed.
    assert_eq!(vec.cursor().forward(3).unwrap().offset(), 3);
    assert!(vec.cursor().forward(4).is_err());
}

#[test]
fn test_forward_overflow_fails() {
    let vec = sample();

    assert!(vec.cursor_end().forward(usize::MAX).is_err());
}

#[test]
fn test_back_jump() {
    let vec = sample();

    let cursor = vec.cursor_end().back(3).unwrap();
    assert_eq!(cursor.offset(), 0);
    assert!(vec.cursor_end().back(4).is_err());
}

// =============================================================================
// distance()
// =============================================================================

#[test]
fn test_distance_is_signed() {
    let vec = sample();
    let begin = vec.cursor();
    let end = vec.cursor_end();

    assert_eq!(end.distance(begin), Ok(3));
    assert_eq!(begin.distance(end), Ok(-3));
    assert_eq!(begin.distance(begin), Ok(0));
}

#[test]
fn test_distance_cross_container_fails() {
    let a = sample();
    let b = sample();

    assert_eq!(a.cursor().distance(b.cursor()), Err(VecError::CrossContainer));
}

// =============================================================================
// get()
// =============================================================================

#[test]
fn test_get_sentinel_fails() {
    let vec = sample();

    assert_eq!(vec.cursor_end().get(), Err(VecError::OutOfRange));
    assert_eq!(vec.cursor_at(2).unwrap().get(), Ok(&30));
}

// =============================================================================
// PartialEq
// =============================================================================

#[test]
fn test_equality_same_vector() {
    let vec = sample();

    assert_eq!(vec.cursor_at(1).unwrap(), vec.cursor_at(1).unwrap());
    assert_ne!(vec.cursor_at(1).unwrap(), vec.cursor_at(2).unwrap());
}

#[test]
fn test_equality_cross_container_is_false_not_an_error() {
    let a = sample();
    let b = sample();

    // Same offsets, different owners: unequal, in contrast to distance().
    assert_ne!(a.cursor(), b.cursor());
}

// =============================================================================
// mark()
// =============================================================================

#[test]
fn test_mark_round_trips_offset() {
    let vec = sample();

    let mark = vec.cursor_at(2).unwrap().mark();
    assert_eq!(mark.offset(), 2);
    assert_eq!(mark, vec.mark_at(2).unwrap());
}

#[test]
fn test_marks_drive_erase() {
    let mut vec = PalisadeVec::new();
    for i in [1, 2, 3, 4, 5] {
        vec.push(i);
    }
    let start = vec.cursor_at(1).unwrap().mark();
    let end = vec.cursor_at(3).unwrap().mark();

    vec.erase(start, end).unwrap();

    assert_eq!(vec.as_slice(), [1, 4, 5]);
}

#[test]
fn test_mark_at_sentinel_allowed() {
    let vec = sample();

    assert_eq!(vec.mark_at(3).unwrap().offset(), 3);
    assert_eq!(vec.mark_at(4).map(|m| m.offset()), Err(VecError::OutOfRange));
}
