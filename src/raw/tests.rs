use crate::alloc::vec;
use crate::alloc::vec::Vec;
use crate::backend::Local;

use super::Raw;

type R<'borrow> = Raw<'borrow, u8, Local, 7>;

const MEDIUM: &[u8] = &[42; 42];

#[test]
fn test_representations() {
    let r = R::empty();
    assert!(r.is_inline());
    assert_eq!(r.len(), 0);
    assert!(r.is_empty());

    let r = R::from_slice(b"abc");
    assert!(r.is_inline());
    assert_eq!(r.as_slice(), b"abc");

    let r = R::from_slice(MEDIUM);
    assert!(r.is_allocated());
    assert_eq!(r.as_slice(), MEDIUM);

    let r = R::borrowed(MEDIUM);
    assert!(r.is_borrowed());
    assert_eq!(r.as_slice(), MEDIUM);
}

#[test]
fn test_from_vec_normalizes() {
    let r = R::from_vec(vec![1, 2, 3]);
    assert!(r.is_inline());

    let v = Vec::from(MEDIUM);
    let p = v.as_ptr();
    let r = R::from_vec(v);
    assert!(r.is_allocated());
    // long vectors move in without a copy
    assert!(core::ptr::eq(r.as_ptr(), p));
}

#[test]
fn test_clone_shares_allocated() {
    let a = R::from_slice(MEDIUM);
    let b = a.clone();
    assert!(a.is_shared_with(&b));
    assert!(a.is_shared());
    assert!(!a.is_detached());
    assert_eq!(a.ref_count(), Some(2));
    assert_eq!(b.as_slice(), MEDIUM);

    drop(b);
    assert!(a.is_detached());
    assert_eq!(a.ref_count(), Some(1));
}

#[test]
fn test_clone_inline_is_independent() {
    let a = R::from_slice(b"abc");
    let b = a.clone();
    assert!(!a.is_shared_with(&b));
    assert!(a.is_detached());
    assert!(b.is_detached());
}

#[test]
fn test_clone_borrowed_shares_identity() {
    let a = R::borrowed(MEDIUM);
    let b = a.clone();
    assert!(a.is_shared_with(&b));
    // persistent data always counts as shared
    assert!(a.is_shared());
    assert!(!a.is_detached());
}

#[test]
fn test_detach_is_idempotent() {
    let mut a = R::from_slice(MEDIUM);
    let b = a.clone();
    a.detach();
    assert!(!a.is_shared_with(&b));
    assert!(a.is_detached());

    // second detach must keep buffer identity
    let p = a.as_ptr();
    a.detach();
    assert!(core::ptr::eq(a.as_ptr(), p));
}

#[test]
fn test_detach_borrowed_copies() {
    let mut a = R::borrowed(MEDIUM);
    a.detach();
    assert!(a.is_allocated());
    assert!(a.is_detached());
    assert_eq!(a.as_slice(), MEDIUM);
    assert!(!core::ptr::eq(a.as_ptr(), MEDIUM.as_ptr()));
}

#[test]
fn test_push_slice_inline() {
    let mut a = R::from_slice(b"abc");
    a.push_slice(b"d");
    assert!(a.is_inline());
    assert_eq!(a.as_slice(), b"abcd");

    // overflowing the inline capacity moves to the heap
    a.push_slice(b"efgh");
    assert!(a.is_allocated());
    assert_eq!(a.as_slice(), b"abcdefgh");
}

#[test]
fn test_push_slice_unique_in_place() {
    let mut a = R::with_capacity(64);
    assert!(a.is_allocated());
    let p = a.as_ptr();
    a.push_slice(MEDIUM);
    assert_eq!(a.as_slice(), MEDIUM);
    // within capacity, the buffer must not move
    assert!(core::ptr::eq(a.as_ptr(), p));
}

#[test]
fn test_push_slice_shared_detaches() {
    let mut a = R::from_slice(MEDIUM);
    let b = a.clone();
    a.push_slice(b"x");
    assert!(!a.is_shared_with(&b));
    assert_eq!(a.len(), MEDIUM.len() + 1);
    assert_eq!(b.as_slice(), MEDIUM);
}

#[test]
fn test_push_slice_borrowed_copies() {
    let mut a = R::borrowed(b"abc");
    a.push_slice(b"def");
    assert!(a.is_inline());
    assert_eq!(a.as_slice(), b"abcdef");
}

#[test]
fn test_insert_slice() {
    let mut a = R::from_slice(b"ad");
    a.insert_slice(1, b"bc");
    assert!(a.is_inline());
    assert_eq!(a.as_slice(), b"abcd");

    let mut a = R::from_slice(MEDIUM);
    let b = a.clone();
    a.insert_slice(21, b"abc");
    assert_eq!(a.len(), 45);
    assert_eq!(&a.as_slice()[21..24], b"abc");
    assert_eq!(b.as_slice(), MEDIUM);
}

#[test]
#[should_panic(expected = "insertion index")]
fn test_insert_slice_out_of_bounds() {
    let mut a = R::from_slice(b"abc");
    a.insert_slice(4, b"x");
}

#[test]
fn test_truncate_keeps_representation() {
    let mut a = R::from_slice(MEDIUM);
    let b = a.clone();
    a.truncate(3);
    assert!(a.is_allocated());
    assert_eq!(a.as_slice(), &MEDIUM[..3]);
    // shrinking the window does not detach
    assert!(a.is_shared_with(&b));

    let mut a = R::borrowed(MEDIUM);
    a.truncate(3);
    assert!(a.is_borrowed());
    assert_eq!(a.len(), 3);
}

#[test]
fn test_slice_shares_heap_buffer() {
    let a = R::from_slice(MEDIUM);
    let b = a.slice(0..40);
    assert!(b.is_allocated());
    assert!(a.is_shared_with(&b));
    assert_eq!(b.len(), 40);

    // short ranges normalize to inline
    let c = a.slice(2..6);
    assert!(c.is_inline());
    assert!(!a.is_shared_with(&c));
    assert_eq!(c.as_slice(), &MEDIUM[2..6]);
}

#[test]
fn test_slice_borrowed_stays_borrowed() {
    let a = R::borrowed(MEDIUM);
    let b = a.slice(1..3);
    assert!(b.is_borrowed());
    assert!(core::ptr::eq(b.as_ptr(), MEDIUM[1..].as_ptr()));
}

#[test]
fn test_to_mut_slice() {
    let mut a = R::from_slice(MEDIUM);
    let b = a.clone();
    a.to_mut_slice()[0] = 1;
    assert_eq!(a.as_slice()[0], 1);
    assert_eq!(b.as_slice()[0], 42);
    assert!(!a.is_shared_with(&b));
}

#[test]
fn test_take_vec_steals_unique_buffer() {
    let mut a = R::from_slice(MEDIUM);
    let p = a.as_ptr();
    let v = a.take_vec();
    assert!(core::ptr::eq(v.as_ptr(), p));
    assert!(a.is_empty());
}

#[test]
fn test_take_vec_copies_shared_buffer() {
    let mut a = R::from_slice(MEDIUM);
    let b = a.clone();
    let p = a.as_ptr();
    let v = a.take_vec();
    assert!(!core::ptr::eq(v.as_ptr(), p));
    assert_eq!(v, MEDIUM);
    assert_eq!(b.as_slice(), MEDIUM);
}

#[test]
fn test_into_owned() {
    let a = R::borrowed(MEDIUM);
    let a = a.into_owned();
    assert!(a.is_allocated());

    let b = R::from_slice(MEDIUM);
    let p = b.as_ptr();
    let b = b.into_owned();
    // already owned data moves without a copy
    assert!(core::ptr::eq(b.as_ptr(), p));
}

#[test]
fn test_into_borrowed() {
    let a = R::borrowed(b"abc");
    assert_eq!(a.into_borrowed(), Ok(b"abc".as_slice()));

    let a = R::from_slice(b"abc");
    assert!(a.into_borrowed().is_err());
}

#[test]
fn test_with_capacity() {
    let a = R::with_capacity(3);
    assert!(a.is_inline());

    let a = R::with_capacity(100);
    assert!(a.is_allocated());
    assert!(a.capacity() >= 100);
    assert_eq!(a.len(), 0);
}

#[test]
fn test_randomized_push_against_vec() {
    let mut rng = fastrand::Rng::with_seed(0x9E37_79B9);
    let mut model: Vec<u8> = Vec::new();
    let mut subject = R::empty();

    for _ in 0..200 {
        let n = rng.usize(0..10);
        let chunk: Vec<u8> = (0..n).map(|_| rng.u8(..)).collect();
        match rng.u8(0..4) {
            0 => {
                let at = rng.usize(0..=model.len());
                model.splice(at..at, chunk.iter().copied());
                subject.insert_slice(at, &chunk);
            }
            1 => {
                let keep = rng.usize(0..=model.len());
                model.truncate(keep);
                subject.truncate(keep);
            }
            2 if !model.is_empty() => {
                // clone then mutate: the clone must stay intact
                let snapshot = subject.clone();
                let before: Vec<u8> = model.clone();
                model.extend_from_slice(&chunk);
                subject.push_slice(&chunk);
                assert_eq!(snapshot.as_slice(), before);
            }
            _ => {
                model.extend_from_slice(&chunk);
                subject.push_slice(&chunk);
            }
        }
        assert_eq!(subject.as_slice(), model.as_slice());
        assert_eq!(subject.len(), model.len());
    }
}
