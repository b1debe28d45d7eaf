#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;
use crate::scalar::Integer;

#[test]
fn get_mem_is_zeroed_and_distinct() {
    let mut arena = MemoryArena::new();
    let a = arena.get_mem(Integer::new(10)).unwrap();
    let b = arena.alloc_mem(3).unwrap();
    assert!(a.assigned());
    assert_ne!(a, b);
    assert_eq!(arena.bytes(a, 10).unwrap(), &[0u8; 10]);
    assert_eq!(arena.block_size(b), Some(3));
    assert_eq!(arena.live_blocks(), 2);
}

#[test]
fn zero_size_is_nil() {
    let mut arena = MemoryArena::new();
    assert_eq!(arena.get_mem(0).unwrap(), Pointer::NIL);
    assert_eq!(arena.get_mem(-5).unwrap(), Pointer::NIL);
    assert_eq!(arena.live_blocks(), 0);
}

#[test]
fn free_sets_nil_and_rejects_reuse() {
    let mut arena = MemoryArena::new();
    let mut p = arena.get_mem(8).unwrap();
    let stale = p;
    arena.free_mem(&mut p).unwrap();
    assert!(p.is_nil());
    assert_eq!(arena.live_blocks(), 0);

    // Freeing nil is a no-op.
    arena.free_mem(&mut p).unwrap();

    let mut again = stale;
    let err = arena.free_mem(&mut again).unwrap_err();
    assert_eq!(err.kind(), ExceptionKind::InvalidPointer);
    assert_eq!(again, stale);
    assert_eq!(
        arena.read_byte(stale).unwrap_err().kind(),
        ExceptionKind::InvalidPointer
    );
}

#[test]
fn free_interior_pointer_is_invalid() {
    let mut arena = MemoryArena::new();
    let p = arena.get_mem(8).unwrap();
    let mut inner = p + Integer::new(2);
    assert_eq!(
        arena.free_mem(&mut inner).unwrap_err().kind(),
        ExceptionKind::InvalidPointer
    );
}

#[test]
fn realloc_keeps_prefix() {
    let mut arena = MemoryArena::new();
    let mut p = arena.get_mem(4).unwrap();
    arena.bytes_mut(p, 4).unwrap().copy_from_slice(&[1, 2, 3, 4]);

    arena.realloc_mem(&mut p, 6).unwrap();
    assert_eq!(arena.bytes(p, 6).unwrap(), &[1, 2, 3, 4, 0, 0]);

    arena.realloc_mem(&mut p, 2).unwrap();
    assert_eq!(arena.block_size(p), Some(2));
    assert_eq!(arena.bytes(p, 2).unwrap(), &[1, 2]);

    arena.realloc_mem(&mut p, 0).unwrap();
    assert!(p.is_nil());
    assert_eq!(arena.live_blocks(), 0);

    arena.realloc_mem(&mut p, 5).unwrap();
    assert_eq!(arena.block_size(p), Some(5));
}

#[test]
fn access_checks() {
    let mut arena = MemoryArena::new();
    let p = arena.get_mem(4).unwrap();
    assert_eq!(
        arena.read_byte(Pointer::NIL).unwrap_err().kind(),
        ExceptionKind::AccessViolation
    );
    assert_eq!(
        arena.bytes(p, 5).unwrap_err().kind(),
        ExceptionKind::AccessViolation
    );
    assert_eq!(
        arena.read_byte(p + Integer::new(4)).unwrap_err().kind(),
        ExceptionKind::AccessViolation
    );
    assert_eq!(
        arena.read_byte(Pointer::new(16)).unwrap_err().kind(),
        ExceptionKind::InvalidPointer
    );
    // Empty ranges never fault.
    assert_eq!(arena.bytes(Pointer::NIL, 0).unwrap(), &[] as &[u8]);
}

#[test]
fn byte_access() {
    let mut arena = MemoryArena::new();
    let p = arena.get_mem(2).unwrap();
    arena.write_byte(p + Integer::new(1), Byte::new(0xAB)).unwrap();
    assert_eq!(arena.read_byte(p + Integer::new(1)).unwrap(), Byte::new(0xAB));
    assert_eq!(arena.read_byte(p).unwrap(), Byte::new(0));
}

#[test]
fn move_between_blocks_and_within() {
    let mut arena = MemoryArena::new();
    let src = arena.get_mem(5).unwrap();
    let dst = arena.get_mem(5).unwrap();
    arena.bytes_mut(src, 5).unwrap().copy_from_slice(b"hello");

    arena.move_mem(src, dst, 5).unwrap();
    assert_eq!(arena.bytes(dst, 5).unwrap(), b"hello");

    // Overlapping shift right by one.
    arena.move_mem(src, src + Integer::new(1), 4).unwrap();
    assert_eq!(arena.bytes(src, 5).unwrap(), b"hhell");

    assert_eq!(
        arena.move_mem(src, dst + Integer::new(2), 4).unwrap_err().kind(),
        ExceptionKind::AccessViolation
    );
}

#[test]
fn fill_and_compare() {
    let mut arena = MemoryArena::new();
    let a = arena.get_mem(6).unwrap();
    let b = arena.get_mem(6).unwrap();
    arena.fill_char(a, 6, b'x').unwrap();
    arena.fill_char(b, 6, Integer::new(0x178)).unwrap();
    assert_eq!(arena.compare_mem(a, b, 6).unwrap(), Integer::ZERO);

    arena.fill_zero(b, 3).unwrap();
    assert_eq!(arena.bytes(b, 6).unwrap(), b"\0\0\0xxx");
    assert_eq!(arena.compare_mem(a, b, 6).unwrap(), Integer::ONE);
    assert_eq!(arena.compare_mem(b, a, 6).unwrap(), Integer::new(-1));
    assert_eq!(
        arena
            .compare_mem(a + Integer::new(3), b + Integer::new(3), 3)
            .unwrap(),
        Integer::ZERO
    );

    arena.fill_word(a, 3, Word::new(0x0102)).unwrap();
    assert_eq!(arena.bytes(a, 6).unwrap(), &[2, 1, 2, 1, 2, 1]);
}

#[test]
fn byte_and_dword_fills() {
    let mut arena = MemoryArena::new();
    let p = arena.get_mem(8).unwrap();
    arena.fill_byte(p, 8, Byte::new(0xAB)).unwrap();
    assert_eq!(arena.bytes(p, 8).unwrap(), &[0xAB; 8]);

    arena.fill_dword(p, 2, Cardinal::new(0x0403_0201)).unwrap();
    assert_eq!(arena.bytes(p, 8).unwrap(), &[1, 2, 3, 4, 1, 2, 3, 4]);

    assert_eq!(
        arena.fill_dword(p, 3, Cardinal::new(0)).unwrap_err().kind(),
        ExceptionKind::AccessViolation
    );
}

#[test]
fn compare_orders_bytes_unsigned() {
    let mut arena = MemoryArena::new();
    let low = arena.get_mem(2).unwrap();
    let high = arena.get_mem(2).unwrap();
    arena.write_byte(low, Byte::new(0x7F)).unwrap();
    arena.write_byte(high, Byte::new(0x80)).unwrap();
    assert_eq!(arena.compare_mem(low, high, 2).unwrap(), Integer::new(-1));
    assert_eq!(arena.compare_mem(high, low, 2).unwrap(), Integer::ONE);
    assert_eq!(arena.compare_mem(low, high, 0).unwrap(), Integer::ZERO);
}
