#![allow(
    clippy::float_cmp,
    reason = "promotion results are exact in these cases"
)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn integer_with_real_yields_real() {
    let x: Double = Integer::new(3) + Double::new(0.5);
    assert_eq!(x, 3.5);
    let x: Double = Double::new(0.5) * Integer::new(4);
    assert_eq!(x, 2.0);
    let x: Single = Byte::new(2) - Single::new(0.5);
    assert_eq!(x, 1.5);
    let x: Extended = Int64::new(9) / Extended::new(2.0);
    assert_eq!(x, 4.5);
}

#[test]
fn narrow_real_widens() {
    let x: Double = Single::new(1.5) + Double::new(1.0);
    assert_eq!(x, 2.5);
    let x: Extended = Double::new(1.0) - Extended::new(0.25);
    assert_eq!(x, 0.75);
}

#[test]
fn small_integers_compute_in_integer() {
    let x: Integer = Byte::new(200) + ShortInt::new(100);
    assert_eq!(x, 300);
    let x: Integer = Word::new(60_000) * SmallInt::new(-1);
    assert_eq!(x, -60_000);
    let x: Integer = Byte::new(255) + Integer::new(1);
    assert_eq!(x, 256);
}

#[test]
fn cardinal_with_signed_needs_int64() {
    let x: Int64 = Cardinal::new(u32::MAX) + Integer::new(1);
    assert_eq!(x, 4_294_967_296);
    let x: Int64 = Integer::new(-1) - Cardinal::new(1);
    assert_eq!(x, -2);
}

#[test]
fn unsigned_stays_unsigned() {
    let x: Cardinal = Byte::new(1) + Cardinal::new(1);
    assert_eq!(x, 2);
    let x: UInt64 = Cardinal::new(1) + UInt64::new(u64::MAX);
    assert_eq!(x, 0);
}

#[test]
fn mixed_integer_slash_is_double() {
    let x: Double = Byte::new(1) / Integer::new(2);
    assert_eq!(x, 0.5);
    let x: Double = Int64::new(3) / Cardinal::new(2);
    assert_eq!(x, 1.5);
}

#[test]
fn promote_returns_common_operands() {
    let (a, b) = ShortInt::new(-1).promote(Cardinal::new(5));
    assert_eq!((a, b), (Int64::new(-1), Int64::new(5)));
    let (a, b) = Integer::new(2).promote(Single::new(0.5));
    assert_eq!((a, b), (Single::new(2.0), Single::new(0.5)));
}

#[test]
fn integer_to_real_conversion() {
    assert_eq!(Double::from(Integer::new(-7)), Double::new(-7.0));
    assert_eq!(Extended::from(UInt64::new(10)), Extended::new(10.0));
}
