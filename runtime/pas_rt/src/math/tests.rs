#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn d(value: f64) -> Double {
    Double::new(value)
}

#[test]
fn abs_sqr_sign() {
    assert_eq!(abs(Integer::new(-5)), Integer::new(5));
    assert_eq!(abs(Integer::MIN), Integer::MIN);
    assert_eq!(abs(d(-2.5)), d(2.5));
    assert_eq!(sqr(Int64::new(-3)), Int64::new(9));
    assert_eq!(sqr(Single::new(1.5)), Single::new(2.25));
    assert_eq!(sign(ShortInt::new(-9)), Integer::new(-1));
    assert_eq!(sign(Int64::new(0)), Integer::ZERO);
    assert_eq!(sign(d(0.1)), Integer::ONE);
    assert_eq!(sign(d(f64::NAN)), Integer::ZERO);
}

#[test]
fn round_half_away_from_zero() {
    assert_eq!(round(d(2.5)).unwrap(), Integer::new(3));
    assert_eq!(round(d(-2.5)).unwrap(), Integer::new(-3));
    assert_eq!(round(d(2.4999)).unwrap(), Integer::new(2));
    assert_eq!(round(Single::new(0.5)).unwrap(), Integer::ONE);
    assert_eq!(round64(d(1e12 + 0.5)).unwrap(), Int64::new(1_000_000_000_001));
}

#[test]
fn trunc_toward_zero() {
    assert_eq!(trunc(d(3.9)).unwrap(), Integer::new(3));
    assert_eq!(trunc(d(-3.9)).unwrap(), Integer::new(-3));
    assert_eq!(trunc(d(2_147_483_647.9)).unwrap(), Integer::MAX);
    assert_eq!(trunc64(Extended::new(-1e15)).unwrap(), Int64::new(-1_000_000_000_000_000));
}

#[test]
fn out_of_range_conversions_raise() {
    for value in [2_147_483_648.0, -2_147_483_649.0, f64::NAN, f64::INFINITY] {
        let err = trunc(d(value)).unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::MathError);
    }
    assert!(round(d(2_147_483_647.5)).is_err());
    assert!(trunc64(d(9.3e18)).is_err());
    assert_eq!(trunc(d(-2_147_483_648.0)).unwrap(), Integer::MIN);
}

#[test]
fn int_frac_ceil_floor() {
    assert_eq!(int(d(2.75)), d(2.0));
    assert_eq!(frac(d(2.75)), d(0.75));
    assert_eq!(frac(d(-0.25)), d(0.75));
    assert_eq!(ceil(d(1.1)), d(2.0));
    assert_eq!(floor(d(-1.1)), d(-2.0));
    assert_eq!(ceil(Single::new(-0.5)), Single::new(-0.0));
}

#[test]
fn min_max() {
    assert_eq!(min(Integer::new(3), Integer::new(-1)), Integer::new(-1));
    assert_eq!(max(d(1.5), d(0.5)), d(1.5));
    assert_eq!(max(Int64::new(4), Int64::new(4)), Int64::new(4));
}

#[test]
fn transcendental_forwarders() {
    assert_eq!(sqrt(d(16.0)), d(4.0));
    assert!(sqrt(d(-1.0)).raw().is_nan());
    assert_eq!(power(d(2.0), d(10.0)), d(1024.0));
    assert_eq!(exp(d(0.0)), d(1.0));
    assert_eq!(ln(d(1.0)), d(0.0));
    assert!((log10(d(1000.0)).raw() - 3.0).abs() < 1e-12);
    assert_eq!(log2(Single::new(8.0)), Single::new(3.0));
    assert!((log_n(d(3.0), d(81.0)).raw() - 4.0).abs() < 1e-12);
    assert!((sin(pi()).raw()).abs() < 1e-12);
    assert_eq!(cos(d(0.0)), d(1.0));
    assert!((arc_tan2(d(1.0), d(1.0)).raw() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    assert_eq!(tanh(d(0.0)), d(0.0));
}

proptest! {
    #[test]
    fn round_is_within_half(value in -1.0e9f64..1.0e9) {
        let rounded = f64::from(round(d(value)).unwrap().raw());
        prop_assert!((rounded - value).abs() <= 0.5);
    }

    #[test]
    fn frac_in_unit_interval(value in -1.0e9f64..1.0e9) {
        let f = frac(d(value)).raw();
        prop_assert!((0.0..=1.0).contains(&f));
    }
}
