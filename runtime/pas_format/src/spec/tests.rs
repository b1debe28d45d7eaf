//! Tests for the portable spec parser and renderer.

use pretty_assertions::assert_eq;

use super::*;

// Empty spec

#[test]
fn empty_spec() {
    assert_eq!(parse_portable_spec(""), PortableSpec::EMPTY);
    assert!(PortableSpec::EMPTY.is_empty());
    assert_eq!(PortableSpec::EMPTY.to_string(), "");
}

// Alignment

#[test]
fn align_without_fill() {
    let spec = parse_portable_spec("<");
    assert_eq!(spec.align, Some(Align::Left));
    assert_eq!(spec.fill, None);
}

#[test]
fn fill_and_align() {
    let spec = parse_portable_spec("*^");
    assert_eq!(spec.fill, Some('*'));
    assert_eq!(spec.align, Some(Align::Center));
}

#[test]
fn zero_fill_is_not_zero_pad() {
    let spec = parse_portable_spec("0>5");
    assert_eq!(spec.fill, Some('0'));
    assert_eq!(spec.align, Some(Align::Right));
    assert!(!spec.zero_pad);
    assert_eq!(spec.width, Some(5));
}

// Sign, alternate, zero

#[test]
fn sign_modes() {
    assert_eq!(parse_portable_spec("+").sign, Some(Sign::Plus));
    assert_eq!(parse_portable_spec("-").sign, Some(Sign::Minus));
    assert_eq!(parse_portable_spec(" ").sign, Some(Sign::Space));
}

#[test]
fn alternate_and_zero_pad() {
    let spec = parse_portable_spec("#010x");
    assert!(spec.alternate);
    assert!(spec.zero_pad);
    assert_eq!(spec.width, Some(10));
    assert_eq!(spec.spec_type, Some(SpecType::Hex));
}

#[test]
fn lone_zero_is_zero_pad() {
    let spec = parse_portable_spec("0d");
    assert!(spec.zero_pad);
    assert_eq!(spec.width, None);
}

// Width and precision

#[test]
fn width_and_precision() {
    let spec = parse_portable_spec("8.3f");
    assert_eq!(spec.width, Some(8));
    assert_eq!(spec.precision, Some(3));
    assert_eq!(spec.spec_type, Some(SpecType::Fixed));
}

#[test]
fn bare_dot_is_zero_precision() {
    assert_eq!(parse_portable_spec(".f").precision, Some(0));
}

#[test]
fn huge_width_saturates() {
    let spec = parse_portable_spec("99999999999999999999999999");
    assert_eq!(spec.width, Some(usize::MAX));
}

// Types

#[test]
fn every_type_char() {
    for c in ['d', 'x', 'X', 'f', 'e', 'E', 'g', 'G', 'p'] {
        let ty = SpecType::from_char(c);
        assert!(ty.is_some(), "{c}");
        assert_eq!(ty.map(SpecType::as_char), Some(c));
    }
}

#[test]
fn unknown_type_degrades() {
    let spec = parse_portable_spec("5q");
    assert_eq!(spec.width, Some(5));
    assert_eq!(spec.spec_type, None);
}

#[test]
fn type_classes() {
    assert!(SpecType::Hex.is_integer());
    assert!(!SpecType::Hex.is_float());
    assert!(SpecType::General.is_float());
    assert!(!SpecType::Pointer.is_integer());
    assert!(!SpecType::Pointer.is_float());
}

// Rendering

#[test]
fn render_canonical_order() {
    let spec = PortableSpec {
        fill: Some('*'),
        align: Some(Align::Left),
        sign: Some(Sign::Plus),
        alternate: true,
        zero_pad: true,
        width: Some(12),
        precision: Some(4),
        spec_type: Some(SpecType::ExpUpper),
    };
    assert_eq!(spec.to_string(), "*<+#012.4E");
}

#[test]
fn render_then_parse() {
    for text in ["<5", "+08d", " .2f", "#X", "^10", ">+#09.3e", "p"] {
        assert_eq!(parse_portable_spec(text).to_string(), text);
    }
}
