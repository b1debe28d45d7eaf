//! Tests for printf directive parsing and pattern translation.

use pretty_assertions::assert_eq;

use super::*;

fn directive(text: &str) -> PrintfDirective {
    let chars: Vec<char> = text.chars().collect();
    match parse_directive(&chars, 0) {
        Some((directive, end)) => {
            assert_eq!(end, chars.len(), "directive did not consume {text:?}");
            directive
        }
        None => panic!("no directive in {text:?}"),
    }
}

// Directive parsing

#[test]
fn parse_flags_width_precision() {
    let d = directive("-+ #012.5d");
    assert_eq!(
        d.flags,
        PrintfFlags::LEFT
            | PrintfFlags::PLUS
            | PrintfFlags::SPACE
            | PrintfFlags::ALTERNATE
            | PrintfFlags::ZERO
    );
    assert_eq!(d.width, Some(12));
    assert_eq!(d.precision, Some(5));
    assert_eq!(d.conversion, Conversion::Signed);
}

#[test]
fn parse_missing_conversion() {
    let d = directive("5");
    assert_eq!(d.width, Some(5));
    assert_eq!(d.conversion, Conversion::Missing);
}

#[test]
fn parse_unknown_conversion() {
    assert_eq!(directive("k").conversion, Conversion::Unknown('k'));
}

#[test]
fn parse_at_end_is_none() {
    assert_eq!(parse_directive(&['x'], 1), None);
}

#[test]
fn conversion_aliases() {
    assert_eq!(directive("i").conversion, Conversion::Signed);
    assert_eq!(directive("F").conversion, Conversion::Fixed);
    assert_eq!(directive("u").conversion, Conversion::Unsigned);
}

// Translation: flags

#[test]
fn left_align() {
    assert_eq!(translate("%-10s"), "{:<10}");
}

#[test]
fn plus_and_space() {
    assert_eq!(translate("%+d"), "{:+d}");
    assert_eq!(translate("% d"), "{: d}");
    assert_eq!(translate("%+ d"), "{:+d}");
}

#[test]
fn alternate_hex() {
    assert_eq!(translate("%#x"), "{:#x}");
    assert_eq!(translate("%#X"), "{:#X}");
}

#[test]
fn zero_pad_on_integers() {
    assert_eq!(translate("%05d"), "{:05d}");
    assert_eq!(translate("%08X"), "{:08X}");
    assert_eq!(translate("%04u"), "{:04d}");
}

#[test]
fn zero_pad_dropped_for_non_integers() {
    assert_eq!(translate("%08.3f"), "{:8.3f}");
    assert_eq!(translate("%05s"), "{:5}");
}

#[test]
fn flags_emitted_in_canonical_order() {
    assert_eq!(translate("%0+#-8x"), "{:<+#08x}");
}

// Translation: precision

#[test]
fn integer_precision_becomes_zero_padded_width() {
    assert_eq!(translate("%.2d"), "{:02d}");
    assert_eq!(translate("%8.3d"), "{:03d}");
    assert_eq!(translate("%.4i"), "{:04d}");
}

#[test]
fn integer_precision_suppresses_zero_flag_width() {
    assert_eq!(translate("%010.3d"), "{:03d}");
}

#[test]
fn hex_precision_is_dropped() {
    assert_eq!(translate("%.4x"), "{:x}");
    assert_eq!(translate("%06.4X"), "{:6X}");
}

#[test]
fn float_precision_passes_through() {
    assert_eq!(translate("%.2f"), "{:.2f}");
    assert_eq!(translate("%10.4e"), "{:10.4e}");
    assert_eq!(translate("%.3G"), "{:.3G}");
    assert_eq!(translate("%.f"), "{:.0f}");
}

#[test]
fn text_precision_is_dropped() {
    assert_eq!(translate("%.3s"), "{:}");
}

// Translation: types

#[test]
fn type_mapping() {
    assert_eq!(translate("%d %i %u"), "{:d} {:d} {:d}");
    assert_eq!(translate("%f %F"), "{:f} {:f}");
    assert_eq!(translate("%e %E %g %G"), "{:e} {:E} {:g} {:G}");
    assert_eq!(translate("%s %c"), "{:} {:}");
    assert_eq!(translate("%p"), "{:p}");
}

#[test]
fn unknown_type_has_no_annotation() {
    assert_eq!(translate("%5k"), "{:5}");
    assert_eq!(translate("a%qb"), "a{:}b");
}

// Translation: literals

#[test]
fn percent_escape() {
    assert_eq!(translate("100%%"), "100%");
    assert_eq!(translate("%%d"), "%d");
}

#[test]
fn trailing_percent_is_literal() {
    assert_eq!(translate("50%"), "50%");
    assert_eq!(translate("%"), "%");
}

#[test]
fn literal_text_and_braces_untouched() {
    assert_eq!(translate("{x} = %d;"), "{x} = {:d};");
    assert_eq!(translate("héllo wörld"), "héllo wörld");
}

#[test]
fn dangling_directive_at_end() {
    assert_eq!(translate("x=%-8"), "x={:<8}");
}

// Pieces

#[test]
fn pieces_merge_literals() {
    let got = pieces("a%%b%dc");
    assert_eq!(got.len(), 3);
    assert_eq!(got[0], Piece::Literal("a%b".to_string()));
    assert!(matches!(
        &got[1],
        Piece::Directive(PrintfDirective {
            conversion: Conversion::Signed,
            ..
        })
    ));
    assert_eq!(got[2], Piece::Literal("c".to_string()));
}

#[test]
fn pieces_of_empty_pattern() {
    assert!(pieces("").is_empty());
}
