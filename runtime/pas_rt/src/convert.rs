//! Conversions between text and scalar values.
//!
//! Every parse comes in three tiers, as in Pascal:
//! - `str_to_*` raises `EConvertError` on malformed input;
//! - `str_to_*_def` falls back to a caller-supplied default;
//! - `try_str_to_*` writes through an out-parameter and reports success.
//!
//! Integer text may carry surrounding ASCII whitespace, a sign, and a `$` or
//! `0x` hex prefix. Hex literals denote a bit pattern, so `$FFFFFFFF` parses
//! as `Integer(-1)`.

use std::fmt;

use crate::error::{Exception, ExceptionKind, RtResult};
use crate::format::MAX_FIELD_WIDTH;
use crate::scalar::{
    Boolean, Byte, Cardinal, Char, Double, Int64, Integer, Ordinal, ShortInt, SmallInt, UInt64,
    Word,
};
use crate::text::PasString;

/// An integer wrapper that can be rendered in decimal and hex.
pub trait PasInteger: Copy + fmt::Display {
    /// Upper-case hex digits of the two's-complement bit pattern at the
    /// type's native width, without leading zeros.
    fn to_hex(self) -> String;
}

macro_rules! pas_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PasInteger for $ty {
                fn to_hex(self) -> String {
                    format!("{:X}", self.raw())
                }
            }
        )*
    };
}

pas_integer!(ShortInt, SmallInt, Integer, Int64, Byte, Word, Cardinal, UInt64);

// Scanning

/// A successful scan: the value and the offset one past its last unit.
type Scanned<T> = Result<(T, usize), usize>;

fn unit_is(units: &[Char], pos: usize, expected: u8) -> bool {
    units.get(pos).is_some_and(|c| c.raw() == u16::from(expected))
}

fn digit_at(units: &[Char], pos: usize, radix: u32) -> Option<u32> {
    let unit = units.get(pos)?.raw();
    char::from_u32(u32::from(unit))?.to_digit(radix)
}

fn skip_white_space(units: &[Char], mut pos: usize) -> usize {
    while units.get(pos).is_some_and(|c| c.is_white_space()) {
        pos += 1;
    }
    pos
}

/// Scan an integer of `bits` width starting at the first unit.
///
/// Leading whitespace is skipped. `radix` of `None` detects a `$`/`0x`
/// prefix. On failure returns the 0-based offset of the offending unit.
fn scan_integer(units: &[Char], bits: u32, radix: Option<u32>) -> Scanned<i64> {
    let (value, end) = scan_wide(units, bits, radix)?;
    i64::try_from(value)
        .map(|v| (v, end))
        .map_err(|_| skip_white_space(units, 0))
}

/// [`scan_integer`] without the final narrowing, for widths up to 65 bits.
fn scan_wide(units: &[Char], bits: u32, radix: Option<u32>) -> Scanned<i128> {
    let mut pos = skip_white_space(units, 0);

    let negative = unit_is(units, pos, b'-');
    if negative || unit_is(units, pos, b'+') {
        pos += 1;
    }

    let hex_prefix = unit_is(units, pos, b'0')
        && (unit_is(units, pos + 1, b'x') || unit_is(units, pos + 1, b'X'));
    let radix = match radix {
        Some(radix) => {
            if radix == 16 && hex_prefix {
                pos += 2;
            }
            radix
        }
        None if unit_is(units, pos, b'$') => {
            pos += 1;
            16
        }
        None if hex_prefix => {
            pos += 2;
            16
        }
        None => 10,
    };

    // Decimal text is range-checked as a signed value; hex text as the
    // unsigned bit pattern of the same width.
    let limit: i128 = if radix == 10 {
        (1i128 << (bits - 1)) - i128::from(!negative)
    } else {
        (1i128 << bits) - 1
    };

    let start = pos;
    let mut magnitude: i128 = 0;
    while let Some(digit) = digit_at(units, pos, radix) {
        magnitude = magnitude * i128::from(radix) + i128::from(digit);
        if magnitude > limit {
            return Err(pos);
        }
        pos += 1;
    }
    if pos == start {
        return Err(pos);
    }

    let pattern = if radix == 10 {
        magnitude
    } else {
        // Reinterpret the top bit as the sign bit of the target width.
        let sign_bit = 1i128 << (bits - 1);
        if magnitude & sign_bit == 0 {
            magnitude
        } else {
            magnitude - (1i128 << bits)
        }
    };
    let value = if negative { -pattern } else { pattern };
    Ok((value, pos))
}

/// Scan a decimal floating-point literal: digits, an optional fraction and
/// an optional exponent.
fn scan_float(units: &[Char]) -> Scanned<f64> {
    let begin = skip_white_space(units, 0);
    let mut pos = begin;
    if unit_is(units, pos, b'-') || unit_is(units, pos, b'+') {
        pos += 1;
    }

    let mut mantissa_digits = 0;
    while digit_at(units, pos, 10).is_some() {
        pos += 1;
        mantissa_digits += 1;
    }
    if unit_is(units, pos, b'.') {
        pos += 1;
        while digit_at(units, pos, 10).is_some() {
            pos += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return Err(begin);
    }

    if unit_is(units, pos, b'e') || unit_is(units, pos, b'E') {
        let mut exp = pos + 1;
        if unit_is(units, exp, b'-') || unit_is(units, exp, b'+') {
            exp += 1;
        }
        if digit_at(units, exp, 10).is_some() {
            while digit_at(units, exp, 10).is_some() {
                exp += 1;
            }
            pos = exp;
        }
    }

    let literal: String = PasString::from(units[begin..pos].to_vec()).to_utf8();
    literal.parse::<f64>().map(|v| (v, pos)).map_err(|_| begin)
}

/// Accept a scan only if nothing but whitespace follows it.
fn whole<T>(units: &[Char], scanned: Scanned<T>) -> Option<T> {
    let (value, end) = scanned.ok()?;
    (skip_white_space(units, end) == units.len()).then_some(value)
}

fn parse_integer(text: &PasString) -> Option<Integer> {
    let units = text.units();
    whole(units, scan_integer(units, 32, None)).map(Integer::truncate_from)
}

fn parse_int64(text: &PasString) -> Option<Int64> {
    let units = text.units();
    whole(units, scan_integer(units, 64, None)).map(Int64::new)
}

/// A whole integer in the syntax [`str_to_int`] accepts, range-checked as
/// a signed value of `bits` width. Pass one extra bit for unsigned targets.
pub(crate) fn parse_wide_integer(text: &PasString, bits: u32) -> Option<i128> {
    let units = text.units();
    whole(units, scan_wide(units, bits, None))
}

pub(crate) fn parse_float(text: &PasString) -> Option<Double> {
    let units = text.units();
    whole(units, scan_float(units)).map(Double::new)
}

pub(crate) fn parse_boolean(text: &PasString) -> Option<Boolean> {
    if text.upper_case() == "TRUE" || *text == "1" || *text == "-1" {
        Some(Boolean::TRUE)
    } else if text.upper_case() == "FALSE" || *text == "0" {
        Some(Boolean::FALSE)
    } else {
        None
    }
}

fn convert_error(text: &PasString, what: &str) -> Exception {
    ExceptionKind::ConvertError.raise(format!("'{text}' is not a valid {what} value"))
}

// Integer

/// `StrToInt`.
pub fn str_to_int(text: &PasString) -> RtResult<Integer> {
    parse_integer(text).ok_or_else(|| convert_error(text, "integer"))
}

/// `StrToIntDef`.
pub fn str_to_int_def(text: &PasString, default: Integer) -> Integer {
    parse_integer(text).unwrap_or(default)
}

/// `TryStrToInt`. `result` is untouched on failure.
pub fn try_str_to_int(text: &PasString, result: &mut Integer) -> bool {
    parse_integer(text).map(|value| *result = value).is_some()
}

/// `StrToInt64`.
pub fn str_to_int64(text: &PasString) -> RtResult<Int64> {
    parse_int64(text).ok_or_else(|| convert_error(text, "integer"))
}

/// `StrToInt64Def`.
pub fn str_to_int64_def(text: &PasString, default: Int64) -> Int64 {
    parse_int64(text).unwrap_or(default)
}

/// `TryStrToInt64`.
pub fn try_str_to_int64(text: &PasString, result: &mut Int64) -> bool {
    parse_int64(text).map(|value| *result = value).is_some()
}

// Float

/// `StrToFloat`.
pub fn str_to_float(text: &PasString) -> RtResult<Double> {
    parse_float(text).ok_or_else(|| convert_error(text, "floating point"))
}

/// `StrToFloatDef`.
pub fn str_to_float_def(text: &PasString, default: Double) -> Double {
    parse_float(text).unwrap_or(default)
}

/// `TryStrToFloat`.
pub fn try_str_to_float(text: &PasString, result: &mut Double) -> bool {
    parse_float(text).map(|value| *result = value).is_some()
}

// Boolean

/// `StrToBool`: `TRUE`/`FALSE` in any case, or `1`, `-1`, `0`.
pub fn str_to_bool(text: &PasString) -> RtResult<Boolean> {
    parse_boolean(text).ok_or_else(|| convert_error(text, "boolean"))
}

/// `StrToBoolDef`.
pub fn str_to_bool_def(text: &PasString, default: Boolean) -> Boolean {
    parse_boolean(text).unwrap_or(default)
}

/// `TryStrToBool`.
pub fn try_str_to_bool(text: &PasString, result: &mut Boolean) -> bool {
    parse_boolean(text).map(|value| *result = value).is_some()
}

/// `BoolToStr(value, use_bool_strs)`: `True`/`False`, or `-1`/`0`.
pub fn bool_to_str(value: Boolean, use_bool_strs: bool) -> PasString {
    let text = match (use_bool_strs, value.raw()) {
        (true, true) => "True",
        (true, false) => "False",
        (false, true) => "-1",
        (false, false) => "0",
    };
    PasString::from(text)
}

// Rendering

/// `IntToStr`.
pub fn int_to_str(value: impl PasInteger) -> PasString {
    PasString::from(value.to_string())
}

/// `FloatToStr`: fixed notation with six decimals.
pub fn float_to_str(value: impl Into<Double>) -> PasString {
    PasString::from(format!("{:.6}", value.into().raw()))
}

/// `IntToHex(value, digits)`: upper-case, left-padded with `0` to `digits`.
///
/// Negative values render their two's-complement pattern at the value's
/// own width: `IntToHex(Integer(-1))` is `FFFFFFFF`.
pub fn int_to_hex(value: impl PasInteger, digits: impl Ordinal) -> PasString {
    let hex = value.to_hex();
    let digits = usize::try_from(digits.ordinal()).unwrap_or(0);
    PasString::from(format!("{hex:0>digits$}"))
}

/// `HexToInt`. Accepts an optional `$` or `0x` prefix.
pub fn hex_to_int(text: &PasString) -> RtResult<Integer> {
    let units = text.units();
    let start = skip_white_space(units, 0);
    let body = if unit_is(units, start, b'$') {
        &units[start + 1..]
    } else {
        units
    };
    whole(body, scan_integer(body, 32, Some(16)))
        .map(Integer::truncate_from)
        .ok_or_else(|| convert_error(text, "hexadecimal"))
}

/// 1-based position for a `Val` error code.
fn error_code(offset: usize) -> Integer {
    Integer::truncate_from(offset + 1)
}

/// `Val(s, v, code)` for integers.
///
/// Returns the value and the 1-based position of the first offending
/// unit, or code 0 on success. Leading whitespace is allowed, trailing is
/// not. On failure the value is 0.
pub fn val_int(text: &PasString) -> (Integer, Integer) {
    let units = text.units();
    match scan_integer(units, 32, None) {
        Ok((value, end)) if end == units.len() => (Integer::truncate_from(value), Integer::ZERO),
        Ok((_, end)) => (Integer::ZERO, error_code(end)),
        Err(offset) => (Integer::ZERO, error_code(offset)),
    }
}

/// `Val(s, v, code)` for floats.
pub fn val_float(text: &PasString) -> (Double, Integer) {
    let units = text.units();
    match scan_float(units) {
        Ok((value, end)) if end == units.len() => (Double::new(value), Integer::ZERO),
        Ok((_, end)) => (Double::ZERO, error_code(end)),
        Err(offset) => (Double::ZERO, error_code(offset)),
    }
}

fn field(value: impl Ordinal, default: usize) -> usize {
    usize::try_from(value.ordinal()).map_or(default, |n| n.min(MAX_FIELD_WIDTH))
}

/// `Str(value:width, s)`: right-aligned in `width` columns, at most
/// [`MAX_FIELD_WIDTH`].
pub fn str_int(value: impl PasInteger, width: impl Ordinal) -> PasString {
    let width = field(width, 0);
    PasString::from(format!("{value:>width$}"))
}

/// `Str(value:width:decimals, s)`: fixed notation, right-aligned.
///
/// A negative `decimals` falls back to six.
pub fn str_float(
    value: impl Into<Double>,
    width: impl Ordinal,
    decimals: impl Ordinal,
) -> PasString {
    let width = field(width, 0);
    let decimals = field(decimals, 6);
    let value = value.into().raw();
    PasString::from(format!("{value:>width$.decimals$}"))
}

/// `Ord(c)`.
#[inline]
pub fn ord(c: Char) -> Integer {
    c.ord()
}

/// `Chr(n)`: the code unit with ordinal `n`, truncated to 16 bits.
#[inline]
pub fn chr(code: impl Ordinal) -> Char {
    Char::chr(code)
}

/// `UniqueString(s)`.
///
/// A `PasString` owns its units outright, so there is never a shared
/// buffer to detach from.
#[inline]
pub fn unique_string(_text: &mut PasString) {}
