//! Pascal `Format`: printf-style patterns rendered against a list of
//! arguments.
//!
//! The pattern is split by [`pas_format::pieces`]; each directive is turned
//! into a [`PortableSpec`] and rendered with the next argument. Numbers are
//! right-aligned by default, text left-aligned. Floats follow C notation:
//! `e` writes a signed exponent of at least two digits and `g` picks
//! between fixed and exponent form the way `%g` does.

use pas_format::{pieces, Align, Piece, PortableSpec, Sign, SpecType};

use crate::error::{Exception, ExceptionKind, RtResult};
use crate::scalar::{
    Boolean, Byte, Cardinal, Char, Double, Extended, Int64, Integer, Pointer, ShortInt, Single,
    SmallInt, UInt64, Word,
};
use crate::text::PasString;

/// Largest width or precision a directive may ask for.
///
/// [`format`] raises `EConvertError` above it; [`crate::convert::str_int`]
/// and [`crate::convert::str_float`] clamp to it.
pub const MAX_FIELD_WIDTH: usize = 32_767;

/// One argument to [`format`].
#[derive(Clone, Debug, PartialEq)]
pub enum FormatArg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(PasString),
    Char(Char),
    Bool(bool),
    Pointer(usize),
}

macro_rules! format_arg_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for FormatArg {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.raw().into())
                }
            }
        )*
    };
}

format_arg_from!(Int: ShortInt, SmallInt, Integer, Int64);
format_arg_from!(UInt: Byte, Word, Cardinal, UInt64);
format_arg_from!(Float: Single, Double, Extended);

impl From<Boolean> for FormatArg {
    fn from(value: Boolean) -> Self {
        Self::Bool(value.raw())
    }
}

impl From<Char> for FormatArg {
    fn from(value: Char) -> Self {
        Self::Char(value)
    }
}

impl From<Pointer> for FormatArg {
    fn from(value: Pointer) -> Self {
        Self::Pointer(value.address())
    }
}

impl From<PasString> for FormatArg {
    fn from(value: PasString) -> Self {
        Self::Text(value)
    }
}

impl From<&PasString> for FormatArg {
    fn from(value: &PasString) -> Self {
        Self::Text(value.clone())
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Text(PasString::from(value))
    }
}

/// `Format(pattern, [args])`.
///
/// Extra arguments are ignored. Running out of arguments, a directive
/// whose type does not fit its argument (`%d` with a string), or a width
/// or precision above [`MAX_FIELD_WIDTH`] raises `EConvertError`.
pub fn format(pattern: &PasString, args: &[FormatArg]) -> RtResult<PasString> {
    let pattern_text = pattern.to_utf8();
    let mut args = args.iter();
    let mut out = String::with_capacity(pattern_text.len());

    for piece in pieces(&pattern_text) {
        match piece {
            Piece::Literal(text) => out.push_str(&text),
            Piece::Directive(directive) => {
                let Some(arg) = args.next() else {
                    return Err(ExceptionKind::ConvertError
                        .raise(format!("No argument for format '{pattern_text}'")));
                };
                let spec = directive.to_portable();
                if spec.width.max(spec.precision).is_some_and(|n| n > MAX_FIELD_WIDTH) {
                    return Err(incompatible(&pattern_text));
                }
                let rendered =
                    render(&spec, arg).ok_or_else(|| incompatible(&pattern_text))?;
                out.push_str(&rendered);
            }
        }
    }

    Ok(PasString::from(out))
}

fn incompatible(pattern: &str) -> Exception {
    ExceptionKind::ConvertError.raise(format!(
        "Format '{pattern}' invalid or incompatible with argument"
    ))
}

/// Render one argument, or `None` when the spec type does not apply to it.
fn render(spec: &PortableSpec, arg: &FormatArg) -> Option<String> {
    let integer_type = spec.spec_type.is_none_or(SpecType::is_integer);
    let float_type = spec.spec_type.is_none_or(SpecType::is_float);
    let text_type = spec.spec_type.is_none();

    match arg {
        FormatArg::Int(n) if integer_type => Some(format_int(*n < 0, n.unsigned_abs(), spec)),
        FormatArg::UInt(n) if integer_type => Some(format_int(false, *n, spec)),
        FormatArg::Bool(b) if integer_type && !text_type => {
            Some(format_int(false, u64::from(*b), spec))
        }
        FormatArg::Char(c) if integer_type && !text_type => {
            Some(format_int(false, u64::from(c.raw()), spec))
        }
        FormatArg::Float(f) if float_type => Some(format_float(*f, spec)),
        FormatArg::Text(s) if text_type => Some(format_str(&s.to_utf8(), spec)),
        FormatArg::Char(c) if text_type => Some(format_str(&PasString::from(*c).to_utf8(), spec)),
        FormatArg::Bool(b) if text_type => Some(format_str(&Boolean::new(*b).to_string(), spec)),
        FormatArg::Pointer(address)
            if matches!(spec.spec_type, None | Some(SpecType::Pointer)) =>
        {
            Some(apply_alignment(&format!("{address:#x}"), spec, Align::Right))
        }
        _ => None,
    }
}

/// Format an integer given as sign and magnitude.
fn format_int(is_negative: bool, magnitude: u64, spec: &PortableSpec) -> String {
    let (digits, prefix) = match spec.spec_type {
        Some(SpecType::Hex) => (format!("{magnitude:x}"), if spec.alternate { "0x" } else { "" }),
        Some(SpecType::HexUpper) => {
            (format!("{magnitude:X}"), if spec.alternate { "0X" } else { "" })
        }
        _ => (format!("{magnitude}"), ""),
    };
    let sign = format_sign(is_negative, spec);
    zero_pad_or_align(sign, prefix, &digits, spec)
}

/// Format a float according to the spec type, C style.
fn format_float(f: f64, spec: &PortableSpec) -> String {
    let is_negative = f.is_sign_negative() && !f.is_nan();
    let abs_f = f.abs();
    let upper = matches!(
        spec.spec_type,
        Some(SpecType::ExpUpper | SpecType::GeneralUpper)
    );

    let digits = if abs_f.is_finite() {
        match spec.spec_type {
            Some(SpecType::Fixed) => {
                let prec = spec.precision.unwrap_or(6);
                format!("{abs_f:.prec$}")
            }
            Some(SpecType::Exp | SpecType::ExpUpper) => {
                format_exponent(abs_f, spec.precision.unwrap_or(6), upper)
            }
            Some(SpecType::General | SpecType::GeneralUpper) => {
                format_general(abs_f, spec.precision.unwrap_or(6), spec.alternate, upper)
            }
            _ => format!("{abs_f}"),
        }
    } else {
        let word = if abs_f.is_nan() { "nan" } else { "inf" };
        if upper {
            word.to_ascii_uppercase()
        } else {
            word.to_string()
        }
    };

    let sign = format_sign(is_negative, spec);
    if !abs_f.is_finite() {
        return apply_alignment(&format!("{sign}{digits}"), spec, Align::Right);
    }
    zero_pad_or_align(sign, "", &digits, spec)
}

/// `d.ddde±XX`: C exponent form, at least two exponent digits.
fn format_exponent(f: f64, precision: usize, upper: bool) -> String {
    let rendered = format!("{f:.precision$e}");
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let e = if upper { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{sign}{:02}", exponent.unsigned_abs())
}

/// C `%g`: exponent form when the exponent is below -4 or not below the
/// precision, fixed otherwise; trailing zeros removed unless `#` is given.
fn format_general(f: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let precision = precision.max(1);
    let probe = format!("{f:.prec$e}", prec = precision - 1);
    let exponent: i64 = probe
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);

    let precision = precision as i64;
    let rendered = if exponent < -4 || exponent >= precision {
        format_exponent(f, (precision - 1) as usize, upper)
    } else {
        let decimals = (precision - 1 - exponent) as usize;
        format!("{f:.decimals$}")
    };

    if alternate {
        return rendered;
    }
    strip_trailing_zeros(&rendered)
}

/// Drop trailing fraction zeros (and a bare `.`), keeping any exponent.
fn strip_trailing_zeros(rendered: &str) -> String {
    let (number, exponent) = match rendered.find(['e', 'E']) {
        Some(at) => rendered.split_at(at),
        None => (rendered, ""),
    };
    if !number.contains('.') {
        return rendered.to_string();
    }
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{number}{exponent}")
}

/// Format text: precision truncates, then width and alignment apply.
fn format_str(s: &str, spec: &PortableSpec) -> String {
    let truncated = match spec.precision {
        Some(prec) if s.chars().count() > prec => s.chars().take(prec).collect(),
        _ => s.to_string(),
    };
    apply_alignment(&truncated, spec, Align::Left)
}

/// Zero-pad between sign/prefix and digits, unless an alignment was asked
/// for; otherwise pad with the fill character, right-aligned by default.
fn zero_pad_or_align(sign: &str, prefix: &str, digits: &str, spec: &PortableSpec) -> String {
    if spec.zero_pad && spec.align.is_none() {
        if let Some(width) = spec.width {
            let pad = width.saturating_sub(sign.len() + prefix.len());
            return format!("{sign}{prefix}{digits:0>pad$}");
        }
    }
    apply_alignment(&format!("{sign}{prefix}{digits}"), spec, Align::Right)
}

/// Apply width and alignment to a formatted string.
fn apply_alignment(s: &str, spec: &PortableSpec, default_align: Align) -> String {
    let Some(width) = spec.width else {
        return s.to_string();
    };

    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let fill = spec.fill.unwrap_or(' ');
    let padding = width - len;

    match spec.align.unwrap_or(default_align) {
        Align::Left => {
            let right_pad: String = std::iter::repeat_n(fill, padding).collect();
            format!("{s}{right_pad}")
        }
        Align::Right => {
            let left_pad: String = std::iter::repeat_n(fill, padding).collect();
            format!("{left_pad}{s}")
        }
        Align::Center => {
            let left = padding / 2;
            let right = padding - left;
            let left_pad: String = std::iter::repeat_n(fill, left).collect();
            let right_pad: String = std::iter::repeat_n(fill, right).collect();
            format!("{left_pad}{s}{right_pad}")
        }
    }
}

/// Build the sign prefix for a numeric value.
fn format_sign(is_negative: bool, spec: &PortableSpec) -> &'static str {
    if is_negative {
        "-"
    } else {
        match spec.sign {
            Some(Sign::Plus) => "+",
            Some(Sign::Space) => " ",
            _ => "",
        }
    }
}
