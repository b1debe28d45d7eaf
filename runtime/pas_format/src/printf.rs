//! printf-style directive parsing and translation.
//!
//! A directive has the shape `%[flags][width][.precision]type`. The scanner
//! never fails: a `%` at the very end of a pattern is literal text, `%%` is a
//! literal `%`, and an unrecognized type character is consumed and dropped.

use bitflags::bitflags;

use crate::spec::{parse_number, Align, PortableSpec, Sign, SpecType};

bitflags! {
    /// Flags accepted between `%` and the width.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PrintfFlags: u8 {
        /// `-`: left-justify within the field.
        const LEFT = 1 << 0;
        /// `+`: always print a sign.
        const PLUS = 1 << 1;
        /// ` `: space in place of a plus sign.
        const SPACE = 1 << 2;
        /// `#`: alternate form.
        const ALTERNATE = 1 << 3;
        /// `0`: pad with zeros.
        const ZERO = 1 << 4;
    }
}

impl PrintfFlags {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::LEFT),
            '+' => Some(Self::PLUS),
            ' ' => Some(Self::SPACE),
            '#' => Some(Self::ALTERNATE),
            '0' => Some(Self::ZERO),
            _ => None,
        }
    }
}

/// The conversion character that ends a directive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `d` or `i`.
    Signed,
    /// `u`.
    Unsigned,
    /// `x`.
    Hex,
    /// `X`.
    HexUpper,
    /// `f` or `F`.
    Fixed,
    /// `e`.
    Exp,
    /// `E`.
    ExpUpper,
    /// `g`.
    General,
    /// `G`.
    GeneralUpper,
    /// `s`.
    Text,
    /// `c`.
    Char,
    /// `p`.
    Pointer,
    /// Any other character.
    Unknown(char),
    /// The pattern ended before a conversion character.
    Missing,
}

impl Conversion {
    fn from_char(c: char) -> Self {
        match c {
            'd' | 'i' => Self::Signed,
            'u' => Self::Unsigned,
            'x' => Self::Hex,
            'X' => Self::HexUpper,
            'f' | 'F' => Self::Fixed,
            'e' => Self::Exp,
            'E' => Self::ExpUpper,
            'g' => Self::General,
            'G' => Self::GeneralUpper,
            's' => Self::Text,
            'c' => Self::Char,
            'p' => Self::Pointer,
            other => Self::Unknown(other),
        }
    }

    /// `d i u x X`: the conversions that accept a zero flag.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Signed | Self::Unsigned | Self::Hex | Self::HexUpper
        )
    }

    /// `d i u`: the conversions whose precision becomes a zero-padded width.
    pub fn is_decimal(self) -> bool {
        matches!(self, Self::Signed | Self::Unsigned)
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            Self::Fixed | Self::Exp | Self::ExpUpper | Self::General | Self::GeneralUpper
        )
    }

    fn spec_type(self) -> Option<SpecType> {
        match self {
            Self::Signed | Self::Unsigned => Some(SpecType::Decimal),
            Self::Hex => Some(SpecType::Hex),
            Self::HexUpper => Some(SpecType::HexUpper),
            Self::Fixed => Some(SpecType::Fixed),
            Self::Exp => Some(SpecType::Exp),
            Self::ExpUpper => Some(SpecType::ExpUpper),
            Self::General => Some(SpecType::General),
            Self::GeneralUpper => Some(SpecType::GeneralUpper),
            Self::Pointer => Some(SpecType::Pointer),
            Self::Text | Self::Char | Self::Unknown(_) | Self::Missing => None,
        }
    }
}

/// One parsed `%...` directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrintfDirective {
    pub flags: PrintfFlags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

impl PrintfDirective {
    /// Convert to the portable spec the host formatter understands.
    ///
    /// - `0` survives only on `d i u x X` without a precision.
    /// - A precision on `d i u` becomes a zero-padded width and replaces
    ///   any explicit width.
    /// - Float precisions pass through; other precisions are dropped.
    /// - `+` wins over space when both are given.
    pub fn to_portable(&self) -> PortableSpec {
        let mut spec = PortableSpec::EMPTY;
        let conversion = self.conversion;

        if self.flags.contains(PrintfFlags::LEFT) {
            spec.align = Some(Align::Left);
        }
        if self.flags.contains(PrintfFlags::PLUS) {
            spec.sign = Some(Sign::Plus);
        } else if self.flags.contains(PrintfFlags::SPACE) {
            spec.sign = Some(Sign::Space);
        }
        spec.alternate = self.flags.contains(PrintfFlags::ALTERNATE);
        spec.zero_pad = self.flags.contains(PrintfFlags::ZERO)
            && self.precision.is_none()
            && conversion.is_integer();

        match self.precision {
            Some(precision) if conversion.is_decimal() => {
                spec.zero_pad = true;
                spec.width = Some(precision);
            }
            Some(precision) if conversion.is_float() => {
                spec.width = self.width;
                spec.precision = Some(precision);
            }
            _ => spec.width = self.width,
        }

        spec.spec_type = conversion.spec_type();
        spec
    }
}

/// Parse a directive from `chars`, starting just after the `%`.
///
/// Returns the directive and the index one past its last character. Returns
/// `None` when `start` is already at the end of the input.
pub fn parse_directive(chars: &[char], start: usize) -> Option<(PrintfDirective, usize)> {
    if start >= chars.len() {
        return None;
    }

    let mut pos = start;
    let mut flags = PrintfFlags::empty();
    while let Some(flag) = chars.get(pos).copied().and_then(PrintfFlags::from_char) {
        flags |= flag;
        pos += 1;
    }

    let (width, next) = parse_number(chars, pos);
    pos = next;

    let mut precision = None;
    if chars.get(pos) == Some(&'.') {
        let (digits, next) = parse_number(chars, pos + 1);
        precision = Some(digits.unwrap_or(0));
        pos = next;
    }

    let conversion = match chars.get(pos) {
        Some(&c) => {
            pos += 1;
            Conversion::from_char(c)
        }
        None => Conversion::Missing,
    };

    Some((
        PrintfDirective {
            flags,
            width,
            precision,
            conversion,
        },
        pos,
    ))
}

/// One piece of a scanned pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    /// Literal text, with `%%` already collapsed to `%`.
    Literal(String),
    /// A directive to be filled from the next argument.
    Directive(PrintfDirective),
}

/// Split a printf-style pattern into literal text and directives.
///
/// Adjacent literal text is merged into one piece.
pub fn pieces(pattern: &str) -> Vec<Piece> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        if c != '%' {
            literal.push(c);
            pos += 1;
            continue;
        }
        match chars.get(pos + 1) {
            // Trailing `%` stays literal
            None => {
                literal.push('%');
                pos += 1;
            }
            Some('%') => {
                literal.push('%');
                pos += 2;
            }
            Some(_) => {
                let Some((directive, next)) = parse_directive(&chars, pos + 1) else {
                    break;
                };
                if !literal.is_empty() {
                    out.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                out.push(Piece::Directive(directive));
                pos = next;
            }
        }
    }

    if !literal.is_empty() {
        out.push(Piece::Literal(literal));
    }
    out
}

/// Translate a printf-style pattern into the portable `{:spec}` syntax.
///
/// ```ignore
/// translate("%5d|%-8s|%.2f") // "{:5d}|{:<8}|{:.2f}"
/// translate("%.3d")          // "{:03d}"
/// translate("100%%")         // "100%"
/// ```
pub fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for piece in pieces(pattern) {
        match piece {
            Piece::Literal(text) => out.push_str(&text),
            Piece::Directive(directive) => {
                out.push_str("{:");
                out.push_str(&directive.to_portable().to_string());
                out.push('}');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests;
