//! Portable format specification.
//!
//! The target syntax of the translator is
//! `[[fill]align][sign][#][0][width][.precision][type]`, the same shape the
//! host formatting facility understands inside `{:...}`.
//!
//! [`PortableSpec`] is produced by [`crate::PrintfDirective::to_portable`]
//! and consumed by the runtime `Format` routine. [`parse_portable_spec`]
//! reads the textual form back so that translated templates can be checked
//! against the parsed form.

use std::fmt;

/// Parsed portable format specification.
///
/// All fields are optional; an empty spec `{:}` is [`PortableSpec::EMPTY`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PortableSpec {
    /// Padding character (default: space).
    pub fill: Option<char>,
    /// Alignment direction.
    pub align: Option<Align>,
    /// Sign display for numbers.
    pub sign: Option<Sign>,
    /// Alternate form (`#`): `0x`/`0X` prefix for hex.
    pub alternate: bool,
    /// Zero-pad (`0`): pads between sign and digits.
    pub zero_pad: bool,
    /// Minimum field width.
    pub width: Option<usize>,
    /// Decimal places for floats.
    pub precision: Option<usize>,
    /// Type-specific format.
    pub spec_type: Option<SpecType>,
}

impl PortableSpec {
    /// An empty spec with no formatting options set.
    pub const EMPTY: Self = Self {
        fill: None,
        align: None,
        sign: None,
        alternate: false,
        zero_pad: false,
        width: None,
        precision: None,
        spec_type: None,
    };

    /// True when nothing but the braces would be emitted.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for PortableSpec {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Alignment direction for field padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// `<`: pad on the right.
    Left,
    /// `^`: pad equally on both sides.
    Center,
    /// `>`: pad on the left.
    Right,
}

impl Align {
    fn as_char(self) -> char {
        match self {
            Self::Left => '<',
            Self::Center => '^',
            Self::Right => '>',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '^' => Some(Self::Center),
            '>' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Sign display mode for numeric values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+`: always show sign.
    Plus,
    /// `-`: sign only for negatives (the default).
    Minus,
    /// ` `: space for positive, `-` for negative.
    Space,
}

impl Sign {
    fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Space => ' ',
        }
    }
}

/// Type-specific formatting mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpecType {
    /// `d`: decimal integer.
    Decimal,
    /// `x`: lowercase hexadecimal.
    Hex,
    /// `X`: uppercase hexadecimal.
    HexUpper,
    /// `f`: fixed-point decimal.
    Fixed,
    /// `e`: lowercase scientific notation.
    Exp,
    /// `E`: uppercase scientific notation.
    ExpUpper,
    /// `g`: shortest of fixed and scientific.
    General,
    /// `G`: uppercase general.
    GeneralUpper,
    /// `p`: pointer address.
    Pointer,
}

impl SpecType {
    /// The type character as written in a spec.
    pub fn as_char(self) -> char {
        match self {
            Self::Decimal => 'd',
            Self::Hex => 'x',
            Self::HexUpper => 'X',
            Self::Fixed => 'f',
            Self::Exp => 'e',
            Self::ExpUpper => 'E',
            Self::General => 'g',
            Self::GeneralUpper => 'G',
            Self::Pointer => 'p',
        }
    }

    /// Parse a type character. Unknown characters yield `None`.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => Self::Decimal,
            'x' => Self::Hex,
            'X' => Self::HexUpper,
            'f' => Self::Fixed,
            'e' => Self::Exp,
            'E' => Self::ExpUpper,
            'g' => Self::General,
            'G' => Self::GeneralUpper,
            'p' => Self::Pointer,
            _ => return None,
        })
    }

    /// Returns `true` for types that only apply to integers.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Decimal | Self::Hex | Self::HexUpper)
    }

    /// Returns `true` for types that only apply to floats.
    pub fn is_float(self) -> bool {
        matches!(
            self,
            Self::Fixed | Self::Exp | Self::ExpUpper | Self::General | Self::GeneralUpper
        )
    }
}

impl fmt::Display for PortableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        if let Some(align) = self.align {
            if let Some(fill) = self.fill {
                f.write_char(fill)?;
            }
            f.write_char(align.as_char())?;
        }
        if let Some(sign) = self.sign {
            f.write_char(sign.as_char())?;
        }
        if self.alternate {
            f.write_char('#')?;
        }
        if self.zero_pad {
            f.write_char('0')?;
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        if let Some(ty) = self.spec_type {
            f.write_char(ty.as_char())?;
        }
        Ok(())
    }
}

/// Parse a portable format specification (the text between `{:` and `}`).
///
/// Syntax: `[[fill]align][sign][#][0][width][.precision][type]`
///
/// Parsing is lenient: an unknown type character leaves `spec_type` unset
/// and anything after it is ignored. This matches the translator, which
/// degrades rather than fails.
///
/// ```ignore
/// parse_portable_spec("<+08.2f") // align=Left, sign=Plus, zero_pad, width=8, precision=2
/// parse_portable_spec("04d")     // zero_pad, width=4, type=Decimal
/// ```
pub fn parse_portable_spec(spec: &str) -> PortableSpec {
    let mut result = PortableSpec::EMPTY;
    let chars: Vec<char> = spec.chars().collect();
    let mut pos = 0;

    // [[fill]align]
    if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
        result.fill = Some(chars[0]);
        result.align = Some(align);
        pos = 2;
    } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
        result.align = Some(align);
        pos = 1;
    }

    // [sign]
    match chars.get(pos) {
        Some('+') => result.sign = Some(Sign::Plus),
        Some('-') => result.sign = Some(Sign::Minus),
        Some(' ') => result.sign = Some(Sign::Space),
        _ => {}
    }
    if result.sign.is_some() {
        pos += 1;
    }

    // [#]
    if chars.get(pos) == Some(&'#') {
        result.alternate = true;
        pos += 1;
    }

    // [0]
    if chars.get(pos) == Some(&'0') {
        result.zero_pad = true;
        pos += 1;
    }

    // [width]
    let (width, next) = parse_number(&chars, pos);
    result.width = width;
    pos = next;

    // [.precision]
    if chars.get(pos) == Some(&'.') {
        let (precision, next) = parse_number(&chars, pos + 1);
        // `.` with no digits means precision 0
        result.precision = Some(precision.unwrap_or(0));
        pos = next;
    }

    // [type]
    result.spec_type = chars.get(pos).copied().and_then(SpecType::from_char);

    result
}

/// Parse a run of ASCII digits starting at `pos`.
///
/// Overlong runs saturate instead of failing.
pub(crate) fn parse_number(chars: &[char], mut pos: usize) -> (Option<usize>, usize) {
    let start = pos;
    let mut value: usize = 0;
    while let Some(digit) = chars.get(pos).and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(digit as usize);
        pos += 1;
    }
    if pos > start {
        (Some(value), pos)
    } else {
        (None, pos)
    }
}

#[cfg(test)]
mod tests;
