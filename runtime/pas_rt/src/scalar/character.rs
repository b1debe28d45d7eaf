//! `Char`: one UTF-16 code unit.
//!
//! Case mapping and classification are ASCII-only and locale-independent.

use std::fmt;

use super::{Integer, Ordinal};
use crate::error::{Exception, ExceptionKind};

/// `Char`: a UTF-16 code unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Char(u16);

impl Char {
    pub const NUL: Self = Self(0);
    pub const SPACE: Self = Self(b' ' as u16);

    #[inline]
    pub const fn new(unit: u16) -> Self {
        Self(unit)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// A character from an ASCII (or Latin-1) byte.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte as u16)
    }

    /// `Chr(n)`: keeps the low 16 bits.
    #[inline]
    pub fn chr(code: impl Ordinal) -> Self {
        Self(code.ordinal() as u16)
    }

    /// `Ord(c)`.
    #[inline]
    pub const fn ord(self) -> Integer {
        Integer::new(self.0 as i32)
    }

    #[inline]
    pub const fn succ(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[inline]
    pub const fn pred(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    /// `UpCase(c)`, ASCII only.
    #[inline]
    pub const fn up_case(self) -> Self {
        if self.is_ascii_lower() {
            Self(self.0 - 32)
        } else {
            self
        }
    }

    /// `LowCase(c)`, ASCII only.
    #[inline]
    pub const fn low_case(self) -> Self {
        if self.is_ascii_upper() {
            Self(self.0 + 32)
        } else {
            self
        }
    }

    #[inline]
    pub const fn is_digit(self) -> bool {
        matches!(self.0, 0x30..=0x39)
    }

    #[inline]
    pub const fn is_letter(self) -> bool {
        self.is_ascii_upper() || self.is_ascii_lower()
    }

    #[inline]
    pub const fn is_letter_or_digit(self) -> bool {
        self.is_letter() || self.is_digit()
    }

    /// Space, tab, LF or CR.
    #[inline]
    pub const fn is_white_space(self) -> bool {
        matches!(self.0, 0x20 | 0x09 | 0x0A | 0x0D)
    }

    #[inline]
    pub const fn is_high_surrogate(self) -> bool {
        matches!(self.0, 0xD800..=0xDBFF)
    }

    #[inline]
    pub const fn is_low_surrogate(self) -> bool {
        matches!(self.0, 0xDC00..=0xDFFF)
    }

    const fn is_ascii_upper(self) -> bool {
        matches!(self.0, 0x41..=0x5A)
    }

    const fn is_ascii_lower(self) -> bool {
        matches!(self.0, 0x61..=0x7A)
    }
}

impl From<u16> for Char {
    #[inline]
    fn from(unit: u16) -> Self {
        Self(unit)
    }
}

impl From<u8> for Char {
    #[inline]
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

/// Only Basic Multilingual Plane characters fit in one code unit.
impl TryFrom<char> for Char {
    type Error = Exception;

    fn try_from(c: char) -> Result<Self, Exception> {
        u16::try_from(u32::from(c)).map(Self).map_err(|_| {
            ExceptionKind::RangeError.raise(format!(
                "character U+{:04X} does not fit in Char",
                u32::from(c)
            ))
        })
    }
}

impl Ordinal for Char {
    #[inline]
    fn ordinal(self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for Char {
    /// Lone surrogates print as U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = char::from_u32(u32::from(self.0)).unwrap_or(char::REPLACEMENT_CHARACTER);
        fmt::Display::fmt(&c, f)
    }
}
