//! Pascal `String`: UTF-16 code units with origin-1 indexing.
//!
//! Every routine here follows Pascal's leniency rules: `copy` and `delete`
//! clamp out-of-range arguments instead of raising, `pos` reports "not
//! found" as 0. Direct indexing (`s[i]`) is the exception: an index outside
//! `1..=length` is a caller bug and panics, the way a range-checked Pascal
//! build would stop.
//!
//! Case mapping and whitespace trimming are ASCII-only and
//! locale-independent.

mod codec;

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

use crate::scalar::{Char, Integer, Ordinal};

pub use codec::CodePoints;

/// A Pascal string.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasString {
    units: Vec<Char>,
}

impl PasString {
    /// The empty string.
    #[inline]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Build from raw UTF-16 code units. Unpaired surrogates are kept.
    pub fn from_utf16(units: &[u16]) -> Self {
        Self {
            units: units.iter().copied().map(Char::new).collect(),
        }
    }

    /// `StringOfChar(c, count)`. A non-positive count yields `''`.
    pub fn string_of_char(c: Char, count: impl Ordinal) -> Self {
        let count = usize::try_from(count.ordinal()).unwrap_or(0);
        Self {
            units: vec![c; count],
        }
    }

    /// Number of code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// `Length(s)`.
    #[inline]
    pub fn length(&self) -> Integer {
        Integer::truncate_from(self.units.len())
    }

    /// The code units, origin 0.
    #[inline]
    pub fn units(&self) -> &[Char] {
        &self.units
    }

    pub fn to_utf16(&self) -> Vec<u16> {
        self.units.iter().map(|c| c.raw()).collect()
    }

    /// The unit at 1-based `index`, or `None` outside `1..=length`.
    pub fn get(&self, index: impl Ordinal) -> Option<Char> {
        self.offset(index).map(|i| self.units[i])
    }

    /// `s[index]`.
    ///
    /// # Panics
    /// If `index` is outside `1..=length`.
    #[inline]
    pub fn char_at(&self, index: impl Ordinal) -> Char {
        self[index]
    }

    /// `s[index] := c`.
    ///
    /// # Panics
    /// If `index` is outside `1..=length`.
    #[inline]
    pub fn set_char(&mut self, index: impl Ordinal, c: Char) {
        self[index] = c;
    }

    pub fn push(&mut self, c: Char) {
        self.units.push(c);
    }

    /// Append UTF-8 text, splitting supplementary characters into
    /// surrogate pairs.
    pub fn push_str(&mut self, text: &str) {
        self.units
            .extend(text.encode_utf16().map(Char::new));
    }

    pub fn append(&mut self, other: &PasString) {
        self.units.extend_from_slice(&other.units);
    }

    /// `SetLength(s, n)`: truncate, or pad with `#0`.
    pub fn set_length(&mut self, new_len: impl Ordinal) {
        let new_len = usize::try_from(new_len.ordinal()).unwrap_or(0);
        self.units.resize(new_len, Char::NUL);
    }

    /// `Copy(s, index, count)`.
    ///
    /// `index < 1` counts from 1. An `index` past the end or a non-positive
    /// `count` yields `''`. `count` is clamped to what remains.
    pub fn copy(&self, index: impl Ordinal, count: impl Ordinal) -> Self {
        let len = self.units.len() as i64;
        let start = index.ordinal().max(1);
        let count = count.ordinal();
        if start > len || count <= 0 {
            return Self::new();
        }
        let take = count.min(len - start + 1);
        let from = (start - 1) as usize;
        Self {
            units: self.units[from..from + take as usize].to_vec(),
        }
    }

    /// `Delete(s, index, count)`.
    ///
    /// No-op when `index` is outside `1..=length` or `count <= 0`.
    pub fn delete(&mut self, index: impl Ordinal, count: impl Ordinal) {
        let Some(from) = self.offset(index) else {
            return;
        };
        let count = count.ordinal();
        if count <= 0 {
            return;
        }
        let remaining = (self.units.len() - from) as i64;
        let to = from + count.min(remaining) as usize;
        self.units.drain(from..to);
    }

    /// `Insert(source, s, index)`.
    ///
    /// `index < 1` inserts at the front; past the end appends.
    pub fn insert(&mut self, source: &PasString, index: impl Ordinal) {
        let len = self.units.len() as i64;
        let at = (index.ordinal().clamp(1, len + 1) - 1) as usize;
        self.units.splice(at..at, source.units.iter().copied());
    }

    /// `Pos(sub, s)`: 1-based position of the first occurrence, 0 if absent
    /// or if `sub` is empty.
    pub fn pos(&self, sub: &PasString) -> Integer {
        self.pos_from(sub, 1)
    }

    /// `PosEx(sub, s, offset)`: search starting at 1-based `offset`.
    pub fn pos_from(&self, sub: &PasString, offset: impl Ordinal) -> Integer {
        let Some(start) = self.offset(offset) else {
            return Integer::ZERO;
        };
        match find_units(&self.units[start..], &sub.units) {
            Some(found) => Integer::truncate_from(start + found + 1),
            None => Integer::ZERO,
        }
    }

    /// `UpperCase(s)`, ASCII only.
    pub fn upper_case(&self) -> Self {
        self.map_units(Char::up_case)
    }

    /// `LowerCase(s)`, ASCII only.
    pub fn lower_case(&self) -> Self {
        self.map_units(Char::low_case)
    }

    /// `SameText(a, b)`: equal after ASCII case folding.
    pub fn same_text(&self, other: &PasString) -> bool {
        self.units.len() == other.units.len()
            && self
                .units
                .iter()
                .zip(&other.units)
                .all(|(a, b)| a.up_case() == b.up_case())
    }

    /// `CompareStr(a, b)`: -1, 0 or 1 by code unit order.
    pub fn compare_str(&self, other: &PasString) -> Integer {
        match self.units.cmp(&other.units) {
            std::cmp::Ordering::Less => Integer::new(-1),
            std::cmp::Ordering::Equal => Integer::ZERO,
            std::cmp::Ordering::Greater => Integer::ONE,
        }
    }

    /// `Trim(s)`: strip space, tab, LF and CR from both ends.
    pub fn trim(&self) -> Self {
        self.trim_left().trim_right()
    }

    pub fn trim_left(&self) -> Self {
        let start = self
            .units
            .iter()
            .position(|c| !c.is_white_space())
            .unwrap_or(self.units.len());
        Self {
            units: self.units[start..].to_vec(),
        }
    }

    pub fn trim_right(&self) -> Self {
        let end = self
            .units
            .iter()
            .rposition(|c| !c.is_white_space())
            .map_or(0, |i| i + 1);
        Self {
            units: self.units[..end].to_vec(),
        }
    }

    /// `QuotedStr(s)`: wrap in single quotes, doubling embedded ones.
    pub fn quoted_str(&self) -> Self {
        let quote = Char::from(b'\'');
        let mut out = Self::with_capacity(self.units.len() + 2);
        out.push(quote);
        for &c in &self.units {
            out.push(c);
            if c == quote {
                out.push(quote);
            }
        }
        out.push(quote);
        out
    }

    /// `StringReplace(s, old, new, [rfReplaceAll])`.
    ///
    /// An empty `old` returns the input unchanged.
    pub fn string_replace(&self, old: &PasString, new: &PasString) -> Self {
        if old.is_empty() {
            return self.clone();
        }
        let mut out = Self::with_capacity(self.units.len());
        let mut rest = &self.units[..];
        while let Some(found) = find_units(rest, &old.units) {
            out.units.extend_from_slice(&rest[..found]);
            out.units.extend_from_slice(&new.units);
            rest = &rest[found + old.units.len()..];
        }
        out.units.extend_from_slice(rest);
        out
    }

    fn map_units(&self, f: impl Fn(Char) -> Char) -> Self {
        Self {
            units: self.units.iter().copied().map(f).collect(),
        }
    }

    /// Convert a 1-based index to a vector offset, if in range.
    fn offset(&self, index: impl Ordinal) -> Option<usize> {
        let index = usize::try_from(index.ordinal()).ok()?;
        (1..=self.units.len()).contains(&index).then(|| index - 1)
    }
}

/// First occurrence of `needle` in `haystack`. An empty needle never matches.
fn find_units(haystack: &[Char], needle: &[Char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

// Indexing

impl<I: Ordinal> Index<I> for PasString {
    type Output = Char;

    fn index(&self, index: I) -> &Char {
        let i = index.ordinal();
        match self.offset(index) {
            Some(offset) => &self.units[offset],
            None => panic!("string index {i} out of range 1..={}", self.units.len()),
        }
    }
}

impl<I: Ordinal> IndexMut<I> for PasString {
    fn index_mut(&mut self, index: I) -> &mut Char {
        let i = index.ordinal();
        match self.offset(index) {
            Some(offset) => &mut self.units[offset],
            None => panic!("string index {i} out of range 1..={}", self.units.len()),
        }
    }
}

// Conversions

impl From<&str> for PasString {
    fn from(text: &str) -> Self {
        let mut s = Self::with_capacity(text.len());
        s.push_str(text);
        s
    }
}

impl From<String> for PasString {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<&String> for PasString {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<Char> for PasString {
    fn from(c: Char) -> Self {
        Self { units: vec![c] }
    }
}

impl From<Vec<Char>> for PasString {
    fn from(units: Vec<Char>) -> Self {
        Self { units }
    }
}

impl FromIterator<Char> for PasString {
    fn from_iter<T: IntoIterator<Item = Char>>(iter: T) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl PartialEq<str> for PasString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().map(|c| c.raw()).eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for PasString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

// Concatenation

impl Add<&PasString> for PasString {
    type Output = PasString;

    fn add(mut self, rhs: &PasString) -> PasString {
        self.append(rhs);
        self
    }
}

impl Add<&str> for PasString {
    type Output = PasString;

    fn add(mut self, rhs: &str) -> PasString {
        self.push_str(rhs);
        self
    }
}

impl Add<Char> for PasString {
    type Output = PasString;

    fn add(mut self, rhs: Char) -> PasString {
        self.push(rhs);
        self
    }
}

impl AddAssign<&PasString> for PasString {
    fn add_assign(&mut self, rhs: &PasString) {
        self.append(rhs);
    }
}

impl AddAssign<&str> for PasString {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

impl AddAssign<Char> for PasString {
    fn add_assign(&mut self, rhs: Char) {
        self.push(rhs);
    }
}

impl fmt::Display for PasString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            use fmt::Write;
            return self.code_points().try_for_each(|c| f.write_char(c));
        }
        f.pad(&self.to_utf8())
    }
}

impl fmt::Debug for PasString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_utf8(), f)
    }
}
