use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use super::Ordinal;

/// `Boolean`. Orders `False < True`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Boolean(bool);

impl Boolean {
    pub const FALSE: Self = Self(false);
    pub const TRUE: Self = Self(true);

    #[inline]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn raw(self) -> bool {
        self.0
    }

    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        Self(self.0 != other.0)
    }

    /// `Succ`/`Pred` on a two-value ordinal flip it.
    #[inline]
    pub const fn succ(self) -> Self {
        Self(!self.0)
    }

    #[inline]
    pub const fn pred(self) -> Self {
        Self(!self.0)
    }
}

impl From<bool> for Boolean {
    #[inline]
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Boolean> for bool {
    #[inline]
    fn from(value: Boolean) -> Self {
        value.0
    }
}

impl Ordinal for Boolean {
    #[inline]
    fn ordinal(self) -> i64 {
        i64::from(self.0)
    }
}

impl PartialEq<bool> for Boolean {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl BitAnd for Boolean {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Boolean {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Boolean {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.xor(rhs)
    }
}

impl Not for Boolean {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(if self.0 { "True" } else { "False" })
    }
}
