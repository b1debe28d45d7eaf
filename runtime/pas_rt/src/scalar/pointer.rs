use std::fmt;
use std::ops::{Add, Sub};

use super::{Integer, UInt64};

/// `Pointer`: an opaque address.
///
/// Addresses are plain numbers. Memory behind them is owned by a
/// [`crate::memory::MemoryArena`]; a `Pointer` is never dereferenced
/// directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Pointer(usize);

impl Pointer {
    pub const NIL: Self = Self(0);

    #[inline]
    pub const fn new(address: usize) -> Self {
        Self(address)
    }

    #[inline]
    pub const fn address(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_nil(self) -> bool {
        self.0 == 0
    }

    /// `Assigned(p)`.
    #[inline]
    pub const fn assigned(self) -> bool {
        self.0 != 0
    }

    /// `Integer(p)`: truncates on 64-bit targets.
    #[inline]
    pub const fn to_integer(self) -> Integer {
        Integer::new(self.0 as i32)
    }
}

impl Add<Integer> for Pointer {
    type Output = Self;

    #[inline]
    fn add(self, offset: Integer) -> Self {
        Self(self.0.wrapping_add_signed(offset.raw() as isize))
    }
}

impl Sub<Integer> for Pointer {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Integer) -> Self {
        Self(self.0.wrapping_add_signed((offset.raw() as isize).wrapping_neg()))
    }
}

impl Add<UInt64> for Pointer {
    type Output = Self;

    #[inline]
    fn add(self, offset: UInt64) -> Self {
        Self(self.0.wrapping_add(offset.raw() as usize))
    }
}

impl Sub<UInt64> for Pointer {
    type Output = Self;

    #[inline]
    fn sub(self, offset: UInt64) -> Self {
        Self(self.0.wrapping_sub(offset.raw() as usize))
    }
}

impl Add<usize> for Pointer {
    type Output = Self;

    #[inline]
    fn add(self, offset: usize) -> Self {
        Self(self.0.wrapping_add(offset))
    }
}

impl From<Pointer> for UInt64 {
    #[inline]
    fn from(p: Pointer) -> Self {
        UInt64::new(p.0 as u64)
    }
}

impl From<UInt64> for Pointer {
    #[inline]
    fn from(value: UInt64) -> Self {
        Self(value.raw() as usize)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            f.pad("nil")
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}
