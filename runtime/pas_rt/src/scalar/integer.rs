//! Integer wrappers.
//!
//! Generated by [`define_integer!`] so every width shares one contract:
//! wrapping `+ - *`, bitwise `and or xor not shl shr`, `/` into `Double`,
//! checked-divisor `div_trunc`/`modulo`, `Inc`/`Dec`, `Succ`/`Pred`.

use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Neg, Not, Shl, Shr, Sub,
    SubAssign,
};

use super::{Double, Ordinal};
use crate::error::{ExceptionKind, RtResult};

macro_rules! define_integer {
    ($(#[$meta:meta])* $name:ident($native:ty)) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name($native);

        impl $name {
            pub const MIN: Self = Self(<$native>::MIN);
            pub const MAX: Self = Self(<$native>::MAX);
            pub const ZERO: Self = Self(0);
            pub const ONE: Self = Self(1);

            #[inline]
            pub const fn new(value: $native) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn raw(self) -> $native {
                self.0
            }

            /// Pascal `div`: quotient truncated toward zero.
            ///
            /// A zero divisor raises `EDivByZero`. `MIN div -1` wraps.
            pub fn div_trunc(self, rhs: Self) -> RtResult<Self> {
                if rhs.0 == 0 {
                    return Err(ExceptionKind::DivByZero.raise("Division by zero"));
                }
                Ok(Self(self.0.wrapping_div(rhs.0)))
            }

            /// Pascal `mod`: remainder with the sign of the dividend.
            ///
            /// `a.div_trunc(b)? * b + a.modulo(b)? == a` for every `b != 0`.
            pub fn modulo(self, rhs: Self) -> RtResult<Self> {
                if rhs.0 == 0 {
                    return Err(ExceptionKind::DivByZero.raise("Division by zero"));
                }
                Ok(Self(self.0.wrapping_rem(rhs.0)))
            }

            /// `Inc(x)`.
            #[inline]
            pub fn inc(&mut self) {
                self.0 = self.0.wrapping_add(1);
            }

            /// `Inc(x, n)`.
            #[inline]
            pub fn inc_by(&mut self, amount: impl Ordinal) {
                self.0 = self.0.wrapping_add(amount.ordinal() as $native);
            }

            /// `Dec(x)`.
            #[inline]
            pub fn dec(&mut self) {
                self.0 = self.0.wrapping_sub(1);
            }

            /// `Dec(x, n)`.
            #[inline]
            pub fn dec_by(&mut self, amount: impl Ordinal) {
                self.0 = self.0.wrapping_sub(amount.ordinal() as $native);
            }

            #[inline]
            pub const fn odd(self) -> bool {
                self.0 & 1 != 0
            }

            #[inline]
            pub const fn succ(self) -> Self {
                Self(self.0.wrapping_add(1))
            }

            #[inline]
            pub const fn pred(self) -> Self {
                Self(self.0.wrapping_sub(1))
            }

            /// Widen to `Double` (Pascal's implicit integer-to-real).
            #[inline]
            pub fn to_double(self) -> Double {
                Double::new(self.0 as f64)
            }
        }

        impl From<$native> for $name {
            #[inline]
            fn from(value: $native) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $native {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Ordinal for $name {
            #[inline]
            fn ordinal(self) -> i64 {
                self.0 as i64
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        // Wrapping arithmetic

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self(self.0.wrapping_mul(rhs.0))
            }
        }

        impl Add<$native> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $native) -> Self {
                Self(self.0.wrapping_add(rhs))
            }
        }

        impl Sub<$native> for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $native) -> Self {
                Self(self.0.wrapping_sub(rhs))
            }
        }

        impl Mul<$native> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $native) -> Self {
                Self(self.0.wrapping_mul(rhs))
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        /// Pascal `/` on integers is real division.
        impl Div for $name {
            type Output = Double;

            #[inline]
            fn div(self, rhs: Self) -> Double {
                Double::new(self.0 as f64 / rhs.0 as f64)
            }
        }

        impl Div<$native> for $name {
            type Output = Double;

            #[inline]
            fn div(self, rhs: $native) -> Double {
                Double::new(self.0 as f64 / rhs as f64)
            }
        }

        // Bitwise (cannot overflow)

        impl BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitXor for $name {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        /// `shl`: the count is masked to the bit width.
        impl<R: Ordinal> Shl<R> for $name {
            type Output = Self;

            #[inline]
            fn shl(self, rhs: R) -> Self {
                Self(self.0.wrapping_shl(rhs.ordinal() as u32))
            }
        }

        /// `shr`: arithmetic for signed types, logical for unsigned.
        impl<R: Ordinal> Shr<R> for $name {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: R) -> Self {
                Self(self.0.wrapping_shr(rhs.ordinal() as u32))
            }
        }

        // Comparison against the native type

        impl PartialEq<$native> for $name {
            #[inline]
            fn eq(&self, other: &$native) -> bool {
                self.0 == *other
            }
        }

        impl PartialOrd<$native> for $name {
            #[inline]
            fn partial_cmp(&self, other: &$native) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }
    };
}

/// Signed-only operations: negation and `Abs`.
macro_rules! signed_ops {
    ($($name:ident),*) => {
        $(
            impl Neg for $name {
                type Output = Self;

                #[inline]
                fn neg(self) -> Self {
                    Self(self.0.wrapping_neg())
                }
            }

            impl $name {
                /// `Abs(x)`; `Abs(MIN)` wraps to `MIN`.
                #[inline]
                pub const fn abs(self) -> Self {
                    Self(self.0.wrapping_abs())
                }
            }
        )*
    };
}

/// Lossless widenings Pascal performs implicitly.
macro_rules! widen {
    ($from:ident => $($to:ident),+) => {
        $(
            impl From<$from> for $to {
                #[inline]
                fn from(value: $from) -> Self {
                    Self(value.0.into())
                }
            }
        )+
    };
}

define_integer!(
    /// `ShortInt`: 8-bit signed.
    ShortInt(i8)
);
define_integer!(
    /// `SmallInt`: 16-bit signed.
    SmallInt(i16)
);
define_integer!(
    /// `Integer`: 32-bit signed.
    Integer(i32)
);
define_integer!(
    /// `Int64`: 64-bit signed.
    Int64(i64)
);
define_integer!(
    /// `Byte`: 8-bit unsigned.
    Byte(u8)
);
define_integer!(
    /// `Word`: 16-bit unsigned.
    Word(u16)
);
define_integer!(
    /// `Cardinal`: 32-bit unsigned.
    Cardinal(u32)
);
define_integer!(
    /// `UInt64`: 64-bit unsigned.
    UInt64(u64)
);

signed_ops!(ShortInt, SmallInt, Integer, Int64);

widen!(ShortInt => SmallInt, Integer, Int64);
widen!(SmallInt => Integer, Int64);
widen!(Integer => Int64);
widen!(Byte => SmallInt, Word, Integer, Cardinal, Int64, UInt64);
widen!(Word => Integer, Cardinal, Int64, UInt64);
widen!(Cardinal => Int64, UInt64);

impl Integer {
    /// Truncate a wider ordinal to 32 bits, as an explicit Pascal cast does.
    #[inline]
    pub fn truncate_from(value: impl Ordinal) -> Self {
        Self(value.ordinal() as i32)
    }
}

impl Int64 {
    #[inline]
    pub fn truncate_from(value: impl Ordinal) -> Self {
        Self(value.ordinal())
    }
}

impl Byte {
    #[inline]
    pub fn truncate_from(value: impl Ordinal) -> Self {
        Self(value.ordinal() as u8)
    }
}

impl Word {
    /// `Swap(w)`: exchange the high and low bytes.
    #[inline]
    pub const fn swap_bytes(self) -> Self {
        Self(self.0.swap_bytes())
    }
}
