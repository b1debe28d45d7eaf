//! Floating-point wrappers: `Single`, `Double`, `Extended`.
//!
//! `Extended` is stored as `f64`. Rust has no 80-bit float; the type stays
//! distinct so promotion still picks it as the widest real.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! define_real {
    ($(#[$meta:meta])* $name:ident($native:ty)) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
        #[repr(transparent)]
        pub struct $name($native);

        impl $name {
            pub const ZERO: Self = Self(0.0);

            #[inline]
            pub const fn new(value: $native) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn raw(self) -> $native {
                self.0
            }

            /// The value as `f64`, for routines that compute in double
            /// precision.
            #[inline]
            pub fn to_f64(self) -> f64 {
                f64::from(self.0)
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

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        real_binop!($name, $native, Add, add, AddAssign, add_assign, +);
        real_binop!($name, $native, Sub, sub, SubAssign, sub_assign, -);
        real_binop!($name, $native, Mul, mul, MulAssign, mul_assign, *);
        real_binop!($name, $native, Div, div, DivAssign, div_assign, /);

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

macro_rules! real_binop {
    ($name:ident, $native:ty, $trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt) => {
        impl $trait for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $op rhs.0)
            }
        }

        impl $trait<$native> for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: $native) -> Self {
                Self(self.0 $op rhs)
            }
        }

        impl $assign for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };
}

define_real!(
    /// `Single`: 32-bit IEEE float.
    Single(f32)
);
define_real!(
    /// `Double`: 64-bit IEEE float.
    Double(f64)
);
define_real!(
    /// `Extended`: widest real, stored as 64-bit IEEE float.
    Extended(f64)
);

impl From<Single> for Double {
    #[inline]
    fn from(value: Single) -> Self {
        Self(f64::from(value.0))
    }
}

impl From<Single> for Extended {
    #[inline]
    fn from(value: Single) -> Self {
        Self(f64::from(value.0))
    }
}

impl From<Double> for Extended {
    #[inline]
    fn from(value: Double) -> Self {
        Self(value.0)
    }
}

impl From<Extended> for Double {
    #[inline]
    fn from(value: Extended) -> Self {
        Self(value.0)
    }
}
