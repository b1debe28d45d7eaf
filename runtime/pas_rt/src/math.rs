//! Arithmetic routines from `System` and `Math`.
//!
//! Real routines are generic over [`Real`] and compute in `f64`, narrowing
//! back to the argument's type. `Round` rounds half away from zero, like
//! C `round`, not banker's rounding.

use crate::error::{Exception, ExceptionKind, RtResult};
use crate::scalar::{Double, Extended, Int64, Integer, ShortInt, Single, SmallInt};

/// A Pascal real type.
pub trait Real: Copy + PartialOrd {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl Real for Single {
    #[inline]
    fn to_f64(self) -> f64 {
        Single::to_f64(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Single::new(value as f32)
    }
}

impl Real for Double {
    #[inline]
    fn to_f64(self) -> f64 {
        self.raw()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Double::new(value)
    }
}

impl Real for Extended {
    #[inline]
    fn to_f64(self) -> f64 {
        self.raw()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Extended::new(value)
    }
}

/// A signed numeric type: the domain of `Abs`, `Sqr` and `Sign`.
pub trait Signed: Copy + PartialOrd {
    fn abs(self) -> Self;
    fn sqr(self) -> Self;
    fn sign(self) -> Integer;
}

macro_rules! signed_int {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Signed for $ty {
                #[inline]
                fn abs(self) -> Self {
                    $ty::new(self.raw().wrapping_abs())
                }

                #[inline]
                fn sqr(self) -> Self {
                    $ty::new(self.raw().wrapping_mul(self.raw()))
                }

                #[inline]
                fn sign(self) -> Integer {
                    Integer::truncate_from(self.raw().signum())
                }
            }
        )*
    };
}

signed_int!(ShortInt, SmallInt, Integer, Int64);

macro_rules! signed_real {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Signed for $ty {
                #[inline]
                fn abs(self) -> Self {
                    $ty::new(self.raw().abs())
                }

                #[inline]
                fn sqr(self) -> Self {
                    $ty::new(self.raw() * self.raw())
                }

                fn sign(self) -> Integer {
                    if self.raw() > 0.0 {
                        Integer::ONE
                    } else if self.raw() < 0.0 {
                        Integer::new(-1)
                    } else {
                        Integer::ZERO
                    }
                }
            }
        )*
    };
}

signed_real!(Single, Double, Extended);

/// `Abs(x)`. The most negative integer stays as it is.
pub fn abs<T: Signed>(value: T) -> T {
    value.abs()
}

/// `Sqr(x)`: `x * x`, wrapping for integers.
pub fn sqr<T: Signed>(value: T) -> T {
    value.sqr()
}

/// `Sign(x)`: -1, 0 or 1. NaN has sign 0.
pub fn sign<T: Signed>(value: T) -> Integer {
    value.sign()
}

/// `Min(a, b)`.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// `Max(a, b)`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// `Pi`.
pub fn pi() -> Double {
    Double::new(std::f64::consts::PI)
}

fn invalid_op() -> Exception {
    ExceptionKind::MathError.raise("Invalid floating point operation")
}

/// Convert an integral-valued `f64` to `i64` when it fits in `bits`.
fn integral(value: f64, bits: u32) -> RtResult<i64> {
    let limit = 2f64.powi(bits as i32 - 1);
    if value.is_nan() || value < -limit || value >= limit {
        return Err(invalid_op());
    }
    Ok(value as i64)
}

/// `Trunc(x)`: toward zero. Out-of-range and NaN values raise
/// `EMathError`.
pub fn trunc<T: Real>(value: T) -> RtResult<Integer> {
    integral(value.to_f64().trunc(), 32).map(|v| Integer::new(v as i32))
}

pub fn trunc64<T: Real>(value: T) -> RtResult<Int64> {
    integral(value.to_f64().trunc(), 64).map(Int64::new)
}

/// `Round(x)`: to nearest, half away from zero.
pub fn round<T: Real>(value: T) -> RtResult<Integer> {
    integral(value.to_f64().round(), 32).map(|v| Integer::new(v as i32))
}

pub fn round64<T: Real>(value: T) -> RtResult<Int64> {
    integral(value.to_f64().round(), 64).map(Int64::new)
}

macro_rules! forward {
    ($($(#[$meta:meta])* $name:ident => $method:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name<T: Real>(value: T) -> T {
                T::from_f64(value.to_f64().$method())
            }
        )*
    };
}

forward!(
    sqrt => sqrt,
    /// `Int(x)`: the integral part, rounded toward negative infinity.
    int => floor,
    ceil => ceil,
    floor => floor,
    sin => sin,
    cos => cos,
    tan => tan,
    arc_sin => asin,
    arc_cos => acos,
    arc_tan => atan,
    sinh => sinh,
    cosh => cosh,
    tanh => tanh,
    arc_sinh => asinh,
    arc_cosh => acosh,
    arc_tanh => atanh,
    /// Natural logarithm.
    ln => ln,
    exp => exp,
    log10 => log10,
    log2 => log2,
);

/// `Frac(x)`: `x - Int(x)`. Never negative for finite `x`.
pub fn frac<T: Real>(value: T) -> T {
    let v = value.to_f64();
    T::from_f64(v - v.floor())
}

/// `Power(base, exponent)`.
pub fn power<T: Real>(base: T, exponent: T) -> T {
    T::from_f64(base.to_f64().powf(exponent.to_f64()))
}

/// `ArcTan2(y, x)`.
pub fn arc_tan2<T: Real>(y: T, x: T) -> T {
    T::from_f64(y.to_f64().atan2(x.to_f64()))
}

/// `LogN(base, x)`.
pub fn log_n<T: Real>(base: T, value: T) -> T {
    T::from_f64(value.to_f64().log(base.to_f64()))
}

#[cfg(test)]
mod tests;
