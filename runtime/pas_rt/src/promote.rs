//! Mixed-type operator promotion.
//!
//! A closed table of `(left, right) => result` rules. Each rule converts
//! both operands losslessly (or, for integer-to-real, the way Pascal does
//! implicitly) into the result type and applies the same-type operator.
//! `/` follows the result type: integer results divide into `Double`, real
//! results stay in their own type.
//!
//! A pair missing from the table is a compile error at the call site.

use std::ops::{Add, Div, Mul, Sub};

use crate::scalar::{
    Byte, Cardinal, Double, Extended, Int64, Integer, ShortInt, Single, SmallInt, UInt64, Word,
};

/// The common type two operands are converted to before an operator runs.
pub trait Promote<Rhs> {
    type Output;

    /// Convert both operands to the common type.
    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// Integer-to-real conversions (Pascal assigns any integer to any real).
macro_rules! int_to_real {
    ($real:ident($native:ty): $($int:ident),+) => {
        $(
            impl From<$int> for $real {
                #[inline]
                fn from(value: $int) -> Self {
                    $real::new(value.raw() as $native)
                }
            }
        )+
    };
}

int_to_real!(Single(f32): ShortInt, SmallInt, Integer, Int64, Byte, Word, Cardinal, UInt64);
int_to_real!(Double(f64): ShortInt, SmallInt, Integer, Int64, Byte, Word, Cardinal, UInt64);
int_to_real!(Extended(f64): ShortInt, SmallInt, Integer, Int64, Byte, Word, Cardinal, UInt64);

/// One directed rule: `$lhs op $rhs` computes in `$out`.
macro_rules! promote_one {
    ($lhs:ident, $rhs:ident => $out:ident) => {
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn promote(self, rhs: $rhs) -> ($out, $out) {
                ($out::from(self), $out::from(rhs))
            }
        }

        impl Add<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn add(self, rhs: $rhs) -> $out {
                let (a, b) = self.promote(rhs);
                a + b
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn sub(self, rhs: $rhs) -> $out {
                let (a, b) = self.promote(rhs);
                a - b
            }
        }

        impl Mul<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn mul(self, rhs: $rhs) -> $out {
                let (a, b) = self.promote(rhs);
                a * b
            }
        }

        impl Div<$rhs> for $lhs {
            type Output = <$out as Div>::Output;

            #[inline]
            fn div(self, rhs: $rhs) -> Self::Output {
                let (a, b) = self.promote(rhs);
                a / b
            }
        }
    };
}

/// A symmetric rule: both operand orders compute in `$out`.
macro_rules! promote {
    ($($a:ident, $b:ident => $out:ident;)+) => {
        $(
            promote_one!($a, $b => $out);
            promote_one!($b, $a => $out);
        )+
    };
}

// Integer × real: the real wins.
promote! {
    ShortInt, Single => Single;
    SmallInt, Single => Single;
    Integer, Single => Single;
    Int64, Single => Single;
    Byte, Single => Single;
    Word, Single => Single;
    Cardinal, Single => Single;
    UInt64, Single => Single;

    ShortInt, Double => Double;
    SmallInt, Double => Double;
    Integer, Double => Double;
    Int64, Double => Double;
    Byte, Double => Double;
    Word, Double => Double;
    Cardinal, Double => Double;
    UInt64, Double => Double;

    ShortInt, Extended => Extended;
    SmallInt, Extended => Extended;
    Integer, Extended => Extended;
    Int64, Extended => Extended;
    Byte, Extended => Extended;
    Word, Extended => Extended;
    Cardinal, Extended => Extended;
    UInt64, Extended => Extended;
}

// Real × real: the wider real wins.
promote! {
    Single, Double => Double;
    Single, Extended => Extended;
    Double, Extended => Extended;
}

// Integer × integer.
promote! {
    // Anything narrower than Integer computes in Integer.
    ShortInt, SmallInt => Integer;
    ShortInt, Byte => Integer;
    ShortInt, Word => Integer;
    SmallInt, Byte => Integer;
    SmallInt, Word => Integer;
    Byte, Word => Integer;
    ShortInt, Integer => Integer;
    SmallInt, Integer => Integer;
    Byte, Integer => Integer;
    Word, Integer => Integer;

    // Unsigned narrow with Cardinal stays unsigned.
    Byte, Cardinal => Cardinal;
    Word, Cardinal => Cardinal;

    // Signed with Cardinal needs 64 bits.
    ShortInt, Cardinal => Int64;
    SmallInt, Cardinal => Int64;
    Integer, Cardinal => Int64;

    // Anything up to 32 bits with Int64.
    ShortInt, Int64 => Int64;
    SmallInt, Int64 => Int64;
    Integer, Int64 => Int64;
    Byte, Int64 => Int64;
    Word, Int64 => Int64;
    Cardinal, Int64 => Int64;

    // Unsigned with UInt64.
    Byte, UInt64 => UInt64;
    Word, UInt64 => UInt64;
    Cardinal, UInt64 => UInt64;
}

#[cfg(test)]
mod tests;
