//! Exact-width scalar wrappers for Pascal's ordinal and real types.
//!
//! Each wrapper holds one primitive and never silently changes width.
//! Integer arithmetic wraps on overflow, like Pascal compiled without range
//! checks. Integer `/` always produces a [`Double`]; truncating division is
//! the separate [`Integer::div_trunc`] (Pascal `div`), with
//! [`Integer::modulo`] as its remainder.
//!
//! Mixed-type operators live in [`crate::promote`].

mod boolean;
mod character;
mod integer;
mod pointer;
mod real;

pub use boolean::Boolean;
pub use character::Char;
pub use integer::{Byte, Cardinal, Int64, Integer, ShortInt, SmallInt, UInt64, Word};
pub use pointer::Pointer;
pub use real::{Double, Extended, Single};

/// A value usable as an ordinal: an array or string index, a shift count,
/// an `Inc` step.
///
/// Implemented for every integer wrapper, `Char`, `Boolean` and the
/// primitive integer types.
pub trait Ordinal: Copy {
    /// The ordinal value, sign-extended (or wrapped, for `u64`/`usize`
    /// values above `i64::MAX`).
    fn ordinal(self) -> i64;
}

macro_rules! primitive_ordinal {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordinal for $t {
                #[inline]
                fn ordinal(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

primitive_ordinal!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
