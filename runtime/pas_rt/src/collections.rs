//! Pascal arrays and sets.
//!
//! - [`DynArray`]: `array of T`, origin 0, resized with `SetLength`.
//! - [`FixedArray`]: `array[0..N-1] of T`, compile-time length.
//! - [`PasSet`]: `set of 0..255`, a 256-bit bitmap.

mod array;
mod set;

pub use array::{DynArray, FixedArray};
pub use set::{exclude, in_set, include, PasSet};
