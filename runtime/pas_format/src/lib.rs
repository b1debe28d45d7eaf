//! Format pattern translation for the Pascal runtime.
//!
//! Pascal's `Format` takes C printf-style patterns (`%5.2f`, `%-10s`,
//! `%.3d`). The host formatting facility speaks a different dialect
//! (`{:5.2f}`, `{:<10}`, `{:03d}`). This crate converts between the two.
//!
//! Everything here is a pure string transformation: no I/O, no allocation
//! beyond the output, no panics on any input. The runtime's `Format`
//! consumes [`pieces`] directly; [`translate`] renders the same pieces as
//! text.

mod printf;
mod spec;

pub use printf::{
    parse_directive, pieces, translate, Conversion, Piece, PrintfDirective, PrintfFlags,
};
pub use spec::{parse_portable_spec, Align, PortableSpec, Sign, SpecType};
