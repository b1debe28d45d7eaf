//! Pascal Runtime Library (`pas_rt`)
//!
//! The value layer that Pascal programs compiled to native code link
//! against: exact-width scalars, origin-1 strings, dynamic arrays and
//! bitmap sets, file I/O with `IOResult`, and the `System`/`SysUtils`/`Math`
//! routines generated code calls.
//!
//! # Error Channels
//!
//! - **Exceptions**: conversions, arithmetic and memory operations return
//!   [`RtResult`]; the message is also kept per thread for
//!   [`exception_message`].
//! - **IOResult**: file operations never fail with `Err`; they record a
//!   code read back with [`io::io_result`].
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=pas_rt=debug`: log raised exceptions, failed I/O and file
//!   open/close. Installed by [`init_tracing`] (called from
//!   [`system::startup`]).
//! - `RUST_LOG=pas_rt=trace`: also memory-arena and random-seed events.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    reason = "Pascal conversions truncate and reinterpret between fixed widths on purpose"
)]

pub mod collections;
pub mod control;
pub mod convert;
pub mod error;
pub mod format;
pub mod io;
pub mod math;
pub mod memory;
pub mod promote;
pub mod random;
pub mod scalar;
pub mod system;
pub mod text;

use std::sync::Once;

pub use collections::{DynArray, FixedArray, PasSet};
pub use error::{exception_message, Exception, ExceptionKind, RtResult};
pub use format::{format, FormatArg};
pub use memory::MemoryArena;
pub use scalar::{
    Boolean, Byte, Cardinal, Char, Double, Extended, Int64, Integer, Ordinal, Pointer, ShortInt,
    Single, SmallInt, UInt64, Word,
};
pub use text::PasString;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// leaves an already-installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already set");
            }
        }
    });
}
