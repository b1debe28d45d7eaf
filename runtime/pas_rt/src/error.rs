//! Exception channel for non-I/O faults.
//!
//! Conversions, arithmetic and pointer misuse report failures by returning
//! `Err(Exception)`. Raising also records the message in a per-thread slot,
//! so a handler that only knows *that* something failed can still ask what.
//!
//! File operations never use this channel; see [`crate::io::io_result`].

use std::cell::RefCell;
use std::fmt;

use thiserror::Error;

use crate::text::PasString;

/// The closed set of exception kinds.
///
/// Discriminants are stable and double as the numeric exception code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExceptionKind {
    Exception = 0,
    ConvertError = 1,
    IoError = 2,
    RangeError = 3,
    DivByZero = 4,
    Overflow = 5,
    MathError = 6,
    AccessViolation = 7,
    InvalidPointer = 8,
    OutOfMemory = 9,
}

impl ExceptionKind {
    /// Numeric code of this kind.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// The Pascal class name, e.g. `EConvertError`.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Exception => "Exception",
            Self::ConvertError => "EConvertError",
            Self::IoError => "EInOutError",
            Self::RangeError => "ERangeError",
            Self::DivByZero => "EDivByZero",
            Self::Overflow => "EOverflow",
            Self::MathError => "EMathError",
            Self::AccessViolation => "EAccessViolation",
            Self::InvalidPointer => "EInvalidPointer",
            Self::OutOfMemory => "EOutOfMemory",
        }
    }

    /// Raise an exception of this kind.
    ///
    /// Shorthand for [`Exception::raise`].
    pub fn raise(self, message: impl Into<PasString>) -> Exception {
        Exception::raise(self, message)
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A raised exception: a kind and a message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Exception {
    kind: ExceptionKind,
    message: PasString,
}

/// Result of a runtime operation that may raise.
pub type RtResult<T> = Result<T, Exception>;

thread_local! {
    /// Message of the most recently raised exception on this thread.
    static LAST_MESSAGE: RefCell<PasString> = const { RefCell::new(PasString::new()) };
}

impl Exception {
    /// Build an exception and record its message as the current one.
    ///
    /// The caller propagates the returned value with `Err(...)`.
    pub fn raise(kind: ExceptionKind, message: impl Into<PasString>) -> Self {
        let message = message.into();
        tracing::debug!(kind = kind.class_name(), %message, "exception raised");
        LAST_MESSAGE.with(|slot| slot.borrow_mut().clone_from(&message));
        Self { kind, message }
    }

    #[inline]
    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    #[inline]
    pub fn message(&self) -> &PasString {
        &self.message
    }
}

/// Message of the last exception raised on this thread.
///
/// Empty if nothing has been raised yet.
pub fn exception_message() -> PasString {
    LAST_MESSAGE.with(|slot| slot.borrow().clone())
}

#[cfg(test)]
mod tests;
