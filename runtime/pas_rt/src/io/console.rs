//! Standard input and output.
//!
//! Console failures are reported through IOResult like any other file.

use std::fmt;
use std::io::{self, BufRead, Write};

use super::ioresult::report;
use crate::text::PasString;

/// `line` without a trailing `\n` or `\r\n`.
pub(crate) fn strip_line_end(line: &[u8]) -> &[u8] {
    match line {
        [rest @ .., b'\r', b'\n'] | [rest @ .., b'\n'] => rest,
        _ => line,
    }
}

/// `Write(value)` to `out`.
pub fn write_to<W, T>(out: &mut W, value: &T)
where
    W: Write + ?Sized,
    T: fmt::Display + ?Sized,
{
    report(write!(out, "{value}"), None);
}

/// `WriteLn(value)` to `out`.
pub fn write_ln_to<W, T>(out: &mut W, value: &T)
where
    W: Write + ?Sized,
    T: fmt::Display + ?Sized,
{
    report(writeln!(out, "{value}"), None);
}

/// `ReadLn(s)` from `input`: one line without its terminator, empty at end
/// of input.
pub fn read_ln_from<R: BufRead + ?Sized>(input: &mut R) -> PasString {
    let mut line = Vec::new();
    if report(input.read_until(b'\n', &mut line), None).is_none() {
        return PasString::new();
    }
    PasString::from_utf8(strip_line_end(&line))
}

/// `Write(value)`.
pub fn write<T: fmt::Display + ?Sized>(value: &T) {
    let mut out = io::stdout().lock();
    report(write!(out, "{value}").and_then(|()| out.flush()), None);
}

/// `WriteLn(value)`.
pub fn write_ln<T: fmt::Display + ?Sized>(value: &T) {
    write_ln_to(&mut io::stdout().lock(), value);
}

/// `ReadLn(s)`.
pub fn read_ln() -> PasString {
    read_ln_from(&mut io::stdin().lock())
}
