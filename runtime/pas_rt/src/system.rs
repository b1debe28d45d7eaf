//! Process-level services: command line, clock, termination.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use crate::scalar::{Boolean, Int64, Integer, Ordinal, Pointer, Word};
use crate::text::PasString;

static ARGS: OnceLock<Vec<PasString>> = OnceLock::new();
static CLOCK_START: OnceLock<Instant> = OnceLock::new();

/// Program entry hook: capture the command line and install tracing.
///
/// Only the first call records `args`. A program that never calls this
/// sees the host's `std::env::args()`.
pub fn startup<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: Into<PasString>,
{
    crate::init_tracing();
    CLOCK_START.get_or_init(Instant::now);
    let captured: Vec<PasString> = args.into_iter().map(Into::into).collect();
    tracing::debug!(count = captured.len(), "command line captured");
    if ARGS.set(captured).is_err() {
        tracing::debug!("command line already captured; keeping the first");
    }
}

fn args() -> &'static [PasString] {
    ARGS.get_or_init(|| {
        std::env::args_os()
            .map(|arg| PasString::from(arg.to_string_lossy().as_ref()))
            .collect()
    })
}

/// `ParamCount`: arguments after the program name.
pub fn param_count() -> Integer {
    Integer::truncate_from(args().len().saturating_sub(1))
}

/// `ParamStr(i)`: 0 is the program name; out of range is empty.
pub fn param_str(index: impl Ordinal) -> PasString {
    usize::try_from(index.ordinal())
        .ok()
        .and_then(|i| args().get(i))
        .cloned()
        .unwrap_or_default()
}

/// `GetTickCount64`: milliseconds on a monotonic clock.
///
/// The epoch is the first clock query (or [`startup`]), not boot.
pub fn get_tick_count64() -> Int64 {
    let start = CLOCK_START.get_or_init(Instant::now);
    Int64::new(i64::try_from(start.elapsed().as_millis()).unwrap_or(i64::MAX))
}

/// `GetTickCount`: the low 32 bits of [`get_tick_count64`].
pub fn get_tick_count() -> Integer {
    Integer::truncate_from(get_tick_count64().raw() & 0xFFFF_FFFF)
}

/// `Halt(code)`: flush standard output and exit.
pub fn halt(code: impl Ordinal) -> ! {
    let code = code.ordinal() as i32;
    tracing::debug!(code, "halt");
    // Exit regardless of whether the flush succeeds.
    let _ = std::io::stdout().flush();
    std::process::exit(code)
}

/// `RunError(code)`: report a non-zero code on stderr and exit with it.
pub fn run_error(code: impl Ordinal) -> ! {
    let code = code.ordinal() as i32;
    if code != 0 {
        eprintln!("Runtime error {code}");
    }
    halt(code)
}

/// `Abort`: exit with code 3.
pub fn abort() -> ! {
    halt(3)
}

/// `Swap(a, b)`.
pub fn swap<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

/// `Swap(w)`: exchange the two bytes of a word.
pub fn swap_word(value: Word) -> Word {
    Word::new(value.raw().swap_bytes())
}

/// `Assigned(p)`.
pub fn assigned(p: Pointer) -> Boolean {
    Boolean::new(p.assigned())
}

#[cfg(test)]
mod tests;
