//! Pascal loop forms with their evaluation rules.
//!
//! `for` evaluates both bounds once, before the first iteration, and never
//! steps past the final value, so a loop ending at `Integer::MAX` stops
//! instead of wrapping. Loop bodies return `()` or a [`ControlFlow`];
//! `ControlFlow::Break` is Pascal's `Break`.

use std::ops::ControlFlow;

use crate::scalar::Integer;

/// What a loop body hands back after one iteration.
pub trait LoopStep {
    fn is_break(self) -> bool;
}

impl LoopStep for () {
    #[inline]
    fn is_break(self) -> bool {
        false
    }
}

impl<B> LoopStep for ControlFlow<B> {
    #[inline]
    fn is_break(self) -> bool {
        ControlFlow::is_break(&self)
    }
}

/// `for i := start to finish do body`.
pub fn pfor<S: LoopStep>(start: Integer, finish: Integer, mut body: impl FnMut(Integer) -> S) {
    for i in start.raw()..=finish.raw() {
        if body(Integer::new(i)).is_break() {
            break;
        }
    }
}

/// `for i := start downto finish do body`.
pub fn pfor_downto<S: LoopStep>(
    start: Integer,
    finish: Integer,
    mut body: impl FnMut(Integer) -> S,
) {
    for i in (finish.raw()..=start.raw()).rev() {
        if body(Integer::new(i)).is_break() {
            break;
        }
    }
}

/// `repeat body until condition`: the body runs at least once.
pub fn repeat_until<S: LoopStep>(
    mut body: impl FnMut() -> S,
    mut condition: impl FnMut() -> bool,
) {
    loop {
        if body().is_break() || condition() {
            break;
        }
    }
}
