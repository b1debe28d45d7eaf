use pretty_assertions::assert_eq;

use super::*;

#[test]
fn codes_are_stable() {
    let kinds = [
        ExceptionKind::Exception,
        ExceptionKind::ConvertError,
        ExceptionKind::IoError,
        ExceptionKind::RangeError,
        ExceptionKind::DivByZero,
        ExceptionKind::Overflow,
        ExceptionKind::MathError,
        ExceptionKind::AccessViolation,
        ExceptionKind::InvalidPointer,
        ExceptionKind::OutOfMemory,
    ];
    for (expected, kind) in (0..).zip(kinds) {
        assert_eq!(kind.code(), expected);
    }
}

#[test]
fn raise_records_message() {
    let err = Exception::raise(ExceptionKind::RangeError, "index out of bounds");
    assert_eq!(err.kind(), ExceptionKind::RangeError);
    assert_eq!(err.code(), 3);
    assert_eq!(err.message().to_utf8(), "index out of bounds");
    assert_eq!(exception_message().to_utf8(), "index out of bounds");
}

#[test]
fn last_raise_wins() {
    let _ = ExceptionKind::ConvertError.raise("first");
    let _ = ExceptionKind::MathError.raise("second");
    assert_eq!(exception_message().to_utf8(), "second");
}

#[test]
fn message_slot_is_per_thread() {
    let _ = ExceptionKind::Exception.raise("main thread");
    let other = std::thread::spawn(|| exception_message().to_utf8())
        .join()
        .unwrap_or_default();
    assert_eq!(other, "");
    assert_eq!(exception_message().to_utf8(), "main thread");
}

#[test]
fn display_is_message() {
    let err = ExceptionKind::DivByZero.raise("Division by zero");
    assert_eq!(err.to_string(), "Division by zero");
    assert_eq!(ExceptionKind::DivByZero.to_string(), "EDivByZero");
}

#[test]
fn propagates_with_question_mark() {
    fn inner() -> RtResult<i32> {
        Err(ExceptionKind::Overflow.raise("too big"))
    }
    fn outer() -> RtResult<i32> {
        let v = inner()?;
        Ok(v + 1)
    }
    let err = outer().err().map(|e| e.kind());
    assert_eq!(err, Some(ExceptionKind::Overflow));
}
