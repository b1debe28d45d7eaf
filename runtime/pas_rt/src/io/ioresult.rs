use std::cell::Cell;
use std::io;
use std::path::Path;

use crate::scalar::Integer;

/// Delphi-compatible I/O error codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum IoCode {
    #[default]
    Success = 0,
    FileNotFound = 2,
    PathNotFound = 3,
    TooManyOpenFiles = 4,
    AccessDenied = 5,
    InvalidHandle = 6,
    InvalidAccessMode = 12,
    DiskFull = 101,
    IoError = 103,
    FileNotOpen = 104,
}

impl IoCode {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

thread_local! {
    static IO_RESULT: Cell<IoCode> = const { Cell::new(IoCode::Success) };
}

/// `IOResult`: the code of the last I/O operation on this thread.
///
/// Reading resets the slot to 0.
pub fn io_result() -> Integer {
    Integer::new(IO_RESULT.with(|slot| slot.replace(IoCode::Success)).code())
}

/// Record the outcome of an I/O operation.
pub fn set_io_result(code: IoCode) {
    if !code.is_success() {
        tracing::trace!(code = code.code(), "io error recorded");
    }
    IO_RESULT.with(|slot| slot.set(code));
}

#[cfg(windows)]
const TOO_MANY_OPEN_FILES: i32 = 4;
#[cfg(not(windows))]
const TOO_MANY_OPEN_FILES: i32 = 24;

/// Map a host error to its Pascal code.
///
/// `path` lets a not-found error on a path whose parent directory is also
/// missing be reported as [`IoCode::PathNotFound`].
pub fn map_io_error(err: &io::Error, path: Option<&Path>) -> IoCode {
    if err.raw_os_error() == Some(TOO_MANY_OPEN_FILES) {
        return IoCode::TooManyOpenFiles;
    }
    match err.kind() {
        io::ErrorKind::NotFound => match path.and_then(Path::parent) {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                IoCode::PathNotFound
            }
            _ => IoCode::FileNotFound,
        },
        io::ErrorKind::PermissionDenied => IoCode::AccessDenied,
        io::ErrorKind::StorageFull => IoCode::DiskFull,
        _ => IoCode::IoError,
    }
}

/// Record the outcome of `result` and hand back its value on success.
pub(crate) fn report<T>(result: io::Result<T>, path: Option<&Path>) -> Option<T> {
    match result {
        Ok(value) => {
            set_io_result(IoCode::Success);
            Some(value)
        }
        Err(err) => {
            report_failure(&err, path);
            None
        }
    }
}

/// Record the code of a failed operation.
pub(crate) fn report_failure(err: &io::Error, path: Option<&Path>) {
    let code = map_io_error(err, path);
    tracing::debug!(error = %err, code = code.code(), "io operation failed");
    set_io_result(code);
}
