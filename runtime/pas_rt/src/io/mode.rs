use std::cell::Cell;
use std::fs::OpenOptions;

/// Pascal `FileMode`: the access `reset` requests for binary files.
///
/// Text files ignore it: `reset` on a text file is always read-only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FileMode {
    ReadOnly = 0,
    WriteOnly = 1,
    #[default]
    ReadWrite = 2,
}

impl FileMode {
    /// Decode the numeric Pascal value (`fmOpenRead` = 0 ...). Unknown
    /// values read as [`FileMode::ReadWrite`].
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::ReadOnly,
            1 => Self::WriteOnly,
            _ => Self::ReadWrite,
        }
    }

    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[inline]
    pub const fn can_read(self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    #[inline]
    pub const fn can_write(self) -> bool {
        matches!(self, Self::WriteOnly | Self::ReadWrite)
    }

    /// Options for opening an existing file in this mode.
    pub(crate) fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(self.can_read()).write(self.can_write());
        options
    }
}

thread_local! {
    static FILE_MODE: Cell<FileMode> = const { Cell::new(FileMode::ReadWrite) };
}

/// The current thread's `FileMode`.
pub fn file_mode() -> FileMode {
    FILE_MODE.with(Cell::get)
}

/// Set the current thread's `FileMode`.
pub fn set_file_mode(mode: FileMode) {
    FILE_MODE.with(|slot| slot.set(mode));
}
