//! Pascal file I/O.
//!
//! File operations never return errors. Each one records exactly one
//! [`IoCode`] in a per-thread slot, and generated code checks it with
//! [`io_result`] the way `{$I-}` Pascal code does. Reading the slot clears
//! it.
//!
//! Handles follow the Pascal lifecycle: unbound, then bound by `assign`,
//! opened by `reset`/`rewrite`/`append` (which close any descriptor already
//! held), and back to bound-closed on `close`.

mod binary_file;
mod console;
mod fs;
mod ioresult;
mod mode;
mod record;
mod text_file;

pub use binary_file::BinaryFile;
pub use console::{read_ln, read_ln_from, write, write_ln, write_ln_to, write_to};
pub use fs::{
    create_dir, delete_file, directory_exists, file_exists, get_current_dir, remove_dir,
    rename_file, set_current_dir,
};
pub use ioresult::{io_result, map_io_error, set_io_result, IoCode};
pub use mode::{file_mode, set_file_mode, FileMode};
pub use record::Record;
pub use text_file::{TextFile, TextRead};
