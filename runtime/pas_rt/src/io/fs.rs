//! File-system queries and commands.
//!
//! Queries (`file_exists`, `directory_exists`) leave IOResult alone;
//! commands report success and set it.

use std::path::PathBuf;

use super::ioresult::report;
use crate::text::PasString;

fn path_of(name: &PasString) -> PathBuf {
    PathBuf::from(name.to_utf8())
}

/// `FileExists`: true only for regular files.
pub fn file_exists(name: &PasString) -> bool {
    path_of(name).is_file()
}

/// `DirectoryExists`.
pub fn directory_exists(name: &PasString) -> bool {
    path_of(name).is_dir()
}

/// `DeleteFile`.
pub fn delete_file(name: &PasString) -> bool {
    let path = path_of(name);
    report(std::fs::remove_file(&path), Some(path.as_path())).is_some()
}

/// `RenameFile`.
pub fn rename_file(old_name: &PasString, new_name: &PasString) -> bool {
    let from = path_of(old_name);
    report(std::fs::rename(&from, path_of(new_name)), Some(from.as_path())).is_some()
}

/// `CreateDir`: the parent must already exist.
pub fn create_dir(name: &PasString) -> bool {
    let path = path_of(name);
    report(std::fs::create_dir(&path), Some(path.as_path())).is_some()
}

/// `RemoveDir`: the directory must be empty.
pub fn remove_dir(name: &PasString) -> bool {
    let path = path_of(name);
    report(std::fs::remove_dir(&path), Some(path.as_path())).is_some()
}

/// `GetCurrentDir`. Empty on failure.
pub fn get_current_dir() -> PasString {
    report(std::env::current_dir(), None)
        .map(|dir| PasString::from(dir.to_string_lossy().as_ref()))
        .unwrap_or_default()
}

/// `SetCurrentDir`.
pub fn set_current_dir(name: &PasString) -> bool {
    let path = path_of(name);
    report(std::env::set_current_dir(&path), Some(path.as_path())).is_some()
}
