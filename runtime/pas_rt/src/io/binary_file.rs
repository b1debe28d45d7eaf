//! `BinaryFile`: typed (`file of T`) and untyped (`file`) access.
//!
//! Positions and sizes count records when a record size is set and bytes
//! otherwise.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use super::fs::{delete_file, rename_file};
use super::ioresult::{report, set_io_result, IoCode};
use super::mode::{file_mode, FileMode};
use super::record::Record;
use crate::scalar::{Int64, Integer, Ordinal};
use crate::text::PasString;

/// Read until `buf` is full or the file ends.
fn read_full(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

fn count_of(count: impl Ordinal) -> usize {
    count.ordinal().max(0) as usize
}

/// A Pascal binary file.
#[derive(Debug, Default)]
pub struct BinaryFile {
    name: Option<PasString>,
    file: Option<File>,
    access: FileMode,
    record_size: Option<usize>,
}

impl BinaryFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// `AssignFile(f, name)`. Closes the handle and clears the record size.
    pub fn assign(&mut self, name: impl Into<PasString>) {
        self.file = None;
        self.record_size = None;
        self.name = Some(name.into());
        set_io_result(IoCode::Success);
    }

    pub fn file_name(&self) -> PasString {
        self.name.clone().unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn record_size(&self) -> Option<usize> {
        self.record_size
    }

    fn path(&self) -> Option<PathBuf> {
        self.name.as_ref().map(|name| PathBuf::from(name.to_utf8()))
    }

    /// Bytes per position unit.
    fn unit(&self) -> usize {
        self.record_size.unwrap_or(1)
    }

    /// `Reset(f)`: open an existing file with the access of [`file_mode`].
    ///
    /// Under [`FileMode::ReadWrite`], a permission failure retries
    /// read-only.
    #[tracing::instrument(level = "debug", skip(self), fields(name = %self.file_name()))]
    pub fn reset(&mut self) {
        self.file = None;
        let Some(path) = self.path() else {
            set_io_result(IoCode::InvalidHandle);
            return;
        };

        let mut access = file_mode();
        let mut result = access.open_options().open(&path);
        if access == FileMode::ReadWrite
            && matches!(&result, Err(err) if err.kind() == io::ErrorKind::PermissionDenied)
        {
            tracing::debug!("read-write open denied, retrying read-only");
            access = FileMode::ReadOnly;
            result = access.open_options().open(&path);
        }

        if let Some(file) = report(result, Some(path.as_path())) {
            self.file = Some(file);
            self.access = access;
        }
    }

    /// `Reset(f, size)`.
    pub fn reset_with_record_size(&mut self, size: impl Ordinal) {
        self.set_record_size(size);
        self.reset();
    }

    /// `Rewrite(f)`: create or truncate, open read-write.
    #[tracing::instrument(level = "debug", skip(self), fields(name = %self.file_name()))]
    pub fn rewrite(&mut self) {
        self.file = None;
        let Some(path) = self.path() else {
            set_io_result(IoCode::InvalidHandle);
            return;
        };

        let result = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path);
        if let Some(file) = report(result, Some(path.as_path())) {
            self.file = Some(file);
            self.access = FileMode::ReadWrite;
        }
    }

    /// `Rewrite(f, size)`.
    pub fn rewrite_with_record_size(&mut self, size: impl Ordinal) {
        self.set_record_size(size);
        self.rewrite();
    }

    fn set_record_size(&mut self, size: impl Ordinal) {
        let size = count_of(size);
        self.record_size = (size > 0).then_some(size);
    }

    /// `CloseFile(f)`.
    #[tracing::instrument(level = "debug", skip(self), fields(name = %self.file_name()))]
    pub fn close(&mut self) {
        let code = if self.file.take().is_some() {
            IoCode::Success
        } else {
            IoCode::FileNotOpen
        };
        set_io_result(code);
    }

    /// The open file if its access allows `permitted`, else `None` with
    /// IOResult set.
    fn handle(&mut self, permitted: fn(FileMode) -> bool) -> Option<&mut File> {
        let Some(file) = self.file.as_mut() else {
            set_io_result(IoCode::FileNotOpen);
            return None;
        };
        if !permitted(self.access) {
            set_io_result(IoCode::InvalidAccessMode);
            return None;
        }
        Some(file)
    }

    pub fn flush(&mut self) {
        if let Some(file) = self.handle(|_| true) {
            report(file.flush(), None);
        }
    }

    /// `Read(f, r)`: one record. Reading past the end sets
    /// [`IoCode::IoError`].
    pub fn read<R: Record>(&mut self) -> Option<R> {
        let file = self.handle(FileMode::can_read)?;
        let mut buf = vec![0u8; R::SIZE];
        report(file.read_exact(&mut buf), None).map(|()| R::decode(&buf))
    }

    /// `Write(f, r)`: one record.
    pub fn write<R: Record>(&mut self, record: &R) {
        if let Some(file) = self.handle(FileMode::can_write) {
            let mut buf = Vec::with_capacity(R::SIZE);
            record.encode(&mut buf);
            report(file.write_all(&buf), None);
        }
    }

    /// `BlockRead(f, buf, count, result)`: read up to `count` records into
    /// `buf` and return how many whole records arrived.
    ///
    /// `count` is clamped to what `buf` can hold.
    pub fn block_read(&mut self, buf: &mut [u8], count: impl Ordinal) -> Integer {
        let unit = self.unit();
        let Some(file) = self.handle(FileMode::can_read) else {
            return Integer::ZERO;
        };
        let wanted = count_of(count).min(buf.len() / unit) * unit;
        report(read_full(file, &mut buf[..wanted]), None)
            .map_or(Integer::ZERO, |read| Integer::truncate_from(read / unit))
    }

    /// `BlockWrite(f, buf, count, result)`: write `count` records from `buf`
    /// and return how many were written.
    pub fn block_write(&mut self, buf: &[u8], count: impl Ordinal) -> Integer {
        let unit = self.unit();
        let Some(file) = self.handle(FileMode::can_write) else {
            return Integer::ZERO;
        };
        let records = count_of(count).min(buf.len() / unit);
        report(file.write_all(&buf[..records * unit]), None)
            .map_or(Integer::ZERO, |()| Integer::truncate_from(records))
    }

    /// Read up to `count` records of type `R`, stopping at end of file.
    ///
    /// `count` is clamped to the records left between the position and the
    /// end of the file.
    pub fn block_read_records<R: Record>(&mut self, count: impl Ordinal) -> Vec<R> {
        let size = R::SIZE.max(1);
        let Some(file) = self.handle(FileMode::can_read) else {
            return Vec::new();
        };
        let remaining = file
            .stream_position()
            .and_then(|pos| Ok(file.metadata()?.len().saturating_sub(pos)));
        let Some(remaining) = report(remaining, None) else {
            return Vec::new();
        };
        let left = usize::try_from(remaining / size as u64).unwrap_or(usize::MAX);
        let Some(len) = count_of(count).min(left).checked_mul(size) else {
            set_io_result(IoCode::IoError);
            return Vec::new();
        };
        let mut buf = vec![0u8; len];
        let Some(read) = report(read_full(file, &mut buf), None) else {
            return Vec::new();
        };
        buf[..read - read % size]
            .chunks_exact(size)
            .map(R::decode)
            .collect()
    }

    /// Write every record in `items` and return how many were written.
    pub fn block_write_records<R: Record>(&mut self, items: &[R]) -> Integer {
        let Some(file) = self.handle(FileMode::can_write) else {
            return Integer::ZERO;
        };
        let mut buf = Vec::with_capacity(items.len() * R::SIZE);
        for item in items {
            item.encode(&mut buf);
        }
        report(file.write_all(&buf), None)
            .map_or(Integer::ZERO, |()| Integer::truncate_from(items.len()))
    }

    /// `Seek(f, n)`: move to position `n`.
    ///
    /// A negative position, or one whose byte offset does not fit in 64
    /// bits, sets [`IoCode::IoError`] and leaves the position alone.
    pub fn seek(&mut self, position: impl Ordinal) {
        let unit = self.unit() as u64;
        let position = position.ordinal();
        let Some(file) = self.handle(|_| true) else {
            return;
        };
        let offset = u64::try_from(position)
            .ok()
            .and_then(|position| position.checked_mul(unit));
        let Some(offset) = offset else {
            set_io_result(IoCode::IoError);
            return;
        };
        report(file.seek(SeekFrom::Start(offset)), None);
    }

    /// `FilePos(f)`. -1 when the handle is not open.
    pub fn file_pos(&mut self) -> Int64 {
        let unit = self.unit() as u64;
        let Some(file) = self.handle(|_| true) else {
            return Int64::new(-1);
        };
        report(file.stream_position(), None).map_or(Int64::new(-1), |pos| {
            Int64::new((pos / unit) as i64)
        })
    }

    /// `FileSize(f)`. -1 when the handle is not open.
    pub fn file_size(&mut self) -> Int64 {
        let unit = self.unit() as u64;
        let Some(file) = self.handle(|_| true) else {
            return Int64::new(-1);
        };
        report(file.metadata(), None).map_or(Int64::new(-1), |meta| {
            Int64::new((meta.len() / unit) as i64)
        })
    }

    /// `Eof(f)`: the position is at or past the end. True when not open.
    pub fn eof(&mut self) -> bool {
        let Some(file) = self.handle(|_| true) else {
            return true;
        };
        let at_end = file
            .stream_position()
            .and_then(|pos| Ok(pos >= file.metadata()?.len()));
        report(at_end, None).unwrap_or(true)
    }

    /// `Truncate(f)`: cut the file at the current position.
    pub fn truncate(&mut self) {
        let Some(file) = self.handle(FileMode::can_write) else {
            return;
        };
        let result = file.stream_position().and_then(|pos| file.set_len(pos));
        report(result, None);
    }

    /// `Erase(f)`: close if open, then delete the file.
    pub fn erase(&mut self) {
        self.file = None;
        match &self.name {
            Some(name) => {
                delete_file(name);
            }
            None => set_io_result(IoCode::InvalidHandle),
        }
    }

    /// `Rename(f, new_name)`: close if open, rename, and rebind.
    pub fn rename(&mut self, new_name: impl Into<PasString>) {
        self.file = None;
        let new_name = new_name.into();
        match &self.name {
            Some(name) => {
                if rename_file(name, &new_name) {
                    self.name = Some(new_name);
                }
            }
            None => set_io_result(IoCode::InvalidHandle),
        }
    }
}
