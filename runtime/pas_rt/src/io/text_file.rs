//! `TextFile`: line-oriented UTF-8 files.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use super::console::strip_line_end;
use super::fs::{delete_file, rename_file};
use super::ioresult::{report, report_failure, set_io_result, IoCode};
use crate::convert::{parse_boolean, parse_float, parse_wide_integer};
use crate::scalar::{
    Boolean, Byte, Cardinal, Char, Double, Extended, Int64, Integer, ShortInt, Single, SmallInt,
    UInt64, Word,
};
use crate::text::PasString;

/// A value `Read(f, x)` can parse from a text file.
pub trait TextRead: Sized {
    /// Read one value. `Ok(None)` means the input did not hold one.
    fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>>;
}

fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn peek_byte(input: &mut dyn BufRead) -> io::Result<Option<u8>> {
    Ok(input.fill_buf()?.first().copied())
}

/// Consume bytes while `skip` holds for them.
fn skip_while(input: &mut dyn BufRead, skip: fn(u8) -> bool) -> io::Result<()> {
    while let Some(byte) = peek_byte(input)? {
        if !skip(byte) {
            break;
        }
        input.consume(1);
    }
    Ok(())
}

/// Skip blanks, then take bytes up to the next blank.
fn read_token(input: &mut dyn BufRead) -> io::Result<String> {
    skip_while(input, is_blank)?;
    let mut bytes = Vec::new();
    while let Some(byte) = peek_byte(input)? {
        if is_blank(byte) {
            break;
        }
        bytes.push(byte);
        input.consume(1);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Skip blanks, then decode one UTF-8 character.
fn read_char(input: &mut dyn BufRead) -> io::Result<Option<char>> {
    skip_while(input, is_blank)?;
    let Some(first) = peek_byte(input)? else {
        return Ok(None);
    };
    let len = match first {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    };
    let mut bytes = Vec::with_capacity(len);
    while bytes.len() < len {
        let Some(byte) = peek_byte(input)? else {
            break;
        };
        bytes.push(byte);
        input.consume(1);
    }
    Ok(std::str::from_utf8(&bytes).ok().and_then(|s| s.chars().next()))
}

/// Integers use the syntax of `StrToInt`, `$FF` and `0xFF` included.
macro_rules! integer_read {
    ($($ty:ty => $native:ty, $bits:expr);* $(;)?) => {
        $(
            impl TextRead for $ty {
                fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>> {
                    let token = PasString::from(read_token(input)?);
                    Ok(parse_wide_integer(&token, $bits)
                        .and_then(|value| <$native>::try_from(value).ok())
                        .map(Self::new))
                }
            }
        )*
    };
}

integer_read!(
    ShortInt => i8, 8;
    SmallInt => i16, 16;
    Integer => i32, 32;
    Int64 => i64, 64;
    Byte => u8, 9;
    Word => u16, 17;
    Cardinal => u32, 33;
    UInt64 => u64, 65;
);

fn read_real(input: &mut dyn BufRead) -> io::Result<Option<Double>> {
    Ok(parse_float(&PasString::from(read_token(input)?)))
}

impl TextRead for Double {
    fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>> {
        read_real(input)
    }
}

impl TextRead for Extended {
    fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>> {
        Ok(read_real(input)?.map(Extended::from))
    }
}

impl TextRead for Single {
    fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>> {
        Ok(read_real(input)?.map(|value| Single::new(value.raw() as f32)))
    }
}

impl TextRead for Boolean {
    fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>> {
        Ok(parse_boolean(&PasString::from(read_token(input)?)))
    }
}

/// A whitespace-delimited word.
impl TextRead for PasString {
    fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>> {
        let token = read_token(input)?;
        Ok((!token.is_empty()).then(|| PasString::from(token)))
    }
}

/// The next non-blank character. A supplementary character yields its
/// high surrogate.
impl TextRead for Char {
    fn read_text(input: &mut dyn BufRead) -> io::Result<Option<Self>> {
        Ok(read_char(input)?.map(|c| {
            let mut units = [0u16; 2];
            Char::new(c.encode_utf16(&mut units)[0])
        }))
    }
}

#[derive(Debug, Default)]
enum Stream {
    #[default]
    Closed,
    Input(BufReader<File>),
    Output(BufWriter<File>),
}

#[derive(Copy, Clone, Debug)]
enum OpenFor {
    Reset,
    Rewrite,
    Append,
}

/// A Pascal `TextFile`.
#[derive(Debug, Default)]
pub struct TextFile {
    name: Option<PasString>,
    stream: Stream,
}

impl TextFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// `AssignFile(f, name)`. Closes the handle if it was open; a failed
    /// flush of pending output is reported, and the new name is bound
    /// regardless.
    pub fn assign(&mut self, name: impl Into<PasString>) {
        let released = self.release();
        self.name = Some(name.into());
        report(released, None);
    }

    /// The bound name, empty when unbound.
    pub fn file_name(&self) -> PasString {
        self.name.clone().unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.stream, Stream::Closed)
    }

    fn path(&self) -> Option<PathBuf> {
        self.name.as_ref().map(|name| PathBuf::from(name.to_utf8()))
    }

    /// Drop the stream, flushing pending output first.
    fn release(&mut self) -> io::Result<()> {
        match std::mem::take(&mut self.stream) {
            Stream::Output(mut writer) => writer.flush(),
            Stream::Closed | Stream::Input(_) => Ok(()),
        }
    }

    /// [`release`](Self::release), with a failure recorded in IOResult.
    fn release_reported(&mut self) -> bool {
        let path = self.path();
        match self.release() {
            Ok(()) => true,
            Err(err) => {
                report_failure(&err, path.as_deref());
                false
            }
        }
    }

    /// `Reset`: open for reading.
    pub fn reset(&mut self) {
        self.open(OpenFor::Reset);
    }

    /// `Rewrite`: create or truncate, open for writing.
    pub fn rewrite(&mut self) {
        self.open(OpenFor::Rewrite);
    }

    /// `Append`: open for writing at the end, creating the file if needed.
    pub fn append(&mut self) {
        self.open(OpenFor::Append);
    }

    #[tracing::instrument(level = "debug", skip(self), fields(name = %self.file_name()))]
    fn open(&mut self, how: OpenFor) {
        if !self.release_reported() {
            return;
        }
        let Some(path) = self.path() else {
            set_io_result(IoCode::InvalidHandle);
            return;
        };

        let mut options = OpenOptions::new();
        match how {
            OpenFor::Reset => options.read(true),
            OpenFor::Rewrite => options.write(true).create(true).truncate(true),
            OpenFor::Append => options.append(true).create(true),
        };

        if let Some(file) = report(options.open(&path), Some(path.as_path())) {
            self.stream = match how {
                OpenFor::Reset => Stream::Input(BufReader::new(file)),
                OpenFor::Rewrite | OpenFor::Append => Stream::Output(BufWriter::new(file)),
            };
        }
    }

    /// `CloseFile`.
    #[tracing::instrument(level = "debug", skip(self), fields(name = %self.file_name()))]
    pub fn close(&mut self) {
        match std::mem::take(&mut self.stream) {
            Stream::Closed => set_io_result(IoCode::FileNotOpen),
            Stream::Input(_) => set_io_result(IoCode::Success),
            Stream::Output(mut writer) => {
                let path = self.path();
                report(writer.flush(), path.as_deref());
            }
        }
    }

    /// `Flush`. A no-op on input files.
    pub fn flush(&mut self) {
        let path = self.path();
        match &mut self.stream {
            Stream::Closed => set_io_result(IoCode::FileNotOpen),
            Stream::Input(_) => set_io_result(IoCode::Success),
            Stream::Output(writer) => {
                report(writer.flush(), path.as_deref());
            }
        }
    }

    /// The reader, or `None` with IOResult set when not open for input.
    fn reader(&mut self) -> Option<&mut BufReader<File>> {
        match &mut self.stream {
            Stream::Input(reader) => Some(reader),
            Stream::Output(_) => {
                set_io_result(IoCode::InvalidAccessMode);
                None
            }
            Stream::Closed => {
                set_io_result(IoCode::FileNotOpen);
                None
            }
        }
    }

    fn writer(&mut self) -> Option<&mut BufWriter<File>> {
        match &mut self.stream {
            Stream::Output(writer) => Some(writer),
            Stream::Input(_) => {
                set_io_result(IoCode::InvalidAccessMode);
                None
            }
            Stream::Closed => {
                set_io_result(IoCode::FileNotOpen);
                None
            }
        }
    }

    /// `Write(f, value)`.
    pub fn write<T: fmt::Display + ?Sized>(&mut self, value: &T) {
        if let Some(writer) = self.writer() {
            report(write!(writer, "{value}"), None);
        }
    }

    /// `WriteLn(f, value)`.
    pub fn write_ln<T: fmt::Display + ?Sized>(&mut self, value: &T) {
        if let Some(writer) = self.writer() {
            report(writeln!(writer, "{value}"), None);
        }
    }

    /// `WriteLn(f)`.
    pub fn new_line(&mut self) {
        if let Some(writer) = self.writer() {
            report(writer.write_all(b"\n"), None);
        }
    }

    /// `ReadLn(f, s)`: the rest of the current line, without its `\n` or
    /// `\r\n`. Empty at end of file.
    pub fn read_ln(&mut self) -> PasString {
        let Some(reader) = self.reader() else {
            return PasString::new();
        };
        let mut line = Vec::new();
        if report(reader.read_until(b'\n', &mut line), None).is_none() {
            return PasString::new();
        }
        PasString::from_utf8(strip_line_end(&line))
    }

    /// `Read(f, x)`: skip blanks and parse the next value.
    ///
    /// Returns `None` and sets [`IoCode::IoError`] when the input does not
    /// hold a value of the requested type.
    pub fn read<T: TextRead>(&mut self) -> Option<T> {
        let reader = self.reader()?;
        match T::read_text(reader) {
            Ok(Some(value)) => {
                set_io_result(IoCode::Success);
                Some(value)
            }
            Ok(None) => {
                set_io_result(IoCode::IoError);
                None
            }
            Err(err) => report(Err(err), None),
        }
    }

    /// Peek the next byte of an input file. Not-open handles set
    /// IOResult and read as end of file.
    fn peek(&mut self) -> Option<u8> {
        let reader = self.reader()?;
        peek_byte(reader).unwrap_or_else(|err| {
            report_failure(&err, None);
            None
        })
    }

    /// `Eof(f)`.
    pub fn eof(&mut self) -> bool {
        self.peek().is_none()
    }

    /// `Eoln(f)`: at a line break or end of file.
    pub fn eoln(&mut self) -> bool {
        matches!(self.peek(), None | Some(b'\n' | b'\r'))
    }

    /// Skip spaces and tabs on the current line.
    fn skip_spaces(&mut self) {
        if let Some(reader) = self.reader() {
            if let Err(err) = skip_while(reader, |b| matches!(b, b' ' | b'\t')) {
                report_failure(&err, None);
            }
        }
    }

    /// `SeekEof(f)`: `Eof` after skipping spaces and tabs.
    pub fn seek_eof(&mut self) -> bool {
        self.skip_spaces();
        self.eof()
    }

    /// `SeekEoln(f)`: `Eoln` after skipping spaces and tabs.
    pub fn seek_eoln(&mut self) -> bool {
        self.skip_spaces();
        self.eoln()
    }

    /// `Erase(f)`: close if open, then delete the file. Nothing is deleted
    /// if pending output cannot be flushed.
    pub fn erase(&mut self) {
        if !self.release_reported() {
            return;
        }
        match &self.name {
            Some(name) => {
                delete_file(name);
            }
            None => set_io_result(IoCode::InvalidHandle),
        }
    }

    /// `Rename(f, new_name)`: close if open, rename, and rebind.
    pub fn rename(&mut self, new_name: impl Into<PasString>) {
        if !self.release_reported() {
            return;
        }
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
