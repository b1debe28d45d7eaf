//! UTF-16 to UTF-8 and back.
//!
//! Encoding joins each high/low surrogate pair into one code point before
//! emitting UTF-8. An unpaired surrogate has no UTF-8 form and is dropped.
//! Decoding splits supplementary code points back into surrogate pairs and
//! drops malformed byte sequences.

use super::PasString;
use crate::scalar::Char;

/// Iterator over the code points of a [`PasString`], skipping unpaired
/// surrogates.
#[derive(Clone, Debug)]
pub struct CodePoints<'a> {
    units: &'a [Char],
    pos: usize,
}

impl Iterator for CodePoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let unit = *self.units.get(self.pos)?;
            self.pos += 1;

            if unit.is_high_surrogate() {
                let Some(&low) = self.units.get(self.pos) else {
                    continue;
                };
                if !low.is_low_surrogate() {
                    // Drop the high half; the next unit is examined on its own.
                    continue;
                }
                self.pos += 1;
                let high = u32::from(unit.raw()) - 0xD800;
                let low = u32::from(low.raw()) - 0xDC00;
                return char::from_u32(0x10000 + (high << 10) + low);
            }

            if unit.is_low_surrogate() {
                continue;
            }

            return char::from_u32(u32::from(unit.raw()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.units.len() - self.pos))
    }
}

impl PasString {
    /// Code points, with surrogate pairs joined and strays skipped.
    pub fn code_points(&self) -> CodePoints<'_> {
        CodePoints {
            units: &self.units,
            pos: 0,
        }
    }

    /// Encode as UTF-8 bytes.
    pub fn encode_utf8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.units.len());
        let mut buf = [0u8; 4];
        for c in self.code_points() {
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        out
    }

    /// Encode as a Rust `String`.
    pub fn to_utf8(&self) -> String {
        self.code_points().collect()
    }

    /// Low byte of each unit. Lossless only for the ASCII/Latin-1 subset.
    pub fn to_narrow(&self) -> Vec<u8> {
        self.units.iter().map(|c| c.raw().to_le_bytes()[0]).collect()
    }

    /// Decode UTF-8 bytes. Malformed sequences are skipped.
    pub fn from_utf8(bytes: &[u8]) -> Self {
        let mut out = Self::with_capacity(bytes.len());
        for chunk in bytes.utf8_chunks() {
            out.push_str(chunk.valid());
        }
        out
    }
}
