//! Raw memory for `GetMem`, `FreeMem`, `Move` and friends.
//!
//! A [`MemoryArena`] hands out [`Pointer`] addresses into byte blocks it
//! owns. Addresses are never dereferenced; every access goes through the
//! arena, which checks it against the live blocks:
//!
//! - a nil pointer, or a range that runs past the end of its block, raises
//!   `EAccessViolation`;
//! - an address outside every live block (never allocated, or freed)
//!   raises `EInvalidPointer`, as does freeing an address that is not the
//!   start of a block;
//! - a block that cannot be reserved raises `EOutOfMemory`.
//!
//! Counts and sizes `<= 0` are empty ranges and always succeed.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::error::{Exception, ExceptionKind, RtResult};
use crate::scalar::{Byte, Cardinal, Integer, Ordinal, Pointer, Word};

/// First address handed out. Keeps small integers from aliasing blocks.
const BASE_ADDRESS: usize = 0x1_0000;

/// Block addresses are aligned to this, and consecutive blocks are separated
/// by at least this many unmapped bytes.
const BLOCK_ALIGN: usize = 16;

fn size_of(count: impl Ordinal) -> usize {
    count.ordinal().max(0) as usize
}

fn access_violation(p: Pointer) -> Exception {
    ExceptionKind::AccessViolation.raise(format!(
        "Access violation at address {:#x}",
        p.address()
    ))
}

fn invalid_pointer() -> Exception {
    ExceptionKind::InvalidPointer.raise("Invalid pointer operation")
}

fn out_of_memory() -> Exception {
    ExceptionKind::OutOfMemory.raise("Out of memory")
}

/// Owner of every block reachable through a [`Pointer`].
#[derive(Debug)]
pub struct MemoryArena {
    blocks: BTreeMap<usize, Vec<u8>>,
    next: usize,
}

impl Default for MemoryArena {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryArena {
    pub fn new() -> Self {
        Self {
            blocks: BTreeMap::new(),
            next: BASE_ADDRESS,
        }
    }

    /// Number of live blocks.
    pub fn live_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Size of the block starting at `p`, if there is one.
    pub fn block_size(&self, p: Pointer) -> Option<usize> {
        self.blocks.get(&p.address()).map(Vec::len)
    }

    /// Place `block` at a fresh address.
    fn insert(&mut self, block: Vec<u8>) -> RtResult<Pointer> {
        let address = self.next;
        let span = block
            .len()
            .max(1)
            .checked_next_multiple_of(BLOCK_ALIGN)
            .and_then(|span| span.checked_add(BLOCK_ALIGN))
            .ok_or_else(out_of_memory)?;
        self.next = address.checked_add(span).ok_or_else(out_of_memory)?;
        self.blocks.insert(address, block);
        Ok(Pointer::new(address))
    }

    fn zeroed(size: usize) -> RtResult<Vec<u8>> {
        let mut block = Vec::new();
        block.try_reserve_exact(size).map_err(|_| out_of_memory())?;
        block.resize(size, 0);
        Ok(block)
    }

    /// `GetMem(p, size)`. A size `<= 0` yields nil.
    #[tracing::instrument(level = "trace", skip_all, fields(size = size.ordinal()))]
    pub fn get_mem(&mut self, size: impl Ordinal) -> RtResult<Pointer> {
        let size = size_of(size);
        if size == 0 {
            return Ok(Pointer::NIL);
        }
        let block = Self::zeroed(size)?;
        self.insert(block)
    }

    /// `AllocMem(size)`: like [`MemoryArena::get_mem`], with the block
    /// guaranteed zeroed.
    pub fn alloc_mem(&mut self, size: impl Ordinal) -> RtResult<Pointer> {
        self.get_mem(size)
    }

    /// `ReallocMem(p, size)`: resize the block at `p`, keeping its common
    /// prefix and zeroing any new tail. The block may move.
    ///
    /// A nil `p` allocates; a size `<= 0` frees and leaves `p` nil.
    #[tracing::instrument(level = "trace", skip_all, fields(size = size.ordinal()))]
    pub fn realloc_mem(&mut self, p: &mut Pointer, size: impl Ordinal) -> RtResult<()> {
        let size = size_of(size);
        if p.is_nil() {
            *p = self.get_mem(size)?;
            return Ok(());
        }
        if size == 0 {
            return self.free_mem(p);
        }
        if !self.blocks.contains_key(&p.address()) {
            return Err(invalid_pointer());
        }

        let mut grown = Self::zeroed(size)?;
        let Some(old) = self.blocks.remove(&p.address()) else {
            return Err(invalid_pointer());
        };
        let keep = old.len().min(size);
        grown[..keep].copy_from_slice(&old[..keep]);
        *p = self.insert(grown)?;
        Ok(())
    }

    /// `FreeMem(p)`: release the block and set `p` to nil. Freeing nil is a
    /// no-op.
    #[tracing::instrument(level = "trace", skip_all, fields(address = p.address()))]
    pub fn free_mem(&mut self, p: &mut Pointer) -> RtResult<()> {
        if p.is_nil() {
            return Ok(());
        }
        if self.blocks.remove(&p.address()).is_none() {
            tracing::debug!(address = p.address(), "free of unknown block");
            return Err(invalid_pointer());
        }
        *p = Pointer::NIL;
        Ok(())
    }

    /// Locate `count` bytes at `p`: the owning block's address and the
    /// byte range inside it.
    fn span(&self, p: Pointer, count: usize) -> RtResult<(usize, Range<usize>)> {
        if p.is_nil() {
            return Err(access_violation(p));
        }
        let Some((&base, block)) = self.blocks.range(..=p.address()).next_back() else {
            return Err(invalid_pointer());
        };
        let offset = p.address() - base;
        if offset > block.len() {
            return Err(invalid_pointer());
        }
        match offset.checked_add(count) {
            Some(end) if end <= block.len() => Ok((base, offset..end)),
            _ => Err(access_violation(p)),
        }
    }

    /// The `count` bytes at `p`.
    pub fn bytes(&self, p: Pointer, count: impl Ordinal) -> RtResult<&[u8]> {
        let count = size_of(count);
        if count == 0 {
            return Ok(&[]);
        }
        let (base, range) = self.span(p, count)?;
        self.blocks
            .get(&base)
            .map(|block| &block[range])
            .ok_or_else(invalid_pointer)
    }

    pub fn bytes_mut(&mut self, p: Pointer, count: impl Ordinal) -> RtResult<&mut [u8]> {
        let count = size_of(count);
        if count == 0 {
            return Ok(&mut []);
        }
        let (base, range) = self.span(p, count)?;
        self.blocks
            .get_mut(&base)
            .map(|block| &mut block[range])
            .ok_or_else(invalid_pointer)
    }

    /// `Move(source^, dest^, count)`. Overlapping ranges are handled.
    pub fn move_mem(
        &mut self,
        source: Pointer,
        dest: Pointer,
        count: impl Ordinal,
    ) -> RtResult<()> {
        let count = size_of(count);
        if count == 0 {
            return Ok(());
        }
        let (src_base, src_range) = self.span(source, count)?;
        let (dst_base, dst_range) = self.span(dest, count)?;
        if src_base == dst_base {
            if let Some(block) = self.blocks.get_mut(&src_base) {
                block.copy_within(src_range, dst_range.start);
            }
            return Ok(());
        }
        let copied = self.bytes(source, count)?.to_vec();
        self.bytes_mut(dest, count)?.copy_from_slice(&copied);
        Ok(())
    }

    /// `FillChar(p^, count, value)`.
    pub fn fill_char(
        &mut self,
        p: Pointer,
        count: impl Ordinal,
        value: impl Ordinal,
    ) -> RtResult<()> {
        let value = value.ordinal() as u8;
        self.bytes_mut(p, count)?.fill(value);
        Ok(())
    }

    /// `FillChar(p^, count, 0)`.
    pub fn fill_zero(&mut self, p: Pointer, count: impl Ordinal) -> RtResult<()> {
        self.fill_char(p, count, 0u8)
    }

    /// `FillWord(p^, count, value)`: `count` little-endian words.
    pub fn fill_word(&mut self, p: Pointer, count: impl Ordinal, value: Word) -> RtResult<()> {
        let bytes = self.bytes_mut(p, size_of(count).saturating_mul(2))?;
        for word in bytes.chunks_exact_mut(2) {
            word.copy_from_slice(&value.raw().to_le_bytes());
        }
        Ok(())
    }

    /// `FillDWord(p^, count, value)`: `count` little-endian double words.
    pub fn fill_dword(
        &mut self,
        p: Pointer,
        count: impl Ordinal,
        value: Cardinal,
    ) -> RtResult<()> {
        let bytes = self.bytes_mut(p, size_of(count).saturating_mul(4))?;
        for dword in bytes.chunks_exact_mut(4) {
            dword.copy_from_slice(&value.raw().to_le_bytes());
        }
        Ok(())
    }

    /// `FillByte(p^, count, value)`.
    pub fn fill_byte(&mut self, p: Pointer, count: impl Ordinal, value: Byte) -> RtResult<()> {
        self.fill_char(p, count, value)
    }

    /// `CompareMem(a, b, count)`: the sign of the first differing byte pair,
    /// compared unsigned. 0 when the ranges are equal.
    pub fn compare_mem(&self, a: Pointer, b: Pointer, count: impl Ordinal) -> RtResult<Integer> {
        let order = self.bytes(a, count)?.cmp(self.bytes(b, count)?);
        Ok(Integer::new(order as i32))
    }

    /// `PByte(p)^`.
    pub fn read_byte(&self, p: Pointer) -> RtResult<Byte> {
        let (base, range) = self.span(p, 1)?;
        self.blocks
            .get(&base)
            .map(|block| Byte::new(block[range.start]))
            .ok_or_else(invalid_pointer)
    }

    /// `PByte(p)^ := value`.
    pub fn write_byte(&mut self, p: Pointer, value: Byte) -> RtResult<()> {
        self.bytes_mut(p, 1)?[0] = value.raw();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
