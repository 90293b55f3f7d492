// WRT - wrt-decoder
// Module: Byte reader
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! A position-tracked cursor over an immutable byte slice.
//!
//! The reader owns nothing and validates nothing beyond bounds; it is
//! the [`Parser`](crate::Parser)'s job to interpret what comes back.

use wrt_error::{kinds, Result};
use wrt_foundation::{Arena, MemoryProvider};
use wrt_format::leb128;

/// A cursor over a borrowed byte slice.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader positioned at the start of `buffer`.
    #[must_use]
    pub fn from(buffer: &'a [u8]) -> Self {
        Self { buffer, position: 0 }
    }

    /// Current position. Invariant: `0 <= position <= length`.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total length of the underlying buffer.
    #[must_use]
    pub fn length(&self) -> usize {
        self.buffer.len()
    }

    /// Whether a further single-byte read can succeed.
    #[must_use]
    pub fn can_read(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    fn tail(&self) -> &'a [u8] {
        &self.buffer[self.position..]
    }

    /// Advances the cursor by `n` bytes without reading them.
    ///
    /// # Errors
    ///
    /// Returns `reader_out_of_bounds` if `n` would advance past the end.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(kinds::reader_out_of_bounds(self.position + n, self.buffer.len()));
        }
        self.position += n;
        Ok(())
    }

    /// Returns the next byte without advancing the cursor.
    ///
    /// Used by the blocktype decode, which must inspect the
    /// first byte to choose between the empty, value-type and
    /// type-index encodings before committing to how many bytes the
    /// immediate actually consumes.
    ///
    /// # Errors
    ///
    /// Returns `reader_out_of_bounds` at end of input.
    pub fn peek_u8(&self) -> Result<u8> {
        self.buffer
            .get(self.position)
            .copied()
            .ok_or_else(|| kinds::reader_out_of_bounds(self.position + 1, self.buffer.len()))
    }

    /// Reads one byte and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns `reader_out_of_bounds` at end of input.
    pub fn get_u8(&mut self) -> Result<u8> {
        let byte = *self
            .buffer
            .get(self.position)
            .ok_or_else(|| kinds::reader_out_of_bounds(self.position + 1, self.buffer.len()))?;
        self.position += 1;
        Ok(byte)
    }

    /// Decodes an unsigned 32-bit LEB128 integer and advances past it.
    ///
    /// # Errors
    ///
    /// Propagates the LEB128 codec's errors.
    pub fn get_u32(&mut self) -> Result<u32> {
        let (value, len) = leb128::decode_u32(self.tail())?;
        self.position += len;
        Ok(value)
    }

    /// Decodes an unsigned 64-bit LEB128 integer and advances past it.
    ///
    /// # Errors
    ///
    /// Propagates the LEB128 codec's errors.
    pub fn get_u64(&mut self) -> Result<u64> {
        let (value, len) = leb128::decode_u64(self.tail())?;
        self.position += len;
        Ok(value)
    }

    /// Decodes a signed 32-bit LEB128 integer and advances past it.
    ///
    /// # Errors
    ///
    /// Propagates the LEB128 codec's errors.
    pub fn get_i32(&mut self) -> Result<i32> {
        let (value, len) = leb128::decode_i32(self.tail())?;
        self.position += len;
        Ok(value)
    }

    /// Decodes a signed 64-bit LEB128 integer and advances past it.
    ///
    /// # Errors
    ///
    /// Propagates the LEB128 codec's errors.
    pub fn get_i64(&mut self) -> Result<i64> {
        let (value, len) = leb128::decode_i64(self.tail())?;
        self.position += len;
        Ok(value)
    }

    /// Decodes a signed 33-bit LEB128 integer (the `blocktype` type-index
    /// immediate width) and advances past it.
    ///
    /// # Errors
    ///
    /// Propagates the LEB128 codec's errors.
    pub fn get_i33(&mut self) -> Result<i64> {
        let (value, len) = leb128::decode_i33(self.tail())?;
        self.position += len;
        Ok(value)
    }

    /// Copies the next `n` bytes into `dest` and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns `reader_out_of_bounds` if fewer than `n` bytes remain, or
    /// if `dest` is shorter than `n`.
    pub fn copy_bytes(&mut self, n: usize, dest: &mut [u8]) -> Result<()> {
        if n > self.remaining() || dest.len() < n {
            return Err(kinds::reader_out_of_bounds(self.position + n, self.buffer.len()));
        }
        dest[..n].copy_from_slice(&self.buffer[self.position..self.position + n]);
        self.position += n;
        Ok(())
    }

    /// Copies the next `n` bytes into `arena` and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns `reader_out_of_bounds` if fewer than `n` bytes remain.
    pub fn copy_into_arena<P: MemoryProvider>(
        &mut self,
        arena: &Arena<P>,
        n: usize,
    ) -> Result<&[u8]> {
        if n > self.remaining() {
            return Err(kinds::reader_out_of_bounds(self.position + n, self.buffer.len()));
        }
        let slice = arena.write_bytes(&self.buffer[self.position..self.position + n]);
        self.position += n;
        Ok(slice)
    }

    /// Copies the next `n` bytes into `arena` followed by a trailing
    /// zero byte, for host-convenient C-string interop.
    ///
    /// # Errors
    ///
    /// Returns `reader_out_of_bounds` if fewer than `n` bytes remain.
    pub fn copy_into_arena_cstring<P: MemoryProvider>(
        &mut self,
        arena: &Arena<P>,
        n: usize,
    ) -> Result<&[u8]> {
        if n > self.remaining() {
            return Err(kinds::reader_out_of_bounds(self.position + n, self.buffer.len()));
        }
        let out = arena.write_cstring(&self.buffer[self.position..self.position + n]);
        self.position += n;
        Ok(out)
    }
}
