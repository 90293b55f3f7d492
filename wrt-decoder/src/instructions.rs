// WRT - wrt-decoder
// Module: Expression (instruction stream) decoding
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Decodes a function body's expression: a flat instruction sequence
//! terminated by an `end` at depth zero.
//!
//! `block`/`loop`/`if` each open a nested scope; every `end` closes the
//! innermost open scope except the outermost one, which terminates the
//! expression instead of being appended to it. `else` does not affect
//! depth.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use wrt_error::Result;
use wrt_foundation::{Arena, MemoryProvider};
use wrt_format::opcode::Immediate as ImmediateShape;
use wrt_format::{Opcode, ValueType};

use crate::module::{BlockType, Immediate, Instruction};
use crate::reader::ByteReader;

/// Decodes the expression at the reader's current position, appending
/// every instruction (including nested `end`s, but not the terminating
/// top-level one) into `arena` and returning the stored slice.
///
/// # Errors
///
/// Propagates reader bounds failures, LEB128 failures, and
/// `unknown_opcode` for any byte outside the supported set.
#[cfg(feature = "alloc")]
pub fn decode_expression<'arena, P: MemoryProvider>(
    reader: &mut ByteReader<'_>,
    arena: &'arena Arena<P>,
) -> Result<&'arena [Instruction<'arena>]> {
    let mut instructions: Vec<Instruction<'arena>> = Vec::new();
    let mut depth: i32 = 0;

    loop {
        let opcode = Opcode::from_byte(reader.get_u8()?)?;

        if opcode == Opcode::End {
            if depth == 0 {
                break;
            }
            depth -= 1;
            instructions.push(Instruction { opcode, immediate: Immediate::None });
            continue;
        }

        if opcode.opens_block() {
            depth += 1;
        }

        let immediate = decode_immediate(reader, arena, opcode)?;
        instructions.push(Instruction { opcode, immediate });
    }

    Ok(arena.write_array(&instructions))
}

#[cfg(feature = "alloc")]
fn decode_immediate<'arena, P: MemoryProvider>(
    reader: &mut ByteReader<'_>,
    arena: &'arena Arena<P>,
    opcode: Opcode,
) -> Result<Immediate<'arena>> {
    Ok(match opcode.immediate() {
        ImmediateShape::None => Immediate::None,
        ImmediateShape::BlockType => Immediate::Block(decode_blocktype(reader)?),
        ImmediateShape::U32 => Immediate::Index(reader.get_u32()?),
        ImmediateShape::U32Pair => {
            let a = reader.get_u32()?;
            let b = reader.get_u32()?;
            Immediate::Pair(a, b)
        }
        ImmediateShape::I32Const => Immediate::I32(reader.get_i32()?),
        ImmediateShape::I64Const => Immediate::I64(reader.get_i64()?),
        ImmediateShape::ValueTypeVec => {
            let count = reader.get_u32()? as usize;
            let mut types = Vec::with_capacity(count);
            for _ in 0..count {
                types.push(ValueType::from_byte(reader.get_u8()?)?);
            }
            Immediate::ValueTypes(arena.write_array(&types))
        }
        ImmediateShape::BrTable => {
            let count = reader.get_u32()? as usize;
            let mut labels = Vec::with_capacity(count);
            for _ in 0..count {
                labels.push(reader.get_u32()?);
            }
            let default = reader.get_u32()?;
            Immediate::BrTable { labels: arena.write_array(&labels), default }
        }
    })
}

/// Decodes a `block`/`loop`/`if` blocktype immediate: `0x40`
/// means empty, a byte that decodes as a value-type tag names that
/// type, and anything else is the first byte of a signed 33-bit
/// LEB128 type index.
fn decode_blocktype(reader: &mut ByteReader<'_>) -> Result<BlockType> {
    let first = reader.peek_u8()?;
    if first == 0x40 {
        reader.skip(1)?;
        return Ok(BlockType::Empty);
    }
    if let Ok(value_type) = ValueType::from_byte(first) {
        reader.skip(1)?;
        return Ok(BlockType::Value(value_type));
    }
    Ok(BlockType::TypeIndex(reader.get_i33()?))
}
