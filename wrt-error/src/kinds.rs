// WRT - wrt-error
// Module: Convenience error constructors
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! One constructor per recurring failure kind, so call sites read as
//! `kinds::unknown_opcode(0xFE)` rather than repeating `Error::new(...)`.

use core::fmt::Display;

use crate::{codes, Error, ErrorCategory};

/// The arena ran out of room for an allocation.
#[cfg(any(feature = "std", feature = "alloc"))]
pub fn arena_out_of_memory() -> Error {
    Error::new(ErrorCategory::Memory, codes::ARENA_OUT_OF_MEMORY, "Arena out of memory")
}

/// A reader operation would have advanced past the end of the input.
#[cfg(feature = "alloc")]
pub fn reader_out_of_bounds(position: usize, length: usize) -> Error {
    extern crate alloc;
    use alloc::format;
    Error::new(
        ErrorCategory::Memory,
        codes::READER_OUT_OF_BOUNDS,
        format!("position {position} exceeds input length {length}"),
    )
}

/// A reader operation would have advanced past the end of the input
/// (no_std, no-alloc: the position/length are discarded).
#[cfg(not(feature = "alloc"))]
pub fn reader_out_of_bounds(_position: usize, _length: usize) -> Error {
    Error::new(ErrorCategory::Memory, codes::READER_OUT_OF_BOUNDS, "reader out of bounds")
}

/// A LEB128 sequence ran out of input before a terminating byte.
pub fn leb128_truncated() -> Error {
    Error::new(ErrorCategory::Parse, codes::LEB128_TRUNCATED, "LEB128 sequence truncated")
}

/// A LEB128 sequence used more bytes than its target width allows.
pub fn leb128_overlong() -> Error {
    Error::new(ErrorCategory::Parse, codes::LEB128_OVERLONG, "LEB128 encoding is overlong")
}

/// The module did not start with the Wasm magic number.
pub fn invalid_magic() -> Error {
    Error::new(ErrorCategory::Validation, codes::INVALID_MAGIC, "Invalid Wasm magic number")
}

/// The module declared an unsupported binary format version.
pub fn invalid_version() -> Error {
    Error::new(ErrorCategory::Validation, codes::INVALID_VERSION, "Unsupported Wasm version")
}

/// A value-type byte did not decode to a recognized tag.
pub fn invalid_value_type(byte: u8) -> Error {
    let _ = byte;
    Error::new(ErrorCategory::Validation, codes::INVALID_VALUE_TYPE, "Invalid value-type byte")
}

/// A function type did not begin with the `0x60` marker.
pub fn invalid_functype_marker() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::INVALID_FUNCTYPE_MARKER,
        "Function type missing 0x60 marker",
    )
}

/// An export-kind byte was outside the defined range.
pub fn invalid_export_kind() -> Error {
    Error::new(ErrorCategory::Validation, codes::INVALID_EXPORT_KIND, "Invalid export kind byte")
}

/// A section id byte did not decode to one of the defined section ids (`0..=12`).
pub fn unknown_section_id(byte: u8) -> Error {
    let _ = byte;
    Error::new(ErrorCategory::Validation, codes::UNKNOWN_SECTION_ID, "Unknown section id")
}

/// A section's payload consumed a different number of bytes than its declared size.
pub fn section_size_mismatch() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::SECTION_SIZE_MISMATCH,
        "Section payload did not match its declared size",
    )
}

/// A section referenced another section that has not yet been parsed.
pub fn section_order_violation(what: &str) -> Error {
    let _ = what;
    Error::new(
        ErrorCategory::Validation,
        codes::SECTION_ORDER_VIOLATION,
        "Section references a section that has not been parsed yet",
    )
}

/// A type index was not within the type section's bounds.
pub fn type_index_out_of_range() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::TYPE_INDEX_OUT_OF_RANGE,
        "Type index out of range",
    )
}

/// A function index was not within the function section's bounds.
pub fn function_index_out_of_range() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::FUNCTION_INDEX_OUT_OF_RANGE,
        "Function index out of range",
    )
}

/// An opcode byte did not match any entry in the supported opcode table.
pub fn unknown_opcode(opcode: u8) -> Error {
    let _ = opcode;
    Error::new(ErrorCategory::Validation, codes::UNKNOWN_OPCODE, "Unknown or unimplemented opcode")
}

/// Reading or opening the input file failed.
#[cfg(feature = "alloc")]
pub fn io_error(detail: impl Display) -> Error {
    extern crate alloc;
    use alloc::format;
    Error::new(ErrorCategory::System, codes::IO_ERROR, format!("I/O error: {detail}"))
}

/// Reading or opening the input file failed (no_std, no-alloc).
#[cfg(not(feature = "alloc"))]
pub fn io_error(detail: impl Display) -> Error {
    Error::new(ErrorCategory::System, codes::IO_ERROR, detail)
}
