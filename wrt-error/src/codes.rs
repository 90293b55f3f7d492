// WRT - wrt-error
// Module: WRT Error Codes
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Numeric error codes for the module loader.
//!
//! Codes are grouped by the error category they are used with (see
//! [`crate::ErrorCategory`]) and by the stage of decoding that raises
//! them, not by an arbitrary numbering scheme.

// Memory / arena errors (1000-1099)
/// The arena has no room left for the requested allocation.
pub const ARENA_OUT_OF_MEMORY: u16 = 1000;
/// A byte reader read or skip would have advanced past the end of input.
pub const READER_OUT_OF_BOUNDS: u16 = 1001;

// Parse errors (1100-1199)
/// A LEB128 sequence ran out of input before a terminating byte.
pub const LEB128_TRUNCATED: u16 = 1100;
/// A LEB128 sequence used more bytes than its target width permits.
pub const LEB128_OVERLONG: u16 = 1101;
/// Generic structural parse failure.
pub const PARSE_ERROR: u16 = 1102;
/// Unexpected end of input while decoding a fixed-size field.
pub const UNEXPECTED_EOF: u16 = 1103;

// Validation errors (1200-1299)
/// The module did not begin with the Wasm magic number.
pub const INVALID_MAGIC: u16 = 1200;
/// The module declared an unsupported binary format version.
pub const INVALID_VERSION: u16 = 1201;
/// A section id byte was outside the defined range.
pub const UNKNOWN_SECTION_ID: u16 = 1202;
/// A value-type byte did not decode to a recognized tag.
pub const INVALID_VALUE_TYPE: u16 = 1203;
/// A function type did not begin with the `0x60` marker.
pub const INVALID_FUNCTYPE_MARKER: u16 = 1204;
/// An export descriptor byte was outside the defined range.
pub const INVALID_EXPORT_KIND: u16 = 1205;
/// A section referenced another section that has not yet been parsed.
pub const SECTION_ORDER_VIOLATION: u16 = 1206;
/// A type index was not less than the type section's size.
pub const TYPE_INDEX_OUT_OF_RANGE: u16 = 1207;
/// A function index was not less than the function section's size.
pub const FUNCTION_INDEX_OUT_OF_RANGE: u16 = 1208;
/// A section's decoded payload consumed a different number of bytes than its declared size.
pub const SECTION_SIZE_MISMATCH: u16 = 1211;

// Instruction decode errors (1300-1399)
/// An opcode byte did not match any entry in the supported opcode table.
pub const UNKNOWN_OPCODE: u16 = 1300;

// System errors (1400-1499)
/// Reading or opening the input file failed.
pub const IO_ERROR: u16 = 1400;
