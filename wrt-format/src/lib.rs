// WRT - wrt-format
// Module: WRT Format
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![cfg_attr(not(feature = "std"), no_std)]

//! Constants and codecs for the Wasm 1.0 binary module format.
//!
//! This crate knows nothing about arenas or readers; it is the layer
//! below `wrt-decoder` that names the bytes the format is made of
//! (magic numbers, section ids, opcode bytes, value-type tags) and
//! implements the one genuinely tricky bit of the encoding, LEB128.

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod binary;
pub mod leb128;
pub mod opcode;

pub use binary::{ExportKind, SectionId, ValueType};
pub use opcode::Opcode;
