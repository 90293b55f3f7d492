// WRT - wrt-decoder
// Module: WRT Decoder
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![cfg_attr(not(feature = "std"), no_std)]

//! Decodes a Wasm 1.0 binary module into a tree of records owned by a
//! [`wrt_foundation::Arena`].
//!
//! This crate reads the preamble, walks the module's sections in their
//! required order, and fully decodes the type, function, export and
//! code sections — including every function body's instruction
//! stream. Everything else (validation beyond structural correctness,
//! execution) is someone else's problem.

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod instructions;
#[cfg(feature = "alloc")]
pub mod module;
#[cfg(feature = "alloc")]
pub mod parser;
pub mod prelude;
pub mod reader;

#[cfg(feature = "alloc")]
pub use module::{
    BlockType, Code, Export, ExportDesc, FunctionType, Instruction, LocalsRun,
};
#[cfg(feature = "alloc")]
pub use parser::Parser;
pub use reader::ByteReader;
