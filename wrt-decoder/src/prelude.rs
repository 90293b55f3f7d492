// WRT - wrt-decoder
// Module: Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Re-exports for crates that consume `wrt-decoder`.

#[cfg(feature = "alloc")]
pub use crate::{
    module::{BlockType, Code, Export, ExportDesc, FunctionType, Instruction, LocalsRun},
    parser::Parser,
};
pub use crate::reader::ByteReader;
pub use wrt_error::{Error, ErrorCategory, Result};
