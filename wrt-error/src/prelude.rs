// WRT - wrt-error
// Module: Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Re-exports for crates that consume `wrt-error`.

pub use crate::{codes, kinds, Error, ErrorCategory, Result};
