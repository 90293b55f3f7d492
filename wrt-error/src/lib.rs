// WRT - wrt-error
// Module: WRT Error Handling
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Error handling for the WRT WebAssembly module loader.
//!
//! The loader never panics on malformed input: every fallible operation
//! (arena overflow excepted, which is a fatal misconfiguration) returns
//! a [`Result`] carrying a categorized [`Error`]. See [`codes`] for the
//! numeric error codes and [`kinds`] for convenience constructors used
//! throughout `wrt-foundation`, `wrt-format` and `wrt-decoder`.

extern crate core;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod codes;
pub mod errors;
pub mod kinds;
pub mod prelude;

pub use errors::{Error, ErrorCategory};

/// A specialized [`core::result::Result`] for loader operations.
pub type Result<T> = core::result::Result<T, Error>;
