// WRT - wrt-foundation
// Module: WRT Foundation
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![cfg_attr(not(feature = "std"), no_std)]

//! Arena allocator and memory-provider primitives that back the WRT
//! WebAssembly module loader.
//!
//! A decoded module is a graph of slices (types, exports, instruction
//! streams) that all live as long as the [`arena::Arena`] they were
//! allocated from. `wrt-decoder` bump-allocates every record it produces
//! into one of these arenas instead of returning owned, individually
//! heap-allocated values.

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arena;
pub mod provider;

pub use arena::Arena;
pub use provider::MemoryProvider;
#[cfg(feature = "alloc")]
pub use provider::StdMemoryProvider;
