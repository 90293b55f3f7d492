// WRT - wrt-logging
// Module: WRT Logging
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![cfg_attr(not(feature = "std"), no_std)]

//! Two logging sinks, informational and error, each receiving a
//! pre-formatted string with no level filtering applied here — that is
//! left to the `log` facade's own filtering and the host application's
//! logger configuration.
//!
//! This crate does not invent its own sink abstraction: it wraps the
//! ecosystem's `log` facade, exactly as `wrt-decoder`'s own `Cargo.toml`
//! already pulls in `log` as an optional dependency. A host embedding the
//! loader picks the backend (`env_logger`, `tracing-log`, a custom
//! `log::Log` implementation) the same way it would for any other crate
//! that calls into `log`; on `no_std` builds without the `std` feature,
//! both sinks are no-ops rather than failing to compile.

/// Sends `message` to the informational sink.
///
/// With the `std` feature enabled this calls through to [`log::info!`];
/// otherwise it is a no-op.
pub fn info(message: &str) {
    #[cfg(feature = "std")]
    log::info!("{message}");
    #[cfg(not(feature = "std"))]
    let _ = message;
}

/// Sends `message` to the error sink.
///
/// With the `std` feature enabled this calls through to [`log::error!`];
/// otherwise it is a no-op.
pub fn error(message: &str) {
    #[cfg(feature = "std")]
    log::error!("{message}");
    #[cfg(not(feature = "std"))]
    let _ = message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinks_accept_a_message_without_panicking() {
        info("module parsed");
        error("unknown opcode 0xFE");
    }
}
