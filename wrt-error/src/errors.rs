// WRT - wrt-error
// Module: Error type and category
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#[cfg(feature = "std")]
use std::string::String;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use core::fmt;

/// Broad classification of an [`Error`] by the stage of decoding that
/// raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Arena or byte-reader bounds failures.
    Memory,
    /// LEB128 decode and other low-level structural parse failures.
    Parse,
    /// Higher-level structural rejections: bad tags, ordering, indices.
    Validation,
    /// I/O and other host-environment failures.
    System,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::Parse => "parse",
            Self::Validation => "validation",
            Self::System => "system",
        };
        f.write_str(name)
    }
}

/// An error produced by the loader.
///
/// `alloc`-enabled builds carry a human-readable message; `no_std` builds
/// without `alloc` carry only the category and code, matching the rest of
/// this crate family's approach to no_std environments.
#[derive(Debug, Clone)]
pub struct Error {
    /// The broad category this error falls into.
    pub category: ErrorCategory,
    /// A code from [`crate::codes`] identifying the specific failure.
    pub code: u16,
    #[cfg(any(feature = "std", feature = "alloc"))]
    message: String,
}

impl Error {
    /// Create a new error.
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub fn new(category: ErrorCategory, code: u16, message: impl Into<String>) -> Self {
        Self { category, code, message: message.into() }
    }

    /// Create a new error (no_std, no-alloc: the message is discarded).
    #[cfg(not(any(feature = "std", feature = "alloc")))]
    pub fn new(category: ErrorCategory, code: u16, _message: impl fmt::Display) -> Self {
        Self { category, code }
    }

    /// The error message, if this build carries one.
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(any(feature = "std", feature = "alloc"))]
        {
            write!(f, "[{} {}] {}", self.category, self.code, self.message)
        }
        #[cfg(not(any(feature = "std", feature = "alloc")))]
        {
            write!(f, "[{} {}]", self.category, self.code)
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_code() {
        let err = Error::new(ErrorCategory::Parse, crate::codes::LEB128_TRUNCATED, "truncated");
        let rendered = format!("{err}");
        assert!(rendered.contains("parse"));
        assert!(rendered.contains("1100"));
        assert!(rendered.contains("truncated"));
    }
}
