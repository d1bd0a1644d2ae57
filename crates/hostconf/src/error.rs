// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::pattern::PatternError;

/// hostconf error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings document could not be parsed or holds invalid values
    #[error("config error: {message}")]
    Config { message: String },

    /// Host pattern failed to compile
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Result type using hostconf Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
