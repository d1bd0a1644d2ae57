// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String helpers for host configuration.
//!
//! - [`match_host`]: hostname matching against regex host patterns
//! - [`parse_bool`]: boolean-like directive values
//! - [`string_comment`] / [`slice_comment`]: wrapped comment blocks for
//!   generated config files

pub mod comment;
pub mod config;
pub mod error;
pub mod pattern;

pub use comment::{slice_comment, slice_comment_with, string_comment, string_comment_with};
pub use config::{CommentStyle, MatchingConfig, Settings, parse_bool};
pub use error::{Error, Result};
pub use pattern::{CaptureGroups, HostPattern, MatchOutcome, PatternCache, match_host};
