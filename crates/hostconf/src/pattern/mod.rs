// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hostname pattern matching.
//!
//! Host entries in a configuration may be regular expressions rather than
//! literal names. A candidate hostname is tested against such an entry and,
//! on success, the submatches are returned keyed `{1}`, `{2}`, ... so that
//! other directives can reference them.
//!
//! - [`match_host`]: compile per call, report only matched / not matched
//! - [`evaluate`]: same, but keeps invalid patterns distinguishable
//! - [`PatternCache`]: reuses compiled patterns across calls

pub mod cache;
pub mod captures;
pub mod matcher;

pub use cache::{CacheStats, PatternCache};
pub use captures::CaptureGroups;
pub use matcher::{
    HostPattern, MatchOutcome, PatternError, anchor, evaluate, is_dynamic_hostname, match_host,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
