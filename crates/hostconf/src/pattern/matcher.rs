// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Anchored host patterns with capture extraction.

use std::borrow::Cow;

use regex::Regex;

use super::captures::CaptureGroups;

/// A compiled host pattern.
///
/// The source is anchored on compilation, see [`anchor`].
#[derive(Debug, Clone)]
pub struct HostPattern {
    regex: Regex,
}

/// Error during pattern compilation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PatternError {
    #[error("invalid host pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Result of testing a candidate against a raw pattern.
#[derive(Debug)]
pub enum MatchOutcome {
    /// Candidate matched; submatches keyed `{1}` (whole match), `{2}`, ...
    Matched(CaptureGroups),
    /// Pattern compiled but the candidate did not match.
    NoMatch,
    /// Pattern failed to compile.
    InvalidPattern(PatternError),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    /// Collapse into the `(matched, groups)` pair.
    ///
    /// Invalid patterns are indistinguishable from a plain miss here.
    pub fn into_parts(self) -> (bool, CaptureGroups) {
        match self {
            MatchOutcome::Matched(groups) => (true, groups),
            MatchOutcome::NoMatch | MatchOutcome::InvalidPattern(_) => {
                (false, CaptureGroups::default())
            }
        }
    }
}

/// Wrap `pattern` as `^pattern$` unless it already carries an anchor.
///
/// Only a pattern with neither a leading `^` nor a trailing `$` is wrapped;
/// `^foo` and `foo$` are left untouched, so they still match partially on
/// their open side.
pub fn anchor(pattern: &str) -> Cow<'_, str> {
    if !pattern.starts_with('^') && !pattern.ends_with('$') {
        Cow::Owned(format!("^{pattern}$"))
    } else {
        Cow::Borrowed(pattern)
    }
}

impl HostPattern {
    /// Anchor and compile a raw pattern.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&anchor(pattern))?;
        Ok(Self { regex })
    }

    /// The anchored source this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Match `candidate` and extract its submatches.
    ///
    /// Returns None when the candidate does not match.
    pub fn captures(&self, candidate: &str) -> Option<CaptureGroups> {
        self.regex
            .captures(candidate)
            .map(|caps| CaptureGroups::from_captures(&caps))
    }
}

/// Compile `pattern` and test `candidate` against it.
pub fn evaluate(pattern: &str, candidate: &str) -> MatchOutcome {
    match HostPattern::compile(pattern) {
        Ok(compiled) => compiled
            .captures(candidate)
            .map_or(MatchOutcome::NoMatch, MatchOutcome::Matched),
        Err(err) => MatchOutcome::InvalidPattern(err),
    }
}

/// Match a hostname against a possibly unanchored pattern.
///
/// Returns `(true, groups)` on a match, where `{1}` holds the whole match
/// and `{2}` onward the capture groups. A malformed pattern never errors;
/// it is reported as `(false, empty)`.
pub fn match_host(pattern: &str, candidate: &str) -> (bool, CaptureGroups) {
    let outcome = evaluate(pattern, candidate);
    if let MatchOutcome::InvalidPattern(err) = &outcome {
        tracing::debug!("invalid host pattern '{}': {}", pattern, err);
    }
    outcome.into_parts()
}

/// Check whether a host entry is a pattern rather than a literal name.
pub fn is_dynamic_hostname(hostname: &str) -> bool {
    hostname.contains(['*', '[', ']'])
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
