// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings for generated configuration output.
//!
//! All sections are optional:
//!
//! ```toml
//! [comments]
//! line_limit = 1024
//! indent = "  "
//!
//! [matching]
//! cache = "yes"
//! ```

pub mod value;

pub use value::{deserialize_bool, parse_bool};

use serde::Deserialize;

use crate::comment::LIST_OVERHEAD;
use crate::error::{Error, Result};
use crate::pattern::PatternCache;

/// Default maximum length of a generated comment line.
pub const DEFAULT_LINE_LIMIT: usize = 1024;

/// Top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Comment block layout.
    #[serde(default)]
    pub comments: CommentStyle,

    /// Host pattern matching behavior.
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Layout of generated comment lines: `{indent}# {label}: {content}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentStyle {
    /// Maximum line length (default: 1024).
    #[serde(default = "CommentStyle::default_line_limit")]
    pub line_limit: usize,

    /// Leading whitespace of every line (default: two spaces).
    #[serde(default = "CommentStyle::default_indent")]
    pub indent: String,
}

impl Default for CommentStyle {
    fn default() -> Self {
        Self {
            line_limit: Self::default_line_limit(),
            indent: Self::default_indent(),
        }
    }
}

impl CommentStyle {
    pub(crate) fn default_line_limit() -> usize {
        DEFAULT_LINE_LIMIT
    }

    pub(crate) fn default_indent() -> String {
        "  ".to_string()
    }

    /// Reject layouts that cannot hold any content.
    pub fn validate(&self) -> Result<()> {
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::Config {
                message: format!(
                    "comments.indent must be spaces or tabs, got {:?}",
                    self.indent
                ),
            });
        }

        let overhead = self.indent.len() + LIST_OVERHEAD;
        if self.line_limit <= overhead {
            return Err(Error::Config {
                message: format!(
                    "comments.line_limit {} leaves no room for content (minimum: {})",
                    self.line_limit,
                    overhead + 1
                ),
            });
        }

        Ok(())
    }

    /// Content budget for a line labelled `name` with `overhead` fixed chars.
    ///
    /// Never less than 1.
    pub(crate) fn budget(&self, name: &str, overhead: usize) -> usize {
        self.line_limit
            .saturating_sub(self.indent.len() + name.len() + overhead)
            .max(1)
    }

    pub(crate) fn line(&self, name: &str, content: &str) -> String {
        format!("{}# {}: {}", self.indent, name, content)
    }
}

/// Host pattern matching settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Reuse compiled patterns across lookups (default: false).
    #[serde(default, deserialize_with = "deserialize_bool")]
    pub cache: bool,
}

impl MatchingConfig {
    /// Build a pattern cache when caching is enabled.
    pub fn pattern_cache(&self) -> Option<PatternCache> {
        self.cache.then(PatternCache::new)
    }
}

/// Parse settings from TOML content.
pub fn parse(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
    })?;

    settings.comments.validate()?;
    tracing::debug!(
        "loaded settings: line_limit={}, cache={}",
        settings.comments.line_limit,
        settings.matching.cache
    );

    Ok(settings)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
