// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern cache.
//!
//! Host patterns are usually tested against many candidates. The cache keeps
//! one compiled [`HostPattern`] per raw pattern string, including a negative
//! entry for patterns that fail to compile.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use super::captures::CaptureGroups;
use super::matcher::HostPattern;

/// Thread-safe cache of compiled host patterns keyed by raw pattern.
#[derive(Debug, Default)]
pub struct PatternCache {
    /// `None` marks a pattern that failed to compile.
    inner: DashMap<String, Option<Arc<HostPattern>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of entries in cache.
    pub entries: usize,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or compile `pattern`.
    ///
    /// Returns None if the pattern is invalid.
    pub fn get_or_compile(&self, pattern: &str) -> Option<Arc<HostPattern>> {
        if let Some(entry) = self.inner.get(pattern) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("pattern cache hit: {}", pattern);
            return entry.value().clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("pattern cache miss: {}", pattern);

        let compiled = match HostPattern::compile(pattern) {
            Ok(p) => Some(Arc::new(p)),
            Err(err) => {
                tracing::debug!("invalid host pattern '{}': {}", pattern, err);
                None
            }
        };

        self.inner
            .entry(pattern.to_string())
            .or_insert(compiled)
            .value()
            .clone()
    }

    /// Same contract as [`super::match_host`], reusing compiled patterns.
    pub fn match_host(&self, pattern: &str, candidate: &str) -> (bool, CaptureGroups) {
        match self
            .get_or_compile(pattern)
            .and_then(|compiled| compiled.captures(candidate))
        {
            Some(groups) => (true, groups),
            None => (false, CaptureGroups::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop all entries and reset counters.
    pub fn clear(&self) {
        self.inner.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.inner.len(),
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
