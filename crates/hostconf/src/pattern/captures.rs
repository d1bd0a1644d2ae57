// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Positional capture groups.

use std::collections::HashMap;

use regex::Captures;

/// Submatches of a host pattern keyed `{1}`, `{2}`, ...
///
/// Key `{1}` is the whole match; the first parenthesized group is `{2}`.
/// Groups that did not take part in the match hold an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureGroups {
    groups: HashMap<String, String>,
}

impl CaptureGroups {
    pub(crate) fn from_captures(caps: &Captures<'_>) -> Self {
        let groups = caps
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let text = m.map_or("", |m| m.as_str());
                (Self::key(i + 1), text.to_string())
            })
            .collect();
        Self { groups }
    }

    /// Format the key for a 1-based submatch index.
    pub fn key(index: usize) -> String {
        format!("{{{index}}}")
    }

    /// Look up a submatch by its 1-based index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.get_key(&Self::key(index))
    }

    /// Look up a submatch by its formatted key, e.g. `"{2}"`.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        self.groups.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over `(key, text)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.groups
    }

    /// Replace every known `{N}` token in `template` with its submatch.
    ///
    /// Tokens without a matching group are copied through unchanged.
    pub fn expand(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];

            let Some(close) = tail.find('}') else {
                rest = tail;
                break;
            };

            match self.groups.get(&tail[..=close]) {
                Some(text) => {
                    out.push_str(text);
                    rest = &tail[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
#[path = "captures_tests.rs"]
mod tests;
