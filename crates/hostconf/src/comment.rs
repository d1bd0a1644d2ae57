// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comment blocks for generated configuration files.
//!
//! Long values are spread over several `  # label: ...` lines so that no
//! line exceeds the configured limit (1024 by default).

use crate::config::CommentStyle;

/// Chars reserved beyond indent and label on a string line.
pub(crate) const STRING_OVERHEAD: usize = 7;

/// Chars reserved beyond indent and label on a list line.
pub(crate) const LIST_OVERHEAD: usize = 10;

/// Render `value` as comment lines using the default style.
pub fn string_comment(name: &str, value: &str) -> String {
    string_comment_with(&CommentStyle::default(), name, value)
}

/// Render `value` as comment lines, one per fixed-size chunk.
///
/// Chunks are measured in chars, so multi-byte characters are never split.
pub fn string_comment_with(style: &CommentStyle, name: &str, value: &str) -> String {
    let max_length = style.budget(name, STRING_OVERHEAD);
    let lines: Vec<String> = split_chunks(value, max_length)
        .into_iter()
        .map(|chunk| style.line(name, chunk))
        .collect();
    lines.join("\n") + "\n"
}

/// Render `items` as bracketed comment lines using the default style.
pub fn slice_comment<S: AsRef<str>>(name: &str, items: &[S]) -> String {
    slice_comment_with(&CommentStyle::default(), name, items)
}

/// Render `items` as bracketed, comma-separated comment lines.
///
/// Multi-line items are split; every line is trimmed and blank lines are
/// dropped. Items are packed greedily: a new line starts once the next item
/// would reach the content budget.
pub fn slice_comment_with<S: AsRef<str>>(style: &CommentStyle, name: &str, items: &[S]) -> String {
    let max_length = style.budget(name, LIST_OVERHEAD);
    let bundles = bundle(items, max_length);

    let lines: Vec<String> = bundles
        .iter()
        .map(|group| style.line(name, &format!("[{}]", group.join(", "))))
        .collect();
    lines.join("\n") + "\n"
}

/// Pack trimmed, non-empty item lines into bundles under `max_length`.
///
/// Each entry costs its byte length plus 2 for the separator.
fn bundle<S: AsRef<str>>(items: &[S], max_length: usize) -> Vec<Vec<&str>> {
    let mut bundles = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut cur_len = 0;

    let entries = items
        .iter()
        .flat_map(|item| item.as_ref().split('\n'))
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for line in entries {
        if !current.is_empty() && cur_len + line.len() >= max_length {
            bundles.push(std::mem::take(&mut current));
            cur_len = 0;
        }
        current.push(line);
        cur_len += line.len() + 2;
    }

    if !current.is_empty() {
        bundles.push(current);
    }
    bundles
}

/// Split `s` into chunks of at most `n` chars (`n` is raised to 1 if 0).
pub fn split_chunks(s: &str, n: usize) -> Vec<&str> {
    let n = n.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;

    for (count, (idx, _)) in s.char_indices().enumerate() {
        if count > 0 && count % n == 0 {
            chunks.push(&s[start..idx]);
            start = idx;
        }
    }

    if start < s.len() {
        chunks.push(&s[start..]);
    }
    chunks
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
