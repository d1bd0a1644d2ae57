// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boolean-like configuration values.
//!
//! Directives such as `ControlMaster yes` or `Compression enabled` carry
//! booleans as free-form tokens. Recognized truthy tokens:
//! `yes`, `ok`, `true`, `1`, `enabled` (case-insensitive, surrounding
//! whitespace ignored). Everything else is false.

use serde::{Deserialize, Deserializer};

const TRUE_VALUES: [&str; 5] = ["yes", "ok", "true", "1", "enabled"];

/// Interpret a configuration string as a boolean.
pub fn parse_bool(input: &str) -> bool {
    let value = cleanup_value(input);
    TRUE_VALUES.contains(&value.as_str())
}

fn cleanup_value(input: &str) -> String {
    input.trim().to_lowercase()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Deserialize a boolean from a native bool, an integer, or a token string.
///
/// Integers follow the token rules: only `1` is true.
pub fn deserialize_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => b,
        BoolLike::Int(n) => n == 1,
        BoolLike::Text(s) => parse_bool(&s),
    })
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
