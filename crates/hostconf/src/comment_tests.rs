// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;

fn style(line_limit: usize) -> CommentStyle {
    CommentStyle {
        line_limit,
        ..CommentStyle::default()
    }
}

/// Strip the `  # name: ` prefix from every line.
fn contents<'a>(output: &'a str, name: &str) -> Vec<&'a str> {
    let prefix = format!("  # {name}: ");
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(prefix.as_str()).unwrap())
        .collect()
}

mod string_comments {
    use super::*;

    #[test]
    fn short_value_is_one_line() {
        assert_eq!(string_comment("HostName", "example.com"), "  # HostName: example.com\n");
    }

    #[test]
    fn empty_value_is_bare_newline() {
        assert_eq!(string_comment("HostName", ""), "\n");
    }

    #[test]
    fn long_value_is_chunked_at_budget() {
        // budget = 30 - 2 - 1 - 7 = 20
        let out = string_comment_with(&style(30), "x", &"a".repeat(45));
        similar_asserts::assert_eq!(
            out,
            format!(
                "  # x: {}\n  # x: {}\n  # x: {}\n",
                "a".repeat(20),
                "a".repeat(20),
                "a".repeat(5)
            )
        );
    }

    #[test]
    fn chunks_count_chars_not_bytes() {
        // budget = 14 - 2 - 1 - 7 = 4
        let out = string_comment_with(&style(14), "k", "héllo wörld");
        assert_eq!(contents(&out, "k"), vec!["héll", "o wö", "rld"]);
    }

    #[test]
    fn default_limit_keeps_lines_under_1024() {
        let out = string_comment("ProxyCommand", &"z".repeat(3000));
        for line in out.lines() {
            assert!(line.chars().count() <= 1024, "line too long: {}", line.len());
        }
        assert_eq!(contents(&out, "ProxyCommand").concat(), "z".repeat(3000));
    }
}

mod slice_comments {
    use super::*;

    #[test]
    fn items_share_one_line() {
        let out = slice_comment("Aliases", &["web", "www", "front"]);
        assert_eq!(out, "  # Aliases: [web, www, front]\n");
    }

    #[test]
    fn empty_sequence_is_bare_newline() {
        let items: [&str; 0] = [];
        assert_eq!(slice_comment("Aliases", &items), "\n");
    }

    #[test]
    fn blank_items_are_dropped() {
        assert_eq!(slice_comment("Aliases", &["", "  ", "\n"]), "\n");
    }

    #[test]
    fn multiline_items_are_split_and_trimmed() {
        let items = vec!["  a \n b".to_string(), "\n\nc\n".to_string()];
        assert_eq!(slice_comment("L", &items), "  # L: [a, b, c]\n");
    }

    #[test]
    fn packing_starts_new_line_at_budget() {
        // budget = 30 - 2 - 1 - 10 = 17
        // "aaaaa" costs 7 each: 0+5<17, 7+5<17, 14+5>=17 -> new bundle
        let out = slice_comment_with(&style(30), "x", &["aaaaa"; 5]);
        similar_asserts::assert_eq!(
            out,
            "  # x: [aaaaa, aaaaa]\n  # x: [aaaaa, aaaaa]\n  # x: [aaaaa]\n".to_string()
        );
    }

    #[test]
    fn oversized_first_item_gets_its_own_line() {
        // budget = 30 - 2 - 1 - 10 = 17
        let long = "b".repeat(20);
        let out = slice_comment_with(&style(30), "x", &[long.as_str(), "c"]);
        assert_eq!(out, format!("  # x: [{long}]\n  # x: [c]\n"));
    }
}

#[test]
fn split_chunks_exact_multiple() {
    assert_eq!(split_chunks("abcd", 2), vec!["ab", "cd"]);
}

#[test]
fn split_chunks_remainder() {
    assert_eq!(split_chunks("abcde", 2), vec!["ab", "cd", "e"]);
}

#[test]
fn split_chunks_empty() {
    assert!(split_chunks("", 3).is_empty());
}

#[test]
fn split_chunks_zero_size_is_one() {
    assert_eq!(split_chunks("abc", 0), vec!["a", "b", "c"]);
}

#[test]
fn split_chunks_multibyte() {
    assert_eq!(split_chunks("日本語です", 2), vec!["日本", "語で", "す"]);
}

proptest! {
    #[test]
    fn string_chunks_reconstruct_value(value in "\\PC{0,300}", limit in 16usize..80) {
        let out = string_comment_with(&style(limit), "n", &value);
        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(contents(&out, "n").concat(), value.clone());
        for line in out.lines() {
            prop_assert!(line.chars().count() <= limit);
        }
    }

    #[test]
    fn slice_bundles_preserve_items_and_limit(
        items in proptest::collection::vec("[a-z0-9. ]{0,12}", 0..40),
        limit in 40usize..120,
    ) {
        let out = slice_comment_with(&style(limit), "n", &items);
        prop_assert!(out.ends_with('\n'));

        let expected: Vec<&str> = items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect();
        let actual: Vec<&str> = contents(&out, "n")
            .into_iter()
            .flat_map(|line| {
                line.strip_prefix('[')
                    .and_then(|l| l.strip_suffix(']'))
                    .unwrap()
                    .split(", ")
            })
            .collect();
        prop_assert_eq!(actual, expected);

        for line in out.lines() {
            prop_assert!(line.len() < limit);
        }
    }
}
