#![cfg(test)]
use kata_common::input::{self, InputError, IntList};
use kata_core::abc::{self, AbcCounts, Case};
use kata_core::catalog::{Exercise, Source};
use kata_core::{brackets, rotated, substring, zigzag};
use std::num::NonZeroUsize;

/// Parses an argument the way the CLI does and searches it.
#[test]
fn search_parsed_input() {
    let nums: IntList = "[4, 5, 6, 7, 0, 1, 2]".parse().unwrap();

    assert_eq!(rotated::search_index(&nums, 0), 4);
    assert_eq!(rotated::search_index(&nums, 3), -1);
    assert_eq!(rotated::pivot(&nums), 4);
    assert!(rotated::is_rotated_ascending(&nums));
}

#[test]
fn search_single_element_input() {
    let nums: Vec<i32> = input::parse_integers("5").unwrap();
    assert_eq!(rotated::search(&nums, &5), Some(0));
}

#[test]
fn parse_rejects_garbage_before_search() {
    let err = "1, 2, x".parse::<IntList>().unwrap_err();
    assert_eq!(
        err,
        InputError::InvalidInteger {
            token: "x".to_string(),
            position: 2
        }
    );
}

#[test]
fn documented_examples() {
    assert_eq!(substring::longest_unique_run("abcabcbb"), 3);
    assert_eq!(substring::longest_unique_run(""), 0);

    let three = NonZeroUsize::new(3).unwrap();
    assert_eq!(zigzag::convert("PAYPALISHIRING", three), "PAHNAPLSIIGYIR");

    assert!(brackets::is_valid(""));
    assert!(brackets::is_valid("()[]{}"));
    assert!(!brackets::is_valid("(]"));
    assert!(!brackets::is_valid("([)]"));
    assert!(brackets::is_valid("{[]}"));

    assert!(abc::is_abc_string("abc"));
    assert!(abc::is_abc_string("aabbcc"));
    assert!(!abc::is_abc_string("abbc"));
    assert!(abc::is_abc_string(""));
}

#[test]
fn abc_string_ignores_other_characters() {
    assert!(abc::is_abc_string("xyz"));
    assert!(!abc::is_abc_string("xyza"));
    assert_eq!(
        AbcCounts::count("a-b-c-A", Case::Sensitive),
        AbcCounts { a: 1, b: 1, c: 1 }
    );
}

#[test]
fn catalog_covers_every_unit() {
    let leetcode: Vec<u16> = Exercise::ALL
        .iter()
        .filter(|exercise| exercise.source == Source::LeetCode)
        .filter_map(|exercise| exercise.number)
        .collect();
    assert_eq!(leetcode, vec![3, 6, 20, 33]);

    for command in ["longest", "zigzag", "brackets", "search", "abc", "abc-words"] {
        assert!(Exercise::find(command).is_some(), "missing catalog entry for {command}");
    }
}
