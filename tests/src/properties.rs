#![cfg(test)]
use std::collections::{BTreeSet, HashSet};
use std::num::NonZeroUsize;

use kata_core::abc::{self, AbcCounts, Case};
use kata_core::{brackets, rotated, substring, zigzag};
use proptest::prelude::*;

/// Quadratic reference for the sliding window.
fn brute_force_longest(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut best = 0;
    for start in 0..chars.len() {
        let mut seen = HashSet::new();
        for &c in &chars[start..] {
            if !seen.insert(c) {
                break;
            }
        }
        best = best.max(seen.len());
    }
    best
}

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

proptest! {
    #[test]
    fn longest_run_is_bounded(s in "\\PC{0,40}") {
        let len = substring::longest_unique_run(&s);
        prop_assert!(len <= s.chars().count());
        prop_assert_eq!(len == 0, s.is_empty());
    }

    #[test]
    fn longest_run_matches_brute_force(s in "[a-e ]{0,24}") {
        prop_assert_eq!(substring::longest_unique_run(&s), brute_force_longest(&s));
    }

    #[test]
    fn longest_window_slice_is_unique(s in "[a-f]{0,24}") {
        let window = substring::longest_unique_window(&s);
        let slice = window.slice(&s);
        let distinct: HashSet<char> = slice.chars().collect();
        prop_assert_eq!(distinct.len(), window.len);
        prop_assert_eq!(slice.chars().count(), window.len);
    }

    #[test]
    fn identical_characters_give_one(c in any::<char>(), n in 1usize..50) {
        let s: String = std::iter::repeat(c).take(n).collect();
        prop_assert_eq!(substring::longest_unique_run(&s), 1);
    }
}

proptest! {
    #[test]
    fn zigzag_single_row_is_identity(s in "\\PC{0,40}") {
        prop_assert_eq!(zigzag::convert(&s, NonZeroUsize::MIN), s);
    }

    #[test]
    fn zigzag_is_a_permutation(s in "\\PC{0,40}", rows in 1usize..10) {
        let rows = NonZeroUsize::new(rows).unwrap();
        let out = zigzag::convert(&s, rows);
        prop_assert_eq!(out.chars().count(), s.chars().count());
        prop_assert_eq!(sorted_chars(&out), sorted_chars(&s));
    }

    #[test]
    fn zigzag_grid_reads_back(s in "[A-Z ]{0,30}", rows in 1usize..8) {
        let rows = NonZeroUsize::new(rows).unwrap();
        let from_grid: String = zigzag::grid(&s, rows)
            .concat()
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| if c == zigzag::VISIBLE_SPACE { ' ' } else { c })
            .collect();
        prop_assert_eq!(from_grid, zigzag::convert(&s, rows));
    }
}

proptest! {
    #[test]
    fn check_agrees_with_is_valid(s in "[\\(\\)\\[\\]\\{\\}]{0,16}") {
        prop_assert_eq!(brackets::is_valid(&s), brackets::check(&s).is_ok());
    }

    #[test]
    fn mirrored_openers_are_valid(kinds in prop::collection::vec(0usize..3, 0..20)) {
        let openers: String = kinds.iter().map(|&k| brackets::Bracket::ALL[k].open()).collect();
        let closers: String = kinds.iter().rev().map(|&k| brackets::Bracket::ALL[k].close()).collect();
        let s = format!("{openers}{closers}");
        prop_assert!(brackets::is_valid(&s), "{} should be valid", s);
    }

    #[test]
    fn unequal_pair_counts_are_invalid(s in "[\\(\\)\\[\\]\\{\\}]{0,16}") {
        let unequal = brackets::Bracket::ALL.iter().any(|b| {
            s.chars().filter(|&c| c == b.open()).count() != s.chars().filter(|&c| c == b.close()).count()
        });
        if unequal {
            prop_assert!(!brackets::is_valid(&s));
        }
    }
}

proptest! {
    #[test]
    fn rotated_search_finds_every_member(
        values in prop::collection::btree_set(-1000i32..1000, 1..40),
        shift in any::<prop::sample::Index>(),
    ) {
        let sorted: Vec<i32> = values.iter().copied().collect();
        let k = shift.index(sorted.len());
        let rotated_vec: Vec<i32> = sorted[k..].iter().chain(&sorted[..k]).copied().collect();

        prop_assert!(rotated::is_rotated_ascending(&rotated_vec));
        for (idx, value) in rotated_vec.iter().enumerate() {
            prop_assert_eq!(rotated::search(&rotated_vec, value), Some(idx));
        }

        let min_idx = (sorted.len() - k) % sorted.len();
        prop_assert_eq!(rotated::pivot(&rotated_vec), min_idx);
    }

    #[test]
    fn rotated_search_misses_absent_values(
        values in prop::collection::btree_set(0i32..500, 1..30),
        shift in any::<prop::sample::Index>(),
        probe in -10i32..510,
    ) {
        let sorted: Vec<i32> = values.iter().copied().collect();
        let k = shift.index(sorted.len());
        let rotated_vec: Vec<i32> = sorted[k..].iter().chain(&sorted[..k]).copied().collect();
        let members: BTreeSet<i32> = values;

        if !members.contains(&probe) {
            prop_assert_eq!(rotated::search(&rotated_vec, &probe), None);
            prop_assert_eq!(rotated::search_index(&rotated_vec, probe), -1);
        }
    }

    #[test]
    fn unrotated_search_matches_binary_search(
        values in prop::collection::btree_set(-100i32..100, 1..30),
        probe in -110i32..110,
    ) {
        let sorted: Vec<i32> = values.into_iter().collect();
        prop_assert_eq!(rotated::search(&sorted, &probe), sorted.binary_search(&probe).ok());
    }
}

proptest! {
    #[test]
    fn abc_counts_match_filters(s in "[abcABC xyz]{0,40}") {
        let counts = AbcCounts::count(&s, Case::Sensitive);
        prop_assert_eq!(counts.a, s.matches('a').count());
        prop_assert_eq!(counts.b, s.matches('b').count());
        prop_assert_eq!(counts.c, s.matches('c').count());
        prop_assert_eq!(abc::is_abc_string(&s), counts.a == counts.b && counts.b == counts.c);
    }

    #[test]
    fn appending_abc_keeps_verdict(s in "[abc]{0,20}") {
        let extended = format!("{s}cab");
        prop_assert_eq!(abc::is_abc_string(&extended), abc::is_abc_string(&s));
    }

    #[test]
    fn abc_words_are_all_abc_words(text in "[abcdef \n]{0,60}") {
        for word in abc::abc_words(&text) {
            prop_assert!(abc::is_abc_word(word));
        }
    }
}
