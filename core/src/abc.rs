//! # ABC Strings and Words
//!
//! Two checks over the letters `a`, `b` and `c`:
//!
//! * An **ABC string** contains each of the three letters the same number of times.
//! * An **ABC word** contains all three letters, and their first occurrences appear
//!   in alphabetical order (`"fabric"`, `"aback"`).

/// Strings shown by the demonstration driver.
pub const EXAMPLES: [&str; 8] = [
    "abc",
    "aabbcc",
    "abbc",
    "a",
    "",
    "the quick brown fox jumps over the lazy dog",
    "rosetta code",
    "hello, world!",
];

/// Whether upper-case letters are counted together with lower-case ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    #[default]
    Sensitive,
    Insensitive,
}

/// Occurrences of `a`, `b` and `c` in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbcCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl AbcCounts {
    pub fn count(s: &str, case: Case) -> Self {
        let mut counts = Self::default();
        for ch in s.chars() {
            let ch = match case {
                Case::Sensitive => ch,
                Case::Insensitive => ch.to_ascii_lowercase(),
            };
            match ch {
                'a' => counts.a += 1,
                'b' => counts.b += 1,
                'c' => counts.c += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn is_balanced(&self) -> bool {
        self.a == self.b && self.b == self.c
    }
}

/// Returns `true` when `s` contains as many `a` as `b` as `c` (case-sensitive).
pub fn is_abc_string(s: &str) -> bool {
    AbcCounts::count(s, Case::Sensitive).is_balanced()
}

/// Returns `true` when the first `a`, first `b` and first `c` of `word` all exist
/// and appear in that order.
pub fn is_abc_word(word: &str) -> bool {
    match (word.find('a'), word.find('b'), word.find('c')) {
        (Some(a), Some(b), Some(c)) => a < b && b < c,
        _ => false,
    }
}

/// Whitespace-separated words of `text` that are ABC words, in order of appearance.
pub fn abc_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|word| is_abc_word(word))
}
