//! # Longest Unique Run
//!
//! Sliding-window scan for the longest contiguous run of characters in which no
//! character repeats.
//!
//! The window `[l, r)` only ever moves forward, so every character is added and
//! removed at most once.

use std::collections::HashMap;

use tracing::trace;

/// Slots in the fast-path frequency table. Covers every ASCII character.
const ASCII_SLOTS: usize = 128;

/// A run of unique characters, measured in `char` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub start: usize,
    pub len: usize,
}

impl Window {
    /// Returns the characters of `s` covered by this window.
    ///
    /// `s` must be the string the window was computed from.
    pub fn slice<'a>(&self, s: &'a str) -> &'a str {
        let mut indices = s.char_indices().map(|(idx, _)| idx).chain(std::iter::once(s.len()));
        let begin: usize = indices.nth(self.start).unwrap_or(s.len());
        let end: usize = if self.len == 0 {
            begin
        } else {
            indices.nth(self.len - 1).unwrap_or(s.len())
        };
        &s[begin..end]
    }
}

/// Per-character occurrence counts inside the current window.
struct Counts {
    ascii: [u32; ASCII_SLOTS],
    other: HashMap<char, u32>,
}

impl Counts {
    fn new() -> Self {
        Self {
            ascii: [0; ASCII_SLOTS],
            other: HashMap::new(),
        }
    }

    fn slot(&mut self, c: char) -> &mut u32 {
        if c.is_ascii() {
            &mut self.ascii[c as usize]
        } else {
            self.other.entry(c).or_insert(0)
        }
    }

    fn get(&mut self, c: char) -> u32 {
        *self.slot(c)
    }

    fn include(&mut self, c: char) {
        *self.slot(c) += 1;
    }

    fn exclude(&mut self, c: char) {
        let slot = self.slot(c);
        *slot = slot.saturating_sub(1);
    }
}

/// Length (in chars) of the longest substring of `s` without repeating characters.
pub fn longest_unique_run(s: &str) -> usize {
    longest_unique_window(s).len
}

/// Position of the first longest substring of `s` without repeating characters.
pub fn longest_unique_window(s: &str) -> Window {
    let chars: Vec<char> = s.chars().collect();
    let mut counts = Counts::new();
    let mut best = Window::default();
    let mut l: usize = 0;

    for (r, &c) in chars.iter().enumerate() {
        counts.include(c);
        while counts.get(c) > 1 {
            counts.exclude(chars[l]);
            l += 1;
        }

        let width: usize = r + 1 - l;
        if width > best.len {
            best = Window { start: l, len: width };
        }
    }

    trace!(input_len = chars.len(), start = best.start, len = best.len, "longest unique window");
    best
}
