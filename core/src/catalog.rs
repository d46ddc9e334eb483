//! Metadata for every exercise in this crate: where the problem comes from and which
//! `kata` subcommand runs it.

use std::fmt;

/// Problem collection an exercise was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    LeetCode,
    RosettaCode,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::LeetCode => write!(f, "LeetCode"),
            Source::RosettaCode => write!(f, "Rosetta Code"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub source: Source,
    /// Problem number, for collections that number their problems.
    pub number: Option<u16>,
    pub slug: &'static str,
    pub title: &'static str,
    pub command: &'static str,
}

impl Exercise {
    pub const ALL: [Exercise; 6] = [
        Exercise {
            source: Source::LeetCode,
            number: Some(3),
            slug: "longest_substring_without_repeating_characters",
            title: "Longest Substring Without Repeating Characters",
            command: "longest",
        },
        Exercise {
            source: Source::LeetCode,
            number: Some(6),
            slug: "zigzag_conversion",
            title: "Zigzag Conversion",
            command: "zigzag",
        },
        Exercise {
            source: Source::LeetCode,
            number: Some(20),
            slug: "valid_parentheses",
            title: "Valid Parentheses",
            command: "brackets",
        },
        Exercise {
            source: Source::LeetCode,
            number: Some(33),
            slug: "search_in_rotated_sorted_array",
            title: "Search in Rotated Sorted Array",
            command: "search",
        },
        Exercise {
            source: Source::RosettaCode,
            number: None,
            slug: "abc_correlation",
            title: "ABC Correlation",
            command: "abc",
        },
        Exercise {
            source: Source::RosettaCode,
            number: None,
            slug: "abc_words",
            title: "ABC Words",
            command: "abc-words",
        },
    ];

    /// Looks an exercise up by slug or by subcommand name.
    pub fn find(name: &str) -> Option<&'static Exercise> {
        Self::ALL
            .iter()
            .find(|exercise| exercise.slug == name || exercise.command == name)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} #{:04} {}", self.source, number, self.slug),
            None => write!(f, "{} {}", self.source, self.slug),
        }
    }
}
