//! # Command-Line Input Parsing
//!
//! Turns free-form argument text into typed values.
//!
//! Integer lists accept any mix of commas and whitespace as separators and may be
//! wrapped in square brackets:
//! * `4,5,6,7,0,1,2`
//! * `"4 5 6"`
//! * `"[4, 5, 6]"`

use std::ops::Deref;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no integers given")]
    Empty,

    #[error("invalid integer '{token}' at position {position}")]
    InvalidInteger { token: String, position: usize },
}

/// A list of integers parsed from a single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntList(pub Vec<i32>);

impl FromStr for IntList {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_integers(s).map(IntList)
    }
}

impl Deref for IntList {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Parses a separated list of integers.
///
/// `position` in [`InputError::InvalidInteger`] is the zero-based index of the
/// offending token.
pub fn parse_integers(s: &str) -> Result<Vec<i32>, InputError> {
    let trimmed: &str = s.trim();
    let inner: &str = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    let values: Vec<i32> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i32>().map_err(|_| InputError::InvalidInteger {
                token: token.to_string(),
                position,
            })
        })
        .collect::<Result<_, _>>()?;

    if values.is_empty() {
        return Err(InputError::Empty);
    }

    trace!(count = values.len(), "parsed integer list");
    Ok(values)
}
