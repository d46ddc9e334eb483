//! # Bracket Validation
//!
//! Stack machine over the three paired bracket kinds `()`, `[]` and `{}`.
//!
//! Opening brackets are pushed. A closing bracket must match the innermost open
//! bracket, which is then popped. The input is balanced when it ends on an empty
//! stack. Any other character rejects the input.

use thiserror::Error;
use tracing::debug;

/// The three paired bracket kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Round,
    Square,
    Curly,
}

impl Bracket {
    pub const ALL: [Bracket; 3] = [Bracket::Round, Bracket::Square, Bracket::Curly];

    pub fn open(self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }

    pub fn from_open(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.open() == c)
    }

    pub fn from_close(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.close() == c)
    }
}

/// First reason a character sequence is not balanced.
///
/// Positions are zero-based `char` indices into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("unexpected '{found}' at position {position}: nothing is open")]
    Unexpected { found: char, position: usize },

    #[error("expected '{expected}' but found '{found}' at position {position}")]
    Mismatched {
        expected: char,
        found: char,
        position: usize,
    },

    #[error("'{open}' opened at position {position} is never closed")]
    Unclosed { open: char, position: usize },

    #[error("'{found}' at position {position} is not a bracket")]
    NotABracket { found: char, position: usize },
}

/// Returns `true` when every bracket in `s` is closed by the matching kind, in order.
pub fn is_valid(s: &str) -> bool {
    check(s).is_ok()
}

/// Runs the bracket machine over `s`, reporting the first failure.
pub fn check(s: &str) -> Result<(), BracketError> {
    let mut stack: Vec<(Bracket, usize)> = Vec::new();

    for (position, c) in s.chars().enumerate() {
        if let Some(bracket) = Bracket::from_open(c) {
            stack.push((bracket, position));
            continue;
        }

        let Some(closing) = Bracket::from_close(c) else {
            debug!(position, found = %c, "rejecting non-bracket character");
            return Err(BracketError::NotABracket { found: c, position });
        };

        match stack.last() {
            None => return Err(BracketError::Unexpected { found: c, position }),
            Some(&(open, _)) if open != closing => {
                return Err(BracketError::Mismatched {
                    expected: open.close(),
                    found: c,
                    position,
                });
            }
            Some(_) => {
                stack.pop();
            }
        }
    }

    match stack.pop() {
        Some((open, position)) => Err(BracketError::Unclosed {
            open: open.open(),
            position,
        }),
        None => Ok(()),
    }
}
