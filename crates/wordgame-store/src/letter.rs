//! The `Letter` type: a single validated guess.

use std::fmt;
use std::str::FromStr;

use crate::InvalidLetter;

/// One uppercase ASCII letter, `A` through `Z`.
///
/// [`GameStore::apply_guess`](crate::GameStore::apply_guess) only accepts
/// a `Letter`, so a malformed guess is rejected when the request is parsed
/// and can never reach the registry. Parsing does not normalize: callers
/// trim and uppercase raw input first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    /// Returns `Some` if `c` is in `A..=Z`.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_uppercase().then_some(Self(c))
    }

    /// The letter as a `char`.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl FromStr for Letter {
    type Err = InvalidLetter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::new(c).ok_or_else(|| InvalidLetter(s.to_string()))
            }
            _ => Err(InvalidLetter(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
