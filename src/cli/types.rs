//! Type-safe wrappers for Lotofácil draw data.

use crate::error::{LotoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a Lotofácil contest number.
///
/// Contest numbers are assigned by Caixa as a monotonically increasing
/// sequence starting at 1; wrapping them prevents mixing up contest numbers
/// with counts or drawn numbers.
///
/// # Examples
///
/// ```rust
/// use loto_cache::ContestNumber;
///
/// let contest = ContestNumber::new(3000);
/// assert_eq!(contest.as_u32(), 3000);
/// assert_eq!(contest.to_string(), "3000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ContestNumber(pub u32);

impl ContestNumber {
    /// Create a new ContestNumber from a u32 value.
    pub fn new(contest: u32) -> Self {
        Self(contest)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContestNumber {
    type Err = LotoError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contest_number_round_trip() {
        let contest: ContestNumber = "1234".parse().unwrap();
        assert_eq!(contest, ContestNumber::new(1234));
        assert_eq!(contest.to_string(), "1234");
    }

    #[test]
    fn test_contest_number_trims_whitespace() {
        let contest: ContestNumber = " 7 ".parse().unwrap();
        assert_eq!(contest.as_u32(), 7);
    }

    #[test]
    fn test_contest_number_rejects_garbage() {
        assert!("abc".parse::<ContestNumber>().is_err());
        assert!("-1".parse::<ContestNumber>().is_err());
    }

    #[test]
    fn test_contest_number_ordering() {
        assert!(ContestNumber::new(7) < ContestNumber::new(42));
    }
}
