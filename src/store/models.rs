//! Draw data structures and validation

use crate::cli::types::ContestNumber;
use crate::error::{LotoError, Result};
use std::fmt;

/// How many numbers a Lotofácil draw contains.
pub const DRAW_SIZE: usize = 15;

/// Smallest drawable number.
pub const MIN_NUMBER: u8 = 1;

/// Largest drawable number.
pub const MAX_NUMBER: u8 = 25;

/// Check that `numbers` is a valid Lotofácil selection: exactly [`DRAW_SIZE`]
/// distinct values, each in `MIN_NUMBER..=MAX_NUMBER`.
pub(crate) fn check_numbers(numbers: &[u8]) -> std::result::Result<(), String> {
    if numbers.len() != DRAW_SIZE {
        return Err(format!(
            "expected {} numbers, got {}",
            DRAW_SIZE,
            numbers.len()
        ));
    }
    let mut seen = [false; (MAX_NUMBER as usize) + 1];
    for &n in numbers {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
            return Err(format!(
                "number {} out of range {}-{}",
                n, MIN_NUMBER, MAX_NUMBER
            ));
        }
        if seen[n as usize] {
            return Err(format!("duplicate number {}", n));
        }
        seen[n as usize] = true;
    }
    Ok(())
}

/// One Lotofácil drawing: a contest number and its 15 drawn numbers.
///
/// The numbers are kept in the order they were received (the API reports
/// both sorted and draw-order lists); the invariant is distinctness and
/// range, not ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    contest: ContestNumber,
    numbers: [u8; DRAW_SIZE],
}

impl Draw {
    /// Build a validated draw. Rejects contest 0 and any numbers list that
    /// is not exactly 15 distinct values in `[1, 25]`.
    pub fn new(contest: ContestNumber, numbers: Vec<u8>) -> Result<Self> {
        if contest.as_u32() == 0 {
            return Err(LotoError::InvalidDraw {
                reason: "contest number must be positive".to_string(),
            });
        }
        check_numbers(&numbers).map_err(|reason| LotoError::InvalidDraw { reason })?;

        let mut fixed = [0u8; DRAW_SIZE];
        fixed.copy_from_slice(&numbers);
        Ok(Self {
            contest,
            numbers: fixed,
        })
    }

    pub fn contest(&self) -> ContestNumber {
        self.contest
    }

    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.numbers
    }

    /// Render the draw in the store's line format:
    /// `contest_number,n1,n2,...,n15`.
    pub fn to_line(&self) -> String {
        let mut line = self.contest.to_string();
        for n in &self.numbers {
            line.push(',');
            line.push_str(&n.to_string());
        }
        line
    }

    /// Parse a store line back into a draw. The line must have exactly 16
    /// comma-separated fields and satisfy the draw invariant.
    pub fn from_line(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.trim().split(',').collect();
        if parts.len() != DRAW_SIZE + 1 {
            return Err(LotoError::InvalidDraw {
                reason: format!("expected {} fields, got {}", DRAW_SIZE + 1, parts.len()),
            });
        }
        let contest: ContestNumber = parts[0].parse()?;
        let numbers = parts[1..]
            .iter()
            .map(|p| p.trim().parse::<u8>())
            .collect::<std::result::Result<Vec<u8>, _>>()
            .map_err(|e| LotoError::InvalidDraw {
                reason: format!("bad number field: {e}"),
            })?;
        Self::new(contest, numbers)
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}
