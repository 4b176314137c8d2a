//! Playable tickets: random generation, distribution ratings, hit checking.
//!
//! A ticket is 15 distinct numbers from `[1, 25]`, kept sorted. Two coarse
//! 1-5 ratings describe how the numbers spread over the range: the mean gap
//! between consecutive numbers and the population standard deviation. They
//! are display heuristics, not predictors.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{LotoError, Result};
use crate::store::models::{check_numbers, Draw, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};

/// Cap on rejection-sampling rounds when generating a constrained ticket.
pub const MAX_GENERATION_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    numbers: [u8; DRAW_SIZE],
}

impl Ticket {
    /// Sample 15 distinct numbers uniformly from the pool.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut pool: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();
        pool.shuffle(rng);

        let mut numbers = [0u8; DRAW_SIZE];
        numbers.copy_from_slice(&pool[..DRAW_SIZE]);
        numbers.sort_unstable();
        Self { numbers }
    }

    /// Build a ticket from user-picked numbers; validates and sorts them.
    pub fn from_numbers(mut numbers: Vec<u8>) -> Result<Self> {
        check_numbers(&numbers).map_err(|reason| LotoError::InvalidTicket { reason })?;
        numbers.sort_unstable();

        let mut fixed = [0u8; DRAW_SIZE];
        fixed.copy_from_slice(&numbers);
        Ok(Self { numbers: fixed })
    }

    /// Treat a stored draw as a ticket (sorted copy of its numbers).
    pub fn from_draw(draw: &Draw) -> Self {
        let mut numbers = *draw.numbers();
        numbers.sort_unstable();
        Self { numbers }
    }

    /// Parse a space- or comma-separated list of numbers.
    pub fn parse(input: &str) -> Result<Self> {
        let numbers = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u8>())
            .collect::<std::result::Result<Vec<u8>, _>>()
            .map_err(|e| LotoError::InvalidTicket {
                reason: format!("bad number: {e}"),
            })?;
        Self::from_numbers(numbers)
    }

    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.numbers
    }

    /// Mean gap between consecutive numbers.
    pub fn average_gap(&self) -> f64 {
        let gaps: u32 = self
            .numbers
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) as u32)
            .sum();
        gaps as f64 / (DRAW_SIZE - 1) as f64
    }

    /// Average-gap rating on a 1-5 scale; 1 is tightly clustered, 5 is
    /// spread out.
    pub fn gap_rating(&self) -> u8 {
        match self.average_gap() {
            gap if gap < 1.2 => 1,
            gap if gap < 1.4 => 2,
            gap if gap < 1.6 => 3,
            gap if gap < 1.8 => 4,
            _ => 5,
        }
    }

    /// Population standard deviation of the numbers.
    pub fn std_deviation(&self) -> f64 {
        let mean = self.numbers.iter().map(|&n| n as f64).sum::<f64>() / DRAW_SIZE as f64;
        let variance = self
            .numbers
            .iter()
            .map(|&n| {
                let diff = n as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / DRAW_SIZE as f64;
        variance.sqrt()
    }

    /// Standard-deviation rating on the same 1-5 scale.
    pub fn std_rating(&self) -> u8 {
        match self.std_deviation() {
            std if std < 4.0 => 1,
            std if std < 5.0 => 2,
            std if std < 6.0 => 3,
            std if std < 7.0 => 4,
            _ => 5,
        }
    }

    /// How many of this ticket's numbers appear in `draw`.
    pub fn hits(&self, draw: &Draw) -> usize {
        // Both sides are distinct, so membership count equals intersection
        // size.
        self.numbers
            .iter()
            .filter(|n| draw.numbers().contains(n))
            .count()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.numbers {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{n:02}")?;
            first = false;
        }
        Ok(())
    }
}

/// Rejection-sample random tickets until the requested ratings match.
///
/// `None` constraints always match. Returns `None` when no ticket satisfies
/// the constraints within [`MAX_GENERATION_ATTEMPTS`] rounds.
pub fn generate_constrained(
    rng: &mut impl Rng,
    gap_rating: Option<u8>,
    std_rating: Option<u8>,
) -> Option<Ticket> {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let ticket = Ticket::random(rng);
        let gap_ok = gap_rating.is_none_or(|want| ticket.gap_rating() == want);
        let std_ok = std_rating.is_none_or(|want| ticket.std_rating() == want);
        if gap_ok && std_ok {
            return Some(ticket);
        }
    }
    None
}
