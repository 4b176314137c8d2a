//! Rating statistics over stored draws.
//!
//! Mirrors the ticket ratings onto historical draws: for a contest range,
//! how the average-gap and standard-deviation ratings distribute, plus the
//! joint (gap, std) occurrence counts.

use std::collections::BTreeMap;

use crate::store::Draw;
use crate::ticket::Ticket;

/// Summary of one rating dimension over a set of draws.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub mean: f64,
    pub min: u8,
    pub max: u8,
    /// Occurrence count per rating value, ascending.
    pub counts: BTreeMap<u8, usize>,
}

impl RatingSummary {
    fn from_values(values: &[u8]) -> Option<Self> {
        let first = *values.first()?;
        let mut min = first;
        let mut max = first;
        let mut sum = 0usize;
        let mut counts = BTreeMap::new();
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v as usize;
            *counts.entry(v).or_insert(0) += 1;
        }
        Some(Self {
            mean: sum as f64 / values.len() as f64,
            min,
            max,
            counts,
        })
    }
}

/// Rating statistics over a set of draws. `analyzed == 0` (empty input)
/// leaves both summaries `None`.
#[derive(Debug, Clone, Default)]
pub struct DrawStats {
    pub analyzed: usize,
    pub gap: Option<RatingSummary>,
    pub std: Option<RatingSummary>,
    /// Occurrence count per (gap_rating, std_rating) pair.
    pub combos: BTreeMap<(u8, u8), usize>,
}

impl DrawStats {
    pub fn compute<'a>(draws: impl IntoIterator<Item = &'a Draw>) -> Self {
        let mut gap_ratings = Vec::new();
        let mut std_ratings = Vec::new();
        let mut combos = BTreeMap::new();

        for draw in draws {
            let ticket = Ticket::from_draw(draw);
            let gap = ticket.gap_rating();
            let std = ticket.std_rating();
            gap_ratings.push(gap);
            std_ratings.push(std);
            *combos.entry((gap, std)).or_insert(0) += 1;
        }

        Self {
            analyzed: gap_ratings.len(),
            gap: RatingSummary::from_values(&gap_ratings),
            std: RatingSummary::from_values(&std_ratings),
            combos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::ContestNumber;

    fn draw(contest: u32, numbers: Vec<u8>) -> Draw {
        Draw::new(ContestNumber::new(contest), numbers).unwrap()
    }

    #[test]
    fn test_empty_input_yields_zero_analyzed() {
        let stats = DrawStats::compute([]);
        assert_eq!(stats.analyzed, 0);
        assert!(stats.gap.is_none());
        assert!(stats.std.is_none());
        assert!(stats.combos.is_empty());
    }

    #[test]
    fn test_single_draw_stats() {
        let d = draw(1, (1..=15).collect());
        let stats = DrawStats::compute([&d]);

        assert_eq!(stats.analyzed, 1);
        let gap = stats.gap.unwrap();
        assert_eq!(gap.mean, 1.0);
        assert_eq!(gap.min, 1);
        assert_eq!(gap.max, 1);
        assert_eq!(gap.counts[&1], 1);

        // 1..=15 has std dev ~4.32 -> rating 2
        let std = stats.std.unwrap();
        assert_eq!(std.min, 2);
        assert_eq!(stats.combos[&(1, 2)], 1);
    }

    #[test]
    fn test_mixed_draws_counted_per_rating() {
        let tight = draw(1, (1..=15).collect());
        let tight2 = draw(2, (11..=25).collect());
        let spread = draw(
            3,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 18, 20, 21, 22, 23, 24, 25],
        );
        let stats = DrawStats::compute([&tight, &tight2, &spread]);

        assert_eq!(stats.analyzed, 3);
        let gap = stats.gap.unwrap();
        assert_eq!(gap.counts[&1], 2); // both consecutive runs rate 1
        assert_eq!(gap.min, 1);

        let std = stats.std.unwrap();
        assert_eq!(std.counts[&2], 2);
        assert_eq!(std.counts[&5], 1);
        assert_eq!(std.max, 5);

        assert_eq!(stats.combos.values().sum::<usize>(), 3);
    }
}
