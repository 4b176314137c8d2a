//! Stats command: rating distributions over stored draws.

use crate::cli::types::ContestNumber;
use crate::cli::StoreArgs;
use crate::commands::open_store;
use crate::stats::{DrawStats, RatingSummary};
use crate::Result;

pub fn handle_stats(
    store: StoreArgs,
    from: Option<ContestNumber>,
    to: Option<ContestNumber>,
) -> Result<()> {
    let store = open_store(store)?;
    let draws = store.all_draws()?;

    let in_range: Vec<_> = draws
        .iter()
        .filter(|draw| {
            from.is_none_or(|lo| draw.contest() >= lo) && to.is_none_or(|hi| draw.contest() <= hi)
        })
        .collect();

    let stats = DrawStats::compute(in_range.iter().copied());
    println!("Draws analyzed: {}", stats.analyzed);
    if stats.analyzed == 0 {
        return Ok(());
    }

    if let Some(gap) = &stats.gap {
        print_summary("Average-gap rating", gap);
    }
    if let Some(std) = &stats.std {
        print_summary("Std-dev rating", std);
    }

    println!("\nGap+Std combinations:");
    let mut combos: Vec<_> = stats.combos.iter().collect();
    combos.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for ((gap, std), count) in combos {
        println!("  {{ {gap}, {std} }}: {count} draws");
    }

    Ok(())
}

fn print_summary(name: &str, summary: &RatingSummary) {
    println!(
        "\n{name}: mean {:.2} (min {}, max {})",
        summary.mean, summary.min, summary.max
    );
    for (rating, count) in &summary.counts {
        println!("  rating {rating}: {count} draws");
    }
}
