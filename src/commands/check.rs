//! Check command: count hits of tickets against a stored draw.

use crate::cli::types::ContestNumber;
use crate::cli::StoreArgs;
use crate::commands::open_store;
use crate::error::{LotoError, Result};
use crate::ticket::Ticket;

pub fn handle_check(
    store: StoreArgs,
    tickets: Vec<String>,
    contest: Option<ContestNumber>,
) -> Result<()> {
    if tickets.is_empty() {
        return Err(LotoError::InvalidTicket {
            reason: "no tickets given; pass at least one -t \"n1 n2 ... n15\"".to_string(),
        });
    }

    let store = open_store(store)?;
    let contest = match contest.or_else(|| store.latest()) {
        Some(contest) => contest,
        None => {
            return Err(LotoError::Store {
                message: "store is empty; run `loto sync` first".to_string(),
            })
        }
    };
    let draw = store
        .get(contest)?
        .ok_or(LotoError::DrawNotFound {
            contest: contest.as_u32(),
        })?;

    println!("Checking against contest {contest}: {}", Ticket::from_draw(&draw));
    for (index, raw) in tickets.iter().enumerate() {
        let ticket = Ticket::parse(raw)?;
        println!(
            "Ticket {}: {ticket} -> {} hits",
            index + 1,
            ticket.hits(&draw)
        );
    }

    Ok(())
}
