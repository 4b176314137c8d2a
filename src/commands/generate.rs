//! Generate command: random tickets, optionally rating-constrained.

use crate::error::{LotoError, Result};
use crate::ticket::{generate_constrained, Ticket};

fn validate_rating(name: &str, rating: Option<u8>) -> Result<()> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(LotoError::InvalidTicket {
            reason: format!("{name} rating must be between 1 and 5, got {r}"),
        }),
        _ => Ok(()),
    }
}

pub fn handle_generate(games: usize, gap_rating: Option<u8>, std_rating: Option<u8>) -> Result<()> {
    validate_rating("gap", gap_rating)?;
    validate_rating("std", std_rating)?;

    let mut rng = rand::rng();
    for index in 1..=games {
        match generate_constrained(&mut rng, gap_rating, std_rating) {
            Some(ticket) => print_ticket(index, &ticket),
            None => {
                eprintln!(
                    "⚠ Ticket {index}: no ticket matched gap={gap_rating:?} std={std_rating:?}; \
                     try looser constraints."
                );
            }
        }
    }

    Ok(())
}

fn print_ticket(index: usize, ticket: &Ticket) {
    println!(
        "Ticket {index}: {ticket}  (gap {}, std {})",
        ticket.gap_rating(),
        ticket.std_rating()
    );
}
