//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use loto_cache::{
    cli::{Commands, Loto},
    commands::{
        check::handle_check, generate::handle_generate, stats::handle_stats,
        status::handle_status, sync::handle_sync,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Loto::parse();

    match app.command {
        Commands::Sync {
            store,
            concurrency,
            verbose,
        } => handle_sync(store, concurrency, verbose).await?,

        Commands::Status { store, verbose } => handle_status(store, verbose)?,

        Commands::Generate {
            games,
            gap_rating,
            std_rating,
        } => handle_generate(games, gap_rating, std_rating)?,

        Commands::Check {
            store,
            tickets,
            contest,
        } => handle_check(store, tickets, contest)?,

        Commands::Stats { store, from, to } => handle_stats(store, from, to)?,
    }

    Ok(())
}
