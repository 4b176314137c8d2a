//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::ContestNumber;

/// Store location and parsing options shared between commands
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Store file path (or set `LOTO_CACHE_FILE` env var).
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// Treat malformed store lines as errors instead of silently skipping them.
    #[clap(long)]
    pub strict: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "loto", about = "Lotofácil draw cache CLI")]
pub struct Loto {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download missing contests and rewrite the local store.
    ///
    /// Asks the Caixa API for the latest contest, diffs `1..=latest` against
    /// the store, and backfills the gaps with bounded concurrency.
    Sync {
        #[clap(flatten)]
        store: StoreArgs,

        /// Number of concurrent requests against the draws API.
        #[clap(long, short, default_value_t = 4)]
        concurrency: usize,

        /// Print each contest as it is fetched.
        #[clap(long)]
        verbose: bool,
    },

    /// Show how many draws are stored and the latest stored contest.
    Status {
        #[clap(flatten)]
        store: StoreArgs,

        /// Also print the store file path.
        #[clap(long)]
        verbose: bool,
    },

    /// Generate random tickets, optionally constrained by distribution ratings.
    Generate {
        /// How many tickets to generate.
        #[clap(long, short, default_value_t = 1)]
        games: usize,

        /// Desired average-gap rating (1-5); tickets are resampled until it matches.
        #[clap(long)]
        gap_rating: Option<u8>,

        /// Desired standard-deviation rating (1-5); tickets are resampled until it matches.
        #[clap(long)]
        std_rating: Option<u8>,
    },

    /// Count hits of one or more tickets against a stored draw.
    Check {
        #[clap(flatten)]
        store: StoreArgs,

        /// Ticket numbers, space or comma separated - repeatable:
        /// `-t "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15"`.
        #[clap(long = "ticket", short)]
        tickets: Vec<String>,

        /// Contest to check against (default: latest stored).
        #[clap(long, short)]
        contest: Option<ContestNumber>,
    },

    /// Distribution-rating statistics over stored draws.
    Stats {
        #[clap(flatten)]
        store: StoreArgs,

        /// First contest of the range (default: first stored).
        #[clap(long)]
        from: Option<ContestNumber>,

        /// Last contest of the range (default: last stored).
        #[clap(long)]
        to: Option<ContestNumber>,
    },
}
