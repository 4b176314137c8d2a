//! Lotofácil Draw Cache CLI Library
//!
//! A Rust library for maintaining a complete local history of Lotofácil
//! lottery draws, backed by the public Caixa results API and a flat-file
//! store.
//!
//! ## Features
//!
//! - **Draw Retrieval**: Fetch individual contests or the latest draw from
//!   the Caixa API with a typed deserialization boundary
//! - **Flat-File Store**: One draw per line, `contest,n1,...,n15`, rewritten
//!   sorted by contest number
//! - **Gap-Filling Sync**: Detect missing contest numbers in `1..=latest`
//!   and backfill them through a bounded pool of concurrent requests
//! - **Ticket Tools**: Random ticket generation with distribution ratings,
//!   hit checking against stored draws, and store-wide rating statistics
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loto_cache::{caixa::CaixaClient, store::DrawStore, sync::Synchronizer};
//!
//! # async fn example() -> loto_cache::Result<()> {
//! let store = DrawStore::new("draws.txt");
//! let client = CaixaClient::new()?;
//! let syncer = Synchronizer::new(client, store);
//!
//! let report = syncer
//!     .synchronize(&mut |msg| println!("{msg}"), &mut |_pct, _contest| {})
//!     .await?;
//! println!("still missing: {:?}", report.still_missing);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the store file location to avoid passing it in every command:
//! ```bash
//! export LOTO_CACHE_FILE=~/.local/share/loto-cache/draws.txt
//! ```

pub mod caixa;
pub mod cli;
pub mod commands;
pub mod error;
pub mod stats;
pub mod store;
pub mod sync;
pub mod ticket;

// Re-export commonly used types
pub use cli::types::ContestNumber;
pub use error::{LotoError, Result};
pub use store::{Draw, DrawStore, MalformedLinePolicy};
pub use ticket::Ticket;

pub const STORE_FILE_ENV_VAR: &str = "LOTO_CACHE_FILE";
