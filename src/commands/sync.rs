//! Sync command: backfill missing contests into the local store.

use crate::caixa::CaixaClient;
use crate::cli::StoreArgs;
use crate::commands::open_store;
use crate::sync::{SyncOptions, SyncState, Synchronizer};
use crate::Result;

pub async fn handle_sync(store: StoreArgs, concurrency: usize, verbose: bool) -> Result<()> {
    let store = open_store(store)?;
    if verbose {
        println!("Store file: {}", store.path().display());
    }

    let client = CaixaClient::new()?;
    let syncer = Synchronizer::new(client, store);
    let options = SyncOptions { concurrency };

    let mut on_status = |message: &str| println!("{message}");
    let mut on_progress = |percent: f64, contest| {
        if verbose {
            println!("  [{percent:5.1}%] contest {contest} fetched");
        }
    };

    let report = syncer
        .synchronize_with(&options, &mut on_status, &mut on_progress)
        .await?;

    match report.state {
        SyncState::Done => println!("✓ Sync complete ({} draws stored).", syncer.total()),
        SyncState::PartialFailure => {
            eprintln!("⚠ Sync finished with gaps; run again later to fill them in.")
        }
    }

    Ok(())
}
