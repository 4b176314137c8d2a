//! Status command: stored draw count and latest stored contest.

use crate::cli::StoreArgs;
use crate::commands::open_store;
use crate::Result;

pub fn handle_status(store: StoreArgs, verbose: bool) -> Result<()> {
    let store = open_store(store)?;

    if verbose {
        println!("Store file: {}", store.path().display());
    }

    println!("Total draws stored: {}", store.total());
    match store.latest() {
        Some(contest) => println!("Latest stored contest: {contest}"),
        None => println!("Latest stored contest: none"),
    }

    Ok(())
}
