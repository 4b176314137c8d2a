//! Command implementations for the Lotofácil Draw Cache CLI

pub mod check;
pub mod generate;
pub mod stats;
pub mod status;
pub mod sync;

use std::path::PathBuf;

use crate::cli::StoreArgs;
use crate::error::{LotoError, Result};
use crate::store::{DrawStore, MalformedLinePolicy};
use crate::STORE_FILE_ENV_VAR;

/// Resolve the store file path: explicit flag, then `LOTO_CACHE_FILE`, then
/// the platform data directory.
pub fn resolve_store_path(file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = file {
        return Ok(path);
    }
    if let Ok(path) = std::env::var(STORE_FILE_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let data_dir = dirs::data_dir().ok_or_else(|| LotoError::Store {
        message: "could not determine data directory".to_string(),
    })?;
    Ok(data_dir.join("loto-cache").join("draws.txt"))
}

/// Build a `DrawStore` from the shared CLI store arguments.
pub fn open_store(args: StoreArgs) -> Result<DrawStore> {
    let path = resolve_store_path(args.file)?;
    let policy = if args.strict {
        MalformedLinePolicy::Error
    } else {
        MalformedLinePolicy::Skip
    };
    Ok(DrawStore::with_policy(path, policy))
}
