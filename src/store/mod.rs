//! Storage layer for the Lotofácil Draw Cache CLI
//!
//! This module provides the local flat-file draw store, organized into:
//! - `models`: Draw data structures and validation
//! - `flat_file`: Line-per-draw file persistence

pub mod flat_file;
pub mod models;


// Re-export the main types for easy access
pub use flat_file::{DrawStore, MalformedLinePolicy};
pub use models::{Draw, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
