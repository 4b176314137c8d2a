//! Error types for the Lotofácil Draw Cache CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LotoError>;

#[derive(Error, Debug)]
pub enum LotoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse contest number: {0}")]
    InvalidContest(#[from] std::num::ParseIntError),

    #[error("Invalid draw: {reason}")]
    InvalidDraw { reason: String },

    #[error("Malformed store line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Draws API returned no usable data")]
    NoData,

    #[error("No draw stored for contest {contest}")]
    DrawNotFound { contest: u32 },

    #[error("Invalid ticket: {reason}")]
    InvalidTicket { reason: String },
}
