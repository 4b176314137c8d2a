//! Caixa lottery API integration
//!
//! - `http`: reqwest client against the Lotofácil results endpoint
//! - `types`: typed deserialization of the contest payload
//!
//! The [`FetchDraws`] trait is the seam between the synchronizer and the
//! network: production code uses [`CaixaClient`], tests substitute an
//! in-memory fetcher.

pub mod http;
pub mod types;

use crate::cli::types::ContestNumber;
use crate::store::models::Draw;
use crate::Result;

pub use http::{CaixaClient, LOTOFACIL_BASE_URL};
pub use types::DrawPayload;

/// The most recent contest, plus the draw date the API reports for it.
/// The date is display-only and never persisted.
#[derive(Debug, Clone)]
pub struct LatestDraw {
    pub draw: Draw,
    pub draw_date: Option<String>,
}

/// Source of draw data for the synchronizer.
///
/// Every failure mode (network, timeout, malformed body, wrong number
/// count) surfaces as a single `Err`; callers treat a failed contest as
/// "still missing, try again on a later run".
#[allow(async_fn_in_trait)]
pub trait FetchDraws {
    /// Fetch the most recent contest.
    async fn latest(&self) -> Result<LatestDraw>;

    /// Fetch one specific contest.
    async fn fetch(&self, contest: ContestNumber) -> Result<Draw>;
}
