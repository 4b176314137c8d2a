//! HTTP client for the Caixa lottery results API.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};

use super::types::DrawPayload;
use super::{FetchDraws, LatestDraw};
use crate::cli::types::ContestNumber;
use crate::store::models::Draw;
use crate::Result;

/// Base path for the Lotofácil endpoint of the Caixa lottery API.
/// `GET {base}/{contest}` returns one contest; `GET {base}/` returns the
/// most recent one.
pub const LOTOFACIL_BASE_URL: &str =
    "https://servicebus2.caixa.gov.br/portaldeloterias/api/lotofacil";

/// The API stalls rather than erroring under load; keep requests short-lived
/// so a dead fetch frees its pool slot quickly.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// The API rejects clients without a browser user-agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}

/// Client for fetching Lotofácil draws from the Caixa results API.
pub struct CaixaClient {
    client: Client,
    base_url: String,
}

impl CaixaClient {
    /// Build a client against the production Caixa endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(LOTOFACIL_BASE_URL)
    }

    /// Build a client against an alternative endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(default_headers())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// GET `{base_url}/{segment}` and deserialize the contest payload.
    /// An empty segment requests the latest contest.
    async fn get_payload(&self, segment: &str) -> Result<DrawPayload> {
        let url = if segment.is_empty() {
            format!("{}/", self.base_url)
        } else {
            format!("{}/{}", self.base_url, segment)
        };

        let payload = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<DrawPayload>()
            .await?;

        Ok(payload)
    }
}

impl FetchDraws for CaixaClient {
    async fn latest(&self) -> Result<LatestDraw> {
        let payload = self.get_payload("").await?;
        let draw_date = payload.data_apuracao.clone();
        Ok(LatestDraw {
            draw: payload.into_draw()?,
            draw_date,
        })
    }

    async fn fetch(&self, contest: ContestNumber) -> Result<Draw> {
        // Contest 0 asks the API for the most recent draw, like an empty
        // path segment.
        let segment = if contest.as_u32() == 0 {
            String::new()
        } else {
            contest.to_string()
        };
        let payload = self.get_payload(&segment).await?;
        payload.into_draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_against_default_endpoint() {
        let client = CaixaClient::new().unwrap();
        assert_eq!(client.base_url, LOTOFACIL_BASE_URL);
    }

    #[test]
    fn test_client_accepts_custom_base_url() {
        let client = CaixaClient::with_base_url("http://localhost:8080/loto").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/loto");
    }

    #[test]
    fn test_default_headers_present() {
        let headers = default_headers();
        assert_eq!(headers[ACCEPT], "application/json");
        assert!(headers[USER_AGENT].to_str().unwrap().contains("Mozilla"));
    }
}
