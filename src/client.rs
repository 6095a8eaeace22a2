#![allow(missing_docs)]

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::constants::{
    DEFAULT_JANICE_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS, JANICE_API_KEY_HEADER,
};
use crate::error::{JaniceError, Result};
use crate::types::{AppraisalResponse, MarketEntry, NormalizedAppraisal, PricePercentage};

/// HTTP client for the Janice appraisal API.
///
/// Holds the base URL and the static API key for the process lifetime; every
/// response passes the same transport-shape guards before decoding.
#[derive(Debug)]
pub struct JaniceClient {
    http: Client,
    base_url: String,
}

impl JaniceClient {
    pub fn new(base_url: Option<&str>, api_key: &str) -> Result<Self> {
        let base_url = base_url
            .unwrap_or(DEFAULT_JANICE_API_URL)
            .trim_end_matches('/')
            .to_string();

        if api_key.trim().is_empty() {
            return Err(JaniceError::config_error("Janice API key is empty"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key_value = HeaderValue::from_str(api_key)
            .map_err(|e| JaniceError::config_error(format!("Invalid API key: {e}")))?;
        headers.insert(JANICE_API_KEY_HEADER, key_value);

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                JaniceError::network_error(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Appraisal Methods
    // =========================================================================

    /// Price a canonical payload at the given market and percentage.
    ///
    /// Always requests `persist` and `compactize` so the service hands back a
    /// retrievable appraisal code.
    ///
    /// # Errors
    ///
    /// `Transport` on non-2xx, `EmptyResponse`/`UnexpectedContent` on
    /// malformed bodies, `NoItems` when nothing in the payload priced.
    pub async fn appraise(
        &self,
        payload: &str,
        percentage: PricePercentage,
        market_id: u32,
    ) -> Result<NormalizedAppraisal> {
        let mut url = Url::parse(&format!("{}/appraisal", self.base_url))
            .map_err(|e| JaniceError::config_error(format!("Invalid base URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("market", &market_id.to_string())
            .append_pair("persist", "true")
            .append_pair("compactize", "true")
            .append_pair("pricePercentage", percentage.query_value());

        tracing::debug!(%url, %percentage, "requesting appraisal");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| {
                JaniceError::network_error(format!("Failed to reach appraisal service: {e}"))
            })?;

        let body = Self::checked_body(response).await?;
        Self::decode(&body)?.normalize()
    }

    /// Issue the full and 90% queries for one payload concurrently.
    ///
    /// Both outcomes are observed: exactly one failure is a `PartialPair`
    /// error, never a result assembled from a value that was not fetched.
    pub async fn appraise_pair(
        &self,
        payload: &str,
        market_id: u32,
    ) -> Result<(NormalizedAppraisal, NormalizedAppraisal)> {
        let (full, ninety) = futures::join!(
            self.appraise(payload, PricePercentage::Full, market_id),
            self.appraise(payload, PricePercentage::Ninety, market_id),
        );

        match (full, ninety) {
            (Ok(full), Ok(ninety)) => Ok((full, ninety)),
            (Ok(_), Err(e)) => Err(JaniceError::partial_pair(format!(
                "90% appraisal failed after the full one succeeded: {e}"
            ))),
            (Err(e), Ok(_)) => Err(JaniceError::partial_pair(format!(
                "full appraisal failed while the 90% one succeeded: {e}"
            ))),
            (Err(e), Err(_)) => Err(e),
        }
    }

    /// Recall a persisted appraisal by its 6-character code.
    pub async fn appraise_by_code(&self, code: &str) -> Result<NormalizedAppraisal> {
        let url = format!("{}/appraisal/{code}", self.base_url);

        tracing::debug!(%url, "recalling appraisal");

        let response = self.http.get(&url).send().await.map_err(|e| {
            JaniceError::network_error(format!("Failed to reach appraisal service: {e}"))
        })?;

        let body = Self::checked_body(response).await?;
        Self::decode(&body)?.normalize()
    }

    // =========================================================================
    // Market Methods
    // =========================================================================

    /// Fetch the live market list.
    pub async fn get_markets(&self) -> Result<Vec<MarketEntry>> {
        let url = format!("{}/markets", self.base_url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            JaniceError::network_error(format!("Failed to fetch market list: {e}"))
        })?;

        let body = Self::checked_body(response).await?;
        serde_json::from_str(&body).map_err(|e| {
            JaniceError::api_error(format!("Failed to parse market list response: {e}"))
        })
    }

    // =========================================================================
    // Transport guards
    // =========================================================================

    /// Read the body, rejecting non-2xx statuses, empty bodies and markup
    /// where JSON was expected (a misconfigured endpoint or key returns an
    /// HTML error page).
    async fn checked_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            JaniceError::network_error(format!("Failed to read response body: {e}"))
        })?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "appraisal service error");
            return Err(JaniceError::transport(status.as_u16(), body));
        }

        if body.trim().is_empty() {
            return Err(JaniceError::empty_response("API returned an empty response"));
        }

        if body.trim_start().starts_with('<') {
            return Err(JaniceError::unexpected_content(
                "API returned markup instead of JSON; check the API key and endpoint configuration",
            ));
        }

        Ok(body)
    }

    fn decode(body: &str) -> Result<AppraisalResponse> {
        serde_json::from_str(body).map_err(|e| {
            JaniceError::api_error(format!("Failed to parse appraisal response: {e}"))
        })
    }
}
