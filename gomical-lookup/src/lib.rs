//! Read-only client for the garbage schedule lookup API.
//!
//! Every operation performs one GET against the configured base URL and
//! decodes the shared [`ApiResponse`] envelope. Outcomes are explicit
//! per-call values; the client itself holds no mutable state, so
//! concurrent calls on one instance do not interfere.

use gomical_core::{ApiResponse, ClientError, GarbageCategory, SearchResult, Weekday};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Default base URL of the lookup API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Body of the `/health` endpoint.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Debug, Clone)]
/// The today listing together with the server-resolved weekday label.
///
/// The server, not this client, decides what "today" is; the echoed
/// label is surfaced verbatim for display.
pub struct TodaySchedule {
    /// Weekday label echoed by the server, empty when absent.
    pub today: String,
    /// Categories collected today.
    pub categories: Vec<GarbageCategory>,
}

/// Client for the read-only schedule endpoints.
pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    /// Create a client against an explicit base URL (no trailing slash).
    #[must_use]
    pub fn new<S: Into<String>>(client: Client, base_url: S) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client against [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_default_base_url(client: Client) -> Self {
        Self::new(client, DEFAULT_BASE_URL)
    }

    /// List every category.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails, or
    /// the server reports failure.
    pub async fn categories(&self) -> Result<Vec<GarbageCategory>, ClientError> {
        let envelope: ApiResponse<Vec<GarbageCategory>> =
            self.get_envelope("/categories", &[]).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// List the categories collected on the given weekday.
    ///
    /// Filtering happens server-side via the `day` query parameter.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails, or
    /// the server reports failure.
    pub async fn categories_for_day(
        &self,
        day: Weekday,
    ) -> Result<Vec<GarbageCategory>, ClientError> {
        let envelope: ApiResponse<Vec<GarbageCategory>> = self
            .get_envelope("/categories", &[("day", day.name_en())])
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// List the categories collected today, with the server-resolved label.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails, or
    /// the server reports failure.
    pub async fn today_categories(&self) -> Result<TodaySchedule, ClientError> {
        let envelope: ApiResponse<Vec<GarbageCategory>> =
            self.get_envelope("/categories/today", &[]).await?;
        Ok(TodaySchedule {
            today: envelope.today.unwrap_or_default(),
            categories: envelope.data.unwrap_or_default(),
        })
    }

    /// Reverse lookup by item name.
    ///
    /// A blank query short-circuits to an empty result without touching
    /// the network. A response whose `found` flag is not `true` is
    /// treated as "no matches" even when `data` is present.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails, or
    /// the server reports failure.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let envelope: ApiResponse<Vec<SearchResult>> =
            self.get_envelope("/search", &[("q", query)]).await?;

        if envelope.found != Some(true) {
            return Ok(Vec::new());
        }

        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetch a single category by id, `None` when the payload is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails, or
    /// the server reports failure.
    pub async fn category(&self, id: i64) -> Result<Option<GarbageCategory>, ClientError> {
        let envelope: ApiResponse<GarbageCategory> = self
            .get_envelope(&format!("/categories/{id}"), &[])
            .await?;
        Ok(envelope.data)
    }

    /// Probe service health.
    ///
    /// True only when the decoded status is exactly `"healthy"`; any
    /// transport or decode failure is false, never an error.
    pub async fn health(&self) -> bool {
        let request = self.client.get(format!("{}/health", self.base_url));
        let Ok(response) = request.send().await else {
            return false;
        };
        match response.json::<HealthResponse>().await {
            Ok(body) => body.status == "healthy",
            Err(_) => false,
        }
    }

    // Shared GET-and-unwrap-envelope step. The original service wraps
    // logical failures in a `success: false` envelope (sometimes with a
    // non-2xx status), so the envelope is decoded without a status
    // check and `success` decides.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>, ClientError> {
        let mut request = self.client.get(format!("{}{path}", self.base_url));
        if !query.is_empty() {
            request = request.query(query);
        }

        let envelope: ApiResponse<T> = request.send().await?.json().await?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| String::from("API request failed"));
            return Err(ClientError::Api(message));
        }

        Ok(envelope)
    }
}
