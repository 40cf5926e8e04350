//! Ticket vendor API client
//!
//! Reduces the vendor's event payload to a single availability count.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

/// Errors that can occur while fetching availability data
#[derive(Debug, Error)]
pub enum FetchError {
    /// Error during network communication (connect, timeout, body read)
    #[error("network error: {0}")]
    Transport(String),
    /// The vendor API answered with a non-200 status code
    #[error("unexpected status code: {0}")]
    BadStatus(u16),
    /// The response body was not the expected JSON shape
    #[error("malformed response body: {0}")]
    Parse(String),
}

/// Source of ticket-availability counts.
///
/// Implemented by the HTTP client in production and by scripted stubs in
/// tests.
#[async_trait]
pub trait TicketsProber: Send + Sync {
    /// Fetch the current number of purchasable tickets.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the request fails, the vendor answers with
    /// a non-200 status, or the body cannot be parsed.
    async fn check_availability(&self) -> Result<u64, FetchError>;
}

/// Subset of the vendor event payload the bot cares about.
#[derive(Debug, Deserialize)]
struct EventResponse {
    /// Number of purchasable tickets; vendors omit the field when sold out
    #[serde(default)]
    available_tickets_count: u64,
}

/// HTTP client for the ticketing vendor API.
pub struct TicketsApi {
    client: reqwest::Client,
    url: String,
}

impl TicketsApi {
    /// Create a new client probing the given endpoint.
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl TicketsProber for TicketsApi {
    async fn check_availability(&self) -> Result<u64, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!("Error fetching API data: {e}");
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("API error: status code {status}");
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let text = response.text().await.map_err(|e| {
            error!("Error reading API response body: {e}");
            FetchError::Transport(e.to_string())
        })?;

        let body: EventResponse = serde_json::from_str(&text).map_err(|e| {
            error!("Error parsing API data: {e}");
            FetchError::Parse(e.to_string())
        })?;

        let available = body.available_tickets_count;
        info!(
            "API checked at {} - Tickets available: {available}",
            Utc::now()
        );
        Ok(available)
    }
}
