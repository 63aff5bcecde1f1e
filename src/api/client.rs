//! HTTP client for the dashboard backend.
//!
//! The backend is an external collaborator: we issue one GET for the product
//! snapshot and hand the raw JSON to the parser.

use crate::utils::config::{DEFAULT_API_TIMEOUT, PRODUCTS_ENDPOINT};
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Client for fetching the product snapshot
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, DEFAULT_API_TIMEOUT)
    }

    /// Create a client with custom timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self { client, base_url })
    }

    /// Full URL of the products endpoint
    pub fn products_url(&self) -> String {
        products_url(&self.base_url)
    }

    /// Fetch the raw product list
    pub fn fetch_products(&self) -> Result<serde_json::Value, FetchError> {
        let url = self.products_url();

        info!("Fetching product snapshot from: {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Unavailable {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body: serde_json::Value = response.json().map_err(FetchError::RequestFailed)?;

        debug!("Received snapshot body ({} status)", status);

        Ok(body)
    }
}

/// Join the base URL and the products endpoint path
fn products_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PRODUCTS_ENDPOINT)
}

fn validate_base_url(base_url: &str) -> Result<(), FetchError> {
    if base_url.is_empty() {
        return Err(FetchError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(FetchError::InvalidUrl(format!(
            "{} (must start with http:// or https://)",
            base_url
        )));
    }

    Ok(())
}
