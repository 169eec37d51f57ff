use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::{AddressPayload, BalanceResponse};

pub const NIMBLE_API_BASE: &str = "https://mainnet.nimble.technology";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum NimbleClientError {
    /// Transport-level failure: timeout, connection, DNS, body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the two Nimble network endpoints used to classify a wallet.
#[derive(Debug, Clone)]
pub struct NimbleClient {
    http: Client,
    base_url: String,
    particle_timeout: Duration,
    balance_timeout: Duration,
}

impl NimbleClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, NIMBLE_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            particle_timeout: DEFAULT_TIMEOUT,
            balance_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeouts(mut self, particle: Duration, balance: Duration) -> Self {
        self.particle_timeout = particle;
        self.balance_timeout = balance;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the network to register a particle for `address`.
    ///
    /// Returns `Ok(true)` on HTTP 200 and `Ok(false)` on any other status.
    /// Transport failures are returned as errors so the caller can pick a policy.
    pub async fn register_particle(&self, address: &str) -> Result<bool, NimbleClientError> {
        let url = format!("{}/register_particle", self.base_url);
        let resp = self
            .http
            .post(&url)
            .timeout(self.particle_timeout)
            .json(&AddressPayload { address })
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(address, %status, "register_particle responded");

        Ok(status == StatusCode::OK)
    }

    /// Check whether `address` holds a funded balance.
    ///
    /// Positive only for HTTP 200 with a `msg` field free of the error marker.
    /// A 200 whose body is not JSON or lacks `msg` is negative and logged.
    pub async fn check_balance(&self, address: &str) -> Result<bool, NimbleClientError> {
        let url = format!("{}/check_balance", self.base_url);
        let resp = self
            .http
            .post(&url)
            .timeout(self.balance_timeout)
            .json(&AddressPayload { address })
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(address, %status, "check_balance responded");

        if status != StatusCode::OK {
            return Ok(false);
        }

        let body = resp.text().await?;
        let parsed: BalanceResponse = match serde_json::from_str(&body) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(address, error = %e, "check_balance returned malformed JSON");
                return Ok(false);
            }
        };

        if parsed.msg.is_none() {
            tracing::warn!(address, "check_balance response has no msg field");
            return Ok(false);
        }

        Ok(!parsed.is_error())
    }
}
