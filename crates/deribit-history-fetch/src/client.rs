//! Blocking HTTP client for the Deribit history API.

use std::time::Duration;

use deribit_history_types::{Endpoint, InstrumentKind};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use thiserror::Error;

use crate::query;
use crate::transport::HistoryTransport;
use crate::url::{BASE_URL, endpoint_url};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the public API.
    pub base_url: String,
    /// Fixed per-request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("deribit-history/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching an endpoint.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, timeout, or failure reading the body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Invalid JSON from {endpoint}: {source}")]
    Decode {
        /// The endpoint that produced the body.
        endpoint: Endpoint,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Blocking HTTP client issuing one GET per fetch.
///
/// Bodies are parsed as JSON and returned verbatim, including any error
/// envelope the remote API produces. HTTP status codes are not interpreted
/// and nothing is retried.
#[derive(Debug, Clone)]
pub struct HistoryHttpClient {
    client: Client,
    config: ClientConfig,
}

impl HistoryHttpClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues one GET against `endpoint` and decodes the body as JSON.
    fn get(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let url = endpoint_url(&self.config.base_url, endpoint);
        let body = self.client.get(url).query(params).send()?.text()?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

impl HistoryTransport for HistoryHttpClient {
    fn fetch_instrument(&self, instrument_name: &str) -> Result<Value, FetchError> {
        self.get(
            Endpoint::GetInstrument,
            &query::instrument_query(instrument_name),
        )
    }

    fn fetch_instruments(
        &self,
        currency: &str,
        kind: InstrumentKind,
        expired: bool,
    ) -> Result<Value, FetchError> {
        self.get(
            Endpoint::GetInstruments,
            &query::instruments_query(currency, kind, expired),
        )
    }

    fn fetch_trades_by_sequence(
        &self,
        instrument_name: &str,
        start_seq: u64,
        end_seq: u64,
        count: u32,
    ) -> Result<Value, FetchError> {
        self.get(
            Endpoint::GetTradesBySequence,
            &query::trades_by_sequence_query(instrument_name, start_seq, end_seq, count),
        )
    }
}
