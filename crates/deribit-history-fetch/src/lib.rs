//! HTTP transport layer for the deribit-history client.
//!
//! This crate performs the outbound requests:
//!
//! - [`url::endpoint_url`] - Constructs endpoint URLs under the public API base
//! - [`query`] - Query-parameter builders, one per endpoint
//! - [`HistoryHttpClient`] - Blocking HTTP client with a fixed request timeout
//! - [`HistoryTransport`] - The transport seam the client facade runs on

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/deribit-history/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod query;
mod transport;
pub mod url;

pub use client::{ClientConfig, FetchError, HistoryHttpClient};
pub use transport::HistoryTransport;
