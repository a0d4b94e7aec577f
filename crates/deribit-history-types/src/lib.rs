//! Core types for the deribit-history client.
//!
//! This crate provides the vocabulary shared by the transport, schema, and
//! facade crates:
//!
//! - [`Endpoint`] - The three historical-data endpoints
//! - [`InstrumentKind`] - Deribit instrument kinds

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/deribit-history/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod endpoint;
mod kind;

pub use endpoint::Endpoint;
pub use kind::{InstrumentKind, KindParseError};
