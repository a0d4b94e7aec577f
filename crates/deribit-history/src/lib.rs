//! Thin synchronous client for the public Deribit historical market-data API.
//!
//! This is the user-facing crate of the deribit-history workspace. It
//! exposes the three data-fetch operations with envelope unwrapping, the API
//! self-check, and re-exports from the transport and schema crates.
//!
//! # Quick Start
//!
//! ```no_run
//! use deribit_history::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = DeribitHistoryClient::new()?;
//!     let instrument = client.get_instrument("BTC-30JUN23-20000-C")?;
//!     println!("{instrument:#}");
//!
//!     let report = client.perform_api_check(&BundledSchemas::new(), &ApiCheckParams::default())?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/deribit-history/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod check;
mod client;
mod error;

pub use check::{ApiCheckParams, ApiCheckReport, CheckOutcome, EndpointCheck};
pub use client::{DEFAULT_TRADE_COUNT, DeribitHistoryClient};
pub use error::{ClientError, Result};

// Re-export the shared vocabulary and the seams the facade runs on.
pub use deribit_history_fetch::{ClientConfig, FetchError, HistoryHttpClient, HistoryTransport};
pub use deribit_history_schema::{
    BundledSchemas, DirSchemaStore, InvalidSchemaError, SchemaDocument, SchemaStore,
    SchemaStoreError, Validation,
};
pub use deribit_history_types::{Endpoint, InstrumentKind, KindParseError};

/// Prelude module for convenient imports.
///
/// ```
/// use deribit_history::prelude::*;
/// ```
pub mod prelude {
    pub use crate::check::{ApiCheckParams, ApiCheckReport, CheckOutcome};
    pub use crate::client::{DEFAULT_TRADE_COUNT, DeribitHistoryClient};
    pub use crate::error::{ClientError, Result};

    pub use deribit_history_fetch::{ClientConfig, HistoryTransport};
    pub use deribit_history_schema::{BundledSchemas, DirSchemaStore, SchemaStore};
    pub use deribit_history_types::{Endpoint, InstrumentKind};
}
