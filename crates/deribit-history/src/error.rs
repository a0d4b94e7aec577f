//! Error types for the client facade.

use deribit_history_fetch::FetchError;
use deribit_history_schema::{InvalidSchemaError, SchemaStoreError};
use deribit_history_types::Endpoint;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the client facade.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The outbound request failed or the body was not JSON.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The response envelope has no `"result"` field.
    ///
    /// This happens when the remote API returns an error body instead of a
    /// payload; the failure is deliberate and immediate rather than
    /// swallowed.
    #[error("Response envelope from {endpoint} has no \"result\" field")]
    EnvelopeMissingResult {
        /// The endpoint whose envelope lacked the field.
        endpoint: Endpoint,
    },

    /// A stored schema document could not be read or parsed.
    #[error(transparent)]
    SchemaStore(#[from] SchemaStoreError),

    /// A stored schema document could not be compiled.
    #[error(transparent)]
    Schema(#[from] InvalidSchemaError),
}
