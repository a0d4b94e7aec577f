//! Transport seam between the client facade and the HTTP layer.

use deribit_history_types::InstrumentKind;
use serde_json::Value;

use crate::client::FetchError;

/// One fetch per endpoint, returning the decoded JSON body verbatim.
///
/// [`HistoryHttpClient`](crate::HistoryHttpClient) is the real
/// implementation; tests substitute stubs returning fixtures. Inputs are
/// forwarded unvalidated - instrument-name format, sequence ordering, and
/// count bounds are all left to the remote API.
pub trait HistoryTransport {
    /// Fetches metadata for a single instrument.
    fn fetch_instrument(&self, instrument_name: &str) -> Result<Value, FetchError>;

    /// Fetches the instrument listing for a currency and kind.
    fn fetch_instruments(
        &self,
        currency: &str,
        kind: InstrumentKind,
        expired: bool,
    ) -> Result<Value, FetchError>;

    /// Fetches trade history for an instrument by sequence range.
    fn fetch_trades_by_sequence(
        &self,
        instrument_name: &str,
        start_seq: u64,
        end_seq: u64,
        count: u32,
    ) -> Result<Value, FetchError>;
}
