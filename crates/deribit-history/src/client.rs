//! Client facade over the transport layer.

use deribit_history_fetch::{ClientConfig, FetchError, HistoryHttpClient, HistoryTransport};
use deribit_history_types::{Endpoint, InstrumentKind};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Default cap on the number of trades requested per call.
pub const DEFAULT_TRADE_COUNT: u32 = 10_000;

/// Client for historical Deribit trading data.
///
/// Each operation comes in two flavors: the plain method returns the
/// `"result"` payload of the response envelope, the `_raw` method returns
/// the decoded envelope verbatim. Nothing else is transformed.
#[derive(Debug, Clone)]
pub struct DeribitHistoryClient<T = HistoryHttpClient> {
    transport: T,
}

impl DeribitHistoryClient<HistoryHttpClient> {
    /// Creates a client over the public API with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given transport configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HistoryHttpClient::new(config).map_err(FetchError::Http)?;
        Ok(Self { transport })
    }
}

impl<T: HistoryTransport> DeribitHistoryClient<T> {
    /// Creates a client over an arbitrary transport.
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches metadata for a specific instrument, unwrapped.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, or with
    /// [`ClientError::EnvelopeMissingResult`] if the envelope has no
    /// `"result"` field.
    pub fn get_instrument(&self, instrument_name: &str) -> Result<Value> {
        let envelope = self.get_instrument_raw(instrument_name)?;
        unwrap_result(Endpoint::GetInstrument, envelope)
    }

    /// Fetches metadata for a specific instrument, as the full envelope.
    ///
    /// # Errors
    ///
    /// Fails on transport errors.
    pub fn get_instrument_raw(&self, instrument_name: &str) -> Result<Value> {
        Ok(self.transport.fetch_instrument(instrument_name)?)
    }

    /// Fetches the instrument listing for a currency and kind, unwrapped.
    ///
    /// Set `expired` to include expired instruments.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, or with
    /// [`ClientError::EnvelopeMissingResult`] if the envelope has no
    /// `"result"` field.
    pub fn get_instruments(
        &self,
        currency: &str,
        kind: InstrumentKind,
        expired: bool,
    ) -> Result<Value> {
        let envelope = self.get_instruments_raw(currency, kind, expired)?;
        unwrap_result(Endpoint::GetInstruments, envelope)
    }

    /// Fetches the instrument listing, as the full envelope.
    ///
    /// # Errors
    ///
    /// Fails on transport errors.
    pub fn get_instruments_raw(
        &self,
        currency: &str,
        kind: InstrumentKind,
        expired: bool,
    ) -> Result<Value> {
        Ok(self.transport.fetch_instruments(currency, kind, expired)?)
    }

    /// Fetches trades for an instrument by sequence range, unwrapped.
    ///
    /// `count` caps the number of trades returned; pass
    /// [`DEFAULT_TRADE_COUNT`] unless a smaller page is wanted. The range is
    /// forwarded as-is - `start_seq > end_seq` is not rejected here, the
    /// remote API is authoritative.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, or with
    /// [`ClientError::EnvelopeMissingResult`] if the envelope has no
    /// `"result"` field.
    pub fn get_trades_by_sequence(
        &self,
        instrument_name: &str,
        start_seq: u64,
        end_seq: u64,
        count: u32,
    ) -> Result<Value> {
        let envelope =
            self.get_trades_by_sequence_raw(instrument_name, start_seq, end_seq, count)?;
        unwrap_result(Endpoint::GetTradesBySequence, envelope)
    }

    /// Fetches trades by sequence range, as the full envelope.
    ///
    /// # Errors
    ///
    /// Fails on transport errors.
    pub fn get_trades_by_sequence_raw(
        &self,
        instrument_name: &str,
        start_seq: u64,
        end_seq: u64,
        count: u32,
    ) -> Result<Value> {
        Ok(self
            .transport
            .fetch_trades_by_sequence(instrument_name, start_seq, end_seq, count)?)
    }
}

/// Extracts the `"result"` payload from a response envelope.
fn unwrap_result(endpoint: Endpoint, envelope: Value) -> Result<Value> {
    match envelope {
        Value::Object(mut map) => map
            .remove("result")
            .ok_or(ClientError::EnvelopeMissingResult { endpoint }),
        _ => Err(ClientError::EnvelopeMissingResult { endpoint }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Transport returning one fixed envelope per endpoint.
    struct StubTransport {
        instrument: Value,
        instruments: Value,
        trades: Value,
    }

    impl StubTransport {
        fn uniform(envelope: Value) -> Self {
            Self {
                instrument: envelope.clone(),
                instruments: envelope.clone(),
                trades: envelope,
            }
        }
    }

    impl HistoryTransport for StubTransport {
        fn fetch_instrument(
            &self,
            _instrument_name: &str,
        ) -> std::result::Result<Value, FetchError> {
            Ok(self.instrument.clone())
        }

        fn fetch_instruments(
            &self,
            _currency: &str,
            _kind: InstrumentKind,
            _expired: bool,
        ) -> std::result::Result<Value, FetchError> {
            Ok(self.instruments.clone())
        }

        fn fetch_trades_by_sequence(
            &self,
            _instrument_name: &str,
            _start_seq: u64,
            _end_seq: u64,
            _count: u32,
        ) -> std::result::Result<Value, FetchError> {
            Ok(self.trades.clone())
        }
    }

    fn fixture() -> Value {
        json!({ "result": { "foo": "bar" } })
    }

    fn client() -> DeribitHistoryClient<StubTransport> {
        DeribitHistoryClient::with_transport(StubTransport::uniform(fixture()))
    }

    #[test]
    fn test_get_instrument_unwraps_result() {
        let value = client().get_instrument("BTC-30JUN23-20000-C").unwrap();
        assert_eq!(value, json!({ "foo": "bar" }));
    }

    #[test]
    fn test_get_instrument_raw_is_identity() {
        let value = client().get_instrument_raw("BTC-30JUN23-20000-C").unwrap();
        assert_eq!(value, fixture());
    }

    #[test]
    fn test_get_instruments_both_flavors() {
        let client = client();
        assert_eq!(
            client
                .get_instruments("BTC", InstrumentKind::Future, false)
                .unwrap(),
            json!({ "foo": "bar" })
        );
        assert_eq!(
            client
                .get_instruments_raw("BTC", InstrumentKind::Future, false)
                .unwrap(),
            fixture()
        );
    }

    #[test]
    fn test_get_trades_by_sequence_both_flavors() {
        let client = client();
        assert_eq!(
            client
                .get_trades_by_sequence("BTC-PERPETUAL", 1, 500, DEFAULT_TRADE_COUNT)
                .unwrap(),
            json!({ "foo": "bar" })
        );
        assert_eq!(
            client
                .get_trades_by_sequence_raw("BTC-PERPETUAL", 1, 500, DEFAULT_TRADE_COUNT)
                .unwrap(),
            fixture()
        );
    }

    #[test]
    fn test_missing_result_fails_fast() {
        let stub = StubTransport::uniform(json!({
            "error": { "code": -32602, "message": "Invalid params" }
        }));
        let client = DeribitHistoryClient::with_transport(stub);

        let err = client.get_instrument("BTC-PERPETUAL").unwrap_err();
        assert!(matches!(
            err,
            ClientError::EnvelopeMissingResult {
                endpoint: Endpoint::GetInstrument
            }
        ));

        let err = client
            .get_trades_by_sequence("BTC-PERPETUAL", 1, 2, 10)
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::EnvelopeMissingResult {
                endpoint: Endpoint::GetTradesBySequence
            }
        ));
    }

    #[test]
    fn test_non_object_envelope_fails_fast() {
        let client = DeribitHistoryClient::with_transport(StubTransport::uniform(json!([1, 2])));
        let err = client
            .get_instruments("BTC", InstrumentKind::Option, true)
            .unwrap_err();
        assert!(matches!(err, ClientError::EnvelopeMissingResult { .. }));
    }

    #[test]
    fn test_raw_does_not_touch_error_envelopes() {
        let envelope = json!({ "error": { "message": "oops" } });
        let client = DeribitHistoryClient::with_transport(StubTransport::uniform(envelope.clone()));
        assert_eq!(client.get_instrument_raw("X").unwrap(), envelope);
    }
}
