//! API self-check against stored schemas.

use deribit_history_fetch::HistoryTransport;
use deribit_history_schema::{SchemaStore, Validation};
use deribit_history_types::{Endpoint, InstrumentKind};

use crate::client::{DEFAULT_TRADE_COUNT, DeribitHistoryClient};
use crate::error::Result;

/// Request parameters for the API self-check.
///
/// The defaults target instruments that exist for as long as the exchange
/// does, so a stock check needs no arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCheckParams {
    /// Currency code of the instrument listing.
    pub currency: String,
    /// Instrument queried for metadata and trades.
    pub instrument_name: String,
    /// Kind of the instrument listing.
    pub kind: InstrumentKind,
    /// Whether the listing includes expired instruments.
    pub expired: bool,
    /// Trade sequence number where the query starts.
    pub start_seq: u64,
    /// Trade sequence number where the query ends.
    pub end_seq: u64,
}

impl Default for ApiCheckParams {
    fn default() -> Self {
        Self {
            currency: "BTC".to_string(),
            instrument_name: "BTC-PERPETUAL".to_string(),
            kind: InstrumentKind::Future,
            expired: false,
            start_seq: 99_999_999,
            end_seq: 99_999_999,
        }
    }
}

/// Per-endpoint outcome of the self-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The live response matches the stored schema.
    Passed,
    /// The live response has drifted from the stored schema.
    Failed {
        /// The validator's diagnostic message.
        message: String,
    },
    /// No schema is stored for this endpoint.
    Skipped,
}

/// One endpoint's entry in the self-check report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCheck {
    /// The checked endpoint.
    pub endpoint: Endpoint,
    /// The outcome for this endpoint.
    pub outcome: CheckOutcome,
}

/// Report of one API self-check run, one entry per endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCheckReport {
    /// Entries in [`Endpoint::ALL`] order.
    pub checks: Vec<EndpointCheck>,
}

impl ApiCheckReport {
    /// Returns true if every checked endpoint passed (skips count as
    /// passing, they carry no evidence of drift).
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks
            .iter()
            .all(|check| !matches!(check.outcome, CheckOutcome::Failed { .. }))
    }
}

impl std::fmt::Display for ApiCheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for check in &self.checks {
            match &check.outcome {
                CheckOutcome::Passed => writeln!(f, "{}: OK", check.endpoint)?,
                CheckOutcome::Failed { message } => writeln!(
                    f,
                    "{}: FAILED - detected format change: {message}",
                    check.endpoint
                )?,
                CheckOutcome::Skipped => {
                    writeln!(f, "{}: no schema found, skipped", check.endpoint)?;
                }
            }
        }
        Ok(())
    }
}

impl<T: HistoryTransport> DeribitHistoryClient<T> {
    /// Validates current API responses against stored JSON Schemas.
    ///
    /// Fetches each endpoint exactly once (raw), then checks every live
    /// envelope against the schema the store holds for it. A missing schema
    /// skips that endpoint; a validation mismatch is recorded and never
    /// aborts the remaining endpoints. Callers typically print the report:
    ///
    /// ```no_run
    /// # use deribit_history::prelude::*;
    /// # fn run() -> deribit_history::Result<()> {
    /// let client = DeribitHistoryClient::new()?;
    /// let report = client.perform_api_check(&BundledSchemas::new(), &ApiCheckParams::default())?;
    /// println!("{report}");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates transport errors, unreadable or unparsable schema
    /// documents, and stored schemas that fail to compile. Mere schema
    /// mismatches are absorbed into the report.
    pub fn perform_api_check(
        &self,
        store: &dyn SchemaStore,
        params: &ApiCheckParams,
    ) -> Result<ApiCheckReport> {
        let responses = [
            (
                Endpoint::GetInstrument,
                self.get_instrument_raw(&params.instrument_name)?,
            ),
            (
                Endpoint::GetInstruments,
                self.get_instruments_raw(&params.currency, params.kind, params.expired)?,
            ),
            (
                Endpoint::GetTradesBySequence,
                self.get_trades_by_sequence_raw(
                    &params.instrument_name,
                    params.start_seq,
                    params.end_seq,
                    DEFAULT_TRADE_COUNT,
                )?,
            ),
        ];

        let mut checks = Vec::with_capacity(responses.len());
        for (endpoint, response) in responses {
            let outcome = match store.load_schema(endpoint)? {
                None => CheckOutcome::Skipped,
                Some(document) => match document.validate(&response)? {
                    Validation::Passed => CheckOutcome::Passed,
                    Validation::Failed { message } => CheckOutcome::Failed { message },
                },
            };
            checks.push(EndpointCheck { endpoint, outcome });
        }
        Ok(ApiCheckReport { checks })
    }
}
