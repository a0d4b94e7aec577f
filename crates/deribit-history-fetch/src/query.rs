//! Query-parameter builders for the three endpoints.
//!
//! Kept as pure functions so the exact wire parameters can be asserted
//! without network access.

use deribit_history_types::InstrumentKind;

/// Query parameters for `get_instrument`.
#[must_use]
pub fn instrument_query(instrument_name: &str) -> Vec<(&'static str, String)> {
    vec![("instrument_name", instrument_name.to_string())]
}

/// Query parameters for `get_instruments`.
///
/// The `expired` flag is sent as the literal string `"true"` or `"false"`,
/// never as a native boolean.
#[must_use]
pub fn instruments_query(
    currency: &str,
    kind: InstrumentKind,
    expired: bool,
) -> Vec<(&'static str, String)> {
    let expired_str = if expired { "true" } else { "false" };
    vec![
        ("currency", currency.to_string()),
        ("kind", kind.as_str().to_string()),
        ("expired", expired_str.to_string()),
    ]
}

/// Query parameters for the trades-by-sequence request.
#[must_use]
pub fn trades_by_sequence_query(
    instrument_name: &str,
    start_seq: u64,
    end_seq: u64,
    count: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("instrument_name", instrument_name.to_string()),
        ("start_seq", start_seq.to_string()),
        ("end_seq", end_seq.to_string()),
        ("count", count.to_string()),
    ]
}
