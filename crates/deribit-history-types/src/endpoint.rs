//! Historical-data endpoint definitions.

use serde::{Deserialize, Serialize};

/// One of the three public historical-data endpoints.
///
/// Each endpoint has a logical name used for schema storage and reporting,
/// and a remote URL suffix. The two differ only for
/// [`Endpoint::GetTradesBySequence`], which queries the remote
/// `get_last_trades_by_instrument` path while keeping its schema under
/// `get_trades_by_sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Metadata for a single instrument.
    GetInstrument,
    /// Instrument listing for a currency and kind.
    GetInstruments,
    /// Trade history for an instrument by sequence range.
    GetTradesBySequence,
}

impl Endpoint {
    /// All endpoints, in the order the API self-check visits them.
    pub const ALL: [Self; 3] = [
        Self::GetInstrument,
        Self::GetInstruments,
        Self::GetTradesBySequence,
    ];

    /// Returns the logical endpoint name used for schema storage.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetInstrument => "get_instrument",
            Self::GetInstruments => "get_instruments",
            Self::GetTradesBySequence => "get_trades_by_sequence",
        }
    }

    /// Returns the URL suffix under the public API base.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::GetInstrument => "get_instrument",
            Self::GetInstruments => "get_instruments",
            // The remote path differs from the logical name here.
            Self::GetTradesBySequence => "get_last_trades_by_instrument",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_names() {
        assert_eq!(Endpoint::GetInstrument.name(), "get_instrument");
        assert_eq!(Endpoint::GetInstruments.name(), "get_instruments");
        assert_eq!(
            Endpoint::GetTradesBySequence.name(),
            "get_trades_by_sequence"
        );
    }

    #[test]
    fn test_trades_path_differs_from_name() {
        assert_eq!(
            Endpoint::GetTradesBySequence.path(),
            "get_last_trades_by_instrument"
        );
        assert_eq!(Endpoint::GetInstrument.path(), Endpoint::GetInstrument.name());
        assert_eq!(
            Endpoint::GetInstruments.path(),
            Endpoint::GetInstruments.name()
        );
    }

    #[test]
    fn test_all_order() {
        assert_eq!(
            Endpoint::ALL,
            [
                Endpoint::GetInstrument,
                Endpoint::GetInstruments,
                Endpoint::GetTradesBySequence,
            ]
        );
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Endpoint::GetTradesBySequence.to_string(), "get_trades_by_sequence");
    }
}
