//! Instrument kind definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Deribit instrument kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    /// Futures contracts, including perpetuals.
    Future,
    /// Option contracts.
    Option,
    /// Spot pairs.
    Spot,
    /// Future combo instruments.
    FutureCombo,
    /// Option combo instruments.
    OptionCombo,
}

impl InstrumentKind {
    /// Returns the kind as the string the API expects.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Future => "future",
            Self::Option => "option",
            Self::Spot => "spot",
            Self::FutureCombo => "future_combo",
            Self::OptionCombo => "option_combo",
        }
    }
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown instrument kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown instrument kind: {0}")]
pub struct KindParseError(String);

impl FromStr for InstrumentKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "future" => Ok(Self::Future),
            "option" => Ok(Self::Option),
            "spot" => Ok(Self::Spot),
            "future_combo" => Ok(Self::FutureCombo),
            "option_combo" => Ok(Self::OptionCombo),
            other => Err(KindParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(InstrumentKind::Future.as_str(), "future");
        assert_eq!(InstrumentKind::Option.as_str(), "option");
        assert_eq!(InstrumentKind::FutureCombo.as_str(), "future_combo");
    }

    #[test]
    fn test_from_str_round_trip() {
        for kind in [
            InstrumentKind::Future,
            InstrumentKind::Option,
            InstrumentKind::Spot,
            InstrumentKind::FutureCombo,
            InstrumentKind::OptionCombo,
        ] {
            assert_eq!(kind.as_str().parse::<InstrumentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "swap".parse::<InstrumentKind>().unwrap_err();
        assert_eq!(err, KindParseError("swap".to_string()));
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&InstrumentKind::FutureCombo).unwrap();
        assert_eq!(json, "\"future_combo\"");
    }
}
