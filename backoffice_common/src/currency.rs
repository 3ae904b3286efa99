use crate::errors::BackofficeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// **A supported currency code**
///
/// The backend recognizes exactly three codes. Anything else is rejected
/// before a request is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Currency {
    #[serde(rename = "UYU")]
    Uyu,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "USDc")]
    UsdC,
}

/// **The backend's classification of a currency**
///
/// Derived, never supplied by the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Crypto,
    Fiat,
}

impl Currency {
    /// `USDc` is the only crypto asset; the two government-issued
    /// currencies are fiat.
    pub fn asset_type(&self) -> AssetType {
        match self {
            Currency::UsdC => AssetType::Crypto,
            Currency::Uyu | Currency::Usd => AssetType::Fiat,
        }
    }

    /// The code as the backend spells it.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Uyu => "UYU",
            Currency::Usd => "USD",
            Currency::UsdC => "USDc",
        }
    }
}

impl FromStr for Currency {
    type Err = BackofficeError;

    /// Codes are matched exactly, including the lowercase `c` in `USDc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UYU" => Ok(Currency::Uyu),
            "USD" => Ok(Currency::Usd),
            "USDc" => Ok(Currency::UsdC),
            _ => Err(BackofficeError::unsupported_currency(s)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
