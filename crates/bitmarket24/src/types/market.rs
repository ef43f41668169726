/*
[INPUT]:  Market identifiers in any letter case (e.g. "ltc_pln", "LTC_PLN")
[OUTPUT]: Validated MarketId with status and trading renderings
[POS]:    Data layer - trading pair identifier
[UPDATE]: When new markets are listed or the identifier format changes
*/

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::http::Bitmarket24Error;

/// Trading pair identifier, `BASE_QUOTE`
///
/// Stored uppercase. Market status lookups use the uppercase form, trading
/// endpoints and request bodies use the lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketId(Cow<'static, str>);

impl MarketId {
    pub const BTC_PLN: MarketId = MarketId(Cow::Borrowed("BTC_PLN"));
    pub const LTC_PLN: MarketId = MarketId(Cow::Borrowed("LTC_PLN"));
    pub const ETH_PLN: MarketId = MarketId(Cow::Borrowed("ETH_PLN"));

    /// Uppercase form used by `/api/{MARKET}/status.json`
    pub fn status_code(&self) -> &str {
        &self.0
    }

    /// Lowercase form used by trading endpoints
    pub fn trading_code(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl FromStr for MarketId {
    type Err = Bitmarket24Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = trimmed.split_once('_').is_some_and(|(base, quote)| {
            let is_code =
                |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric());
            is_code(base) && is_code(quote)
        });

        if !valid {
            return Err(Bitmarket24Error::Configuration(format!(
                "invalid market id `{s}`, expected BASE_QUOTE"
            )));
        }

        Ok(MarketId(Cow::Owned(trimmed.to_ascii_uppercase())))
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for MarketId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.trading_code())
    }
}

impl<'de> Deserialize<'de> for MarketId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: MarketId = "ltc_pln".parse().unwrap();
        let upper: MarketId = "LTC_PLN".parse().unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, MarketId::LTC_PLN);
    }

    #[test]
    fn test_renderings() {
        let market = MarketId::BTC_PLN;
        assert_eq!(market.status_code(), "BTC_PLN");
        assert_eq!(market.trading_code(), "btc_pln");
        assert_eq!(market.to_string(), "BTC_PLN");
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["", "ltcpln", "_pln", "ltc_", "ltc_pln_x", "ltc-pln", "lt c_pln"] {
            assert!(raw.parse::<MarketId>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&MarketId::ETH_PLN).unwrap(),
            r#""eth_pln""#
        );
        let parsed: MarketId = serde_json::from_str(r#""Eth_Pln""#).unwrap();
        assert_eq!(parsed, MarketId::ETH_PLN);
    }
}
