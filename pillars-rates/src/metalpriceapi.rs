//! MetalpriceAPI client.
//!
//! The provider quotes metals in units-of-metal-per-unit-currency against a
//! troy ounce; [`per_gram_from_rate`] normalizes that to a per-gram figure.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use pillars_core::NisabBasis;

use crate::error::RateError;
use crate::provider::RateProvider;
use crate::quote::{RateQuote, metal_code, per_gram_from_rate};

const ENDPOINT: &str = "https://api.metalpriceapi.com/v1/latest";

pub const SOURCE: &str = "metalpriceapi";

#[derive(Debug, Deserialize)]
struct LatestRates {
    success: bool,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    rates: HashMap<String, Decimal>,
}

pub struct MetalPriceApiProvider {
    client: reqwest::Client,
    api_key: String,
}

impl MetalPriceApiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Reads the credential from `METALPRICE_API_KEY`.
    pub fn from_env() -> Result<Self, RateError> {
        match std::env::var("METALPRICE_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(RateError::MissingCredential),
        }
    }
}

#[async_trait]
impl RateProvider for MetalPriceApiProvider {
    async fn per_gram(&self, basis: NisabBasis, currency: &str) -> Result<RateQuote, RateError> {
        let metal = metal_code(basis);

        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("base", currency),
                ("currencies", metal),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload: LatestRates = response.json().await?;
        if !payload.success {
            return Err(RateError::Upstream {
                status: status.as_u16(),
            });
        }

        let rate = payload
            .rates
            .get(metal)
            .copied()
            .ok_or_else(|| RateError::MalformedPayload(format!("no {metal} rate in response")))?;
        let per_gram = per_gram_from_rate(rate)
            .ok_or_else(|| RateError::MalformedPayload(format!("non-positive {metal} rate")))?;

        debug!(%metal, %currency, %per_gram, "fetched metal rate");

        Ok(RateQuote {
            basis,
            metal,
            currency: currency.to_string(),
            per_gram,
            timestamp: payload
                .timestamp
                .unwrap_or_else(|| chrono::Utc::now().timestamp()),
            source: SOURCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::OUNCE_TO_GRAM;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payload_parses() {
        let payload: LatestRates = serde_json::from_str(
            r#"{"success":true,"base":"USD","timestamp":1722860000,"rates":{"XAU":0.0004}}"#,
        )
        .unwrap();
        assert!(payload.success);
        assert_eq!(payload.timestamp, Some(1722860000));
        assert_eq!(payload.rates.get("XAU").copied(), Some(dec!(0.0004)));
    }

    #[test]
    fn test_payload_without_rates_is_empty() {
        let payload: LatestRates =
            serde_json::from_str(r#"{"success":false,"error":{"code":101}}"#).unwrap();
        assert!(!payload.success);
        assert!(payload.rates.is_empty());
    }

    #[test]
    fn test_quote_normalization_math() {
        // 0.0004 XAU per USD is 2,500 USD per ounce.
        let per_gram = per_gram_from_rate(dec!(0.0004)).unwrap();
        assert_eq!(per_gram, dec!(2500) / OUNCE_TO_GRAM);
        let round_trip = per_gram * OUNCE_TO_GRAM;
        assert!((round_trip - dec!(2500)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_from_env_requires_credential() {
        // The variable is not set in the test environment.
        unsafe { std::env::remove_var("METALPRICE_API_KEY") };
        let result = MetalPriceApiProvider::from_env();
        assert!(matches!(result, Err(RateError::MissingCredential)));
    }
}
