use async_trait::async_trait;
use pillars_core::NisabBasis;
use rust_decimal::Decimal;

use crate::error::RateError;
use crate::quote::{RateQuote, metal_code};

/// Trait for fetching the current per-gram price of a basis metal.
///
/// Implementors can fetch prices from various sources: static values for
/// testing, REST APIs, or user-held figures.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn per_gram(&self, basis: NisabBasis, currency: &str) -> Result<RateQuote, RateError>;
}

/// Fixed per-gram quotes for tests and offline use.
#[derive(Debug, Clone)]
pub struct StaticRateProvider {
    gold_per_gram: Decimal,
    silver_per_gram: Decimal,
}

impl StaticRateProvider {
    pub fn new(gold_per_gram: Decimal, silver_per_gram: Decimal) -> Self {
        Self {
            gold_per_gram,
            silver_per_gram,
        }
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn per_gram(&self, basis: NisabBasis, currency: &str) -> Result<RateQuote, RateError> {
        let per_gram = match basis {
            NisabBasis::Gold => self.gold_per_gram,
            NisabBasis::Silver => self.silver_per_gram,
        };
        Ok(RateQuote {
            basis,
            metal: metal_code(basis),
            currency: currency.to_string(),
            per_gram,
            timestamp: chrono::Utc::now().timestamp(),
            source: "static",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_static_provider_quotes() {
        let provider = StaticRateProvider::new(dec!(85), dec!(1));

        let gold = provider.per_gram(NisabBasis::Gold, "USD").await.unwrap();
        assert_eq!(gold.per_gram, dec!(85));
        assert_eq!(gold.metal, "XAU");
        assert_eq!(gold.currency, "USD");

        let silver = provider.per_gram(NisabBasis::Silver, "USD").await.unwrap();
        assert_eq!(silver.per_gram, dec!(1));
        assert_eq!(silver.metal, "XAG");
    }
}
