use pillars_core::NisabBasis;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// 1 troy ounce = 31.1034768 grams.
pub const OUNCE_TO_GRAM: Decimal = dec!(31.1034768);

/// Market symbol for the basis metal.
pub fn metal_code(basis: NisabBasis) -> &'static str {
    match basis {
        NisabBasis::Gold => "XAU",
        NisabBasis::Silver => "XAG",
    }
}

/// Converts a provider's units-of-metal-per-unit-currency figure into a
/// per-gram price in that currency. A non-positive figure yields `None` and
/// is treated upstream as "no rate available".
pub fn per_gram_from_rate(rate: Decimal) -> Option<Decimal> {
    if rate <= Decimal::ZERO {
        return None;
    }
    Some((Decimal::ONE / rate) / OUNCE_TO_GRAM)
}

/// A normalized per-gram quote for one metal in one currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub basis: NisabBasis,
    pub metal: &'static str,
    pub currency: String,
    pub per_gram: Decimal,
    /// Unix seconds, as reported by the source.
    pub timestamp: i64,
    pub source: &'static str,
}
