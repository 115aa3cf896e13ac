use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which metal governs the Nisab threshold for a calculation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NisabBasis {
    Gold,
    #[default]
    Silver,
}

/// Nisab weight-equivalents, injected into the engine as one named set.
///
/// Two pairs circulate: the simplified figures most calculators ship with and
/// the classically cited ones (20 mithqal of gold / 200 dirham of silver).
/// Exactly one pair is in force per calculation; the engine never mixes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NisabWeights {
    pub gold_grams: Decimal,
    pub silver_grams: Decimal,
}

impl NisabWeights {
    /// The pair the interactive calculator ships with.
    pub const SIMPLIFIED: NisabWeights = NisabWeights {
        gold_grams: dec!(85),
        silver_grams: dec!(595),
    };

    /// The classically cited figures.
    pub const CLASSICAL: NisabWeights = NisabWeights {
        gold_grams: dec!(87.48),
        silver_grams: dec!(612.36),
    };

    pub fn for_basis(&self, basis: NisabBasis) -> Decimal {
        match basis {
            NisabBasis::Gold => self.gold_grams,
            NisabBasis::Silver => self.silver_grams,
        }
    }
}

impl Default for NisabWeights {
    fn default() -> Self {
        Self::SIMPLIFIED
    }
}

/// Outcome of resolving the Nisab threshold for a basis.
///
/// `RateMissing` is a normal result state, not a failure: it tells the
/// presentation layer to ask for the missing rate instead of claiming the
/// user is below threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum NisabThreshold {
    Determined(Decimal),
    RateMissing,
}

impl NisabThreshold {
    /// Threshold = weight-equivalent of the basis metal times its per-gram
    /// rate. A zero or unset rate makes the threshold undeterminable.
    pub fn resolve(
        basis: NisabBasis,
        weights: &NisabWeights,
        rate_per_gram: Option<Decimal>,
    ) -> Self {
        match rate_per_gram {
            Some(rate) if rate > Decimal::ZERO => {
                NisabThreshold::Determined(weights.for_basis(basis) * rate)
            }
            _ => NisabThreshold::RateMissing,
        }
    }

    pub fn is_determined(&self) -> bool {
        matches!(self, NisabThreshold::Determined(_))
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            NisabThreshold::Determined(value) => Some(*value),
            NisabThreshold::RateMissing => None,
        }
    }
}
