use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::nisab::NisabBasis;

/// Fineness grade of a gold holding.
///
/// Standard buckets are priced at the rate the user quotes for that grade;
/// `Custom` carries an explicit percentage of pure metal which scales the
/// quoted rate. The percentage is taken literally — clamping to 0..=100 is
/// the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GoldPurity {
    K24,
    K22,
    K18,
    Custom { percent: Decimal },
}

impl std::fmt::Display for GoldPurity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoldPurity::K24 => write!(f, "24K"),
            GoldPurity::K22 => write!(f, "22K"),
            GoldPurity::K18 => write!(f, "18K"),
            GoldPurity::Custom { percent } => write!(f, "{}% purity", percent),
        }
    }
}

/// One purity-bucketed gold entry in the per-karat form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldHolding {
    pub purity: GoldPurity,
    #[serde(default)]
    pub grams: Option<Decimal>,
    #[serde(default)]
    pub rate_per_gram: Option<Decimal>,
}

/// How the caller declares gold: the flat form uses a single weight and
/// rate, the extended form buckets holdings by purity. Both calculator UIs
/// produce one of these; the engine owns the arithmetic for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GoldDeclaration {
    Flat {
        #[serde(default)]
        grams: Option<Decimal>,
        #[serde(default)]
        rate_per_gram: Option<Decimal>,
    },
    PerKarat {
        holdings: Vec<GoldHolding>,
    },
}

impl Default for GoldDeclaration {
    fn default() -> Self {
        GoldDeclaration::Flat {
            grams: None,
            rate_per_gram: None,
        }
    }
}

/// The declared financial snapshot at calculation time.
///
/// Every numeric field is either a valid non-negative amount or `None`, the
/// explicit "unset" marker. The record is persisted verbatim (including
/// unset markers) by the presentation layer and survives across sessions
/// until reset; `#[serde(default)]` lets partial stored records load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZakatInput {
    pub cash: Option<Decimal>,
    pub bank_balance: Option<Decimal>,
    pub gold: GoldDeclaration,
    pub silver_grams: Option<Decimal>,
    pub silver_rate_per_gram: Option<Decimal>,
    pub investments: Option<Decimal>,
    pub business_assets: Option<Decimal>,
    /// Money owed to the user and expected to be recovered.
    pub receivables: Option<Decimal>,
    /// Short-term liabilities due soon.
    pub debts: Option<Decimal>,
    pub nisab_basis: NisabBasis,
}

impl ZakatInput {
    /// The per-gram rate that governs the Nisab threshold for the chosen
    /// basis. The Nisab is defined against pure metal, so the per-karat
    /// form contributes its 24K rate.
    pub fn basis_rate(&self) -> Option<Decimal> {
        match self.nisab_basis {
            NisabBasis::Silver => self.silver_rate_per_gram,
            NisabBasis::Gold => match &self.gold {
                GoldDeclaration::Flat { rate_per_gram, .. } => *rate_per_gram,
                GoldDeclaration::PerKarat { holdings } => holdings
                    .iter()
                    .find(|holding| matches!(holding.purity, GoldPurity::K24))
                    .and_then(|holding| holding.rate_per_gram),
            },
        }
    }
}
