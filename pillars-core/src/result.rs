use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::input::GoldPurity;
use crate::nisab::NisabThreshold;

/// Valuation of one purity bucket, retained for display/audit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldValuation {
    pub purity: GoldPurity,
    pub grams: Decimal,
    /// The rate actually applied, after any purity scaling.
    pub effective_rate_per_gram: Decimal,
    pub value: Decimal,
}

/// Per-category subtotals behind a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub cash: Decimal,
    pub bank_balance: Decimal,
    pub gold_value: Decimal,
    pub gold_items: Vec<GoldValuation>,
    pub silver_value: Decimal,
    pub investments: Decimal,
    pub business_assets: Decimal,
    pub receivables: Decimal,
    pub debts: Decimal,
}

/// The computed outcome. Never persisted — a derived, ephemeral view
/// recomputed from the current input on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatResult {
    pub total_assets: Decimal,
    pub net_wealth: Decimal,
    pub nisab_threshold: NisabThreshold,
    pub eligible: bool,
    pub zakat_due: Decimal,
    pub breakdown: Breakdown,
}

impl ZakatResult {
    /// Returns the Zakat due formatted with 2 decimal places.
    pub fn format_amount(&self) -> String {
        let rounded = self
            .zakat_due
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// Returns a concise status string for the share/export surface.
    pub fn summary(&self) -> String {
        match self.nisab_threshold {
            NisabThreshold::RateMissing => format!(
                "Net wealth: {:.2} - Nisab rate missing, eligibility undetermined",
                self.net_wealth
            ),
            NisabThreshold::Determined(threshold) => {
                if self.eligible {
                    format!(
                        "Zakat due: {} (net wealth {:.2}, nisab {:.2})",
                        self.format_amount(),
                        self.net_wealth,
                        threshold
                    )
                } else {
                    format!(
                        "No Zakat due (net wealth {:.2} below nisab {:.2})",
                        self.net_wealth, threshold
                    )
                }
            }
        }
    }

    /// Generates a human-readable explanation of the calculation.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        writeln!(&mut output, "Zakat calculation:").unwrap();
        writeln!(&mut output, "{:-<44}", "").unwrap();

        let b = &self.breakdown;
        let mut line = |label: &str, amount: Decimal| {
            writeln!(&mut output, "  {:<24} {:>15.2}", label, amount).unwrap();
        };
        line("Cash", b.cash);
        line("Bank balance", b.bank_balance);
        line("Gold value", b.gold_value);
        line("Silver value", b.silver_value);
        line("Investments", b.investments);
        line("Business assets", b.business_assets);
        line("Money owed to you", b.receivables);
        line("Total assets", self.total_assets);
        line("Debts due now", b.debts);
        line("Net wealth", self.net_wealth);

        for item in &b.gold_items {
            writeln!(
                &mut output,
                "    gold {:<12} {:>8.2} g x {:>10.2} = {:>12.2}",
                item.purity.to_string(),
                item.grams,
                item.effective_rate_per_gram,
                item.value
            )
            .unwrap();
        }

        writeln!(&mut output, "{:-<44}", "").unwrap();
        match self.nisab_threshold {
            NisabThreshold::Determined(threshold) => {
                writeln!(&mut output, "  {:<24} {:>15.2}", "Nisab threshold", threshold).unwrap();
                if self.eligible {
                    writeln!(&mut output, "Status: PAYABLE").unwrap();
                    writeln!(&mut output, "Amount due: {}", self.format_amount()).unwrap();
                } else {
                    writeln!(&mut output, "Status: EXEMPT (below nisab)").unwrap();
                }
            }
            NisabThreshold::RateMissing => {
                writeln!(&mut output, "  Nisab threshold: undetermined").unwrap();
                writeln!(
                    &mut output,
                    "Status: UNDETERMINED - set the metal rate for the chosen basis"
                )
                .unwrap();
            }
        }

        output
    }
}

impl std::fmt::Display for ZakatResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
