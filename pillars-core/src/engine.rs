//! The Zakat calculation engine.
//!
//! A pure, synchronous, total function: no I/O, no hidden state, and no
//! failure mode. Unset fields collapse to zero at point of use; the only
//! "error-like" outcome is [`NisabThreshold::RateMissing`], which is a
//! normal result state.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::input::{GoldDeclaration, GoldPurity, ZakatInput};
use crate::nisab::{NisabThreshold, NisabWeights};
use crate::normalize::amount_or_zero;
use crate::result::{Breakdown, GoldValuation, ZakatResult};

/// Zakat rate on qualifying net wealth: 2.5%.
pub const ZAKAT_RATE: Decimal = dec!(0.025);

const PERCENT_DIVISOR: Decimal = dec!(100);

/// Derives a [`ZakatResult`] from the declared snapshot.
///
/// Idempotent and safe to call on every keystroke; two calls with the same
/// input yield identical results.
pub fn calculate(input: &ZakatInput, weights: &NisabWeights) -> ZakatResult {
    let cash = amount_or_zero(input.cash);
    let bank_balance = amount_or_zero(input.bank_balance);
    let (gold_value, gold_items) = value_gold(&input.gold);
    let silver_value =
        amount_or_zero(input.silver_grams) * amount_or_zero(input.silver_rate_per_gram);
    let investments = amount_or_zero(input.investments);
    let business_assets = amount_or_zero(input.business_assets);
    let receivables = amount_or_zero(input.receivables);
    let debts = amount_or_zero(input.debts);

    let total_assets = cash
        + bank_balance
        + gold_value
        + silver_value
        + investments
        + business_assets
        + receivables;

    // Debts can never produce negative wealth.
    let net_wealth = (total_assets - debts).max(Decimal::ZERO);

    let nisab_threshold = NisabThreshold::resolve(input.nisab_basis, weights, input.basis_rate());

    let eligible = matches!(nisab_threshold, NisabThreshold::Determined(threshold) if net_wealth >= threshold);

    let zakat_due = if eligible {
        net_wealth * ZAKAT_RATE
    } else {
        Decimal::ZERO
    };

    ZakatResult {
        total_assets,
        net_wealth,
        nisab_threshold,
        eligible,
        zakat_due,
        breakdown: Breakdown {
            cash,
            bank_balance,
            gold_value,
            gold_items,
            silver_value,
            investments,
            business_assets,
            receivables,
            debts,
        },
    }
}

/// Values a gold declaration. The custom bucket's percentage scales the
/// quoted rate relative to pure metal; standard buckets are priced at the
/// rate entered for that grade.
fn value_gold(gold: &GoldDeclaration) -> (Decimal, Vec<GoldValuation>) {
    match gold {
        GoldDeclaration::Flat {
            grams,
            rate_per_gram,
        } => {
            let value = amount_or_zero(*grams) * amount_or_zero(*rate_per_gram);
            (value, Vec::new())
        }
        GoldDeclaration::PerKarat { holdings } => {
            let mut items = Vec::with_capacity(holdings.len());
            let mut total = Decimal::ZERO;
            for holding in holdings {
                let grams = amount_or_zero(holding.grams);
                let rate = amount_or_zero(holding.rate_per_gram);
                let effective_rate = match holding.purity {
                    GoldPurity::Custom { percent } => rate * percent / PERCENT_DIVISOR,
                    _ => rate,
                };
                let value = grams * effective_rate;
                total += value;
                items.push(GoldValuation {
                    purity: holding.purity,
                    grams,
                    effective_rate_per_gram: effective_rate,
                    value,
                });
            }
            (total, items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GoldHolding;
    use crate::nisab::NisabBasis;

    fn weights() -> NisabWeights {
        NisabWeights::default()
    }

    #[test]
    fn test_all_unset_yields_zero_and_rate_missing() {
        let result = calculate(&ZakatInput::default(), &weights());
        assert_eq!(result.total_assets, Decimal::ZERO);
        assert_eq!(result.net_wealth, Decimal::ZERO);
        assert_eq!(result.nisab_threshold, NisabThreshold::RateMissing);
        assert!(!result.eligible);
        assert_eq!(result.zakat_due, Decimal::ZERO);
    }

    #[test]
    fn test_cash_over_silver_nisab() {
        let input = ZakatInput {
            cash: Some(dec!(100000)),
            silver_rate_per_gram: Some(dec!(80)),
            nisab_basis: NisabBasis::Silver,
            ..Default::default()
        };
        let result = calculate(&input, &weights());

        // 595g x 80 = 47,600. 100,000 >= 47,600 -> due 2,500.
        assert_eq!(result.nisab_threshold, NisabThreshold::Determined(dec!(47600)));
        assert!(result.eligible);
        assert_eq!(result.zakat_due, dec!(2500));
    }

    #[test]
    fn test_debts_floor_net_wealth_at_zero() {
        let input = ZakatInput {
            cash: Some(dec!(50000)),
            debts: Some(dec!(60000)),
            silver_rate_per_gram: Some(dec!(80)),
            ..Default::default()
        };
        let result = calculate(&input, &weights());
        assert_eq!(result.net_wealth, Decimal::ZERO);
        assert!(!result.eligible);
        assert_eq!(result.zakat_due, Decimal::ZERO);
    }

    #[test]
    fn test_flat_gold_below_gold_nisab() {
        let input = ZakatInput {
            gold: GoldDeclaration::Flat {
                grams: Some(dec!(10)),
                rate_per_gram: Some(dec!(6000)),
            },
            nisab_basis: NisabBasis::Gold,
            ..Default::default()
        };
        let result = calculate(&input, &weights());

        // Gold value 60,000 < nisab 85 x 6,000 = 510,000.
        assert_eq!(result.total_assets, dec!(60000));
        assert_eq!(result.net_wealth, dec!(60000));
        assert_eq!(result.nisab_threshold, NisabThreshold::Determined(dec!(510000)));
        assert!(!result.eligible);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // Net wealth exactly equal to the threshold qualifies.
        let input = ZakatInput {
            cash: Some(dec!(47600)),
            silver_rate_per_gram: Some(dec!(80)),
            ..Default::default()
        };
        let result = calculate(&input, &weights());
        assert!(result.eligible);
        assert_eq!(result.zakat_due, dec!(1190));
    }

    #[test]
    fn test_rate_missing_despite_large_wealth() {
        let input = ZakatInput {
            cash: Some(dec!(10000000)),
            nisab_basis: NisabBasis::Silver,
            ..Default::default()
        };
        let result = calculate(&input, &weights());
        assert_eq!(result.nisab_threshold, NisabThreshold::RateMissing);
        assert!(!result.eligible);
        assert_eq!(result.zakat_due, Decimal::ZERO);
    }

    #[test]
    fn test_per_karat_sums_buckets() {
        let input = ZakatInput {
            gold: GoldDeclaration::PerKarat {
                holdings: vec![
                    GoldHolding {
                        purity: GoldPurity::K24,
                        grams: Some(dec!(10)),
                        rate_per_gram: Some(dec!(6000)),
                    },
                    GoldHolding {
                        purity: GoldPurity::K22,
                        grams: Some(dec!(20)),
                        rate_per_gram: Some(dec!(5500)),
                    },
                ],
            },
            nisab_basis: NisabBasis::Gold,
            ..Default::default()
        };
        let result = calculate(&input, &weights());
        assert_eq!(result.breakdown.gold_value, dec!(170000));
        assert_eq!(result.breakdown.gold_items.len(), 2);
    }

    #[test]
    fn test_custom_purity_scales_rate() {
        let input = ZakatInput {
            gold: GoldDeclaration::PerKarat {
                holdings: vec![GoldHolding {
                    purity: GoldPurity::Custom {
                        percent: dec!(50),
                    },
                    grams: Some(dec!(10)),
                    rate_per_gram: Some(dec!(6000)),
                }],
            },
            ..Default::default()
        };
        let result = calculate(&input, &weights());

        // 10g x (6000 x 50%) = 30,000.
        assert_eq!(result.breakdown.gold_value, dec!(30000));
        assert_eq!(
            result.breakdown.gold_items[0].effective_rate_per_gram,
            dec!(3000)
        );
    }

    #[test]
    fn test_idempotent() {
        let input = ZakatInput {
            cash: Some(dec!(12345.67)),
            silver_grams: Some(dec!(700)),
            silver_rate_per_gram: Some(dec!(85)),
            debts: Some(dec!(500)),
            ..Default::default()
        };
        let first = calculate(&input, &weights());
        let second = calculate(&input, &weights());
        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonic_in_cash() {
        let mut input = ZakatInput {
            cash: Some(dec!(1000)),
            silver_rate_per_gram: Some(dec!(80)),
            debts: Some(dec!(400)),
            ..Default::default()
        };
        let before = calculate(&input, &weights());
        input.cash = Some(dec!(1001));
        let after = calculate(&input, &weights());

        assert!(after.total_assets >= before.total_assets);
        assert!(after.net_wealth >= before.net_wealth);
        assert!(after.zakat_due >= before.zakat_due);
    }
}
