use pillars_core::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_cash_only_silver_basis() {
    // Cash 100,000, silver rate 80 -> nisab 595 x 80 = 47,600.
    let input = ZakatInput {
        cash: Some(dec!(100000)),
        silver_rate_per_gram: Some(dec!(80)),
        nisab_basis: NisabBasis::Silver,
        ..Default::default()
    };
    let result = calculate(&input, &NisabWeights::default());

    assert_eq!(result.total_assets, dec!(100000));
    assert_eq!(result.net_wealth, dec!(100000));
    assert_eq!(result.nisab_threshold, NisabThreshold::Determined(dec!(47600)));
    assert!(result.eligible);
    assert_eq!(result.zakat_due, dec!(2500));
}

#[test]
fn test_everything_unset() {
    let result = calculate(&ZakatInput::default(), &NisabWeights::default());

    assert_eq!(result.total_assets, Decimal::ZERO);
    assert_eq!(result.net_wealth, Decimal::ZERO);
    assert_eq!(result.nisab_threshold, NisabThreshold::RateMissing);
    assert!(!result.eligible);
    assert_eq!(result.zakat_due, Decimal::ZERO);
}

#[test]
fn test_debts_exceed_assets() {
    let input = ZakatInput {
        cash: Some(dec!(50000)),
        debts: Some(dec!(60000)),
        silver_rate_per_gram: Some(dec!(80)),
        ..Default::default()
    };
    let result = calculate(&input, &NisabWeights::default());

    assert_eq!(result.net_wealth, Decimal::ZERO);
    assert!(!result.eligible);
    assert_eq!(result.zakat_due, Decimal::ZERO);
}

#[test]
fn test_flat_gold_gold_basis_below_nisab() {
    let input = ZakatInput {
        gold: GoldDeclaration::Flat {
            grams: Some(dec!(10)),
            rate_per_gram: Some(dec!(6000)),
        },
        nisab_basis: NisabBasis::Gold,
        ..Default::default()
    };
    let result = calculate(&input, &NisabWeights::default());

    assert_eq!(result.breakdown.gold_value, dec!(60000));
    assert_eq!(result.net_wealth, dec!(60000));
    assert_eq!(result.nisab_threshold, NisabThreshold::Determined(dec!(510000)));
    assert!(!result.eligible);
}

#[test]
fn test_every_category_contributes() {
    let input = ZakatInput {
        cash: Some(dec!(1000)),
        bank_balance: Some(dec!(2000)),
        gold: GoldDeclaration::Flat {
            grams: Some(dec!(5)),
            rate_per_gram: Some(dec!(100)),
        },
        silver_grams: Some(dec!(100)),
        silver_rate_per_gram: Some(dec!(2)),
        investments: Some(dec!(3000)),
        business_assets: Some(dec!(4000)),
        receivables: Some(dec!(500)),
        debts: Some(dec!(700)),
        nisab_basis: NisabBasis::Silver,
    };
    let result = calculate(&input, &NisabWeights::default());

    // 1000 + 2000 + 500 + 200 + 3000 + 4000 + 500 = 11,200.
    assert_eq!(result.total_assets, dec!(11200));
    assert_eq!(result.net_wealth, dec!(10500));
    // Silver nisab: 595 x 2 = 1,190.
    assert!(result.eligible);
    assert_eq!(result.zakat_due, dec!(262.5));
}

#[test]
fn test_net_wealth_never_negative_and_due_identity() {
    let cases = [
        (Some(dec!(0)), Some(dec!(0))),
        (Some(dec!(10)), Some(dec!(1000000))),
        (Some(dec!(99999)), None),
        (None, Some(dec!(42))),
    ];
    for (cash, debts) in cases {
        let input = ZakatInput {
            cash,
            debts,
            silver_rate_per_gram: Some(dec!(80)),
            ..Default::default()
        };
        let result = calculate(&input, &NisabWeights::default());
        assert!(result.net_wealth >= Decimal::ZERO);
        assert!(result.zakat_due >= Decimal::ZERO);
        let expected = if result.eligible {
            result.net_wealth * ZAKAT_RATE
        } else {
            Decimal::ZERO
        };
        assert_eq!(result.zakat_due, expected);
    }
}

#[test]
fn test_classical_pair_changes_threshold_only() {
    let input = ZakatInput {
        cash: Some(dec!(48000)),
        silver_rate_per_gram: Some(dec!(80)),
        ..Default::default()
    };

    let simplified = calculate(&input, &NisabWeights::SIMPLIFIED);
    let classical = calculate(&input, &NisabWeights::CLASSICAL);

    // 48,000 clears 47,600 but not 48,988.80. The wealth figures agree.
    assert!(simplified.eligible);
    assert!(!classical.eligible);
    assert_eq!(simplified.net_wealth, classical.net_wealth);
}

#[test]
fn test_result_serializes_with_camel_case_wire_names() {
    let input = ZakatInput {
        cash: Some(dec!(100)),
        ..Default::default()
    };
    let result = calculate(&input, &NisabWeights::default());
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("totalAssets").is_some());
    assert!(json.get("netWealth").is_some());
    assert_eq!(
        json.pointer("/nisabThreshold/status").and_then(|v| v.as_str()),
        Some("rateMissing")
    );
}
