//! The flat calculator form: one prompt per field, single gold rate.
//!
//! Both this form and the wizard are adapters that produce a conforming
//! [`ZakatInput`]; the arithmetic lives in `pillars_core` alone.

use colored::Colorize;
use inquire::{InquireError, Select, Text};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use pillars_core::prelude::*;

/// Live per-gram rates fetched ahead of the form, if any. Only ever used to
/// pre-fill the manual rate prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatePrefill {
    pub gold: Option<Decimal>,
    pub silver: Option<Decimal>,
}

/// Prompts for an amount; empty, invalid, and negative answers stay unset.
pub fn prompt_amount(
    message: &str,
    current: Option<Decimal>,
) -> Result<Option<Decimal>, InquireError> {
    let default_text = current.map(|value| value.to_string());
    let mut prompt = Text::new(message).with_help_message("Leave empty to skip");
    if let Some(text) = default_text.as_deref() {
        prompt = prompt.with_default(text);
    }
    let raw = prompt.prompt()?;
    Ok(parse_amount(&raw))
}

/// Prompts for the Nisab basis.
pub fn prompt_basis(current: NisabBasis) -> Result<NisabBasis, InquireError> {
    let options: Vec<NisabBasis> = NisabBasis::iter().collect();
    let start = options.iter().position(|basis| *basis == current).unwrap_or(0);
    Select::new("Nisab basis:", options)
        .with_starting_cursor(start)
        .with_help_message("Which metal's threshold governs eligibility")
        .prompt()
}

/// Walks the flat form, starting from the previously saved record.
pub fn run_flat_form(
    mut input: ZakatInput,
    prefill: &RatePrefill,
) -> Result<ZakatInput, InquireError> {
    println!("\n{}", "ZAKAT CALCULATOR".bright_green().bold());
    println!(
        "{}",
        "Amounts are in your local currency; empty fields count as zero.".dimmed()
    );
    println!();

    input.cash = prompt_amount("Cash on hand:", input.cash)?;
    input.bank_balance = prompt_amount("Bank balance:", input.bank_balance)?;

    let (saved_grams, saved_rate) = match input.gold {
        GoldDeclaration::Flat {
            grams,
            rate_per_gram,
        } => (grams, rate_per_gram),
        GoldDeclaration::PerKarat { .. } => (None, None),
    };
    let grams = prompt_amount("Gold weight (grams):", saved_grams)?;
    let rate_per_gram = prompt_amount("Gold rate per gram:", saved_rate.or(prefill.gold))?;
    input.gold = GoldDeclaration::Flat {
        grams,
        rate_per_gram,
    };

    input.silver_grams = prompt_amount("Silver weight (grams):", input.silver_grams)?;
    input.silver_rate_per_gram = prompt_amount(
        "Silver rate per gram:",
        input.silver_rate_per_gram.or(prefill.silver),
    )?;

    input.investments = prompt_amount("Investments (stocks, funds, crypto):", input.investments)?;
    input.business_assets = prompt_amount("Business assets:", input.business_assets)?;
    input.receivables = prompt_amount("Money owed to you:", input.receivables)?;
    input.debts = prompt_amount("Debts due soon:", input.debts)?;

    input.nisab_basis = prompt_basis(input.nisab_basis)?;

    Ok(input)
}
