//! The guided step-by-step wizard: asset-class gates, per-karat gold.

use colored::Colorize;
use inquire::{Confirm, CustomType, InquireError, Select};
use rust_decimal::Decimal;

use pillars_core::prelude::*;

use crate::form::{RatePrefill, prompt_amount, prompt_basis};

/// Walks the guided wizard, starting from the previously saved record.
pub fn run_wizard(
    mut input: ZakatInput,
    prefill: &RatePrefill,
) -> Result<ZakatInput, InquireError> {
    println!("\n{}", "GUIDED ZAKAT WIZARD".bright_cyan().bold());
    println!(
        "{}",
        "This wizard walks you through your assets step by step.".dimmed()
    );
    println!("{}", "You can press Ctrl+C at any time to exit.".dimmed());
    println!();

    // 1. Gold, bucketed by purity
    if Confirm::new("Do you hold gold (jewelry, bars, coins)?")
        .with_default(false)
        .with_help_message("Zakat is due on gold once it reaches the Nisab threshold")
        .prompt()?
    {
        println!("\n{}", "--- Gold ---".bright_yellow());
        let mut holdings: Vec<GoldHolding> = Vec::new();
        loop {
            if !Confirm::new("Add a gold entry?")
                .with_default(holdings.is_empty())
                .prompt()?
            {
                break;
            }

            let choice = Select::new("Purity:", vec!["24K", "22K", "18K", "Other"]).prompt()?;
            let purity = match choice {
                "24K" => GoldPurity::K24,
                "22K" => GoldPurity::K22,
                "18K" => GoldPurity::K18,
                _ => {
                    let percent: Decimal = CustomType::new("Purity percent (0-100):")
                        .with_help_message("e.g. 87.5 for 21K")
                        .with_error_message("Please enter a valid number")
                        .prompt()?;
                    GoldPurity::Custom { percent }
                }
            };

            let grams = prompt_amount("Weight (grams):", None)?;
            let rate_prefill = match purity {
                GoldPurity::K24 => prefill.gold,
                _ => None,
            };
            let rate_per_gram = prompt_amount("Rate per gram for this purity:", rate_prefill)?;

            holdings.push(GoldHolding {
                purity,
                grams,
                rate_per_gram,
            });
            println!("{}", format!("Added {} entry.", purity).green());
        }
        input.gold = GoldDeclaration::PerKarat { holdings };
    }

    // 2. Silver
    if Confirm::new("Do you hold silver?").with_default(false).prompt()? {
        println!("\n{}", "--- Silver ---".bright_white());
        input.silver_grams = prompt_amount("Weight (grams):", input.silver_grams)?;
        input.silver_rate_per_gram = prompt_amount(
            "Rate per gram:",
            input.silver_rate_per_gram.or(prefill.silver),
        )?;
    }

    // 3. Cash & savings
    if Confirm::new("Do you have cash savings or bank balances?")
        .with_default(false)
        .prompt()?
    {
        println!("\n{}", "--- Cash & Savings ---".bright_green());
        input.cash = prompt_amount("Cash on hand:", input.cash)?;
        input.bank_balance = prompt_amount("Bank balance:", input.bank_balance)?;
    }

    // 4. Investments & business
    if Confirm::new("Do you have investments, a business, or money owed to you?")
        .with_default(false)
        .prompt()?
    {
        println!("\n{}", "--- Investments & Business ---".bright_blue());
        input.investments =
            prompt_amount("Market value of investments:", input.investments)?;
        input.business_assets = prompt_amount("Business assets:", input.business_assets)?;
        input.receivables = prompt_amount("Money owed to you:", input.receivables)?;
    }

    // 5. Debts
    if Confirm::new("Do you have debts or expenses due soon?")
        .with_default(false)
        .prompt()?
    {
        input.debts = prompt_amount("Debts due soon:", input.debts)?;
    }

    input.nisab_basis = prompt_basis(input.nisab_basis)?;

    println!("\n{}", "Wizard complete. Calculating...".bold());

    Ok(input)
}
