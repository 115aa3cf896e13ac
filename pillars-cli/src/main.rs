//! # Five Pillars CLI
//!
//! Terminal companion for the Five Pillars of Islam, with an interactive
//! Zakat calculator.
//!
//! ## Usage
//! ```bash
//! # Reopen the last active tab
//! pillars
//!
//! # Read about a pillar
//! pillars learn zakat
//!
//! # Fill in the flat calculator form
//! pillars calc
//!
//! # Walk through the guided wizard
//! pillars wizard
//!
//! # Skip the live rate lookup
//! pillars calc --offline
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use pillars_core::prelude::*;
use pillars_rates::{MetalPriceApiProvider, RateProvider};

mod config;
mod form;
mod pillars;
mod store;
mod wizard;

use config::CliConfig;
use form::RatePrefill;
use store::{SavedState, StateStore, Tab};

/// Five Pillars companion with a Zakat calculator
#[derive(Parser, Debug)]
#[command(name = "pillars")]
#[command(author = "fivepillars contributors")]
#[command(version)]
#[command(about = "Five Pillars of Islam companion with a Zakat calculator", long_about = None)]
struct Args {
    /// Skip the live metal-rate lookup
    #[arg(long, default_value = "false")]
    offline: bool,

    /// Currency code for rate lookups
    #[arg(long)]
    currency: Option<String>,

    /// Print the result as JSON instead of the formatted summary
    #[arg(long, default_value = "false")]
    json: bool,

    /// Write the textual summary to a file
    #[arg(long)]
    export: Option<std::path::PathBuf>,

    /// Discard the saved calculator state before starting
    #[arg(long, default_value = "false")]
    reset: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Read about one of the five pillars
    Learn { pillar: Option<pillars::Pillar> },
    /// Fill in the flat calculator form
    Calc,
    /// Walk through the guided step-by-step wizard
    Wizard,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli_config = CliConfig::load();

    let store = StateStore::default_location();
    if args.reset {
        store.reset();
    }
    let mut state = store.load();

    // No subcommand reopens the last active tab.
    let command = args.command.clone().unwrap_or_else(|| match state.active_tab {
        Tab::Learn => Commands::Learn { pillar: None },
        Tab::Calculator => Commands::Calc,
        Tab::Wizard => Commands::Wizard,
    });

    match command {
        Commands::Learn { pillar } => {
            state.active_tab = Tab::Learn;
            store.save(&state);
            pillars::render(pillar);
        }
        Commands::Calc => {
            state.active_tab = Tab::Calculator;
            let prefill = fetch_prefill(&args, &cli_config).await;
            let input = form::run_flat_form(state.input.clone(), &prefill)?;
            state.input = input;
            store.save(&state);
            finish(&state, &args)?;
        }
        Commands::Wizard => {
            state.active_tab = Tab::Wizard;
            let prefill = fetch_prefill(&args, &cli_config).await;
            let input = wizard::run_wizard(state.input.clone(), &prefill)?;
            state.input = input;
            store.save(&state);
            finish(&state, &args)?;
        }
    }

    Ok(())
}

/// One best-effort attempt per metal; any failure falls back to the
/// configured defaults, then to manual entry. Never required for
/// correctness.
async fn fetch_prefill(args: &Args, cli_config: &CliConfig) -> RatePrefill {
    let mut prefill = RatePrefill {
        gold: cli_config.gold_rate,
        silver: cli_config.silver_rate,
    };

    let offline = args.offline || cli_config.offline.unwrap_or(false);
    if offline {
        return prefill;
    }

    let provider = match MetalPriceApiProvider::from_env() {
        Ok(provider) => provider,
        Err(_) => {
            warn!("no metal price credential configured; enter rates manually");
            return prefill;
        }
    };

    let currency = args
        .currency
        .clone()
        .or_else(|| cli_config.currency.clone())
        .unwrap_or_else(|| "USD".to_string());

    match provider.per_gram(NisabBasis::Gold, &currency).await {
        Ok(quote) => prefill.gold = Some(quote.per_gram),
        Err(e) => warn!("gold rate lookup failed: {e}"),
    }
    match provider.per_gram(NisabBasis::Silver, &currency).await {
        Ok(quote) => prefill.silver = Some(quote.per_gram),
        Err(e) => warn!("silver rate lookup failed: {e}"),
    }

    prefill
}

/// Computes and renders the result for the saved record.
fn finish(state: &SavedState, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let result = calculate(&state.input, &NisabWeights::default());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        match result.nisab_threshold {
            NisabThreshold::RateMissing => {
                println!(
                    "{}",
                    format!(
                        "Set the {} rate per gram to determine the Nisab threshold.",
                        state.input.nisab_basis
                    )
                    .yellow()
                    .bold()
                );
            }
            NisabThreshold::Determined(_) if result.eligible => {
                println!(
                    "{}",
                    format!("Zakat due: {}", result.format_amount())
                        .bright_green()
                        .bold()
                );
            }
            NisabThreshold::Determined(_) => {
                println!("{}", "No Zakat due this year.".bold());
            }
        }
        println!("\n{}", result.explain());
    }

    if let Some(path) = &args.export {
        let text = format!("{}\n\n{}", result.summary(), result.explain());
        std::fs::write(path, text)?;
        println!("{}", format!("Summary written to {}", path.display()).dimmed());
    }

    Ok(())
}
