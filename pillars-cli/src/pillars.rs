//! Static educational pages for the five pillars.

use clap::ValueEnum;
use colored::Colorize;
use strum::{Display, EnumIter, IntoEnumIterator};

use pillars_core::NisabWeights;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Pillar {
    Shahada,
    Salah,
    Sawm,
    Zakat,
    Hajj,
}

impl Pillar {
    fn title(&self) -> &'static str {
        match self {
            Pillar::Shahada => "Shahada - Declaration of Faith",
            Pillar::Salah => "Salah - Prayer",
            Pillar::Sawm => "Sawm - Fasting",
            Pillar::Zakat => "Zakat - Obligatory Charity",
            Pillar::Hajj => "Hajj - Pilgrimage",
        }
    }

    fn body(&self) -> String {
        match self {
            Pillar::Shahada => "The testimony that there is no deity but God and that \
Muhammad is His messenger. It is the entry point of the faith and frames the \
other four pillars."
                .to_string(),
            Pillar::Salah => "The five daily prayers: Fajr, Dhuhr, Asr, Maghrib and \
Isha. Each is performed facing the Qibla, at its prescribed time of day."
                .to_string(),
            Pillar::Sawm => "Fasting the month of Ramadan: abstaining from food, drink \
and marital relations from dawn until sunset, cultivating restraint and \
gratitude. The sick, travellers and others with valid excuses are exempt."
                .to_string(),
            Pillar::Zakat => {
                let weights = NisabWeights::default();
                format!(
                    "An obligatory payment of 2.5% of qualifying net wealth held for a \
lunar year, due once wealth reaches the Nisab threshold: the value of {} grams \
of gold or {} grams of silver. Use the calculator tab to work out whether \
Zakat is due on your wealth and how much.",
                    weights.gold_grams, weights.silver_grams
                )
            }
            Pillar::Hajj => "The pilgrimage to Makkah, obligatory once in a lifetime \
for those physically and financially able. Performed in the month of Dhul \
Hijjah."
                .to_string(),
        }
    }
}

/// Renders one pillar page, or the overview when no pillar is chosen.
pub fn render(pillar: Option<Pillar>) {
    match pillar {
        Some(pillar) => {
            println!("\n{}", pillar.title().bright_cyan().bold());
            println!("{}\n", pillar.body());
        }
        None => {
            println!("\n{}", "THE FIVE PILLARS OF ISLAM".bright_cyan().bold());
            for pillar in Pillar::iter() {
                println!("  {:<10} {}", pillar.to_string().bold(), pillar.title());
            }
            println!(
                "\n{}",
                "Run `pillars learn <pillar>` to read about one of them.".dimmed()
            );
        }
    }
}
