//! Command line frontend that answers "which garbage goes out when".
#![allow(
    clippy::print_stdout,
    reason = "command line tool whose output is the point"
)]

use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gomical_core::{GarbageCategory, Weekday, format_days_ja, week};
use gomical_lookup::LookupClient;
use reqwest::Client;

#[derive(Parser)]
#[command(name = "gomical", about = "Municipal garbage collection schedule lookup")]
struct Cli {
    /// Base URL of the lookup API.
    #[arg(long, default_value = gomical_lookup::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the categories collected today.
    Today,
    /// Show the categories collected on the given weekday.
    Day {
        /// English weekday name, e.g. "Monday".
        day: Weekday,
    },
    /// Show the whole week, starting today.
    Week,
    /// Reverse lookup: which category does an item belong to?
    Search {
        /// Item name to look up.
        query: String,
    },
    /// Probe service health; the exit status reflects the answer.
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = Client::builder().user_agent("gomical/0.1").build()?;
    let lookup = LookupClient::new(client, cli.base_url);

    match cli.command {
        Command::Today => {
            let schedule = lookup.today_categories().await?;
            match Weekday::from_str(&schedule.today) {
                Ok(day) => println!(
                    "{} ({}) {}",
                    schedule.today,
                    day.name_ja(),
                    week::date_in_current_week(day)
                ),
                Err(_) => println!("{}", schedule.today),
            }
            if schedule.categories.is_empty() {
                println!("No collection today.");
            }
            for category in &schedule.categories {
                print_category(category);
            }
        }
        Command::Day { day } => {
            println!(
                "{day} ({}) {}",
                day.name_ja(),
                week::date_in_current_week(day)
            );
            for category in lookup.categories_for_day(day).await? {
                print_category(&category);
            }
        }
        Command::Week => {
            let categories = lookup.categories().await?;
            for day in week::rotation_from(week::today()) {
                println!(
                    "{day} ({}) {}",
                    day.name_ja(),
                    week::date_in_current_week(day)
                );
                for category in categories.iter().filter(|category| category.days.contains(&day)) {
                    print_category(category);
                }
            }
        }
        Command::Search { query } => {
            let results = lookup.search(&query).await?;
            if results.is_empty() {
                println!("No match for \"{query}\".");
            }
            for result in results {
                println!(
                    "- {}: {} ({})",
                    result.garbage_type.name,
                    result.category.category,
                    format_days_ja(&result.category.days)
                );
            }
        }
        Command::Health => {
            if lookup.health().await {
                println!("healthy");
            } else {
                anyhow::bail!("service is not healthy");
            }
        }
    }

    Ok(())
}

fn print_category(category: &GarbageCategory) {
    println!(
        "- {} [{}]",
        category.category,
        format_days_ja(&category.days)
    );
    if !category.method.is_empty() {
        println!("    {}", category.method);
    }
    if !category.notion.is_empty() {
        println!("    {}", category.notion);
    }
}
