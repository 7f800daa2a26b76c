//! `plan` command
//!
//! Prints the recommended savings amount and the suggested allocation
//! table for a given income, without requiring any expense input.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_bar, format_currency, format_percentage, separator};
use crate::error::FinflowResult;
use crate::services::budget;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Monthly income after taxes
    #[arg(short, long)]
    pub income: f64,
}

/// Handle the plan command
pub fn handle_plan_command(settings: &Settings, args: PlanArgs) -> FinflowResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let savings = budget::recommended_savings(args.income);
    let allocations = budget::suggested_allocation(args.income);

    println!("Budget plan for {} monthly income", format_currency(args.income, symbol));
    println!("{}", separator(48));
    println!(
        "Recommended savings: {}",
        format_currency(savings, symbol)
    );
    println!();
    println!("Suggested allocation:");

    let max_amount = allocations
        .iter()
        .map(|a| a.amount)
        .fold(0.0_f64, f64::max);

    for allocation in &allocations {
        println!(
            "  {:<16} {:>12}  {:>5}  {}",
            allocation.category,
            format_currency(allocation.amount, symbol),
            format_percentage(allocation.rate * 100.0),
            format_bar(allocation.amount, max_amount, 20),
        );
    }

    Ok(())
}
