//! `summary` command
//!
//! Assembles a budget from command-line arguments and prints the overview:
//! totals, remaining amount, status, category breakdown, and feasibility.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_currency, format_percentage, separator};
use crate::error::{FinflowError, FinflowResult};
use crate::models::{BudgetData, Expense, ExpenseCategory};
use crate::services::budget;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Monthly income after taxes
    #[arg(short, long)]
    pub income: f64,

    /// Expense as NAME:AMOUNT:CATEGORY, e.g. "Rent:1200:fixed" (repeatable)
    #[arg(short, long = "expense", value_name = "SPEC")]
    pub expenses: Vec<String>,
}

/// Parse one NAME:AMOUNT:CATEGORY expense spec
///
/// Splits from the right so names may contain colons.
pub fn parse_expense_spec(spec: &str) -> FinflowResult<Expense> {
    let mut parts = spec.rsplitn(3, ':');
    let category = parts.next();
    let amount = parts.next();
    let name = parts.next();

    let (name, amount, category) = match (name, amount, category) {
        (Some(name), Some(amount), Some(category)) => (name, amount, category),
        _ => return Err(FinflowError::bad_expense_spec(spec)),
    };

    let category: ExpenseCategory = category
        .parse()
        .map_err(|e: String| FinflowError::InvalidArgument(e))?;

    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| FinflowError::bad_expense_spec(spec))?;

    let expense = Expense::new(name.trim(), amount, category);
    expense
        .validate()
        .map_err(|e| FinflowError::Validation(e.to_string()))?;

    Ok(expense)
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> FinflowResult<()> {
    let expenses = args
        .expenses
        .iter()
        .map(|spec| parse_expense_spec(spec))
        .collect::<FinflowResult<Vec<_>>>()?;

    let data = BudgetData::new(args.income, expenses);
    print_summary(settings, &data);

    Ok(())
}

fn print_summary(settings: &Settings, data: &BudgetData) {
    let symbol = settings.currency_symbol.as_str();
    let overview = budget::overview(data.income, &data.expenses);
    let feasibility = budget::validate_feasibility(data.income, &data.expenses);

    println!("Monthly budget summary");
    println!("{}", separator(48));
    println!("Income:            {:>12}", format_currency(overview.income, symbol));
    println!(
        "Total expenses:    {:>12}",
        format_currency(overview.total_expenses, symbol)
    );
    println!(
        "  Fixed:           {:>12}  ({})",
        format_currency(overview.fixed_expenses, symbol),
        format_percentage(overview.category_percentage(ExpenseCategory::Fixed)),
    );
    println!(
        "  Variable:        {:>12}  ({})",
        format_currency(overview.variable_expenses, symbol),
        format_percentage(overview.category_percentage(ExpenseCategory::Variable)),
    );
    println!(
        "Remaining:         {:>12}",
        format_currency(overview.remaining, symbol)
    );
    println!("{}", separator(48));
    println!("Status: {}", overview.status.status);
    println!("{}", overview.status.message);

    if !feasibility.is_valid {
        println!();
        println!("Warning: {}", feasibility.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expense_spec() {
        let expense = parse_expense_spec("Rent:1200:fixed").unwrap();
        assert_eq!(expense.name, "Rent");
        assert_eq!(expense.amount, 1200.0);
        assert_eq!(expense.category, ExpenseCategory::Fixed);
    }

    #[test]
    fn test_parse_expense_spec_name_with_colon() {
        let expense = parse_expense_spec("Rent: main st:950.50:fixed").unwrap();
        assert_eq!(expense.name, "Rent: main st");
        assert_eq!(expense.amount, 950.50);
    }

    #[test]
    fn test_parse_expense_spec_rejects_malformed() {
        assert!(parse_expense_spec("Rent=1200").is_err());
        assert!(parse_expense_spec("Rent:abc:fixed").is_err());
        assert!(parse_expense_spec("Rent:1200:essential").is_err());
        assert!(parse_expense_spec("Rent:-50:fixed").is_err());
        assert!(parse_expense_spec(":100:fixed").is_err());
    }
}
