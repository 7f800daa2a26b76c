use anyhow::Result;
use clap::{Parser, Subcommand};

use finflow::cli::{handle_plan_command, handle_summary_command, PlanArgs, SummaryArgs};
use finflow::config::{paths::FinflowPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "finflow",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based monthly budget calculator",
    long_about = "finflow is a terminal-based monthly budget calculator. Enter your \
                  income and fixed/variable expenses and it derives your remaining \
                  budget, a status classification, recommended savings, and a \
                  suggested allocation - interactively in a TUI or one-shot from \
                  the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print recommended savings and suggested allocation for an income
    Plan(PlanArgs),

    /// Print a full budget summary for an income and a list of expenses
    Summary(SummaryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            finflow::tui::run_tui(&settings)?;
        }
        Some(Commands::Plan(args)) => {
            handle_plan_command(&settings, args)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Config) => {
            println!("finflow Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default category: {}", settings.default_category);
            println!("  Show allocation:  {}", settings.show_allocation);
        }
        None => {
            println!("finflow - Terminal-based monthly budget calculator");
            println!();
            println!("Run 'finflow --help' for usage information.");
            println!("Run 'finflow tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
