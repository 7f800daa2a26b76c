//! CLI command handlers
//!
//! One-shot, scriptable access to the budget arithmetic, bridging the clap
//! argument parsing with the service layer.

pub mod plan;
pub mod summary;

pub use plan::{handle_plan_command, PlanArgs};
pub use summary::{handle_summary_command, SummaryArgs};
