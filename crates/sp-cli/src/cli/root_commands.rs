use clap::{Args, Subcommand};

use crate::cli::subcommands::{ActivityCommands, AuthCommands, PlanCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in and out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Study plans.
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Daily study tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// GitHub commit activity.
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
    /// Progress overview across all plans.
    Dashboard,
    /// Print the JSON schema of a planner type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name (e.g. `study_plan`, `study_task`, `dashboard_stats`).
    pub type_name: String,
}
