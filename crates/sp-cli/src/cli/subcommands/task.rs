use clap::Subcommand;

/// Study task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Tasks due today across all plans.
    Today,
    /// Tasks of one plan.
    List {
        #[arg(long)]
        plan: i64,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark a task completed.
    Complete { id: i64 },
    /// Mark a task missed.
    Miss { id: i64 },
}
