use clap::Subcommand;

/// Study plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// Create a plan and generate its daily tasks.
    Create {
        /// Repository (`owner/name`) for IT students, comma-separated subjects otherwise.
        #[arg(long)]
        target: String,
        /// Deadline as YYYY-MM-DD (must be after today).
        #[arg(long)]
        deadline: String,
        /// Study hours per day (1-24).
        #[arg(long)]
        hours: u32,
        /// easy, moderate or hard (defaults to moderate).
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// List your plans, nearest deadline first.
    List,
    /// Show a plan with its tasks and progress.
    Show { id: i64 },
    /// Spread pending tasks over the remaining days.
    Adjust {
        id: i64,
        /// Tag moved tasks after a missed commit.
        #[arg(long)]
        missed_commit: bool,
    },
    /// Set the completion percentage of a plan.
    Progress { id: i64, percent: u32 },
}
