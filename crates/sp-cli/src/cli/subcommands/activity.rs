use clap::Subcommand;

/// GitHub activity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ActivityCommands {
    /// Fetch the latest commits of a repository and store a snapshot.
    Refresh {
        #[arg(long)]
        repo: String,
    },
    /// Stored snapshots with their freshness status.
    List,
    /// Your GitHub repositories.
    Repos {
        #[arg(long)]
        limit: Option<u32>,
    },
}
