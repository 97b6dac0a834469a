use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `spl` binary.
#[derive(Debug, Parser)]
#[command(name = "spl", version, about = "Smart study planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{ActivityCommands, AuthCommands, PlanCommands, TaskCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["spl", "--format", "table", "--limit", "10", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["spl", "task", "today", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Task {
                action: TaskCommands::Today
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["spl", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn plan_create_arguments() {
        let cli = Cli::try_parse_from([
            "spl",
            "plan",
            "create",
            "--target",
            "octo/hello",
            "--deadline",
            "2026-12-01",
            "--hours",
            "4",
            "--difficulty",
            "hard",
        ])
        .expect("cli should parse");

        match cli.command {
            Commands::Plan {
                action:
                    PlanCommands::Create {
                        target,
                        deadline,
                        hours,
                        difficulty,
                    },
            } => {
                assert_eq!(target, "octo/hello");
                assert_eq!(deadline, "2026-12-01");
                assert_eq!(hours, 4);
                assert_eq!(difficulty.as_deref(), Some("hard"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn plan_create_requires_hours() {
        let parsed = Cli::try_parse_from([
            "spl", "plan", "create", "--target", "Math", "--deadline", "2026-12-01",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn plan_adjust_missed_commit_flag() {
        let cli = Cli::try_parse_from(["spl", "plan", "adjust", "7", "--missed-commit"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Plan {
                action: PlanCommands::Adjust {
                    id: 7,
                    missed_commit: true
                }
            }
        ));
    }

    #[test]
    fn auth_login_provider() {
        let cli = Cli::try_parse_from(["spl", "auth", "login", "--provider", "google"])
            .expect("cli should parse");
        match cli.command {
            Commands::Auth {
                action: AuthCommands::Login(args),
            } => {
                assert_eq!(args.provider, "google");
                assert_eq!(args.role, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn auth_login_with_role() {
        let cli = Cli::try_parse_from(["spl", "auth", "login", "--provider", "google", "--role", "it"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Login(ref args)
            } if args.role.as_deref() == Some("it")
        ));
    }

    #[test]
    fn auth_role_takes_value() {
        let cli = Cli::try_parse_from(["spl", "auth", "role", "normal"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Role { ref role }
            } if role == "normal"
        ));
    }

    #[test]
    fn activity_refresh_repo() {
        let cli = Cli::try_parse_from(["spl", "activity", "refresh", "--repo", "octo/hello"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Activity {
                action: ActivityCommands::Refresh { ref repo }
            } if repo == "octo/hello"
        ));
    }

    #[test]
    fn schema_takes_type_name() {
        let cli = Cli::try_parse_from(["spl", "schema", "study_task"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Schema(ref a) if a.type_name == "study_task"));
    }
}
