use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in through the browser.
    Login(AuthLoginArgs),
    /// Forget the signed-in user.
    Logout,
    /// Show the signed-in user.
    Status,
    /// Switch the signed-in user's study track for plans created from now on.
    Role {
        /// `it` (commit track) or `normal` (subject track).
        role: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Identity provider: github or google.
    #[arg(long, default_value = "github")]
    pub provider: String,

    /// Study role: it or normal. A first sign-in without it takes the
    /// provider's default (github: it, google: normal).
    #[arg(long)]
    pub role: Option<String>,
}
