use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Register a new user.
    Signup(AuthSignupArgs),
    /// Verify credentials and start a session.
    Login(AuthLoginArgs),
    /// End the current session.
    Logout,
    /// Show current session status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    /// Email address or phone number.
    #[arg(long)]
    pub key: String,
    #[arg(long)]
    pub password: String,
    /// Enterprise name.
    #[arg(long)]
    pub enterprise: String,
    /// Business activity, e.g. "Rubber Goods".
    #[arg(long)]
    pub activity: String,
    /// Classification (HSN) code, e.g. 4016.
    #[arg(long)]
    pub code: String,
    /// Display name (defaults to the email local part).
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Email address or phone number.
    #[arg(long)]
    pub key: String,
    #[arg(long)]
    pub password: String,
}
