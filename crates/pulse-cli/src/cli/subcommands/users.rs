use clap::Subcommand;

/// Registered user queries.
#[derive(Clone, Debug, Subcommand)]
pub enum UsersCommands {
    /// Number of registered users.
    Count,
}
