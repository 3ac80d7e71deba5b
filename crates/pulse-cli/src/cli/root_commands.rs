use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, UsersCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the data directory, seed demo users, and generate the first batch.
    Init(InitArgs),
    /// Signup, login, logout, and session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Replace the insight set with a fresh batch biased to the signed-in user.
    Generate(GenerateArgs),
    /// Ranked insights and summary statistics.
    Dashboard(DashboardArgs),
    /// Look up enterprises by name.
    Search(SearchArgs),
    /// Show the signed-in user's profile.
    Profile,
    /// Registered user queries.
    Users {
        #[command(subcommand)]
        action: UsersCommands,
    },
    /// Print the JSON schema of a core type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Size of the initial batch (defaults to `generator.initial_batch`).
    #[arg(long)]
    pub count: Option<usize>,
    /// RNG seed for the initial batch.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Batch size (defaults to a random size within the configured bounds).
    #[arg(long)]
    pub count: Option<usize>,
    /// RNG seed (defaults to `generator.seed`, then a fresh seed).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Rank as a viewer with this activity instead of the session's.
    #[arg(long, conflicts_with = "all_activities")]
    pub activity: Option<String>,
    /// Rank without any relevance boost.
    #[arg(long)]
    pub all_activities: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Part of an enterprise name (at least 2 characters).
    pub query: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: insight, user, directory-entry, dashboard, generate,
    /// search-results, profile, users-count.
    pub type_name: String,
}
