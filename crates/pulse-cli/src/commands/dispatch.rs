use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => commands::init::handle(&args, ctx, flags).await,
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Generate(args) => commands::generate::handle(&args, ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Profile => commands::profile::handle(ctx, flags).await,
        Commands::Users { action } => commands::users::handle(&action, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, &ctx.config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
