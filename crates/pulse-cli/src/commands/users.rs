use pulse_core::responses::UsersCountResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UsersCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mpulse users <subcommand>`.
pub async fn handle(
    action: &UsersCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UsersCommands::Count => {
            let total_users = ctx.db.count_users().await?;
            output(&UsersCountResponse { total_users }, flags.format)
        }
    }
}
