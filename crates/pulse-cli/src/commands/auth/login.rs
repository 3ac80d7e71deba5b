use chrono::Utc;
use pulse_auth::Session;
use pulse_core::responses::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LoginResponse {
    authenticated: bool,
    user: UserProfile,
    session_file: String,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = pulse_auth::login(&ctx.db, &args.key, &args.password).await?;
    ctx.sessions.store(&Session::for_user(&user, Utc::now()))?;
    tracing::info!(key = %user.key, "logged in");

    output(
        &LoginResponse {
            authenticated: true,
            user: UserProfile::from(&user),
            session_file: ctx.sessions.path().display().to_string(),
        },
        flags.format,
    )
}
