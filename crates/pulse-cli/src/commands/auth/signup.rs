use pulse_auth::SignupRequest;
use pulse_core::responses::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthSignupArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SignupResponse {
    created: bool,
    user: UserProfile,
}

pub async fn handle(args: &AuthSignupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = SignupRequest {
        key: args.key.clone(),
        password: args.password.clone(),
        name: args.name.clone(),
        enterprise_name: args.enterprise.clone(),
        activity: args.activity.clone(),
        classification_code: args.code.clone(),
    };
    let user = pulse_auth::signup(&ctx.db, &request).await?;

    output(
        &SignupResponse {
            created: true,
            user: UserProfile::from(&user),
        },
        flags.format,
    )
}
