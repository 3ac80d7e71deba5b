use pulse_core::responses::UserProfile;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mpulse profile`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let user = pulse_auth::profile(&ctx.db, &session.key).await?;
    output(&UserProfile::from(&user), flags.format)
}
