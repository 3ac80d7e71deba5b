use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LogoutResponse {
    logged_out: bool,
    had_session: bool,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let had_session = ctx.sessions.delete()?;
    output(
        &LogoutResponse {
            logged_out: true,
            had_session,
        },
        flags.format,
    )
}
