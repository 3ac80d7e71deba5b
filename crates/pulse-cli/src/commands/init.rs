use chrono::Utc;
use pulse_core::generator::{Preference, refresh};
use pulse_core::responses::GenerateResponse;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::commands::shared::rng::{resolve_seed, seeded};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    data_dir: String,
    database: String,
    demo_users_created: usize,
    initial_batch: GenerateResponse,
}

/// Handle `mpulse init`.
pub async fn handle(args: &InitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let demo_users_created = pulse_auth::demo::seed_demo_users(&ctx.db).await?;

    let count = args.count.unwrap_or(ctx.config.generator.initial_batch);
    let seed = resolve_seed(args.seed, ctx.config.generator.seed);
    let batch = refresh(
        &ctx.db,
        count,
        &Preference::default(),
        &mut seeded(seed),
        Utc::now().date_naive(),
    )
    .await?;

    output(
        &InitResponse {
            data_dir: ctx.config.general.data_dir.clone(),
            database: ctx.config.database_path().display().to_string(),
            demo_users_created,
            initial_batch: GenerateResponse {
                generated: batch.len(),
                prioritized: 0,
                preferred_activity: None,
                preferred_code: None,
                seed,
            },
        },
        flags.format,
    )
}
