use chrono::Utc;
use pulse_core::generator::{Preference, priority_len, refresh};
use pulse_core::responses::GenerateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared::rng::{batch_size, resolve_seed, seeded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `mpulse generate`.
pub async fn handle(
    args: &GenerateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let preference = Preference::new(
        Some(session.activity.as_str()),
        Some(session.classification_code.as_str()),
    );

    let seed = resolve_seed(args.seed, ctx.config.generator.seed);
    let mut rng = seeded(seed);
    let count = batch_size(args.count, &ctx.config.generator, &mut rng);

    let batch = refresh(&ctx.db, count, &preference, &mut rng, Utc::now().date_naive()).await?;

    output(
        &GenerateResponse {
            generated: batch.len(),
            prioritized: if preference.is_empty() {
                0
            } else {
                priority_len(count)
            },
            preferred_activity: preference.activity.map(String::from),
            preferred_code: preference.classification_code.map(String::from),
            seed,
        },
        flags.format,
    )
}
