use pulse_core::ranking::dashboard;
use pulse_core::responses::DashboardView;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::{output, print_table};

/// Handle `mpulse dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let viewer = if args.all_activities {
        None
    } else {
        Some(args.activity.clone().unwrap_or(session.activity))
    };

    let limit = flags.limit_or(ctx.config.general.default_limit);
    let view = dashboard(&ctx.db, viewer.as_deref(), usize::try_from(limit)?).await?;

    if flags.wants_table() {
        print_dashboard(&view);
        return Ok(());
    }
    output(&view, flags.format)
}

fn print_dashboard(view: &DashboardView) {
    let headers = [
        "rank", "index", "activity", "code", "category", "location", "trend", "growth", "date",
        "headline",
    ];
    let rows = view
        .rankings
        .iter()
        .map(|row| {
            vec![
                row.rank.to_string(),
                format!("{:.2}", row.index),
                row.insight.activity.clone(),
                row.insight.classification_code.clone(),
                row.insight.category.to_string(),
                row.insight.location.clone(),
                format!("{:.2}", row.insight.trend_score),
                format!("{:+.2}", row.insight.growth_forecast),
                row.insight.date.to_string(),
                row.insight.headline.clone(),
            ]
        })
        .collect::<Vec<_>>();
    print_table(&headers, &rows);

    println!();
    println!(
        "records: {}  mean index: {:.2}  viewer: {}",
        view.stats.total_records,
        view.stats.mean_index,
        view.viewer_activity.as_deref().unwrap_or("-")
    );

    let trend_rows = view
        .stats
        .trend_by_activity
        .iter()
        .map(|trend| {
            vec![
                trend.activity.clone(),
                format!("{:.2}", trend.mean_trend_score),
                trend.records.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    print_table(&["activity", "mean trend", "records"], &trend_rows);
}
