//! Composite index, relevance boost, and ranking.
//!
//! ```text
//! index = round2((trend_score * 0.7 + max(0, growth_forecast) * 3) * relevance)
//! relevance = 1.2 when the viewer's activity matches the record, else 1.0
//! ```
//!
//! Ranking is recomputed from the raw scores on every call. The
//! `composite_index` stored on an `Insight` is informational only.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Insight;
use crate::errors::StoreError;
use crate::responses::DashboardView;
use crate::store::InsightStore;

pub const TREND_WEIGHT: f64 = 0.7;
pub const GROWTH_WEIGHT: f64 = 3.0;
pub const RELEVANCE_BOOST: f64 = 1.2;

/// An insight with its position in a ranking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RankedInsight {
    /// 1-based position after sorting.
    pub rank: usize,
    /// Final index, relevance boost included.
    pub index: f64,
    /// Multiplier that was applied (1.0 or [`RELEVANCE_BOOST`]).
    pub relevance: f64,
    #[serde(flatten)]
    pub insight: Insight,
}

/// Mean trend score of one activity across the ranked set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ActivityTrend {
    pub activity: String,
    pub mean_trend_score: f64,
    pub records: usize,
}

/// Aggregates shown alongside a ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardStats {
    pub mean_index: f64,
    pub total_records: usize,
    /// Ordered by `mean_trend_score`, highest first.
    pub trend_by_activity: Vec<ActivityTrend>,
}

/// Round half away from zero to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unrounded base index. Negative growth contributes nothing.
#[must_use]
pub fn base_index(trend_score: f64, growth_forecast: f64) -> f64 {
    trend_score.mul_add(TREND_WEIGHT, growth_forecast.max(0.0) * GROWTH_WEIGHT)
}

/// Base index rounded to 2 dp, without any relevance boost.
#[must_use]
pub fn composite_index(trend_score: f64, growth_forecast: f64) -> f64 {
    round2(base_index(trend_score, growth_forecast))
}

/// Relevance multiplier for `insight` as seen by a viewer with `viewer_activity`.
#[must_use]
pub fn relevance_multiplier(insight: &Insight, viewer_activity: Option<&str>) -> f64 {
    match viewer_activity {
        Some(activity) if !activity.is_empty() && insight.activity == activity => RELEVANCE_BOOST,
        _ => 1.0,
    }
}

/// Rank `insights` by final index, highest first.
///
/// The sort is stable, so equal indexes keep their input order. The input is
/// never modified.
#[must_use]
pub fn rank(insights: &[Insight], viewer_activity: Option<&str>) -> Vec<RankedInsight> {
    let mut ranked: Vec<RankedInsight> = insights
        .iter()
        .map(|insight| {
            let relevance = relevance_multiplier(insight, viewer_activity);
            RankedInsight {
                rank: 0,
                index: round2(base_index(insight.trend_score, insight.growth_forecast) * relevance),
                relevance,
                insight: insight.clone(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.index.total_cmp(&a.index));
    for (position, row) in ranked.iter_mut().enumerate() {
        row.rank = position + 1;
    }

    tracing::debug!(records = ranked.len(), viewer = ?viewer_activity, "ranked insights");
    ranked
}

/// Aggregate statistics over a ranked set. Empty input gives zeroed stats.
#[must_use]
pub fn stats(ranked: &[RankedInsight]) -> DashboardStats {
    if ranked.is_empty() {
        return DashboardStats::default();
    }

    let total = ranked.iter().map(|row| row.index).sum::<f64>();
    #[allow(clippy::cast_precision_loss)]
    let mean_index = round2(total / ranked.len() as f64);

    let mut by_activity: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in ranked {
        let entry = by_activity.entry(row.insight.activity.as_str()).or_default();
        entry.0 += row.insight.trend_score;
        entry.1 += 1;
    }

    let mut trend_by_activity: Vec<ActivityTrend> = by_activity
        .into_iter()
        .map(|(activity, (sum, records))| {
            #[allow(clippy::cast_precision_loss)]
            let mean = round2(sum / records as f64);
            ActivityTrend {
                activity: activity.to_string(),
                mean_trend_score: mean,
                records,
            }
        })
        .collect();
    trend_by_activity.sort_by(|a, b| b.mean_trend_score.total_cmp(&a.mean_trend_score));

    DashboardStats {
        mean_index,
        total_records: ranked.len(),
        trend_by_activity,
    }
}

/// Load every stored insight, rank it, and keep the top `limit` rows.
///
/// Statistics cover the full set, not just the rows returned.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read. An unreachable store is
/// never reported as an empty dashboard.
pub async fn dashboard<S>(
    store: &S,
    viewer_activity: Option<&str>,
    limit: usize,
) -> Result<DashboardView, StoreError>
where
    S: InsightStore + ?Sized,
{
    let insights = store.load_all().await?;
    let mut rankings = rank(&insights, viewer_activity);
    let stats = stats(&rankings);
    rankings.truncate(limit);

    Ok(DashboardView {
        viewer_activity: viewer_activity.filter(|a| !a.is_empty()).map(String::from),
        stats,
        rankings,
    })
}
