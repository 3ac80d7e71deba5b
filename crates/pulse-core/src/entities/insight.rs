use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// A single synthetic market-trend record.
///
/// `composite_index` holds the unboosted index at generation time. Ranking
/// always recomputes it from `trend_score` and `growth_forecast`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Insight {
    pub headline: String,
    pub activity: String,
    pub classification_code: String,
    pub category: Category,
    pub location: String,
    pub trend_score: f64,
    pub growth_forecast: f64,
    pub composite_index: f64,
    pub date: NaiveDate,
}
