//! Insight categories.
//!
//! Uses `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the form stored in SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of market signal an insight describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Policy,
    Innovation,
    DemandTrend,
    SupplyRisk,
}

impl Category {
    /// Every category, in catalog order. Generation draws uniformly from this.
    pub const ALL: [Self; 4] = [
        Self::Policy,
        Self::Innovation,
        Self::DemandTrend,
        Self::SupplyRisk,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Policy => "policy",
            Self::Innovation => "innovation",
            Self::DemandTrend => "demand_trend",
            Self::SupplyRisk => "supply_risk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
