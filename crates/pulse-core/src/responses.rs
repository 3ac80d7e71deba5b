//! CLI response types returned as JSON by `mpulse` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `mpulse dashboard`, `mpulse generate`, `mpulse search`, and
//! `mpulse profile`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{DirectoryEntry, User};
use crate::ranking::{DashboardStats, RankedInsight};

/// Response from `mpulse dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardView {
    pub viewer_activity: Option<String>,
    pub stats: DashboardStats,
    pub rankings: Vec<RankedInsight>,
}

/// Response from `mpulse generate` and `mpulse init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenerateResponse {
    pub generated: usize,
    pub prioritized: usize,
    pub preferred_activity: Option<String>,
    pub preferred_code: Option<String>,
    pub seed: u64,
}

/// Response from `mpulse search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchResultsResponse {
    pub query: String,
    pub results: Vec<DirectoryEntry>,
    pub total_results: usize,
}

/// Public view of a registered user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub key: String,
    pub name: String,
    pub enterprise_name: String,
    pub activity: String,
    pub classification_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            key: user.key.clone(),
            name: user.name.clone(),
            enterprise_name: user.enterprise_name.clone(),
            activity: user.activity.clone(),
            classification_code: user.classification_code.clone(),
            created_at: user.created_at,
        }
    }
}

/// Response from `mpulse users count`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UsersCountResponse {
    pub total_users: u64,
}
