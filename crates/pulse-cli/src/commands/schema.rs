use anyhow::bail;
use pulse_core::entities::{DirectoryEntry, Insight, User};
use pulse_core::responses::{
    DashboardView, GenerateResponse, SearchResultsResponse, UserProfile, UsersCountResponse,
};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: [&str; 8] = [
    "insight",
    "user",
    "directory-entry",
    "dashboard",
    "generate",
    "search-results",
    "profile",
    "users-count",
];

/// Handle `mpulse schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.replace('_', "-").as_str() {
        "insight" => schema_for!(Insight),
        "user" => schema_for!(User),
        "directory-entry" => schema_for!(DirectoryEntry),
        "dashboard" => schema_for!(DashboardView),
        "generate" => schema_for!(GenerateResponse),
        "search-results" => schema_for!(SearchResultsResponse),
        "profile" => schema_for!(UserProfile),
        "users-count" => schema_for!(UsersCountResponse),
        other => bail!(
            "unknown schema type '{other}', expected one of: {}",
            TYPE_NAMES.join(", ")
        ),
    };
    output(&schema, flags.format)
}
