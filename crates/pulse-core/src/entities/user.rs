use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered credential record, keyed by email address or phone number.
///
/// `password_hash` is write-only on the wire: it is never serialized and is
/// absent from the JSON schema. Stores persist it through their own columns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub key: String,
    #[serde(skip_serializing, default)]
    #[schemars(skip)]
    pub password_hash: String,
    pub name: String,
    pub enterprise_name: String,
    pub activity: String,
    pub classification_code: String,
    pub created_at: DateTime<Utc>,
}
