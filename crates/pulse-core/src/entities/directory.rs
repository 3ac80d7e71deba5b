use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One enterprise in the lookup directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub enterprise_name: String,
    pub district: String,
    pub activity: String,
    pub classification_code: String,
}
