//! Entity structs for all MarketPulse domain objects.
//!
//! `Insight` and `User` map to tables in the libSQL database; `DirectoryEntry`
//! lives in memory or in a JSONL source file. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema dumps.

mod directory;
mod insight;
mod user;

pub use directory::DirectoryEntry;
pub use insight::Insight;
pub use user::User;
