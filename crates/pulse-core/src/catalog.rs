//! Fixed business-activity catalog.
//!
//! Activities and classification (HSN) codes are paired by position. The
//! mapping is the source of truth for `Insight::classification_code` whenever
//! an activity comes from this list.

/// Business activities insights and directory entries are drawn from.
pub const ACTIVITIES: [&str; 7] = [
    "Textile & Apparel",
    "Automobile Parts",
    "Food Processing",
    "Rubber Goods",
    "Electronics Manufacturing",
    "Pharmaceuticals",
    "Metal Fabrication",
];

/// Classification codes, index-aligned with [`ACTIVITIES`].
pub const CLASSIFICATION_CODES: [&str; 7] = ["6101", "8708", "2106", "4016", "8542", "3004", "7308"];

/// Places an insight can be reported from.
pub const LOCATIONS: [&str; 6] = ["Mumbai", "Delhi", "Surat", "Jaipur", "Indore", "Chennai"];

/// Districts used for enterprise directory entries.
pub const DISTRICTS: [&str; 10] = [
    "South Delhi",
    "Thane",
    "Surat",
    "Jaipur",
    "Indore",
    "Chennai Central",
    "Pune",
    "Kolkata",
    "Ahmedabad",
    "Bangalore",
];

/// Code used for directory entries whose activity is not in the catalog.
pub const UNKNOWN_CODE: &str = "0000";

/// Look up the classification code for a catalog activity.
///
/// Matching is exact; `None` for anything outside [`ACTIVITIES`].
#[must_use]
pub fn code_for_activity(activity: &str) -> Option<&'static str> {
    ACTIVITIES
        .iter()
        .position(|known| *known == activity)
        .map(|idx| CLASSIFICATION_CODES[idx])
}

/// Whether `activity` is one of the catalog activities.
#[cfg(test)]
pub(crate) fn is_known_activity(activity: &str) -> bool {
    ACTIVITIES.contains(&activity)
}
