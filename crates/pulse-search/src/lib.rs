//! # pulse-search
//!
//! Lookup over the enterprise directory.
//!
//! The directory is either read from a JSONL file or synthesized from a
//! seeded RNG (see [`directory`]). [`search`] is a linear, case-insensitive
//! substring filter on the enterprise name.

pub mod directory;
pub mod error;

pub use directory::Directory;
pub use error::SearchError;

use pulse_core::entities::DirectoryEntry;

/// Most results a lookup returns.
pub const MAX_RESULTS: usize = 10;

/// Shortest query, in characters, that is matched at all.
pub const MIN_QUERY_CHARS: usize = 2;

/// Match `query` against enterprise names, keeping directory order.
///
/// The query is trimmed first. Queries shorter than [`MIN_QUERY_CHARS`]
/// return nothing rather than the whole directory.
#[must_use]
pub fn search<'a>(query: &str, entries: &'a [DirectoryEntry]) -> Vec<&'a DirectoryEntry> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        tracing::debug!(query, "query too short, skipping lookup");
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&DirectoryEntry> = entries
        .iter()
        .filter(|entry| entry.enterprise_name.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .collect();

    tracing::debug!(query, matches = matches.len(), "directory lookup");
    matches
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn entry(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            enterprise_name: name.to_string(),
            district: "Pune".to_string(),
            activity: "Metal Fabrication".to_string(),
            classification_code: "7308".to_string(),
        }
    }

    fn names<'a>(found: &[&'a DirectoryEntry]) -> Vec<&'a str> {
        found.iter().map(|e| e.enterprise_name.as_str()).collect()
    }

    #[test]
    fn case_insensitive_match() {
        let entries = vec![entry("ACME Forgings"), entry("Bharat Foods")];
        assert_eq!(names(&search("acme", &entries)), vec!["ACME Forgings"]);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("   ")]
    #[case(" a ")]
    fn short_queries_return_nothing(#[case] query: &str) {
        let entries = vec![entry("ACME Forgings"), entry("Apex Auto")];
        assert!(search(query, &entries).is_empty());
    }

    #[test]
    fn query_is_trimmed() {
        let entries = vec![entry("Sai Polymers")];
        assert_eq!(search("  poly  ", &entries).len(), 1);
    }

    #[test]
    fn results_capped_in_directory_order() {
        let entries: Vec<DirectoryEntry> = (0..25).map(|i| entry(&format!("Unit {i:02} Textiles"))).collect();
        let found = search("textiles", &entries);
        assert_eq!(found.len(), MAX_RESULTS);
        assert_eq!(found[0].enterprise_name, "Unit 00 Textiles");
        assert_eq!(found[9].enterprise_name, "Unit 09 Textiles");
    }

    #[test]
    fn no_match_is_empty() {
        let entries = vec![entry("Sai Polymers")];
        assert!(search("zz", &entries).is_empty());
    }

    #[test]
    fn multibyte_query_counts_chars() {
        let entries = vec![entry("Café Délices"), entry("Plain Foods")];
        assert_eq!(names(&search("é", &entries)), Vec::<&str>::new());
        assert_eq!(names(&search("CAFÉ", &entries)), vec!["Café Délices"]);
    }
}
