use pulse_config::PulseConfig;
use pulse_core::responses::SearchResultsResponse;
use pulse_search::{Directory, search};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::output::{output, print_table};

/// Handle `mpulse search`.
pub fn handle(args: &SearchArgs, config: &PulseConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let directory = Directory::load(&config.directory)?;
    let results: Vec<_> = search(&args.query, &directory.entries)
        .into_iter()
        .cloned()
        .collect();

    let response = SearchResultsResponse {
        query: args.query.trim().to_string(),
        total_results: results.len(),
        results,
    };

    if flags.wants_table() {
        let rows = response
            .results
            .iter()
            .map(|entry| {
                vec![
                    entry.enterprise_name.clone(),
                    entry.district.clone(),
                    entry.activity.clone(),
                    entry.classification_code.clone(),
                ]
            })
            .collect::<Vec<_>>();
        print_table(&["enterprise", "district", "activity", "code"], &rows);
        return Ok(());
    }
    output(&response, flags.format)
}
