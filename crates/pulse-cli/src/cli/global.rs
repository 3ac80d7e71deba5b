use clap::ValueEnum;

/// How a command prints its response.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns for dashboards and search hits.
    Table,
    /// Single-line JSON for piping.
    Raw,
}

/// Flags shared by every `mpulse` command.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub data_dir: Option<String>,
}

impl GlobalFlags {
    /// Ranked rows to show: `--limit`, else `general.default_limit`.
    #[must_use]
    pub fn limit_or(&self, default_limit: u32) -> u32 {
        self.limit.unwrap_or(default_limit)
    }

    #[must_use]
    pub fn wants_table(&self) -> bool {
        self.format == OutputFormat::Table
    }
}
