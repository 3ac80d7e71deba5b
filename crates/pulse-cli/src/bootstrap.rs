use std::path::PathBuf;

use anyhow::Context;
use pulse_config::PulseConfig;

use crate::cli::GlobalFlags;

/// Load configuration, applying the `--data-dir` override last.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PulseConfig> {
    load_dotenv(flags)?;

    let mut config = PulseConfig::load().context("failed to load configuration")?;
    if let Some(data_dir) = &flags.data_dir {
        config.general.data_dir.clone_from(data_dir);
        config.validate()?;
    }
    tracing::debug!(
        data_dir = %config.general.data_dir,
        database = %config.database_path().display(),
        "configuration loaded"
    );
    Ok(config)
}

/// Prefer a `.env` inside the data directory, then the working directory.
fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(data_dir) = &flags.data_dir {
        let env_path = PathBuf::from(data_dir).join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
