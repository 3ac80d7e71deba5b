use anyhow::Context;
use pulse_auth::{Session, SessionStore};
use pulse_config::PulseConfig;
use pulse_db::PulseDb;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: PulseDb,
    pub config: PulseConfig,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Open the database and bind the session store to the data directory.
    pub async fn init(config: PulseConfig) -> anyhow::Result<Self> {
        let db = PulseDb::open(&config).await.with_context(|| {
            format!(
                "failed to open database at {}",
                config.database_path().display()
            )
        })?;
        let sessions = SessionStore::new(config.data_dir());
        Ok(Self {
            db,
            config,
            sessions,
        })
    }

    /// The signed-in session, or an error telling the user to log in.
    pub fn require_session(&self) -> anyhow::Result<Session> {
        Ok(self.sessions.require()?)
    }
}
