use pulse_auth::Session;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    key: Option<String>,
    name: Option<String>,
    enterprise_name: Option<String>,
    activity: Option<String>,
    classification_code: Option<String>,
    logged_in_at: Option<String>,
    session_file: String,
}

impl AuthStatusResponse {
    fn new(session: Option<Session>, session_file: String) -> Self {
        match session {
            Some(session) => Self {
                authenticated: true,
                key: Some(session.key),
                name: Some(session.name),
                enterprise_name: Some(session.enterprise_name),
                activity: Some(session.activity),
                classification_code: Some(session.classification_code),
                logged_in_at: Some(session.logged_in_at.to_rfc3339()),
                session_file,
            },
            None => Self {
                authenticated: false,
                key: None,
                name: None,
                enterprise_name: None,
                activity: None,
                classification_code: None,
                logged_in_at: None,
                session_file,
            },
        }
    }
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = AuthStatusResponse::new(
        ctx.sessions.load(),
        ctx.sessions.path().display().to_string(),
    );
    output(&status, flags.format)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn missing_session_is_unauthenticated() {
        let status = AuthStatusResponse::new(None, "session.json".into());
        assert!(!status.authenticated);
        assert!(status.key.is_none());
    }

    #[test]
    fn present_session_reports_user() {
        let session = Session {
            key: "demo@marketpulse.com".into(),
            name: "Demo User".into(),
            enterprise_name: "Demo Electronics Ltd.".into(),
            activity: "Electronics Manufacturing".into(),
            classification_code: "8542".into(),
            logged_in_at: Utc::now(),
        };
        let status = AuthStatusResponse::new(Some(session), "session.json".into());
        assert!(status.authenticated);
        assert_eq!(status.classification_code.as_deref(), Some("8542"));
    }
}
