//! Command execution context
//!
//! Loads configuration once, opens the session store and builds the API
//! client around it. Every command receives the same injected pieces.

use std::sync::Arc;
use std::time::Duration;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GatewayClient;
use crate::config::Config;
use crate::error::{Result, SessionError};
use crate::session::{Route, SessionStore};

/// Context for command execution containing config, session, client, and output format.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Session store shared with the client
    pub session: Arc<SessionStore>,
    /// API client (Arc-wrapped for concurrent requests)
    pub client: Arc<GatewayClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// The API base URL is resolved here, once, and stays fixed for the run.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let session_path = config.resolve_session_path(opts.session_ref())?;
        log::debug!("Session file: {}", session_path.display());
        let session = Arc::new(SessionStore::open(session_path));

        let api_url = config.resolve_api_url(opts.api_url_ref())?;
        let client = Arc::new(GatewayClient::with_timeout(
            api_url,
            session.clone(),
            Duration::from_secs(config.preferences.timeout_secs),
        )?);

        let format = opts.format.unwrap_or_else(|| {
            config
                .preferences
                .format
                .as_deref()
                .and_then(|f| f.parse().ok())
                .unwrap_or_default()
        });

        Ok(Self {
            config,
            session,
            client,
            format,
        })
    }

    /// Apply the page guard for `route`.
    ///
    /// Fails with [`SessionError::NotLoggedIn`] when the guard would send an
    /// anonymous user to the login view.
    pub fn require_route(&self, route: Route) -> Result<()> {
        match route.guard(&self.session) {
            Route::Login if route.is_protected() => Err(SessionError::NotLoggedIn.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::UserProfile;
    use tempfile::tempdir;

    fn opts_in(dir: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            format: None,
            config: Some(dir.join("config.yaml").to_string_lossy().to_string()),
            session: Some(dir.join("session.json").to_string_lossy().to_string()),
            api_url: None,
        }
    }

    #[test]
    fn test_context_defaults() {
        let temp = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_in(temp.path())).unwrap();

        assert_eq!(ctx.client.base_url(), crate::config::DEFAULT_API_URL);
        assert_eq!(ctx.format, OutputFormat::Pretty);
        assert!(!ctx.session.is_authenticated());
    }

    #[test]
    fn test_context_reads_config_file() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("config.yaml"),
            "api_url: https://dock.example.com/api/v1\npreferences:\n  format: json\n",
        )
        .unwrap();

        let ctx = CommandContext::new(&opts_in(temp.path())).unwrap();
        assert_eq!(ctx.client.base_url(), "https://dock.example.com/api/v1");
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn test_flag_overrides_config() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("config.yaml"),
            "api_url: https://dock.example.com/api/v1\n",
        )
        .unwrap();

        let mut opts = opts_in(temp.path());
        opts.api_url = Some("http://127.0.0.1:9000/api/v1".to_string());
        opts.format = Some(OutputFormat::Table);

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.client.base_url(), "http://127.0.0.1:9000/api/v1");
        assert_eq!(ctx.format, OutputFormat::Table);
    }

    #[test]
    fn test_require_route() {
        let temp = tempdir().unwrap();
        let ctx = CommandContext::new(&opts_in(temp.path())).unwrap();

        assert!(ctx.require_route(Route::Dashboard).is_err());
        assert!(ctx.require_route(Route::Register).is_ok());

        ctx.session
            .login(
                "tok",
                &UserProfile {
                    name: "Dock Admin".to_string(),
                    email: "admin@example.com".to_string(),
                    role: "admin".to_string(),
                    avatar: None,
                },
            )
            .unwrap();
        assert!(ctx.require_route(Route::Dashboard).is_ok());
    }
}
