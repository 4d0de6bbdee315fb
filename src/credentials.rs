use crate::config::ApiConfig;

/// Application credentials attached to every search request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

/// Supplies credentials at request time.
///
/// Consulted once per request, so implementations may pick up changes between searches.
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Credentials;
}

/// Fixed credentials
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Credentials);

impl StaticCredentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        StaticCredentials(Credentials {
            app_id: app_id.into(),
            app_key: app_key.into(),
        })
    }
}

impl CredentialProvider for StaticCredentials {
    fn credentials(&self) -> Credentials {
        self.0.clone()
    }
}

/// Credentials from configuration, falling back to `EDAMAM_APP_ID` and
/// `EDAMAM_APP_KEY` in the environment.
///
/// Missing values are sent as empty parameters; the API rejects the request.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCredentials {
    app_id: Option<String>,
    app_key: Option<String>,
}

impl ConfiguredCredentials {
    pub fn new(config: &ApiConfig) -> Self {
        ConfiguredCredentials {
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
        }
    }
}

impl CredentialProvider for ConfiguredCredentials {
    fn credentials(&self) -> Credentials {
        // Try config first, then fall back to environment variable
        let app_id = self
            .app_id
            .clone()
            .or_else(|| std::env::var("EDAMAM_APP_ID").ok())
            .unwrap_or_default();
        let app_key = self
            .app_key
            .clone()
            .or_else(|| std::env::var("EDAMAM_APP_KEY").ok())
            .unwrap_or_default();

        Credentials { app_id, app_key }
    }
}
