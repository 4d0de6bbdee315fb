use std::sync::Arc;
use std::time::Duration;

use crate::{
    ConfiguredCredentials, CredentialProvider, EdamamClient, RecipeSource, SearchConfig,
    SearchError, Searcher, StaticCredentials, DEFAULT_BASE_URL,
};

/// Builder for configuring a [`Searcher`]
#[derive(Default)]
pub struct RecipeSearchBuilder {
    base_url: Option<String>,
    credentials: Option<Arc<dyn CredentialProvider>>,
    timeout: Option<Duration>,
    source: Option<Arc<dyn RecipeSource>>,
}

impl RecipeSearchBuilder {
    /// Start from loaded configuration
    ///
    /// Credentials fall back to `EDAMAM_APP_ID` / `EDAMAM_APP_KEY` when the
    /// configuration leaves them unset.
    pub fn config(mut self, config: &SearchConfig) -> Self {
        self.base_url = Some(config.api.base_url.clone());
        self.credentials = Some(Arc::new(ConfiguredCredentials::new(&config.api)));
        self.timeout = config.timeout();
        self
    }

    /// Set the search endpoint
    ///
    /// # Example
    /// ```
    /// use recipe_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .base_url("http://localhost:8080/search");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use fixed credentials
    ///
    /// # Example
    /// ```
    /// use recipe_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .credentials("my-app-id", "my-app-key");
    /// ```
    pub fn credentials(mut self, app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        self.credentials = Some(Arc::new(StaticCredentials::new(app_id, app_key)));
        self
    }

    /// Use a custom credential provider, consulted on every request
    pub fn credential_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(provider);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_search::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Search through a custom source instead of the HTTP API.
    /// Endpoint, credential and timeout settings are ignored.
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the searcher
    ///
    /// # Errors
    /// Returns `SearchError::Network` if the HTTP client cannot be created
    pub fn build(self) -> Result<Searcher, SearchError> {
        let source: Arc<dyn RecipeSource> = match self.source {
            Some(source) => source,
            None => {
                let credentials: Arc<dyn CredentialProvider> = match self.credentials {
                    Some(credentials) => credentials,
                    None => Arc::new(ConfiguredCredentials::default()),
                };
                let base_url = self
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
                Arc::new(EdamamClient::new(base_url, credentials, self.timeout)?)
            }
        };

        Ok(Searcher::new(source))
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for a recipe searcher
    ///
    /// # Example
    /// ```
    /// use recipe_search::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
