use crate::credentials::CredentialProvider;
use crate::model::{Recipe, SearchResponse};
use crate::SearchError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Anything that can turn a query into a list of recipes
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError>;
}

/// Recipe source backed by the Edamam search API
pub struct EdamamClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl EdamamClient {
    /// Create a client for `base_url`. Without a timeout a hung request waits forever.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(EdamamClient {
            client: builder.build()?,
            base_url: base_url.into(),
            credentials,
        })
    }
}

#[async_trait]
impl RecipeSource for EdamamClient {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let credentials = self.credentials.credentials();
        debug!("Searching {} for {:?}", self.base_url, query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("app_id", credentials.app_id.as_str()),
                ("app_key", credentials.app_key.as_str()),
            ])
            .send()
            .await?;

        // The status is not checked; error bodies fail to decode instead
        debug!("Search response status: {}", response.status());
        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed.into_recipes())
    }
}
