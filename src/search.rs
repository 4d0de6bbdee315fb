use crate::client::RecipeSource;
use crate::session::{SearchSession, SessionSnapshot, Settlement};
use crate::SearchError;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Drives a [`SearchSession`] against a [`RecipeSource`].
///
/// Cloning is cheap and every clone shares the same session, so submits may be
/// spawned onto separate tasks and overlap.
#[derive(Clone)]
pub struct Searcher {
    source: Arc<dyn RecipeSource>,
    session: Arc<Mutex<SearchSession>>,
    updates: Arc<watch::Sender<SessionSnapshot>>,
}

impl Searcher {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        let (updates, _) = watch::channel(SessionSnapshot::default());
        Searcher {
            source,
            session: Arc::new(Mutex::new(SearchSession::new())),
            updates: Arc::new(updates),
        }
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn set_query(&self, query: impl Into<String>) {
        let mut session = self.session.lock().await;
        session.set_query(query);
        self.publish(&session);
    }

    /// Fill the query from an example chip given by 1-based number or name
    pub async fn select_example(&self, reference: &str) -> Result<String, SearchError> {
        let mut session = self.session.lock().await;
        let query = session.select_example(reference)?.to_string();
        self.publish(&session);
        Ok(query)
    }

    /// Submit the current query.
    ///
    /// Fetch and decode failures are logged and leave the results empty; they
    /// are never returned.
    pub async fn submit(&self) -> Settlement {
        let ticket = {
            let mut session = self.session.lock().await;
            let ticket = session.begin_search();
            self.publish(&session);
            ticket
        };

        info!("Searching recipes for {:?}", ticket.query());
        let outcome = self.source.search(ticket.query()).await;
        if let Err(e) = &outcome {
            error!("Error fetching recipes: {}", e);
        }

        let mut session = self.session.lock().await;
        let settlement = session.settle(&ticket, outcome);
        if let Settlement::Applied { count, .. } = settlement {
            info!("Found {} recipes for {:?}", count, ticket.query());
            self.publish(&session);
        }
        settlement
    }

    /// Set the query and submit it in one step, like typing and pressing enter
    pub async fn search(&self, query: impl Into<String>) -> Settlement {
        self.set_query(query).await;
        self.submit().await
    }

    fn publish(&self, session: &SearchSession) {
        self.updates.send_replace(session.snapshot());
    }
}
