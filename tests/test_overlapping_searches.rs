use async_trait::async_trait;
use recipe_search::{Recipe, RecipeSearch, RecipeSource, SearchError, Settlement};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};

/// Holds each search open until the test releases it
struct GatedSource {
    gates: Mutex<HashMap<String, oneshot::Receiver<Vec<Recipe>>>>,
    started: mpsc::UnboundedSender<String>,
}

#[async_trait]
impl RecipeSource for GatedSource {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let gate = self.gates.lock().await.remove(query);
        self.started.send(query.to_string()).unwrap();
        match gate {
            Some(gate) => Ok(gate.await.unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }
}

fn recipe(label: &str) -> Recipe {
    Recipe {
        uri: format!("uri-{label}"),
        label: label.to_string(),
        url: format!("https://example.com/{label}"),
        ..Default::default()
    }
}

struct Harness {
    source: Arc<GatedSource>,
    started: mpsc::UnboundedReceiver<String>,
    releases: HashMap<String, oneshot::Sender<Vec<Recipe>>>,
}

fn harness(queries: &[&str]) -> Harness {
    let (started_tx, started) = mpsc::unbounded_channel();
    let mut gates = HashMap::new();
    let mut releases = HashMap::new();
    for query in queries {
        let (tx, rx) = oneshot::channel();
        gates.insert(query.to_string(), rx);
        releases.insert(query.to_string(), tx);
    }
    Harness {
        source: Arc::new(GatedSource {
            gates: Mutex::new(gates),
            started: started_tx,
        }),
        started,
        releases,
    }
}

#[tokio::test]
async fn test_older_response_arriving_last_is_discarded() {
    let mut h = harness(&["Biryani", "Nihari"]);
    let searcher = RecipeSearch::builder().source(h.source.clone()).build().unwrap();

    searcher.set_query("Biryani").await;
    let first = tokio::spawn({
        let searcher = searcher.clone();
        async move { searcher.submit().await }
    });
    assert_eq!(h.started.recv().await.unwrap(), "Biryani");

    searcher.set_query("Nihari").await;
    let second = tokio::spawn({
        let searcher = searcher.clone();
        async move { searcher.submit().await }
    });
    assert_eq!(h.started.recv().await.unwrap(), "Nihari");

    // Newest resolves first
    h.releases.remove("Nihari").unwrap().send(vec![recipe("Nihari")]).unwrap();
    assert_eq!(
        second.await.unwrap(),
        Settlement::Applied {
            count: 1,
            failed: false
        }
    );
    let snapshot = searcher.snapshot().await;
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.results[0].label, "Nihari");

    h.releases
        .remove("Biryani")
        .unwrap()
        .send(vec![recipe("Biryani"), recipe("Biryani 2")])
        .unwrap();
    assert_eq!(first.await.unwrap(), Settlement::Stale);

    let snapshot = searcher.snapshot().await;
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.results.len(), 1);
    assert_eq!(snapshot.results[0].label, "Nihari");
}

#[tokio::test]
async fn test_loading_holds_until_latest_settles() {
    let mut h = harness(&["Haleem", "Chapli Kabab"]);
    let searcher = RecipeSearch::builder().source(h.source.clone()).build().unwrap();

    searcher.set_query("Haleem").await;
    let first = tokio::spawn({
        let searcher = searcher.clone();
        async move { searcher.submit().await }
    });
    assert_eq!(h.started.recv().await.unwrap(), "Haleem");

    searcher.set_query("Chapli Kabab").await;
    let second = tokio::spawn({
        let searcher = searcher.clone();
        async move { searcher.submit().await }
    });
    assert_eq!(h.started.recv().await.unwrap(), "Chapli Kabab");

    // Oldest resolves first: its results never show and loading stays on
    h.releases.remove("Haleem").unwrap().send(vec![recipe("Haleem")]).unwrap();
    assert_eq!(first.await.unwrap(), Settlement::Stale);
    let snapshot = searcher.snapshot().await;
    assert!(snapshot.is_loading);
    assert!(snapshot.results.is_empty());

    h.releases
        .remove("Chapli Kabab")
        .unwrap()
        .send(vec![recipe("Chapli Kabab")])
        .unwrap();
    second.await.unwrap();

    let snapshot = searcher.snapshot().await;
    assert!(!snapshot.is_loading);
    assert!(snapshot.has_searched);
    assert_eq!(snapshot.results[0].label, "Chapli Kabab");
}
