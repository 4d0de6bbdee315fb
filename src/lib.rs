//! Search recipes by ingredient and render the results.
//!
//! A [`Searcher`] owns one search session: the current query, the latest
//! results and the loading flags. [`render`] turns a snapshot of that session
//! into terminal text or an HTML page.
//!
//! ```no_run
//! # use recipe_search::{render, RecipeSearch};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let searcher = RecipeSearch::builder()
//!     .credentials("app-id", "app-key")
//!     .build()?;
//!
//! searcher.search("Chicken Karahi").await;
//! let snapshot = searcher.snapshot().await;
//! println!("{}", render::view_snapshot(&snapshot));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod render;
pub mod search;
pub mod session;
pub mod suggestions;

pub use builder::{RecipeSearch, RecipeSearchBuilder};
pub use client::{EdamamClient, RecipeSource};
pub use config::{load_config, ApiConfig, SearchConfig, DEFAULT_BASE_URL};
pub use credentials::{ConfiguredCredentials, CredentialProvider, Credentials, StaticCredentials};
pub use error::SearchError;
pub use model::{Hit, Ingredient, Recipe, SearchResponse};
pub use render::{RecipeCard, ResultsView};
pub use search::Searcher;
pub use session::{SearchSession, SearchTicket, SessionSnapshot, Settlement};
pub use suggestions::EXAMPLE_QUERIES;
