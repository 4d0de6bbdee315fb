use thiserror::Error;

/// Errors that can occur during a recipe search
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure, or the HTTP client could not be built
    #[error("Failed to fetch recipes: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not JSON or did not carry a `hits` list
    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to write rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Example query chip that does not exist
    #[error("Unknown example query: {0}")]
    InvalidSuggestion(String),
}
