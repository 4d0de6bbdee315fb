//! Search Session state.
//!
//! Every dispatched search takes a sequence number. A settlement is applied only
//! when it carries the most recent one, so overlapping searches resolve to the
//! last query the user submitted regardless of which response arrives first.

use crate::model::Recipe;
use crate::suggestions;
use crate::SearchError;
use log::debug;

/// Handle for one dispatched search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The query as it stood when the search was submitted
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What happened to a settled search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The search was the latest one and its outcome is now visible.
    /// `failed` is set when the fetch errored and the results were left empty.
    Applied { count: usize, failed: bool },
    /// A newer search was dispatched meanwhile; the outcome was discarded
    Stale,
}

/// Point-in-time copy of the session, handed to renderers and observers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub query: String,
    pub results: Vec<Recipe>,
    pub is_loading: bool,
    pub has_searched: bool,
}

#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    results: Vec<Recipe>,
    is_loading: bool,
    has_searched: bool,
    latest: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Replace the query verbatim. Does not search.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Overwrite the query with the example chip at `index`
    pub fn select_suggestion(&mut self, index: usize) -> Result<&str, SearchError> {
        let example = suggestions::by_index(index)
            .ok_or_else(|| SearchError::InvalidSuggestion((index + 1).to_string()))?;
        self.query = example.to_string();
        Ok(&self.query)
    }

    /// Overwrite the query with the example chip referenced by number or name
    pub fn select_example(&mut self, reference: &str) -> Result<&str, SearchError> {
        let example = suggestions::resolve(reference)
            .ok_or_else(|| SearchError::InvalidSuggestion(reference.to_string()))?;
        self.query = example.to_string();
        Ok(&self.query)
    }

    /// Mark a new search as in flight and clear stale results
    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest += 1;
        self.is_loading = true;
        self.has_searched = true;
        self.results.clear();

        SearchTicket {
            seq: self.latest,
            query: self.query.clone(),
        }
    }

    /// Apply the outcome of a search if it is still the latest one
    pub fn settle(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<Recipe>, SearchError>,
    ) -> Settlement {
        if ticket.seq != self.latest {
            debug!(
                "Discarding results for {:?} (search #{}, latest is #{})",
                ticket.query, ticket.seq, self.latest
            );
            return Settlement::Stale;
        }

        let failed = outcome.is_err();
        self.results = outcome.unwrap_or_default();
        self.is_loading = false;

        Settlement::Applied {
            count: self.results.len(),
            failed,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            query: self.query.clone(),
            results: self.results.clone(),
            is_loading: self.is_loading,
            has_searched: self.has_searched,
        }
    }
}
