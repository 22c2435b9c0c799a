//! Application state.
//!
//! [`AppState`] is a plain value. The event handler consumes one and returns
//! the next, so every rendered frame sees a state that was fully built by a
//! single event.

mod definition;
mod input;

pub use definition::{DefinitionEntry, ResultSet};
pub use input::QueryInput;

use crate::fetch::FetchError;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A request that has been dispatched and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub generation: u64,
    pub query: String,
}

/// What the user is currently looking at, derived from [`AppState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Status<'a> {
    /// Nothing searched yet.
    Idle,
    /// A request for this query is in flight.
    Fetching(&'a str),
    /// The last request succeeded.
    Displaying(&'a ResultSet),
    /// The last request failed. Older results may still be on screen.
    Failed(&'a FetchError),
}

/// Application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The query being edited.
    pub input: QueryInput,
    /// Entries from the last successful fetch.
    pub results: ResultSet,
    /// Current terminal size.
    pub viewport: Viewport,
    /// Cause of the last failed fetch, cleared on success.
    pub last_error: Option<FetchError>,
    /// Generation of the most recently dispatched fetch.
    pub generation: u64,
    /// The fetch still waiting for its response, if any.
    pub pending: Option<PendingFetch>,
    /// Whether any fetch has succeeded yet.
    pub has_results: bool,
}

impl AppState {
    /// Creates the initial state: empty query, no results, zero viewport.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> String {
        self.input.value()
    }

    pub fn status(&self) -> Status<'_> {
        if let Some(pending) = &self.pending {
            return Status::Fetching(&pending.query);
        }
        match (&self.last_error, self.has_results) {
            (Some(err), _) => Status::Failed(err),
            (None, true) => Status::Displaying(&self.results),
            (None, false) => Status::Idle,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }
}
