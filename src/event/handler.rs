//! State transitions.
//!
//! [`handle`] takes the current [`AppState`] by value together with one
//! event and returns the next state plus what the application should do
//! about it. It performs no I/O; lookups are requested through
//! [`EventResult::Dispatch`] and run elsewhere.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::Event;
use crate::fetch::FetchError;
use crate::state::{AppState, PendingFetch, ResultSet, Viewport};

/// Work the application must start on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up `query`. The response must carry the same `generation`.
    Fetch { query: String, generation: u64 },
}

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, continue running
    Continue,
    /// Exit the application
    Exit,
    /// Event was ignored
    Ignored,
    /// Event was handled and requires a command to run
    Dispatch(Command),
}

/// Apply one event to `state`.
pub fn handle(state: AppState, event: Event) -> (AppState, EventResult) {
    match event {
        Event::Key(key) => handle_key_event(state, key),
        Event::Resize(width, height) => {
            let state = AppState {
                viewport: Viewport::new(width, height),
                ..state
            };
            (state, EventResult::Continue)
        }
        Event::Fetched {
            generation,
            outcome,
        } => handle_fetched(state, generation, outcome),
        Event::Tick => (state, EventResult::Continue),
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

fn handle_key_event(mut state: AppState, key: KeyEvent) -> (AppState, EventResult) {
    // Release and repeat reports would double every keystroke on some terminals.
    if key.kind != KeyEventKind::Press {
        return (state, EventResult::Ignored);
    }

    if is_quit(&key) {
        return (state, EventResult::Exit);
    }

    if key.code == KeyCode::Enter {
        return submit(state);
    }

    let result = if state.input.handle_key(key) {
        EventResult::Continue
    } else {
        EventResult::Ignored
    };
    (state, result)
}

fn submit(state: AppState) -> (AppState, EventResult) {
    let query = state.query();
    if query.trim().is_empty() {
        return (state, EventResult::Ignored);
    }

    let generation = state.generation.wrapping_add(1);
    debug!(%query, generation, "submitting lookup");

    let state = AppState {
        generation,
        pending: Some(PendingFetch {
            generation,
            query: query.clone(),
        }),
        ..state
    };
    (state, EventResult::Dispatch(Command::Fetch { query, generation }))
}

fn handle_fetched(
    state: AppState,
    generation: u64,
    outcome: Result<ResultSet, FetchError>,
) -> (AppState, EventResult) {
    if generation != state.generation {
        debug!(generation, current = state.generation, "dropping stale response");
        return (state, EventResult::Ignored);
    }

    let state = match outcome {
        Ok(results) => AppState {
            results,
            last_error: None,
            pending: None,
            has_results: true,
            ..state
        },
        // Keep the previous results on screen.
        Err(err) => AppState {
            last_error: Some(err),
            pending: None,
            ..state
        },
    };
    (state, EventResult::Continue)
}
