//! Event handling for the dictionary TUI.
//!
//! Terminal input, periodic ticks and finished lookups all arrive through
//! one unbounded channel, so the application handles them one at a time in
//! arrival order.

pub mod handler;

pub use handler::{handle, Command, EventResult};

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::warn;

use crate::fetch::FetchError;
use crate::state::ResultSet;

/// Default redraw interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// A lookup finished
    Fetched {
        generation: u64,
        outcome: Result<ResultSet, FetchError>,
    },
    /// Regular tick event for animations
    Tick,
}

/// Stream of application events.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a handler without any producers attached.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Create a handler fed by the terminal and a tick timer.
    pub fn with_terminal(tick_rate: Duration) -> Self {
        let handler = Self::new();

        let tx = handler.sender();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut ticks = tokio::time::interval(tick_rate);

            loop {
                let event = tokio::select! {
                    _ = ticks.tick() => Event::Tick,
                    maybe = reader.next() => match maybe {
                        Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                        Some(Ok(CrosstermEvent::Resize(width, height))) => {
                            Event::Resize(width, height)
                        }
                        Some(Ok(_)) => continue,
                        Some(Err(err)) => {
                            warn!(error = %err, "failed to read terminal event");
                            tokio::time::sleep(Duration::from_millis(10)).await;
                            continue;
                        }
                        None => break,
                    },
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        handler
    }

    /// A sender that feeds this handler. Lookup tasks report through it.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    fn poll_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<Event>> {
        Pin::new(&mut self.rx).poll_recv(cx)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream for EventHandler {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.poll_event(cx)
    }
}
