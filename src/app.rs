//! Application loop.
//!
//! [`App`] owns the only live [`AppState`]. Each event taken from the
//! [`EventHandler`] is passed through [`handle`], the resulting state
//! replaces the old one, and any requested lookup is spawned before the next
//! frame is drawn.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::event::{handle, Command, Event, EventHandler, EventResult, DEFAULT_TICK_RATE};
use crate::fetch::{
    spawn_fetch, DefinitionSource, UrbanDictionary, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT,
};
use crate::state::AppState;
use crate::ui::Ui;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Define endpoint; the term is appended as `?term=`.
    pub endpoint: String,
    /// Deadline for each lookup.
    pub timeout: Duration,
    /// Redraw interval.
    pub tick_rate: Duration,
    /// Where to write logs. No logs are written when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            tick_rate: DEFAULT_TICK_RATE,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main application.
pub struct App {
    /// Application state
    state: AppState,
    /// Application configuration
    config: AppConfig,
    /// Where lookups go
    source: Arc<dyn DefinitionSource>,
    /// Cancels the lookup currently in flight
    in_flight: Option<CancellationToken>,
    /// Current view controller
    ui: Ui,
    /// Should the application exit?
    should_quit: bool,
}

impl App {
    /// Creates an application that looks words up over HTTP.
    pub fn new(config: AppConfig, ui: Ui) -> Result<Self> {
        let source = UrbanDictionary::new(config.endpoint.clone(), config.timeout)?;
        Ok(Self::with_source(config, ui, Arc::new(source)))
    }

    /// Creates an application backed by an arbitrary definition source.
    pub fn with_source(config: AppConfig, ui: Ui, source: Arc<dyn DefinitionSource>) -> Self {
        Self {
            state: AppState::new(),
            config,
            source,
            in_flight: None,
            ui,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the application main loop until quit.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<()> {
        let tx = events.sender();

        // Terminals only report size changes, so seed the viewport.
        let size = terminal.size()?;
        self.process(Event::Resize(size.width, size.height), &tx);

        while !self.should_quit {
            terminal.draw(|frame| self.ui.render(frame, &self.state))?;

            match events.next().await {
                Some(event) => self.process(event, &tx),
                None => break,
            }
        }

        self.cancel_in_flight();
        info!("exiting");
        Ok(())
    }

    /// Apply one event and start whatever it asks for. Lookups report back
    /// through `tx`.
    pub fn process(&mut self, event: Event, tx: &UnboundedSender<Event>) {
        if let Event::Tick = event {
            self.ui.update_animations();
        }

        let state = std::mem::take(&mut self.state);
        let (state, result) = handle(state, event);
        self.state = state;

        match result {
            EventResult::Exit => self.should_quit = true,
            EventResult::Dispatch(command) => self.dispatch(command, tx),
            EventResult::Continue | EventResult::Ignored => {}
        }
    }

    fn dispatch(&mut self, command: Command, tx: &UnboundedSender<Event>) {
        match command {
            Command::Fetch { query, generation } => {
                // Only the newest lookup matters; its predecessor's answer
                // would be discarded anyway.
                self.cancel_in_flight();

                let cancel = CancellationToken::new();
                self.in_flight = Some(cancel.clone());

                info!(%query, generation, "looking up");
                spawn_fetch(
                    Arc::clone(&self.source),
                    query,
                    generation,
                    self.config.timeout,
                    cancel,
                    tx.clone(),
                );
            }
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(cancel) = self.in_flight.take() {
            debug!("cancelling in-flight lookup");
            cancel.cancel();
        }
    }
}
