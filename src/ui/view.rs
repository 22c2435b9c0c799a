//! Turns an [`AppState`] into styled lines.
//!
//! Layout, top to bottom:
//!
//! ```text
//! > query
//!
//! headword  by author on date
//!
//! definition, wrapped
//!
//! example, wrapped
//!
//! thumbs-up: N
//! thumbs-down: N
//!
//! definition 1 of N
//! searching "query" ... / error: ...
//! ```
//!
//! Only the first entry of the result set is ever shown.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::wrap::{wrap_paragraphs, WrappedLine};
use super::{RenderConfig, Theme};
use crate::state::{AppState, DefinitionEntry};

/// Builds the body of the screen for one state.
pub struct View<'a> {
    config: &'a RenderConfig,
    theme: &'a Theme,
}

impl<'a> View<'a> {
    pub fn new(config: &'a RenderConfig, theme: &'a Theme) -> Self {
        Self { config, theme }
    }

    /// All body lines for `state`. `spinner` is drawn next to a pending
    /// lookup.
    pub fn lines(&self, state: &AppState, spinner: char) -> Vec<Line<'static>> {
        let width = self.config.wrap_width(state.viewport.width);
        let mut lines = vec![self.input_line(state, width)];

        if let Some(entry) = state.results.first() {
            self.push_entry(&mut lines, entry, width);

            if state.results.len() > 1 {
                lines.push(Line::default());
                lines.push(self.padded(vec![Span::styled(
                    format!("definition 1 of {}", state.results.len()),
                    self.theme.byline_style,
                )]));
            }
        }

        if let Some(pending) = &state.pending {
            lines.push(Line::default());
            lines.push(self.padded(vec![Span::styled(
                format!("{spinner} searching \"{}\"", pending.query),
                self.theme.pending_style,
            )]));
        }

        // A pending lookup supersedes the previous failure.
        if let (Some(err), None) = (&state.last_error, &state.pending) {
            lines.push(Line::default());
            let message = format!("error: {err}");
            self.push_wrapped(&mut lines, &message, width, self.theme.error_style);
        }

        lines
    }

    fn input_line(&self, state: &AppState, width: usize) -> Line<'static> {
        let prompt = Span::styled(self.config.prompt.clone(), self.theme.prompt_style);

        if state.input.is_empty() {
            return self.padded(vec![
                prompt,
                Span::styled(self.config.placeholder.clone(), self.theme.placeholder_style),
            ]);
        }

        let room = width.saturating_sub(self.config.prompt.width());
        let (shown, _) = state.input.visible(room);
        self.padded(vec![prompt, Span::raw(shown)])
    }

    fn push_entry(&self, lines: &mut Vec<Line<'static>>, entry: &DefinitionEntry, width: usize) {
        if !entry.headword.is_empty() {
            lines.push(Line::default());
            let mut spans = vec![Span::styled(entry.headword.clone(), self.theme.headword_style)];
            if let Some(byline) = entry.byline() {
                spans.push(Span::styled(format!("  {byline}"), self.theme.byline_style));
            }
            lines.push(self.padded(spans));
        }

        lines.push(Line::default());
        self.push_wrapped(lines, &entry.definition, width, self.theme.definition_style);

        if !entry.example.is_empty() {
            lines.push(Line::default());
            self.push_wrapped(lines, &entry.example, width, self.theme.example_style);
        }

        lines.push(Line::default());
        for text in [
            format!("thumbs-up: {}", entry.thumbs_up),
            format!("thumbs-down: {}", entry.thumbs_down),
        ] {
            lines.push(self.padded(vec![Span::styled(text, self.theme.votes_style)]));
        }
    }

    fn push_wrapped(&self, lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
        lines.extend(
            wrap_paragraphs(text, width)
                .into_iter()
                .map(|line| self.wrapped_line(line, style)),
        );
    }

    fn wrapped_line(&self, line: WrappedLine, style: Style) -> Line<'static> {
        let continued = line.is_continued();
        let mut spans = vec![Span::styled(line.text, style)];
        if continued {
            spans.push(Span::styled(
                self.config.continuation_marker.to_string(),
                self.theme.marker_style,
            ));
        }
        self.padded(spans)
    }

    fn padded(&self, mut spans: Vec<Span<'static>>) -> Line<'static> {
        spans.insert(0, Span::raw(" ".repeat(usize::from(self.config.padding_left))));
        Line::from(spans)
    }
}
