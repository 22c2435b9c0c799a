//! UI components for the dictionary TUI.
//!
//! Rendering is a pure function of [`AppState`]: [`View`] builds the body
//! lines, [`Ui`] paints them and places the cursor. Styles and spacing come
//! from the [`Theme`] and [`RenderConfig`] the `Ui` is constructed with.

pub mod help;
pub mod theme;
pub mod view;
pub mod wrap;

pub use help::HelpView;
pub use theme::Theme;
pub use view::View;
pub use wrap::{wrap, wrap_paragraphs, Break, WrappedLine};

use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;

/// Frames of the pending-lookup spinner.
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Spacing and fixed strings used by the renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Blank columns left of the text.
    pub padding_left: u16,
    /// Blank columns right of the text. The continuation marker of a
    /// hyphenated line is drawn in the first of these.
    pub padding_right: u16,
    pub continuation_marker: char,
    pub prompt: String,
    pub placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding_left: 4,
            padding_right: 4,
            continuation_marker: '-',
            prompt: "> ".to_string(),
            placeholder: "Search word index".to_string(),
        }
    }
}

impl RenderConfig {
    /// Columns available for text in a terminal `width` cells wide, at
    /// least 1.
    pub fn wrap_width(&self, width: u16) -> usize {
        let padding = self.padding_left.saturating_add(self.padding_right);
        usize::from(width.saturating_sub(padding)).max(1)
    }
}

/// Main UI controller.
pub struct Ui {
    /// UI theme
    theme: Theme,
    /// Spacing and strings
    config: RenderConfig,
    /// Current animation frame for the spinner
    animation_frame: usize,
}

impl Ui {
    /// Create a new UI controller.
    pub fn new(config: RenderConfig, theme: Theme) -> Self {
        Self {
            theme,
            config,
            animation_frame: 0,
        }
    }

    /// Render the UI.
    pub fn render(&self, frame: &mut Frame, app_state: &AppState) {
        let area = frame.size();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let body = Rect {
            height: area.height.saturating_sub(1).max(1),
            ..area
        };
        let lines = View::new(&self.config, &self.theme).lines(app_state, self.spinner());
        frame.render_widget(Paragraph::new(lines).style(self.theme.base), body);

        if area.height > 1 {
            let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            HelpView::render(frame, footer, &self.theme, self.config.padding_left);
        }

        self.place_cursor(frame, area, app_state);
    }

    /// Update animation frames for UI elements
    pub fn update_animations(&mut self) {
        self.animation_frame = (self.animation_frame + 1) % SPINNER.len();
    }

    fn spinner(&self) -> char {
        SPINNER[self.animation_frame]
    }

    fn place_cursor(&self, frame: &mut Frame, area: Rect, app_state: &AppState) {
        let room = self
            .config
            .wrap_width(app_state.viewport.width)
            .saturating_sub(self.config.prompt.width());
        let (_, column) = app_state.input.visible(room);

        let offset = usize::from(self.config.padding_left) + self.config.prompt.width() + column;
        let x = u16::try_from(offset).unwrap_or(u16::MAX);
        if x < area.width {
            frame.set_cursor(area.x + x, area.y);
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(RenderConfig::default(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DefinitionEntry, QueryInput, ResultSet, Viewport};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rstest::rstest;

    #[rstest]
    #[case(80, 72)]
    #[case(9, 1)]
    #[case(8, 1)]
    #[case(0, 1)]
    fn wrap_width_is_clamped(#[case] width: u16, #[case] expected: usize) {
        assert_eq!(RenderConfig::default().wrap_width(width), expected);
    }

    #[test]
    fn spinner_cycles() {
        let mut ui = Ui::default();
        let frames: Vec<char> = (0..5)
            .map(|_| {
                let c = ui.spinner();
                ui.update_animations();
                c
            })
            .collect();
        assert_eq!(frames, vec!['|', '/', '-', '\\', '|']);
    }

    #[rstest]
    fn renders_at_any_size(
        #[values(1, 2, 5, 9, 40, 120)] width: u16,
        #[values(1, 2, 10)] height: u16,
    ) {
        let ui = Ui::default();
        let state = AppState {
            input: QueryInput::with_value("a rather long query that will scroll"),
            results: ResultSet::new(vec![DefinitionEntry {
                headword: "word".into(),
                definition: "lorem ipsum ".repeat(30),
                example: "dolor\nsit amet".into(),
                ..Default::default()
            }]),
            viewport: Viewport::new(width, height),
            has_results: true,
            ..AppState::new()
        };

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| ui.render(frame, &state)).unwrap();
    }
}
