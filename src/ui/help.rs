//! Key hints shown on the bottom row.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::Theme;

/// Keyboard shortcuts, as (key, action) pairs.
const SHORTCUTS: &[(&str, &str)] = &[("enter", "search"), ("ctrl+u", "clear"), ("ctrl+c", "quit")];

/// Footer listing the keyboard shortcuts.
pub struct HelpView;

impl HelpView {
    /// The hint line, e.g. `enter search · ctrl+u clear · ctrl+c quit`.
    pub fn line(theme: &Theme) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (key, action)) in SHORTCUTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", theme.help_style));
            }
            spans.push(Span::styled(*key, theme.key_style));
            spans.push(Span::styled(format!(" {action}"), theme.help_style));
        }
        Line::from(spans)
    }

    /// Render the hint line into `area`, left aligned after `padding`.
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, padding: u16) {
        let inner = Rect {
            x: area.x.saturating_add(padding).min(area.right()),
            width: area.width.saturating_sub(padding),
            ..area
        };

        let help_widget = Paragraph::new(Self::line(theme))
            .style(theme.base)
            .alignment(Alignment::Left);

        frame.render_widget(help_widget, inner);
    }
}
