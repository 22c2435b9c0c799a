//! UI theme definition.

use ratatui::style::{Color, Modifier, Style};

/// Background behind the whole view.
pub const BACKGROUND: Color = Color::Rgb(0x4F, 0x6F, 0x52);

/// Theme for the application UI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Basic styles
    pub base: Style,
    pub prompt_style: Style,
    pub placeholder_style: Style,

    // Definition styles
    pub headword_style: Style,
    pub byline_style: Style,
    pub definition_style: Style,
    pub example_style: Style,
    pub votes_style: Style,
    pub marker_style: Style,

    // Status styles
    pub pending_style: Style,
    pub error_style: Style,

    // Key hints
    pub key_style: Style,
    pub help_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Style::default()
                .fg(Color::White)
                .bg(BACKGROUND)
                .add_modifier(Modifier::BOLD),
            prompt_style: Style::default().fg(Color::LightGreen),
            placeholder_style: Style::default().fg(Color::Gray).remove_modifier(Modifier::BOLD),

            headword_style: Style::default().fg(Color::LightYellow),
            byline_style: Style::default().fg(Color::Gray).remove_modifier(Modifier::BOLD),
            definition_style: Style::default(),
            example_style: Style::default().add_modifier(Modifier::ITALIC),
            votes_style: Style::default().fg(Color::LightCyan),
            marker_style: Style::default().fg(Color::Gray),

            pending_style: Style::default().fg(Color::Yellow),
            error_style: Style::default().fg(Color::LightRed),

            key_style: Style::default().fg(Color::LightGreen),
            help_style: Style::default().fg(Color::Gray).remove_modifier(Modifier::BOLD),
        }
    }
}
