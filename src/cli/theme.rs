//! Immutable styling passed into every render call

use ratatui::style::{Color, Modifier, Style};

/// Visual configuration for both the text view and the ratatui frame
#[derive(Debug, Clone)]
pub struct Theme {
    /// Prefix drawn in front of the highlighted list item
    pub marker: &'static str,
    /// Left padding of list items
    pub item_indent: usize,
    /// Drawn at the text cursor position
    pub cursor: &'static str,
    /// Number of list rows visible at once
    pub list_height: usize,
    pub accent: Color,
    pub title: Style,
    pub item: Style,
    pub highlight: Style,
    pub muted: Style,
    pub notice: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            marker: "🫧 ",
            item_indent: 4,
            cursor: "\u{258c}",
            list_height: 14,
            accent: Color::Indexed(170),
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            item: Style::default().fg(Color::White),
            highlight: Style::default()
                .fg(Color::Indexed(170))
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            notice: Style::default().fg(Color::Yellow),
        }
    }
}

impl Theme {
    /// Colorless theme for terminals where styling is disabled
    pub fn plain() -> Self {
        Self {
            marker: "> ",
            accent: Color::Reset,
            title: Style::default().add_modifier(Modifier::BOLD),
            item: Style::default(),
            highlight: Style::default().add_modifier(Modifier::REVERSED),
            muted: Style::default(),
            notice: Style::default(),
            ..Self::default()
        }
    }
}
