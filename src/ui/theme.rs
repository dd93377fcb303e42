//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme.
pub struct Theme;

impl Theme {
    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    /// Row under the cursor.
    pub fn selected_style() -> Style {
        Style::default()
            .fg(Color::Rgb(0xFA, 0xFA, 0xFA))
            .add_modifier(Modifier::BOLD)
    }

    pub fn option_style() -> Style {
        Style::default().fg(Color::Indexed(250))
    }

    pub fn help_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
