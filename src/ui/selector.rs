//! Ratatui widget that renders a [`SelectorState`] as a titled option list.
//!
//! [`lines`] is the single description of the view: the widget paints it and
//! [`render`] flattens it to plain text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::app::state::SelectorState;

use super::theme::Theme;

const CURSOR_MARKER: &str = ">";
const BLANK_MARKER: &str = " ";

/// Title, one row per option, then the help line.
pub fn lines(state: &SelectorState) -> Vec<Line<'_>> {
    let mut out = Vec::with_capacity(state.options().len() + 2);
    out.push(Line::from(Span::styled(state.title(), Theme::title_style())));

    for (i, option) in state.options().iter().enumerate() {
        let (marker, style) = if i == state.cursor() {
            (CURSOR_MARKER, Theme::selected_style())
        } else {
            (BLANK_MARKER, Theme::option_style())
        };
        out.push(Line::from(Span::styled(format!("{marker} {option}"), style)));
    }

    out.push(Line::from(Span::styled(state.help(), Theme::help_style())));
    out
}

/// Plain-text view, one line per row, no styling.
pub fn render(state: &SelectorState) -> String {
    lines(state)
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The selector widget, created fresh each frame.
pub struct SelectorWidget<'a> {
    state: &'a SelectorState,
}

impl<'a> SelectorWidget<'a> {
    pub fn new(state: &'a SelectorState) -> Self {
        Self { state }
    }
}

impl Widget for SelectorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Rows past the bottom edge are dropped; the list isn't scrollable.
        for (i, line) in lines(self.state).iter().take(area.height as usize).enumerate() {
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}
