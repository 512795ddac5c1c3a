use crate::controller::SummaryState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "AI Research Paper Summarizer";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget<'a>(&self, state: &SummaryState, endpoint: &'a str) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = if state.is_in_flight() {
            ("Requesting", STATUS_BUSY)
        } else if state.last_failed() {
            ("Failed", STATUS_ERROR)
        } else {
            ("Idle", STATUS_OK)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(TITLE, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(status_text, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint, separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
