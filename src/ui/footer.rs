use crate::controller::SummaryState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current request state, as `(keys, action)` pairs.
pub fn key_hints(state: &SummaryState) -> Vec<(&'static str, &'static str)> {
    let mut hints = if state.is_in_flight() {
        vec![("Esc", "Cancel")]
    } else {
        vec![("Enter", "Summarize")]
    };
    hints.push(("Alt+Enter", "Newline"));
    hints.push(("Ctrl+U", "Clear"));
    if state.has_result() {
        hints.push(("PgUp/PgDn", "Scroll"));
    }
    hints.push(if state.is_in_flight() {
        ("Ctrl+Q", "Quit")
    } else {
        ("Esc", "Quit")
    });
    hints
}

pub struct Footer;

impl Footer {
    pub fn widget(state: &SummaryState) -> Paragraph<'static> {
        let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let action_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (i, (keys, action)) in key_hints(state).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(keys, key_style));
            spans.push(Span::styled(format!(": {action}"), action_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(Line::styled(format!(" v{VERSION} "), action_style).right_aligned()),
        )
    }
}
