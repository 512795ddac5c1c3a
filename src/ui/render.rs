use crate::client::SummaryService;
use crate::controller::SummaryState;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, QUERY_ROWS};
use crate::ui::theme::{
    BUTTON_BG, BUTTON_TEXT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT, RESULT_BG,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const PLACEHOLDER: &str = "Enter your research topic...";
pub const RESULT_HEADING: &str = "Summary:";

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CURSOR: &str = "▌";

pub fn draw<S: SummaryService>(frame: &mut Frame<'_>, app: &App<S>) {
    let regions = layout_regions(frame.area());
    let state = app.state();

    frame.render_widget(Header::new().widget(state, app.endpoint()), regions.header);
    frame.render_widget(query_input(state), regions.query);
    frame.render_widget(submit_button(state), regions.button);

    // Result region only exists once there is something to show.
    if state.has_result() {
        frame.render_widget(result_panel(state.result(), app.result_scroll()), regions.result);
    }

    frame.render_widget(Footer::widget(state), regions.footer);
}

fn query_input(state: &SummaryState) -> Paragraph<'_> {
    let query = state.query();
    let text = if query.is_empty() {
        Text::from(Line::from(vec![
            Span::styled(CURSOR, Style::default().fg(HEADER_TEXT)),
            Span::styled(PLACEHOLDER, Style::default().fg(PLACEHOLDER_TEXT)),
        ]))
    } else {
        let mut text = Text::styled(query, Style::default().fg(HEADER_TEXT));
        if query.ends_with('\n') {
            text.lines.push(Line::from(""));
        }
        if let Some(last) = text.lines.last_mut() {
            last.spans.push(Span::styled(CURSOR, Style::default().fg(HEADER_TEXT)));
        }
        text
    };

    // Keep the end of the query (where typing happens) in view.
    let line_count = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
    let scroll = line_count.saturating_sub(QUERY_ROWS);

    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(" Research topic ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn submit_button(state: &SummaryState) -> Paragraph<'static> {
    let base = Style::default()
        .fg(BUTTON_TEXT)
        .bg(BUTTON_BG)
        .add_modifier(Modifier::BOLD);

    let label = if state.is_in_flight() {
        let spinner = SPINNER_FRAMES[(state.animation_tick() as usize) % SPINNER_FRAMES.len()];
        format!(" {} {} ", spinner, state.submit_label())
    } else {
        format!(" {} ", state.submit_label())
    };

    let style = if state.submit_enabled() {
        base
    } else {
        base.add_modifier(Modifier::DIM)
    };

    Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(label, style)]))
}

/// Bordered `Summary:` panel. Also used by [`App`] to measure wrapped height.
pub fn result_panel(result: &str, scroll: u16) -> Paragraph<'_> {
    Paragraph::new(result)
        .style(Style::default().fg(HEADER_TEXT).bg(RESULT_BG))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", RESULT_HEADING),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
