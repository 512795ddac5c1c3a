use ratatui::layout::Rect;

use crate::client::SummaryService;
use crate::controller::{Completion, SummaryRequestController, SummaryState};
use crate::ui::layout::layout_regions;
use crate::ui::render::result_panel;

/// Lines moved per PageUp/PageDown.
pub const PAGE_SCROLL: u16 = 10;

/// Terminal UI model: the controller plus view-only state.
pub struct App<S: SummaryService> {
    controller: SummaryRequestController<S>,
    endpoint: String,
    should_quit: bool,
    /// Vertical scroll of the result region (view-only, not part of the
    /// request lifecycle).
    result_scroll: u16,
    /// Result region for the current terminal size, set by `on_resize`.
    result_area: Option<Rect>,
}

impl<S: SummaryService> App<S> {
    pub fn new(controller: SummaryRequestController<S>, endpoint: impl Into<String>) -> Self {
        Self {
            controller,
            endpoint: endpoint.into(),
            should_quit: false,
            result_scroll: 0,
            result_area: None,
        }
    }

    pub fn state(&self) -> &SummaryState {
        self.controller.state()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn result_scroll(&self) -> u16 {
        self.result_scroll
    }

    /// Record the terminal size so scrolling can be bounded by what fits.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.result_area = Some(layout_regions(Rect::new(0, 0, cols, rows)).result);
        self.result_scroll = self.result_scroll.min(self.max_result_scroll());
    }

    pub fn on_tick(&mut self) {
        self.controller.tick();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut query = self.state().query().to_string();
        query.push(ch);
        self.controller.update_query(query);
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_char(&mut self) {
        let mut query = self.state().query().to_string();
        if query.pop().is_some() {
            self.controller.update_query(query);
        }
    }

    pub fn clear_query(&mut self) {
        self.controller.update_query(String::new());
    }

    pub fn on_paste(&mut self, text: &str) {
        let mut query = self.state().query().to_string();
        query.push_str(text);
        self.controller.update_query(query);
    }

    /// Returns `true` if a request was dispatched.
    pub fn submit(&mut self) -> bool {
        let dispatched = self.controller.trigger_summarize().is_some();
        if dispatched {
            self.result_scroll = 0;
        }
        dispatched
    }

    /// Esc: cancel an in-flight request, otherwise quit.
    pub fn on_escape(&mut self) {
        if !self.controller.cancel() {
            self.request_quit();
        }
    }

    pub fn on_completion(&mut self, completion: Completion) {
        self.controller.on_completion(completion);
    }

    pub fn scroll_result_up(&mut self, lines: u16) {
        self.result_scroll = self.result_scroll.saturating_sub(lines);
    }

    pub fn scroll_result_down(&mut self, lines: u16) {
        let max = self.max_result_scroll();
        self.result_scroll = self.result_scroll.saturating_add(lines).min(max);
    }

    /// Rendered (wrapped) rows of the result panel that do not fit its area.
    /// Before the first resize, falls back to the source line count.
    fn max_result_scroll(&self) -> u16 {
        let result = self.state().result();
        let max = match self.result_area {
            // Borders count on both sides, so they cancel out.
            Some(area) => result_panel(result, 0)
                .line_count(area.width)
                .saturating_sub(usize::from(area.height)),
            None => result.lines().count().saturating_sub(1),
        };
        u16::try_from(max).unwrap_or(u16::MAX)
    }
}
