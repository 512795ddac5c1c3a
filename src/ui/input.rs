use crate::client::SummaryService;
use crate::ui::app::{App, PAGE_SCROLL};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<S: SummaryService>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }

    match key.code {
        KeyCode::Esc => app.on_escape(),
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            app.insert_newline();
        }
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Up => app.scroll_result_up(1),
        KeyCode::Down => app.scroll_result_down(1),
        KeyCode::PageUp => app.scroll_result_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_result_down(PAGE_SCROLL),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(ch);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
