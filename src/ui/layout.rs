use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of query text visible at once (plus two border rows).
pub const QUERY_ROWS: u16 = 3;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub query: Rect,
    pub button: Rect,
    pub result: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(QUERY_ROWS + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        query: chunks[1],
        button: chunks[2],
        // chunks[3] is a spacer row
        result: chunks[4],
        footer: chunks[5],
    }
}
