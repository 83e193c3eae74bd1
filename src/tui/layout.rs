use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Three side-by-side panels (Email, Slack, Teams) above a one-row status bar.
pub struct AppLayout {
    pub panel_areas: [Rect; 3],
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Panels (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(vertical_chunks[0]);

        Self { panel_areas: [columns[0], columns[1], columns[2]], status_area: vertical_chunks[1] }
    }
}
