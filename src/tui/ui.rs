use crate::app::AppState;
use crate::tui::components::{help_popup, room_pane, status_bar, tag_panel};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Split main area: tag panel | rooms of the highlighted tag
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[0]);

    tag_panel::render(frame, horizontal[0], state);
    room_pane::render(frame, horizontal[1], state);
    status_bar::render(frame, chunks[1], state);

    if state.show_help {
        help_popup::render(frame, state);
    }
}
