use crate::app::{Action, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const HELP_ENTRIES: &[(Action, &str)] = &[
    (Action::MoveDown, "Move down"),
    (Action::MoveUp, "Move up"),
    (Action::ToggleSelectedTag, "Select / deselect tag"),
    (Action::DeselectAll, "Deselect all tags"),
    (Action::Reload, "Reload room snapshot"),
    (Action::Logout, "Log out (clears tags)"),
    (Action::ToggleHelp, "Toggle this help"),
    (Action::Quit, "Quit"),
];

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = centered_rect(50, 60, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "Tag Panel",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (action, description) in HELP_ENTRIES {
        let keys = state.keybindings.keys_for(action);
        if keys.is_empty() {
            continue;
        }
        help_text.push(Line::from(vec![
            Span::styled(format!("  {:<14}", keys.join(", ")), Style::default().fg(Color::Cyan)),
            Span::raw(*description),
        ]));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Letters mark where a tag's name differs from its neighbours.",
        Style::default().fg(Color::DarkGray),
    )));

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(help, area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
