use crate::app::AppState;
use crate::models::SortedTag;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = if state.selected_count() > 0 {
        format!(" Tags ({}, {} selected) ", state.tags.len(), state.selected_count())
    } else {
        format!(" Tags ({}) ", state.tags.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Split inner area: list + action bar (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let list_area = chunks[0];
    let action_area = chunks[1];

    if state.tags.is_empty() {
        let message = if state.logged_out {
            "Logged out"
        } else {
            "No custom tags"
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = state
            .tags
            .iter()
            .enumerate()
            .map(|(idx, tag)| create_tag_item(tag, idx == state.selected_idx, state.show_badges))
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 50, 60))
                .add_modifier(Modifier::BOLD),
        );

        // Use ListState for automatic scrolling
        let mut list_state = ListState::default();
        list_state.select(Some(state.selected_idx));

        frame.render_stateful_widget(list, list_area, &mut list_state);
    }

    let key_style = Style::default().fg(Color::Cyan);
    let action_style = Style::default().fg(Color::DarkGray);
    let action_bar = Paragraph::new(Line::from(vec![
        Span::styled("space", key_style),
        Span::styled(":select ", action_style),
        Span::styled("x", key_style),
        Span::styled(":clear ", action_style),
        Span::styled("r", key_style),
        Span::styled(":reload", action_style),
    ]));

    frame.render_widget(action_bar, action_area);
}

fn create_tag_item<'a>(tag: &SortedTag, is_cursor: bool, show_badges: bool) -> ListItem<'a> {
    // Selected tags get a filled avatar
    let avatar_style = if tag.selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let name_style = if is_cursor {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else if tag.selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let prefix = if is_cursor { "> " } else { "  " };

    let mut spans = vec![
        Span::styled(prefix.to_string(), name_style),
        Span::styled(format!(" {} ", tag.display_letter()), avatar_style),
        Span::raw(" "),
        Span::styled(tag.name.clone(), name_style),
    ];

    if let Some(badge) = tag.badge.filter(|_| show_badges) {
        let badge_style = if badge.highlight {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", badge.count), badge_style));
    }

    ListItem::new(Line::from(spans))
}
