use crate::app::AppState;
use crate::models::{Room, RoomNotifState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.highlighted_tag() {
        Some(tag) => format!(" Rooms in {} ", tag.name),
        None => " Rooms ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let rooms = state.highlighted_rooms();
    if rooms.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "Nothing here",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rooms.iter().map(create_room_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn create_room_item<'a>(room: &Room) -> ListItem<'a> {
    let muted = room.notif_state == RoomNotifState::Mute;
    let name_style = if muted {
        Style::default().fg(Color::DarkGray)
    } else if room.notification_count > 0 {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(room.display_name().to_string(), name_style)];

    if room.highlight_count > 0 && !muted {
        spans.push(Span::styled(
            format!(" @{}", room.highlight_count),
            Style::default().fg(Color::Red),
        ));
    }
    if room.notification_count > 0 {
        spans.push(Span::styled(
            format!(" ({})", room.notification_count),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let state_label = match room.notif_state {
        RoomNotifState::AllMessagesLoud => " loud",
        RoomNotifState::AllMessages => "",
        RoomNotifState::MentionsOnly => " mentions",
        RoomNotifState::Mute => " muted",
    };
    if !state_label.is_empty() {
        spans.push(Span::styled(
            state_label,
            Style::default().fg(Color::Rgb(90, 90, 90)),
        ));
    }

    ListItem::new(Line::from(spans))
}
