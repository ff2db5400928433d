use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (label, label_bg) = if state.show_help {
        (" HELP ", Color::Yellow)
    } else if state.logged_out {
        (" LOGGED OUT ", Color::Red)
    } else {
        (" TAGS ", Color::Cyan)
    };

    let left_text = vec![
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(label_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            state.status_message.clone().unwrap_or_default(),
            Style::default().fg(Color::White),
        ),
    ];

    let source = state
        .rooms_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "no snapshot".to_string());
    let right_text = vec![
        Span::styled(source, Style::default().fg(Color::Gray)),
        Span::styled("  ? help", Style::default().fg(Color::DarkGray)),
    ];

    let left_len = text_width(&left_text);
    let right_len = text_width(&right_text);
    let padding = area
        .width
        .saturating_sub(left_len.saturating_add(right_len).saturating_add(1));

    let mut spans = left_text;
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(right_text);
    spans.push(Span::raw(" "));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(paragraph, area);
}

/// Character count of the spans, clamped to the terminal coordinate range
fn text_width(spans: &[Span]) -> u16 {
    let chars: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    u16::try_from(chars).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Keybindings;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_line(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_status_and_source_shown() {
        let mut state = AppState::new(Some("/tmp/rooms.json".into()), Keybindings::default());
        state.set_status("Reloaded 3 rooms");

        let line = render_line(&state);
        assert!(line.starts_with(" TAGS  Reloaded 3 rooms"));
        assert!(line.contains("rooms.json  ? help"));
    }

    #[test]
    fn test_oversized_status_is_clipped() {
        let mut state = AppState::new(None, Keybindings::default());
        state.set_status("x".repeat(70_000));

        let line = render_line(&state);
        assert!(line.starts_with(" TAGS  xxx"));
        assert_eq!(text_width(&[Span::raw("y".repeat(70_000))]), u16::MAX);
    }
}
