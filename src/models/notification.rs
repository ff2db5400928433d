use super::room::Room;
use serde::Serialize;

/// Unread summary for a group of rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NotificationCount {
    pub count: u64,
    pub highlight: bool,
}

/// Sum the unread counts of every room whose notification setting allows a badge.
///
/// A room contributes when it has unread messages and its setting shows
/// message badges, or when it has a mention and it is not muted. Mentions in
/// a contributing room mark the whole aggregate as highlighted.
pub fn aggregate_notification_count(rooms: &[Room]) -> NotificationCount {
    rooms.iter().fold(NotificationCount::default(), |mut acc, room| {
        let highlight = room.highlight_count > 0;
        let notif_badge = room.notification_count > 0 && room.notif_state.shows_notif_badge();
        let mention_badge = highlight && room.notif_state.shows_mention_badge();

        if notif_badge || mention_badge {
            acc.count += room.notification_count;
            if highlight {
                acc.highlight = true;
            }
        }
        acc
    })
}
