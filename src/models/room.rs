use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rooms grouped by tag name, as reported by the room list
pub type RoomLists = BTreeMap<String, Vec<Room>>;

/// The user's membership in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    #[default]
    Join,
    Invite,
    Leave,
}

/// Per-room push rule setting, controls which unread counts produce a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomNotifState {
    AllMessagesLoud,
    #[default]
    AllMessages,
    MentionsOnly,
    Mute,
}

impl RoomNotifState {
    /// Whether plain unread messages should show a badge
    pub fn shows_notif_badge(self) -> bool {
        matches!(self, RoomNotifState::AllMessagesLoud | RoomNotifState::AllMessages)
    }

    /// Whether mentions (highlights) should show a badge
    pub fn shows_mention_badge(self) -> bool {
        self != RoomNotifState::Mute
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: String,
    #[serde(default)]
    pub name: String,
    /// Tags this room carries (custom and standard)
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub membership: Membership,
    #[serde(default)]
    pub is_direct: bool,
    /// Total unread notifications
    #[serde(default)]
    pub notification_count: u64,
    /// Unread notifications that mention the user
    #[serde(default)]
    pub highlight_count: u64,
    #[serde(default)]
    pub notif_state: RoomNotifState,
}

impl Room {
    /// Name to show in lists, falls back to the room id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.room_id
        } else {
            &self.name
        }
    }
}

/// Builders for fixtures
#[cfg(test)]
impl Room {
    pub fn new(room_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            name: name.into(),
            tags: Vec::new(),
            membership: Membership::default(),
            is_direct: false,
            notification_count: 0,
            highlight_count: 0,
            notif_state: RoomNotifState::default(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_unread(mut self, notification_count: u64, highlight_count: u64) -> Self {
        self.notification_count = notification_count;
        self.highlight_count = highlight_count;
        self
    }

    pub fn with_notif_state(mut self, notif_state: RoomNotifState) -> Self {
        self.notif_state = notif_state;
        self
    }

    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    pub fn direct(mut self) -> Self {
        self.is_direct = true;
        self
    }
}
