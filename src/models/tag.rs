use super::notification::NotificationCount;
use serde::Serialize;
use std::collections::BTreeMap;

pub const TAG_FAVOURITE: &str = "m.favourite";
pub const TAG_LOW_PRIORITY: &str = "m.lowpriority";
pub const TAG_SERVER_NOTICE: &str = "m.server_notice";
pub const TAG_INVITE: &str = "im.vector.fake.invite";
pub const TAG_RECENT: &str = "im.vector.fake.recent";
pub const TAG_DIRECT: &str = "im.vector.fake.direct";
pub const TAG_ARCHIVED: &str = "im.vector.fake.archived";

/// Custom tag name -> selected
pub type TagSet = BTreeMap<String, bool>;

/// Built-in tags the client manages itself; these never show up as custom tags
pub fn is_standard_tag(name: &str) -> bool {
    matches!(
        name,
        TAG_FAVOURITE
            | TAG_LOW_PRIORITY
            | TAG_SERVER_NOTICE
            | TAG_INVITE
            | TAG_RECENT
            | TAG_DIRECT
            | TAG_ARCHIVED
    )
}

/// One row of the tag panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortedTag {
    pub name: String,
    /// First character that tells this tag apart from its closest neighbour.
    /// `None` when the whole name is shared with a neighbour.
    pub avatar_letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<NotificationCount>,
    pub selected: bool,
}

impl SortedTag {
    /// Letter to draw in the avatar, falls back to the first character
    pub fn display_letter(&self) -> char {
        self.avatar_letter
            .or_else(|| self.name.chars().next())
            .unwrap_or('?')
    }
}
