mod notification;
mod room;
mod tag;

pub use notification::{aggregate_notification_count, NotificationCount};
pub use room::{Membership, Room, RoomLists, RoomNotifState};
pub use tag::{
    is_standard_tag, SortedTag, TagSet, TAG_ARCHIVED, TAG_DIRECT, TAG_FAVOURITE, TAG_INVITE,
    TAG_LOW_PRIORITY, TAG_RECENT, TAG_SERVER_NOTICE,
};
