mod custom_tag;
mod dispatcher;
mod emitter;
pub mod registry;
mod room_list;

pub use custom_tag::{common_prefix, CustomRoomTagStore};
pub use dispatcher::{AppEvent, Dispatcher};
pub use emitter::Subscription;
pub use room_list::{RoomListSource, RoomListStore};
