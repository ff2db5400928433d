use super::emitter::{Emitter, Subscription};
use crate::models::{Membership, Room, RoomLists, TAG_ARCHIVED, TAG_DIRECT, TAG_INVITE, TAG_RECENT};
use std::cell::RefCell;
use std::rc::Rc;

/// Read side of the room list as seen by stores that derive from it
pub trait RoomListSource {
    fn room_lists(&self) -> Rc<RoomLists>;
    fn add_listener(&self, listener: Box<dyn Fn()>) -> Subscription;
}

/// In-memory room list, grouped by tag
pub struct RoomListStore {
    lists: RefCell<Rc<RoomLists>>,
    emitter: Emitter,
}

impl RoomListStore {
    pub fn new() -> Self {
        Self {
            lists: RefCell::new(Rc::new(RoomLists::new())),
            emitter: Emitter::new(),
        }
    }

    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let store = Self::new();
        *store.lists.borrow_mut() = Rc::new(group_rooms(rooms));
        store
    }

    /// Replace the known rooms and notify listeners
    pub fn set_rooms(&self, rooms: Vec<Room>) {
        let lists = group_rooms(rooms);
        log::debug!("room list regrouped into {} lists", lists.len());
        *self.lists.borrow_mut() = Rc::new(lists);
        self.emitter.emit();
    }

    pub fn listener_count(&self) -> usize {
        self.emitter.listener_count()
    }
}

impl Default for RoomListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomListSource for RoomListStore {
    fn room_lists(&self) -> Rc<RoomLists> {
        self.lists.borrow().clone()
    }

    fn add_listener(&self, listener: Box<dyn Fn()>) -> Subscription {
        self.emitter.add_listener(listener)
    }
}

/// Sort rooms into the lists shown in the sidebar.
///
/// Invites and left rooms get their own lists, tagged rooms appear under
/// every tag they carry, untagged direct chats go to the direct list and
/// everything else to recent.
pub fn group_rooms(rooms: Vec<Room>) -> RoomLists {
    let mut lists = RoomLists::new();
    for room in rooms {
        let targets: Vec<String> = match room.membership {
            Membership::Invite => vec![TAG_INVITE.to_string()],
            Membership::Leave => vec![TAG_ARCHIVED.to_string()],
            Membership::Join if !room.tags.is_empty() => room.tags.clone(),
            Membership::Join if room.is_direct => vec![TAG_DIRECT.to_string()],
            Membership::Join => vec![TAG_RECENT.to_string()],
        };
        for tag in targets {
            lists.entry(tag).or_default().push(room.clone());
        }
    }
    lists
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TAG_FAVOURITE;
    use std::cell::Cell;

    #[test]
    fn test_grouping_rules() {
        let rooms = vec![
            Room::new("!invite:hs", "Invite").with_membership(Membership::Invite),
            Room::new("!left:hs", "Left")
                .with_membership(Membership::Leave)
                .with_tags(["u.work"]),
            Room::new("!dm:hs", "Alice").direct(),
            Room::new("!tagged_dm:hs", "Bob").direct().with_tags([TAG_FAVOURITE]),
            Room::new("!multi:hs", "Multi").with_tags(["u.work", "u.fun"]),
            Room::new("!plain:hs", "Plain"),
        ];
        let lists = group_rooms(rooms);

        let ids = |tag: &str| -> Vec<&str> {
            lists[tag].iter().map(|r| r.room_id.as_str()).collect()
        };
        assert_eq!(ids(TAG_INVITE), vec!["!invite:hs"]);
        assert_eq!(ids(TAG_ARCHIVED), vec!["!left:hs"]);
        assert_eq!(ids(TAG_DIRECT), vec!["!dm:hs"]);
        assert_eq!(ids(TAG_FAVOURITE), vec!["!tagged_dm:hs"]);
        assert_eq!(ids("u.work"), vec!["!multi:hs"]);
        assert_eq!(ids("u.fun"), vec!["!multi:hs"]);
        assert_eq!(ids(TAG_RECENT), vec!["!plain:hs"]);
    }

    #[test]
    fn test_set_rooms_notifies_listeners() {
        let store = RoomListStore::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let _sub = store.add_listener(Box::new(move || c.set(c.get() + 1)));

        store.set_rooms(vec![Room::new("!a:hs", "A").with_tags(["u.a"])]);

        assert_eq!(count.get(), 1);
        assert!(store.room_lists().contains_key("u.a"));
    }

    #[test]
    fn test_from_rooms_does_not_notify() {
        let store = RoomListStore::from_rooms(vec![Room::new("!a:hs", "A")]);
        assert_eq!(store.room_lists()[TAG_RECENT].len(), 1);
        assert_eq!(store.listener_count(), 0);
    }
}
