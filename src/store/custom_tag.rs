use super::dispatcher::{AppEvent, Dispatcher};
use super::emitter::{Emitter, Subscription};
use super::room_list::RoomListSource;
use crate::models::{
    aggregate_notification_count, is_standard_tag, NotificationCount, RoomLists, SortedTag, TagSet,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Shortest prefix worth disambiguating on, in characters
const MIN_PREFIX_CHARS: usize = 2;

/// Selection state of the user's custom room tags, and the ordered view the
/// tag panel draws from it.
///
/// Which tags exist is owned by the room list; whether a tag is selected is
/// owned here and survives relisting for as long as the tag itself does.
pub struct CustomRoomTagStore {
    room_lists: Rc<dyn RoomListSource>,
    tags: RefCell<Rc<TagSet>>,
    emitter: Emitter,
    /// `None` once logged out
    room_list_subscription: RefCell<Option<Subscription>>,
}

impl CustomRoomTagStore {
    pub fn new(room_lists: Rc<dyn RoomListSource>, dispatcher: &Dispatcher) -> Rc<Self> {
        let initial = updated_tags(&room_lists.room_lists(), None);
        let store = Rc::new(Self {
            room_lists,
            tags: RefCell::new(Rc::new(initial)),
            emitter: Emitter::new(),
            room_list_subscription: RefCell::new(None),
        });

        let weak = Rc::downgrade(&store);
        let subscription = store.room_lists.add_listener(Box::new(move || {
            if let Some(store) = weak.upgrade() {
                store.on_room_lists_changed();
            }
        }));
        *store.room_list_subscription.borrow_mut() = Some(subscription);

        // Registered for the lifetime of the dispatcher
        let weak = Rc::downgrade(&store);
        dispatcher.register(move |event| {
            if let Some(store) = weak.upgrade() {
                store.on_dispatch(event);
            }
        });

        log::debug!("custom tag store ready with {} tags", store.tags().len());
        store
    }

    /// Current tag set. The snapshot is immutable; later changes replace it.
    pub fn tags(&self) -> Rc<TagSet> {
        self.tags.borrow().clone()
    }

    /// Tags in ordinal name order, each with the letter that sets it apart
    /// from its neighbours and its unread badge.
    pub fn sorted_tags(&self) -> Vec<SortedTag> {
        let tags = self.tags();
        let room_lists = self.room_lists.room_lists();

        // TagSet keys iterate in ordinal order
        let names: Vec<&str> = tags.keys().map(String::as_str).collect();

        names
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                let prefix = neighbour_prefix(&names, i);
                let avatar_letter = name[prefix.len()..].chars().next();
                SortedTag {
                    name: name.to_string(),
                    avatar_letter,
                    badge: badge_for(&room_lists, name),
                    selected: tags.get(name).copied().unwrap_or(false),
                }
            })
            .collect()
    }

    pub fn add_listener(&self, listener: impl Fn() + 'static) -> Subscription {
        self.emitter.add_listener(listener)
    }

    /// Whether the store still follows room list changes
    pub fn is_following_room_lists(&self) -> bool {
        self.room_list_subscription.borrow().is_some()
    }

    /// Single mutation point, every change is announced exactly once
    fn set_state(&self, tags: TagSet) {
        *self.tags.borrow_mut() = Rc::new(tags);
        self.emitter.emit();
    }

    fn on_room_lists_changed(&self) {
        if !self.is_following_room_lists() {
            return;
        }
        let previous = self.tags();
        let tags = updated_tags(&self.room_lists.room_lists(), Some(previous.as_ref()));
        log::debug!("room lists changed, {} custom tags", tags.len());
        self.set_state(tags);
    }

    fn on_dispatch(&self, event: &AppEvent) {
        match event {
            AppEvent::SelectCustomRoomTag(name) => {
                let current = self.tags();
                match current.get(name) {
                    Some(&selected) => {
                        let mut tags = TagSet::clone(&current);
                        tags.insert(name.clone(), !selected);
                        self.set_state(tags);
                    }
                    None => log::debug!("ignoring selection of unknown tag {:?}", name),
                }
            }
            AppEvent::DeselectCustomRoomTags => {
                let tags = self.tags().keys().map(|name| (name.clone(), false)).collect();
                self.set_state(tags);
            }
            AppEvent::LoggedOut => {
                let subscription = self.room_list_subscription.borrow_mut().take();
                if let Some(subscription) = subscription {
                    subscription.remove();
                    log::info!("logged out, custom tag store detached from room lists");
                }
                self.set_state(TagSet::new());
            }
        }
    }
}

/// Custom tags currently in the room lists, keeping earlier selections
fn updated_tags(room_lists: &RoomLists, previous: Option<&TagSet>) -> TagSet {
    room_lists
        .keys()
        .filter(|name| !is_standard_tag(name))
        .map(|name| {
            let selected = previous
                .and_then(|prev| prev.get(name))
                .copied()
                .unwrap_or(false);
            (name.clone(), selected)
        })
        .collect()
}

fn badge_for(room_lists: &RoomLists, name: &str) -> Option<NotificationCount> {
    let rooms = room_lists.get(name).map(Vec::as_slice).unwrap_or(&[]);
    let notifs = aggregate_notification_count(rooms);
    (notifs.count != 0).then_some(notifs)
}

/// Longer of the prefixes shared with the previous and next name.
/// On a tie the forward prefix is kept; both are prefixes of the same name,
/// so a tie never changes which letter follows.
fn neighbour_prefix<'a>(names: &[&'a str], i: usize) -> &'a str {
    let name = names[i];
    let backward = i
        .checked_sub(1)
        .map(|prev| common_prefix(name, names[prev]))
        .unwrap_or("");
    let forward = names
        .get(i + 1)
        .map(|next| common_prefix(name, next))
        .unwrap_or("");
    if backward.len() > forward.len() {
        backward
    } else {
        forward
    }
}

/// Leading run of characters shared by `a` and `b`, cut after the first space
/// so it ends on a word boundary. Runs under two characters count as nothing.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }

    let mut prefix = &a[..end];
    if let Some(space) = prefix.find(' ') {
        prefix = &prefix[..=space];
    }

    if prefix.chars().count() >= MIN_PREFIX_CHARS {
        prefix
    } else {
        ""
    }
}
