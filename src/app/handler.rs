use crate::app::{Action, AppState};
use crate::snapshot;
use crate::store::{AppEvent, CustomRoomTagStore, Dispatcher, RoomListSource, RoomListStore};
use std::rc::Rc;

/// Stores the UI loop talks to
pub struct AppContext {
    pub dispatcher: Rc<Dispatcher>,
    pub tag_store: Rc<CustomRoomTagStore>,
    pub room_lists: Rc<RoomListStore>,
}

impl AppContext {
    /// Re-read the tag view after a change notification
    pub fn refresh(&self, state: &mut AppState) {
        state.set_tags(self.tag_store.sorted_tags(), self.room_lists.room_lists());
    }

    /// Returns whether the event was delivered
    fn dispatch(&self, state: &mut AppState, event: AppEvent) -> bool {
        match self.dispatcher.dispatch(event) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{}", e);
                state.set_status(e.to_string());
                false
            }
        }
    }
}

pub fn process_action(state: &mut AppState, action: Action, ctx: &AppContext) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {}
        Action::Resize(w, h) => {
            state.terminal_size = (w, h);
        }

        Action::MoveUp => state.select_prev(),
        Action::MoveDown => state.select_next(),

        Action::ToggleSelectedTag => {
            if let Some(name) = state.highlighted_tag().map(|t| t.name.clone()) {
                ctx.dispatch(state, AppEvent::SelectCustomRoomTag(name));
            }
        }
        Action::DeselectAll => {
            ctx.dispatch(state, AppEvent::DeselectCustomRoomTags);
        }
        Action::Logout => {
            if !state.logged_out && ctx.dispatch(state, AppEvent::LoggedOut) {
                state.logged_out = true;
                state.set_status("Logged out");
            }
        }

        Action::Reload => match state.rooms_path.clone() {
            Some(path) => match snapshot::load(&path) {
                Ok(rooms) => {
                    let count = rooms.len();
                    ctx.room_lists.set_rooms(rooms);
                    state.set_status(format!("Reloaded {} rooms", count));
                }
                Err(e) => {
                    log::warn!("{}", e);
                    state.set_status(e.to_string());
                }
            },
            None => state.set_status("No room snapshot to reload"),
        },

        Action::ToggleHelp => {
            state.show_help = !state.show_help;
        }

        Action::StoreChanged => ctx.refresh(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Keybindings;
    use crate::models::{Room, TAG_FAVOURITE};
    use std::cell::RefCell;
    use std::io::Write;

    /// Context wired the same way the runtime does it, with change
    /// notifications collected instead of sent over a channel
    struct Harness {
        ctx: AppContext,
        state: AppState,
        pending: Rc<RefCell<Vec<Action>>>,
        _sub: crate::store::Subscription,
    }

    impl Harness {
        fn new(rooms: Vec<Room>) -> Self {
            let room_lists = Rc::new(RoomListStore::from_rooms(rooms));
            let dispatcher = Rc::new(Dispatcher::new());
            let tag_store = CustomRoomTagStore::new(room_lists.clone(), &dispatcher);

            let pending = Rc::new(RefCell::new(Vec::new()));
            let p = Rc::clone(&pending);
            let sub = tag_store.add_listener(move || p.borrow_mut().push(Action::StoreChanged));

            let ctx = AppContext {
                dispatcher,
                tag_store,
                room_lists,
            };
            let mut state = AppState::new(None, Keybindings::default());
            ctx.refresh(&mut state);

            Self {
                ctx,
                state,
                pending,
                _sub: sub,
            }
        }

        fn run(&mut self, action: Action) {
            process_action(&mut self.state, action, &self.ctx);
            let queued: Vec<Action> = self.pending.borrow_mut().drain(..).collect();
            for action in queued {
                process_action(&mut self.state, action, &self.ctx);
            }
        }

        fn names(&self) -> Vec<&str> {
            self.state.tags.iter().map(|t| t.name.as_str()).collect()
        }
    }

    fn rooms() -> Vec<Room> {
        vec![
            Room::new("!a:hs", "Standup").with_tags(["u.work", TAG_FAVOURITE]),
            Room::new("!b:hs", "Games").with_tags(["u.fun"]).with_unread(2, 0),
        ]
    }

    #[test]
    fn test_initial_view() {
        let h = Harness::new(rooms());
        assert_eq!(h.names(), vec!["u.fun", "u.work"]);
        assert_eq!(h.state.highlighted_rooms()[0].room_id, "!b:hs");
    }

    #[test]
    fn test_toggle_highlighted_tag() {
        let mut h = Harness::new(rooms());
        h.run(Action::MoveDown);
        h.run(Action::ToggleSelectedTag);

        assert!(h.state.tags[1].selected);
        assert_eq!(h.state.selected_count(), 1);

        h.run(Action::ToggleSelectedTag);
        assert_eq!(h.state.selected_count(), 0);
    }

    #[test]
    fn test_deselect_all() {
        let mut h = Harness::new(rooms());
        h.run(Action::ToggleSelectedTag);
        h.run(Action::MoveDown);
        h.run(Action::ToggleSelectedTag);
        assert_eq!(h.state.selected_count(), 2);

        h.run(Action::DeselectAll);
        assert_eq!(h.state.selected_count(), 0);
    }

    #[test]
    fn test_logout_empties_panel_and_ignores_reload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "rooms": [ { "room_id": "!c:hs", "tags": ["u.new"] } ] }"#)
            .unwrap();

        let mut h = Harness::new(rooms());
        h.state.rooms_path = Some(file.path().to_path_buf());

        h.run(Action::Logout);
        assert!(h.state.logged_out);
        assert!(h.state.tags.is_empty());

        h.run(Action::Reload);
        assert!(h.state.tags.is_empty());
        assert!(h.ctx.room_lists.room_lists().contains_key("u.new"));
    }

    #[test]
    fn test_logout_during_dispatch_is_not_recorded() {
        let Harness { ctx, state, .. } = Harness::new(rooms());
        let ctx = Rc::new(ctx);
        let state = Rc::new(RefCell::new(state));

        // Logout arrives while another event is still being delivered
        let (c, s) = (Rc::clone(&ctx), Rc::clone(&state));
        ctx.dispatcher.register(move |event| {
            if *event == AppEvent::DeselectCustomRoomTags {
                process_action(&mut s.borrow_mut(), Action::Logout, &c);
            }
        });
        ctx.dispatcher.dispatch(AppEvent::DeselectCustomRoomTags).unwrap();

        let state = state.borrow();
        assert!(!state.logged_out);
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("in the middle of a dispatch"));
        assert!(ctx.tag_store.is_following_room_lists());
    }

    #[test]
    fn test_reload_updates_tags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "rooms": [ { "room_id": "!c:hs", "tags": ["u.work", "u.new"] } ] }"#)
            .unwrap();

        let mut h = Harness::new(rooms());
        h.run(Action::MoveDown);
        h.run(Action::ToggleSelectedTag);
        h.state.rooms_path = Some(file.path().to_path_buf());
        h.run(Action::Reload);

        assert_eq!(h.names(), vec!["u.new", "u.work"]);
        assert!(h.state.tags[1].selected);
        assert_eq!(h.state.highlighted_tag().unwrap().name, "u.work");
        assert_eq!(h.state.status_message.as_deref(), Some("Reloaded 1 rooms"));
    }

    #[test]
    fn test_reload_failure_sets_status() {
        let mut h = Harness::new(rooms());
        h.state.rooms_path = Some("/nonexistent/rooms.json".into());
        h.run(Action::Reload);

        assert!(h
            .state
            .status_message
            .as_deref()
            .unwrap()
            .contains("could not read room snapshot"));
        assert_eq!(h.names(), vec!["u.fun", "u.work"]);
    }

    #[test]
    fn test_quit_and_help() {
        let mut h = Harness::new(rooms());
        h.run(Action::ToggleHelp);
        assert!(h.state.show_help);
        h.run(Action::Quit);
        assert!(h.state.should_quit);
    }
}
