use crate::config::Keybindings;
use crate::models::{Room, RoomLists, SortedTag};
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppState {
    /// Last view fetched from the custom tag store
    pub tags: Vec<SortedTag>,
    pub room_lists: Rc<RoomLists>,
    /// Cursor in the tag panel
    pub selected_idx: usize,
    pub show_help: bool,
    pub show_badges: bool,
    pub logged_out: bool,
    pub status_message: Option<String>,
    pub rooms_path: Option<PathBuf>,
    pub keybindings: Keybindings,
    pub terminal_size: (u16, u16),
    pub should_quit: bool,
}

impl AppState {
    pub fn new(rooms_path: Option<PathBuf>, keybindings: Keybindings) -> Self {
        Self {
            tags: Vec::new(),
            room_lists: Rc::new(RoomLists::new()),
            selected_idx: 0,
            show_help: false,
            show_badges: true,
            logged_out: false,
            status_message: None,
            rooms_path,
            keybindings,
            terminal_size: (0, 0),
            should_quit: false,
        }
    }

    /// Replace the tag view, keeping the cursor on the same tag when it survives
    pub fn set_tags(&mut self, tags: Vec<SortedTag>, room_lists: Rc<RoomLists>) {
        let current = self.highlighted_tag().map(|t| t.name.clone());
        self.tags = tags;
        self.room_lists = room_lists;

        if let Some(name) = current {
            if let Some(idx) = self.tags.iter().position(|t| t.name == name) {
                self.selected_idx = idx;
                return;
            }
        }
        self.selected_idx = self.selected_idx.min(self.tags.len().saturating_sub(1));
    }

    pub fn highlighted_tag(&self) -> Option<&SortedTag> {
        self.tags.get(self.selected_idx)
    }

    /// Rooms carrying the highlighted tag
    pub fn highlighted_rooms(&self) -> &[Room] {
        self.highlighted_tag()
            .and_then(|tag| self.room_lists.get(&tag.name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selected_count(&self) -> usize {
        self.tags.iter().filter(|t| t.selected).count()
    }

    pub fn select_prev(&mut self) {
        self.selected_idx = self.selected_idx.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_idx + 1 < self.tags.len() {
            self.selected_idx += 1;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> SortedTag {
        SortedTag {
            name: name.to_string(),
            avatar_letter: name.chars().next(),
            badge: None,
            selected: false,
        }
    }

    fn state_with(names: &[&str]) -> AppState {
        let mut state = AppState::new(None, Keybindings::default());
        state.set_tags(names.iter().map(|n| tag(n)).collect(), Rc::new(RoomLists::new()));
        state
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = state_with(&["a", "b", "c"]);

        state.select_prev();
        assert_eq!(state.selected_idx, 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_idx, 2);
    }

    #[test]
    fn test_cursor_follows_tag_across_refresh() {
        let mut state = state_with(&["b", "c"]);
        state.select_next();
        assert_eq!(state.highlighted_tag().unwrap().name, "c");

        state.set_tags(vec![tag("a"), tag("b"), tag("c")], Rc::new(RoomLists::new()));
        assert_eq!(state.highlighted_tag().unwrap().name, "c");
    }

    #[test]
    fn test_cursor_clamped_when_tag_disappears() {
        let mut state = state_with(&["a", "b", "c"]);
        state.select_next();
        state.select_next();

        state.set_tags(vec![tag("a")], Rc::new(RoomLists::new()));
        assert_eq!(state.selected_idx, 0);

        state.set_tags(Vec::new(), Rc::new(RoomLists::new()));
        assert_eq!(state.selected_idx, 0);
        assert!(state.highlighted_tag().is_none());
        assert!(state.highlighted_rooms().is_empty());
    }
}
