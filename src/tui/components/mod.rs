pub mod help_popup;
pub mod room_pane;
pub mod status_bar;
pub mod tag_panel;
