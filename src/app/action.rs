#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,

    // Tag selection (forwarded to the dispatcher)
    ToggleSelectedTag,
    DeselectAll,
    Logout,

    // Room list
    Reload,

    // UI modes
    ToggleHelp,

    // Store notifications
    StoreChanged,

    // App control
    Quit,
    Tick,
    Resize(u16, u16),
}

impl Action {
    /// Parse an action name used in the `[keys]` config table
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),
            "toggle_tag" => Some(Action::ToggleSelectedTag),
            "deselect_all" => Some(Action::DeselectAll),
            "logout" => Some(Action::Logout),
            "reload" => Some(Action::Reload),
            "help" => Some(Action::ToggleHelp),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}
