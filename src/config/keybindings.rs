use crate::app::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Normalize a terminal key event. Shift is dropped for characters since
    /// it is already part of the character itself.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }

    /// Parse a key string like "Ctrl-c", "Enter", "Space", "L"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s == "-" {
            return Some(Self::new(KeyCode::Char('-'), KeyModifiers::NONE));
        }

        let mut parts: Vec<&str> = s.split('-').collect();
        let key_str = parts.pop()?;
        let mut modifiers = KeyModifiers::NONE;
        for modifier in parts {
            match modifier.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "opt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = parse_key_code(key_str)?;
        if matches!(code, KeyCode::Char(_)) {
            modifiers -= KeyModifiers::SHIFT;
        }
        Some(Self::new(code, modifiers))
    }

    /// Convert to display string for the help popup
    pub fn display(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        parts.push(match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => "?".to_string(),
        });
        parts.join("-")
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        f if f.starts_with('f') => f[1..].parse().ok().map(KeyCode::F),
        _ => None,
    }
}

/// Key -> action lookup built from the `[keys]` config table
#[derive(Debug, Clone, Default)]
pub struct Keybindings {
    bindings: HashMap<KeyCombo, Action>,
}

impl Keybindings {
    /// Entries with an unknown key or action name are skipped with a warning
    pub fn from_table(table: &HashMap<String, String>) -> Self {
        Self::from_tables(&[table])
    }

    /// Layer key tables, later ones winning. Keys are compared after parsing,
    /// so "ctrl-c" in a later table replaces "Ctrl-c" from an earlier one.
    /// Within one table, spellings of the same key apply in key string order.
    pub fn from_tables(tables: &[&HashMap<String, String>]) -> Self {
        let mut bindings = HashMap::new();
        for table in tables {
            let mut entries: Vec<(&String, &String)> = table.iter().collect();
            entries.sort();
            for (key, name) in entries {
                match (KeyCombo::parse(key), Action::from_name(name)) {
                    (Some(combo), Some(action)) => {
                        bindings.insert(combo, action);
                    }
                    _ => log::warn!("ignoring key binding {:?} = {:?}", key, name),
                }
            }
        }
        Self { bindings }
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyCombo::from_event(key)).cloned()
    }

    /// Every key bound to `action`, sorted for stable display
    pub fn keys_for(&self, action: &Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(combo, _)| combo.display())
            .collect();
        keys.sort();
        keys
    }
}
