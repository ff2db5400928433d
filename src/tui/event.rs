use crate::app::{Action, AppState};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// Internal event type for terminal events
enum TerminalEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

pub struct EventHandler {
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    terminal_rx: mpsc::UnboundedReceiver<TerminalEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (terminal_tx, terminal_rx) = mpsc::unbounded_channel();

        // Spawn dedicated thread for terminal events
        std::thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        TerminalEvent::Key(key)
                    }
                    Ok(Event::Resize(w, h)) => TerminalEvent::Resize(w, h),
                    _ => TerminalEvent::Tick,
                }
            } else {
                TerminalEvent::Tick
            };

            if terminal_tx.send(event).is_err() {
                break; // Channel closed, exit thread
            }
        });

        Self {
            action_tx,
            action_rx,
            terminal_rx,
        }
    }

    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub async fn next(&mut self, state: &AppState) -> Result<Action> {
        tokio::select! {
            // Store notifications go first so the view is fresh before the next key
            biased;
            Some(action) = self.action_rx.recv() => Ok(action),
            Some(event) = self.terminal_rx.recv() => {
                match event {
                    TerminalEvent::Key(key) => Ok(handle_key_event(key, state)),
                    TerminalEvent::Resize(w, h) => Ok(Action::Resize(w, h)),
                    TerminalEvent::Tick => Ok(Action::Tick),
                }
            }
            else => Ok(Action::Tick)
        }
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if state.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                Action::ToggleHelp
            }
            _ => Action::Tick,
        };
    }

    state.keybindings.action_for(&key).unwrap_or(Action::Tick)
}
