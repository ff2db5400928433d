use crate::app::{Action, AppState};
use crate::config::Config;
use crate::snapshot;
use crate::store::{registry, RoomListStore};
use crate::tui;
use crate::tui::event::EventHandler;
use anyhow::Result;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use super::handler::{process_action, AppContext};

pub async fn run_tui(rooms_path: Option<PathBuf>, config: Config) -> Result<()> {
    // Room list from the snapshot, if any
    let room_lists = match &rooms_path {
        Some(path) => RoomListStore::from_rooms(snapshot::load(path)?),
        None => RoomListStore::new(),
    };
    let room_lists = Rc::new(room_lists);

    let tag_store = registry::init_custom_tag_store(room_lists.clone())?;

    // Create event handler
    let mut events = EventHandler::new(Duration::from_millis(config.tick_rate_ms));
    let action_tx = events.action_sender();

    // Store changes come back into the loop as actions
    let _store_subscription = tag_store.add_listener(move || {
        let _ = action_tx.send(Action::StoreChanged);
    });

    let ctx = AppContext {
        dispatcher: registry::dispatcher(),
        tag_store,
        room_lists,
    };

    let mut state = AppState::new(rooms_path, config.keybindings());
    state.show_badges = config.show_badges;
    ctx.refresh(&mut state);

    // Initialize terminal
    let mut terminal = tui::init()?;
    let size = terminal.size()?;
    state.terminal_size = (size.width, size.height);

    // Main loop
    let result = run_main_loop(&mut terminal, &mut state, &mut events, &ctx).await;

    // Restore terminal
    tui::restore()?;

    result
}

async fn run_main_loop(
    terminal: &mut tui::Terminal,
    state: &mut AppState,
    events: &mut EventHandler,
    ctx: &AppContext,
) -> Result<()> {
    loop {
        terminal.draw(|frame| tui::ui::draw(frame, state))?;

        let action = events.next(state).await?;
        process_action(state, action, ctx);

        if state.should_quit {
            break;
        }
    }
    log::info!("tag panel closed");
    Ok(())
}
