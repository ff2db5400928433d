//! Shared store instances for the UI thread.
//!
//! The stores are `Rc`-based, so the singletons are thread-local once-cells:
//! each thread that calls in gets its own dispatcher and store. Only the UI
//! thread may use the registry; other threads must hand work to it (the TUI
//! does this over the action channel). Initialization is explicit so the
//! room list source can be swapped out in tests and demos.

use super::custom_tag::CustomRoomTagStore;
use super::dispatcher::Dispatcher;
use super::room_list::RoomListSource;
use once_cell::unsync::OnceCell;
use std::rc::Rc;
use thiserror::Error;

thread_local! {
    static DISPATCHER: OnceCell<Rc<Dispatcher>> = const { OnceCell::new() };
    static CUSTOM_TAG_STORE: OnceCell<Rc<CustomRoomTagStore>> = const { OnceCell::new() };
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("custom tag store is already initialized")]
    AlreadyInitialized,
}

/// The shared dispatcher, created on first use
pub fn dispatcher() -> Rc<Dispatcher> {
    DISPATCHER.with(|cell| Rc::clone(cell.get_or_init(|| Rc::new(Dispatcher::new()))))
}

/// Create the custom tag store against the shared dispatcher. Only the first
/// call succeeds; the store lives until the thread exits.
pub fn init_custom_tag_store(
    source: Rc<dyn RoomListSource>,
) -> Result<Rc<CustomRoomTagStore>, RegistryError> {
    let dispatcher = dispatcher();
    CUSTOM_TAG_STORE.with(|cell| {
        if cell.get().is_some() {
            return Err(RegistryError::AlreadyInitialized);
        }
        let store = CustomRoomTagStore::new(source, &dispatcher);
        cell.set(Rc::clone(&store))
            .map_err(|_| RegistryError::AlreadyInitialized)?;
        log::info!("custom tag store initialized");
        Ok(store)
    })
}

#[allow(dead_code)]
pub fn custom_tag_store() -> Option<Rc<CustomRoomTagStore>> {
    CUSTOM_TAG_STORE.with(|cell| cell.get().cloned())
}
