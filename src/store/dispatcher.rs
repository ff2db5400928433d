use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Application events delivered over the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Flip the selection of one custom tag
    SelectCustomRoomTag(String),
    /// Clear the selection of every custom tag
    DeselectCustomRoomTags,
    LoggedOut,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("cannot dispatch {0:?} in the middle of a dispatch")]
    AlreadyDispatching(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatchToken(u64);

type Callback = Rc<dyn Fn(&AppEvent)>;

/// Process-wide event bus. Every registered callback sees every event,
/// synchronously and in registration order.
pub struct Dispatcher {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(DispatchToken, Callback)>>,
    dispatching: Cell<bool>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            callbacks: RefCell::new(Vec::new()),
            dispatching: Cell::new(false),
        }
    }

    pub fn register(&self, callback: impl Fn(&AppEvent) + 'static) -> DispatchToken {
        let token = DispatchToken(self.next_id.get());
        self.next_id.set(token.0 + 1);
        self.callbacks.borrow_mut().push((token, Rc::new(callback)));
        token
    }

    #[allow(dead_code)]
    pub fn unregister(&self, token: DispatchToken) {
        self.callbacks.borrow_mut().retain(|(t, _)| *t != token);
    }

    pub fn dispatch(&self, event: AppEvent) -> Result<(), DispatchError> {
        if self.dispatching.get() {
            return Err(DispatchError::AlreadyDispatching(event));
        }
        log::debug!("dispatch {:?}", event);

        let callbacks: Vec<Callback> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();

        self.dispatching.set(true);
        let _guard = DispatchGuard(&self.dispatching);
        for callback in callbacks {
            callback(&event);
        }
        Ok(())
    }

    #[allow(dead_code)]
    pub fn is_dispatching(&self) -> bool {
        self.dispatching.get()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the dispatching flag even if a callback panics
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
