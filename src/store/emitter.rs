use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

struct Inner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// Change notifier for a store. Listeners get no payload and re-read state
/// through the store's getters.
pub struct Emitter {
    inner: Rc<Inner>,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn add_listener(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            emitter: Rc::downgrade(&self.inner),
        }
    }

    /// Call every listener registered at the time of the call, in order.
    /// Listeners may add or remove subscriptions while running.
    pub fn emit(&self) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by `add_listener`. Dropping it keeps the listener
/// registered; call `remove` to unregister.
#[must_use = "keep the subscription to be able to remove the listener"]
pub struct Subscription {
    id: u64,
    emitter: Weak<Inner>,
}

impl Subscription {
    pub fn remove(self) {
        if let Some(inner) = self.emitter.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_calls_listeners_in_order() {
        let emitter = Emitter::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let c = Rc::clone(&calls);
        let _a = emitter.add_listener(move || c.borrow_mut().push("a"));
        let c = Rc::clone(&calls);
        let _b = emitter.add_listener(move || c.borrow_mut().push("b"));

        emitter.emit();
        assert_eq!(*calls.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_removed_listener_is_not_called() {
        let emitter = Emitter::new();
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        let sub = emitter.add_listener(move || c.set(c.get() + 1));
        emitter.emit();
        sub.remove();
        emitter.emit();

        assert_eq!(count.get(), 1);
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_remove_after_emitter_dropped() {
        let emitter = Emitter::new();
        let sub = emitter.add_listener(|| {});
        drop(emitter);
        sub.remove();
    }

    #[test]
    fn test_listener_added_during_emit_waits_for_next_emit() {
        let emitter = Rc::new(Emitter::new());
        let count = Rc::new(Cell::new(0));

        let e = Rc::clone(&emitter);
        let c = Rc::clone(&count);
        let _outer = emitter.add_listener(move || {
            let c = Rc::clone(&c);
            let _inner = e.add_listener(move || c.set(c.get() + 1));
        });

        emitter.emit();
        assert_eq!(count.get(), 0);
        emitter.emit();
        assert_eq!(count.get(), 1);
    }
}
