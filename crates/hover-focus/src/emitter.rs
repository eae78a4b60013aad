//! Single-threaded multicast events.
//!
//! Hosts own an [`Emitter`] per event they expose and hand out
//! [`Subscription`]s from it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::subscription::Subscription;

/// Callback invoked for every emitted event.
pub type Listener<T> = Box<dyn Fn(&T)>;

type Slots<T> = RefCell<Vec<(u64, Rc<dyn Fn(&T)>)>>;

pub struct Emitter<T> {
    slots: Rc<Slots<T>>,
    next_slot: Cell<u64>,
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
            next_slot: Cell::new(0),
        }
    }

    /// Register a listener. It stays registered until the returned
    /// subscription is disposed or dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let slot = self.next_slot.get();
        self.next_slot.set(slot + 1);
        self.slots.borrow_mut().push((slot, Rc::new(listener)));

        let slots = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().retain(|(id, _)| *id != slot);
            }
        })
    }

    /// Deliver `event` to every listener registered when emission starts.
    ///
    /// Listeners may subscribe or unsubscribe during delivery; a listener
    /// removed mid-emission is skipped if it has not run yet.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<(u64, Rc<dyn Fn(&T)>)> = self
            .slots
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        for (id, listener) in snapshot {
            let still_registered = self.slots.borrow().iter().any(|(slot, _)| *slot == id);
            if still_registered {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.slots.borrow().len())
            .finish()
    }
}
