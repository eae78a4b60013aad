//! The terminal hook mapping held by the terminal manager.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use hover_common::{MouseMoveEvent, TerminalId};
use tracing::debug;

use crate::facade::TerminalInstance;
use crate::subscription::Subscription;

/// Focus-on-move hooks keyed by terminal, plus the terminal service
/// subscriptions that keep the mapping current.
///
/// The mapping can outlive its owner: on handoff it is moved to the next
/// terminal manager while `lifecycle` is dropped and rebuilt there.
pub(crate) struct TerminalHooks {
    pub(crate) hooks: HashMap<TerminalId, Subscription>,
    pub(crate) lifecycle: Vec<Subscription>,
}

impl TerminalHooks {
    pub(crate) fn new(hooks: HashMap<TerminalId, Subscription>, lifecycle: Vec<Subscription>) -> Self {
        Self { hooks, lifecycle }
    }

    /// Hook `terminal` unless it already is.
    pub(crate) fn ensure(&mut self, terminal: &Rc<dyn TerminalInstance>) {
        let id = terminal.id();
        if self.hooks.contains_key(&id) {
            return;
        }
        self.hooks.insert(id, focus_on_move(terminal));
        debug!("hooked {id}");
    }

    pub(crate) fn remove(&mut self, id: TerminalId) {
        if let Some(hook) = self.hooks.remove(&id) {
            hook.dispose();
            debug!("unhooked {id}");
        }
    }

    /// Dispose every terminal hook, keeping the lifecycle subscriptions.
    pub(crate) fn clear(&mut self) {
        for (_, hook) in self.hooks.drain() {
            hook.dispose();
        }
    }

    pub(crate) fn ids(&self) -> Vec<TerminalId> {
        let mut ids: Vec<TerminalId> = self.hooks.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Drop the lifecycle subscriptions and hand back the hook mapping.
    pub(crate) fn into_hooks(self) -> HashMap<TerminalId, Subscription> {
        drop(self.lifecycle);
        self.hooks
    }
}

fn focus_on_move(terminal: &Rc<dyn TerminalInstance>) -> Subscription {
    let target: Weak<dyn TerminalInstance> = Rc::downgrade(terminal);
    terminal.on_mouse_move(Box::new(move |_: &MouseMoveEvent| {
        if let Some(terminal) = target.upgrade() {
            terminal.focus();
        }
    }))
}
