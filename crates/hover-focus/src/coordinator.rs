//! Shared bookkeeping between the controllers of one host.
//!
//! Tracks which controllers are alive, in creation order, and which one
//! currently owns the terminal hooks.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use hover_common::{ControllerId, IdAllocator};
use tracing::debug;

use crate::controller::ControllerState;

/// Membership roster for hover-focus controllers.
///
/// Cloning is cheap and every clone sees the same roster. Create one per
/// host and pass it to every controller.
#[derive(Clone, Default)]
pub struct HoverCoordinator {
    inner: Rc<RefCell<Roster>>,
}

#[derive(Default)]
struct Roster {
    members: Vec<Member>,
    terminal_manager: Option<ControllerId>,
    ids: IdAllocator,
}

struct Member {
    id: ControllerId,
    state: Weak<RefCell<ControllerState>>,
}

/// Outcome of a controller leaving the roster.
pub(crate) enum Succession {
    /// The leaver did not own the terminal hooks.
    NotManager,
    /// The leaver owned the hooks and this member is the new owner.
    Successor(ControllerId, Rc<RefCell<ControllerState>>),
    /// The leaver owned the hooks and nobody is left to take them.
    Vacant,
}

impl HoverCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live controllers.
    pub fn len(&self) -> usize {
        self.inner.borrow().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().members.is_empty()
    }

    /// Live controllers in creation order.
    pub fn members(&self) -> Vec<ControllerId> {
        self.inner.borrow().members.iter().map(|m| m.id).collect()
    }

    /// The controller currently owning the terminal hooks.
    pub fn terminal_manager(&self) -> Option<ControllerId> {
        self.inner.borrow().terminal_manager
    }

    pub(crate) fn allocate_id(&self) -> ControllerId {
        self.inner.borrow().ids.allocate()
    }

    /// Make `id` the terminal manager if nobody is live yet.
    pub(crate) fn claim_if_vacant(&self, id: ControllerId) -> bool {
        let mut roster = self.inner.borrow_mut();
        if !roster.members.is_empty() || roster.terminal_manager.is_some() {
            return false;
        }
        roster.terminal_manager = Some(id);
        debug!("{id} elected terminal manager");
        true
    }

    pub(crate) fn join(&self, id: ControllerId, state: Weak<RefCell<ControllerState>>) {
        self.inner.borrow_mut().members.push(Member { id, state });
        debug!("{id} joined");
    }

    /// Remove `id` and, if it owned the terminal hooks, elect the first
    /// remaining member in creation order.
    pub(crate) fn leave(&self, id: ControllerId) -> Succession {
        let mut roster = self.inner.borrow_mut();
        roster.members.retain(|m| m.id != id);
        debug!("{id} left");

        if roster.terminal_manager != Some(id) {
            return Succession::NotManager;
        }

        let successor = roster
            .members
            .iter()
            .find_map(|m| m.state.upgrade().map(|state| (m.id, state)));

        match successor {
            Some((next, state)) => {
                roster.terminal_manager = Some(next);
                debug!("terminal manager role passes from {id} to {next}");
                Succession::Successor(next, state)
            }
            None => {
                roster.terminal_manager = None;
                debug!("terminal manager role vacated by {id}");
                Succession::Vacant
            }
        }
    }
}

impl fmt::Debug for HoverCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roster = self.inner.borrow();
        f.debug_struct("HoverCoordinator")
            .field("members", &roster.members.iter().map(|m| m.id).collect::<Vec<_>>())
            .field("terminal_manager", &roster.terminal_manager)
            .finish()
    }
}
