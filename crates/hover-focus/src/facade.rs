//! Capabilities the controller needs from its host.
//!
//! The controller never sees concrete host types; hosts (and tests) plug in
//! through these traits.

use std::rc::Rc;

use hover_common::{EditorId, MouseMoveEvent, TerminalId};
use hover_config::{ConfigChange, EditorConfig};

use crate::emitter::Listener;
use crate::subscription::Subscription;

/// One open editor.
pub trait EditorFacade {
    fn id(&self) -> EditorId;

    /// The editor's current options.
    fn options(&self) -> EditorConfig;

    fn has_focus(&self) -> bool;

    /// Ask the host to move input focus to this editor.
    fn focus(&self);

    fn on_mouse_move(&self, listener: Listener<MouseMoveEvent>) -> Subscription;

    fn on_config_change(&self, listener: Listener<ConfigChange>) -> Subscription;
}

/// One terminal pane.
pub trait TerminalInstance {
    fn id(&self) -> TerminalId;

    /// Ask the host to move input focus to this terminal.
    fn focus(&self);

    fn on_mouse_move(&self, listener: Listener<MouseMoveEvent>) -> Subscription;
}

/// The host's terminal registry.
pub trait TerminalServiceFacade {
    /// Terminals currently open, in host order.
    fn instances(&self) -> Vec<Rc<dyn TerminalInstance>>;

    fn on_instance_created(&self, listener: Listener<Rc<dyn TerminalInstance>>) -> Subscription;

    fn on_instance_disposed(&self, listener: Listener<Rc<dyn TerminalInstance>>) -> Subscription;
}
