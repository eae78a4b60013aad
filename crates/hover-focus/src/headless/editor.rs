use std::cell::Cell;
use std::rc::Rc;

use hover_common::{EditorId, FocusTarget, MouseMoveEvent};
use hover_config::{ConfigChange, EditorConfig};

use super::FocusState;
use crate::emitter::{Emitter, Listener};
use crate::facade::EditorFacade;
use crate::subscription::Subscription;

pub struct HeadlessEditor {
    id: EditorId,
    options: Cell<EditorConfig>,
    focus: Rc<FocusState>,
    mouse_move: Emitter<MouseMoveEvent>,
    config_change: Emitter<ConfigChange>,
}

impl HeadlessEditor {
    pub(crate) fn new(id: EditorId, options: EditorConfig, focus: Rc<FocusState>) -> Self {
        Self {
            id,
            options: Cell::new(options),
            focus,
            mouse_move: Emitter::new(),
            config_change: Emitter::new(),
        }
    }

    pub fn id(&self) -> EditorId {
        self.id
    }

    /// Replace the editor's options, notifying listeners of what changed.
    ///
    /// Returns the change; nothing is emitted when it is empty.
    pub fn set_options(&self, options: EditorConfig) -> ConfigChange {
        let change = ConfigChange::between(&self.options.get(), &options);
        self.options.set(options);
        if !change.is_empty() {
            self.config_change.emit(&change);
        }
        change
    }

    pub fn set_focus_on_hover(&self, enabled: bool) -> ConfigChange {
        let mut options = self.options.get();
        options.focus_on_hover = enabled;
        self.set_options(options)
    }

    /// Raise a configuration change without touching the options.
    pub fn emit_config_change(&self, change: ConfigChange) {
        self.config_change.emit(&change);
    }

    /// Move the mouse over the editor.
    pub fn hover(&self, column: u16, row: u16) {
        self.mouse_move.emit(&MouseMoveEvent::new(column, row));
    }

    pub fn mouse_listener_count(&self) -> usize {
        self.mouse_move.listener_count()
    }

    pub fn config_listener_count(&self) -> usize {
        self.config_change.listener_count()
    }
}

impl EditorFacade for HeadlessEditor {
    fn id(&self) -> EditorId {
        self.id
    }

    fn options(&self) -> EditorConfig {
        self.options.get()
    }

    fn has_focus(&self) -> bool {
        self.focus.current() == Some(FocusTarget::Editor(self.id))
    }

    fn focus(&self) {
        self.focus.request(FocusTarget::Editor(self.id));
    }

    fn on_mouse_move(&self, listener: Listener<MouseMoveEvent>) -> Subscription {
        self.mouse_move.subscribe(listener)
    }

    fn on_config_change(&self, listener: Listener<ConfigChange>) -> Subscription {
        self.config_change.subscribe(listener)
    }
}
