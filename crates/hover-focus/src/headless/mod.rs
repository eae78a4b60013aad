//! An in-memory host.
//!
//! Implements the facades without any UI so the controller can be driven
//! from tests and from `hover-sim`. Focus requests are recorded on the
//! workbench and published on its [`EventBus`].

mod editor;
mod terminal;

pub use editor::HeadlessEditor;
pub use terminal::{HeadlessTerminal, HeadlessTerminalService};

use std::cell::Cell;
use std::rc::Rc;

use hover_common::{EditorId, Event, EventBus, FocusTarget, IdAllocator};
use hover_config::EditorConfig;
use tokio::sync::broadcast;
use tracing::trace;

/// Which widget holds input focus, shared by everything in one workbench.
pub(crate) struct FocusState {
    current: Cell<Option<FocusTarget>>,
    bus: EventBus,
}

impl FocusState {
    fn new() -> Self {
        Self {
            current: Cell::new(None),
            bus: EventBus::default(),
        }
    }

    pub(crate) fn current(&self) -> Option<FocusTarget> {
        self.current.get()
    }

    pub(crate) fn request(&self, target: FocusTarget) {
        if self.current.get() == Some(target) {
            return;
        }
        self.current.set(Some(target));
        trace!("focus moved to {target}");
        self.bus.publish(Event::FocusChanged(target));
    }

    /// Clear focus if `target` holds it.
    pub(crate) fn release(&self, target: FocusTarget) {
        if self.current.get() == Some(target) {
            self.current.set(None);
        }
    }

    pub(crate) fn publish(&self, event: Event) {
        self.bus.publish(event);
    }
}

pub struct HeadlessWorkbench {
    focus: Rc<FocusState>,
    editor_ids: IdAllocator,
    terminals: Rc<HeadlessTerminalService>,
}

impl HeadlessWorkbench {
    pub fn new() -> Self {
        let focus = Rc::new(FocusState::new());
        let terminals = Rc::new(HeadlessTerminalService::new(focus.clone()));
        Self {
            focus,
            editor_ids: IdAllocator::new(),
            terminals,
        }
    }

    pub fn terminal_service(&self) -> Rc<HeadlessTerminalService> {
        self.terminals.clone()
    }

    /// Open a new editor with the given options.
    pub fn open_editor(&self, options: EditorConfig) -> Rc<HeadlessEditor> {
        let id: EditorId = self.editor_ids.allocate();
        let editor = Rc::new(HeadlessEditor::new(id, options, self.focus.clone()));
        self.focus.publish(Event::EditorOpened(id));
        editor
    }

    /// Announce that `editor` closed, releasing focus if it held it.
    ///
    /// Controllers attached to it must be disposed separately.
    pub fn close_editor(&self, editor: &HeadlessEditor) {
        self.focus.release(FocusTarget::Editor(editor.id()));
        self.focus.publish(Event::EditorClosed(editor.id()));
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.current()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.focus.bus.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.focus.bus.publish(event)
    }
}

impl Default for HeadlessWorkbench {
    fn default() -> Self {
        Self::new()
    }
}
