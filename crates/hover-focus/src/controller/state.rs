//! Mutable state behind a controller and the hook (un)wiring on it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use hover_common::{ControllerId, MouseMoveEvent, TerminalId};
use hover_config::{ConfigChange, EditorOption};
use tracing::debug;

use super::terminal_hooks::TerminalHooks;
use crate::facade::{EditorFacade, TerminalInstance, TerminalServiceFacade};
use crate::subscription::Subscription;

pub(crate) struct ControllerState {
    pub(crate) id: ControllerId,
    editor: Rc<dyn EditorFacade>,
    terminals: Rc<dyn TerminalServiceFacade>,
    config_listener: Option<Subscription>,
    editor_hover: Option<Subscription>,
    /// `Some` exactly while this controller is the terminal manager.
    terminal_hooks: Option<TerminalHooks>,
    this: Weak<RefCell<ControllerState>>,
}

impl ControllerState {
    pub(crate) fn new(
        id: ControllerId,
        editor: Rc<dyn EditorFacade>,
        terminals: Rc<dyn TerminalServiceFacade>,
        this: Weak<RefCell<ControllerState>>,
    ) -> Self {
        Self {
            id,
            editor,
            terminals,
            config_listener: None,
            editor_hover: None,
            terminal_hooks: None,
            this,
        }
    }

    fn focus_on_hover(&self) -> bool {
        self.editor.options().focus_on_hover
    }

    pub(crate) fn is_terminal_manager(&self) -> bool {
        self.terminal_hooks.is_some()
    }

    pub(crate) fn is_editor_hooked(&self) -> bool {
        self.editor_hover.is_some()
    }

    pub(crate) fn hooked_terminals(&self) -> Vec<TerminalId> {
        self.terminal_hooks
            .as_ref()
            .map(TerminalHooks::ids)
            .unwrap_or_default()
    }

    /// Re-wire hooks whenever the focus-on-hover option changes.
    pub(crate) fn listen_for_config_changes(&mut self) {
        let this = self.this.clone();
        let subscription = self
            .editor
            .on_config_change(Box::new(move |change: &ConfigChange| {
                if !change.affects(EditorOption::FocusOnHover) {
                    return;
                }
                if let Some(state) = this.upgrade() {
                    let mut state = state.borrow_mut();
                    state.unhook_events();
                    state.hook_events();
                }
            }));
        self.config_listener = Some(subscription);
    }

    pub(crate) fn stop_listening_for_config_changes(&mut self) {
        if let Some(listener) = self.config_listener.take() {
            listener.dispose();
        }
    }

    /// Start focusing on hover, if the editor has it enabled.
    ///
    /// Idempotent: existing hooks are kept, missing ones are added.
    pub(crate) fn hook_events(&mut self) {
        if !self.focus_on_hover() {
            return;
        }

        if self.editor_hover.is_none() {
            let editor: Weak<dyn EditorFacade> = Rc::downgrade(&self.editor);
            self.editor_hover = Some(self.editor.on_mouse_move(Box::new(
                move |_: &MouseMoveEvent| {
                    if let Some(editor) = editor.upgrade() {
                        if !editor.has_focus() {
                            editor.focus();
                        }
                    }
                },
            )));
            debug!("{} hooked {}", self.id, self.editor.id());
        }

        if let Some(hooks) = self.terminal_hooks.as_mut() {
            for terminal in self.terminals.instances() {
                hooks.ensure(&terminal);
            }
        }
    }

    /// Stop focusing on hover. The terminal manager role is kept.
    pub(crate) fn unhook_events(&mut self) {
        if let Some(hover) = self.editor_hover.take() {
            hover.dispose();
            debug!("{} unhooked {}", self.id, self.editor.id());
        }
        if let Some(hooks) = self.terminal_hooks.as_mut() {
            hooks.clear();
        }
    }

    /// Take on the terminal manager role with an inherited (possibly empty)
    /// hook mapping, subscribing to terminal creation and disposal.
    pub(crate) fn become_terminal_manager(&mut self, inherited: HashMap<TerminalId, Subscription>) {
        let on_created = {
            let this = self.this.clone();
            self.terminals
                .on_instance_created(Box::new(move |terminal: &Rc<dyn TerminalInstance>| {
                    if let Some(state) = this.upgrade() {
                        state.borrow_mut().terminal_created(terminal);
                    }
                }))
        };
        let on_disposed = {
            let this = self.this.clone();
            self.terminals
                .on_instance_disposed(Box::new(move |terminal: &Rc<dyn TerminalInstance>| {
                    if let Some(state) = this.upgrade() {
                        state.borrow_mut().terminal_disposed(terminal.id());
                    }
                }))
        };

        self.terminal_hooks = Some(TerminalHooks::new(inherited, vec![on_created, on_disposed]));
    }

    /// Give up the terminal manager role, returning the hook mapping.
    pub(crate) fn resign_terminal_manager(&mut self) -> Option<HashMap<TerminalId, Subscription>> {
        self.terminal_hooks.take().map(TerminalHooks::into_hooks)
    }

    fn terminal_created(&mut self, terminal: &Rc<dyn TerminalInstance>) {
        if !self.focus_on_hover() {
            return;
        }
        if let Some(hooks) = self.terminal_hooks.as_mut() {
            hooks.ensure(terminal);
        }
    }

    fn terminal_disposed(&mut self, id: TerminalId) {
        if let Some(hooks) = self.terminal_hooks.as_mut() {
            hooks.remove(id);
        }
    }
}
