//! The per-editor hover-focus controller.
//!
//! Each controller focuses its own editor when the mouse moves over it.
//! Exactly one live controller, the terminal manager, additionally owns the
//! hooks that focus terminals on hover. When the terminal manager is
//! disposed its hooks pass to the oldest remaining controller.

mod state;
mod terminal_hooks;

pub(crate) use state::ControllerState;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use hover_common::{ControllerId, EditorId, TerminalId};
use tracing::{debug, info};

use crate::coordinator::{HoverCoordinator, Succession};
use crate::facade::{EditorFacade, TerminalServiceFacade};

pub struct HoverFocusController {
    id: ControllerId,
    editor_id: EditorId,
    state: Rc<RefCell<ControllerState>>,
    coordinator: HoverCoordinator,
    disposed: Cell<bool>,
}

impl HoverFocusController {
    /// Attach a controller to `editor`.
    ///
    /// The first controller on an empty coordinator becomes the terminal
    /// manager. The controller joins the coordinator last, after its hooks
    /// are in place.
    pub fn new(
        editor: Rc<dyn EditorFacade>,
        terminals: Rc<dyn TerminalServiceFacade>,
        coordinator: &HoverCoordinator,
    ) -> Self {
        let id = coordinator.allocate_id();
        let editor_id = editor.id();
        let state = Rc::new_cyclic(|this| {
            RefCell::new(ControllerState::new(id, editor, terminals, this.clone()))
        });

        {
            let mut state = state.borrow_mut();
            state.listen_for_config_changes();
            if coordinator.claim_if_vacant(id) {
                state.become_terminal_manager(HashMap::new());
            }
            state.hook_events();
        }
        coordinator.join(id, Rc::downgrade(&state));
        debug!("{id} attached to {editor_id}");

        Self {
            id,
            editor_id,
            state,
            coordinator: coordinator.clone(),
            disposed: Cell::new(false),
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn editor_id(&self) -> EditorId {
        self.editor_id
    }

    pub fn is_terminal_manager(&self) -> bool {
        self.state.borrow().is_terminal_manager()
    }

    /// Whether mouse movement over this controller's editor currently focuses it.
    pub fn is_editor_hooked(&self) -> bool {
        self.state.borrow().is_editor_hooked()
    }

    /// Terminals with an active focus-on-move hook. Empty unless this
    /// controller is the terminal manager.
    pub fn hooked_terminals(&self) -> Vec<TerminalId> {
        self.state.borrow().hooked_terminals()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Detach from the editor and leave the coordinator.
    ///
    /// A terminal manager hands its hook mapping to the next live controller
    /// before its own editor hook is removed. Calling this twice is a no-op.
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }

        self.state.borrow_mut().stop_listening_for_config_changes();

        match self.coordinator.leave(self.id) {
            Succession::NotManager => {}
            Succession::Successor(next, successor) => {
                let hooks = self
                    .state
                    .borrow_mut()
                    .resign_terminal_manager()
                    .unwrap_or_default();
                info!(
                    "{} hands {} terminal hook(s) to {next}",
                    self.id,
                    hooks.len()
                );
                let mut successor = successor.borrow_mut();
                successor.become_terminal_manager(hooks);
                successor.hook_events();
            }
            Succession::Vacant => {
                let hooks = self.state.borrow_mut().resign_terminal_manager();
                if let Some(hooks) = hooks {
                    debug!("{} drops {} terminal hook(s)", self.id, hooks.len());
                    drop(hooks);
                }
            }
        }

        self.state.borrow_mut().unhook_events();
        debug!("{} detached from {}", self.id, self.editor_id);
    }
}

impl Drop for HoverFocusController {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessWorkbench;
    use hover_common::FocusTarget;
    use hover_config::EditorConfig;

    fn enabled() -> EditorConfig {
        EditorConfig::with_focus_on_hover(true)
    }

    fn attach(
        bench: &HeadlessWorkbench,
        coordinator: &HoverCoordinator,
        options: EditorConfig,
    ) -> (Rc<crate::headless::HeadlessEditor>, HoverFocusController) {
        let editor = bench.open_editor(options);
        let controller =
            HoverFocusController::new(editor.clone(), bench.terminal_service(), coordinator);
        (editor, controller)
    }

    #[test]
    fn first_controller_becomes_terminal_manager() {
        let bench = HeadlessWorkbench::new();
        let coordinator = HoverCoordinator::new();
        let (_editor, a) = attach(&bench, &coordinator, enabled());

        assert!(a.is_terminal_manager());
        assert_eq!(coordinator.terminal_manager(), Some(a.id()));
        assert_eq!(coordinator.members(), vec![a.id()]);
    }

    #[test]
    fn second_controller_is_not_manager() {
        let bench = HeadlessWorkbench::new();
        let coordinator = HoverCoordinator::new();
        let (_ea, a) = attach(&bench, &coordinator, enabled());
        let (_eb, b) = attach(&bench, &coordinator, enabled());

        assert!(a.is_terminal_manager());
        assert!(!b.is_terminal_manager());
        assert!(b.is_editor_hooked());
        assert!(b.hooked_terminals().is_empty());
    }

    #[test]
    fn hover_focuses_unfocused_editor() {
        let bench = HeadlessWorkbench::new();
        let coordinator = HoverCoordinator::new();
        let (editor, _a) = attach(&bench, &coordinator, enabled());

        assert_eq!(bench.focused(), None);
        editor.hover(3, 4);
        assert_eq!(bench.focused(), Some(FocusTarget::Editor(editor.id())));
    }

    #[test]
    fn disabled_flag_installs_no_hooks() {
        let bench = HeadlessWorkbench::new();
        let terminal = bench.terminal_service().create_terminal();
        let coordinator = HoverCoordinator::new();
        let (editor, a) = attach(&bench, &coordinator, EditorConfig::default());

        assert!(a.is_terminal_manager());
        assert!(!a.is_editor_hooked());
        assert!(a.hooked_terminals().is_empty());

        editor.hover(0, 0);
        terminal.hover(0, 0);
        assert_eq!(bench.focused(), None);
    }

    #[test]
    fn manager_hooks_terminals_open_at_construction() {
        let bench = HeadlessWorkbench::new();
        let service = bench.terminal_service();
        let t1 = service.create_terminal();
        let t2 = service.create_terminal();
        let coordinator = HoverCoordinator::new();
        let (_editor, a) = attach(&bench, &coordinator, enabled());

        assert_eq!(a.hooked_terminals(), vec![t1.id(), t2.id()]);
        t2.hover(1, 1);
        assert_eq!(bench.focused(), Some(FocusTarget::Terminal(t2.id())));
    }

    #[test]
    fn terminal_disposal_removes_its_hook() {
        let bench = HeadlessWorkbench::new();
        let service = bench.terminal_service();
        let coordinator = HoverCoordinator::new();
        let (_editor, a) = attach(&bench, &coordinator, enabled());

        let terminal = service.create_terminal();
        assert_eq!(a.hooked_terminals(), vec![terminal.id()]);
        assert_eq!(terminal.mouse_listener_count(), 1);

        service.dispose_terminal(terminal.id()).unwrap();
        assert!(a.hooked_terminals().is_empty());
        assert_eq!(terminal.mouse_listener_count(), 0);
    }

    #[test]
    fn dispose_is_idempotent() {
        let bench = HeadlessWorkbench::new();
        let coordinator = HoverCoordinator::new();
        let (editor, a) = attach(&bench, &coordinator, enabled());

        a.dispose();
        a.dispose();
        assert!(a.is_disposed());
        assert!(coordinator.is_empty());
        assert_eq!(editor.mouse_listener_count(), 0);
        assert_eq!(editor.config_listener_count(), 0);
    }

    #[test]
    fn drop_disposes() {
        let bench = HeadlessWorkbench::new();
        let coordinator = HoverCoordinator::new();
        let (editor, a) = attach(&bench, &coordinator, enabled());
        drop(a);

        assert!(coordinator.is_empty());
        assert_eq!(coordinator.terminal_manager(), None);
        assert_eq!(editor.mouse_listener_count(), 0);
    }

    #[test]
    fn unrelated_config_change_keeps_hooks() {
        let bench = HeadlessWorkbench::new();
        let coordinator = HoverCoordinator::new();
        let (editor, a) = attach(&bench, &coordinator, enabled());

        editor.emit_config_change(hover_config::ConfigChange::default());
        assert!(a.is_editor_hooked());
        assert_eq!(editor.mouse_listener_count(), 1);
    }
}
