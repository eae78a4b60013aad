//! One controller per open editor.
//!
//! Hosts call [`HoverFocusContributions::open_editor`] when an editor opens
//! and [`HoverFocusContributions::close_editor`] on teardown.

use std::rc::Rc;

use hover_common::{EditorId, HoverError, Result};
use tracing::info;

use crate::controller::HoverFocusController;
use crate::coordinator::HoverCoordinator;
use crate::facade::{EditorFacade, TerminalServiceFacade};

pub struct HoverFocusContributions {
    coordinator: HoverCoordinator,
    terminals: Rc<dyn TerminalServiceFacade>,
    /// Creation order.
    controllers: Vec<HoverFocusController>,
}

impl HoverFocusContributions {
    pub fn new(terminals: Rc<dyn TerminalServiceFacade>) -> Self {
        Self {
            coordinator: HoverCoordinator::new(),
            terminals,
            controllers: Vec::new(),
        }
    }

    /// Instantiate the controller for a newly opened editor.
    pub fn open_editor(&mut self, editor: Rc<dyn EditorFacade>) -> Result<&HoverFocusController> {
        let id = editor.id();
        if self.get(id).is_some() {
            return Err(HoverError::DuplicateEditor(id));
        }

        let controller = HoverFocusController::new(editor, self.terminals.clone(), &self.coordinator);
        info!("registered {} for {id}", controller.id());
        self.controllers.push(controller);
        Ok(&self.controllers[self.controllers.len() - 1])
    }

    /// Dispose the controller of a closing editor.
    pub fn close_editor(&mut self, id: EditorId) -> Result<()> {
        let index = self
            .controllers
            .iter()
            .position(|c| c.editor_id() == id)
            .ok_or(HoverError::UnknownEditor(id))?;
        let controller = self.controllers.remove(index);
        controller.dispose();
        info!("unregistered {} for {id}", controller.id());
        Ok(())
    }

    /// Dispose every controller, oldest first.
    pub fn close_all(&mut self) {
        for controller in self.controllers.drain(..) {
            controller.dispose();
        }
    }

    /// The controller attached to `id`.
    pub fn get(&self, id: EditorId) -> Option<&HoverFocusController> {
        self.controllers.iter().find(|c| c.editor_id() == id)
    }

    /// The controller currently holding the terminal manager role.
    pub fn terminal_manager(&self) -> Option<&HoverFocusController> {
        let id = self.coordinator.terminal_manager()?;
        self.controllers.iter().find(|c| c.id() == id)
    }

    pub fn editor_ids(&self) -> Vec<EditorId> {
        self.controllers.iter().map(HoverFocusController::editor_id).collect()
    }

    pub fn controllers(&self) -> impl Iterator<Item = &HoverFocusController> {
        self.controllers.iter()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn coordinator(&self) -> &HoverCoordinator {
        &self.coordinator
    }
}

impl Drop for HoverFocusContributions {
    fn drop(&mut self) {
        self.close_all();
    }
}
