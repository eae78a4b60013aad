use std::cell::RefCell;
use std::rc::Rc;

use hover_common::{Event, FocusTarget, HoverError, IdAllocator, MouseMoveEvent, TerminalId};

use super::FocusState;
use crate::emitter::{Emitter, Listener};
use crate::facade::{TerminalInstance, TerminalServiceFacade};
use crate::subscription::Subscription;

pub struct HeadlessTerminal {
    id: TerminalId,
    focus: Rc<FocusState>,
    mouse_move: Emitter<MouseMoveEvent>,
}

impl HeadlessTerminal {
    pub fn id(&self) -> TerminalId {
        self.id
    }

    /// Move the mouse over the terminal.
    pub fn hover(&self, column: u16, row: u16) {
        self.mouse_move.emit(&MouseMoveEvent::new(column, row));
    }

    pub fn mouse_listener_count(&self) -> usize {
        self.mouse_move.listener_count()
    }

    pub fn has_focus(&self) -> bool {
        self.focus.current() == Some(FocusTarget::Terminal(self.id))
    }
}

impl TerminalInstance for HeadlessTerminal {
    fn id(&self) -> TerminalId {
        self.id
    }

    fn focus(&self) {
        self.focus.request(FocusTarget::Terminal(self.id));
    }

    fn on_mouse_move(&self, listener: Listener<MouseMoveEvent>) -> Subscription {
        self.mouse_move.subscribe(listener)
    }
}

pub struct HeadlessTerminalService {
    focus: Rc<FocusState>,
    ids: IdAllocator,
    instances: RefCell<Vec<Rc<HeadlessTerminal>>>,
    created: Emitter<Rc<dyn TerminalInstance>>,
    disposed: Emitter<Rc<dyn TerminalInstance>>,
}

impl HeadlessTerminalService {
    pub(crate) fn new(focus: Rc<FocusState>) -> Self {
        Self {
            focus,
            ids: IdAllocator::new(),
            instances: RefCell::new(Vec::new()),
            created: Emitter::new(),
            disposed: Emitter::new(),
        }
    }

    /// Open a terminal and announce it.
    pub fn create_terminal(&self) -> Rc<HeadlessTerminal> {
        let terminal = Rc::new(HeadlessTerminal {
            id: self.ids.allocate(),
            focus: self.focus.clone(),
            mouse_move: Emitter::new(),
        });
        self.instances.borrow_mut().push(terminal.clone());
        self.focus.publish(Event::TerminalCreated(terminal.id));

        let announced: Rc<dyn TerminalInstance> = terminal.clone();
        self.created.emit(&announced);
        terminal
    }

    /// Close a terminal and announce it.
    pub fn dispose_terminal(&self, id: TerminalId) -> Result<(), HoverError> {
        let terminal = {
            let mut instances = self.instances.borrow_mut();
            let index = instances
                .iter()
                .position(|t| t.id == id)
                .ok_or(HoverError::UnknownTerminal(id))?;
            instances.remove(index)
        };
        self.focus.release(FocusTarget::Terminal(id));
        self.focus.publish(Event::TerminalDisposed(id));

        let announced: Rc<dyn TerminalInstance> = terminal;
        self.disposed.emit(&announced);
        Ok(())
    }

    pub fn terminal(&self, id: TerminalId) -> Option<Rc<HeadlessTerminal>> {
        self.instances.borrow().iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.instances.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.borrow().is_empty()
    }
}

impl TerminalServiceFacade for HeadlessTerminalService {
    fn instances(&self) -> Vec<Rc<dyn TerminalInstance>> {
        self.instances
            .borrow()
            .iter()
            .map(|t| t.clone() as Rc<dyn TerminalInstance>)
            .collect()
    }

    fn on_instance_created(&self, listener: Listener<Rc<dyn TerminalInstance>>) -> Subscription {
        self.created.subscribe(listener)
    }

    fn on_instance_disposed(&self, listener: Listener<Rc<dyn TerminalInstance>>) -> Subscription {
        self.disposed.subscribe(listener)
    }
}
