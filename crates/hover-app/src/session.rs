//! A headless host plus one hover-focus controller per editor, addressed
//! by scenario labels.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use hover_common::{EditorId, Event, FocusTarget, HoverError, Result, TerminalId};
use hover_config::{EditorConfig, HoverConfig};
use hover_focus::headless::{HeadlessEditor, HeadlessWorkbench};
use hover_focus::HoverFocusContributions;
use tracing::{debug, info};

use crate::scenario::{Scenario, Step};

pub struct Session {
    bench: HeadlessWorkbench,
    contributions: HoverFocusContributions,
    defaults: EditorConfig,
    editors: HashMap<String, Rc<HeadlessEditor>>,
    editor_labels: HashMap<EditorId, String>,
    terminals: HashMap<String, TerminalId>,
    terminal_labels: HashMap<TerminalId, String>,
}

impl Session {
    pub fn new(defaults: EditorConfig) -> Self {
        let bench = HeadlessWorkbench::new();
        let contributions = HoverFocusContributions::new(bench.terminal_service());
        Self {
            bench,
            contributions,
            defaults,
            editors: HashMap::new(),
            editor_labels: HashMap::new(),
            terminals: HashMap::new(),
            terminal_labels: HashMap::new(),
        }
    }

    pub fn run(&mut self, scenario: &Scenario) -> Result<()> {
        for (index, step) in scenario.steps.iter().enumerate() {
            self.apply(step)
                .map_err(|e| HoverError::Scenario(format!("step {}: {e}", index + 1)))?;
        }
        info!("replayed {} step(s)", scenario.steps.len());
        Ok(())
    }

    pub fn apply(&mut self, step: &Step) -> Result<()> {
        debug!("applying {step:?}");
        match step {
            Step::OpenEditor {
                editor,
                focus_on_hover,
            } => {
                if self.editors.contains_key(editor) {
                    return Err(HoverError::Scenario(format!("editor '{editor}' is already open")));
                }
                let mut options = self.defaults;
                if let Some(enabled) = focus_on_hover {
                    options.focus_on_hover = *enabled;
                }
                let handle = self.bench.open_editor(options);
                self.contributions.open_editor(handle.clone())?;
                self.editor_labels.insert(handle.id(), editor.clone());
                self.editors.insert(editor.clone(), handle);
            }
            Step::CloseEditor { editor } => {
                let handle = self
                    .editors
                    .remove(editor)
                    .ok_or_else(|| unknown("editor", editor))?;
                self.contributions.close_editor(handle.id())?;
                self.bench.close_editor(&handle);
                self.editor_labels.remove(&handle.id());
            }
            Step::OpenTerminal { terminal } => {
                if self.terminals.contains_key(terminal) {
                    return Err(HoverError::Scenario(format!(
                        "terminal '{terminal}' is already open"
                    )));
                }
                let id = self.bench.terminal_service().create_terminal().id();
                self.terminals.insert(terminal.clone(), id);
                self.terminal_labels.insert(id, terminal.clone());
            }
            Step::CloseTerminal { terminal } => {
                let id = self
                    .terminals
                    .remove(terminal)
                    .ok_or_else(|| unknown("terminal", terminal))?;
                self.bench.terminal_service().dispose_terminal(id)?;
                self.terminal_labels.remove(&id);
            }
            Step::SetFocusOnHover { editor, enabled } => {
                self.editor(editor)?.set_focus_on_hover(*enabled);
            }
            Step::HoverEditor { editor } => {
                self.editor(editor)?.hover(0, 0);
            }
            Step::HoverTerminal { terminal } => {
                let id = *self
                    .terminals
                    .get(terminal)
                    .ok_or_else(|| unknown("terminal", terminal))?;
                let handle = self
                    .bench
                    .terminal_service()
                    .terminal(id)
                    .ok_or(HoverError::UnknownTerminal(id))?;
                handle.hover(0, 0);
            }
        }
        Ok(())
    }

    /// Push reloaded options to every open editor, oldest first, and use
    /// them for new ones. Returns the editors whose options changed.
    pub fn apply_config(&mut self, config: &HoverConfig) -> Vec<EditorId> {
        self.defaults = config.editor;
        let mut changed = Vec::new();
        for id in self.contributions.editor_ids() {
            let Some(editor) = self
                .editor_labels
                .get(&id)
                .and_then(|label| self.editors.get(label))
            else {
                continue;
            };
            let change = editor.set_options(config.editor);
            if change.is_empty() {
                continue;
            }
            let keys: Vec<&str> = change.options().iter().map(|o| o.key()).collect();
            debug!("{id} options changed: {}", keys.join(", "));
            changed.push(id);
        }
        self.bench.publish(Event::ConfigReloaded);
        changed
    }

    pub fn report(&self) -> Report {
        let mut editors: Vec<EditorReport> = self
            .contributions
            .controllers()
            .map(|c| EditorReport {
                label: self.editor_label(c.editor_id()),
                hooked: c.is_editor_hooked(),
                terminal_manager: c.is_terminal_manager(),
            })
            .collect();
        editors.sort_by(|a, b| a.label.cmp(&b.label));

        let hooked_terminals = self
            .contributions
            .terminal_manager()
            .map(|c| {
                c.hooked_terminals()
                    .into_iter()
                    .map(|id| self.terminal_label(id))
                    .collect()
            })
            .unwrap_or_default();

        Report {
            focused: self.bench.focused().map(|target| match target {
                FocusTarget::Editor(id) => format!("editor {}", self.editor_label(id)),
                FocusTarget::Terminal(id) => format!("terminal {}", self.terminal_label(id)),
            }),
            editors,
            hooked_terminals,
        }
    }

    fn editor(&self, label: &str) -> Result<&Rc<HeadlessEditor>> {
        self.editors.get(label).ok_or_else(|| unknown("editor", label))
    }

    fn editor_label(&self, id: EditorId) -> String {
        self.editor_labels
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    fn terminal_label(&self, id: TerminalId) -> String {
        self.terminal_labels
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

fn unknown(kind: &str, label: &str) -> HoverError {
    HoverError::Scenario(format!("no open {kind} labelled '{label}'"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorReport {
    pub label: String,
    pub hooked: bool,
    pub terminal_manager: bool,
}

/// Hook state after a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub focused: Option<String>,
    pub editors: Vec<EditorReport>,
    pub hooked_terminals: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.focused {
            Some(target) => writeln!(f, "focus: {target}")?,
            None => writeln!(f, "focus: none")?,
        }
        for editor in &self.editors {
            writeln!(
                f,
                "editor {}: {}{}",
                editor.label,
                if editor.hooked { "hooked" } else { "idle" },
                if editor.terminal_manager {
                    " (terminal manager)"
                } else {
                    ""
                }
            )?;
        }
        if self.hooked_terminals.is_empty() {
            write!(f, "terminal hooks: none")
        } else {
            write!(f, "terminal hooks: {}", self.hooked_terminals.join(", "))
        }
    }
}
