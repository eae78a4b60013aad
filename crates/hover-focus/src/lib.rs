//! Focus follows the mouse between editors and terminal panes.
//!
//! A [`HoverFocusController`] is attached to every open editor. Controllers
//! of one host share a [`HoverCoordinator`], which keeps exactly one of
//! them responsible for the terminal hooks.
//!
//! ```rust
//! use hover_config::EditorConfig;
//! use hover_focus::headless::HeadlessWorkbench;
//! use hover_focus::HoverFocusContributions;
//!
//! let bench = HeadlessWorkbench::new();
//! let mut contributions = HoverFocusContributions::new(bench.terminal_service());
//!
//! let editor = bench.open_editor(EditorConfig::with_focus_on_hover(true));
//! contributions.open_editor(editor.clone()).unwrap();
//!
//! editor.hover(10, 2);
//! assert!(bench.focused().is_some());
//! ```

pub mod contributions;
pub mod controller;
pub mod coordinator;
pub mod emitter;
pub mod facade;
pub mod headless;
pub mod subscription;

pub use contributions::HoverFocusContributions;
pub use controller::HoverFocusController;
pub use coordinator::HoverCoordinator;
pub use emitter::{Emitter, Listener};
pub use facade::{EditorFacade, TerminalInstance, TerminalServiceFacade};
pub use subscription::Subscription;
