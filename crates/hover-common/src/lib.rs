pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, HoverError};
pub use events::{Event, EventBus};
pub use id::{ControllerId, EditorId, IdAllocator, TerminalId};
pub use types::{FocusTarget, MouseMoveEvent};

pub type Result<T> = std::result::Result<T, HoverError>;
