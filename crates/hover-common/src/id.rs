use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

numeric_id!(
    /// Identifies an editor instance in the host.
    EditorId,
    "editor"
);

numeric_id!(
    /// Identifies a terminal instance owned by the host terminal service.
    TerminalId,
    "terminal"
);

numeric_id!(
    /// Identifies a live hover-focus controller.
    ControllerId,
    "controller"
);

/// Hands out monotonically increasing raw ids, starting at 1.
///
/// Single-threaded; shared behind `&self` so hosts can allocate from
/// callbacks without a mutable borrow.
#[derive(Debug)]
pub struct IdAllocator {
    next: Cell<u32>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: Cell::new(1) }
    }

    pub fn allocate<T: From<u32>>(&self) -> T {
        let raw = self.next.get();
        self.next.set(raw + 1);
        T::from(raw)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
