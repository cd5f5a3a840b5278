//! Input handling: event types, the fixed key table, cursor-lock tracking,
//! and the dispatcher that applies events to a rig.

/// Platform-agnostic input events.
pub mod event;
/// Movement actions, the key table, and the held-key bit set.
pub mod keyboard;
pub mod lock;
pub mod processor;

pub use event::InputEvent;
pub use keyboard::{MoveAction, MovementFlags};
pub use lock::{HostRequest, LockTracker, PointerLock};
pub use processor::dispatch;
