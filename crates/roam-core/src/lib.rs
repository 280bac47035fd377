//! Core focus tracking for **roam**.
//!
//! `roam-core` holds the framework-independent part of roaming keyboard
//! focus: a [`FocusIndexTracker`] that remembers which item in an ordered
//! group has focus and computes where focus goes next. It knows nothing
//! about terminals, key events or rendering. The caller supplies two
//! collaborators:
//!
//! | Collaborator | Trait | Job |
//! |--------------|-------|-----|
//! | item-count provider | [`ItemCount`] | report how many focusable items exist right now |
//! | focus mover | [`FocusMover`] | move real focus to the item at an index |
//!
//! Both traits are implemented for plain closures, so the common case needs
//! no extra types:
//!
//! ```
//! use roam_core::FocusIndexTracker;
//!
//! let items = ["Open", "Save", "Quit"];
//! let mut focused = None;
//! let mut tracker = FocusIndexTracker::new(|| items.len(), |i: usize| focused = Some(i));
//!
//! tracker.move_last();
//! assert_eq!(tracker.focused_index(), 2);
//! drop(tracker);
//! assert_eq!(focused, Some(2));
//! ```
//!
//! Keyboard handling, wrap-around and named navigation presets live in
//! `roam-widgets`.

pub mod log;
pub mod testing;
pub mod tracker;

pub use log::log_to_file;
pub use tracker::{FocusIndexTracker, FocusMover, ItemCount};
