//! **roam** -- roaming keyboard focus for terminal UIs.
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! ```toml
//! [dependencies]
//! roam = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`roam_core`] are available at the crate root
//!   ([`FocusIndexTracker`], [`ItemCount`], [`FocusMover`], [`log_to_file`],
//!   and the [`testing`] module).
//! * The [`widgets`] module re-exports everything from [`roam_widgets`]
//!   (focus zones, behaviors, key bindings).
//! * [`crossterm`] is re-exported so downstream crates build key events
//!   against the same version.
//!
//! # Quick start
//!
//! ```
//! use roam::crossterm::event::{KeyCode, KeyEvent};
//! use roam::widgets::{Behavior, KeyOutcome};
//!
//! let entries = ["New", "Open", "Quit"];
//! let mut highlighted = 0;
//! let mut menu = Behavior::Menu.focus_zone(|| entries.len(), |i: usize| highlighted = i);
//!
//! menu.receive_focus();
//! assert_eq!(menu.handle_key(&KeyEvent::from(KeyCode::Up)), KeyOutcome::Consumed);
//! drop(menu);
//! assert_eq!(entries[highlighted], "Quit");
//! ```

pub use roam_core::*;
pub mod widgets {
    pub use roam_widgets::*;
}

pub use crossterm;
