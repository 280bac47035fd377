//! Keyboard navigation for the **roam** focus core.
//!
//! `roam-core` tracks a focused index; this crate decides when it moves.
//! A [`FocusZone`](focus_zone::FocusZone) turns [`crossterm`] key events into
//! tracker moves, adds wrap-around, and handles focus entering the group.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`focus_zone`] | [`FocusZone`](focus_zone::FocusZone), its options and key outcomes |
//! | [`behavior`] | Menu and grid presets for a focus zone |
//! | [`key`] | Key bindings, the navigation key map, help metadata |

pub mod behavior;
pub mod focus_zone;
pub mod key;

pub use behavior::{Behavior, BehaviorError};
pub use focus_zone::{FocusZone, FocusZoneOptions, KeyOutcome, Orientation};
pub use key::{Binding, KeyCombination, KeyMap, NavigationAction, NavigationKeyMap};
