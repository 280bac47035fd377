//! Keyboard-driven roaming focus over a group of items.
//!
//! A [`FocusZone`] wraps a [`FocusIndexTracker`] and adds the parts the
//! tracker leaves to its caller: mapping key events to moves, optional
//! wrap-around at either end, and what happens when focus enters the group.

use crate::key::{NavigationAction, NavigationKeyMap};
use crossterm::event::{KeyEvent, KeyEventKind};
use roam_core::tracker::{FocusIndexTracker, FocusMover, ItemCount};
use std::fmt;

/// Which arrow keys move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Up/Down.
    #[default]
    Vertical,
    /// Left/Right.
    Horizontal,
    /// All four arrows.
    Both,
}

/// Configuration options for a [`FocusZone`].
///
/// Use struct update syntax to override only what you need:
///
/// ```
/// use roam_widgets::focus_zone::{FocusZoneOptions, Orientation};
///
/// let options = FocusZoneOptions {
///     orientation: Orientation::Horizontal,
///     circular: true,
///     ..Default::default()
/// };
/// assert!(!options.consume_handled_keys);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusZoneOptions {
    /// Selects the default arrow-key bindings.
    pub orientation: Orientation,
    /// Wrap from the last item to the first and back.
    pub circular: bool,
    /// Report handled keys as [`KeyOutcome::Consumed`] so the caller stops
    /// routing them.
    pub consume_handled_keys: bool,
    /// Always focus the first item when focus enters the zone, instead of
    /// the item that had focus last time.
    pub focus_first_on_enter: bool,
}

impl Default for FocusZoneOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            circular: false,
            consume_handled_keys: false,
            focus_first_on_enter: false,
        }
    }
}

/// What a [`FocusZone`] did with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus moved and the key should go no further.
    Consumed,
    /// Focus moved; the caller may still pass the key on.
    Handled,
    /// The key is not a navigation key here, or there was nothing to focus.
    Ignored,
}

impl KeyOutcome {
    /// Returns `true` if focus moved.
    pub fn is_handled(self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Roaming keyboard focus for one container.
///
/// Owns exactly one [`FocusIndexTracker`]; create the zone alongside the
/// container and drop it with the container.
///
/// # Example
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent};
/// use roam_core::testing::FocusRecorder;
/// use roam_widgets::focus_zone::{FocusZone, FocusZoneOptions, KeyOutcome};
///
/// let recorder = FocusRecorder::new();
/// let options = FocusZoneOptions { circular: true, ..Default::default() };
/// let mut zone = FocusZone::new(|| 3usize, recorder.clone(), options);
///
/// assert_eq!(zone.handle_key(&KeyEvent::from(KeyCode::Up)), KeyOutcome::Handled);
/// assert_eq!(zone.focused_index(), 2); // wrapped to the last item
/// assert_eq!(zone.handle_key(&KeyEvent::from(KeyCode::Tab)), KeyOutcome::Ignored);
/// assert_eq!(recorder.calls(), vec![2]);
/// ```
pub struct FocusZone<C, M> {
    tracker: FocusIndexTracker<C, M>,
    options: FocusZoneOptions,
    keymap: NavigationKeyMap,
}

impl<C, M> FocusZone<C, M>
where
    C: ItemCount,
    M: FocusMover,
{
    /// Create a zone focused on index 0, with key bindings for
    /// `options.orientation`.
    pub fn new(count: C, mover: M, options: FocusZoneOptions) -> Self {
        Self {
            tracker: FocusIndexTracker::new(count, mover),
            keymap: NavigationKeyMap::for_orientation(options.orientation),
            options,
        }
    }

    /// Replace the key bindings.
    pub fn with_keymap(mut self, keymap: NavigationKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn options(&self) -> &FocusZoneOptions {
        &self.options
    }

    pub fn keymap(&self) -> &NavigationKeyMap {
        &self.keymap
    }

    pub fn tracker(&self) -> &FocusIndexTracker<C, M> {
        &self.tracker
    }

    /// Return the index of the item that has (or last had) focus.
    pub fn focused_index(&self) -> usize {
        self.tracker.focused_index()
    }

    /// Record that focus moved to `index` through some other path.
    ///
    /// The focus mover is not called and `index` is not bounds-checked.
    pub fn sync(&mut self, index: usize) {
        self.tracker.sync_focused_index(index);
    }

    /// Route a key event. Key releases are always ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }
        let Some(action) = self.keymap.action_for(key) else {
            return KeyOutcome::Ignored;
        };
        tracing::debug!(?action, code = ?key.code, "navigation key");

        if !self.apply(action) {
            KeyOutcome::Ignored
        } else if self.options.consume_handled_keys {
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Handled
        }
    }

    /// Perform a navigation action directly.
    ///
    /// Returns `false` when the zone has no items, in which case nothing
    /// moved and the focus mover was not called.
    pub fn apply(&mut self, action: NavigationAction) -> bool {
        let count = self.tracker.item_count();
        if count == 0 {
            return false;
        }

        let current = self.tracker.focused_index();
        match action {
            NavigationAction::Previous if self.options.circular && current == 0 => {
                tracing::debug!(to = count - 1, "wrapping to last item");
                self.tracker.move_last();
            }
            NavigationAction::Next if self.options.circular && current >= count - 1 => {
                tracing::debug!("wrapping to first item");
                self.tracker.move_first();
            }
            NavigationAction::Previous => self.tracker.move_previous(),
            NavigationAction::Next => self.tracker.move_next(),
            NavigationAction::First => self.tracker.move_first(),
            NavigationAction::Last => self.tracker.move_last(),
        }
        true
    }

    /// Give focus to the zone, for example when Tab lands on it.
    ///
    /// Focuses the first item if `focus_first_on_enter` is set, otherwise
    /// the item that had focus when the zone was last left.
    pub fn receive_focus(&mut self) {
        if self.options.focus_first_on_enter {
            self.tracker.move_first();
        } else {
            self.tracker.refocus();
        }
    }
}

impl<C, M> fmt::Debug for FocusZone<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusZone")
            .field("tracker", &self.tracker)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use roam_core::testing::FocusRecorder;
    use std::cell::Cell;
    use std::rc::Rc;

    fn zone(
        count: usize,
        options: FocusZoneOptions,
    ) -> (FocusZone<impl ItemCount, FocusRecorder>, FocusRecorder) {
        let recorder = FocusRecorder::new();
        (FocusZone::new(move || count, recorder.clone(), options), recorder)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn circular() -> FocusZoneOptions {
        FocusZoneOptions {
            circular: true,
            ..Default::default()
        }
    }

    #[test]
    fn arrows_move_focus() {
        let (mut z, rec) = zone(4, FocusZoneOptions::default());
        assert_eq!(z.handle_key(&press(KeyCode::Down)), KeyOutcome::Handled);
        assert_eq!(z.handle_key(&press(KeyCode::Down)), KeyOutcome::Handled);
        assert_eq!(z.handle_key(&press(KeyCode::Up)), KeyOutcome::Handled);
        assert_eq!(z.focused_index(), 1);
        assert_eq!(rec.calls(), vec![1, 2, 1]);
    }

    #[test]
    fn home_and_end_jump() {
        let (mut z, rec) = zone(4, FocusZoneOptions::default());
        z.handle_key(&press(KeyCode::End));
        assert_eq!(z.focused_index(), 3);
        z.handle_key(&press(KeyCode::Home));
        assert_eq!(z.focused_index(), 0);
        assert_eq!(rec.calls(), vec![3, 0]);
    }

    #[test]
    fn non_circular_clamps_and_reasserts() {
        let (mut z, rec) = zone(3, FocusZoneOptions::default());
        z.handle_key(&press(KeyCode::Up));
        assert_eq!(z.focused_index(), 0);
        z.sync(2);
        z.handle_key(&press(KeyCode::Down));
        assert_eq!(z.focused_index(), 2);
        assert_eq!(rec.calls(), vec![0, 2]);
    }

    #[test]
    fn circular_wraps_both_ways() {
        let (mut z, rec) = zone(3, circular());
        z.handle_key(&press(KeyCode::Up));
        assert_eq!(z.focused_index(), 2);
        z.handle_key(&press(KeyCode::Down));
        assert_eq!(z.focused_index(), 0);
        assert_eq!(rec.calls(), vec![2, 0]);
    }

    #[test]
    fn circular_single_item_stays_put() {
        let (mut z, rec) = zone(1, circular());
        z.handle_key(&press(KeyCode::Down));
        z.handle_key(&press(KeyCode::Up));
        assert_eq!(z.focused_index(), 0);
        assert_eq!(rec.calls(), vec![0, 0]);
    }

    #[test]
    fn empty_zone_ignores_navigation() {
        let (mut z, rec) = zone(0, circular());
        for code in [KeyCode::Up, KeyCode::Down, KeyCode::Home, KeyCode::End] {
            assert_eq!(z.handle_key(&press(code)), KeyOutcome::Ignored);
        }
        z.receive_focus();
        assert!(!rec.was_called());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let (mut z, rec) = zone(3, FocusZoneOptions::default());
        assert_eq!(z.handle_key(&press(KeyCode::Left)), KeyOutcome::Ignored);
        assert_eq!(z.handle_key(&press(KeyCode::Enter)), KeyOutcome::Ignored);
        assert!(!rec.was_called());
    }

    #[test]
    fn key_release_is_ignored() {
        let (mut z, rec) = zone(3, FocusZoneOptions::default());
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(z.handle_key(&release), KeyOutcome::Ignored);
        assert!(!rec.was_called());
    }

    #[test]
    fn consume_option_changes_outcome() {
        let options = FocusZoneOptions {
            consume_handled_keys: true,
            ..Default::default()
        };
        let (mut z, _) = zone(3, options);
        let outcome = z.handle_key(&press(KeyCode::Down));
        assert_eq!(outcome, KeyOutcome::Consumed);
        assert!(outcome.is_handled());
        assert!(!KeyOutcome::Ignored.is_handled());
    }

    #[test]
    fn horizontal_orientation_uses_left_right() {
        let options = FocusZoneOptions {
            orientation: Orientation::Horizontal,
            ..Default::default()
        };
        let (mut z, _) = zone(3, options);
        assert_eq!(z.handle_key(&press(KeyCode::Down)), KeyOutcome::Ignored);
        z.handle_key(&press(KeyCode::Right));
        assert_eq!(z.focused_index(), 1);
    }

    #[test]
    fn custom_keymap_replaces_defaults() {
        let mut keymap = NavigationKeyMap::default();
        keymap.next = keymap.next.enabled(false);
        let (z, _) = zone(3, FocusZoneOptions::default());
        let mut z = z.with_keymap(keymap);
        assert_eq!(z.handle_key(&press(KeyCode::Down)), KeyOutcome::Ignored);
        assert!(!z.keymap().next.enabled);
    }

    #[test]
    fn receive_focus_restores_last_item() {
        let (mut z, rec) = zone(5, FocusZoneOptions::default());
        z.sync(3);
        z.receive_focus();
        assert_eq!(rec.calls(), vec![3]);
    }

    #[test]
    fn receive_focus_can_force_first_item() {
        let options = FocusZoneOptions {
            focus_first_on_enter: true,
            ..Default::default()
        };
        let (mut z, rec) = zone(5, options);
        z.sync(3);
        z.receive_focus();
        assert_eq!(z.focused_index(), 0);
        assert_eq!(rec.calls(), vec![0]);
    }

    #[test]
    fn wrap_uses_live_item_count() {
        let count = Rc::new(Cell::new(5usize));
        let shared = Rc::clone(&count);
        let rec = FocusRecorder::new();
        let mut z = FocusZone::new(move || shared.get(), rec.clone(), circular());

        z.sync(2);
        count.set(3);
        // Index 2 is now the last item, so Next wraps.
        z.apply(NavigationAction::Next);
        assert_eq!(z.focused_index(), 0);
        assert_eq!(z.tracker().item_count(), 3);
    }
}
