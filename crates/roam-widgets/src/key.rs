//! Key bindings for focus navigation, with help-display metadata.

use crate::focus_zone::Orientation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// A human-readable description of the action, shown in help displays.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    /// Modifiers that must be held alongside `code`. Extra modifiers on the
    /// event are tolerated.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for several key combinations.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Return whether the key event matches any of this binding's combinations.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// A key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// Trait for types that define key bindings, so a help line or overlay can
/// list them.
pub trait KeyMap {
    /// The most important bindings, for a one-line help hint.
    fn short_help(&self) -> Vec<&Binding>;
    /// Every binding, grouped by category.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// A navigation step a key press can request from a focus zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationAction {
    Previous,
    Next,
    First,
    Last,
}

/// The bindings a [`FocusZone`](crate::focus_zone::FocusZone) listens to.
///
/// Build one with [`for_orientation`](NavigationKeyMap::for_orientation) and
/// adjust individual bindings through the public fields.
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent};
/// use roam_widgets::focus_zone::Orientation;
/// use roam_widgets::key::{NavigationAction, NavigationKeyMap};
///
/// let keys = NavigationKeyMap::for_orientation(Orientation::Horizontal);
/// let right = KeyEvent::from(KeyCode::Right);
/// assert_eq!(keys.action_for(&right), Some(NavigationAction::Next));
/// assert_eq!(keys.action_for(&KeyEvent::from(KeyCode::Down)), None);
/// ```
#[derive(Debug, Clone)]
pub struct NavigationKeyMap {
    pub previous: Binding,
    pub next: Binding,
    pub first: Binding,
    pub last: Binding,
}

impl NavigationKeyMap {
    /// Arrow keys (and their vim equivalents) for the given axis, plus
    /// Home/`g` and End/`G`.
    pub fn for_orientation(orientation: Orientation) -> Self {
        let vertical = matches!(orientation, Orientation::Vertical | Orientation::Both);
        let horizontal = matches!(orientation, Orientation::Horizontal | Orientation::Both);

        let mut previous = Vec::new();
        let mut next = Vec::new();
        if vertical {
            previous.extend([KeyCode::Up, KeyCode::Char('k')].map(KeyCombination::new));
            next.extend([KeyCode::Down, KeyCode::Char('j')].map(KeyCombination::new));
        }
        if horizontal {
            previous.extend([KeyCode::Left, KeyCode::Char('h')].map(KeyCombination::new));
            next.extend([KeyCode::Right, KeyCode::Char('l')].map(KeyCombination::new));
        }

        Self {
            previous: Binding::with_keys(previous, "previous item"),
            next: Binding::with_keys(next, "next item"),
            first: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Home),
                    KeyCombination::new(KeyCode::Char('g')),
                ],
                "first item",
            ),
            last: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::End),
                    KeyCombination::new(KeyCode::Char('G')),
                ],
                "last item",
            ),
        }
    }

    /// Return the action bound to `event`, if any.
    ///
    /// Bindings are checked in the order previous, next, first, last; the
    /// first match wins.
    pub fn action_for(&self, event: &KeyEvent) -> Option<NavigationAction> {
        [
            (&self.previous, NavigationAction::Previous),
            (&self.next, NavigationAction::Next),
            (&self.first, NavigationAction::First),
            (&self.last, NavigationAction::Last),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(event))
        .map(|(_, action)| action)
    }
}

impl Default for NavigationKeyMap {
    fn default() -> Self {
        Self::for_orientation(Orientation::default())
    }
}

impl KeyMap for NavigationKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.previous, &self.next]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.previous, &self.next], vec![&self.first, &self.last]]
    }
}
