//! Named keyboard-navigation presets for common container roles.

use crate::focus_zone::{FocusZone, FocusZoneOptions, Orientation};
use roam_core::tracker::{FocusMover, ItemCount};
use std::fmt;
use std::str::FromStr;

/// A keyboard-navigation preset.
///
/// ```
/// use roam_widgets::behavior::Behavior;
///
/// let menu: Behavior = "menu".parse().unwrap();
/// assert!(menu.focus_zone_options().circular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// A vertical list of actions. Arrow keys wrap around, handled keys stop
    /// there, and entering the menu always focuses its first entry.
    Menu,
    /// A group navigable with any arrow key, wrapping at both ends.
    Grid,
}

/// Errors that can occur while parsing a [`Behavior`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaviorError {
    #[error("unknown behavior: {0:?}")]
    Unknown(String),
}

impl Behavior {
    pub const ALL: [Behavior; 2] = [Behavior::Menu, Behavior::Grid];

    pub fn name(self) -> &'static str {
        match self {
            Behavior::Menu => "menu",
            Behavior::Grid => "grid",
        }
    }

    pub fn focus_zone_options(self) -> FocusZoneOptions {
        match self {
            Behavior::Menu => FocusZoneOptions {
                orientation: Orientation::Vertical,
                circular: true,
                consume_handled_keys: true,
                focus_first_on_enter: true,
            },
            Behavior::Grid => FocusZoneOptions {
                orientation: Orientation::Both,
                circular: true,
                ..Default::default()
            },
        }
    }

    /// Build a [`FocusZone`] configured with this preset.
    pub fn focus_zone<C, M>(self, count: C, mover: M) -> FocusZone<C, M>
    where
        C: ItemCount,
        M: FocusMover,
    {
        FocusZone::new(count, mover, self.focus_zone_options())
    }
}

impl FromStr for Behavior {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Behavior::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BehaviorError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus_zone::KeyOutcome;
    use crossterm::event::{KeyCode, KeyEvent};
    use roam_core::testing::FocusRecorder;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("menu".parse::<Behavior>(), Ok(Behavior::Menu));
        assert_eq!(" Grid ".parse::<Behavior>(), Ok(Behavior::Grid));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "tree".parse::<Behavior>().unwrap_err();
        assert_eq!(err, BehaviorError::Unknown("tree".into()));
        assert_eq!(err.to_string(), "unknown behavior: \"tree\"");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for behavior in Behavior::ALL {
            assert_eq!(behavior.to_string().parse::<Behavior>(), Ok(behavior));
        }
    }

    #[test]
    fn menu_wraps_consumes_and_starts_at_top() {
        let rec = FocusRecorder::new();
        let mut menu = Behavior::Menu.focus_zone(|| 4usize, rec.clone());

        menu.sync(2);
        menu.receive_focus();
        assert_eq!(menu.focused_index(), 0);

        assert_eq!(menu.handle_key(&KeyEvent::from(KeyCode::Up)), KeyOutcome::Consumed);
        assert_eq!(menu.focused_index(), 3);
        assert_eq!(rec.calls(), vec![0, 3]);
    }

    #[test]
    fn grid_takes_every_arrow_and_lets_keys_bubble() {
        let rec = FocusRecorder::new();
        let mut grid = Behavior::Grid.focus_zone(|| 3usize, rec.clone());

        assert_eq!(grid.handle_key(&KeyEvent::from(KeyCode::Right)), KeyOutcome::Handled);
        assert_eq!(grid.handle_key(&KeyEvent::from(KeyCode::Down)), KeyOutcome::Handled);
        assert_eq!(grid.handle_key(&KeyEvent::from(KeyCode::Down)), KeyOutcome::Handled);
        assert_eq!(grid.focused_index(), 0);

        grid.sync(1);
        grid.receive_focus();
        assert_eq!(rec.calls(), vec![1, 2, 0, 1]);
    }
}
