// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving keyboard navigation across a row or column of triggers.
//!
//! ```
//! use understory_disclosure::nav::{Direction, NavKey, Orientation, next_index};
//!
//! // Vertical list of four triggers: Down from the last wraps to the first.
//! assert_eq!(next_index(3, 4, NavKey::ArrowDown, Orientation::Vertical, Direction::Ltr), 0);
//! // Horizontal keys do nothing in a vertical list.
//! assert_eq!(next_index(1, 4, NavKey::ArrowRight, Orientation::Vertical, Direction::Ltr), 1);
//! ```

/// Layout axis of the triggers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Triggers stacked top to bottom.
    #[default]
    Vertical,
    /// Triggers laid out side by side.
    Horizontal,
}

/// Reading direction, which decides what left and right mean.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Keys that move focus between triggers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// First trigger.
    Home,
    /// Last trigger.
    End,
    /// Next trigger in a vertical list.
    ArrowDown,
    /// Previous trigger in a vertical list.
    ArrowUp,
    /// Next (LTR) or previous (RTL) trigger in a horizontal list.
    ArrowRight,
    /// Previous (LTR) or next (RTL) trigger in a horizontal list.
    ArrowLeft,
}

impl NavKey {
    /// Parse a DOM-style key name. Returns `None` for keys that do not navigate.
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "Home" => Self::Home,
            "End" => Self::End,
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "ArrowRight" => Self::ArrowRight,
            "ArrowLeft" => Self::ArrowLeft,
            _ => return None,
        })
    }
}

/// Index of the trigger to focus after `key`, wrapping at both ends.
///
/// Keys on the other axis leave focus where it is. `count` must be non-zero
/// and `current < count`.
pub fn next_index(
    current: usize,
    count: usize,
    key: NavKey,
    orientation: Orientation,
    direction: Direction,
) -> usize {
    debug_assert!(current < count, "current index out of range");
    let last = count - 1;
    let forward = || if current >= last { 0 } else { current + 1 };
    let backward = || if current == 0 { last } else { current - 1 };
    let next = match (key, orientation) {
        (NavKey::Home, _) => 0,
        (NavKey::End, _) => last,
        (NavKey::ArrowDown, Orientation::Vertical) => forward(),
        (NavKey::ArrowUp, Orientation::Vertical) => backward(),
        (NavKey::ArrowRight, Orientation::Horizontal) => match direction {
            Direction::Ltr => forward(),
            Direction::Rtl => backward(),
        },
        (NavKey::ArrowLeft, Orientation::Horizontal) => match direction {
            Direction::Ltr => backward(),
            Direction::Rtl => forward(),
        },
        _ => current,
    };
    next % count
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: Orientation = Orientation::Vertical;
    const H: Orientation = Orientation::Horizontal;

    #[test]
    fn home_and_end() {
        assert_eq!(next_index(2, 5, NavKey::Home, V, Direction::Ltr), 0);
        assert_eq!(next_index(2, 5, NavKey::End, H, Direction::Rtl), 4);
    }

    #[test]
    fn vertical_wraps_both_ways() {
        assert_eq!(next_index(0, 3, NavKey::ArrowUp, V, Direction::Ltr), 2);
        assert_eq!(next_index(2, 3, NavKey::ArrowDown, V, Direction::Ltr), 0);
        assert_eq!(next_index(1, 3, NavKey::ArrowDown, V, Direction::Ltr), 2);
    }

    #[test]
    fn horizontal_respects_direction() {
        assert_eq!(next_index(1, 3, NavKey::ArrowRight, H, Direction::Ltr), 2);
        assert_eq!(next_index(1, 3, NavKey::ArrowRight, H, Direction::Rtl), 0);
        assert_eq!(next_index(0, 3, NavKey::ArrowLeft, H, Direction::Ltr), 2);
        assert_eq!(next_index(2, 3, NavKey::ArrowLeft, H, Direction::Rtl), 0);
    }

    #[test]
    fn off_axis_keys_stay_put() {
        assert_eq!(next_index(1, 3, NavKey::ArrowUp, H, Direction::Ltr), 1);
        assert_eq!(next_index(1, 3, NavKey::ArrowLeft, V, Direction::Ltr), 1);
    }

    #[test]
    fn single_trigger_always_itself() {
        for key in [NavKey::ArrowDown, NavKey::ArrowUp, NavKey::End, NavKey::Home] {
            assert_eq!(next_index(0, 1, key, V, Direction::Ltr), 0);
        }
    }

    #[test]
    fn parses_dom_key_names() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key("Tab"), None);
    }
}
