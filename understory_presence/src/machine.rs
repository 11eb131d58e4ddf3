// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presence transition table.
//!
//! | State              | Event          | Next state         |
//! |--------------------|----------------|--------------------|
//! | `Mounted`          | `Unmount`      | `Unmounted`        |
//! | `Mounted`          | `AnimationOut` | `UnmountSuspended` |
//! | `UnmountSuspended` | `Mount`        | `Mounted`          |
//! | `UnmountSuspended` | `AnimationEnd` | `Unmounted`        |
//! | `Unmounted`        | `Mount`        | `Mounted`          |
//!
//! Any other pair leaves the state unchanged.
//!
//! ```
//! use understory_presence::machine::{PresenceEvent, PresenceState};
//!
//! let s = PresenceState::initial(true);
//! assert_eq!(s.next(PresenceEvent::AnimationOut), Some(PresenceState::UnmountSuspended));
//! assert_eq!(s.next(PresenceEvent::Mount), None);
//! assert_eq!(s.apply(PresenceEvent::Mount), s);
//! ```

/// Lifecycle state of a presence-managed subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresenceState {
    /// Logically present and rendered.
    Mounted,
    /// Logically absent but still rendered while an exit animation runs.
    UnmountSuspended,
    /// Not rendered.
    Unmounted,
}

/// Input to the presence state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresenceEvent {
    /// The subtree should be shown.
    Mount,
    /// The subtree should be removed immediately.
    Unmount,
    /// The subtree should be removed once its exit animation finishes.
    AnimationOut,
    /// The exit animation finished (or can no longer finish).
    AnimationEnd,
}

impl PresenceState {
    /// State for a freshly created controller with the given intent.
    pub const fn initial(present: bool) -> Self {
        if present {
            Self::Mounted
        } else {
            Self::Unmounted
        }
    }

    /// The state `event` leads to, or `None` if the table has no entry for it.
    pub const fn next(self, event: PresenceEvent) -> Option<Self> {
        use PresenceEvent::*;
        match (self, event) {
            (Self::Mounted, Unmount) => Some(Self::Unmounted),
            (Self::Mounted, AnimationOut) => Some(Self::UnmountSuspended),
            (Self::UnmountSuspended, Mount) => Some(Self::Mounted),
            (Self::UnmountSuspended, AnimationEnd) => Some(Self::Unmounted),
            (Self::Unmounted, Mount) => Some(Self::Mounted),
            _ => None,
        }
    }

    /// Like [`next`](Self::next), staying put on unlisted events.
    pub const fn apply(self, event: PresenceEvent) -> Self {
        match self.next(event) {
            Some(next) => next,
            None => self,
        }
    }

    /// Whether the subtree must still be rendered in this state.
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Mounted | Self::UnmountSuspended)
    }
}
