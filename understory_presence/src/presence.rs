// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence controller: keep a subtree rendered until its exit animation completes.
//!
//! ## Usage
//!
//! 1) Create a [`Presence`] with the initial intent.
//! 2) Report the rendered node with [`Presence::set_node`] whenever it changes.
//! 3) Feed intent changes to [`Presence::set_present`].
//! 4) Forward animation events for observed nodes to [`Presence::on_animation_event`]
//!    and fired callbacks to [`Presence::on_callback`].
//! 5) Render the subtree while [`Presence::is_present`] (or [`Presence::should_render`]) is true.
//!
//! ## Exit animation detection
//!
//! When the intent turns false the controller looks at the node's current
//! animation name. No animation (or `display: none`) means the subtree is
//! removed at once. Otherwise it compares the current name against the name
//! recorded at the last animation start (or on entering `Mounted`, deferred
//! to the first attached node when none was attached yet); a change
//! means a new exit animation is running and the controller suspends the
//! unmount until that animation ends on the node itself.
//!
//! Two different exit animations sharing a name cannot be told apart.

use alloc::string::String;

use crate::machine::{PresenceEvent, PresenceState};
use crate::trace::{
    FillModeEvent, IgnoreReason, IgnoredAnimationEvent, IntentEvent, TransitionEvent,
};
use crate::types::{
    ANIMATION_NONE, AnimationEvent, AnimationEventKind, AnimationListeners, AnimationSnapshot,
    CallbackId, FILL_MODE_FORWARDS, PresenceHost,
};

/// Mount/unmount state machine for one presence-managed subtree.
///
/// `N` is the host's node handle. The controller compares handles for
/// identity but never owns the node behind them.
#[derive(Clone, Debug)]
pub struct Presence<N> {
    state: PresenceState,
    node: Option<N>,
    styles: AnimationSnapshot,
    prev_present: bool,
    // Animation name at the last animation start or entry into `Mounted`.
    prev_animation_name: String,
    // Entered `Mounted` with no node; record the name once one is attached.
    entry_name_pending: bool,
    pending_fill: Option<PendingFill<N>>,
}

#[derive(Clone, Debug)]
struct PendingFill<N> {
    callback: CallbackId,
    node: N,
    original: String,
}

impl<N: Clone + PartialEq> Presence<N> {
    /// Create a controller for the given initial intent.
    pub fn new(present: bool) -> Self {
        Self {
            state: PresenceState::initial(present),
            node: None,
            styles: AnimationSnapshot::default(),
            prev_present: present,
            prev_animation_name: String::from(ANIMATION_NONE),
            entry_name_pending: present,
            pending_fill: None,
        }
    }

    /// Current machine state.
    pub fn state(&self) -> PresenceState {
        self.state
    }

    /// Whether the subtree must still be rendered.
    pub fn is_present(&self) -> bool {
        self.state.is_present()
    }

    /// Whether to render the subtree, honoring a caller's force-mount request.
    pub fn should_render(&self, force_mount: bool) -> bool {
        force_mount || self.is_present()
    }

    /// The last intent passed to [`set_present`](Self::set_present).
    pub fn intent(&self) -> bool {
        self.prev_present
    }

    /// The attached node, if any.
    pub fn node(&self) -> Option<&N> {
        self.node.as_ref()
    }

    /// The most recent animation snapshot.
    pub fn snapshot(&self) -> &AnimationSnapshot {
        &self.styles
    }

    /// Whether a fill-mode restore callback is outstanding.
    pub fn has_pending_callback(&self) -> bool {
        self.pending_fill.is_some()
    }

    /// Feed one event into the state machine and return the resulting state.
    ///
    /// Events without an entry in the transition table leave the state unchanged.
    pub fn send<H: PresenceHost<N>>(
        &mut self,
        event: PresenceEvent,
        host: &mut H,
    ) -> PresenceState {
        let from = self.state;
        let next = from.next(event);
        let to = next.unwrap_or(from);
        host.tracer().transition(&TransitionEvent {
            from,
            event,
            to,
            applied: next.is_some(),
        });
        if to != from {
            self.state = to;
            self.refresh_styles(host);
            self.prev_animation_name = if to == PresenceState::Mounted {
                String::from(self.styles.animation_name())
            } else {
                String::from(ANIMATION_NONE)
            };
            self.entry_name_pending = to == PresenceState::Mounted && self.node.is_none();
        }
        self.state
    }

    /// Update the intent. Does nothing if it is unchanged.
    pub fn set_present<H: PresenceHost<N>>(
        &mut self,
        present: bool,
        host: &mut H,
    ) -> PresenceState {
        let was_present = self.prev_present;
        if was_present == present {
            return self.state;
        }
        self.refresh_styles(host);
        let event = if present {
            PresenceEvent::Mount
        } else if !self.styles.has_animation() || self.styles.display_none() {
            PresenceEvent::Unmount
        } else {
            let is_animating = self.prev_animation_name != self.styles.animation_name();
            if was_present && is_animating {
                PresenceEvent::AnimationOut
            } else {
                PresenceEvent::Unmount
            }
        };
        host.tracer().intent(&IntentEvent {
            present,
            decided: event,
        });
        self.prev_present = present;
        self.send(event, host)
    }

    /// Attach, swap, or detach the rendered node.
    ///
    /// Attaching snapshots the node's animation style and installs listeners.
    /// Detaching removes listeners, cancels any pending fill-mode restore, and
    /// sends [`PresenceEvent::AnimationEnd`] since a detached node can never
    /// finish its animation.
    pub fn set_node<H: PresenceHost<N>>(&mut self, node: Option<N>, host: &mut H) -> PresenceState {
        if node.is_some() && self.node == node {
            return self.state;
        }
        self.release_node(host);
        match node {
            Some(node) => {
                self.styles = host.animation_snapshot(&node);
                host.observe(&node, AnimationListeners::all());
                self.node = Some(node);
                if self.entry_name_pending && self.state == PresenceState::Mounted {
                    self.prev_animation_name = String::from(self.styles.animation_name());
                    self.entry_name_pending = false;
                }
                self.state
            }
            None => {
                self.styles = AnimationSnapshot::default();
                self.send(PresenceEvent::AnimationEnd, host)
            }
        }
    }

    /// Handle an animation event the host observed.
    pub fn on_animation_event<H: PresenceHost<N>>(
        &mut self,
        event: &AnimationEvent<N>,
        host: &mut H,
    ) -> PresenceState {
        let Some(node) = self.node.clone() else {
            Self::ignore(event.kind, IgnoreReason::Detached, host);
            return self.state;
        };
        if event.target != node {
            Self::ignore(event.kind, IgnoreReason::ForeignTarget, host);
            return self.state;
        }
        self.refresh_styles(host);
        match event.kind {
            AnimationEventKind::Start => {
                self.prev_animation_name = String::from(self.styles.animation_name());
                self.entry_name_pending = false;
            }
            AnimationEventKind::End | AnimationEventKind::Cancel => {
                if !self.styles.is_running(&event.animation_name) {
                    Self::ignore(event.kind, IgnoreReason::NameMismatch, host);
                    return self.state;
                }
                self.send(PresenceEvent::AnimationEnd, host);
                if !self.prev_present {
                    self.hold_fill_mode(node, host);
                }
            }
        }
        self.state
    }

    /// Handle a fired callback. Returns `true` if it belonged to this controller.
    pub fn on_callback<H: PresenceHost<N>>(&mut self, callback: CallbackId, host: &mut H) -> bool {
        if self
            .pending_fill
            .as_ref()
            .is_none_or(|p| p.callback != callback)
        {
            return false;
        }
        let Some(pending) = self.pending_fill.take() else {
            return false;
        };
        if host.fill_mode(&pending.node) == FILL_MODE_FORWARDS {
            host.set_fill_mode(&pending.node, &pending.original);
            host.tracer().fill_mode(FillModeEvent::Restored);
        }
        true
    }

    /// Drop the node without touching the machine state.
    ///
    /// Removes listeners and cancels any pending callback. Call when the
    /// owning component goes away.
    pub fn teardown<H: PresenceHost<N>>(&mut self, host: &mut H) {
        self.release_node(host);
        self.styles = AnimationSnapshot::default();
    }

    fn release_node<H: PresenceHost<N>>(&mut self, host: &mut H) {
        self.cancel_pending_fill(host);
        if let Some(old) = self.node.take() {
            host.unobserve(&old, AnimationListeners::all());
        }
    }

    // Hold the final frame of the exit animation for one turn so the node
    // does not flash back to its pre-animation style before removal.
    fn hold_fill_mode<H: PresenceHost<N>>(&mut self, node: N, host: &mut H) {
        let original = match self.pending_fill.take() {
            Some(prev) => {
                host.cancel_callback(prev.callback);
                if prev.node == node {
                    prev.original
                } else {
                    host.fill_mode(&node)
                }
            }
            None => host.fill_mode(&node),
        };
        host.set_fill_mode(&node, FILL_MODE_FORWARDS);
        let callback = host.schedule_callback();
        host.tracer().fill_mode(FillModeEvent::Held);
        self.pending_fill = Some(PendingFill {
            callback,
            node,
            original,
        });
    }

    fn cancel_pending_fill<H: PresenceHost<N>>(&mut self, host: &mut H) {
        if let Some(pending) = self.pending_fill.take() {
            host.cancel_callback(pending.callback);
            host.tracer().fill_mode(FillModeEvent::Cancelled);
        }
    }

    fn refresh_styles<H: PresenceHost<N>>(&mut self, host: &H) {
        if let Some(node) = &self.node {
            self.styles = host.animation_snapshot(node);
        }
    }

    fn ignore<H: PresenceHost<N>>(kind: AnimationEventKind, reason: IgnoreReason, host: &mut H) {
        host.tracer()
            .ignored_animation(&IgnoredAnimationEvent { kind, reason });
    }
}
