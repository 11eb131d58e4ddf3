// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing types: animation snapshots, animation events, listener sets, and host traits.
//!
//! ## Overview
//!
//! These types describe the boundary between the [`Presence`](crate::presence::Presence)
//! controller and the environment that renders nodes and runs animations.
//! The controller never touches a node directly; everything goes through a
//! [`PresenceHost`].

use alloc::string::String;

use crate::trace::Tracer;

/// Animation name reported when a node has no animation applied.
pub const ANIMATION_NONE: &str = "none";

/// Fill-mode value used to hold the last animation frame.
pub const FILL_MODE_FORWARDS: &str = "forwards";

/// The animation-related parts of a node's computed style, captured at one point in time.
///
/// Produced by [`PresenceHost::animation_snapshot`] and cached by the
/// controller between observations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationSnapshot {
    animation_name: String,
    display_none: bool,
}

impl Default for AnimationSnapshot {
    fn default() -> Self {
        Self {
            animation_name: String::from(ANIMATION_NONE),
            display_none: false,
        }
    }
}

impl AnimationSnapshot {
    /// Create a snapshot from a computed animation name and display flag.
    ///
    /// An empty name is normalized to [`ANIMATION_NONE`].
    pub fn new(animation_name: impl Into<String>, display_none: bool) -> Self {
        let mut animation_name = animation_name.into();
        if animation_name.trim().is_empty() {
            animation_name = String::from(ANIMATION_NONE);
        }
        Self {
            animation_name,
            display_none,
        }
    }

    /// The computed animation name (possibly a comma-separated list).
    pub fn animation_name(&self) -> &str {
        &self.animation_name
    }

    /// Whether the node's computed display is `none`.
    pub fn display_none(&self) -> bool {
        self.display_none
    }

    /// Whether any animation is applied.
    pub fn has_animation(&self) -> bool {
        self.animation_name != ANIMATION_NONE
    }

    /// Whether `name` is one of the animations in this snapshot.
    ///
    /// Computed styles report several animations as a comma-separated list;
    /// each entry is compared exactly after trimming whitespace.
    pub fn is_running(&self, name: &str) -> bool {
        self.has_animation() && self.animation_name.split(',').any(|n| n.trim() == name)
    }
}

/// Kind of animation lifecycle event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationEventKind {
    /// An animation started on the target.
    Start,
    /// An animation ran to completion.
    End,
    /// An animation was cancelled before completing.
    Cancel,
}

impl AnimationEventKind {
    /// The listener flag that subscribes to this kind of event.
    pub const fn listener(self) -> AnimationListeners {
        match self {
            Self::Start => AnimationListeners::START,
            Self::End => AnimationListeners::END,
            Self::Cancel => AnimationListeners::CANCEL,
        }
    }
}

bitflags::bitflags! {
    /// Set of animation listeners to install on a node.
    ///
    /// Passed to [`AnimationObserver::observe`] and [`AnimationObserver::unobserve`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnimationListeners: u8 {
        /// `animationstart`.
        const START  = 0b0000_0001;
        /// `animationend`.
        const END    = 0b0000_0010;
        /// `animationcancel`.
        const CANCEL = 0b0000_0100;
    }
}

/// An animation event delivered by the host.
///
/// `target` is the node the event was dispatched on. Events bubbling up from
/// descendants of the tracked node carry the descendant as their target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationEvent<N> {
    /// Which lifecycle event this is.
    pub kind: AnimationEventKind,
    /// Node the animation ran on.
    pub target: N,
    /// Name of the animation that started, ended, or was cancelled.
    pub animation_name: String,
}

impl<N> AnimationEvent<N> {
    /// An `animationstart` event.
    pub fn start(target: N, animation_name: impl Into<String>) -> Self {
        Self {
            kind: AnimationEventKind::Start,
            target,
            animation_name: animation_name.into(),
        }
    }

    /// An `animationend` event.
    pub fn end(target: N, animation_name: impl Into<String>) -> Self {
        Self {
            kind: AnimationEventKind::End,
            target,
            animation_name: animation_name.into(),
        }
    }

    /// An `animationcancel` event.
    pub fn cancel(target: N, animation_name: impl Into<String>) -> Self {
        Self {
            kind: AnimationEventKind::Cancel,
            target,
            animation_name: animation_name.into(),
        }
    }
}

/// Handle for a one-shot callback scheduled through [`PresenceHost::schedule_callback`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(pub u64);

/// Subscribe to animation events on a node.
///
/// The host delivers matching events back to the controller through
/// [`Presence::on_animation_event`](crate::presence::Presence::on_animation_event).
/// Filtering by target and animation name is the controller's job.
pub trait AnimationObserver<N> {
    /// Install the given listeners on `node`.
    fn observe(&mut self, node: &N, listeners: AnimationListeners);
    /// Remove the given listeners from `node`.
    fn unobserve(&mut self, node: &N, listeners: AnimationListeners);
}

/// Everything the presence controller needs from its environment.
pub trait PresenceHost<N>: AnimationObserver<N> {
    /// Read the node's current animation name and display state.
    fn animation_snapshot(&self, node: &N) -> AnimationSnapshot;

    /// Read the node's inline animation fill-mode.
    fn fill_mode(&self, node: &N) -> String;

    /// Overwrite the node's inline animation fill-mode.
    fn set_fill_mode(&mut self, node: &N, fill_mode: &str);

    /// Schedule a one-shot callback for the next turn of the host loop.
    ///
    /// When it fires, the host calls
    /// [`Presence::on_callback`](crate::presence::Presence::on_callback) with the returned id.
    fn schedule_callback(&mut self) -> CallbackId;

    /// Cancel a callback returned by [`PresenceHost::schedule_callback`] that has not fired yet.
    fn cancel_callback(&mut self, callback: CallbackId);

    /// Tracer for controller diagnostics. Discards everything by default.
    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::none()
    }
}
