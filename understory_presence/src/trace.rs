// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the presence controller.
//!
//! [`TraceSink`] has one method per diagnostic event, all defaulting to no-ops.
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`; hosts hand one out from
//! [`PresenceHost::tracer`](crate::types::PresenceHost::tracer).
//!
//! With the `trace` feature **off**, every `Tracer` method compiles to nothing.
//! With it **on**, each call is a single `Option` branch before dispatch.

use crate::machine::{PresenceEvent, PresenceState};
use crate::types::AnimationEventKind;

/// The controller decided which event an intent change maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntentEvent {
    /// New intent.
    pub present: bool,
    /// Event derived from the intent and the last animation snapshot.
    pub decided: PresenceEvent,
}

/// An event was fed into the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEvent {
    /// State before the event.
    pub from: PresenceState,
    /// The event.
    pub event: PresenceEvent,
    /// State after the event (equal to `from` when not applied).
    pub to: PresenceState,
    /// Whether the transition table had an entry for this pair.
    pub applied: bool,
}

/// Why an animation event was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// No node is attached.
    Detached,
    /// The event was dispatched on a different node (usually a descendant).
    ForeignTarget,
    /// The animation is not one of the node's current animations.
    NameMismatch,
}

/// An animation event was dropped without affecting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IgnoredAnimationEvent {
    /// Kind of the dropped event.
    pub kind: AnimationEventKind,
    /// Why it was dropped.
    pub reason: IgnoreReason,
}

/// Step of the fill-mode stabilization after an exit animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillModeEvent {
    /// Fill-mode forced to `forwards` and a restore callback scheduled.
    Held,
    /// Original fill-mode written back.
    Restored,
    /// Restore callback cancelled before it fired.
    Cancelled,
}

/// Receiver for controller diagnostics.
pub trait TraceSink {
    /// Called when an intent change is translated into a machine event.
    fn on_intent(&mut self, _e: &IntentEvent) {}
    /// Called for every event fed into the machine.
    fn on_transition(&mut self, _e: &TransitionEvent) {}
    /// Called when an animation event is dropped.
    fn on_ignored_animation(&mut self, _e: &IgnoredAnimationEvent) {}
    /// Called for each fill-mode stabilization step.
    fn on_fill_mode(&mut self, _e: FillModeEvent) {}
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`IntentEvent`].
    #[inline]
    pub fn intent(&mut self, e: &IntentEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_intent(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionEvent`].
    #[inline]
    pub fn transition(&mut self, e: &TransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IgnoredAnimationEvent`].
    #[inline]
    pub fn ignored_animation(&mut self, e: &IgnoredAnimationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_ignored_animation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FillModeEvent`].
    #[inline]
    pub fn fill_mode(&mut self, e: FillModeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_fill_mode(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
