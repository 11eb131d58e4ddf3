// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated rendering host shared by the demos.
//!
//! Nodes are plain `u32` handles. Animations are played by hand: starting one
//! sets the node's computed animation name and queues an `animationstart`;
//! finishing one queues an `animationend`. Events are only queued for nodes
//! with a matching listener installed.

use std::collections::{HashMap, VecDeque};

use kurbo::Size;
use understory_disclosure::collapsible::{InlineAnimationStyles, MeasureHost};
use understory_presence::trace::{
    FillModeEvent, IgnoredAnimationEvent, IntentEvent, TraceSink, Tracer, TransitionEvent,
};
use understory_presence::types::{
    AnimationEvent, AnimationListeners, AnimationObserver, AnimationSnapshot, CallbackId,
    PresenceHost,
};

/// Prints every diagnostic to stdout.
#[derive(Debug, Default)]
pub struct PrintSink;

impl TraceSink for PrintSink {
    fn on_intent(&mut self, e: &IntentEvent) {
        println!("  intent present={} -> {:?}", e.present, e.decided);
    }
    fn on_transition(&mut self, e: &TransitionEvent) {
        if e.applied {
            println!("  {:?} --{:?}--> {:?}", e.from, e.event, e.to);
        } else {
            println!("  {:?} ignores {:?}", e.from, e.event);
        }
    }
    fn on_ignored_animation(&mut self, e: &IgnoredAnimationEvent) {
        println!("  dropped {:?}: {:?}", e.kind, e.reason);
    }
    fn on_fill_mode(&mut self, e: FillModeEvent) {
        println!("  fill-mode {e:?}");
    }
}

/// In-memory stand-in for a document with animated nodes.
#[derive(Debug, Default)]
pub struct SimHost {
    styles: HashMap<u32, AnimationSnapshot>,
    fill: HashMap<u32, String>,
    inline: HashMap<u32, InlineAnimationStyles>,
    sizes: HashMap<u32, Size>,
    listeners: HashMap<u32, AnimationListeners>,
    events: VecDeque<AnimationEvent<u32>>,
    callbacks: VecDeque<CallbackId>,
    next_callback: u64,
    sink: PrintSink,
}

impl SimHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node's computed animation without emitting events.
    pub fn set_animation(&mut self, node: u32, name: &str) {
        self.styles.insert(node, AnimationSnapshot::new(name, false));
    }

    /// Apply an animation to the node and queue `animationstart`.
    pub fn start_animation(&mut self, node: u32, name: &str) {
        self.set_animation(node, name);
        self.queue(AnimationEvent::start(node, name));
    }

    /// Queue `animationend` for the node's current animation.
    pub fn finish_animation(&mut self, node: u32) {
        let name = self
            .styles
            .get(&node)
            .map(|s| s.animation_name().to_owned())
            .unwrap_or_default();
        self.queue(AnimationEvent::end(node, name));
    }

    /// Queue an `animationend` dispatched on `target` (e.g. a descendant).
    pub fn finish_animation_on(&mut self, target: u32, name: &str) {
        self.events.push_back(AnimationEvent::end(target, name));
    }

    /// Set the laid-out size of a node.
    pub fn set_size(&mut self, node: u32, size: Size) {
        self.sizes.insert(node, size);
    }

    /// Drain queued animation events.
    pub fn take_events(&mut self) -> Vec<AnimationEvent<u32>> {
        self.events.drain(..).collect()
    }

    /// Drain callbacks that are due.
    pub fn take_callbacks(&mut self) -> Vec<CallbackId> {
        self.callbacks.drain(..).collect()
    }

    /// Current inline fill-mode of a node.
    pub fn node_fill_mode(&self, node: u32) -> &str {
        self.fill.get(&node).map_or("", String::as_str)
    }

    /// Whether any listener is installed on the node.
    pub fn is_observed(&self, node: u32) -> bool {
        self.listeners.contains_key(&node)
    }

    fn queue(&mut self, event: AnimationEvent<u32>) {
        let wanted = self
            .listeners
            .get(&event.target)
            .is_some_and(|l| l.contains(event.kind.listener()));
        if wanted {
            self.events.push_back(event);
        }
    }
}

impl AnimationObserver<u32> for SimHost {
    fn observe(&mut self, node: &u32, listeners: AnimationListeners) {
        *self
            .listeners
            .entry(*node)
            .or_insert(AnimationListeners::empty()) |= listeners;
    }

    fn unobserve(&mut self, node: &u32, listeners: AnimationListeners) {
        if let Some(l) = self.listeners.get_mut(node) {
            l.remove(listeners);
            if l.is_empty() {
                self.listeners.remove(node);
            }
        }
    }
}

impl PresenceHost<u32> for SimHost {
    fn animation_snapshot(&self, node: &u32) -> AnimationSnapshot {
        self.styles.get(node).cloned().unwrap_or_default()
    }

    fn fill_mode(&self, node: &u32) -> String {
        self.fill.get(node).cloned().unwrap_or_default()
    }

    fn set_fill_mode(&mut self, node: &u32, fill_mode: &str) {
        self.fill.insert(*node, fill_mode.to_owned());
    }

    fn schedule_callback(&mut self) -> CallbackId {
        self.next_callback += 1;
        let id = CallbackId(self.next_callback);
        self.callbacks.push_back(id);
        id
    }

    fn cancel_callback(&mut self, callback: CallbackId) {
        self.callbacks.retain(|c| *c != callback);
    }

    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::new(&mut self.sink)
    }
}

impl MeasureHost<u32> for SimHost {
    fn inline_animation_styles(&self, node: &u32) -> InlineAnimationStyles {
        self.inline.get(node).cloned().unwrap_or_default()
    }

    fn set_inline_animation_styles(&mut self, node: &u32, styles: &InlineAnimationStyles) {
        self.inline.insert(*node, styles.clone());
    }

    fn bounding_size(&self, node: &u32) -> Size {
        self.sizes.get(node).copied().unwrap_or(Size::ZERO)
    }
}
