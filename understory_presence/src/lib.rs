// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_presence --heading-base-level=0

//! Understory Presence: a deterministic, `no_std` mount/unmount state machine for animated UI.
//!
//! ## Overview
//!
//! Disclosure widgets (collapsibles, accordion items, popovers) want their
//! content to stay on screen while an exit animation plays, and to disappear
//! right away when there is nothing to animate.
//! [`Presence`](crate::presence::Presence) tracks that lifecycle as an explicit
//! state machine, independent of any UI framework's render cycle.
//!
//! ## Inputs
//!
//! - An intent: "the caller wants the subtree visible", via
//!   [`Presence::set_present`](crate::presence::Presence::set_present).
//! - The rendered node, via [`Presence::set_node`](crate::presence::Presence::set_node).
//! - Animation events and fired callbacks, forwarded by the host.
//!
//! Everything the controller reads from or writes to the environment goes
//! through [`PresenceHost`](crate::types::PresenceHost), which extends the
//! [`AnimationObserver`](crate::types::AnimationObserver) subscription contract.
//!
//! ## States
//!
//! See [`machine`] for the transition table. The subtree must be rendered
//! while the state is `Mounted` or `UnmountSuspended`.
//!
//! ## Example
//!
//! ```
//! use understory_presence::machine::PresenceState;
//! use understory_presence::presence::Presence;
//! use understory_presence::types::{
//!     AnimationEvent, AnimationListeners, AnimationObserver, AnimationSnapshot, CallbackId,
//!     PresenceHost,
//! };
//!
//! /// A host whose single node always reports the same animation.
//! struct Host {
//!     animation: &'static str,
//! }
//!
//! impl AnimationObserver<u32> for Host {
//!     fn observe(&mut self, _node: &u32, _listeners: AnimationListeners) {}
//!     fn unobserve(&mut self, _node: &u32, _listeners: AnimationListeners) {}
//! }
//!
//! impl PresenceHost<u32> for Host {
//!     fn animation_snapshot(&self, _node: &u32) -> AnimationSnapshot {
//!         AnimationSnapshot::new(self.animation, false)
//!     }
//!     fn fill_mode(&self, _node: &u32) -> String { String::new() }
//!     fn set_fill_mode(&mut self, _node: &u32, _fill_mode: &str) {}
//!     fn schedule_callback(&mut self) -> CallbackId { CallbackId(0) }
//!     fn cancel_callback(&mut self, _callback: CallbackId) {}
//! }
//!
//! let mut host = Host { animation: "slide-down" };
//! let mut presence = Presence::new(true);
//! presence.set_node(Some(7), &mut host);
//! presence.on_animation_event(&AnimationEvent::start(7, "slide-down"), &mut host);
//!
//! // Closing switches the node's styles to an exit animation.
//! host.animation = "slide-up";
//! assert_eq!(presence.set_present(false, &mut host), PresenceState::UnmountSuspended);
//! assert!(presence.is_present());
//!
//! presence.on_animation_event(&AnimationEvent::end(7, "slide-up"), &mut host);
//! assert!(!presence.is_present());
//! ```
//!
//! ## Features
//!
//! - `trace`: enable [`Tracer`](crate::trace::Tracer) dispatch to a host-provided
//!   [`TraceSink`](crate::trace::TraceSink).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod machine;
pub mod presence;
pub mod trace;
pub mod types;
